use crate::domain::{
    AdjustmentVector, FixedHue, PaletteEntry, PaletteError, apply_adjustment, derive_shades,
    generate_initial_palette, rename_entry, replace_entry_color,
};
use crate::infra::ExportFormat;

/// Caller-owned editor state. The domain functions never keep a reference to
/// it; every event produces the next model.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteModel {
    pub entries: Vec<PaletteEntry>,
    pub adjustment: AdjustmentVector,
    pub selected: usize,
    pub shade_steps: usize,
    pub shades: Option<Vec<String>>,
    pub notice: Option<String>,
}

impl PaletteModel {
    pub fn new(entries: Vec<PaletteEntry>, shade_steps: usize) -> Self {
        Self {
            entries,
            adjustment: AdjustmentVector::default(),
            selected: 0,
            shade_steps,
            shades: None,
            notice: None,
        }
    }

    pub fn selected_entry(&self) -> Option<&PaletteEntry> {
        self.entries.get(self.selected)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PaletteEvent {
    Regenerate { base_hue: f64, count: usize },
    SetAdjustment(AdjustmentVector),
    ResetAdjustment,
    Select(usize),
    ReplaceColor { index: usize, input: String },
    Rename { index: usize, name: String },
    ShowShades,
    Export(ExportFormat),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PaletteCommand {
    None,
    Export {
        entries: Vec<PaletteEntry>,
        format: ExportFormat,
    },
}

pub fn update(model: PaletteModel, event: PaletteEvent) -> (PaletteModel, PaletteCommand) {
    let mut model = model;
    model.notice = None;

    let result = match event {
        PaletteEvent::Regenerate { base_hue, count } => {
            generate_initial_palette(count, &mut FixedHue(base_hue)).map(|entries| {
                model.entries = entries;
                model.adjustment = AdjustmentVector::default();
                model.selected = 0;
                model.shades = None;
            })
        }
        PaletteEvent::SetAdjustment(adjustment) if adjustment.is_zero() => {
            model.adjustment = adjustment;
            Ok(())
        }
        PaletteEvent::SetAdjustment(adjustment) => {
            // Each tick compounds on the stored colors.
            apply_adjustment(&model.entries, &adjustment).map(|entries| {
                model.entries = entries;
                model.adjustment = adjustment;
                model.shades = None;
            })
        }
        PaletteEvent::ResetAdjustment => {
            model.adjustment = AdjustmentVector::default();
            Ok(())
        }
        PaletteEvent::Select(index) => {
            if index < model.entries.len() {
                model.selected = index;
                model.shades = None;
                Ok(())
            } else {
                Err(PaletteError::SlotOutOfRange {
                    index,
                    len: model.entries.len(),
                })
            }
        }
        PaletteEvent::ReplaceColor { index, input } => {
            replace_entry_color(&model.entries, index, &input).map(|entries| {
                model.entries = entries;
                model.shades = None;
            })
        }
        PaletteEvent::Rename { index, name } => {
            rename_entry(&model.entries, index, &name).map(|entries| model.entries = entries)
        }
        PaletteEvent::ShowShades => match model.selected_entry() {
            Some(entry) => derive_shades(&entry.hex, model.shade_steps)
                .map(|shades| model.shades = Some(shades)),
            None => Err(PaletteError::EmptyPalette),
        },
        PaletteEvent::Export(format) => {
            if model.entries.is_empty() {
                Err(PaletteError::EmptyPalette)
            } else {
                let command = PaletteCommand::Export {
                    entries: model.entries.clone(),
                    format,
                };
                return (model, command);
            }
        }
    };

    if let Err(error) = result {
        model.notice = Some(error.to_string());
    }
    (model, PaletteCommand::None)
}
