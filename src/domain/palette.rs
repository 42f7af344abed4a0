use crate::domain::{ColorParseError, ColorValue, Hsl, generate_color_name, parse_color, wrap_hue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PALETTE_SIZE: usize = 5;
pub const BASE_SATURATION: f64 = 0.7;
pub const BASE_LIGHTNESS: f64 = 0.5;
/// Hue distance between neighbouring slots, independent of palette size.
pub const HUE_STEP_DEGREES: f64 = 30.0;

pub const HUE_ADJUSTMENT_LIMIT: f64 = 180.0;
pub const PERCENT_ADJUSTMENT_LIMIT: f64 = 100.0;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("invalid color format {input:?}: {source}")]
    InvalidColorFormat {
        input: String,
        #[source]
        source: ColorParseError,
    },

    #[error("{component} adjustment out of range: {value}")]
    OutOfRangeAdjustment {
        component: AdjustmentComponent,
        value: f64,
    },

    #[error("palette is empty")]
    EmptyPalette,

    #[error("palette slot {index} out of range (len {len})")]
    SlotOutOfRange { index: usize, len: usize },
}

pub fn parse_color_input(input: &str) -> Result<ColorValue, PaletteError> {
    parse_color(input).map_err(|source| PaletteError::InvalidColorFormat {
        input: input.to_string(),
        source,
    })
}

/// One named slot. The four derived strings are computed together with `hex`
/// and are only ever replaced as a group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub hex: String,
    pub name: String,
    pub rgb: String,
    pub hsl: String,
    pub hsv: String,
    pub cmyk: String,
}

impl PaletteEntry {
    pub fn from_color(color: ColorValue) -> Self {
        // every view is derived from the same opaque 8-bit color the hex describes
        let color = color.quantize().with_alpha(1.0);
        Self {
            hex: color.to_hex_string(),
            name: generate_color_name(&color),
            rgb: color.to_rgb_string(),
            hsl: color.to_hsl_string(),
            hsv: color.to_hsv_string(),
            cmyk: color.to_cmyk_string(),
        }
    }

    pub fn color(&self) -> Result<ColorValue, PaletteError> {
        parse_color_input(&self.hex)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AdjustmentComponent {
    Hue,
    Saturation,
    Brightness,
}

impl AdjustmentComponent {
    pub fn label(self) -> &'static str {
        match self {
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Brightness => "brightness",
        }
    }

    fn limit(self) -> f64 {
        match self {
            Self::Hue => HUE_ADJUSTMENT_LIMIT,
            Self::Saturation | Self::Brightness => PERCENT_ADJUSTMENT_LIMIT,
        }
    }
}

impl std::fmt::Display for AdjustmentComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Hue offset in degrees, saturation and brightness offsets in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AdjustmentVector {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl AdjustmentVector {
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Result<Self, PaletteError> {
        let adjustment = Self {
            hue,
            saturation,
            brightness,
        };
        adjustment.validate()?;
        Ok(adjustment)
    }

    /// Out-of-range components are rejected, never clamped.
    pub fn validate(&self) -> Result<(), PaletteError> {
        for (component, value) in [
            (AdjustmentComponent::Hue, self.hue),
            (AdjustmentComponent::Saturation, self.saturation),
            (AdjustmentComponent::Brightness, self.brightness),
        ] {
            let limit = component.limit();
            if !value.is_finite() || !(-limit..=limit).contains(&value) {
                return Err(PaletteError::OutOfRangeAdjustment { component, value });
            }
        }
        Ok(())
    }

    pub fn is_zero(&self) -> bool {
        self.hue == 0.0 && self.saturation == 0.0 && self.brightness == 0.0
    }
}

/// Source of the random base hue for palette generation.
pub trait HueSource {
    /// Returns a hue in `[0, 360)`.
    fn next_hue(&mut self) -> f64;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedHue(pub f64);

impl HueSource for FixedHue {
    fn next_hue(&mut self) -> f64 {
        wrap_hue(self.0)
    }
}

pub fn generate_initial_palette<S: HueSource + ?Sized>(
    count: usize,
    source: &mut S,
) -> Result<Vec<PaletteEntry>, PaletteError> {
    if count == 0 {
        return Err(PaletteError::EmptyPalette);
    }

    let hue = source.next_hue();
    let base = ColorValue::from_hsl(Hsl {
        h: hue,
        s: BASE_SATURATION,
        l: BASE_LIGHTNESS,
    })
    .map_err(|source| PaletteError::InvalidColorFormat {
        input: format!("base hue {hue}"),
        source,
    })?;

    Ok((0..count)
        .map(|i| PaletteEntry::from_color(base.spin(i as f64 * HUE_STEP_DEGREES)))
        .collect())
}

pub fn adjust_color(color: ColorValue, adjustment: &AdjustmentVector) -> ColorValue {
    let hsl = color.to_hsl();
    ColorValue::from_hsl_clamped(Hsl {
        h: wrap_hue(hsl.h + adjustment.hue),
        s: (hsl.s + adjustment.saturation / 100.0).clamp(0.0, 1.0),
        l: (hsl.l + adjustment.brightness / 100.0).clamp(0.0, 1.0),
    })
}

/// Applies `adjustment` to each entry's currently stored hex.
///
/// Repeated calls compound: dragging a slider re-applies its value to the
/// previous result rather than to a fixed baseline.
pub fn apply_adjustment(
    palette: &[PaletteEntry],
    adjustment: &AdjustmentVector,
) -> Result<Vec<PaletteEntry>, PaletteError> {
    adjustment.validate()?;
    palette
        .iter()
        .map(|entry| {
            let color = entry.color()?;
            Ok(PaletteEntry::from_color(adjust_color(color, adjustment)))
        })
        .collect()
}

pub fn replace_entry_color(
    palette: &[PaletteEntry],
    index: usize,
    input: &str,
) -> Result<Vec<PaletteEntry>, PaletteError> {
    check_slot(palette, index)?;
    let color = parse_color_input(input)?;
    let mut next = palette.to_vec();
    next[index] = PaletteEntry::from_color(color);
    Ok(next)
}

pub fn rename_entry(
    palette: &[PaletteEntry],
    index: usize,
    name: &str,
) -> Result<Vec<PaletteEntry>, PaletteError> {
    check_slot(palette, index)?;
    let mut next = palette.to_vec();
    next[index].name = name.to_string();
    Ok(next)
}

fn check_slot(palette: &[PaletteEntry], index: usize) -> Result<(), PaletteError> {
    if index >= palette.len() {
        return Err(PaletteError::SlotOutOfRange {
            index,
            len: palette.len(),
        });
    }
    Ok(())
}
