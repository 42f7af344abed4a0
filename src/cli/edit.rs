use crate::app::PaletteEvent;
use crate::domain::{AdjustmentVector, PaletteError};
use crate::infra::ExportFormat;
use thiserror::Error;

/// One parsed line of an `edit` session.
#[derive(Clone, Debug, PartialEq)]
pub enum EditAction {
    Event(PaletteEvent),
    // count defaults to the current palette length, which only the session knows
    Regenerate { base_hue: f64, count: Option<usize> },
    Show,
    Ramps,
    Quit,
}

#[derive(Debug, Error)]
pub enum EditLineError {
    #[error("unknown edit command: {0}")]
    UnknownCommand(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("slots are numbered from 1")]
    ZeroSlot,

    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    #[error(transparent)]
    Palette(#[from] PaletteError),
}

/// Blank lines and `#` comments yield `None`. Slots are 1-based.
pub fn parse_edit_line(line: &str) -> Result<Option<EditAction>, EditLineError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = split_word(line);
    let mut words = rest.split_whitespace();
    let action = match command {
        "show" | "ls" => EditAction::Show,
        "ramps" => EditAction::Ramps,
        "quit" | "exit" => EditAction::Quit,
        "regen" => {
            let base_hue = parse_number(words.next(), "base hue")?;
            let count = match words.next() {
                Some(raw) => match raw.parse::<usize>() {
                    Ok(count) => Some(count),
                    Err(_) => return Err(EditLineError::InvalidNumber(raw.to_string())),
                },
                None => None,
            };
            EditAction::Regenerate { base_hue, count }
        }
        "adjust" => {
            let hue = parse_number(words.next(), "hue offset")?;
            let saturation = parse_number(words.next(), "saturation offset")?;
            let brightness = parse_number(words.next(), "brightness offset")?;
            let adjustment = AdjustmentVector::new(hue, saturation, brightness)?;
            EditAction::Event(PaletteEvent::SetAdjustment(adjustment))
        }
        "reset" => EditAction::Event(PaletteEvent::ResetAdjustment),
        "select" => {
            let (index, _) = parse_slot(rest)?;
            EditAction::Event(PaletteEvent::Select(index))
        }
        "replace" => {
            let (index, input) = parse_slot(rest)?;
            if input.is_empty() {
                return Err(EditLineError::MissingArgument("color"));
            }
            EditAction::Event(PaletteEvent::ReplaceColor {
                index,
                input: input.to_string(),
            })
        }
        "rename" => {
            let (index, name) = parse_slot(rest)?;
            if name.is_empty() {
                return Err(EditLineError::MissingArgument("name"));
            }
            EditAction::Event(PaletteEvent::Rename {
                index,
                name: name.to_string(),
            })
        }
        "shades" => EditAction::Event(PaletteEvent::ShowShades),
        "export" => {
            let format = match words.next() {
                Some(raw) => ExportFormat::parse(raw)
                    .ok_or_else(|| EditLineError::UnknownFormat(raw.to_string()))?,
                None => ExportFormat::default(),
            };
            EditAction::Event(PaletteEvent::Export(format))
        }
        other => return Err(EditLineError::UnknownCommand(other.to_string())),
    };
    Ok(Some(action))
}

fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

fn parse_number(raw: Option<&str>, what: &'static str) -> Result<f64, EditLineError> {
    let raw = raw.ok_or(EditLineError::MissingArgument(what))?;
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| EditLineError::InvalidNumber(raw.to_string()))
}

// Returns the 0-based index and the remainder of the line.
fn parse_slot(rest: &str) -> Result<(usize, &str), EditLineError> {
    let (raw, remainder) = split_word(rest);
    if raw.is_empty() {
        return Err(EditLineError::MissingArgument("slot"));
    }
    let slot = raw
        .parse::<usize>()
        .map_err(|_| EditLineError::InvalidNumber(raw.to_string()))?;
    let index = slot.checked_sub(1).ok_or(EditLineError::ZeroSlot)?;
    Ok((index, remainder))
}
