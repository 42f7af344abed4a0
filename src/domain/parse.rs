use crate::domain::{ColorValue, Hsl, Hsv, Rgb};
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex length: {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit: {0:?}")]
    InvalidHexDigit(char),

    #[error("unrecognized color function: {0}")]
    InvalidFunction(String),

    #[error("expected {expected} components, got {actual}")]
    ComponentCount { expected: usize, actual: usize },

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("component out of range: {0}")]
    OutOfRange(String),
}

/// Parses hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `#` optional) or a
/// CSS-like `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hsv()`, `hsva()` form.
pub fn parse_color(input: &str) -> Result<ColorValue, ColorParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = trimmed.to_ascii_lowercase();
    let Some((func, rest)) = lower.split_once('(') else {
        return parse_hex(trimmed);
    };
    let Some(args) = rest.strip_suffix(')') else {
        return Err(ColorParseError::InvalidFunction(trimmed.to_string()));
    };

    let (components, alpha) = split_components(args)?;
    let color = match func.trim() {
        "rgb" | "rgba" => {
            expect_count(&components, 3)?;
            ColorValue::from_rgb(Rgb {
                r: parse_rgb_channel(components[0])?,
                g: parse_rgb_channel(components[1])?,
                b: parse_rgb_channel(components[2])?,
            })?
        }
        "hsl" | "hsla" => {
            expect_count(&components, 3)?;
            ColorValue::from_hsl(Hsl {
                h: parse_hue(components[0])?,
                s: parse_fraction(components[1])?,
                l: parse_fraction(components[2])?,
            })?
        }
        "hsv" | "hsva" | "hsb" => {
            expect_count(&components, 3)?;
            ColorValue::from_hsv(Hsv {
                h: parse_hue(components[0])?,
                s: parse_fraction(components[1])?,
                v: parse_fraction(components[2])?,
            })?
        }
        other => return Err(ColorParseError::InvalidFunction(other.to_string())),
    };

    match alpha {
        Some(alpha) => Ok(color.with_alpha(parse_fraction(alpha)?)),
        None => Ok(color),
    }
}

pub fn parse_hex(hex: &str) -> Result<ColorValue, ColorParseError> {
    let digits = hex
        .trim()
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ColorParseError::InvalidHexDigit(c)))
        .collect::<Result<Vec<u8>, _>>()?;

    match *digits.as_slice() {
        [r, g, b] => Ok(ColorValue::from_rgb8(r * 17, g * 17, b * 17)),
        [r, g, b, a] => Ok(ColorValue::from_rgba8(r * 17, g * 17, b * 17, a * 17)),
        [r1, r2, g1, g2, b1, b2] => Ok(ColorValue::from_rgb8(
            r1 << 4 | r2,
            g1 << 4 | g2,
            b1 << 4 | b2,
        )),
        [r1, r2, g1, g2, b1, b2, a1, a2] => Ok(ColorValue::from_rgba8(
            r1 << 4 | r2,
            g1 << 4 | g2,
            b1 << 4 | b2,
            a1 << 4 | a2,
        )),
        _ => Err(ColorParseError::InvalidLength(digits.len())),
    }
}

impl std::str::FromStr for ColorValue {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for ColorValue {
    type Error = ColorParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}

// Accepts `a, b, c[, alpha]` and `a b c[ / alpha]`.
fn split_components(args: &str) -> Result<(Vec<&str>, Option<&str>), ColorParseError> {
    let (body, slash_alpha) = match args.split_once('/') {
        Some((body, alpha)) => (body, Some(alpha.trim())),
        None => (args, None),
    };

    let mut components: Vec<&str> = if body.contains(',') {
        body.split(',').map(str::trim).collect()
    } else {
        body.split_whitespace().collect()
    };
    if components.iter().any(|c| c.is_empty()) {
        return Err(ColorParseError::InvalidFunction(args.to_string()));
    }

    let alpha = match slash_alpha {
        Some(alpha) if alpha.is_empty() => {
            return Err(ColorParseError::InvalidFunction(args.to_string()));
        }
        Some(alpha) => Some(alpha),
        None if components.len() == 4 => components.pop(),
        None => None,
    };

    Ok((components, alpha))
}

fn expect_count(components: &[&str], expected: usize) -> Result<(), ColorParseError> {
    if components.len() != expected {
        return Err(ColorParseError::ComponentCount {
            expected,
            actual: components.len(),
        });
    }
    Ok(())
}

fn parse_number(raw: &str) -> Result<f64, ColorParseError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ColorParseError::InvalidNumber(raw.to_string()))?;
    if !value.is_finite() {
        return Err(ColorParseError::InvalidNumber(raw.to_string()));
    }
    Ok(value)
}

fn in_unit_range(value: f64, raw: &str) -> Result<f64, ColorParseError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ColorParseError::OutOfRange(raw.to_string()));
    }
    Ok(value)
}

// 0–255 or a percentage.
fn parse_rgb_channel(raw: &str) -> Result<f64, ColorParseError> {
    match raw.strip_suffix('%') {
        Some(pct) => in_unit_range(parse_number(pct)? / 100.0, raw),
        None => in_unit_range(parse_number(raw)? / 255.0, raw),
    }
}

// Any angle, with optional `deg` suffix; wrapped later by the conversion.
fn parse_hue(raw: &str) -> Result<f64, ColorParseError> {
    let number = raw.strip_suffix("deg").unwrap_or(raw);
    parse_number(number)
}

// A percentage (`70%`) or a fraction in `[0, 1]` (`0.7`).
fn parse_fraction(raw: &str) -> Result<f64, ColorParseError> {
    match raw.strip_suffix('%') {
        Some(pct) => in_unit_range(parse_number(pct)? / 100.0, raw),
        None => in_unit_range(parse_number(raw)?, raw),
    }
}
