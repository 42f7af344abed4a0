use crate::domain::{PaletteEntry, PaletteError, parse_color_input};

pub const DEFAULT_SHADE_STEPS: usize = 5;
/// Lightness points (0–100 scale) between neighbouring shades.
pub const SHADE_STEP_PERCENT: f64 = 20.0;

/// Lighten offsets for a ramp of `steps` shades, centred on the base color.
pub fn shade_offsets(steps: usize) -> Vec<f64> {
    let middle = (steps / 2) as i64;
    (0..steps as i64)
        .map(|i| (i - middle) as f64 * SHADE_STEP_PERCENT)
        .collect()
}

/// Darkest first. Offsets that leave `[0, 100]` clamp, so ramps from
/// near-black or near-white bases repeat at the ends.
pub fn derive_shades(hex: &str, steps: usize) -> Result<Vec<String>, PaletteError> {
    if steps == 0 {
        return Err(PaletteError::EmptyPalette);
    }

    let base = parse_color_input(hex)?;
    Ok(shade_offsets(steps)
        .into_iter()
        .map(|offset| base.lighten(offset).to_hex_string())
        .collect())
}

pub fn derive_palette_shades(
    palette: &[PaletteEntry],
    steps: usize,
) -> Result<Vec<Vec<String>>, PaletteError> {
    if palette.is_empty() {
        return Err(PaletteError::EmptyPalette);
    }
    palette
        .iter()
        .map(|entry| derive_shades(&entry.hex, steps))
        .collect()
}
