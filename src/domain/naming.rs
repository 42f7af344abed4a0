use crate::domain::{ColorValue, Hsl, wrap_hue};

// "Pink" is never selected: six 60° sectors cover the whole wheel. It stays as
// the fallback slot of the lookup.
const HUE_LABELS: [&str; 7] = ["Red", "Orange", "Yellow", "Green", "Blue", "Purple", "Pink"];

const VIBRANT_SATURATION: f64 = 0.5;
const LIGHT_THRESHOLD: f64 = 0.7;
const DARK_THRESHOLD: f64 = 0.3;

pub fn generate_color_name(color: &ColorValue) -> String {
    color_name_for_hsl(color.to_hsl())
}

pub fn color_name_for_hsl(hsl: Hsl) -> String {
    let hue = hue_label(hsl.h);
    let saturation = if hsl.s > VIBRANT_SATURATION {
        "Vibrant"
    } else {
        "Muted"
    };
    let lightness = if hsl.l > LIGHT_THRESHOLD {
        "Light"
    } else if hsl.l < DARK_THRESHOLD {
        "Dark"
    } else {
        ""
    };

    format!("{lightness} {saturation} {hue}").trim().to_string()
}

pub fn hue_label(hue: f64) -> &'static str {
    let sector = (wrap_hue(hue) / 60.0).floor() as usize;
    HUE_LABELS
        .get(sector)
        .copied()
        .unwrap_or(HUE_LABELS[HUE_LABELS.len() - 1])
}
