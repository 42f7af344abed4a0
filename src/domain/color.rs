use crate::domain::ColorParseError;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Subtractive approximation, presentation only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// A single color stored as normalized sRGB channels plus alpha.
///
/// Every transformation returns a new value. HSL/HSV/CMYK views are derived
/// on demand from the channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorValue {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Default for ColorValue {
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

impl ColorValue {
    /// Builds an opaque color from channels in `[0, 1]`.
    pub fn from_rgb(rgb: Rgb) -> Result<Self, ColorParseError> {
        for (label, value) in [("r", rgb.r), ("g", rgb.g), ("b", rgb.b)] {
            check_unit(label, value)?;
        }
        Ok(Self::from_rgb_clamped(rgb))
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: f64::from(a) / 255.0,
        }
    }

    /// Any finite hue is accepted and wrapped. Saturation and lightness
    /// must lie in `[0, 1]`.
    pub fn from_hsl(hsl: Hsl) -> Result<Self, ColorParseError> {
        check_hue(hsl.h)?;
        check_unit("s", hsl.s)?;
        check_unit("l", hsl.l)?;
        Ok(Self::from_hsl_clamped(hsl))
    }

    pub fn from_hsv(hsv: Hsv) -> Result<Self, ColorParseError> {
        check_hue(hsv.h)?;
        check_unit("s", hsv.s)?;
        check_unit("v", hsv.v)?;
        Ok(Self::from_rgb_clamped(hsv_to_rgb(hsv)))
    }

    /// For components derived from an existing color, where rounding may
    /// drift just past the unit range.
    pub(crate) fn from_hsl_clamped(hsl: Hsl) -> Self {
        Self::from_rgb_clamped(hsl_to_rgb(hsl))
    }

    fn from_rgb_clamped(rgb: Rgb) -> Self {
        Self {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            a: 1.0,
        }
        .clamp()
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: clamp01(alpha),
            ..self
        }
    }

    pub fn alpha(self) -> f64 {
        self.a
    }

    pub fn to_rgb(self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        [channel_u8(self.r), channel_u8(self.g), channel_u8(self.b)]
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.to_rgb())
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.to_rgb())
    }

    pub fn to_cmyk(self) -> Cmyk {
        rgb_to_cmyk(self.to_rgb())
    }

    /// Rotates the hue by `degrees`, wrapping into `[0, 360)`.
    ///
    /// Channels are not snapped, so spinning back restores the hex exactly
    /// only for colors that already sit on 8-bit values.
    #[must_use]
    pub fn spin(self, degrees: f64) -> Self {
        let hsl = self.to_hsl();
        Self::from_hsl_clamped(Hsl {
            h: wrap_hue(hsl.h + degrees),
            ..hsl
        })
        .with_alpha(self.a)
    }

    /// Adds `percent` lightness points (0–100 scale), clamped.
    #[must_use]
    pub fn lighten(self, percent: f64) -> Self {
        let hsl = self.to_hsl();
        Self::from_hsl_clamped(Hsl {
            l: clamp01(hsl.l + percent / 100.0),
            ..hsl
        })
        .with_alpha(self.a)
    }

    /// Snaps every channel to its nearest 8-bit value.
    #[must_use]
    pub fn quantize(self) -> Self {
        let [r, g, b] = self.to_rgb8();
        Self::from_rgba8(r, g, b, channel_u8(self.a))
    }

    #[must_use]
    pub fn clamp(self) -> Self {
        Self {
            r: clamp01(self.r),
            g: clamp01(self.g),
            b: clamp01(self.b),
            a: clamp01(self.a),
        }
    }

    pub fn to_hex_string(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn to_hex8_string(self) -> String {
        format!("{}{:02x}", self.to_hex_string(), channel_u8(self.a))
    }

    pub fn to_rgb_string(self) -> String {
        let [r, g, b] = self.to_rgb8();
        if self.a < 1.0 {
            format!("rgba({r}, {g}, {b}, {})", format_alpha(self.a))
        } else {
            format!("rgb({r}, {g}, {b})")
        }
    }

    pub fn to_hsl_string(self) -> String {
        let Hsl { h, s, l } = self.to_hsl();
        let (h, s, l) = (round_hue(h), percent(s), percent(l));
        if self.a < 1.0 {
            format!("hsla({h}, {s}%, {l}%, {})", format_alpha(self.a))
        } else {
            format!("hsl({h}, {s}%, {l}%)")
        }
    }

    pub fn to_hsv_string(self) -> String {
        let Hsv { h, s, v } = self.to_hsv();
        let (h, s, v) = (round_hue(h), percent(s), percent(v));
        if self.a < 1.0 {
            format!("hsva({h}, {s}%, {v}%, {})", format_alpha(self.a))
        } else {
            format!("hsv({h}, {s}%, {v}%)")
        }
    }

    pub fn to_cmyk_string(self) -> String {
        let Cmyk { c, m, y, k } = self.to_cmyk();
        format!(
            "cmyk({}%, {}%, {}%, {}%)",
            percent(c),
            percent(m),
            percent(y),
            percent(k)
        )
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let Rgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    Hsl {
        h: hue_from_chroma(r, g, b, max, delta),
        s: clamp01(s),
        l,
    }
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = wrap_hue(hsl.h);
    let s = clamp01(hsl.s);
    let l = clamp01(hsl.l);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let m = l - c / 2.0;
    chroma_to_rgb(h, c, m)
}

pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let Rgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta == 0.0 {
        return Hsv {
            h: 0.0,
            s: 0.0,
            v: max,
        };
    }

    Hsv {
        h: hue_from_chroma(r, g, b, max, delta),
        s: delta / max,
        v: max,
    }
}

pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = wrap_hue(hsv.h);
    let s = clamp01(hsv.s);
    let v = clamp01(hsv.v);

    let c = v * s;
    let m = v - c;
    chroma_to_rgb(h, c, m)
}

pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let k = 1.0 - rgb.r.max(rgb.g).max(rgb.b);
    if k >= 1.0 {
        return Cmyk {
            c: 0.0,
            m: 0.0,
            y: 0.0,
            k: 1.0,
        };
    }

    let ink = |channel: f64| (1.0 - channel - k) / (1.0 - k);
    Cmyk {
        c: ink(rgb.r),
        m: ink(rgb.g),
        y: ink(rgb.b),
        k,
    }
}

/// Reduces any angle into `[0, 360)`.
pub fn wrap_hue(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

fn hue_from_chroma(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let h = if r == max {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if g == max {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    wrap_hue(h)
}

fn chroma_to_rgb(h: f64, c: f64, m: f64) -> Rgb {
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let (r, g, b) = match (h / 60.0).floor() as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb {
        r: clamp01(r + m),
        g: clamp01(g + m),
        b: clamp01(b + m),
    }
}

fn check_unit(label: &str, value: f64) -> Result<(), ColorParseError> {
    if !value.is_finite() {
        return Err(ColorParseError::InvalidNumber(format!("{label} = {value}")));
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(ColorParseError::OutOfRange(format!("{label} = {value}")));
    }
    Ok(())
}

fn check_hue(value: f64) -> Result<(), ColorParseError> {
    if !value.is_finite() {
        return Err(ColorParseError::InvalidNumber(format!("h = {value}")));
    }
    Ok(())
}

fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

fn channel_u8(value: f64) -> u8 {
    (clamp01(value) * 255.0).round() as u8
}

fn round_hue(h: f64) -> u16 {
    (h.round() as u16) % 360
}

fn percent(value: f64) -> u8 {
    (clamp01(value) * 100.0).round() as u8
}

fn format_alpha(alpha: f64) -> String {
    let rounded = (alpha * 100.0).round() / 100.0;
    format!("{rounded}")
}
