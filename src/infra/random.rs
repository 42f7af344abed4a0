use crate::domain::HueSource;
use rand_core::{OsRng, RngCore as _};

/// Draws base hues from the operating system RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsHueSource;

impl HueSource for OsHueSource {
    fn next_hue(&mut self) -> f64 {
        unit_to_degrees(OsRng.next_u32())
    }
}

fn unit_to_degrees(raw: u32) -> f64 {
    f64::from(raw) / (f64::from(u32::MAX) + 1.0) * 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_full_u32_range_into_half_open_degrees() {
        assert_eq!(unit_to_degrees(0), 0.0);
        assert!(unit_to_degrees(u32::MAX) < 360.0);
        assert_eq!(unit_to_degrees(1 << 31), 180.0);
    }

    #[test]
    fn os_source_stays_in_range() {
        let mut source = OsHueSource;
        for _ in 0..64 {
            let hue = source.next_hue();
            assert!((0.0..360.0).contains(&hue), "{hue}");
        }
    }
}
