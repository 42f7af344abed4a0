use crate::domain::{DEFAULT_PALETTE_SIZE, DEFAULT_SHADE_STEPS};
use std::path::PathBuf;
use thiserror::Error;

pub const PALETTE_SIZE_ENV: &str = "HUEBOX_PALETTE_SIZE";
pub const SHADE_STEPS_ENV: &str = "HUEBOX_SHADE_STEPS";
pub const EXPORT_DIR_ENV: &str = "HUEBOX_EXPORT_DIR";
pub const LOG_ENV: &str = "HUEBOX_LOG";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HueboxConfig {
    pub palette_size: usize,
    pub shade_steps: usize,
    pub export_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} (expected an integer >= 1)")]
    InvalidCount { var: &'static str, value: String },

    #[error("could not determine an export directory (set HUEBOX_EXPORT_DIR)")]
    ExportDirNotFound,
}

pub fn resolve_config() -> Result<HueboxConfig, ConfigError> {
    resolve_config_with(|var| std::env::var(var).ok())
}

pub fn resolve_config_with(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<HueboxConfig, ConfigError> {
    let palette_size = read_count(&lookup, PALETTE_SIZE_ENV, DEFAULT_PALETTE_SIZE)?;
    let shade_steps = read_count(&lookup, SHADE_STEPS_ENV, DEFAULT_SHADE_STEPS)?;

    let export_dir = match lookup(EXPORT_DIR_ENV).filter(|dir| !dir.trim().is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => default_export_dir().ok_or(ConfigError::ExportDirNotFound)?,
    };

    Ok(HueboxConfig {
        palette_size,
        shade_steps,
        export_dir,
    })
}

fn default_export_dir() -> Option<PathBuf> {
    dirs::download_dir().or_else(dirs::home_dir)
}

fn read_count(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: usize,
) -> Result<usize, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ConfigError::InvalidCount { var, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn uses_overrides_from_environment() {
        let config = resolve_config_with(lookup_from(&[
            (PALETTE_SIZE_ENV, "8"),
            (SHADE_STEPS_ENV, " 7 "),
            (EXPORT_DIR_ENV, "/tmp/palettes"),
        ]))
        .expect("config");

        assert_eq!(
            config,
            HueboxConfig {
                palette_size: 8,
                shade_steps: 7,
                export_dir: PathBuf::from("/tmp/palettes"),
            }
        );
    }

    #[test]
    fn falls_back_to_defaults() {
        let config =
            resolve_config_with(lookup_from(&[(EXPORT_DIR_ENV, "/tmp/x")])).expect("config");
        assert_eq!(config.palette_size, DEFAULT_PALETTE_SIZE);
        assert_eq!(config.shade_steps, DEFAULT_SHADE_STEPS);
    }

    #[test]
    fn rejects_zero_and_garbage_counts() {
        let error = resolve_config_with(lookup_from(&[
            (PALETTE_SIZE_ENV, "0"),
            (EXPORT_DIR_ENV, "/tmp/x"),
        ]))
        .expect_err("error");
        assert!(matches!(
            error,
            ConfigError::InvalidCount {
                var: PALETTE_SIZE_ENV,
                ..
            }
        ));

        let error = resolve_config_with(lookup_from(&[
            (SHADE_STEPS_ENV, "many"),
            (EXPORT_DIR_ENV, "/tmp/x"),
        ]))
        .expect_err("error");
        assert!(matches!(error, ConfigError::InvalidCount { .. }));
    }
}
