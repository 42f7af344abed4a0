use crate::domain::PaletteEntry;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ExportFormat {
    #[default]
    Json,
    Css,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "css" => Some(Self::Css),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Css => "css",
        }
    }

    pub fn default_file_name(self) -> String {
        format!("palette.{}", self.extension())
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: palette is empty")]
    EmptyPalette,

    #[error("failed to encode palette: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write palette: {0}")]
    Write(#[from] io::Error),
}

pub fn render_export(entries: &[PaletteEntry], format: ExportFormat) -> Result<String, ExportError> {
    if entries.is_empty() {
        return Err(ExportError::EmptyPalette);
    }

    match format {
        ExportFormat::Json => {
            let mut text = serde_json::to_string_pretty(entries)?;
            text.push('\n');
            Ok(text)
        }
        ExportFormat::Css => Ok(render_css(entries)),
    }
}

fn render_css(entries: &[PaletteEntry]) -> String {
    let mut out = String::from(":root {\n");
    for (index, entry) in entries.iter().enumerate() {
        let name = entry.name.replace("*/", "* /");
        let _ = writeln!(out, "  --color-{}: {}; /* {} */", index + 1, entry.hex, name);
    }
    out.push_str("}\n");
    out
}

/// Writes the rendered palette to `path` through a sibling temp file.
pub fn write_export(
    path: &Path,
    entries: &[PaletteEntry],
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    let text = render_export(entries, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension(format!("{}.tmp", format.extension()));
    fs::write(&tmp, text)?;
    if let Err(error) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(error.into());
    }
    log::info!("exported {} colors to {}", entries.len(), path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FixedHue, generate_initial_palette};
    use tempfile::tempdir;

    fn palette() -> Vec<PaletteEntry> {
        generate_initial_palette(2, &mut FixedHue(0.0)).expect("palette")
    }

    #[test]
    fn json_export_is_an_array_of_entries() {
        let entries = palette();
        let text = render_export(&entries, ExportFormat::Json).expect("render");
        let parsed: Vec<PaletteEntry> = serde_json::from_str(&text).expect("parse");
        assert_eq!(parsed, entries);

        let value: serde_json::Value = serde_json::from_str(&text).expect("value");
        assert_eq!(value[0]["name"], "Vibrant Red");
        assert!(value[0]["cmyk"].as_str().expect("cmyk").starts_with("cmyk("));
    }

    #[test]
    fn css_export_declares_custom_properties() {
        let entries = palette();
        let text = render_export(&entries, ExportFormat::Css).expect("render");
        assert!(text.starts_with(":root {\n"));
        assert!(text.contains(&format!("  --color-1: {}; /* Vibrant Red */", entries[0].hex)));
        assert!(text.contains("--color-2:"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn empty_palette_is_rejected() {
        let error = render_export(&[], ExportFormat::Json).expect_err("error");
        assert!(matches!(error, ExportError::EmptyPalette));
    }

    #[test]
    fn writes_file_and_creates_parent_dirs() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("palette.json");

        let written = write_export(&path, &palette(), ExportFormat::Json).expect("write");
        assert_eq!(written, path);

        let text = fs::read_to_string(&path).expect("read");
        let parsed: Vec<PaletteEntry> = serde_json::from_str(&text).expect("parse");
        assert_eq!(parsed.len(), 2);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("palette.json");
        fs::create_dir(&path).expect("mkdir");
        fs::write(path.join("keep"), "x").expect("write");

        let error = write_export(&path, &palette(), ExportFormat::Json).expect_err("error");
        assert!(matches!(error, ExportError::Write(_)));
        assert!(!path.with_extension("json.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn parses_format_names() {
        assert_eq!(ExportFormat::parse("JSON"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::parse("css"), Some(ExportFormat::Css));
        assert_eq!(ExportFormat::parse("gpl"), None);
        assert_eq!(ExportFormat::Css.default_file_name(), "palette.css");
    }
}
