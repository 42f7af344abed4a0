mod edit;

pub use edit::*;

use crate::app::{PaletteCommand, PaletteEvent, PaletteModel, update};
use crate::domain::{
    AdjustmentVector, FixedHue, HueSource, PaletteEntry, PaletteError, apply_adjustment,
    derive_palette_shades, derive_shades, generate_color_name, generate_initial_palette,
    parse_color_input,
};
use crate::infra::{
    ExportError, ExportFormat, HueboxConfig, OsHueSource, render_export, write_export,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum CliInvocation {
    PrintHelp,
    PrintVersion,
    Command(CliCommand),
}

#[derive(Clone, Debug, PartialEq)]
pub enum CliCommand {
    Generate {
        count: Option<usize>,
        hue: Option<f64>,
        json: bool,
    },
    Name {
        color: String,
    },
    Convert {
        color: String,
        json: bool,
    },
    Shades {
        color: String,
        steps: Option<usize>,
    },
    Adjust {
        adjustment: AdjustmentVector,
        colors: Vec<String>,
        json: bool,
    },
    Export {
        count: Option<usize>,
        hue: Option<f64>,
        format: ExportFormat,
        out: Option<PathBuf>,
    },
    Edit {
        count: Option<usize>,
        hue: Option<f64>,
    },
}

#[derive(Debug, Error)]
pub enum CliParseError {
    #[error("unknown subcommand: {0}")]
    UnknownSubcommand(String),

    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    #[error("missing value for flag: {0}")]
    MissingFlagValue(String),

    #[error("invalid value for {flag}: {value}")]
    InvalidFlagValue { flag: String, value: String },

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("missing color argument")]
    MissingColor,
}

#[derive(Debug, Error)]
pub enum CliRunError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

pub fn parse_invocation(args: &[String]) -> Result<CliInvocation, CliParseError> {
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        return Ok(CliInvocation::PrintHelp);
    }
    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        return Ok(CliInvocation::PrintVersion);
    }

    let mut iter = args.iter().skip(1);
    let Some(subcommand) = iter.next() else {
        return Ok(CliInvocation::Command(CliCommand::Generate {
            count: None,
            hue: None,
            json: false,
        }));
    };

    match subcommand.as_str() {
        "generate" | "gen" => {
            let mut count: Option<usize> = None;
            let mut hue: Option<f64> = None;
            let mut json = false;

            let mut args = iter;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--count" | "-n" => {
                        let value = args.next().ok_or_else(|| {
                            CliParseError::MissingFlagValue("--count".to_string())
                        })?;
                        count = Some(parse_count_flag("--count", value)?);
                    }
                    "--hue" => {
                        let value = args
                            .next()
                            .ok_or_else(|| CliParseError::MissingFlagValue("--hue".to_string()))?;
                        hue = Some(parse_f64_flag("--hue", value)?);
                    }
                    "--json" => {
                        json = true;
                    }
                    _ if arg.starts_with('-') => {
                        return Err(CliParseError::UnknownFlag(arg.to_string()));
                    }
                    _ => {
                        return Err(CliParseError::UnexpectedArgument(arg.to_string()));
                    }
                }
            }

            Ok(CliInvocation::Command(CliCommand::Generate { count, hue, json }))
        }
        "name" => {
            let color = single_color(iter, &[])?.0;
            Ok(CliInvocation::Command(CliCommand::Name { color }))
        }
        "convert" => {
            let (color, flags) = single_color(iter, &["--json"])?;
            Ok(CliInvocation::Command(CliCommand::Convert {
                color,
                json: flags.contains(&"--json"),
            }))
        }
        "shades" => {
            let mut color: Option<String> = None;
            let mut steps: Option<usize> = None;

            let mut args = iter;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--steps" | "-s" => {
                        let value = args.next().ok_or_else(|| {
                            CliParseError::MissingFlagValue("--steps".to_string())
                        })?;
                        steps = Some(parse_count_flag("--steps", value)?);
                    }
                    _ if is_flag(arg) => {
                        return Err(CliParseError::UnknownFlag(arg.to_string()));
                    }
                    _ => {
                        if color.is_some() {
                            return Err(CliParseError::UnexpectedArgument(arg.to_string()));
                        }
                        color = Some(arg.to_string());
                    }
                }
            }

            let color = color.ok_or(CliParseError::MissingColor)?;
            Ok(CliInvocation::Command(CliCommand::Shades { color, steps }))
        }
        "adjust" => {
            let mut adjustment = AdjustmentVector::default();
            let mut colors: Vec<String> = Vec::new();
            let mut json = false;

            let mut args = iter;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--hue" => {
                        let value = args
                            .next()
                            .ok_or_else(|| CliParseError::MissingFlagValue("--hue".to_string()))?;
                        adjustment.hue = parse_f64_flag("--hue", value)?;
                    }
                    "--saturation" | "--sat" => {
                        let value = args.next().ok_or_else(|| {
                            CliParseError::MissingFlagValue("--saturation".to_string())
                        })?;
                        adjustment.saturation = parse_f64_flag("--saturation", value)?;
                    }
                    "--brightness" | "--bri" => {
                        let value = args.next().ok_or_else(|| {
                            CliParseError::MissingFlagValue("--brightness".to_string())
                        })?;
                        adjustment.brightness = parse_f64_flag("--brightness", value)?;
                    }
                    "--json" => {
                        json = true;
                    }
                    _ if is_flag(arg) => {
                        return Err(CliParseError::UnknownFlag(arg.to_string()));
                    }
                    _ => colors.push(arg.to_string()),
                }
            }

            if colors.is_empty() {
                return Err(CliParseError::MissingColor);
            }
            Ok(CliInvocation::Command(CliCommand::Adjust {
                adjustment,
                colors,
                json,
            }))
        }
        "export" => {
            let mut count: Option<usize> = None;
            let mut hue: Option<f64> = None;
            let mut format = ExportFormat::default();
            let mut out: Option<PathBuf> = None;

            let mut args = iter;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--count" | "-n" => {
                        let value = args.next().ok_or_else(|| {
                            CliParseError::MissingFlagValue("--count".to_string())
                        })?;
                        count = Some(parse_count_flag("--count", value)?);
                    }
                    "--hue" => {
                        let value = args
                            .next()
                            .ok_or_else(|| CliParseError::MissingFlagValue("--hue".to_string()))?;
                        hue = Some(parse_f64_flag("--hue", value)?);
                    }
                    "--format" | "-f" => {
                        let value = args.next().ok_or_else(|| {
                            CliParseError::MissingFlagValue("--format".to_string())
                        })?;
                        format = ExportFormat::parse(value).ok_or_else(|| {
                            CliParseError::InvalidFlagValue {
                                flag: "--format".to_string(),
                                value: value.to_string(),
                            }
                        })?;
                    }
                    "--out" | "-o" => {
                        let value = args
                            .next()
                            .ok_or_else(|| CliParseError::MissingFlagValue("--out".to_string()))?;
                        out = Some(PathBuf::from(value));
                    }
                    _ if arg.starts_with('-') => {
                        return Err(CliParseError::UnknownFlag(arg.to_string()));
                    }
                    _ => {
                        return Err(CliParseError::UnexpectedArgument(arg.to_string()));
                    }
                }
            }

            Ok(CliInvocation::Command(CliCommand::Export {
                count,
                hue,
                format,
                out,
            }))
        }
        "edit" => {
            let mut count: Option<usize> = None;
            let mut hue: Option<f64> = None;

            let mut args = iter;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--count" | "-n" => {
                        let value = args.next().ok_or_else(|| {
                            CliParseError::MissingFlagValue("--count".to_string())
                        })?;
                        count = Some(parse_count_flag("--count", value)?);
                    }
                    "--hue" => {
                        let value = args
                            .next()
                            .ok_or_else(|| CliParseError::MissingFlagValue("--hue".to_string()))?;
                        hue = Some(parse_f64_flag("--hue", value)?);
                    }
                    _ if arg.starts_with('-') => {
                        return Err(CliParseError::UnknownFlag(arg.to_string()));
                    }
                    _ => {
                        return Err(CliParseError::UnexpectedArgument(arg.to_string()));
                    }
                }
            }

            Ok(CliInvocation::Command(CliCommand::Edit { count, hue }))
        }
        other => Err(CliParseError::UnknownSubcommand(other.to_string())),
    }
}

// Takes exactly one color argument plus any of the given boolean flags.
fn single_color<'a>(
    args: impl Iterator<Item = &'a String>,
    allowed_flags: &[&'static str],
) -> Result<(String, Vec<&'static str>), CliParseError> {
    let mut color: Option<String> = None;
    let mut flags = Vec::new();
    for arg in args {
        if let Some(flag) = allowed_flags.iter().find(|flag| **flag == arg.as_str()) {
            flags.push(*flag);
            continue;
        }
        if is_flag(arg) {
            return Err(CliParseError::UnknownFlag(arg.to_string()));
        }
        if color.is_some() {
            return Err(CliParseError::UnexpectedArgument(arg.to_string()));
        }
        color = Some(arg.to_string());
    }
    Ok((color.ok_or(CliParseError::MissingColor)?, flags))
}

// `-` followed by a letter; `-30` stays a value.
fn is_flag(arg: &str) -> bool {
    arg.strip_prefix('-')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '-')
}

pub fn run(
    command: CliCommand,
    config: &HueboxConfig,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliRunError> {
    match command {
        CliCommand::Generate { count, hue, json } => {
            let entries = generate(count.unwrap_or(config.palette_size), hue)?;
            print_entries(out, &entries, json)
        }
        CliCommand::Name { color } => {
            let color = parse_color_input(&color)?;
            write_line(out, &generate_color_name(&color))?;
            Ok(())
        }
        CliCommand::Convert { color, json } => {
            let color = parse_color_input(&color)?;
            let entry = PaletteEntry::from_color(color);
            if json {
                let rendered = serde_json::to_string_pretty(&entry).map_err(ExportError::from)?;
                write_line(out, &rendered)?;
                return Ok(());
            }
            for (label, value) in [
                ("name", &entry.name),
                ("hex", &entry.hex),
                ("rgb", &entry.rgb),
                ("hsl", &entry.hsl),
                ("hsv", &entry.hsv),
                ("cmyk", &entry.cmyk),
            ] {
                if !write_line(out, &format!("{label}\t{value}"))? {
                    return Ok(());
                }
            }
            if color.alpha() < 1.0 {
                write_line(out, &format!("hex8\t{}", color.to_hex8_string()))?;
            }
            Ok(())
        }
        CliCommand::Shades { color, steps } => {
            let steps = steps.unwrap_or(config.shade_steps);
            for shade in derive_shades(&color, steps)? {
                if !write_line(out, &shade)? {
                    return Ok(());
                }
            }
            Ok(())
        }
        CliCommand::Adjust {
            adjustment,
            colors,
            json,
        } => {
            let entries = colors
                .iter()
                .map(|color| parse_color_input(color).map(PaletteEntry::from_color))
                .collect::<Result<Vec<_>, _>>()?;
            let adjusted = apply_adjustment(&entries, &adjustment)?;
            print_entries(out, &adjusted, json)
        }
        CliCommand::Export {
            count,
            hue,
            format,
            out: path,
        } => {
            let entries = generate(count.unwrap_or(config.palette_size), hue)?;
            let model = PaletteModel::new(entries, config.shade_steps);
            let (model, command) = update(model, PaletteEvent::Export(format));
            let PaletteCommand::Export { entries, format } = command else {
                log::warn!("export skipped: {}", model.notice.unwrap_or_default());
                return Err(PaletteError::EmptyPalette.into());
            };

            let path = path.unwrap_or_else(|| config.export_dir.join(format.default_file_name()));
            let written = write_export(&path, &entries, format)?;
            write_line(out, &written.display().to_string())?;
            Ok(())
        }
        CliCommand::Edit { count, hue } => {
            let entries = generate(count.unwrap_or(config.palette_size), hue)?;
            let model = PaletteModel::new(entries, config.shade_steps);
            run_edit_session(model, config, input, out)
        }
    }
}

/// Reads edit commands line by line until `quit` or end of input. Bad lines
/// and rejected events are reported inline and the session continues.
fn run_edit_session(
    mut model: PaletteModel,
    config: &HueboxConfig,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliRunError> {
    print_entries(out, &model.entries, false)?;

    for line in input.lines() {
        let line = line?;
        let action = match parse_edit_line(&line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(error) => {
                write_line(out, &format!("error: {error}"))?;
                continue;
            }
        };

        let event = match action {
            EditAction::Quit => break,
            EditAction::Show => {
                print_model(out, &model)?;
                continue;
            }
            EditAction::Ramps => {
                match derive_palette_shades(&model.entries, model.shade_steps) {
                    Ok(ramps) => {
                        for ramp in ramps {
                            write_line(out, &ramp.join("\t"))?;
                        }
                    }
                    Err(error) => {
                        write_line(out, &format!("error: {error}"))?;
                    }
                }
                continue;
            }
            EditAction::Regenerate { base_hue, count } => PaletteEvent::Regenerate {
                base_hue,
                count: count.unwrap_or(model.entries.len()),
            },
            EditAction::Event(event) => event,
        };

        let shows_shades = matches!(event, PaletteEvent::ShowShades);
        let (next, command) = update(model, event);
        model = next;

        if let Some(notice) = &model.notice {
            write_line(out, &format!("error: {notice}"))?;
            continue;
        }
        match command {
            PaletteCommand::Export { entries, format } => {
                let path = config.export_dir.join(format.default_file_name());
                match write_export(&path, &entries, format) {
                    Ok(written) => write_line(out, &written.display().to_string())?,
                    Err(error) => write_line(out, &format!("error: {error}"))?,
                };
            }
            PaletteCommand::None if shows_shades => {
                if let Some(shades) = &model.shades {
                    write_line(out, &shades.join("\t"))?;
                }
            }
            PaletteCommand::None => print_entries(out, &model.entries, false)?,
        }
    }
    Ok(())
}

fn print_model(out: &mut impl Write, model: &PaletteModel) -> Result<(), CliRunError> {
    let adjustment = &model.adjustment;
    write_line(
        out,
        &format!(
            "adjustment\thue {}\tsaturation {}\tbrightness {}",
            adjustment.hue, adjustment.saturation, adjustment.brightness
        ),
    )?;
    for (index, entry) in model.entries.iter().enumerate() {
        let marker = if index == model.selected { '*' } else { ' ' };
        write_line(
            out,
            &format!("{marker}{}\t{}\t{}", index + 1, entry.hex, entry.name),
        )?;
    }
    Ok(())
}

fn generate(count: usize, hue: Option<f64>) -> Result<Vec<PaletteEntry>, PaletteError> {
    let mut source: Box<dyn HueSource> = match hue {
        Some(hue) => Box::new(FixedHue(hue)),
        None => Box::new(OsHueSource),
    };
    let entries = generate_initial_palette(count, source.as_mut())?;
    log::debug!("generated {} colors", entries.len());
    Ok(entries)
}

fn print_entries(
    out: &mut impl Write,
    entries: &[PaletteEntry],
    json: bool,
) -> Result<(), CliRunError> {
    if json {
        let rendered = render_export(entries, ExportFormat::Json)?;
        write!(out, "{rendered}")?;
        return Ok(());
    }
    for entry in entries {
        let line = format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            entry.hex, entry.name, entry.rgb, entry.hsl, entry.hsv, entry.cmyk
        );
        if !write_line(out, &line)? {
            return Ok(());
        }
    }
    Ok(())
}

fn write_line(out: &mut impl Write, line: &str) -> io::Result<bool> {
    match writeln!(out, "{line}") {
        Ok(()) => Ok(true),
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(false),
        Err(error) => Err(error),
    }
}

fn parse_count_flag(flag: &str, value: &str) -> Result<usize, CliParseError> {
    match value.parse::<usize>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(CliParseError::InvalidFlagValue {
            flag: flag.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_f64_flag(flag: &str, value: &str) -> Result<f64, CliParseError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| CliParseError::InvalidFlagValue {
            flag: flag.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn config(export_dir: PathBuf) -> HueboxConfig {
        HueboxConfig {
            palette_size: 5,
            shade_steps: 5,
            export_dir,
        }
    }

    fn run_to_string(command: CliCommand) -> String {
        let mut out = Vec::new();
        run(
            command,
            &config(PathBuf::from("/tmp")),
            &mut io::empty(),
            &mut out,
        )
        .expect("run");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn parse_defaults_to_generate_when_no_args() {
        let parsed = parse_invocation(&args(&["huebox"])).expect("parse");
        assert_eq!(
            parsed,
            CliInvocation::Command(CliCommand::Generate {
                count: None,
                hue: None,
                json: false
            })
        );
    }

    #[test]
    fn parse_help_flag_wins() {
        let parsed = parse_invocation(&args(&["huebox", "shades", "--help"])).expect("parse");
        assert_eq!(parsed, CliInvocation::PrintHelp);
    }

    #[test]
    fn parse_generate_supports_count_hue_and_json() {
        let parsed = parse_invocation(&args(&[
            "huebox", "generate", "--count", "7", "--hue", "210.5", "--json",
        ]))
        .expect("parse");
        assert_eq!(
            parsed,
            CliInvocation::Command(CliCommand::Generate {
                count: Some(7),
                hue: Some(210.5),
                json: true
            })
        );
    }

    #[test]
    fn parse_rejects_zero_count() {
        let error =
            parse_invocation(&args(&["huebox", "generate", "--count", "0"])).expect_err("error");
        assert!(matches!(error, CliParseError::InvalidFlagValue { .. }));
    }

    #[test]
    fn parse_shades_with_steps() {
        let parsed =
            parse_invocation(&args(&["huebox", "shades", "#808080", "--steps", "7"])).expect("parse");
        assert_eq!(
            parsed,
            CliInvocation::Command(CliCommand::Shades {
                color: "#808080".to_string(),
                steps: Some(7)
            })
        );
    }

    #[test]
    fn parse_adjust_accepts_negative_values_and_many_colors() {
        let parsed = parse_invocation(&args(&[
            "huebox",
            "adjust",
            "--hue",
            "-30",
            "--brightness",
            "10",
            "#ff0000",
            "rgb(0, 0, 255)",
        ]))
        .expect("parse");
        assert_eq!(
            parsed,
            CliInvocation::Command(CliCommand::Adjust {
                adjustment: AdjustmentVector {
                    hue: -30.0,
                    saturation: 0.0,
                    brightness: 10.0
                },
                colors: vec!["#ff0000".to_string(), "rgb(0, 0, 255)".to_string()],
                json: false
            })
        );
    }

    #[test]
    fn parse_adjust_requires_a_color() {
        let error = parse_invocation(&args(&["huebox", "adjust", "--hue", "10"])).expect_err("error");
        assert!(matches!(error, CliParseError::MissingColor));
    }

    #[test]
    fn parse_export_supports_format_and_out() {
        let parsed = parse_invocation(&args(&[
            "huebox",
            "export",
            "--format",
            "css",
            "--out",
            "/tmp/p.css",
        ]))
        .expect("parse");
        assert_eq!(
            parsed,
            CliInvocation::Command(CliCommand::Export {
                count: None,
                hue: None,
                format: ExportFormat::Css,
                out: Some(PathBuf::from("/tmp/p.css"))
            })
        );

        let error = parse_invocation(&args(&["huebox", "export", "--format", "ase"]))
            .expect_err("error");
        assert!(matches!(error, CliParseError::InvalidFlagValue { .. }));
    }

    #[test]
    fn parse_rejects_unknown_subcommand_and_extra_args() {
        assert!(matches!(
            parse_invocation(&args(&["huebox", "paint"])),
            Err(CliParseError::UnknownSubcommand(_))
        ));
        assert!(matches!(
            parse_invocation(&args(&["huebox", "name", "#fff", "#000"])),
            Err(CliParseError::UnexpectedArgument(_))
        ));
        assert!(matches!(
            parse_invocation(&args(&["huebox", "convert", "--yaml", "#fff"])),
            Err(CliParseError::UnknownFlag(_))
        ));
    }

    #[test]
    fn run_name_prints_heuristic_name() {
        let text = run_to_string(CliCommand::Name {
            color: "hsl(0, 70%, 50%)".to_string(),
        });
        assert_eq!(text, "Vibrant Red\n");
    }

    #[test]
    fn run_generate_with_fixed_hue_is_deterministic() {
        let command = CliCommand::Generate {
            count: Some(3),
            hue: Some(0.0),
            json: false,
        };
        let first = run_to_string(command.clone());
        assert_eq!(first, run_to_string(command));
        assert_eq!(first.lines().count(), 3);
        assert!(first.starts_with("#d92626\tVibrant Red\t"));
    }

    #[test]
    fn run_convert_lists_every_format() {
        let text = run_to_string(CliCommand::Convert {
            color: "#ff0000".to_string(),
            json: false,
        });
        assert_eq!(
            text,
            "name\tVibrant Red\nhex\t#ff0000\nrgb\trgb(255, 0, 0)\nhsl\thsl(0, 100%, 50%)\nhsv\thsv(0, 100%, 100%)\ncmyk\tcmyk(0%, 100%, 100%, 0%)\n"
        );
    }

    #[test]
    fn run_shades_prints_ramp() {
        let text = run_to_string(CliCommand::Shades {
            color: "#808080".to_string(),
            steps: None,
        });
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "#808080");
    }

    #[test]
    fn run_adjust_surfaces_out_of_range_error() {
        let mut out = Vec::new();
        let error = run(
            CliCommand::Adjust {
                adjustment: AdjustmentVector {
                    hue: 400.0,
                    saturation: 0.0,
                    brightness: 0.0,
                },
                colors: vec!["#ff0000".to_string()],
                json: false,
            },
            &config(PathBuf::from("/tmp")),
            &mut io::empty(),
            &mut out,
        )
        .expect_err("error");
        assert!(matches!(
            error,
            CliRunError::Palette(PaletteError::OutOfRangeAdjustment { .. })
        ));
    }

    #[test]
    fn run_export_writes_into_configured_dir() {
        let dir = tempdir().expect("tempdir");
        let mut out = Vec::new();
        run(
            CliCommand::Export {
                count: Some(2),
                hue: Some(120.0),
                format: ExportFormat::Json,
                out: None,
            },
            &config(dir.path().to_path_buf()),
            &mut io::empty(),
            &mut out,
        )
        .expect("run");

        let path = dir.path().join("palette.json");
        assert_eq!(String::from_utf8(out).expect("utf8").trim(), path.display().to_string());
        let text = std::fs::read_to_string(&path).expect("read");
        let entries: Vec<PaletteEntry> = serde_json::from_str(&text).expect("parse");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn run_convert_adds_hex8_for_translucent_input() {
        let text = run_to_string(CliCommand::Convert {
            color: "rgba(255, 0, 0, 0.5)".to_string(),
            json: false,
        });
        assert!(text.contains("hex\t#ff0000\n"));
        assert!(text.ends_with("hex8\t#ff000080\n"));

        let opaque = run_to_string(CliCommand::Convert {
            color: "#ff0000".to_string(),
            json: false,
        });
        assert!(!opaque.contains("hex8"));
    }

    #[test]
    fn parse_edit_with_count_and_hue() {
        let parsed =
            parse_invocation(&args(&["huebox", "edit", "--count", "2", "--hue", "0"])).expect("parse");
        assert_eq!(
            parsed,
            CliInvocation::Command(CliCommand::Edit {
                count: Some(2),
                hue: Some(0.0)
            })
        );
    }

    #[test]
    fn edit_session_drives_every_palette_event() {
        let dir = tempdir().expect("tempdir");
        let script = "\
show
adjust 180 0 0
select 2
rename 2 Sunset
replace 1 rgb(0, 0, 255)
shades
ramps
reset
adjust 0 0 250
select 9
export css
bogus
regen 240
quit
show
";
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        run(
            CliCommand::Edit {
                count: Some(2),
                hue: Some(0.0),
            },
            &config(dir.path().to_path_buf()),
            &mut input,
            &mut out,
        )
        .expect("run");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("#d92626\tVibrant Red\t"));
        assert!(lines.contains(&"adjustment\thue 0\tsaturation 0\tbrightness 0"));
        assert!(lines.contains(&"*1\t#d92626\tVibrant Red"));
        assert!(lines.iter().any(|line| line.starts_with("#26d9d9\tVibrant Green\t")));
        assert!(lines.iter().any(|line| line.contains("\tSunset\t")));
        assert!(lines.iter().any(|line| line.starts_with("#0000ff\tVibrant Blue\t")));

        let ramps: Vec<&&str> = lines
            .iter()
            .filter(|line| line.split('\t').count() == 5 && line.starts_with('#'))
            .collect();
        assert_eq!(ramps.len(), 3, "one selected ramp plus one per entry");

        assert!(lines.contains(&"error: brightness adjustment out of range: 250"));
        assert!(lines.contains(&"error: palette slot 8 out of range (len 2)"));
        assert!(lines.contains(&"error: unknown edit command: bogus"));

        let css = dir.path().join("palette.css");
        assert!(lines.contains(&css.display().to_string().as_str()));
        let exported = std::fs::read_to_string(&css).expect("read");
        assert!(exported.contains("/* Vibrant Blue */"));
        assert!(exported.contains("/* Sunset */"));

        // regen keeps the palette length; quit stops before the final show
        assert!(lines.iter().any(|line| line.starts_with("#2626d9\tVibrant Blue\t")));
        assert_eq!(
            lines.iter().filter(|line| line.starts_with("adjustment\t")).count(),
            1
        );
    }
}
