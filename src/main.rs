mod app;
mod cli;
mod domain;
mod infra;

use crate::cli::CliInvocation;
use crate::infra::{LOG_ENV, resolve_config};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
enum MainError {
    #[error(transparent)]
    Config(#[from] crate::infra::ConfigError),

    #[error(transparent)]
    Cli(#[from] crate::cli::CliRunError),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn")).init();

    if let Err(error) = run_main() {
        log::debug!("command failed: {error:?}");
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "{error}");
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), MainError> {
    let args = std::env::args().collect::<Vec<_>>();
    let invocation = match crate::cli::parse_invocation(&args) {
        Ok(invocation) => invocation,
        Err(error) => {
            let mut err = io::stderr().lock();
            let _ = writeln!(err, "{error}");
            let _ = writeln!(err);
            print_help();
            std::process::exit(2);
        }
    };

    match invocation {
        CliInvocation::PrintHelp => {
            print_help();
            Ok(())
        }
        CliInvocation::PrintVersion => {
            let mut out = io::stdout().lock();
            let _ = writeln!(out, "{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        CliInvocation::Command(command) => {
            let config = resolve_config()?;
            log::debug!("resolved config: {config:?}");
            let mut input = io::stdin().lock();
            let mut out = io::stdout().lock();
            crate::cli::run(command, &config, &mut input, &mut out)?;
            Ok(())
        }
    }
}

fn print_help() {
    let text = format!(
        "{name} - generate, name, adjust and export color palettes\n\nUSAGE:\n  {name} [generate] [--count N] [--hue DEG] [--json]   Print a generated palette\n  {name} name <color>                                Print the heuristic name of a color\n  {name} convert <color> [--json]                    Print a color in every format\n  {name} shades <color> [--steps N]                  Print a lighten/darken ramp\n  {name} adjust [--hue D] [--saturation P] [--brightness P] [--json] <color>...\n                                                     Shift colors by an adjustment vector\n  {name} export [--count N] [--hue DEG] [--format json|css] [--out PATH]\n                                                     Write a generated palette to a file\n  {name} edit [--count N] [--hue DEG]                Edit a generated palette with commands read from stdin\n  {name} --help | --version\n\nCOLORS:\n  #rgb, #rgba, #rrggbb, #rrggbbaa (leading # optional)\n  rgb(r, g, b), rgba(r, g, b, a), hsl(h, s%, l%), hsla(...), hsv(h, s%, v%), hsva(...)\n\nLIMITS:\n  --hue D          -180..180 degrees\n  --saturation P   -100..100 percent\n  --brightness P   -100..100 percent\n\nEDIT COMMANDS (slots start at 1):\n  show | adjust H S B | reset | select N | replace N <color> | rename N <name>\n  shades | ramps | regen DEG [COUNT] | export [json|css] | quit\n\nOUTPUT:\n  generate/adjust: hex<TAB>name<TAB>rgb<TAB>hsl<TAB>hsv<TAB>cmyk\n\nENV:\n  HUEBOX_PALETTE_SIZE   Default palette size (default: 5)\n  HUEBOX_SHADE_STEPS    Default shade ramp length (default: 5)\n  HUEBOX_EXPORT_DIR     Export directory (default: Downloads, else home)\n  HUEBOX_LOG            Log filter (default: warn)\n",
        name = env!("CARGO_PKG_NAME")
    );
    let mut out = io::stdout().lock();
    let _ = write!(out, "{text}");
}
