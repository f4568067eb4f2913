#![deny(unsafe_code)]
//! CLI binary for the shadecraft palette engine.
//!
//! Subcommands:
//! - `shades <color>`: print the ten-shade ramp
//! - `harmonies <color>`: print color harmonies
//! - `contrast <color>`: WCAG report over the ramp
//! - `ratio <a> <b>`: contrast ratio of two colors
//! - `simulate <color>`: color-vision-deficiency simulation
//! - `gradient <colors...>`: gradient CSS and sampling
//! - `export`: render a palette document into a style-system format
//! - `random`: reproducible random color
//! - `list`: print formats, deficiencies and harmonies

mod commands;
mod error;

use clap::{Args, Parser, Subcommand};
use commands::{GradientArgs, ReportFilter};
use error::CliError;
use shadecraft_core::{HexColor, ShadeOptions};
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "shadecraft", about = "Color palette generator CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug events to stderr (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Ramp controls shared by several subcommands.
#[derive(Args, Debug, Clone, Copy)]
struct RampArgs {
    /// Saturation intensity, 0-100; no effect above 85.
    #[arg(long, default_value_t = 50.0)]
    vibrancy: f64,

    /// Degrees added to the base hue.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    hue_shift: i32,
}

impl From<RampArgs> for ShadeOptions {
    fn from(args: RampArgs) -> Self {
        ShadeOptions::new(args.vibrancy, args.hue_shift)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print the ten-shade ramp for a base color.
    Shades {
        /// Base color; shorthand and malformed input are normalized.
        color: String,

        #[command(flatten)]
        ramp: RampArgs,
    },
    /// Print all color harmonies for a base color, or just one.
    Harmonies {
        color: String,

        /// Harmony type (e.g. "triadic", "split-complementary").
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// Print the WCAG contrast report for a base color's ramp.
    Contrast {
        color: String,

        #[command(flatten)]
        ramp: RampArgs,

        /// Only pairs that reach AA Large or better.
        #[arg(long, conflicts_with = "failing")]
        passing: bool,

        /// Only pairs below AA Large.
        #[arg(long)]
        failing: bool,
    },
    /// Print the contrast ratio and WCAG level of two colors.
    Ratio { a: String, b: String },
    /// Simulate how a color, or its whole ramp, looks with a vision deficiency.
    Simulate {
        color: String,

        /// Deficiency id (e.g. "protanopia", "low-contrast").
        #[arg(short, long)]
        deficiency: String,

        /// Simulate the full shade ramp instead of the single color.
        #[arg(long)]
        ramp: bool,

        #[command(flatten)]
        ramp_args: RampArgs,
    },
    /// Build a gradient from colors and print its CSS.
    Gradient {
        /// Two or more colors, spread evenly from 0% to 100%.
        #[arg(required = true, num_args = 1..)]
        colors: Vec<String>,

        /// Angle in degrees for linear gradients.
        #[arg(long, default_value_t = 90.0, allow_negative_numbers = true)]
        angle: f64,

        /// Radial instead of linear.
        #[arg(long)]
        radial: bool,

        /// Also print the interpolated color at this position (0-100).
        #[arg(long)]
        at: Option<f64>,

        /// Seed for the generated ids.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Render a palette document into a style-system format.
    Export {
        /// Format id (css, scss, less, tailwind, unocss, windicss, styled, mui, chakra, json).
        #[arg(short, long)]
        format: String,

        /// Palette document JSON file ({"colorSets": [...], "gradients": [...]}).
        #[arg(short, long, conflicts_with = "color")]
        input: Option<PathBuf>,

        /// Base colors to build the document from, one set each.
        #[arg(short, long)]
        color: Vec<String>,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for the generated ids.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Print a random color; the same seed gives the same color.
    Random {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List export formats, vision deficiencies and harmony types.
    List,
}

fn colors(raw: &[String]) -> Vec<HexColor> {
    raw.iter().map(|c| commands::color_arg(c)).collect()
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn run(cli: Cli) -> Result<String, CliError> {
    let json = cli.json;
    match cli.command {
        Command::Shades { color, ramp } => {
            tracing::debug!(%color, ?ramp, "shades");
            commands::shades(commands::color_arg(&color), ramp.into(), json)
        }
        Command::Harmonies { color, kind } => {
            tracing::debug!(%color, ?kind, "harmonies");
            commands::harmonies(commands::color_arg(&color), kind.as_deref(), json)
        }
        Command::Contrast {
            color,
            ramp,
            passing,
            failing,
        } => {
            let filter = match (passing, failing) {
                (true, _) => ReportFilter::Passing,
                (_, true) => ReportFilter::Failing,
                _ => ReportFilter::All,
            };
            tracing::debug!(%color, ?ramp, ?filter, "contrast");
            commands::contrast(commands::color_arg(&color), ramp.into(), filter, json)
        }
        Command::Ratio { a, b } => {
            commands::ratio(commands::color_arg(&a), commands::color_arg(&b), json)
        }
        Command::Simulate {
            color,
            deficiency,
            ramp,
            ramp_args,
        } => {
            tracing::debug!(%color, %deficiency, ramp, "simulate");
            let options = ramp.then(|| ShadeOptions::from(ramp_args));
            commands::simulate(commands::color_arg(&color), &deficiency, options, json)
        }
        Command::Gradient {
            colors: raw,
            angle,
            radial,
            at,
            seed,
        } => {
            let args = GradientArgs {
                angle,
                radial,
                at,
                seed,
            };
            tracing::debug!(stops = raw.len(), ?args, "gradient");
            commands::gradient(&colors(&raw), args, json)
        }
        Command::Export {
            format,
            input,
            color,
            output,
            seed,
        } => {
            let document = match input {
                Some(path) => commands::load_document(&path)?,
                None => commands::document_from_colors(&colors(&color), seed),
            };
            tracing::debug!(
                %format,
                color_sets = document.color_sets.len(),
                gradients = document.gradients.len(),
                "export"
            );
            commands::export(&format, &document, output.as_deref(), json)
        }
        Command::Random { seed } => {
            let seed = seed.unwrap_or_else(clock_seed);
            tracing::debug!(seed, "random");
            commands::random(seed, json)
        }
        Command::List => commands::list(json),
    }
}

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            if json_mode {
                let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
                eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
            } else {
                eprintln!("error: {e}");
            }
            process::exit(e.exit_code());
        }
    }
}
