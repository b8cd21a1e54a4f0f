//! CLI tool for ringchart - renders a dataset JSON file to SVG or draw commands
//!
//! Usage:
//!   ringchart_cli <dataset.json>                       # SVG to stdout
//!   ringchart_cli <dataset.json> -o chart.svg          # SVG to file
//!   ringchart_cli <dataset.json> --format json         # Draw commands as JSON
//!   ringchart_cli <dataset.json> --options opts.json --width 800 --height 400
//!
//! Set `RUST_LOG=ringchart=debug` for render diagnostics on stderr.

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use ringchart::render::{render_chart, CommandRecorder, SvgSurface};
use ringchart::types::{ChartOptions, Dataset};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: ringchart_cli <dataset.json> [--options opts.json] \
[--width W] [--height H] [--format svg|json] [-o output]";

const DEFAULT_WIDTH: f64 = 640.0;
const DEFAULT_HEIGHT: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum OutputFormat {
    #[default]
    Svg,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
struct Args {
    input: PathBuf,
    options: Option<PathBuf>,
    width: f64,
    height: f64,
    format: OutputFormat,
    output: Option<PathBuf>,
}

fn parse_size(flag: &str, value: Option<&String>) -> Result<f64, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(format!("{flag} must be a positive number, got `{value}`")),
    }
}

/// Parse the arguments after the program name.
fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut input = None;
    let mut options = None;
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut format = OutputFormat::default();
    let mut output = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--options" => {
                let path = iter.next().ok_or("--options needs a path")?;
                options = Some(PathBuf::from(path));
            }
            "--width" => width = parse_size("--width", iter.next())?,
            "--height" => height = parse_size("--height", iter.next())?,
            "--format" => {
                format = match iter.next().map(String::as_str) {
                    Some("svg") => OutputFormat::Svg,
                    Some("json") => OutputFormat::Json,
                    Some(other) => return Err(format!("unknown format `{other}`")),
                    None => return Err("--format needs a value".to_string()),
                };
            }
            "-o" | "--output" => {
                let path = iter.next().ok_or("-o needs a path")?;
                output = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => return Err(format!("unknown flag `{flag}`")),
            path => {
                if input.is_some() {
                    return Err(format!("unexpected argument `{path}`"));
                }
                input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Args {
        input: input.ok_or("missing dataset path")?,
        options,
        width,
        height,
        format,
        output,
    })
}

fn run(args: &Args) -> ringchart::error::Result<String> {
    let dataset = Dataset::from_json(&fs::read_to_string(&args.input)?)?;
    let options = match &args.options {
        Some(path) => ChartOptions::from_json(&fs::read_to_string(path)?)?,
        None => ChartOptions::default(),
    };

    match args.format {
        OutputFormat::Svg => {
            let mut surface = SvgSurface::new(args.width, args.height);
            render_chart(&dataset, &mut surface, &options)?;
            Ok(surface.finish())
        }
        OutputFormat::Json => {
            let mut surface = CommandRecorder::new(args.width, args.height);
            render_chart(&dataset, &mut surface, &options)?;
            tracing::debug!(commands = surface.commands().len(), "recorded draw commands");
            surface.to_json()
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let argv: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let rendered = match run(&args) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error rendering {}: {e}", args.input.display());
            std::process::exit(1);
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered) {
                eprintln!("Error writing {}: {e}", path.display());
                std::process::exit(1);
            }
            eprintln!("Written: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{rendered}") {
                eprintln!("Error writing output: {e}");
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let parsed = parse_args(&args(&["data.json"])).unwrap();
        assert_eq!(parsed.input, PathBuf::from("data.json"));
        assert_eq!(parsed.format, OutputFormat::Svg);
        assert_eq!(parsed.width, DEFAULT_WIDTH);
        assert_eq!(parsed.height, DEFAULT_HEIGHT);
        assert!(parsed.options.is_none());
        assert!(parsed.output.is_none());
    }

    #[test]
    fn test_all_flags() {
        let parsed = parse_args(&args(&[
            "--width", "800", "data.json", "--height", "300", "--format", "json", "--options",
            "opts.json", "-o", "out.json",
        ]))
        .unwrap();
        assert_eq!(parsed.width, 800.0);
        assert_eq!(parsed.height, 300.0);
        assert_eq!(parsed.format, OutputFormat::Json);
        assert_eq!(parsed.options, Some(PathBuf::from("opts.json")));
        assert_eq!(parsed.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["a.json", "b.json"])).is_err());
        assert!(parse_args(&args(&["a.json", "--width", "-5"])).is_err());
        assert!(parse_args(&args(&["a.json", "--width"])).is_err());
        assert!(parse_args(&args(&["a.json", "--format", "png"])).is_err());
        assert!(parse_args(&args(&["a.json", "--verbose"])).is_err());
    }
}
