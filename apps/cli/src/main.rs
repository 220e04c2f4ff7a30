// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: turn a natural-language description into a scene document
//!
//! Usage:
//!   archprompt "<prompt>" [--output scene.json] [--pretty] [--validate]

use anyhow::{Context, Result};
use archprompt_layout::{build_scene, LayoutConfig};
use archprompt_schema::validate_value;
use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const EXAMPLES: &str = "\
Examples:
  archprompt \"A 2-bedroom apartment with modern kitchen\"
  archprompt \"Scandinavian 1-bedroom, 60 square meters\" --output scene.json
  archprompt \"Industrial loft\" --pretty";

#[derive(Parser, Debug)]
#[command(
    name = "archprompt",
    version,
    about = "ArchPrompt - text-to-layout architectural scene generator",
    after_help = EXAMPLES
)]
struct Args {
    /// Natural language description of the architectural space
    prompt: String,

    /// Output file path (default: stdout)
    #[arg(short, long, env = "ARCHPROMPT_OUTPUT")]
    output: Option<PathBuf>,

    /// Pretty-print JSON output (default: compact)
    #[arg(long)]
    pretty: bool,

    /// Validate JSON output before saving
    #[arg(long)]
    validate: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the document.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let output = render(args)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("cannot write {}", path.display()))?;
            eprintln!("✓ Saved to {}", path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}

/// Generates, optionally validates, and formats the document
fn render(args: &Args) -> Result<String> {
    let scene = build_scene(&args.prompt, &LayoutConfig::default())?;

    let json = if args.pretty {
        scene.to_json_pretty()?
    } else {
        scene.to_json()?
    };

    if args.validate {
        let data: Value = serde_json::from_str(&json).context("generated output is not JSON")?;
        validate_value(&data)?;

        let rooms = data["rooms"].as_array().map_or(0, |r| r.len());
        let confidence = data["meta"]["confidence"].as_f64().unwrap_or_default();
        eprintln!("✓ Valid JSON generated");
        eprintln!("  - Rooms: {}", rooms);
        eprintln!("  - Confidence: {:.2}", confidence);
    }

    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from([
            "archprompt",
            "Industrial loft",
            "-o",
            "scene.json",
            "--pretty",
            "--validate",
        ]);
        assert_eq!(args.prompt, "Industrial loft");
        assert_eq!(args.output, Some(PathBuf::from("scene.json")));
        assert!(args.pretty);
        assert!(args.validate);
    }

    #[test]
    fn test_render_compact_and_pretty() {
        let mut args = Args::parse_from(["archprompt", "A 2-bedroom apartment"]);
        let compact = render(&args).unwrap();
        assert!(!compact.contains('\n'));

        args.pretty = true;
        args.validate = true;
        let pretty = render(&args).unwrap();
        assert!(pretty.contains("\n  \"house\""));

        let a: Value = serde_json::from_str(&compact).unwrap();
        let b: Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_write_to_file() {
        let path = std::env::temp_dir().join(format!("archprompt-cli-{}.json", std::process::id()));
        let args = Args {
            prompt: "A rustic cabin".to_string(),
            output: Some(path.clone()),
            pretty: false,
            validate: false,
        };
        run(&args).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let data: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(data["styles"]["theme"], "rustic");
        std::fs::remove_file(&path).ok();
    }
}
