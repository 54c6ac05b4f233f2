//! impress-bibmodel CLI
//!
//! Renders a JSON bibliography document as BibTeX.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use impress_bibmodel::{Bibliography, FormatConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "impress-bibmodel", version, about = "Render BibTeX bibliographies")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a bibliography document as BibTeX
    Render {
        /// Bibliography JSON document (stdin when omitted)
        input: Option<PathBuf>,

        /// Output layout: simplified, raw, or pretty
        #[arg(short, long, default_value = "simplified")]
        format: OutputFormat,

        /// TOML render configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List string variables that are referenced but never defined
    Check {
        /// Bibliography JSON document (stdin when omitted)
        input: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match cli.command {
        Command::Render {
            input,
            format,
            config,
            output,
        } => {
            let bib = load_bibliography(input.as_deref())?;
            let config = match config {
                Some(path) => {
                    tracing::info!("Loading render config from {:?}", path);
                    FormatConfig::from_toml(&fs::read_to_string(path)?)?
                }
                None => FormatConfig::default(),
            };

            let text = bib.render_with(format, &config)?;
            match output {
                Some(path) => fs::write(path, text)?,
                None => io::stdout().write_all(text.as_bytes())?,
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { input } => {
            let bib = load_bibliography(input.as_deref())?;
            let undefined = bib.undefined_variables();
            if undefined.is_empty() {
                return Ok(ExitCode::SUCCESS);
            }
            for key in &undefined {
                println!("{}", key);
            }
            tracing::warn!("{} undefined string variable(s)", undefined.len());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn load_bibliography(path: Option<&Path>) -> Result<Bibliography, Box<dyn std::error::Error>> {
    let content = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let bib: Bibliography = serde_json::from_str(&content)?;
    tracing::debug!(
        entries = bib.entries().len(),
        preambles = bib.preambles().len(),
        variables = bib.variables().len(),
        "loaded bibliography"
    );
    Ok(bib)
}
