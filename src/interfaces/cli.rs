// ============================================================
// CLI INTERFACE
// ============================================================
// Command-line entry: generate and inspect subcommands

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::application::SchemaGenerator;
use crate::domain::error::Result;
use crate::domain::schema::SchemaConfig;
use crate::infrastructure::config::{ConfigService, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(name = "dkan-schema")]
#[command(about = "Generate Frictionless Table Schemas from CSV files")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (ignored when missing)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config: PathBuf,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print or write the Table Schema JSON for a CSV file
    Generate(GenerateArgs),

    /// Print per-column statistics and inferred types
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// CSV file to read
    pub csv: PathBuf,

    /// Write the schema here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub sampling: SamplingArgs,

    /// Keep repeated field names as they are
    #[arg(long)]
    pub no_dedupe: bool,

    /// Emit compact JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// CSV file to read
    pub csv: PathBuf,

    #[command(flatten)]
    pub sampling: SamplingArgs,
}

#[derive(Args, Debug, Default)]
pub struct SamplingArgs {
    /// Number of leading data rows used for inference
    #[arg(long)]
    pub sample_rows: Option<usize>,

    /// Field delimiter (a single character, or `tab`); detected when omitted
    #[arg(short, long, value_parser = parse_delimiter)]
    pub delimiter: Option<char>,
}

impl SamplingArgs {
    fn apply(&self, config: &mut SchemaConfig) {
        if let Some(sample_rows) = self.sample_rows {
            config.sample_rows = sample_rows;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = Some(delimiter);
        }
    }
}

fn parse_delimiter(value: &str) -> std::result::Result<char, String> {
    if value == "tab" || value == "\\t" {
        return Ok('\t');
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected a single character, got {:?}", value)),
    }
}

/// Resolve config (file, env, flags) and run the selected command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = ConfigService::new(&cli.config).load()?;

    match cli.command {
        Command::Generate(args) => {
            args.sampling.apply(&mut config);
            if args.no_dedupe {
                config.deduplicate_names = false;
            }
            if args.compact {
                config.pretty = false;
            }

            let generator = SchemaGenerator::new(config);
            let schema = generator.generate_from_path(&args.csv)?;
            let json = generator.to_json(&schema)?;

            match args.output {
                Some(path) => {
                    std::fs::write(&path, format!("{}\n", json))?;
                    info!(path = %path.display(), fields = schema.fields.len(), "Wrote table schema");
                }
                None => println!("{}", json),
            }
        }
        Command::Inspect(args) => {
            args.sampling.apply(&mut config);

            let generator = SchemaGenerator::new(config);
            println!("{}", generator.profile_path(&args.csv)?);
        }
    }

    Ok(())
}
