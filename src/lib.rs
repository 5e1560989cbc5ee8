// ============================================================
// DKAN SCHEMA LIBRARY
// ============================================================
// Module tree, tracing setup, and the binary entry point

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::interfaces::cli::{self, Cli};

pub use crate::application::SchemaGenerator;
pub use crate::domain::error::{AppError, Result};
pub use crate::domain::schema::{
    infer_type, infer_type_from_strs, sanitize, ColumnProfile, CsvSample, FieldType, RawValue,
    SchemaConfig, SchemaField, TableSchema,
};
pub use crate::infrastructure::csv::{ColumnProfiler, CsvParser};

/// Install the stderr log subscriber; `RUST_LOG` overrides `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run() {
    // A missing .env is fine; config falls back to the TOML file and defaults
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if let Err(err) = cli::execute(cli) {
        error!(error = %err, "dkan-schema failed");
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
