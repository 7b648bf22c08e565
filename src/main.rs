//! Command-line interface for fixture-factory
//!
//! # Usage Examples
//!
//! ```bash
//! # Ten seeded integers, one JSON value per line
//! fixture-factory generate --kind int --seed 23 --count 10
//!
//! # Nullable UUIDs
//! fixture-factory generate --kind uuid --nullable --count 5
//!
//! # Values of a selector declared in a config file
//! fixture-factory select --config fixtures.yaml --qualifier color --count 3
//! ```
//!
//! Set `RUST_LOG=debug` to see how the fixture was built.

use anyhow::Context;
use clap::{Parser, Subcommand};
use fixture_core::{qualified_by, Fixture, Qualifier};
use fixture_factory::{build_fixture, render, FixtureConfig, ValueKind};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fixture-factory")]
#[command(about = "Generate deterministic, seeded fixture values as JSON")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate values of a built-in or extension kind
    Generate {
        /// Kind of value to generate
        #[arg(long, value_enum)]
        kind: ValueKind,

        /// Seed of the random source (overrides the config seed)
        #[arg(long, env = "FIXTURE_SEED")]
        seed: Option<u64>,

        /// YAML fixture configuration
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Qualifier to resolve the generator under
        #[arg(long)]
        qualifier: Option<String>,

        /// Number of values to print
        #[arg(long, default_value = "1")]
        count: usize,

        /// Print null for half of the values
        #[arg(long)]
        nullable: bool,
    },

    /// Pick values from a selector declared in a config file
    Select {
        /// YAML fixture configuration
        #[arg(long, value_name = "PATH")]
        config: PathBuf,

        /// Qualifier of the selector
        #[arg(long)]
        qualifier: String,

        /// Seed of the random source (overrides the config seed)
        #[arg(long, env = "FIXTURE_SEED")]
        seed: Option<u64>,

        /// Number of values to print
        #[arg(long, default_value = "1")]
        count: usize,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            kind,
            seed,
            config,
            qualifier,
            count,
            nullable,
        } => {
            let config = config.as_deref().map(load_config).transpose()?;
            let fixture = build_fixture(config.as_ref(), seed)
                .context("Failed to build fixture")?;
            let qualifier = qualifier.map(qualified_by);
            print_values(&fixture, kind, qualifier.as_ref(), count, nullable)?;
        }
        Commands::Select {
            config,
            qualifier,
            seed,
            count,
        } => {
            let config = load_config(&config)?;
            if !config.qualifiers().any(|q| q == qualifier) {
                anyhow::bail!("No selector '{qualifier}' in {}", config_label(&config));
            }
            let fixture = build_fixture(Some(&config), seed)
                .context("Failed to build fixture")?;
            let qualifier = qualified_by(&qualifier);
            print_values(&fixture, ValueKind::String, Some(&qualifier), count, false)?;
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<FixtureConfig> {
    FixtureConfig::from_file(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

fn config_label(config: &FixtureConfig) -> String {
    let declared: Vec<&str> = config.qualifiers().collect();
    format!("config (declared: {})", declared.join(", "))
}

fn print_values(
    fixture: &Fixture,
    kind: ValueKind,
    qualifier: Option<&Qualifier>,
    count: usize,
    nullable: bool,
) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..count {
        let value = render(fixture, kind, qualifier, nullable)?;
        writeln!(out, "{value}").context("Failed to write to stdout")?;
    }
    tracing::debug!("Printed {count} {kind:?} values");
    Ok(())
}
