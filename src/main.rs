use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use aton_s125::config::Config;
use aton_s125::domain::{load_records, AtonType};
use aton_s125::logging;
use aton_s125::S125Engine;

#[derive(Parser)]
#[command(name = "aton_s125")]
#[command(about = "Convert seamark-tagged Aids to Navigation into S-125 datasets")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a JSON records file into a dataset
    Convert {
        /// JSON array of AtoN records
        #[arg(long)]
        input: PathBuf,
        /// TOML file with dataset metadata and engine settings
        #[arg(long)]
        config: Option<PathBuf>,
        /// Where to write the dataset; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
        /// Pretty-print the dataset JSON
        #[arg(long)]
        pretty: bool,
    },
    /// List the recognized seamark type tokens
    Types,
}

fn convert(input: PathBuf, config: Option<PathBuf>, output: Option<PathBuf>, pretty: bool) -> Result<()> {
    let mut config = match config {
        Some(path) => Config::load(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => {
            warn!("No config file given, using default settings and empty dataset metadata");
            Config::default()
        }
    };

    if config.dataset.dataset_id.trim().is_empty() {
        config.dataset.dataset_id = uuid::Uuid::new_v4().to_string();
        info!(dataset_id = %config.dataset.dataset_id, "Generated dataset id");
    }

    let records = load_records(&input)
        .with_context(|| format!("reading records from {}", input.display()))?;
    info!(records = records.len(), input = %input.display(), "Loaded records");

    let engine = S125Engine::new(config.engine);
    let dataset = engine.package_to_dataset(&config.dataset, &records);

    let json = if pretty {
        serde_json::to_string_pretty(&dataset)?
    } else {
        serde_json::to_string(&dataset)?
    };

    match output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("writing dataset to {}", path.display()))?;
            info!(members = dataset.members.len(), output = %path.display(), "Dataset written");
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn main() -> Result<()> {
    let _guard = logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            config,
            output,
            pretty,
        } => convert(input, config, output, pretty)?,
        Commands::Types => {
            for aton_type in AtonType::ALL {
                // Physical AIS aids are radio stations with category `ais`
                if aton_type == AtonType::PhysicalAisAid {
                    continue;
                }
                let role = if aton_type.is_structure() { "structure" } else { "equipment" };
                println!("{:<36} {:<10} {:?}", aton_type.key(), role, aton_type);
            }
        }
    }
    Ok(())
}
