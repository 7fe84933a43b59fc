//! Paku - pacman/AUR helper
//!
//! Usage:
//!   paku config get KEY        # Look up one key
//!   paku config show           # Dump the parsed mapping

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paku_core::config::{ConfigStore, ConfigValue, makepkg_config, pacman_config};

#[derive(Parser)]
#[command(name = "paku")]
#[command(about = "Pacman/AUR helper", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect system configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Look up a single key
    Get {
        key: String,

        /// Which config file family to read
        #[arg(short, long, value_enum, default_value_t = ConfigSource::Pacman)]
        source: ConfigSource,

        /// Read from an explicit file instead of the default path
        #[arg(long)]
        file: Option<PathBuf>,

        /// Value to print when the key is absent or empty
        #[arg(long)]
        fallback: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Print every parsed key
    Show {
        /// Which config file family to read
        #[arg(short, long, value_enum, default_value_t = ConfigSource::Pacman)]
        source: ConfigSource,

        /// Read from an explicit file instead of the default path
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "plain")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ConfigSource {
    /// /etc/pacman.conf
    Pacman,
    /// makepkg.conf (user override aware)
    Makepkg,
}

impl ConfigSource {
    fn store(self) -> ConfigStore {
        match self {
            ConfigSource::Pacman => pacman_config(),
            ConfigSource::Makepkg => makepkg_config(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable output
    #[default]
    Plain,
    /// Machine-readable JSON
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paku=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Config(ConfigCommands::Get {
            key,
            source,
            file,
            fallback,
            format,
        }) => run_config_get(&key, source, file, fallback, format),
        Commands::Config(ConfigCommands::Show {
            source,
            file,
            format,
        }) => run_config_show(source, file, format),
    }
}

fn run_config_get(
    key: &str,
    source: ConfigSource,
    file: Option<PathBuf>,
    fallback: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let store = source.store();
    let fallback = fallback.map(ConfigValue::Single);
    let value = store.get(key, file.as_deref())?.or(fallback);

    match value {
        Some(value) => print_value(&value, format)?,
        None => {
            eprintln!("{} key not set: {}", style("error:").red().bold(), key);
            std::process::exit(1);
        }
    }
    Ok(())
}

fn run_config_show(source: ConfigSource, file: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let store = source.store();
    let config = store.get_config(file.as_deref())?;

    match format {
        OutputFormat::Plain => {
            let mut keys: Vec<_> = config.keys().collect();
            keys.sort();
            for key in keys {
                println!("{} = {}", style(key).cyan(), config[key]);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&*config)?);
        }
    }
    Ok(())
}

fn print_value(value: &ConfigValue, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => println!("{value}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
    }
    Ok(())
}
