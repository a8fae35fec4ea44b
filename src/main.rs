//! tagxfer - Table-driven Transfer for Tagged Streams
//!
//! This is the main entry point for tagxfer, which translates apertium-style
//! analyzer output between languages using structural pattern tables and
//! bilingual dictionaries.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::{non_blocking, rolling};

use tagxfer::cli::{Args, Commands};
use tagxfer::config::Config;
use tagxfer::tables::TableSet;
use tagxfer::workflow::Workflow;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Setup logging to stderr and file; stdout carries translated data
    setup_logging(args.verbose)?;

    // Load configuration
    let mut config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            // Try to load tagxfer.toml from current directory first
            if std::path::Path::new("tagxfer.toml").exists() {
                info!("Found tagxfer.toml in current directory, loading...");
                Config::from_file("tagxfer.toml")?
            } else {
                Config::default()
            }
        }
    };

    match args.command {
        Commands::Translate { input, output, direction, no_caret } => {
            if let Some(direction) = direction {
                config.direction = direction;
            }
            if no_caret {
                config.output.caret_prefix = false;
            }

            let workflow = Workflow::new(&config)?;
            workflow.translate_file(input.as_deref(), output.as_deref()).await?;
        }
        Commands::Batch { input_dir, output_dir, direction, extension } => {
            if let Some(direction) = direction {
                config.direction = direction;
            }

            let workflow = Workflow::new(&config)?;
            workflow.process_directory(&input_dir, &output_dir, &extension).await?;
        }
        Commands::Directions => {
            let current = config.direction().ok();
            println!("\nConfigured Directions:");
            println!("{:<12} {:<40} {:<40}", "Direction", "Patterns", "Dictionary");
            println!("{}", "-".repeat(92));

            for direction in config.directions() {
                let (pair, _) = config.pair_for(&direction)?;
                let marker = if current.as_ref() == Some(&direction) { " *" } else { "" };
                println!(
                    "{:<12} {:<40} {:<40}",
                    format!("{}{}", direction, marker),
                    config.resolve_path(&pair.patterns).display(),
                    config.resolve_path(&pair.dictionary).display()
                );
            }
        }
        Commands::Check { direction } => {
            if let Some(direction) = direction {
                config.direction = direction;
            }
            config.validate()?;

            let direction = config.direction()?;
            let tables = TableSet::load(&config, &direction)?;

            println!("\nTables for {}:", direction);
            println!(
                "Patterns:   {} entries ({} shadowed duplicates)",
                tables.patterns.len(),
                tables.patterns.shadowed()
            );
            println!(
                "Dictionary: {} entries ({} shadowed duplicates)",
                tables.dictionary.len(),
                tables.dictionary.shadowed()
            );
        }
        Commands::InitConfig { output } => {
            Config::default().save_to_file(&output)?;
            println!("Wrote default configuration to {}", output.display());
        }
    }

    Ok(())
}

/// Setup logging to both console and file
fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = std::env::current_dir()?.join(".tagxfer").join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Set up file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "tagxfer.log");
    let (non_blocking_file, _guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(_guard);

    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    // Console layer goes to stderr
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Logging initialized - console: {}, file: {}",
          log_level, log_dir.join("tagxfer.log").display());

    Ok(())
}
