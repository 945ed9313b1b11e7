use anyhow::Context;
use clap::Parser;
use squadforge::config::ConfigManager;
use squadforge::data::CsvConnector;
use squadforge::engines::evolution::{ConsoleProgressCallback, EvolutionEngine};

/// Evolve a best-value fantasy squad from a priced player catalog.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: std::path::PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let manager = ConfigManager::new();
    manager
        .load_from_file(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    let config = manager.get();

    let (catalog, summary) =
        CsvConnector::load_catalog(&config.data.input_file, Some(config.data.min_players))
            .with_context(|| format!("loading player catalog from {}", config.data.input_file))?;
    println!("total players imported: {}", summary.total_players);
    log::info!(
        "catalog {}: {:?} players per position, prices {:?}, scores {:?}",
        summary.file_path,
        summary.players_per_position,
        summary.price_range,
        summary.score_range
    );

    let mut engine = EvolutionEngine::new(config.evolution, config.squad, catalog);
    let hall_of_fame = engine.run(ConsoleProgressCallback)?;

    match hall_of_fame.first() {
        Some(best) => {
            println!("HOF");
            println!("{best}");
        }
        None => println!("No legal squad found."),
    }

    Ok(())
}
