use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "plansage-cli", version, about = "PlanSage CLI")]
struct Cli {
    /// Use this config file instead of ~/.config/plansage/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate today's fatigue from sleep and mood
    Fatigue {
        /// Hours slept last night (0-12)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=12))]
        sleep: u8,
        /// Current mood: good, neutral or bad
        #[arg(long)]
        mood: plansage_core::Mood,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Recommend open slots for the week
    Recommend(commands::recommend::RecommendArgs),
    /// Interactive planning session (state lasts until you quit)
    Session,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("plansage_core=warn,plansage_cli=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Fatigue { sleep, mood, json } => commands::fatigue::run(sleep, mood, json),
        Commands::Recommend(args) => commands::recommend::run(args, config_path),
        Commands::Session => commands::session::run(config_path),
        Commands::Config { action } => commands::config::run(action, config_path),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "plansage-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
