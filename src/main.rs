mod actions;
mod app;
mod catalog;
mod cli;
mod config;
mod filter;
mod render;
mod state;
mod types;
mod ui;

use app::App;
use catalog::Catalog;
use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::Result;
use config::Config;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = Config::load()?;
    init_logging(&config)?;

    let catalog = Catalog::builtin();

    match cli.command {
        None => {
            let app = App::new(&config, cli.category, cli.search);
            let terminal = ratatui::init();
            let result = app.run(terminal);
            ratatui::restore();
            result
        }
        Some(Commands::Categories) => {
            print!("{}", cli::categories_text(&catalog));
            Ok(())
        }
        Some(Commands::List { json }) => {
            let endpoints = cli::list_endpoints(&catalog, cli.category, cli.search.as_deref());
            if json {
                println!("{}", cli::list_json(&endpoints)?);
            } else {
                print!("{}", cli::list_text(&endpoints));
            }
            Ok(())
        }
        Some(Commands::Show { id }) => {
            print!("{}", cli::show_text(&catalog, &id)?);
            Ok(())
        }
        Some(Commands::Config { init }) => {
            print!("{}", cli::config_command(&config, init)?);
            Ok(())
        }
    }
}

/// Log to a file; stdout is either the TUI or command output
fn init_logging(config: &Config) -> Result<()> {
    let path = config.logging.file_path();
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::debug!(log_file = %path.display(), "logging initialized");
    Ok(())
}
