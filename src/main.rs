mod aggregate;
mod config;
mod log;
mod models;
mod run;
mod store;
mod table;
mod ui;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use config::Config;
use store::{CsvRepository, SampleRepository, TransactionRepository};

fn main() -> Result<()> {
    let (data_arg, args) = split_data_flag(std::env::args().skip(1).collect())?;

    let dirs = Config::project_dirs()?;
    let data_dir = dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    if let Err(e) = log::init_logging(data_dir) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let (config, config_path) = Config::load_or_default(Config::default_path()?);
    if config_path.is_none() {
        eprintln!("Warning: config file could not be loaded, using defaults (changes will not be saved)");
    }

    let repo: Box<dyn TransactionRepository> = match data_arg.or_else(|| config.data_file.clone()) {
        Some(path) => Box::new(CsvRepository::new(PathBuf::from(run::shellexpand(
            &path.to_string_lossy(),
        )))),
        None => Box::new(SampleRepository),
    };
    let transactions = repo
        .list_transactions()
        .with_context(|| format!("Failed to load transactions from {}", repo.describe()))?;
    info!(count = transactions.len(), source = %repo.describe(), "loaded transactions");

    if args.is_empty() {
        let mut app = ui::app::App::new(transactions, config, config_path, repo.describe());
        run::as_tui(&mut app)
    } else {
        run::as_cli(&args, &transactions, &config.currency)
    }
}

/// Pull `--data <file>` out of the arguments, leaving the subcommand and its
/// own arguments.
fn split_data_flag(args: Vec<String>) -> Result<(Option<PathBuf>, Vec<String>)> {
    let mut data = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--data" {
            let path = iter
                .next()
                .ok_or_else(|| anyhow::anyhow!("--data needs a file path"))?;
            data = Some(PathBuf::from(path));
        } else {
            rest.push(arg);
        }
    }
    Ok((data, rest))
}
