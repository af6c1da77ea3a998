mod catalog;
mod cli;
mod config;
mod error;
mod quiz;
mod report;
mod scoring;
mod store;
mod types;

use crate::error::MatchError;
use crate::store::ResultStore;
use chrono::DateTime;
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NOT_FOUND: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_toml_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, MatchError> {
    if !path.exists() {
        return Err(MatchError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32, MatchError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let loaded = config::load_config(cli.config.as_deref())?;
    let store = ResultStore::from_config(loaded.as_ref());

    match cli.command {
        cli::Commands::Match(cmd) => {
            let prefs: types::preferences::UserPreferences = read_toml_file(&cmd.preferences)?;
            prefs.validate()?;
            let catalog = catalog::load_catalog(loaded.as_ref())?;
            let result = scoring::recommend(&prefs, &catalog)?;

            let rendered = report::render(&result, output_format(&cmd.format))?;
            println!("{rendered}");

            if cmd.save {
                let entry = store.save(&prefs, &result, cmd.nickname.as_deref())?;
                println!("saved: {} ({})", entry.id, entry.nickname);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Quiz(cmd) => {
            let answers: quiz::QuizAnswers = read_toml_file(&cmd.answers)?;
            let prefs = quiz::run_quiz(&answers)?;
            let catalog = catalog::load_catalog(loaded.as_ref())?;
            let result = scoring::recommend(&prefs, &catalog)?;

            let rendered = report::render(&result, output_format(&cmd.format))?;
            println!("{rendered}");

            if cmd.save {
                let entry = store.save(&prefs, &result, cmd.nickname.as_deref())?;
                println!("saved: {} ({})", entry.id, entry.nickname);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Catalog(_) => {
            let catalog = catalog::load_catalog(loaded.as_ref())?;
            println!("catalog:");
            for item in &catalog {
                println!(
                    "- {} [{} by {}, {}, ${:.0}]",
                    item.id,
                    item.name,
                    item.manufacturer,
                    item.kind.label(),
                    item.price
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::List(_) => {
            tracing::debug!(store = %store.path().display(), "listing saved results");
            let entries = store.list();
            if entries.is_empty() {
                println!("no saved results");
                return Ok(exit_code::SUCCESS);
            }
            println!("saved results:");
            for entry in &entries {
                let when = DateTime::from_timestamp_millis(entry.timestamp)
                    .map(|dt| dt.to_rfc3339())
                    .unwrap_or_else(|| entry.timestamp.to_string());
                println!(
                    "- {} [{} {}% {}]",
                    entry.id, entry.nickname, entry.result.top_pick.match_percent, when
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Show(cmd) => match store.get(&cmd.id) {
            Some(entry) => {
                println!("nickname: {}", entry.nickname);
                let rendered = report::render(&entry.result, output_format(&cmd.format))?;
                println!("{rendered}");
                Ok(exit_code::SUCCESS)
            }
            None => {
                eprintln!("saved result not found: {}", cmd.id);
                Ok(exit_code::NOT_FOUND)
            }
        },
        cli::Commands::Delete(cmd) => {
            if store.delete(&cmd.id)? {
                println!("deleted: {}", cmd.id);
                Ok(exit_code::SUCCESS)
            } else {
                eprintln!("saved result not found: {}", cmd.id);
                Ok(exit_code::NOT_FOUND)
            }
        }
        cli::Commands::Rename(cmd) => {
            if store.rename(&cmd.id, &cmd.nickname)? {
                println!("renamed: {} ({})", cmd.id, cmd.nickname);
                Ok(exit_code::SUCCESS)
            } else {
                eprintln!("saved result not found: {}", cmd.id);
                Ok(exit_code::NOT_FOUND)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
