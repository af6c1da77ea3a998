use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "vapormatch",
    version,
    about = "Vaporizer recommendation engine with a saved-match store"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Explicit config file (skips the global/local merge)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score the catalog against a preferences file
    Match(MatchCommand),
    /// Run the step-by-step quiz from an answers file
    Quiz(QuizCommand),
    /// List the catalog
    Catalog(CatalogCommand),
    /// List saved results, newest first
    List(ListCommand),
    /// Show one saved result
    Show(ShowCommand),
    /// Delete one saved result
    Delete(DeleteCommand),
    /// Rename one saved result
    Rename(RenameCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct MatchCommand {
    /// Preferences file (TOML)
    pub preferences: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Persist the result to the saved-result store
    #[arg(long)]
    pub save: bool,
    /// Nickname for the saved result (defaults to the top pick's name)
    #[arg(long, requires = "save")]
    pub nickname: Option<String>,
}

#[derive(Args)]
pub struct QuizCommand {
    /// Answers file (TOML), one entry per quiz step
    pub answers: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long)]
    pub save: bool,
    #[arg(long, requires = "save")]
    pub nickname: Option<String>,
}

#[derive(Args)]
pub struct CatalogCommand {}

#[derive(Args)]
pub struct ListCommand {}

#[derive(Args)]
pub struct ShowCommand {
    pub id: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct DeleteCommand {
    pub id: String,
}

#[derive(Args)]
pub struct RenameCommand {
    pub id: String,
    pub nickname: String,
}
