use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "calibra",
    version,
    about = "Employee performance rating calibration CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter calibra.toml
    Init(InitCommand),
    /// Write a sample roster CSV
    Template(TemplateCommand),
    /// Compute the rating distribution and compare against targets
    Analyze(AnalyzeCommand),
    /// Check that the target split sums to exactly 100
    Validate(ValidateCommand),
    /// Set one rating's target percentage
    Set(SetCommand),
    /// Manage saved datasets
    Dataset(DatasetCommand),
    /// Set one employee's rating in a saved dataset
    Rate(RateCommand),
    /// Toggle an employee's frozen flag in a saved dataset
    Freeze(FreezeCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Table,
}

#[derive(Args)]
pub struct InitCommand {
    #[arg(default_value = ".")]
    pub path: PathBuf,
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct TemplateCommand {
    pub out: PathBuf,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Roster CSV to analyze
    #[arg(required_unless_present = "dataset", conflicts_with = "dataset")]
    pub roster: Option<PathBuf>,

    /// Analyze a saved dataset instead of a roster file
    #[arg(long)]
    pub dataset: Option<String>,

    #[arg(short, long, value_enum, default_value = "table")]
    pub format: ReportFormat,

    /// Override the configured deviation threshold (percentage points)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Workspace root holding calibra.toml and .calibra/
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args)]
pub struct ValidateCommand {
    #[arg(default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args)]
pub struct SetCommand {
    /// Rating whose target to change (1-5)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: u8,

    /// New target percentage for that rating
    pub percentage: f64,

    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args)]
pub struct DatasetCommand {
    #[command(subcommand)]
    pub action: DatasetAction,
}

#[derive(Subcommand)]
pub enum DatasetAction {
    /// Snapshot a roster plus the current settings under a name
    Save(DatasetSaveCommand),
    /// List saved datasets, newest first
    List(DatasetListCommand),
    /// Show one dataset's metadata
    Show(DatasetShowCommand),
    /// Delete a saved dataset
    Delete(DatasetDeleteCommand),
}

#[derive(Args)]
pub struct DatasetSaveCommand {
    pub name: String,
    #[arg(long)]
    pub roster: PathBuf,
    #[arg(long)]
    pub force: bool,
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args)]
pub struct DatasetListCommand {
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args)]
pub struct DatasetShowCommand {
    pub name: String,
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args)]
pub struct DatasetDeleteCommand {
    pub name: String,
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args)]
pub struct RateCommand {
    pub employee_id: String,

    /// New rating (1-5)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: u8,

    #[arg(long)]
    pub dataset: String,

    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args)]
pub struct FreezeCommand {
    pub employee_id: String,

    #[arg(long)]
    pub dataset: String,

    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}
