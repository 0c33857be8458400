mod analyze;
mod cli;
mod config;
mod dataset;
mod distribution;
mod error;
mod import;
mod report;
mod template;
mod types;

use crate::dataset::{Dataset, DatasetSettings};
use crate::error::CalibraError;
use crate::import::validate::RowError;
use crate::types::employee::Employee;
use crate::types::rating::Rating;
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, CalibraError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Init(cmd) => {
            if !cmd.path.exists() {
                return Err(CalibraError::PathNotFound(cmd.path.display().to_string()));
            }
            let path = config::write_default_config(&cmd.path, cmd.force)?;
            println!("wrote {}", path.display());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Template(cmd) => {
            template::write_template(&cmd.out)?;
            println!("wrote {}", cmd.out.display());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Analyze(cmd) => {
            let loaded = config::load_config(&cmd.root)?;
            let cfg = loaded.clone().unwrap_or_default();

            let (employees, targets, threshold, settings_found) =
                if let Some(name) = &cmd.dataset {
                    let ds = dataset::load(&cmd.root, name)?;
                    let threshold = cmd.threshold.unwrap_or(ds.settings.deviation_threshold);
                    (
                        ds.employees,
                        ds.settings.target_percentages,
                        threshold,
                        true,
                    )
                } else {
                    // clap requires a roster path when --dataset is absent
                    let roster = match &cmd.roster {
                        Some(path) => path,
                        None => {
                            return Err(CalibraError::PathNotFound("<roster>".to_string()))
                        }
                    };
                    let employees = load_roster_strict(roster)?;
                    let threshold = cmd
                        .threshold
                        .unwrap_or(cfg.calibration.deviation_threshold);
                    (employees, cfg.targets, threshold, loaded.is_some())
                };

            let calibration_report =
                analyze::analyze(&employees, &targets, threshold, settings_found);

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Table => report::OutputFormat::Table,
            };
            let rendered = report::render(&calibration_report, output_format)?;
            println!("{rendered}");

            if !settings_found {
                eprintln!("warning: no calibra.toml found in {}", cmd.root.display());
            }

            if calibration_report.has_blocking() {
                Ok(exit_code::BLOCKING)
            } else if calibration_report.has_warnings() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Validate(cmd) => {
            let loaded = config::load_config(&cmd.root)?;
            if loaded.is_none() {
                eprintln!("warning: no calibra.toml found in {}", cmd.root.display());
            }
            let split = loaded.unwrap_or_default().targets;

            println!("target sum: {}", split.sum());
            if split.is_valid() {
                println!("targets valid");
                Ok(exit_code::SUCCESS)
            } else {
                let remaining = split.remaining();
                if remaining > 0.0 {
                    println!("targets invalid: short by {remaining}");
                } else {
                    println!("targets invalid: over by {}", -remaining);
                }
                Ok(exit_code::BLOCKING)
            }
        }
        cli::Commands::Set(cmd) => {
            let rating = parse_rating(cmd.rating)?;
            let split = config::set_target(&cmd.root, rating, cmd.percentage)?;

            println!("rating{rating} target set to {}", cmd.percentage);
            println!("target sum: {}", split.sum());
            if split.is_valid() {
                println!("targets valid");
            } else if split.remaining() > 0.0 {
                println!("targets invalid: short by {}", split.remaining());
            } else {
                println!("targets invalid: over by {}", -split.remaining());
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Dataset(cmd) => match cmd.action {
            cli::DatasetAction::Save(cmd) => {
                let employees = load_roster_strict(&cmd.roster)?;
                let cfg = config::load_config(&cmd.root)?.unwrap_or_default();
                let ds = Dataset::new(
                    &cmd.name,
                    employees,
                    DatasetSettings {
                        target_percentages: cfg.targets,
                        deviation_threshold: cfg.calibration.deviation_threshold,
                    },
                );
                let path = dataset::save(&cmd.root, &ds, cmd.force)?;
                println!(
                    "saved dataset {} ({} employees) to {}",
                    ds.name,
                    ds.employees.len(),
                    path.display()
                );
                Ok(exit_code::SUCCESS)
            }
            cli::DatasetAction::List(cmd) => {
                let summaries = dataset::list(&cmd.root)?;
                if summaries.is_empty() {
                    println!("no datasets");
                } else {
                    for summary in &summaries {
                        println!(
                            "{}  {}  {} employees",
                            summary.saved_at, summary.name, summary.employees
                        );
                    }
                }
                Ok(exit_code::SUCCESS)
            }
            cli::DatasetAction::Show(cmd) => {
                let ds = dataset::load(&cmd.root, &cmd.name)?;
                println!("name: {}", ds.name);
                println!("saved at: {}", ds.saved_at);
                println!("employees: {}", ds.employees.len());
                println!("target sum: {}", ds.settings.target_percentages.sum());
                println!(
                    "deviation threshold: {}",
                    ds.settings.deviation_threshold
                );
                Ok(exit_code::SUCCESS)
            }
            cli::DatasetAction::Delete(cmd) => {
                dataset::delete(&cmd.root, &cmd.name)?;
                println!("deleted dataset {}", cmd.name);
                Ok(exit_code::SUCCESS)
            }
        },
        cli::Commands::Rate(cmd) => {
            let rating = parse_rating(cmd.rating)?;
            let mut ds = dataset::load(&cmd.root, &cmd.dataset)?;
            dataset::set_rating(&mut ds, &cmd.employee_id, rating)?;
            dataset::save(&cmd.root, &ds, true)?;
            println!(
                "{} rated {} in dataset {}",
                cmd.employee_id, rating, cmd.dataset
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Freeze(cmd) => {
            let mut ds = dataset::load(&cmd.root, &cmd.dataset)?;
            let frozen = dataset::toggle_freeze(&mut ds, &cmd.employee_id)?;
            dataset::save(&cmd.root, &ds, true)?;
            println!(
                "{} is now {} in dataset {}",
                cmd.employee_id,
                if frozen { "frozen" } else { "unfrozen" },
                cmd.dataset
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

/// Read a roster and refuse to continue when any row is invalid, so bad
/// ratings never reach the distribution engine.
fn load_roster_strict(path: &std::path::Path) -> Result<Vec<Employee>, CalibraError> {
    let outcome = import::read_roster(path)?;
    if !outcome.errors.is_empty() {
        print_row_errors(&outcome.errors);
        let rows: std::collections::HashSet<usize> =
            outcome.errors.iter().map(|error| error.row).collect();
        return Err(CalibraError::RosterValidation(rows.len()));
    }
    Ok(outcome.employees.into_iter().map(Employee::from).collect())
}

fn print_row_errors(errors: &[RowError]) {
    for error in errors {
        eprintln!("row {} [{}]: {}", error.row, error.field, error.message);
    }
}

fn parse_rating(value: u8) -> Result<Rating, CalibraError> {
    // clap's range parser keeps this in 1..=5 already
    Rating::from_u8(value)
        .ok_or_else(|| CalibraError::ConfigParse(format!("rating must be 1-5, got {value}")))
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
