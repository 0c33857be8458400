use crate::error::{CalibraError, Result};
use crate::types::employee::Employee;
use crate::types::rating::{PercentageSplit, Rating};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Settings captured alongside a dataset so an analysis can be replayed
/// exactly as it was saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSettings {
    pub target_percentages: PercentageSplit,
    pub deviation_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub saved_at: String,
    pub employees: Vec<Employee>,
    pub settings: DatasetSettings,
}

impl Dataset {
    pub fn new(name: &str, employees: Vec<Employee>, settings: DatasetSettings) -> Self {
        Self {
            name: name.to_string(),
            saved_at: Utc::now().to_rfc3339(),
            employees,
            settings,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub name: String,
    pub saved_at: String,
    pub employees: usize,
}

pub fn dataset_dir(root: &Path) -> PathBuf {
    root.join(".calibra/datasets")
}

fn dataset_path(root: &Path, name: &str) -> Result<PathBuf> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed.len() > 100
        || trimmed.contains('/')
        || trimmed.contains('\\')
        || trimmed.contains("..")
    {
        return Err(CalibraError::InvalidDatasetName(name.to_string()));
    }
    Ok(dataset_dir(root).join(format!("{trimmed}.json")))
}

pub fn save(root: &Path, dataset: &Dataset, overwrite: bool) -> Result<PathBuf> {
    let path = dataset_path(root, &dataset.name)?;
    if path.exists() && !overwrite {
        return Err(CalibraError::DatasetExists(dataset.name.clone()));
    }
    fs::create_dir_all(dataset_dir(root))?;
    fs::write(&path, serde_json::to_string_pretty(dataset)?)?;
    info!(name = %dataset.name, employees = dataset.employees.len(), "dataset saved");
    Ok(path)
}

pub fn load(root: &Path, name: &str) -> Result<Dataset> {
    let path = dataset_path(root, name)?;
    if !path.exists() {
        return Err(CalibraError::DatasetNotFound(name.to_string()));
    }
    let content = fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Metadata for every saved dataset, newest first.
pub fn list(root: &Path) -> Result<Vec<DatasetSummary>> {
    let dir = dataset_dir(root);
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut summaries = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let content = fs::read_to_string(&path)?;
        let dataset: Dataset = serde_json::from_str(&content)?;
        summaries.push(DatasetSummary {
            name: dataset.name,
            saved_at: dataset.saved_at,
            employees: dataset.employees.len(),
        });
    }
    summaries.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
    Ok(summaries)
}

pub fn delete(root: &Path, name: &str) -> Result<()> {
    let path = dataset_path(root, name)?;
    if !path.exists() {
        return Err(CalibraError::DatasetNotFound(name.to_string()));
    }
    fs::remove_file(&path)?;
    info!(name, "dataset deleted");
    Ok(())
}

/// Calibration edit: set one employee's rating. Frozen rows are rejected.
pub fn set_rating(dataset: &mut Dataset, employee_id: &str, rating: Rating) -> Result<()> {
    let employee = find_employee(dataset, employee_id)?;
    if employee.is_frozen {
        return Err(CalibraError::EmployeeFrozen(employee_id.to_string()));
    }
    employee.rating = rating;
    Ok(())
}

/// Toggle an employee's frozen flag; returns the new state.
pub fn toggle_freeze(dataset: &mut Dataset, employee_id: &str) -> Result<bool> {
    let employee = find_employee(dataset, employee_id)?;
    employee.is_frozen = !employee.is_frozen;
    Ok(employee.is_frozen)
}

fn find_employee<'a>(dataset: &'a mut Dataset, employee_id: &str) -> Result<&'a mut Employee> {
    dataset
        .employees
        .iter_mut()
        .find(|employee| employee.employee_id == employee_id)
        .ok_or_else(|| CalibraError::EmployeeNotFound(employee_id.to_string()))
}
