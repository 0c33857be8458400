use crate::error::{CalibraError, Result};
use crate::types::config::CalibraConfig;
use crate::types::rating::{PercentageSplit, Rating};
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "calibra.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".calibra/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/calibra/config.toml";

pub fn load_config(root: &Path) -> Result<Option<CalibraConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<CalibraConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: CalibraConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CalibraError::ConfigParse(e.to_string()))?;
    Ok(Some(cfg))
}

/// Rewrite exactly one target slot in the repo config file, preserving
/// every other key. The file is created with defaults when missing.
/// Returns the resulting split so callers can report sum and validity.
pub fn set_target(root: &Path, rating: Rating, percentage: f64) -> Result<PercentageSplit> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    let mut value = if repo_path.exists() {
        read_toml_value(&repo_path)?
    } else {
        Value::Table(Map::new())
    };

    let table = match &mut value {
        Value::Table(table) => table,
        _ => {
            return Err(CalibraError::ConfigParse(format!(
                "{}: top level is not a table",
                repo_path.display()
            )))
        }
    };
    let targets = table
        .entry("targets".to_string())
        .or_insert_with(|| Value::Table(Map::new()));
    let targets_table = match targets {
        Value::Table(table) => table,
        _ => {
            return Err(CalibraError::ConfigParse(format!(
                "{}: [targets] is not a table",
                repo_path.display()
            )))
        }
    };
    targets_table.insert(format!("rating{rating}"), Value::Float(percentage));

    std::fs::write(&repo_path, toml::to_string_pretty(&value)?)?;

    let cfg: CalibraConfig = value
        .try_into()
        .map_err(|e: toml::de::Error| CalibraError::ConfigParse(e.to_string()))?;
    Ok(cfg.targets)
}

/// Write a starter repo config. Refuses to overwrite unless forced.
pub fn write_default_config(root: &Path, force: bool) -> Result<PathBuf> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if repo_path.exists() && !force {
        return Err(CalibraError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} already exists (use --force)", repo_path.display()),
        )));
    }
    std::fs::write(&repo_path, DEFAULT_CONFIG_TEMPLATE)?;
    Ok(repo_path)
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# calibra configuration
#
# Target share of employees per rating. Must sum to exactly 100 for the
# split to be considered valid; calibra still analyzes an invalid split
# but reports it as a blocking finding.
[targets]
rating1 = 10.0
rating2 = 20.0
rating3 = 40.0
rating4 = 20.0
rating5 = 10.0

[calibration]
# Deviation (percentage points) beyond which a rating bucket is flagged.
deviation_threshold = 2.0
";

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CalibraError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_repo_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[calibration]
deviation_threshold = 5.0

[targets]
rating1 = 15.0
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[targets]
rating1 = 10.0
rating2 = 20.0
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".calibra")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[targets]
rating2 = 25.0
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.targets.rating1, 10.0);
        assert_eq!(cfg.targets.rating2, 25.0);
        assert_eq!(cfg.targets.rating3, 40.0);
        assert_eq!(cfg.calibration.deviation_threshold, 5.0);
    }

    #[test]
    fn set_target_rewrites_one_slot_and_keeps_the_rest() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[targets]
rating1 = 10.0
rating2 = 20.0
rating3 = 40.0
rating4 = 20.0
rating5 = 10.0

[calibration]
deviation_threshold = 3.0
"#,
        )
        .expect("repo config should write");

        let split = set_target(root.path(), Rating::One, 30.0).expect("set should succeed");
        assert_eq!(split.rating1, 30.0);
        assert_eq!(split.rating2, 20.0);
        assert_eq!(split.sum(), 120.0);
        assert!(!split.is_valid());

        let cfg = load_config_with_global(root.path(), None)
            .expect("load should succeed")
            .expect("config should exist");
        assert_eq!(cfg.targets.rating1, 30.0);
        assert_eq!(cfg.calibration.deviation_threshold, 3.0);
    }

    #[test]
    fn set_target_creates_missing_config() {
        let root = TempDir::new().expect("temp dir should be created");
        let split = set_target(root.path(), Rating::Five, 12.5).expect("set should succeed");
        assert_eq!(split.rating5, 12.5);
        assert!(root.path().join(DEFAULT_CONFIG_FILE).exists());
    }

    #[test]
    fn write_default_config_refuses_overwrite_without_force() {
        let root = TempDir::new().expect("temp dir should be created");
        write_default_config(root.path(), false).expect("first write should succeed");
        assert!(write_default_config(root.path(), false).is_err());
        write_default_config(root.path(), true).expect("forced write should succeed");

        let cfg = load_config_with_global(root.path(), None)
            .expect("load should succeed")
            .expect("config should exist");
        assert!(cfg.targets.is_valid());
    }
}
