use crate::error::{Result, StandingError};
use crate::types::config::StandingConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "cohort-standing.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".cohort-standing/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/cohort-standing/config.toml";

/// Loads and validates the layered configuration rooted at `root`.
///
/// Returns `None` when `root` has no `cohort-standing.toml`; callers fall back
/// to the default scoring policy.
pub fn load_config(root: &Path) -> Result<Option<StandingConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<StandingConfig>> {
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

    let cfg: StandingConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| StandingError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    tracing::debug!(root = %root.display(), "loaded layered configuration");
    Ok(Some(cfg))
}

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
        .map_err(|e| StandingError::ConfigParse(format!("{}: {}", path.display(), e)))
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
[policy.thresholds]
excellent = 90

[window]
since_days = 60
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[policy.weights]
evaluation = 0.5
task = 0.25
interaction = 0.25

[window]
since_days = 30
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".cohort-standing"))
            .expect("local config dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[policy.weights]
task = 0.3
interaction = 0.2
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        let policy = cfg.scoring_policy();
        assert_eq!(policy.evaluation_weight, 0.5);
        assert_eq!(policy.task_weight, 0.3);
        assert_eq!(policy.interaction_weight, 0.2);
        assert_eq!(policy.category_thresholds.excellent, 90);
        assert_eq!(cfg.since_days(), Some(30));
    }

    #[test]
    fn load_config_rejects_invalid_merged_policy() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[policy.weights]
evaluation = 0.8
"#,
        )
        .expect("repo config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(matches!(err, StandingError::ConfigParse(_)));
    }

    #[test]
    fn load_config_reports_path_on_toml_syntax_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[policy.weights\n")
            .expect("repo config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
