use std::path::PathBuf;

const DEFAULT_DEV_STORAGE: &str = "database/music_library.db";
const DEFAULT_PROD_STORAGE: &str = "database/music_library_prod.db";

/// Where the tracks database lives, resolved from `NODE_ENV`,
/// `DB_STORAGE_DEV` and `DB_STORAGE_PROD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
  pub production: bool,
  pub path: PathBuf,
}

impl StorageConfig {
  pub fn from_env() -> Self {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let production = lookup("NODE_ENV").as_deref() == Some("production");

    let (override_key, default_path) = if production {
      ("DB_STORAGE_PROD", DEFAULT_PROD_STORAGE)
    } else {
      ("DB_STORAGE_DEV", DEFAULT_DEV_STORAGE)
    };

    let path = lookup(override_key)
      .filter(|value| !value.trim().is_empty())
      .map(PathBuf::from)
      .unwrap_or_else(|| PathBuf::from(default_path));

    Self { production, path }
  }

  /// An explicit path (e.g. from the command line) wins over the environment.
  pub fn with_override(self, path: Option<PathBuf>) -> Self {
    match path {
      Some(path) => Self { path, ..self },
      None => self,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn resolve(vars: &[(&str, &str)]) -> StorageConfig {
    let vars: HashMap<String, String> = vars
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    StorageConfig::from_lookup(|key| vars.get(key).cloned())
  }

  #[test]
  fn defaults_to_development_storage() {
    let config = resolve(&[]);
    assert!(!config.production);
    assert_eq!(config.path, PathBuf::from("database/music_library.db"));
  }

  #[test]
  fn production_uses_prod_default() {
    let config = resolve(&[("NODE_ENV", "production")]);
    assert!(config.production);
    assert_eq!(config.path, PathBuf::from("database/music_library_prod.db"));
  }

  #[test]
  fn environment_overrides_pick_matching_mode() {
    let vars = [
      ("DB_STORAGE_DEV", "/tmp/dev.db"),
      ("DB_STORAGE_PROD", "/tmp/prod.db"),
    ];
    assert_eq!(resolve(&vars).path, PathBuf::from("/tmp/dev.db"));

    let vars = [
      ("NODE_ENV", "production"),
      ("DB_STORAGE_DEV", "/tmp/dev.db"),
      ("DB_STORAGE_PROD", "/tmp/prod.db"),
    ];
    assert_eq!(resolve(&vars).path, PathBuf::from("/tmp/prod.db"));
  }

  #[test]
  fn other_node_env_values_are_development() {
    let config = resolve(&[("NODE_ENV", "staging"), ("DB_STORAGE_PROD", "/tmp/prod.db")]);
    assert!(!config.production);
    assert_eq!(config.path, PathBuf::from("database/music_library.db"));
  }

  #[test]
  fn explicit_path_wins() {
    let config = resolve(&[("DB_STORAGE_DEV", "/tmp/dev.db")])
      .with_override(Some(PathBuf::from("/tmp/cli.db")));
    assert_eq!(config.path, PathBuf::from("/tmp/cli.db"));
  }
}
