use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Variable de entorno que fuerza una instalación "portable".
pub const BASE_DIR_ENV: &str = "DISCO_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

#[derive(Debug, Clone)]
pub struct DiscoPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
  pub cache_dir: PathBuf,
}

impl DiscoPaths {
  /// Rutas del sistema, o bajo `$DISCO_BASE_DIR` si está definida.
  pub fn new() -> Result<Self, ConfigError> {
    match std::env::var_os(BASE_DIR_ENV) {
      Some(base) => Self::with_base(base),
      None => {
        let proj_dirs = ProjectDirs::from("com", "disco", "disco").ok_or(ConfigError::Directories)?;
        Self::create(
          proj_dirs.config_dir().to_path_buf(),
          proj_dirs.config_dir().to_path_buf(),
          proj_dirs.data_dir().to_path_buf(),
          proj_dirs.cache_dir().to_path_buf(),
        )
      }
    }
  }

  /// Todo bajo `base`: `config/`, `data/` y `cache/`.
  pub fn with_base(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let base = base.as_ref();
    Self::create(base.to_path_buf(), base.join("config"), base.join("data"), base.join("cache"))
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  fn create(
    base_dir: PathBuf,
    config_dir: PathBuf,
    data_dir: PathBuf,
    cache_dir: PathBuf,
  ) -> Result<Self, ConfigError> {
    std::fs::create_dir_all(&config_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    std::fs::create_dir_all(&cache_dir)?;

    Ok(Self { base_dir, config_dir, data_dir, cache_dir })
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("disco.toml")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  struct EnvVarGuard {
    key: String,
    original: Option<String>,
  }

  impl EnvVarGuard {
    fn new(key: &str, value: &str) -> Self {
      let original = std::env::var(key).ok();
      unsafe { std::env::set_var(key, value) };
      EnvVarGuard { key: key.to_owned(), original }
    }
  }

  impl Drop for EnvVarGuard {
    fn drop(&mut self) {
      match &self.original {
        Some(val) => unsafe { std::env::set_var(&self.key, val) },
        None => unsafe { std::env::remove_var(&self.key) },
      }
    }
  }

  #[test]
  fn test_disco_base_dir_override() {
    let tmp = tempdir().unwrap();
    let _env = EnvVarGuard::new(BASE_DIR_ENV, tmp.path().to_str().unwrap());

    let paths = DiscoPaths::new().unwrap();

    assert_eq!(paths.base_dir, tmp.path());
    assert_eq!(paths.config_dir, tmp.path().join("config"));
    assert_eq!(paths.data_dir, tmp.path().join("data"));
    assert_eq!(paths.cache_dir, tmp.path().join("cache"));

    assert!(paths.config_dir.exists());
    assert!(paths.data_dir.exists());
    assert!(paths.cache_dir.exists());
  }

  #[test]
  fn explicit_base_creates_layout() {
    let tmp = tempdir().unwrap();
    let paths = DiscoPaths::with_base(tmp.path().join("portable")).unwrap();

    assert_eq!(paths.config_file(), tmp.path().join("portable").join("config").join("disco.toml"));
    assert!(paths.data_dir.is_dir());
  }
}
