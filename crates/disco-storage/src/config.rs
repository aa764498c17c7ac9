use disco_config::{ConfigBackend, ConfigError, DiscoPaths, TomlConfigBackend};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const SECTION: &str = "storage";

/// Sección `[storage]` de `disco.toml`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
  /// Respaldo del catálogo y las playlists entre ejecuciones.
  pub state_file: PathBuf,
  /// Reporte del último disco grabado.
  pub export_file: PathBuf,
}

impl StorageConfig {
  pub fn defaults_for(paths: &DiscoPaths) -> Self {
    StorageConfig {
      state_file: paths.data_dir.join("respaldo.json"),
      export_file: paths.data_dir.join("disco.dic"),
    }
  }

  /// Lee la sección (o los valores por defecto) y la vuelve a escribir para
  /// que quede visible en el archivo de configuración.
  pub fn load(paths: &DiscoPaths) -> Result<Self, ConfigError> {
    let backend = TomlConfigBackend::new(paths);
    let cfg = backend.load_section_or(SECTION, Self::defaults_for(paths))?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self, paths: &DiscoPaths) -> Result<(), ConfigError> {
    TomlConfigBackend::new(paths).save_section(SECTION, self)
  }
}
