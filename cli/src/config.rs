use std::path::PathBuf;

use clap::Parser;
use disco_config::{ConfigError, DiscoPaths};
use disco_storage::StorageConfig;

/// Argumentos de línea de comandos. Cada opción puede venir del entorno.
#[derive(Parser, Debug, Default)]
#[command(name = "disco")]
#[command(about = "Catalogo de canciones y grabacion de discos")]
#[command(version)]
pub struct Args {
  /// Directorio base (config, datos y cache quedan debajo)
  #[arg(long, env = "DISCO_BASE_DIR")]
  pub base_dir: Option<PathBuf>,

  /// Archivo de respaldo del catalogo y los discos
  #[arg(long, env = "DISCO_STATE_FILE")]
  pub state_file: Option<PathBuf>,

  /// Archivo donde se graba el reporte del disco
  #[arg(long, env = "DISCO_EXPORT_FILE")]
  pub export_file: Option<PathBuf>,

  /// Filtro de logs (sintaxis de `RUST_LOG`), p. ej. `disco=debug`
  #[arg(long, env = "DISCO_LOG")]
  pub log: Option<String>,
}

impl Args {
  /// Configuración de almacenamiento efectiva: `disco.toml` más las
  /// opciones de la línea de comandos, que tienen prioridad.
  pub fn storage_config(&self) -> Result<StorageConfig, ConfigError> {
    let paths = match &self.base_dir {
      Some(base) => DiscoPaths::with_base(base)?,
      None => DiscoPaths::detect()?,
    };

    let mut cfg = StorageConfig::load(&paths)?;
    if let Some(state_file) = &self.state_file {
      cfg.state_file = state_file.clone();
    }
    if let Some(export_file) = &self.export_file {
      cfg.export_file = export_file.clone();
    }

    Ok(cfg)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn flags_override_config_file() {
    let tmp = tempdir().unwrap();
    let args = Args {
      base_dir: Some(tmp.path().to_path_buf()),
      export_file: Some(tmp.path().join("salida.dic")),
      ..Args::default()
    };

    let cfg = args.storage_config().unwrap();

    assert_eq!(cfg.state_file, tmp.path().join("data").join("respaldo.json"));
    assert_eq!(cfg.export_file, tmp.path().join("salida.dic"));
  }

  #[test]
  fn parses_long_flags() {
    let args = Args::try_parse_from(["disco", "--state-file", "a.json", "--log", "debug"]).unwrap();
    assert_eq!(args.state_file, Some(PathBuf::from("a.json")));
    assert_eq!(args.log.as_deref(), Some("debug"));
  }
}
