use std::path::PathBuf;

use crate::domain::{Catalog, Playlist, PlaylistRegistry};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("io error: {0}")]
  Io(String),

  #[error("encode error: {0}")]
  Encode(String),
}

/// Port de persistencia de la sesión.
///
/// El formato en disco es decisión del adapter; el núcleo solo exige poder
/// guardar y recuperar catálogo + playlists y grabar el reporte de un disco.
pub trait SessionStore {
  /// Recupera el estado previo. Si no existe o está corrupto devuelve un
  /// catálogo y un registro vacíos: nunca falla.
  fn load(&self) -> (Catalog, PlaylistRegistry);

  fn save(&self, catalog: &Catalog, registry: &PlaylistRegistry) -> Result<(), StoreError>;

  /// Graba el reporte de `playlist` (sobrescribiendo el anterior) y devuelve
  /// la ruta escrita.
  fn export_playlist(&self, playlist: &Playlist, catalog: &Catalog) -> Result<PathBuf, StoreError>;
}
