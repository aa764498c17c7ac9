use std::path::PathBuf;

use tracing::{info, warn};

use crate::domain::{Catalog, Playlist, PlaylistRegistry, Song};
use crate::errors::CoreError;
use crate::ports::{SessionStore, StoreError, Terminal};
use crate::services::catalog_service::{CatalogService, UpdateOutcome};
use crate::services::prompt::Prompter;

/// Canción quitada del catálogo y cuántas playlists la siguen referenciando.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
  pub song: Song,
  pub referenced_by: usize,
}

/// Resultado de cerrar una playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BurnOutcome {
  /// Se grabó el reporte en `path` con el identificador final `id`.
  Burned { id: String, path: PathBuf },
  /// La playlist no tenía canciones: no se guarda ni se graba.
  Empty,
}

/// Estado de una ejecución: catálogo y playlists, más el store del que
/// salieron y al que vuelven al terminar.
pub struct Session<S: SessionStore> {
  store: S,
  catalog: Catalog,
  registry: PlaylistRegistry,
}

impl<S: SessionStore> Session<S> {
  /// Abre la sesión con lo que devuelva `store.load()` (vacío si no hay respaldo).
  pub fn open(store: S) -> Self {
    let (catalog, registry) = store.load();
    info!(songs = catalog.len(), playlists = registry.len(), "session opened");
    Self { store, catalog, registry }
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn registry(&self) -> &PlaylistRegistry {
    &self.registry
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  pub fn add_song<T: Terminal>(&mut self, prompter: &mut Prompter<T>) -> Result<Option<Song>, CoreError> {
    let id = CatalogService::new(&mut self.catalog).add_song(prompter)?;
    Ok(id.and_then(|id| self.catalog.get(id)).cloned())
  }

  /// Quita una canción del catálogo. Las playlists que la referencian la
  /// conservan como entrada colgante.
  pub fn remove_song<T: Terminal>(&mut self, prompter: &mut Prompter<T>) -> Result<Removal, CoreError> {
    let song = CatalogService::new(&mut self.catalog).remove_song(prompter)?;
    let referenced_by = self.registry.references(song.id);

    if referenced_by > 0 {
      warn!(song = %song.id, playlists = referenced_by, "removed song is still referenced by playlists");
    }

    Ok(Removal { song, referenced_by })
  }

  pub fn update_song<T: Terminal>(&mut self, prompter: &mut Prompter<T>) -> Result<UpdateOutcome, CoreError> {
    CatalogService::new(&mut self.catalog).update_song(prompter)
  }

  /// Catálogo y una playlist ya guardada (base 1), para editarla en el lugar.
  pub fn playlist_mut(&mut self, position: u32) -> Result<(&Catalog, &mut Playlist), CoreError> {
    let playlist = self.registry.at_mut(position)?;
    Ok((&self.catalog, playlist))
  }

  /// Guarda una playlist nueva en el registro y graba su reporte.
  pub fn finish_new(&mut self, playlist: Playlist) -> Result<BurnOutcome, CoreError> {
    if self.registry.commit(playlist).is_none() {
      return Ok(BurnOutcome::Empty);
    }

    let committed = self.registry.playlists().last().ok_or(CoreError::NotFound)?;
    let path = self.store.export_playlist(committed, &self.catalog)?;
    Ok(BurnOutcome::Burned { id: committed.id().to_string(), path })
  }

  /// Graba el reporte de una playlist reabierta (ya está en el registro).
  pub fn finish_existing(&self, position: u32) -> Result<BurnOutcome, CoreError> {
    let playlist = self
      .registry
      .playlists()
      .get((position as usize).wrapping_sub(1))
      .ok_or(CoreError::OutOfRange { position, len: self.registry.len() })?;

    if playlist.is_empty() {
      return Ok(BurnOutcome::Empty);
    }

    let path = self.store.export_playlist(playlist, &self.catalog)?;
    Ok(BurnOutcome::Burned { id: playlist.id().to_string(), path })
  }

  pub fn save(&self) -> Result<(), StoreError> {
    self.store.save(&self.catalog, &self.registry)?;
    info!(songs = self.catalog.len(), playlists = self.registry.len(), "session saved");
    Ok(())
  }
}
