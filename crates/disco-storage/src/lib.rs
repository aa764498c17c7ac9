pub mod config;
pub mod models;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use disco_core::CoreError;
use disco_core::domain::{Catalog, Playlist, PlaylistRegistry, PlaylistReport, Song, SongId, SongLength};
use disco_core::ports::{SessionStore, StoreError};

pub use crate::config::StorageConfig;
use crate::models::{FORMAT_VERSION, PlaylistRow, SnapshotRow, SongRow};

/// Motivos por los que un respaldo no se puede usar.
#[derive(Debug, Error)]
enum DecodeError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
  #[error("unsupported format version {0}")]
  Version(u32),
  #[error("song {0} has an invalid length")]
  Length(uuid::Uuid),
  #[error("playlist with empty id")]
  EmptyId,
  #[error("rejected by domain: {0}")]
  Domain(#[from] CoreError),
}

/// Persistencia de la sesión en un archivo JSON más el reporte de texto del
/// último disco grabado.
#[derive(Debug, Clone)]
pub struct JsonSessionStore {
  state_file: PathBuf,
  export_file: PathBuf,
}

impl JsonSessionStore {
  pub fn new(state_file: impl Into<PathBuf>, export_file: impl Into<PathBuf>) -> Self {
    Self { state_file: state_file.into(), export_file: export_file.into() }
  }

  pub fn from_config(cfg: &StorageConfig) -> Self {
    Self::new(&cfg.state_file, &cfg.export_file)
  }

  pub fn state_file(&self) -> &Path {
    &self.state_file
  }

  pub fn export_file(&self) -> &Path {
    &self.export_file
  }

  fn read_snapshot(&self) -> Result<(Catalog, PlaylistRegistry), DecodeError> {
    let content = fs::read_to_string(&self.state_file)?;
    let snapshot: SnapshotRow = serde_json::from_str(&content)?;

    if snapshot.format_version != FORMAT_VERSION {
      return Err(DecodeError::Version(snapshot.format_version));
    }

    let mut catalog = Catalog::new();
    for row in snapshot.songs {
      catalog.insert(row_to_song(row)?)?;
    }

    let playlists =
      snapshot.playlists.into_iter().map(row_to_playlist).collect::<Result<Vec<_>, _>>()?;

    Ok((catalog, PlaylistRegistry::restore(playlists)))
  }
}

fn row_to_song(row: SongRow) -> Result<Song, DecodeError> {
  let length = SongLength::new(row.minutes, row.seconds).ok_or(DecodeError::Length(row.id))?;

  Ok(Song {
    id: SongId::from_uuid(row.id),
    title: row.title,
    artist: row.artist,
    author: row.author,
    length,
    release_date: row.release_date,
    genre: row.genre,
    size: row.size_mb,
  })
}

fn row_to_playlist(row: PlaylistRow) -> Result<Playlist, DecodeError> {
  if row.id.trim().is_empty() {
    return Err(DecodeError::EmptyId);
  }

  Ok(Playlist::restore(row.id, row.entries)?)
}

fn playlist_to_row(playlist: &Playlist) -> PlaylistRow {
  PlaylistRow { id: playlist.id().to_string(), entries: playlist.entries().to_vec() }
}

impl SessionStore for JsonSessionStore {
  fn load(&self) -> (Catalog, PlaylistRegistry) {
    if !self.state_file.exists() {
      info!(path = %self.state_file.display(), "no previous state, starting empty");
      return (Catalog::new(), PlaylistRegistry::new());
    }

    match self.read_snapshot() {
      Ok((catalog, registry)) => {
        info!(path = %self.state_file.display(), songs = catalog.len(), playlists = registry.len(), "state loaded");
        (catalog, registry)
      }
      Err(e) => {
        warn!(path = %self.state_file.display(), error = %e, "state file unusable, starting empty");
        (Catalog::new(), PlaylistRegistry::new())
      }
    }
  }

  fn save(&self, catalog: &Catalog, registry: &PlaylistRegistry) -> Result<(), StoreError> {
    let snapshot = SnapshotRow {
      format_version: FORMAT_VERSION,
      saved_at: Utc::now(),
      songs: catalog.songs().iter().map(SongRow::from).collect(),
      playlists: registry.playlists().iter().map(playlist_to_row).collect(),
    };

    let json = serde_json::to_string_pretty(&snapshot).map_err(|e| StoreError::Encode(e.to_string()))?;
    disco_fs::atomic_write_str(&self.state_file, &json).map_err(|e| StoreError::Io(e.to_string()))?;

    info!(path = %self.state_file.display(), "state saved");
    Ok(())
  }

  fn export_playlist(&self, playlist: &Playlist, catalog: &Catalog) -> Result<PathBuf, StoreError> {
    let report = PlaylistReport::new(playlist, catalog).to_string();
    disco_fs::atomic_write_str(&self.export_file, &report).map_err(|e| StoreError::Io(e.to_string()))?;

    info!(path = %self.export_file.display(), playlist = %playlist.id(), "playlist exported");
    Ok(self.export_file.clone())
  }
}
