use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ids::SongId;
use crate::domain::song::{SizeMb, Song};
use crate::errors::CoreError;

/// Capacidad de un disco en MB.
pub const DISC_CAPACITY_MB: u64 = 450;

/// Referencia a una canción del catálogo dentro de una playlist.
///
/// Guarda el tamaño contabilizado al momento de agregarla para que el total
/// de la playlist no dependa de ediciones posteriores en el catálogo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
  pub song_id: SongId,
  #[serde(rename = "size_mb")]
  pub size: SizeMb,
}

/// Lista de reproducción de un disco, acotada a [`DISC_CAPACITY_MB`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
  id: String,
  entries: Vec<PlaylistEntry>,
}

impl Playlist {
  pub fn new(id: impl Into<String>) -> Self {
    Self { id: id.into(), entries: Vec::new() }
  }

  /// Reconstruye una playlist guardada, verificando la capacidad.
  pub fn restore(id: impl Into<String>, entries: Vec<PlaylistEntry>) -> Result<Self, CoreError> {
    let playlist = Self { id: id.into(), entries };
    let used = playlist.total_size();

    if used.get() > DISC_CAPACITY_MB {
      return Err(CoreError::CapacityExceeded { song: SizeMb::ZERO, used, capacity: DISC_CAPACITY_MB });
    }

    Ok(playlist)
  }

  pub fn id(&self) -> &str {
    &self.id
  }

  pub(crate) fn set_id(&mut self, id: String) {
    self.id = id;
  }

  pub fn entries(&self) -> &[PlaylistEntry] {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Suma de los tamaños de todas las entradas.
  pub fn total_size(&self) -> SizeMb {
    self.entries.iter().map(|e| e.size).sum()
  }

  pub fn remaining(&self) -> SizeMb {
    SizeMb::new(DISC_CAPACITY_MB).saturating_sub(self.total_size())
  }

  pub fn references(&self, song_id: SongId) -> bool {
    self.entries.iter().any(|e| e.song_id == song_id)
  }

  /// Agrega la canción solo si el total resultante no supera la capacidad.
  pub fn try_add(&mut self, song: &Song) -> Result<(), CoreError> {
    let used = self.total_size();

    if used.get().saturating_add(song.size.get()) > DISC_CAPACITY_MB {
      debug!(playlist = %self.id, song = %song.id, size = %song.size, used = %used, "capacity exceeded");
      return Err(CoreError::CapacityExceeded { song: song.size, used, capacity: DISC_CAPACITY_MB });
    }

    self.entries.push(PlaylistEntry { song_id: song.id, size: song.size });
    Ok(())
  }

  /// Quita la entrada en la posición `position` (base 1).
  pub fn remove_at(&mut self, position: u32) -> Result<PlaylistEntry, CoreError> {
    if self.entries.is_empty() {
      return Err(CoreError::EmptyPlaylist);
    }

    let idx = position_to_index(position, self.entries.len())?;
    Ok(self.entries.remove(idx))
  }
}

/// Convierte una posición de menú (base 1) en índice, validando el rango.
pub(crate) fn position_to_index(position: u32, len: usize) -> Result<usize, CoreError> {
  let idx = (position as usize).wrapping_sub(1);

  if position == 0 || idx >= len {
    return Err(CoreError::OutOfRange { position, len });
  }

  Ok(idx)
}
