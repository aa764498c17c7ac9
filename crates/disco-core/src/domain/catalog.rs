use tracing::info;

use crate::domain::ids::SongId;
use crate::domain::playlist::position_to_index;
use crate::domain::song::{MAX_SONG_SIZE_MB, Song};
use crate::errors::CoreError;

/// Conjunto de todas las canciones conocidas, en orden de alta.
///
/// Es el dueño de las canciones: las playlists solo guardan [`SongId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
  songs: Vec<Song>,
}

impl Catalog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.songs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.songs.is_empty()
  }

  pub fn songs(&self) -> &[Song] {
    &self.songs
  }

  pub fn get(&self, id: SongId) -> Option<&Song> {
    self.songs.iter().find(|s| s.id == id)
  }

  pub fn get_mut(&mut self, id: SongId) -> Option<&mut Song> {
    self.songs.iter_mut().find(|s| s.id == id)
  }

  /// Canción en la posición `position` del listado (base 1).
  pub fn at(&self, position: u32) -> Result<&Song, CoreError> {
    let idx = self.index_of(position)?;
    Ok(&self.songs[idx])
  }

  pub fn at_mut(&mut self, position: u32) -> Result<&mut Song, CoreError> {
    let idx = self.index_of(position)?;
    Ok(&mut self.songs[idx])
  }

  /// Agrega una canción al final del catálogo.
  ///
  /// Rechaza (sin tocar el catálogo) cualquier canción de más de
  /// [`MAX_SONG_SIZE_MB`].
  pub fn insert(&mut self, song: Song) -> Result<SongId, CoreError> {
    if song.exceeds_size_limit() {
      return Err(CoreError::SongTooLarge { size: song.size, limit: MAX_SONG_SIZE_MB });
    }

    let id = song.id;
    info!(song = %id, title = %song.title, size = %song.size, "song added to catalog");
    self.songs.push(song);
    Ok(id)
  }

  /// Quita la canción en la posición `position` (base 1) y la devuelve.
  pub fn remove_at(&mut self, position: u32) -> Result<Song, CoreError> {
    let idx = self.index_of(position)?;
    let song = self.songs.remove(idx);
    info!(song = %song.id, title = %song.title, "song removed from catalog");
    Ok(song)
  }

  fn index_of(&self, position: u32) -> Result<usize, CoreError> {
    if self.songs.is_empty() {
      return Err(CoreError::EmptyCatalog);
    }
    position_to_index(position, self.songs.len())
  }
}
