use tracing::info;

use crate::domain::ids::SongId;
use crate::domain::playlist::{Playlist, position_to_index};
use crate::errors::CoreError;

/// Playlists ya guardadas durante la sesión (y las restauradas del respaldo).
///
/// Solo crece: la única forma de vaciarla es recargar desde persistencia.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistRegistry {
  playlists: Vec<Playlist>,
}

impl PlaylistRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registro tal como quedó guardado: sin renombrar ni descartar nada.
  pub fn restore(playlists: Vec<Playlist>) -> Self {
    Self { playlists }
  }

  pub fn len(&self) -> usize {
    self.playlists.len()
  }

  pub fn is_empty(&self) -> bool {
    self.playlists.is_empty()
  }

  pub fn playlists(&self) -> &[Playlist] {
    &self.playlists
  }

  pub fn contains(&self, id: &str) -> bool {
    self.playlists.iter().any(|p| p.id() == id)
  }

  /// Playlist en la posición `position` del listado (base 1).
  pub fn at_mut(&mut self, position: u32) -> Result<&mut Playlist, CoreError> {
    let idx = position_to_index(position, self.playlists.len())?;
    Ok(&mut self.playlists[idx])
  }

  /// Cantidad de playlists que referencian la canción.
  pub fn references(&self, song_id: SongId) -> usize {
    self.playlists.iter().filter(|p| p.references(song_id)).count()
  }

  /// Nombre final que recibiría una playlist con identificador `id`.
  ///
  /// Si el identificador ya existe se le agrega `" #n"`, donde `n` es la
  /// cantidad de identificadores existentes que *empiezan* por `id`. Se
  /// cuenta por prefijo, no por igualdad exacta.
  pub fn resolve_id(&self, id: &str) -> String {
    if !self.contains(id) {
      return id.to_string();
    }

    let copies = self.playlists.iter().filter(|p| p.id().starts_with(id)).count();
    format!("{id} #{copies}")
  }

  /// Guarda una playlist terminada.
  ///
  /// Una playlist vacía se descarta y devuelve `None`. Si no, se renombra
  /// según [`Self::resolve_id`], se agrega al final y se devuelve su
  /// identificador definitivo.
  pub fn commit(&mut self, mut playlist: Playlist) -> Option<&str> {
    if playlist.is_empty() {
      return None;
    }

    let resolved = self.resolve_id(playlist.id());
    if resolved != playlist.id() {
      info!(original = %playlist.id(), renamed = %resolved, "playlist id collision");
      playlist.set_id(resolved);
    }

    info!(playlist = %playlist.id(), songs = playlist.len(), size = %playlist.total_size(), "playlist committed");
    self.playlists.push(playlist);
    self.playlists.last().map(|p| p.id())
  }
}
