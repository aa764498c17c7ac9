use std::fmt;

use tracing::warn;

use crate::domain::catalog::Catalog;
use crate::domain::playlist::Playlist;
use crate::domain::song::{SizeMb, Song};

const RULE: &str = "----------------------------------------";

/// Vista textual de una playlist, tal como se graba en el disco.
///
/// Resuelve cada entrada contra el catálogo. Las entradas cuya canción ya no
/// existe se omiten. Cada línea muestra el tamaño contabilizado al agregar la
/// canción, y el total impreso es la suma de las líneas mostradas.
pub struct PlaylistReport<'a> {
  playlist: &'a Playlist,
  catalog: &'a Catalog,
}

impl<'a> PlaylistReport<'a> {
  pub fn new(playlist: &'a Playlist, catalog: &'a Catalog) -> Self {
    Self { playlist, catalog }
  }

  /// Entradas que todavía existen en el catálogo, con su tamaño contabilizado.
  pub fn resolved_entries(&self) -> Vec<(&'a Song, SizeMb)> {
    let catalog = self.catalog;
    let lines: Vec<(&'a Song, SizeMb)> = self
      .playlist
      .entries()
      .iter()
      .filter_map(|e| catalog.get(e.song_id).map(|song| (song, e.size)))
      .collect();

    let dangling = self.playlist.len() - lines.len();
    if dangling > 0 {
      warn!(playlist = %self.playlist.id(), dangling, "playlist references songs missing from catalog");
    }

    lines
  }

  /// Canciones de la playlist que todavía existen en el catálogo, en orden.
  pub fn resolved_songs(&self) -> Vec<&'a Song> {
    self.resolved_entries().into_iter().map(|(song, _)| song).collect()
  }
}

impl fmt::Display for PlaylistReport<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let lines = self.resolved_entries();
    let total: SizeMb = lines.iter().map(|(_, size)| *size).sum();

    writeln!(f, "Titulo: {}", self.playlist.id())?;
    writeln!(f, "{RULE}")?;
    writeln!(f, "Lista de Canciones:")?;
    for (i, (song, size)) in lines.iter().enumerate() {
      writeln!(f, "{}. {} - {} [{}] ({} MB)", i + 1, song.artist, song.title, song.length, size)?;
    }
    writeln!(f, "{RULE}")?;
    writeln!(f, "Tamaño: {total} MB")
  }
}
