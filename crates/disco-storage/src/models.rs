use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use disco_core::domain::{PlaylistEntry, SizeMb, Song};

/// Versión del formato de respaldo que este crate sabe leer y escribir.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotRow {
  pub format_version: u32,
  pub saved_at: DateTime<Utc>,
  pub songs: Vec<SongRow>,
  pub playlists: Vec<PlaylistRow>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SongRow {
  pub id: Uuid,
  pub title: String,
  pub artist: String,
  pub author: String,
  pub minutes: u32,
  pub seconds: u32,
  pub release_date: NaiveDate,
  pub genre: String,
  pub size_mb: SizeMb,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistRow {
  pub id: String,
  pub entries: Vec<PlaylistEntry>,
}

impl From<&Song> for SongRow {
  fn from(song: &Song) -> Self {
    SongRow {
      id: song.id.as_uuid(),
      title: song.title.clone(),
      artist: song.artist.clone(),
      author: song.author.clone(),
      minutes: song.length.minutes(),
      seconds: song.length.seconds(),
      release_date: song.release_date,
      genre: song.genre.clone(),
      size_mb: song.size,
    }
  }
}
