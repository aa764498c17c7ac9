use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::ids::SongId;

/// Tamaño máximo (MB) que puede pesar una canción para entrar al catálogo.
///
/// Coincide con la capacidad de un disco: una canción más grande nunca
/// podría grabarse.
pub const MAX_SONG_SIZE_MB: u64 = 450;

/// Tamaño estimado de una pista en megabytes (sin decimales).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeMb(u64);

impl SizeMb {
  pub const ZERO: SizeMb = SizeMb(0);

  pub const fn new(mb: u64) -> Self {
    SizeMb(mb)
  }

  pub const fn get(self) -> u64 {
    self.0
  }

  pub fn saturating_add(self, other: SizeMb) -> SizeMb {
    SizeMb(self.0.saturating_add(other.0))
  }

  pub fn saturating_sub(self, other: SizeMb) -> SizeMb {
    SizeMb(self.0.saturating_sub(other.0))
  }
}

impl fmt::Display for SizeMb {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl std::iter::Sum for SizeMb {
  fn sum<I: Iterator<Item = SizeMb>>(iter: I) -> Self {
    iter.fold(SizeMb::ZERO, SizeMb::saturating_add)
  }
}

/// Duración de una canción (`minutos:segundos`).
///
/// Invariantes: `seconds < 60` y la duración nunca es `0:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SongLength {
  minutes: u32,
  seconds: u32,
}

impl SongLength {
  /// Construye una duración válida o `None` si viola los invariantes.
  pub fn new(minutes: u32, seconds: u32) -> Option<Self> {
    if seconds >= 60 || (minutes == 0 && seconds == 0) {
      return None;
    }

    Some(Self { minutes, seconds })
  }

  pub fn minutes(&self) -> u32 {
    self.minutes
  }

  pub fn seconds(&self) -> u32 {
    self.seconds
  }

  /// Tamaño sintético de la pista: `floor((min * 2048 + seg * 34) / 1000)` MB.
  pub fn estimated_size(&self) -> SizeMb {
    let raw = u64::from(self.minutes) * 2048 + u64::from(self.seconds) * 34;
    SizeMb(raw / 1000)
  }
}

impl fmt::Display for SongLength {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{:02}", self.minutes, self.seconds)
  }
}

/// Campos capturados al dar de alta (o sobreescribir) una canción.
///
/// Es la entrada "cruda" ya validada; el tamaño se deriva al convertirla en
/// [`Song`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongDraft {
  pub title: String,
  pub length: SongLength,
  pub artist: String,
  pub author: String,
  pub release_date: NaiveDate,
  pub genre: String,
}

/// Una canción del catálogo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
  pub id: SongId,
  pub title: String,
  pub artist: String,
  pub author: String,
  pub length: SongLength,
  pub release_date: NaiveDate,
  pub genre: String,
  /// Tamaño derivado de la duración en el momento de la captura.
  ///
  /// Editar solo la duración no lo recalcula; sobreescribir la canción sí.
  pub size: SizeMb,
}

impl Song {
  pub fn from_draft(draft: SongDraft) -> Self {
    Self::with_id(SongId::new(), draft)
  }

  pub fn with_id(id: SongId, draft: SongDraft) -> Self {
    let size = draft.length.estimated_size();

    Song {
      id,
      title: draft.title,
      artist: draft.artist,
      author: draft.author,
      length: draft.length,
      release_date: draft.release_date,
      genre: draft.genre,
      size,
    }
  }

  pub fn exceeds_size_limit(&self) -> bool {
    self.size.get() > MAX_SONG_SIZE_MB
  }

  /// Línea corta usada en los listados numerados: `artista - título`.
  pub fn headline(&self) -> String {
    format!("{} - {}", self.artist, self.title)
  }

  /// Aplica la edición de un único campo. El tamaño no se recalcula.
  pub fn apply(&mut self, edit: SongEdit) {
    match edit {
      SongEdit::Title(v) => self.title = v,
      SongEdit::Artist(v) => self.artist = v,
      SongEdit::Author(v) => self.author = v,
      SongEdit::ReleaseDate(v) => self.release_date = v,
      SongEdit::Genre(v) => self.genre = v,
      SongEdit::Length(v) => self.length = v,
    }
  }

  /// Reemplaza todos los campos conservando el ID; el tamaño se vuelve a derivar.
  pub fn overwrite(&mut self, draft: SongDraft) {
    *self = Song::with_id(self.id, draft);
  }
}

/// Nuevo valor (ya validado) para un campo de la canción.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongEdit {
  Title(String),
  Artist(String),
  Author(String),
  ReleaseDate(NaiveDate),
  Genre(String),
  Length(SongLength),
}

impl SongEdit {
  pub fn field(&self) -> SongField {
    match self {
      SongEdit::Title(_) => SongField::Title,
      SongEdit::Artist(_) => SongField::Artist,
      SongEdit::Author(_) => SongField::Author,
      SongEdit::ReleaseDate(_) => SongField::ReleaseDate,
      SongEdit::Genre(_) => SongField::Genre,
      SongEdit::Length(_) => SongField::Length,
    }
  }
}

impl fmt::Display for Song {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "Nombre de la cancion: {}", self.title)?;
    writeln!(f, "Duracion: {}", self.length)?;
    writeln!(f, "Artista: {}", self.artist)?;
    writeln!(f, "Autor: {}", self.author)?;
    writeln!(f, "Fecha de lanzamiento: {}", self.release_date.format("%d-%m-%Y"))?;
    writeln!(f, "Genero: {}", self.genre)?;
    writeln!(f, "Tamaño de la cancion: {} MB", self.size)
  }
}

/// Campo editable individualmente desde el menú de modificación.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongField {
  Title,
  Artist,
  Author,
  ReleaseDate,
  Genre,
  Length,
}

impl fmt::Display for SongField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      SongField::Title => "titulo",
      SongField::Artist => "artista",
      SongField::Author => "autor",
      SongField::ReleaseDate => "fecha de lanzamiento",
      SongField::Genre => "genero",
      SongField::Length => "duracion",
    };
    write!(f, "{text}")
  }
}

#[cfg(test)]
pub(crate) fn sample_draft(title: &str, minutes: u32, seconds: u32) -> SongDraft {
  SongDraft {
    title: title.to_string(),
    length: SongLength::new(minutes, seconds).expect("valid length"),
    artist: "Soda Stereo".to_string(),
    author: "Gustavo Cerati".to_string(),
    release_date: NaiveDate::from_ymd_opt(1990, 8, 1).expect("valid date"),
    genre: "Rock".to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn length_rejects_zero_and_overflowing_seconds() {
    assert!(SongLength::new(0, 0).is_none());
    assert!(SongLength::new(1, 60).is_none());
    assert!(SongLength::new(0, 1).is_some());
    assert!(SongLength::new(3, 45).is_some());
  }

  #[test]
  fn size_is_floor_of_weighted_length() {
    // (3*2048 + 30*34) / 1000 = 7164 / 1000
    assert_eq!(SongLength::new(3, 30).unwrap().estimated_size(), SizeMb::new(7));
    assert_eq!(SongLength::new(4, 0).unwrap().estimated_size(), SizeMb::new(8));
    assert_eq!(SongLength::new(0, 29).unwrap().estimated_size(), SizeMb::new(0));
  }

  #[test]
  fn length_displays_padded_seconds() {
    assert_eq!(SongLength::new(3, 5).unwrap().to_string(), "3:05");
  }

  #[test]
  fn song_derives_size_from_draft() {
    let song = Song::from_draft(sample_draft("De Musica Ligera", 220, 0));
    assert_eq!(song.size, SizeMb::new(450));
    assert!(!song.exceeds_size_limit());

    let long = Song::from_draft(sample_draft("Infinita", 220, 30));
    assert_eq!(long.size, SizeMb::new(451));
    assert!(long.exceeds_size_limit());
  }

  #[test]
  fn editing_length_keeps_creation_size() {
    let mut song = Song::from_draft(sample_draft("Musica Ligera", 3, 30));
    song.apply(SongEdit::Length(SongLength::new(10, 0).unwrap()));
    assert_eq!(song.length.to_string(), "10:00");
    assert_eq!(song.size, SizeMb::new(7));
  }

  #[test]
  fn overwrite_keeps_id_and_rederives_size() {
    let mut song = Song::from_draft(sample_draft("Antes", 3, 30));
    let id = song.id;
    song.overwrite(sample_draft("Despues", 10, 0));
    assert_eq!(song.id, id);
    assert_eq!(song.title, "Despues");
    assert_eq!(song.size, SizeMb::new(20));
  }

  #[test]
  fn record_shows_date_with_dashes() {
    let song = Song::from_draft(sample_draft("Persiana Americana", 4, 50));
    let text = song.to_string();
    assert!(text.contains("Fecha de lanzamiento: 01-08-1990"));
    assert!(text.contains("Duracion: 4:50"));
    assert_eq!(song.headline(), "Soda Stereo - Persiana Americana");
  }
}
