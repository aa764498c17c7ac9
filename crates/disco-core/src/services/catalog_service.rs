use tracing::info;

use crate::domain::{Catalog, MAX_SONG_SIZE_MB, Song, SongDraft, SongEdit, SongField, SongId};
use crate::errors::CoreError;
use crate::ports::{PromptError, Terminal};
use crate::services::prompt::Prompter;

/// Resultado del menú de modificación.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
  Updated(SongField),
  Overwritten,
  /// El operador respondió "n" a la confirmación: la canción no cambió.
  Declined,
  /// Opción `0` del menú.
  Cancelled,
}

/// Captura completa de una canción, campo por campo.
pub fn capture_song<T: Terminal>(prompter: &mut Prompter<T>) -> Result<SongDraft, PromptError> {
  Ok(SongDraft {
    title: prompter.text("Titulo de la Cancion", 30)?,
    length: prompter.duration("Duracion (Minutos:Segundos)")?,
    artist: prompter.alphabetic("Artista", 20)?,
    author: prompter.alphabetic("Autor", 20)?,
    release_date: prompter.date("Fecha de lanzamiento (dd/mm/aaaa)")?,
    genre: prompter.alphabetic("Genero", 20)?,
  })
}

/// Altas, bajas y modificaciones interactivas sobre el catálogo.
pub struct CatalogService<'c> {
  catalog: &'c mut Catalog,
}

impl<'c> CatalogService<'c> {
  pub fn new(catalog: &'c mut Catalog) -> Self {
    Self { catalog }
  }

  /// Captura una canción, la muestra y pide confirmación antes de agregarla.
  ///
  /// Devuelve `None` si el operador no confirma. Una canción de más de
  /// [`MAX_SONG_SIZE_MB`] se rechaza antes de mostrarla.
  pub fn add_song<T: Terminal>(&mut self, prompter: &mut Prompter<T>) -> Result<Option<SongId>, CoreError> {
    let song = Song::from_draft(capture_song(prompter)?);

    if song.exceeds_size_limit() {
      return Err(CoreError::SongTooLarge { size: song.size, limit: MAX_SONG_SIZE_MB });
    }

    prompter.say(song.to_string());
    if !prompter.yes_no("Confirmacion: Desea agregar la cancion? (s/n)")? {
      return Ok(None);
    }

    Ok(Some(self.catalog.insert(song)?))
  }

  /// Lista el catálogo y quita la canción elegida por posición.
  pub fn remove_song<T: Terminal>(&mut self, prompter: &mut Prompter<T>) -> Result<Song, CoreError> {
    self.list_for_selection(prompter)?;
    let position = prompter.non_negative_int("Cancion a borrar")?;
    self.catalog.remove_at(position)
  }

  /// Menú de modificación: un campo a la vez o sobreescritura completa.
  ///
  /// Toda modificación pide confirmación; si se rechaza, la canción queda
  /// igual.
  pub fn update_song<T: Terminal>(&mut self, prompter: &mut Prompter<T>) -> Result<UpdateOutcome, CoreError> {
    self.list_for_selection(prompter)?;
    let position = prompter.non_negative_int("Cancion a modificar")?;
    let id = self.catalog.at(position)?.id;
    prompter.rule();

    prompter.say("Menu de Modificacion");
    prompter.say("1. Modificar Titulo");
    prompter.say("2. Modificar Artista");
    prompter.say("3. Modificar Autor");
    prompter.say("4. Modificar Fecha de Lanzamiento");
    prompter.say("5. Modificar Genero");
    prompter.say("6. Modificar Duracion");
    prompter.say("7. Sobreescribir por completo");
    prompter.say("0. Cancelar");

    let option = prompter.non_negative_int("Opcion")?;
    let edit = match option {
      0 => return Ok(UpdateOutcome::Cancelled),
      1 => SongEdit::Title(prompter.text("Titulo", 30)?),
      2 => SongEdit::Artist(prompter.alphabetic("Artista", 20)?),
      3 => SongEdit::Author(prompter.alphabetic("Autor", 20)?),
      4 => SongEdit::ReleaseDate(prompter.date("Fecha de lanzamiento (dd/mm/aaaa)")?),
      5 => SongEdit::Genre(prompter.alphabetic("Genero", 20)?),
      6 => SongEdit::Length(prompter.duration("Duracion (Minutos:Segundos)")?),
      7 => return self.overwrite(prompter, id),
      _ => return Err(CoreError::OutOfRange { position: option, len: 7 }),
    };

    let field = edit.field();
    if !prompter.yes_no(&confirm_question(field))? {
      return Ok(UpdateOutcome::Declined);
    }

    let song = self.catalog.get_mut(id).ok_or(CoreError::NotFound)?;
    song.apply(edit);
    info!(song = %id, %field, "song field updated");
    Ok(UpdateOutcome::Updated(field))
  }

  fn overwrite<T: Terminal>(&mut self, prompter: &mut Prompter<T>, id: SongId) -> Result<UpdateOutcome, CoreError> {
    if !prompter.yes_no("Confirmacion: Desea sobreescribir la cancion? (s/n)")? {
      return Ok(UpdateOutcome::Declined);
    }

    let draft = capture_song(prompter)?;
    let size = draft.length.estimated_size();
    if size.get() > MAX_SONG_SIZE_MB {
      return Err(CoreError::SongTooLarge { size, limit: MAX_SONG_SIZE_MB });
    }

    let song = self.catalog.get_mut(id).ok_or(CoreError::NotFound)?;
    song.overwrite(draft);
    info!(song = %id, "song overwritten");
    Ok(UpdateOutcome::Overwritten)
  }

  fn list_for_selection<T: Terminal>(&self, prompter: &mut Prompter<T>) -> Result<(), CoreError> {
    if self.catalog.is_empty() {
      return Err(CoreError::EmptyCatalog);
    }

    prompter.say("Canciones disponibles:");
    prompter.rule();
    prompter.numbered(self.catalog.songs().iter().map(Song::headline));
    prompter.rule();
    Ok(())
  }
}

fn confirm_question(field: SongField) -> String {
  let article = match field {
    SongField::ReleaseDate | SongField::Length => "la",
    _ => "el",
  };
  format!("Confirmacion: Desea modificar {article} {field}? (s/n)")
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::domain::SizeMb;
  use crate::domain::song::sample_draft;
  use crate::mocks::ScriptedTerminal;

  const SONG_INPUT: [&str; 6] = ["Test", "4:00", "Artista Uno", "Autor Uno", "01/02/2003", "Rock"];

  fn prompter(lines: &[&str]) -> Prompter<ScriptedTerminal> {
    Prompter::new(ScriptedTerminal::new(lines.iter().copied()))
      .with_today(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
  }

  fn seeded() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(Song::from_draft(sample_draft("Primera", 3, 0))).unwrap();
    catalog.insert(Song::from_draft(sample_draft("Segunda", 5, 0))).unwrap();
    catalog
  }

  #[test]
  fn add_confirmed_then_remove_restores_catalog() {
    let mut catalog = seeded();
    let original = catalog.len();

    let mut lines = SONG_INPUT.to_vec();
    lines.push("s");
    let mut p = prompter(&lines);
    let id = CatalogService::new(&mut catalog).add_song(&mut p).unwrap().unwrap();

    assert_eq!(catalog.len(), original + 1);
    let added = catalog.get(id).unwrap();
    assert_eq!(added.title, "Test");
    assert_eq!(added.size, SizeMb::new(8));
    assert!(p.terminal().printed("Nombre de la cancion: Test"));

    let position = (catalog.len()).to_string();
    let mut p = prompter(&[position.as_str()]);
    let removed = CatalogService::new(&mut catalog).remove_song(&mut p).unwrap();

    assert_eq!(removed.id, id);
    assert_eq!(catalog.len(), original);
  }

  #[test]
  fn add_declined_leaves_catalog_unchanged() {
    let mut catalog = seeded();
    let mut lines = SONG_INPUT.to_vec();
    lines.push("n");
    let mut p = prompter(&lines);

    assert_eq!(CatalogService::new(&mut catalog).add_song(&mut p).unwrap(), None);
    assert_eq!(catalog.len(), 2);
  }

  #[test]
  fn add_oversized_is_rejected_without_confirmation() {
    let mut catalog = seeded();
    let mut p = prompter(&["Opera", "300:00", "Artista", "Autor", "01/02/2003", "Clasica"]);

    let err = CatalogService::new(&mut catalog).add_song(&mut p).unwrap_err();

    assert!(matches!(err, CoreError::SongTooLarge { .. }));
    assert_eq!(catalog.len(), 2);
    assert_eq!(p.terminal().remaining(), 0);
  }

  #[test]
  fn remove_out_of_range_is_reported() {
    let mut catalog = seeded();
    let mut p = prompter(&["7"]);

    let err = CatalogService::new(&mut catalog).remove_song(&mut p).unwrap_err();
    assert!(matches!(err, CoreError::OutOfRange { position: 7, len: 2 }));
    assert_eq!(catalog.len(), 2);
  }

  #[test]
  fn remove_from_empty_catalog() {
    let mut catalog = Catalog::new();
    let mut p = prompter(&[]);
    let err = CatalogService::new(&mut catalog).remove_song(&mut p).unwrap_err();
    assert!(matches!(err, CoreError::EmptyCatalog));
  }

  #[test]
  fn update_single_field_requires_confirmation() {
    let mut catalog = seeded();

    let mut p = prompter(&["1", "5", "Pop", "n"]);
    let outcome = CatalogService::new(&mut catalog).update_song(&mut p).unwrap();
    assert_eq!(outcome, UpdateOutcome::Declined);
    assert_eq!(catalog.at(1).unwrap().genre, "Rock");

    let mut p = prompter(&["1", "5", "Pop", "s"]);
    let outcome = CatalogService::new(&mut catalog).update_song(&mut p).unwrap();
    assert_eq!(outcome, UpdateOutcome::Updated(SongField::Genre));
    assert_eq!(catalog.at(1).unwrap().genre, "Pop");
    assert!(p.terminal().prompts().iter().any(|q| q.contains("modificar el genero")));
  }

  #[test]
  fn update_length_keeps_size() {
    let mut catalog = seeded();
    let before = catalog.at(2).unwrap().size;

    let mut p = prompter(&["2", "6", "12:00", "s"]);
    CatalogService::new(&mut catalog).update_song(&mut p).unwrap();

    let song = catalog.at(2).unwrap();
    assert_eq!(song.length.to_string(), "12:00");
    assert_eq!(song.size, before);
  }

  #[test]
  fn full_overwrite_recaptures_every_field() {
    let mut catalog = seeded();
    let id = catalog.at(1).unwrap().id;

    let mut lines = vec!["1", "7", "s"];
    lines.extend(SONG_INPUT);
    let mut p = prompter(&lines);
    let outcome = CatalogService::new(&mut catalog).update_song(&mut p).unwrap();

    assert_eq!(outcome, UpdateOutcome::Overwritten);
    let song = catalog.at(1).unwrap();
    assert_eq!(song.id, id);
    assert_eq!(song.title, "Test");
    assert_eq!(song.genre, "Rock");
    assert_eq!(song.size, SizeMb::new(8));
  }

  #[test]
  fn oversized_overwrite_is_rejected() {
    let mut catalog = seeded();
    let mut p = prompter(&["1", "7", "s", "Opera", "300:00", "Artista", "Autor", "01/02/2003", "Clasica"]);

    let err = CatalogService::new(&mut catalog).update_song(&mut p).unwrap_err();

    assert!(matches!(err, CoreError::SongTooLarge { .. }));
    assert_eq!(catalog.at(1).unwrap().title, "Primera");
  }

  #[test]
  fn update_menu_cancel_and_invalid_option() {
    let mut catalog = seeded();

    let mut p = prompter(&["1", "0"]);
    assert_eq!(CatalogService::new(&mut catalog).update_song(&mut p).unwrap(), UpdateOutcome::Cancelled);

    let mut p = prompter(&["1", "9"]);
    assert!(matches!(
      CatalogService::new(&mut catalog).update_song(&mut p),
      Err(CoreError::OutOfRange { position: 9, len: 7 })
    ));
  }
}
