use tracing::info;

use crate::domain::{Catalog, DISC_CAPACITY_MB, Playlist, PlaylistEntry, Song};
use crate::errors::CoreError;
use crate::ports::{PromptError, Terminal};
use crate::services::filter::{FilterEngine, FilterOutcome};
use crate::services::prompt::Prompter;

/// Cómo elige el operador la canción a agregar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
  /// Búsqueda con [`FilterEngine`] y luego elegir uno de los resultados.
  Filter,
  /// Posición directa en el listado completo del catálogo.
  Index,
}

/// Arma una playlist a partir del catálogo respetando la capacidad del disco.
pub struct PlaylistBuilder<'c> {
  catalog: &'c Catalog,
}

impl<'c> PlaylistBuilder<'c> {
  pub fn new(catalog: &'c Catalog) -> Self {
    Self { catalog }
  }

  /// Encabezado del menú de la playlist: `usado MB / 450MB`.
  pub fn usage_line(playlist: &Playlist) -> String {
    format!("Almacenamiento Disponible: {}MB / {}MB", playlist.total_size(), DISC_CAPACITY_MB)
  }

  /// Pregunta el modo de selección. `0` cancela.
  pub fn ask_mode<T: Terminal>(
    prompter: &mut Prompter<T>,
  ) -> Result<Option<SelectionMode>, PromptError> {
    loop {
      prompter.say("Agregar cancion por...");
      prompter.say("1. Filtros");
      prompter.say("2. Seleccionar de todas las canciones");
      prompter.say("0. Cancelar");

      match prompter.non_negative_int("Opcion")? {
        0 => return Ok(None),
        1 => return Ok(Some(SelectionMode::Filter)),
        2 => return Ok(Some(SelectionMode::Index)),
        _ => prompter.say("Opcion invalida"),
      }
    }
  }

  /// Elige una canción del catálogo, o `None` si el operador cancela.
  pub fn select_song<T: Terminal>(
    &self,
    prompter: &mut Prompter<T>,
    mode: SelectionMode,
  ) -> Result<Option<&'c Song>, PromptError> {
    if self.catalog.is_empty() {
      prompter.say("Error: No hay canciones en el sistema.");
      return Ok(None);
    }

    match mode {
      SelectionMode::Filter => self.pick_filtered(prompter),
      SelectionMode::Index => {
        let songs: &'c [Song] = self.catalog.songs();
        prompter.numbered(songs.iter().map(Song::headline));
        let position = prompter.pick("Opcion", songs.len())?;
        Ok(Some(&songs[position as usize - 1]))
      }
    }
  }

  /// Filtra hasta obtener resultados (o cancelar) y pide elegir uno.
  fn pick_filtered<T: Terminal>(
    &self,
    prompter: &mut Prompter<T>,
  ) -> Result<Option<&'c Song>, PromptError> {
    let songs: &'c [Song] = self.catalog.songs();

    loop {
      match FilterEngine::run(prompter, songs)? {
        FilterOutcome::Cancelled => return Ok(None),
        FilterOutcome::NoMatches => prompter.say("Error: No se encontraron resultados"),
        FilterOutcome::Matches(results) => {
          prompter.say("Selecciona una cancion:");
          prompter.numbered(results.iter().map(|s| s.headline()));
          let position = prompter.pick("Opcion", results.len())?;
          return Ok(Some(results[position as usize - 1]));
        }
      }
    }
  }

  /// Un intento de agregar: modo → selección → control de capacidad.
  ///
  /// Devuelve la canción agregada, `None` si el operador canceló, o
  /// [`CoreError::CapacityExceeded`] sin modificar la playlist.
  pub fn add_song<T: Terminal>(
    &self,
    prompter: &mut Prompter<T>,
    playlist: &mut Playlist,
  ) -> Result<Option<&'c Song>, CoreError> {
    let Some(mode) = Self::ask_mode(prompter)? else {
      return Ok(None);
    };
    let Some(song) = self.select_song(prompter, mode)? else {
      return Ok(None);
    };

    playlist.try_add(song)?;
    info!(
      playlist = %playlist.id(),
      song = %song.id,
      total = %playlist.total_size(),
      "song added to playlist"
    );
    Ok(Some(song))
  }

  /// Agrega canciones hasta que el operador diga que no.
  ///
  /// Tras cada alta exitosa pregunta si agregar otra. Si un intento no
  /// cambió la playlist (cancelación) el bucle termina sin preguntar; un
  /// rechazo por capacidad termina el bucle con ese error.
  pub fn add_loop<T: Terminal>(
    &self,
    prompter: &mut Prompter<T>,
    playlist: &mut Playlist,
  ) -> Result<usize, CoreError> {
    let mut added = 0;

    loop {
      let before = playlist.len();
      self.add_song(prompter, playlist)?;

      if playlist.len() == before {
        break;
      }
      added += 1;

      if !prompter.yes_no("Desea agregar otra cancion? (s/n)")? {
        break;
      }
    }

    Ok(added)
  }

  /// Quita una canción elegida por posición.
  pub fn remove_song<T: Terminal>(
    &self,
    prompter: &mut Prompter<T>,
    playlist: &mut Playlist,
  ) -> Result<PlaylistEntry, CoreError> {
    if playlist.is_empty() {
      return Err(CoreError::EmptyPlaylist);
    }

    prompter.say("Canciones en el disco:");
    prompter.rule();
    let lines: Vec<String> = playlist
      .entries()
      .iter()
      .map(|e| {
        self.catalog.get(e.song_id).map_or_else(|| "(cancion eliminada)".to_string(), Song::headline)
      })
      .collect();
    prompter.numbered(lines);
    prompter.rule();

    let position = prompter.non_negative_int("Cancion a borrar")?;
    let removed = playlist.remove_at(position)?;
    info!(
      playlist = %playlist.id(),
      song = %removed.song_id,
      total = %playlist.total_size(),
      "song removed from playlist"
    );
    Ok(removed)
  }
}
