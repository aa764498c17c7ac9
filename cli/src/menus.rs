use tracing::warn;

use disco_core::CoreError;
use disco_core::domain::{Catalog, Playlist, PlaylistReport};
use disco_core::ports::{PromptError, SessionStore, Terminal};
use disco_core::services::{BurnOutcome, FilterEngine, FilterOutcome, PlaylistBuilder, Prompter, Session};

use crate::messages::{update_message, user_message};

/// Muestra un rechazo al operador. Solo la caída de la entrada sigue subiendo.
fn report<T: Terminal>(prompter: &mut Prompter<T>, err: CoreError) -> Result<(), PromptError> {
  match err {
    CoreError::Prompt(e) => Err(e),
    other => {
      if let CoreError::Storage(e) = &other {
        warn!(error = %e, "storage operation failed");
      }
      prompter.say(user_message(&other));
      Ok(())
    }
  }
}

/// Menú principal. Vuelve cuando el operador elige `0`.
pub fn run_session<S: SessionStore, T: Terminal>(
  session: &mut Session<S>,
  prompter: &mut Prompter<T>,
) -> Result<(), PromptError> {
  loop {
    prompter.say("Menu principal");
    prompter.say("-----------------------");
    prompter.say("1. Agregar Cancion");
    prompter.say("2. Borrar Cancion");
    prompter.say("3. Modificar Cancion");
    prompter.say("-----------------------");
    prompter.say("4. Grabar Disco");
    prompter.say("-----------------------");
    prompter.say("5. Buscar Canciones...");
    prompter.say("-----------------------");
    prompter.say("0. Salir");

    let option = prompter.non_negative_int("Opcion")?;
    prompter.rule();

    let result = match option {
      0 => {
        prompter.say("Saliendo...");
        return Ok(());
      }
      1 => add_song(session, prompter),
      2 => remove_song(session, prompter),
      3 => update_song(session, prompter),
      4 => burn(session, prompter),
      5 => search(session, prompter),
      _ => {
        prompter.say("Error: Opcion Invalida");
        Ok(())
      }
    };

    if let Err(e) = result {
      report(prompter, e)?;
    }
  }
}

fn add_song<S: SessionStore, T: Terminal>(
  session: &mut Session<S>,
  prompter: &mut Prompter<T>,
) -> Result<(), CoreError> {
  match session.add_song(prompter)? {
    Some(song) => prompter.say(format!("Cancion '{}' agregada.", song.title)),
    None => prompter.say("Cancelando..."),
  }
  Ok(())
}

fn remove_song<S: SessionStore, T: Terminal>(
  session: &mut Session<S>,
  prompter: &mut Prompter<T>,
) -> Result<(), CoreError> {
  let removal = session.remove_song(prompter)?;
  prompter.say("Informacion: Cancion borrada.");

  if removal.referenced_by > 0 {
    prompter.say(format!(
      "Aviso: '{}' sigue en {} disco(s) guardado(s) y no se grabara con ellos.",
      removal.song.title, removal.referenced_by
    ));
  }
  Ok(())
}

fn update_song<S: SessionStore, T: Terminal>(
  session: &mut Session<S>,
  prompter: &mut Prompter<T>,
) -> Result<(), CoreError> {
  let outcome = session.update_song(prompter)?;
  prompter.say(update_message(outcome));
  Ok(())
}

/// Arma (o reabre) un disco, lo guarda en el registro si es nuevo y graba
/// su reporte.
fn burn<S: SessionStore, T: Terminal>(
  session: &mut Session<S>,
  prompter: &mut Prompter<T>,
) -> Result<(), CoreError> {
  if session.catalog().is_empty() {
    return Err(CoreError::EmptyCatalog);
  }

  let result = match choose_existing(session, prompter)? {
    Some(position) => {
      let (catalog, playlist) = session.playlist_mut(position)?;
      edit_playlist(prompter, catalog, playlist)?;
      session.finish_existing(position)
    }
    None => {
      let mut playlist = Playlist::new(prompter.text("ID del disco", 30)?);
      edit_playlist(prompter, session.catalog(), &mut playlist)?;

      let before = session.registry().len();
      let result = session.finish_new(playlist);
      // Queda en el registro aunque falle la grabación.
      if session.registry().len() > before {
        if let Some(committed) = session.registry().playlists().last() {
          prompter.say(format!("Informacion: Nueva playlist '{}' guardada.", committed.id()));
        }
      }
      result
    }
  };

  match result {
    Ok(BurnOutcome::Burned { path, .. }) => {
      prompter.say(format!("Informacion: Disco grabado en {}.", path.display()));
    }
    Ok(BurnOutcome::Empty) => prompter.say("Error: No se puede grabar un disco sin canciones."),
    Err(CoreError::Storage(e)) => {
      warn!(error = %e, "playlist export failed");
      prompter.say("Error: No se pudo guardar el disco.");
    }
    Err(e) => return Err(e),
  }
  Ok(())
}

/// Ofrece reabrir un disco guardado. `None` significa crear uno nuevo.
fn choose_existing<S: SessionStore, T: Terminal>(
  session: &Session<S>,
  prompter: &mut Prompter<T>,
) -> Result<Option<u32>, PromptError> {
  let registry = session.registry();
  if registry.is_empty() {
    return Ok(None);
  }

  prompter.say("Informacion: Existen playlists en el sistema. Seleccione una o cree una desde cero.");
  prompter.numbered(registry.playlists().iter().map(Playlist::id));
  prompter.say("0. Crear desde cero");

  let option = prompter.non_negative_int("Opcion")?;
  prompter.rule();

  // Cualquier número fuera del listado también crea uno nuevo.
  let existing = option >= 1 && (option as usize) <= registry.len();
  Ok(existing.then_some(option))
}

fn edit_playlist<T: Terminal>(
  prompter: &mut Prompter<T>,
  catalog: &Catalog,
  playlist: &mut Playlist,
) -> Result<(), CoreError> {
  let builder = PlaylistBuilder::new(catalog);

  loop {
    prompter.say(format!("Menu del Disco '{}'", playlist.id()));
    prompter.say(PlaylistBuilder::usage_line(playlist));
    prompter.say("1. Agregar");
    prompter.say("2. Borrar");
    prompter.say("3. Mostrar");
    prompter.say("0. Finalizar");

    let option = prompter.non_negative_int("Opcion")?;
    prompter.rule();

    let result = match option {
      0 => {
        prompter.say("Finalizando...");
        return Ok(());
      }
      1 => builder.add_loop(prompter, playlist).map(|_| ()),
      2 => match builder.remove_song(prompter, playlist) {
        Ok(_) => {
          prompter.say("Informacion: Cancion borrada.");
          Ok(())
        }
        Err(e) => Err(e),
      },
      3 => {
        show_playlist(prompter, catalog, playlist);
        Ok(())
      }
      _ => {
        prompter.say("Error: Opcion Invalida");
        Ok(())
      }
    };

    if let Err(e) = result {
      report(prompter, e)?;
    }
  }
}

fn show_playlist<T: Terminal>(prompter: &mut Prompter<T>, catalog: &Catalog, playlist: &Playlist) {
  let songs = PlaylistReport::new(playlist, catalog).resolved_songs();
  if songs.is_empty() {
    prompter.say("Error: No hay canciones en el disco.");
    return;
  }

  prompter.say("Canciones en el disco:");
  prompter.rule();
  for song in songs {
    prompter.say(song.to_string());
  }
  prompter.rule();
}

fn search<S: SessionStore, T: Terminal>(
  session: &Session<S>,
  prompter: &mut Prompter<T>,
) -> Result<(), CoreError> {
  let songs = session.catalog().songs();
  if songs.is_empty() {
    return Err(CoreError::EmptyCatalog);
  }

  prompter.say("Menu de Busqueda");
  prompter.say("1. Buscar por Filtro");
  prompter.say("2. Mostrar todas las canciones");
  prompter.say("0. Volver");

  match prompter.non_negative_int("Opcion")? {
    0 => {}
    1 => {
      let outcome = FilterEngine::run(prompter, songs)?;
      prompter.say("Resultados de la busqueda:");
      prompter.rule();
      match outcome {
        FilterOutcome::Matches(found) => {
          for song in found {
            prompter.say(song.to_string());
          }
        }
        FilterOutcome::NoMatches | FilterOutcome::Cancelled => {
          prompter.say("Error: No se encontraron resultados.");
        }
      }
      prompter.rule();
    }
    2 => {
      prompter.say("Canciones disponibles:");
      prompter.rule();
      for song in songs {
        prompter.say(song.to_string());
      }
      prompter.rule();
    }
    _ => prompter.say("Error: Opcion Invalida"),
  }

  Ok(())
}
