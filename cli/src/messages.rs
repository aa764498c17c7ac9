use disco_core::CoreError;
use disco_core::domain::SongField;
use disco_core::services::UpdateOutcome;

/// Texto para el operador de un rechazo del núcleo.
pub fn user_message(err: &CoreError) -> String {
  match err {
    CoreError::SongTooLarge { limit, .. } => format!("Error: La cancion no puede pesar mas de {limit}MB."),
    CoreError::CapacityExceeded { song, used, capacity } => {
      format!("Error: La cancion ({song}MB) no cabe en el disco ({used}MB / {capacity}MB).")
    }
    CoreError::OutOfRange { .. } => "Error: Opcion Invalida".to_string(),
    CoreError::EmptyCatalog => "Error: No hay canciones en el sistema.".to_string(),
    CoreError::EmptyPlaylist => "Error: No hay canciones en el disco.".to_string(),
    CoreError::NotFound => "Error: No se encontro la cancion.".to_string(),
    CoreError::Prompt(e) => format!("Error: Fallo la entrada ({e})."),
    CoreError::Storage(e) => format!("Error: No se pudo guardar ({e})."),
  }
}

pub fn update_message(outcome: UpdateOutcome) -> &'static str {
  match outcome {
    UpdateOutcome::Updated(SongField::Title) => "Informacion: Titulo modificado.",
    UpdateOutcome::Updated(SongField::Artist) => "Informacion: Artista modificado.",
    UpdateOutcome::Updated(SongField::Author) => "Informacion: Autor modificado.",
    UpdateOutcome::Updated(SongField::ReleaseDate) => "Informacion: Fecha de lanzamiento modificada.",
    UpdateOutcome::Updated(SongField::Genre) => "Informacion: Genero modificado.",
    UpdateOutcome::Updated(SongField::Length) => "Informacion: Duracion modificada.",
    UpdateOutcome::Overwritten => "Informacion: Cancion sobreescrita.",
    UpdateOutcome::Declined | UpdateOutcome::Cancelled => "Cancelando...",
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use disco_core::domain::SizeMb;

  #[test]
  fn capacity_message_shows_usage() {
    let err = CoreError::CapacityExceeded { song: SizeMb::new(61), used: SizeMb::new(409), capacity: 450 };
    assert_eq!(user_message(&err), "Error: La cancion (61MB) no cabe en el disco (409MB / 450MB).");
  }

  #[test]
  fn range_errors_read_as_invalid_option() {
    assert_eq!(user_message(&CoreError::OutOfRange { position: 9, len: 2 }), "Error: Opcion Invalida");
  }
}
