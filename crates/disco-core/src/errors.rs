use thiserror::Error;

use crate::domain::SizeMb;
use crate::ports::{PromptError, StoreError};

/// Error genérico del núcleo de Disco.
///
/// Las capas superiores (CLI) deberían mapear este error a mensajes de
/// usuario. Ningún rechazo de negocio deja el catálogo o la playlist a medias.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("song weighs {size} MB, limit is {limit} MB")]
  SongTooLarge { size: SizeMb, limit: u64 },

  #[error("adding {song} MB would exceed disc capacity ({used}/{capacity} MB used)")]
  CapacityExceeded { song: SizeMb, used: SizeMb, capacity: u64 },

  #[error("position {position} out of range 1..={len}")]
  OutOfRange { position: u32, len: usize },

  #[error("catalog is empty")]
  EmptyCatalog,

  #[error("playlist is empty")]
  EmptyPlaylist,

  #[error("not found")]
  NotFound,

  #[error("prompt error: {0}")]
  Prompt(#[from] PromptError),

  #[error("storage error: {0}")]
  Storage(#[from] StoreError),
}
