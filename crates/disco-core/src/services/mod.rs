pub mod catalog_service;
pub mod filter;
pub mod playlist_builder;
pub mod prompt;
pub mod session;
pub mod validate;

pub use catalog_service::{CatalogService, UpdateOutcome, capture_song};
pub use filter::{Criterion, CriterionKind, FilterEngine, FilterOutcome, filter};
pub use playlist_builder::{PlaylistBuilder, SelectionMode};
pub use prompt::Prompter;
pub use session::{BurnOutcome, Removal, Session};
pub use validate::FieldError;
