pub mod catalog;
pub mod ids;
pub mod playlist;
pub mod registry;
pub mod report;
pub mod song;

pub use catalog::Catalog;
pub use ids::SongId;
pub use playlist::{DISC_CAPACITY_MB, Playlist, PlaylistEntry};
pub use registry::PlaylistRegistry;
pub use report::PlaylistReport;
pub use song::{MAX_SONG_SIZE_MB, SizeMb, Song, SongDraft, SongEdit, SongField, SongLength};
