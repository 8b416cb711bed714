pub mod duration;
pub mod ids;
pub mod playlist;
pub mod song;

pub use duration::{DurationParseError, TrackDuration};
pub use ids::{AlbumId, PlaylistId, SongId};
pub use playlist::Playlist;
pub use song::Song;
