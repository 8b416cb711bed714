mod crud;
pub mod playlist_service;
pub mod song_service;

pub use playlist_service::PlaylistService;
pub use song_service::SongService;
