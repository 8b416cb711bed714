//! Representación de intercambio de playlists y canciones.
//!
//! Los DTOs usan los nombres de campo del API JSON (`idPlaylist`, `idSong`,
//! ...) y la duración como texto `HH:MM:SS`. La conversión con el dominio es
//! total en ambos sentidos.

pub mod dto;
pub mod mapping;

pub use dto::{PlaylistDto, SongDto};
pub use mapping::{to_domain, to_wire};
