//! Copia campo a campo entre DTOs y dominio.
//!
//! Ninguna conversión falla ni pierde datos: un id ausente sigue ausente y
//! las canciones embebidas conservan su orden.

use setlist_core::domain::{Playlist, Song};

use crate::dto::{PlaylistDto, SongDto};

/// `let playlist: Playlist = to_domain(dto);`
pub fn to_domain<W, D>(wire: W) -> D
where
  D: From<W>,
{
  D::from(wire)
}

/// `let dto: PlaylistDto = to_wire(playlist);`
pub fn to_wire<D, W>(record: D) -> W
where
  W: From<D>,
{
  W::from(record)
}

impl From<SongDto> for Song {
  fn from(dto: SongDto) -> Self {
    Song {
      id: dto.id_song.map(Into::into),
      name: dto.name,
      album_id: dto.id_album.map(Into::into),
      lyrics_by: dto.lyrics_by,
      produced_by: dto.produced_by,
      arranged_by: dto.arranged_by,
      duration: dto.duration,
    }
  }
}

impl From<Song> for SongDto {
  fn from(song: Song) -> Self {
    SongDto {
      id_song: song.id.map(Into::into),
      name: song.name,
      id_album: song.album_id.map(Into::into),
      lyrics_by: song.lyrics_by,
      produced_by: song.produced_by,
      arranged_by: song.arranged_by,
      duration: song.duration,
    }
  }
}

impl From<PlaylistDto> for Playlist {
  fn from(dto: PlaylistDto) -> Self {
    Playlist {
      id: dto.id_playlist.map(Into::into),
      name: dto.name,
      username: dto.username,
      songs: dto.songs.into_iter().map(Song::from).collect(),
      duration: dto.duration,
    }
  }
}

impl From<Playlist> for PlaylistDto {
  fn from(playlist: Playlist) -> Self {
    PlaylistDto {
      id_playlist: playlist.id.map(Into::into),
      name: playlist.name,
      username: playlist.username,
      songs: playlist.songs.into_iter().map(SongDto::from).collect(),
      duration: playlist.duration,
    }
  }
}
