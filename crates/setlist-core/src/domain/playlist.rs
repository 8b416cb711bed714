use crate::domain::duration::TrackDuration;
use crate::domain::ids::PlaylistId;
use crate::domain::song::Song;
use serde::{Deserialize, Serialize};

/// Playlist de un usuario.
///
/// `duration` es un campo derivado: debe coincidir con la suma de las
/// duraciones de `songs`. Sólo [`Playlist::add_song`] y
/// [`Playlist::remove_song`] lo recalculan de forma incremental.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
  /// `None` hasta que el store la persiste; inmutable después.
  pub id: Option<PlaylistId>,
  pub name: String,
  /// Usuario dueño de la playlist.
  pub username: String,
  /// Copias de canciones, en orden. Se admiten repetidas.
  pub songs: Vec<Song>,
  pub duration: TrackDuration,
}

impl Playlist {
  pub fn new(name: impl Into<String>, username: impl Into<String>) -> Self {
    Playlist {
      id: None,
      name: name.into(),
      username: username.into(),
      songs: Vec::new(),
      duration: TrackDuration::ZERO,
    }
  }

  pub fn with_id(mut self, id: impl Into<PlaylistId>) -> Self {
    self.id = Some(id.into());
    self
  }

  /// Añade una copia de `song` al final y suma su duración.
  pub fn add_song(&mut self, song: Song) {
    self.duration = self.duration.plus(song.duration);
    self.songs.push(song);
  }

  /// Quita la primera canción igual (campo a campo) a `song` y resta su
  /// duración, con mínimo cero.
  ///
  /// La resta se aplica aunque no haya coincidencia; devuelve si se quitó
  /// algún elemento.
  pub fn remove_song(&mut self, song: &Song) -> bool {
    let removed = match self.songs.iter().position(|s| s == song) {
      Some(idx) => {
        self.songs.remove(idx);
        true
      }
      None => false,
    };

    self.duration = self.duration.minus_clamped(song.duration);
    removed
  }

  /// Suma real de las duraciones de `songs`.
  pub fn songs_duration(&self) -> TrackDuration {
    self.songs.iter().map(|s| &s.duration).sum()
  }
}
