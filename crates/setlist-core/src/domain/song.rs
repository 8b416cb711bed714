use crate::domain::duration::TrackDuration;
use crate::domain::ids::{AlbumId, SongId};
use serde::{Deserialize, Serialize};

/// Canción del catálogo.
///
/// Las playlists guardan copias por valor: editar la canción canónica no
/// cambia las copias ya embebidas, y la igualdad es campo a campo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
  /// `None` hasta que el store la persiste por primera vez.
  pub id: Option<SongId>,
  /// El título de la canción.
  pub name: String,
  /// Álbum al que pertenece.
  pub album_id: Option<AlbumId>,
  /// Autor(es) de la letra.
  pub lyrics_by: String,
  /// Productor(es).
  pub produced_by: String,
  /// Arreglista(s).
  pub arranged_by: String,
  pub duration: TrackDuration,
}

impl Song {
  pub fn new(name: impl Into<String>, duration: TrackDuration) -> Self {
    Song {
      id: None,
      name: name.into(),
      album_id: None,
      lyrics_by: String::new(),
      produced_by: String::new(),
      arranged_by: String::new(),
      duration,
    }
  }

  pub fn with_id(mut self, id: impl Into<SongId>) -> Self {
    self.id = Some(id.into());
    self
  }

  pub fn with_album(mut self, album_id: impl Into<AlbumId>) -> Self {
    self.album_id = Some(album_id.into());
    self
  }
}
