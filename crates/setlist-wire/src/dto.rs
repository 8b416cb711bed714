use serde::{Deserialize, Serialize};
use setlist_core::domain::TrackDuration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDto {
  #[serde(default)]
  pub id_song: Option<String>,
  pub name: String,
  #[serde(default)]
  pub id_album: Option<String>,
  #[serde(default)]
  pub lyrics_by: String,
  #[serde(default)]
  pub produced_by: String,
  #[serde(default)]
  pub arranged_by: String,
  #[serde(default)]
  pub duration: TrackDuration,
}

/// Playlist tal como viaja por el API.
///
/// `songs` y `duration` pueden omitirse al crear; se toman vacíos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDto {
  #[serde(default)]
  pub id_playlist: Option<String>,
  pub name: String,
  pub username: String,
  #[serde(default)]
  pub songs: Vec<SongDto>,
  #[serde(default)]
  pub duration: TrackDuration,
}
