use std::sync::Arc;

use setlist_config::{LoggingConfig, init_tracing};
use setlist_core::domain::{Playlist, Song, TrackDuration};
use setlist_core::services::{PlaylistService, SongService};
use setlist_storage::SqliteStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  init_tracing(&LoggingConfig::load()?);

  // Usa la base definida en [storage] de setlist.toml
  let store = Arc::new(SqliteStore::new_from_config()?);
  let songs = SongService::new(store.clone());
  let playlists = PlaylistService::new(store.clone(), SongService::new(store.clone()));

  let song = Song::new("Test Song", TrackDuration::new(0, 3, 58)).with_album("test-album");
  let song = songs.save(song).await.into_body().ok_or_else(|| anyhow::anyhow!("song not saved"))?;
  let song_id = song.id.clone().ok_or_else(|| anyhow::anyhow!("song without id"))?;
  println!("Saved song {song_id} ({})", song.duration);

  let playlist = playlists
    .save(Playlist::new("Smoke", "smoke-user"))
    .await
    .into_body()
    .ok_or_else(|| anyhow::anyhow!("playlist not saved"))?;
  let playlist_id = playlist.id.clone().ok_or_else(|| anyhow::anyhow!("playlist without id"))?;
  println!("Saved playlist {playlist_id}");

  let added = playlists.add_song(&playlist_id, &song_id).await;
  println!("add_song -> {} {:?}", added.status(), added.body().map(|p| p.duration.to_string()));

  let removed = playlists.remove_song(&playlist_id, &song_id).await;
  println!("remove_song -> {} {:?}", removed.status(), removed.body().map(|p| p.duration.to_string()));

  let deleted = playlists.delete(&playlist_id).await;
  println!("delete -> {}", deleted.status());

  Ok(())
}
