use async_trait::async_trait;

use crate::domain::{Song, SongId};
use crate::outcome::Response;

/// Resolución de una canción canónica a partir de su id.
///
/// Lo implementa [`crate::services::SongService`]; el servicio de
/// playlists sólo mira si el resultado fue `Found`.
#[async_trait]
pub trait SongLookup: Send + Sync {
  async fn resolve(&self, song_id: &SongId) -> Response<Song>;
}

#[async_trait]
impl<L: SongLookup + ?Sized> SongLookup for std::sync::Arc<L> {
  async fn resolve(&self, song_id: &SongId) -> Response<Song> {
    (**self).resolve(song_id).await
  }
}
