use async_trait::async_trait;

use crate::domain::{Song, SongId};
use crate::outcome::Response;
use crate::ports::{Repository, SongLookup};
use crate::services::crud;

/// Catálogo de canciones sobre un [`Repository`] de `Song`.
///
/// Mismas reglas de clasificación que las playlists; además sirve como
/// [`SongLookup`] para [`crate::services::PlaylistService`].
pub struct SongService<R>
where
  R: Repository<Song>,
{
  repo: R,
}

impl<R> SongService<R>
where
  R: Repository<Song>,
{
  pub fn new(repo: R) -> Self {
    Self { repo }
  }

  pub async fn find_all(&self) -> Response<Vec<Song>> {
    crud::find_all::<Song, R>("song.find_all", &self.repo).await
  }

  pub async fn find_by_id(&self, id: &SongId) -> Response<Song> {
    crud::find_by_id::<Song, R>("song.find_by_id", &self.repo, id).await
  }

  pub async fn save(&self, song: Song) -> Response<Song> {
    crud::save::<Song, R>("song.save", &self.repo, song).await
  }

  pub async fn update(&self, id: &SongId, song: Song) -> Response<Song> {
    crud::update::<Song, R>("song.update", &self.repo, id, song).await
  }

  pub async fn delete(&self, id: &SongId) -> Response<SongId> {
    crud::delete::<Song, R>("song.delete", &self.repo, id).await
  }
}

#[async_trait]
impl<R> SongLookup for SongService<R>
where
  R: Repository<Song>,
{
  async fn resolve(&self, song_id: &SongId) -> Response<Song> {
    self.find_by_id(song_id).await
  }
}
