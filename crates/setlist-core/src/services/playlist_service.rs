use crate::domain::{Playlist, PlaylistId, Song, SongId};
use crate::errors::CoreError;
use crate::outcome::{Response, Status, settle};
use crate::ports::{Repository, SongLookup};
use crate::services::crud;

/// Servicio de agregación de playlists.
///
/// Mantiene la lista de canciones de cada playlist y su duración total.
/// No guarda estado entre llamadas: todo vive en el store, al que accede
/// sólo a través de `P`. Las canciones se resuelven con `L`.
///
/// `add_song` y `remove_song` leen, modifican y guardan sin atomicidad:
/// dos llamadas concurrentes sobre la misma playlist pueden pisarse.
pub struct PlaylistService<P, L>
where
  P: Repository<Playlist>,
  L: SongLookup,
{
  playlists: P,
  songs: L,
}

impl<P, L> PlaylistService<P, L>
where
  P: Repository<Playlist>,
  L: SongLookup,
{
  pub fn new(playlists: P, songs: L) -> Self {
    Self { playlists, songs }
  }

  // -------- QUERY (read) --------

  /// `Found` con todas las playlists, o `NoContent` si no hay ninguna.
  /// Un fallo del store también se publica como `NoContent`.
  pub async fn find_all(&self) -> Response<Vec<Playlist>> {
    crud::find_all::<Playlist, P>("playlist.find_all", &self.playlists).await
  }

  pub async fn find_by_id(&self, id: &PlaylistId) -> Response<Playlist> {
    crud::find_by_id::<Playlist, P>("playlist.find_by_id", &self.playlists, id).await
  }

  // -------- COMMAND (write) --------

  /// `Created` con el registro persistido (incluido el id asignado), o
  /// `PreconditionFailed` si el store falla o no devuelve nada.
  pub async fn save(&self, playlist: Playlist) -> Response<Playlist> {
    crud::save::<Playlist, P>("playlist.save", &self.playlists, playlist).await
  }

  /// Reemplaza todos los campos salvo el id, que se toma del registro
  /// existente. `Accepted` si se guardó; `NotModified` en cualquier otro caso.
  pub async fn update(&self, id: &PlaylistId, playlist: Playlist) -> Response<Playlist> {
    crud::update::<Playlist, P>("playlist.update", &self.playlists, id, playlist).await
  }

  /// `Accepted` con `id` en cuanto se confirma que existe, aunque el borrado
  /// en sí falle después. `NotFound` si no existe.
  pub async fn delete(&self, id: &PlaylistId) -> Response<PlaylistId> {
    crud::delete::<Playlist, P>("playlist.delete", &self.playlists, id).await
  }

  /// Añade una copia de la canción al final y suma su duración.
  pub async fn add_song(&self, playlist_id: &PlaylistId, song_id: &SongId) -> Response<Playlist> {
    tracing::debug!(%playlist_id, %song_id, "playlist.add_song");
    let result = self.mutate(playlist_id, song_id, |playlist, song| playlist.add_song(song)).await;
    settle("playlist.add_song", result, Status::Accepted, mutation_failure)
  }

  /// Quita la primera copia igual a la canción canónica y resta su duración
  /// (mínimo cero). Si ninguna copia coincide la lista no cambia, pero la
  /// resta se aplica igualmente.
  pub async fn remove_song(&self, playlist_id: &PlaylistId, song_id: &SongId) -> Response<Playlist> {
    tracing::debug!(%playlist_id, %song_id, "playlist.remove_song");
    let result = self
      .mutate(playlist_id, song_id, |playlist, song| {
        if !playlist.remove_song(&song) {
          tracing::warn!(
            playlist_id = ?playlist.id,
            song_id = ?song.id,
            "no matching copy in playlist; duration still reduced"
          );
        }
      })
      .await;
    settle("playlist.remove_song", result, Status::Accepted, mutation_failure)
  }

  /// resolver canción -> leer playlist -> transformar -> guardar
  async fn mutate<F>(&self, playlist_id: &PlaylistId, song_id: &SongId, apply: F) -> Result<Playlist, CoreError>
  where
    F: FnOnce(&mut Playlist, Song),
  {
    let song = self.resolve_song(song_id).await?;
    let mut playlist = crud::fetch_existing::<Playlist, P>(&self.playlists, playlist_id).await?;

    apply(&mut playlist, song);

    let saved = crud::persist::<Playlist, P>(&self.playlists, playlist).await?;
    tracing::info!(%playlist_id, duration = %saved.duration, songs = saved.songs.len(), "playlist updated");
    Ok(saved)
  }

  async fn resolve_song(&self, song_id: &SongId) -> Result<Song, CoreError> {
    match self.songs.resolve(song_id).await.into_parts() {
      (Status::Found, Some(song)) => Ok(song),
      (Status::Found, None) => Err(CoreError::Validation(format!("lookup of song {song_id} returned no record"))),
      (Status::NotFound, _) => Err(CoreError::NotFound),
      (other, _) => Err(CoreError::Validation(format!("lookup of song {song_id} answered {other}"))),
    }
  }
}

/// Ausencias (playlist o canción) son `NotFound`; el resto, `BadRequest`.
fn mutation_failure(err: &CoreError) -> Status {
  match err {
    CoreError::NotFound | CoreError::Validation(_) => Status::NotFound,
    CoreError::EmptyResult | CoreError::Persistence(_) => Status::BadRequest,
  }
}
