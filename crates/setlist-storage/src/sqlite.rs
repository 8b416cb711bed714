use std::path::Path;

use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use setlist_core::domain::{Playlist, PlaylistId, Song, SongId, TrackDuration};
use setlist_core::ports::{Repository, StoreError};

use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::models::{NewPlaylistRow, NewSongRow, PlaylistRow, SongRow};
use crate::schema::{playlists, songs};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

const JOURNAL_MODES: [&str; 6] = ["DELETE", "TRUNCATE", "PERSIST", "MEMORY", "WAL", "OFF"];

/// Valida el modo contra los que acepta SQLite y lo devuelve en mayúsculas.
fn journal_mode_pragma(mode: &str) -> Result<String, StorageError> {
  let upper = mode.trim().to_ascii_uppercase();
  if JOURNAL_MODES.contains(&upper.as_str()) {
    Ok(upper)
  } else {
    Err(StorageError::JournalMode(mode.to_owned()))
  }
}

/// Pragmas aplicados a cada conexión nueva del pool.
#[derive(Debug)]
struct ConnectionOptions {
  journal_mode: Option<String>,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
  fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
    let mut pragmas = String::from("PRAGMA busy_timeout = 5000;");
    if let Some(mode) = &self.journal_mode {
      pragmas.push_str(&format!(" PRAGMA journal_mode = {mode};"));
    }
    conn.batch_execute(&pragmas).map_err(diesel::r2d2::Error::QueryError)
  }
}

/// Store SQLite para playlists y canciones.
///
/// Diesel es bloqueante: cada operación toma una conexión del pool dentro
/// de `spawn_blocking`. Las playlists guardan sus canciones como JSON.
#[derive(Clone)]
pub struct SqliteStore {
  pool: SqlitePool,
}

impl SqliteStore {
  pub fn new_from_config() -> Result<Self, StorageError> {
    let cfg = StorageConfig::load()?;
    Self::open(&cfg)
  }

  pub fn open(cfg: &StorageConfig) -> Result<Self, StorageError> {
    Self::connect(&cfg.db_path, cfg.journal_mode.clone(), cfg.pool_size)
  }

  pub fn connect(db_path: &Path, journal_mode: Option<String>, pool_size: u32) -> Result<Self, StorageError> {
    let journal_mode = journal_mode.as_deref().map(journal_mode_pragma).transpose()?;
    let database_url = db_path.to_string_lossy().to_string();
    let manager = ConnectionManager::<SqliteConnection>::new(database_url.as_str());
    let pool = Pool::builder()
      .max_size(pool_size.max(1))
      .connection_customizer(Box::new(ConnectionOptions { journal_mode }))
      .build(manager)?;

    let mut pooled = pool.get()?;
    let conn: &mut SqliteConnection = &mut pooled;
    let applied = conn
      .run_pending_migrations(MIGRATIONS)
      .map_err(|e| StorageError::Migration(e.to_string()))?;
    tracing::info!(db = %database_url, migrations = applied.len(), "sqlite store ready");

    Ok(Self { pool })
  }

  async fn run<T, F>(&self, f: F) -> Result<T, StorageError>
  where
    T: Send + 'static,
    F: FnOnce(&mut SqliteConnection) -> Result<T, StorageError> + Send + 'static,
  {
    let pool = self.pool.clone();
    let result = tokio::task::spawn_blocking(move || {
      let mut conn = pool.get()?;
      f(&mut *conn)
    })
    .await?;

    if let Err(e) = &result {
      tracing::error!("sqlite operation failed: {e}");
    }
    result
  }
}

fn duration_to_column(d: TrackDuration) -> Result<i64, StorageError> {
  i64::try_from(d.as_secs()).map_err(|_| StorageError::Corrupt(format!("duration {d} exceeds column range")))
}

fn duration_from_column(secs: i64) -> Result<TrackDuration, StorageError> {
  u64::try_from(secs)
    .map(TrackDuration::from_secs)
    .map_err(|_| StorageError::Corrupt(format!("negative duration {secs}")))
}

fn playlist_to_new_row(playlist: &Playlist, id: &PlaylistId) -> Result<NewPlaylistRow, StorageError> {
  Ok(NewPlaylistRow {
    id: id.to_string(),
    name: playlist.name.clone(),
    username: playlist.username.clone(),
    songs_json: serde_json::to_string(&playlist.songs)?,
    duration_secs: duration_to_column(playlist.duration)?,
  })
}

fn row_to_playlist(row: PlaylistRow) -> Result<Playlist, StorageError> {
  Ok(Playlist {
    id: Some(PlaylistId::from(row.id)),
    name: row.name,
    username: row.username,
    songs: serde_json::from_str(&row.songs_json)?,
    duration: duration_from_column(row.duration_secs)?,
  })
}

fn song_to_new_row(song: &Song, id: &SongId) -> Result<NewSongRow, StorageError> {
  Ok(NewSongRow {
    id: id.to_string(),
    name: song.name.clone(),
    album_id: song.album_id.as_ref().map(|a| a.to_string()),
    lyrics_by: song.lyrics_by.clone(),
    produced_by: song.produced_by.clone(),
    arranged_by: song.arranged_by.clone(),
    duration_secs: duration_to_column(song.duration)?,
  })
}

fn row_to_song(row: SongRow) -> Result<Song, StorageError> {
  Ok(Song {
    id: Some(SongId::from(row.id)),
    name: row.name,
    album_id: row.album_id.map(Into::into),
    lyrics_by: row.lyrics_by,
    produced_by: row.produced_by,
    arranged_by: row.arranged_by,
    duration: duration_from_column(row.duration_secs)?,
  })
}

fn find_playlist(conn: &mut SqliteConnection, playlist_id: &str) -> Result<Option<Playlist>, StorageError> {
  playlists::table
    .filter(playlists::id.eq(playlist_id))
    .select(PlaylistRow::as_select())
    .first(conn)
    .optional()?
    .map(row_to_playlist)
    .transpose()
}

fn find_song(conn: &mut SqliteConnection, song_id: &str) -> Result<Option<Song>, StorageError> {
  songs::table
    .filter(songs::id.eq(song_id))
    .select(SongRow::as_select())
    .first(conn)
    .optional()?
    .map(row_to_song)
    .transpose()
}

#[async_trait]
impl Repository<Playlist> for SqliteStore {
  async fn fetch_all(&self) -> Result<Vec<Playlist>, StoreError> {
    let all = self
      .run(|conn| {
        playlists::table
          .order(playlists::seq.asc())
          .select(PlaylistRow::as_select())
          .load(conn)?
          .into_iter()
          .map(row_to_playlist)
          .collect::<Result<Vec<_>, _>>()
      })
      .await?;
    Ok(all)
  }

  async fn fetch_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>, StoreError> {
    let id = id.to_string();
    Ok(self.run(move |conn| find_playlist(conn, &id)).await?)
  }

  async fn save(&self, playlist: Playlist) -> Result<Option<Playlist>, StoreError> {
    let id = playlist.id.clone().unwrap_or_default();
    let row = playlist_to_new_row(&playlist, &id)?;

    let saved = self
      .run(move |conn| {
        diesel::insert_into(playlists::table)
          .values(&row)
          .on_conflict(playlists::id)
          .do_update()
          .set(&row)
          .execute(conn)?;
        find_playlist(conn, &row.id)
      })
      .await?;
    Ok(saved)
  }

  async fn delete_by_id(&self, id: &PlaylistId) -> Result<(), StoreError> {
    let id = id.to_string();
    self
      .run(move |conn| {
        diesel::delete(playlists::table.filter(playlists::id.eq(&id))).execute(conn)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

#[async_trait]
impl Repository<Song> for SqliteStore {
  async fn fetch_all(&self) -> Result<Vec<Song>, StoreError> {
    let all = self
      .run(|conn| {
        songs::table
          .order(songs::seq.asc())
          .select(SongRow::as_select())
          .load(conn)?
          .into_iter()
          .map(row_to_song)
          .collect::<Result<Vec<_>, _>>()
      })
      .await?;
    Ok(all)
  }

  async fn fetch_by_id(&self, id: &SongId) -> Result<Option<Song>, StoreError> {
    let id = id.to_string();
    Ok(self.run(move |conn| find_song(conn, &id)).await?)
  }

  async fn save(&self, song: Song) -> Result<Option<Song>, StoreError> {
    let id = song.id.clone().unwrap_or_default();
    let row = song_to_new_row(&song, &id)?;

    let saved = self
      .run(move |conn| {
        diesel::insert_into(songs::table)
          .values(&row)
          .on_conflict(songs::id)
          .do_update()
          .set(&row)
          .execute(conn)?;
        find_song(conn, &row.id)
      })
      .await?;
    Ok(saved)
  }

  async fn delete_by_id(&self, id: &SongId) -> Result<(), StoreError> {
    let id = id.to_string();
    self
      .run(move |conn| {
        diesel::delete(songs::table.filter(songs::id.eq(&id))).execute(conn)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
