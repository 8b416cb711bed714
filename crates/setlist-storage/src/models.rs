use crate::schema::playlists;
use crate::schema::songs;

use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = playlists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlaylistRow {
  pub seq: i64,
  pub id: String,
  pub name: String,
  pub username: String,
  pub songs_json: String,
  pub duration_secs: i64,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = playlists)]
pub struct NewPlaylistRow {
  pub id: String,
  pub name: String,
  pub username: String,
  pub songs_json: String,
  pub duration_secs: i64,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = songs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SongRow {
  pub seq: i64,
  pub id: String,
  pub name: String,
  pub album_id: Option<String>,
  pub lyrics_by: String,
  pub produced_by: String,
  pub arranged_by: String,
  pub duration_secs: i64,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = songs)]
#[diesel(treat_none_as_null = true)]
pub struct NewSongRow {
  pub id: String,
  pub name: String,
  pub album_id: Option<String>,
  pub lyrics_by: String,
  pub produced_by: String,
  pub arranged_by: String,
  pub duration_secs: i64,
}
