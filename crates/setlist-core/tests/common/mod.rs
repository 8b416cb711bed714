//! Repositorio en memoria con inyección de fallos para los tests de servicios.
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use setlist_core::domain::{Playlist, Song, TrackDuration};
use setlist_core::ports::{Entity, Repository, StoreError};

pub struct FakeRepo<E> {
  records: Mutex<Vec<E>>,
  calls: Mutex<Vec<String>>,
  pub fail_fetch_all: AtomicBool,
  pub fail_fetch: AtomicBool,
  pub fail_save: AtomicBool,
  /// `save` responde `Ok(None)`.
  pub void_save: AtomicBool,
  pub fail_delete: AtomicBool,
  /// Cede el control antes de cada acceso para entrelazar llamadas concurrentes.
  pub yield_on_access: AtomicBool,
}

impl<E: Entity> FakeRepo<E> {
  pub fn new() -> Self {
    Self {
      records: Mutex::new(Vec::new()),
      calls: Mutex::new(Vec::new()),
      fail_fetch_all: AtomicBool::new(false),
      fail_fetch: AtomicBool::new(false),
      fail_save: AtomicBool::new(false),
      void_save: AtomicBool::new(false),
      fail_delete: AtomicBool::new(false),
      yield_on_access: AtomicBool::new(false),
    }
  }

  pub fn with(records: Vec<E>) -> Self {
    let repo = Self::new();
    *repo.records.lock().unwrap() = records;
    repo
  }

  pub fn records(&self) -> Vec<E> {
    self.records.lock().unwrap().clone()
  }

  pub fn get(&self, id: &E::Id) -> Option<E> {
    self.records.lock().unwrap().iter().find(|e| e.id() == Some(id)).cloned()
  }

  pub fn calls(&self) -> Vec<String> {
    self.calls.lock().unwrap().clone()
  }

  fn record(&self, call: String) {
    self.calls.lock().unwrap().push(call);
  }

  async fn maybe_yield(&self) {
    if self.yield_on_access.load(Ordering::SeqCst) {
      tokio::task::yield_now().await;
    }
  }

  fn fault(flag: &AtomicBool) -> Result<(), StoreError> {
    if flag.load(Ordering::SeqCst) {
      return Err(StoreError::Fault("injected".into()));
    }
    Ok(())
  }
}

#[async_trait]
impl<E: Entity> Repository<E> for FakeRepo<E> {
  async fn fetch_all(&self) -> Result<Vec<E>, StoreError> {
    self.record("fetch_all".into());
    self.maybe_yield().await;
    Self::fault(&self.fail_fetch_all)?;
    Ok(self.records())
  }

  async fn fetch_by_id(&self, id: &E::Id) -> Result<Option<E>, StoreError> {
    self.record(format!("fetch_by_id {id}"));
    self.maybe_yield().await;
    Self::fault(&self.fail_fetch)?;
    Ok(self.get(id))
  }

  async fn save(&self, mut entity: E) -> Result<Option<E>, StoreError> {
    let id = entity.id().cloned().unwrap_or_else(E::fresh_id);
    self.record(format!("save {id}"));
    self.maybe_yield().await;
    Self::fault(&self.fail_save)?;
    if self.void_save.load(Ordering::SeqCst) {
      return Ok(None);
    }

    entity.set_id(id.clone());
    let mut records = self.records.lock().unwrap();
    match records.iter_mut().find(|e| e.id() == Some(&id)) {
      Some(slot) => *slot = entity.clone(),
      None => records.push(entity.clone()),
    }
    Ok(Some(entity))
  }

  async fn delete_by_id(&self, id: &E::Id) -> Result<(), StoreError> {
    self.record(format!("delete_by_id {id}"));
    self.maybe_yield().await;
    Self::fault(&self.fail_delete)?;
    self.records.lock().unwrap().retain(|e| e.id() != Some(id));
    Ok(())
  }
}

/// Activa un flag de fallo de [`FakeRepo`].
pub fn arm(flag: &AtomicBool) {
  flag.store(true, Ordering::SeqCst);
}

pub fn smells_like_teen_spirit() -> Song {
  Song {
    id: Some("23456".into()),
    name: "Smells Like Teen Spirit".into(),
    album_id: Some("98765".into()),
    lyrics_by: "Pina Records".into(),
    produced_by: "Manolo Santana".into(),
    arranged_by: "Daddy Yankee".into(),
    duration: TrackDuration::new(0, 2, 24),
  }
}

pub fn short_song(id: &str, seconds: u64) -> Song {
  Song::new(format!("song {id}"), TrackDuration::new(0, 0, seconds)).with_id(id).with_album("98765")
}

pub fn rock_playlist() -> Playlist {
  Playlist::new("Rock", "Santiago Sierra").with_id("246802")
}
