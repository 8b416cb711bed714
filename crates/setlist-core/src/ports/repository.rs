use async_trait::async_trait;
use std::fmt;
use std::hash::Hash;

use crate::domain::{Playlist, PlaylistId, Song, SongId};

/// Fallo opaco del store. "Ausente" y "vacío" no son fallos.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
  #[error("store fault: {0}")]
  Fault(String),
}

/// Registro guardable en un [`Repository`], identificado por una clave.
pub trait Entity: Clone + Send + Sync + 'static {
  type Id: Clone + Eq + Hash + fmt::Display + Send + Sync + 'static;

  fn id(&self) -> Option<&Self::Id>;
  fn set_id(&mut self, id: Self::Id);
  /// Identificador nuevo para registros que llegan sin uno.
  fn fresh_id() -> Self::Id;
}

impl Entity for Playlist {
  type Id = PlaylistId;

  fn id(&self) -> Option<&PlaylistId> {
    self.id.as_ref()
  }

  fn set_id(&mut self, id: PlaylistId) {
    self.id = Some(id);
  }

  fn fresh_id() -> PlaylistId {
    PlaylistId::new()
  }
}

impl Entity for Song {
  type Id = SongId;

  fn id(&self) -> Option<&SongId> {
    self.id.as_ref()
  }

  fn set_id(&mut self, id: SongId) {
    self.id = Some(id);
  }

  fn fresh_id() -> SongId {
    SongId::new()
  }
}

/// Port del store clave-valor asíncrono.
///
/// No hay transacciones entre llamadas: un leer-modificar-guardar desde
/// fuera puede perder actualizaciones concurrentes.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
  /// Todos los registros, en orden de inserción. Vacío no es error.
  async fn fetch_all(&self) -> Result<Vec<E>, StoreError>;

  async fn fetch_by_id(&self, id: &E::Id) -> Result<Option<E>, StoreError>;

  /// Crea o reemplaza. Asigna identificador si falta. `Ok(None)` indica
  /// una respuesta vacía del store.
  async fn save(&self, entity: E) -> Result<Option<E>, StoreError>;

  async fn delete_by_id(&self, id: &E::Id) -> Result<(), StoreError>;
}

#[async_trait]
impl<E, R> Repository<E> for std::sync::Arc<R>
where
  E: Entity,
  R: Repository<E> + ?Sized,
{
  async fn fetch_all(&self) -> Result<Vec<E>, StoreError> {
    (**self).fetch_all().await
  }

  async fn fetch_by_id(&self, id: &E::Id) -> Result<Option<E>, StoreError> {
    (**self).fetch_by_id(id).await
  }

  async fn save(&self, entity: E) -> Result<Option<E>, StoreError> {
    (**self).save(entity).await
  }

  async fn delete_by_id(&self, id: &E::Id) -> Result<(), StoreError> {
    (**self).delete_by_id(id).await
  }
}
