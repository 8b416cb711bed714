use async_trait::async_trait;
use tokio::sync::RwLock;

use setlist_core::ports::{Entity, Repository, StoreError};

/// Store en proceso, en orden de inserción. Útil para demos y tests.
pub struct MemoryRepository<E> {
  records: RwLock<Vec<E>>,
}

impl<E: Entity> MemoryRepository<E> {
  pub fn new() -> Self {
    Self { records: RwLock::new(Vec::new()) }
  }

  pub fn with_records(records: Vec<E>) -> Self {
    Self { records: RwLock::new(records) }
  }

  pub async fn len(&self) -> usize {
    self.records.read().await.len()
  }

  pub async fn is_empty(&self) -> bool {
    self.records.read().await.is_empty()
  }
}

impl<E: Entity> Default for MemoryRepository<E> {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
  async fn fetch_all(&self) -> Result<Vec<E>, StoreError> {
    Ok(self.records.read().await.clone())
  }

  async fn fetch_by_id(&self, id: &E::Id) -> Result<Option<E>, StoreError> {
    let records = self.records.read().await;
    Ok(records.iter().find(|e| e.id() == Some(id)).cloned())
  }

  async fn save(&self, mut entity: E) -> Result<Option<E>, StoreError> {
    let id = match entity.id() {
      Some(id) => id.clone(),
      None => {
        let id = E::fresh_id();
        entity.set_id(id.clone());
        id
      }
    };

    let mut records = self.records.write().await;
    match records.iter_mut().find(|e| e.id() == Some(&id)) {
      Some(slot) => *slot = entity.clone(),
      None => records.push(entity.clone()),
    }
    Ok(Some(entity))
  }

  async fn delete_by_id(&self, id: &E::Id) -> Result<(), StoreError> {
    self.records.write().await.retain(|e| e.id() != Some(id));
    Ok(())
  }
}
