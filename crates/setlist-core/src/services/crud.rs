//! Operaciones CRUD comunes a playlists y canciones.
//!
//! Cada función pública termina en un [`Response`]; los helpers privados
//! del pipeline trabajan con `Result<_, CoreError>` y `?`.

use crate::errors::CoreError;
use crate::outcome::{Response, Status, settle};
use crate::ports::{Entity, Repository};

/// Lee un registro y trata la ausencia como [`CoreError::NotFound`].
pub(crate) async fn fetch_existing<E, R>(repo: &R, id: &E::Id) -> Result<E, CoreError>
where
  E: Entity,
  R: Repository<E> + ?Sized,
{
  repo.fetch_by_id(id).await?.ok_or(CoreError::NotFound)
}

/// Guarda y exige que el store devuelva el registro persistido.
pub(crate) async fn persist<E, R>(repo: &R, entity: E) -> Result<E, CoreError>
where
  E: Entity,
  R: Repository<E> + ?Sized,
{
  repo
    .save(entity)
    .await?
    .ok_or_else(|| CoreError::Persistence("store completed save without a record".into()))
}

async fn load_all<E, R>(repo: &R) -> Result<Vec<E>, CoreError>
where
  E: Entity,
  R: Repository<E> + ?Sized,
{
  let all = repo.fetch_all().await?;
  if all.is_empty() {
    return Err(CoreError::EmptyResult);
  }
  Ok(all)
}

async fn replace<E, R>(repo: &R, id: &E::Id, mut incoming: E) -> Result<E, CoreError>
where
  E: Entity,
  R: Repository<E> + ?Sized,
{
  let existing = fetch_existing::<E, R>(repo, id).await?;
  // el id no cambia después de crear el registro
  if let Some(existing_id) = existing.id() {
    incoming.set_id(existing_id.clone());
  }
  persist(repo, incoming).await
}

async fn confirm_and_delete<E, R>(repo: &R, id: &E::Id) -> Result<(), CoreError>
where
  E: Entity,
  R: Repository<E> + ?Sized,
{
  let existing = fetch_existing::<E, R>(repo, id).await?;
  let confirmed = existing.id().cloned().unwrap_or_else(|| id.clone());

  // Una vez confirmada la existencia el borrado no se reintenta ni se reporta.
  if let Err(e) = repo.delete_by_id(&confirmed).await {
    tracing::warn!(id = %confirmed, "delete reported failure after existence check: {e}");
  }
  Ok(())
}

pub(crate) async fn find_all<E, R>(op: &'static str, repo: &R) -> Response<Vec<E>>
where
  E: Entity,
  R: Repository<E> + ?Sized,
{
  tracing::debug!(op, "listing");
  settle(op, load_all::<E, R>(repo).await, Status::Found, |_| Status::NoContent)
}

pub(crate) async fn find_by_id<E, R>(op: &'static str, repo: &R, id: &E::Id) -> Response<E>
where
  E: Entity,
  R: Repository<E> + ?Sized,
{
  tracing::debug!(op, %id, "lookup");
  settle(op, fetch_existing::<E, R>(repo, id).await, Status::Found, |_| Status::NotFound)
}

pub(crate) async fn save<E, R>(op: &'static str, repo: &R, entity: E) -> Response<E>
where
  E: Entity,
  R: Repository<E> + ?Sized,
{
  tracing::debug!(op, "saving");
  let response = settle(op, persist(repo, entity).await, Status::Created, |_| Status::PreconditionFailed);
  if let Some(id) = response.body().and_then(|e| e.id()) {
    tracing::info!(op, %id, "saved");
  }
  response
}

pub(crate) async fn update<E, R>(op: &'static str, repo: &R, id: &E::Id, incoming: E) -> Response<E>
where
  E: Entity,
  R: Repository<E> + ?Sized,
{
  tracing::debug!(op, %id, "updating");
  settle(op, replace(repo, id, incoming).await, Status::Accepted, |_| Status::NotModified)
}

pub(crate) async fn delete<E, R>(op: &'static str, repo: &R, id: &E::Id) -> Response<E::Id>
where
  E: Entity,
  R: Repository<E> + ?Sized,
{
  tracing::debug!(op, %id, "deleting");
  let result = confirm_and_delete::<E, R>(repo, id).await.map(|()| id.clone());
  settle(op, result, Status::Accepted, |_| Status::NotFound)
}
