// crates/setlist-core/src/errors.rs
use thiserror::Error;

use crate::ports::StoreError;

/// Fallos internos de los pipelines del núcleo.
///
/// Nunca salen de los servicios: el mapper de [`crate::outcome`] los
/// convierte en un [`crate::outcome::Status`] en el borde de cada operación.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
  /// El registro pedido no existe.
  #[error("not found")]
  NotFound,

  /// Una consulta de colección no devolvió nada.
  #[error("empty result")]
  EmptyResult,

  /// El store falló o devolvió una respuesta vacía donde se esperaba un registro.
  #[error("persistence fault: {0}")]
  Persistence(String),

  /// Un colaborador (p. ej. la búsqueda de canciones) rechazó la operación.
  #[error("validation gap: {0}")]
  Validation(String),
}

impl From<StoreError> for CoreError {
  fn from(e: StoreError) -> Self {
    CoreError::Persistence(e.to_string())
  }
}
