//! Clasificación de resultados de los servicios.
//!
//! Toda operación de servicio termina en un [`Response`]: una [`Status`]
//! de un conjunto cerrado y, opcionalmente, un payload. Los fallos internos
//! ([`CoreError`]) se pliegan aquí y nunca llegan al llamador.

use serde::Serialize;
use std::fmt;

use crate::errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
  Found,
  Created,
  Accepted,
  NotFound,
  NoContent,
  PreconditionFailed,
  NotModified,
  BadRequest,
}

impl Status {
  /// Código HTTP con el que el transporte publica cada clasificación.
  pub fn http_code(self) -> u16 {
    match self {
      Status::Found => 302,
      Status::Created => 201,
      Status::Accepted => 202,
      Status::NotFound => 404,
      Status::NoContent => 204,
      Status::PreconditionFailed => 417,
      Status::NotModified => 304,
      Status::BadRequest => 400,
    }
  }

  pub fn is_success(self) -> bool {
    matches!(self, Status::Found | Status::Created | Status::Accepted)
  }
}

impl fmt::Display for Status {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      Status::Found => "found",
      Status::Created => "created",
      Status::Accepted => "accepted",
      Status::NotFound => "not found",
      Status::NoContent => "no content",
      Status::PreconditionFailed => "precondition failed",
      Status::NotModified => "not modified",
      Status::BadRequest => "bad request",
    };
    f.write_str(label)
  }
}

/// Par (clasificación, payload opcional).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response<T> {
  status: Status,
  body: Option<T>,
}

impl<T> Response<T> {
  pub fn with_body(status: Status, body: T) -> Self {
    Response { status, body: Some(body) }
  }

  pub fn empty(status: Status) -> Self {
    Response { status, body: None }
  }

  pub fn status(&self) -> Status {
    self.status
  }

  pub fn body(&self) -> Option<&T> {
    self.body.as_ref()
  }

  pub fn into_body(self) -> Option<T> {
    self.body
  }

  pub fn into_parts(self) -> (Status, Option<T>) {
    (self.status, self.body)
  }

  pub fn is_success(&self) -> bool {
    self.status.is_success()
  }

  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
    Response { status: self.status, body: self.body.map(f) }
  }

  /// Misma carga, otra clasificación.
  pub fn reclassify(self, status: Status) -> Self {
    Response { status, body: self.body }
  }
}

/// Convierte el resultado de un pipeline en su respuesta.
///
/// `Ok` se publica con `success`; cada `Err` pasa por `on_error`, que
/// decide la clasificación, y se registra porque el llamador no verá el
/// error original.
pub fn settle<T>(
  op: &'static str,
  result: Result<T, CoreError>,
  success: Status,
  on_error: impl FnOnce(&CoreError) -> Status,
) -> Response<T> {
  match result {
    Ok(body) => Response::with_body(success, body),
    Err(err) => {
      let status = on_error(&err);
      match err {
        CoreError::NotFound | CoreError::EmptyResult => {
          tracing::debug!(op, %status, "{err}");
        }
        CoreError::Persistence(_) | CoreError::Validation(_) => {
          tracing::warn!(op, %status, "folding fault into outcome: {err}");
        }
      }
      Response::empty(status)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ok_results_carry_payload_and_success_status() {
    let r = settle("test", Ok::<_, CoreError>(7), Status::Created, |_| Status::PreconditionFailed);
    assert_eq!(r.status(), Status::Created);
    assert_eq!(r.body(), Some(&7));
  }

  #[test]
  fn errors_are_classified_by_policy_without_payload() {
    let policy = |e: &CoreError| match e {
      CoreError::NotFound => Status::NotFound,
      _ => Status::BadRequest,
    };

    let missing = settle::<u8>("test", Err(CoreError::NotFound), Status::Accepted, policy);
    assert_eq!(missing, Response::empty(Status::NotFound));

    let fault = settle::<u8>("test", Err(CoreError::Persistence("disk".into())), Status::Accepted, policy);
    assert_eq!(fault.into_parts(), (Status::BadRequest, None));
  }

  #[test]
  fn reclassify_keeps_the_body() {
    let r = Response::with_body(Status::Created, "x").reclassify(Status::Accepted);
    assert_eq!(r.status(), Status::Accepted);
    assert_eq!(r.into_body(), Some("x"));
  }

  #[test]
  fn http_codes_are_one_to_one() {
    let all = [
      Status::Found,
      Status::Created,
      Status::Accepted,
      Status::NotFound,
      Status::NoContent,
      Status::PreconditionFailed,
      Status::NotModified,
      Status::BadRequest,
    ];
    let mut codes: Vec<u16> = all.iter().map(|s| s.http_code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), all.len());
  }
}
