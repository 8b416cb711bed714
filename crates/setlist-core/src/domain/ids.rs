use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Declara un identificador opaco basado en `String`.
///
/// Los identificadores vienen del exterior (rutas, documentos ya guardados),
/// así que no se restringen a UUID; sólo los generados aquí lo son.
macro_rules! string_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct $name(String);

    impl $name {
      /// Genera un nuevo identificador único (UUID v4 en texto).
      pub fn new() -> Self {
        $name(Uuid::new_v4().to_string())
      }

      pub fn as_str(&self) -> &str {
        &self.0
      }

      pub fn into_string(self) -> String {
        self.0
      }
    }

    impl Default for $name {
      fn default() -> Self {
        Self::new()
      }
    }

    impl From<String> for $name {
      fn from(s: String) -> Self {
        $name(s)
      }
    }

    impl From<&str> for $name {
      fn from(s: &str) -> Self {
        $name(s.to_owned())
      }
    }

    impl From<$name> for String {
      fn from(id: $name) -> Self {
        id.0
      }
    }

    impl AsRef<str> for $name {
      fn as_ref(&self) -> &str {
        &self.0
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }
  };
}

string_id!(
  /// Identificador de una playlist. Se asigna al crearla y no cambia después.
  PlaylistId
);

string_id!(
  /// Identificador canónico de una canción en el catálogo.
  SongId
);

string_id!(
  /// Identificador del álbum al que pertenece una canción.
  AlbumId
);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn generated_ids_are_unique_uuids() {
    let a = PlaylistId::new();
    let b = PlaylistId::new();

    assert_ne!(a, b);
    assert!(Uuid::parse_str(a.as_str()).is_ok());
  }

  #[test]
  fn external_ids_are_kept_verbatim() {
    let id = SongId::from("23456");
    assert_eq!(id.to_string(), "23456");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"23456\"");
  }
}
