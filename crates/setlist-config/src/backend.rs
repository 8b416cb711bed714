use crate::io::atomic_write_str;
use crate::paths::{ConfigError, SetlistPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;

/// toml_edit para escribir preservando comentarios
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: SetlistPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: SetlistPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &SetlistPaths {
    &self.paths
  }

  /// Como [`ConfigBackend::load_section`], pero sin archivo o sin sección
  /// devuelve `T::default()`.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        return Ok(T::default());
      }
      Err(e) => return Err(e.into()),
    };

    let toml_val: toml::Value = toml::from_str(&content)?;

    let Some(table) = toml_val.get(section) else {
      return Ok(T::default());
    };

    decode_section(section, table)
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, table: &toml::Value) -> Result<T, ConfigError> {
  table
    .clone()
    .try_into()
    .map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = fs::read_to_string(&path)?;
    let toml_val: toml::Value = toml::from_str(&content)?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode_section(section, table)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Documento actual, o uno vacío si todavía no existe.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) La sección sale de serde como "clave = valor" sin cabecera.
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_item = Item::Table(
      section_str
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
        .into_table(),
    );

    // 3) Reemplazar sólo esa sección; el resto del documento queda intacto.
    doc[section] = section_item;

    atomic_write_str(&path, &doc.to_string())?;
    tracing::debug!(section, path = %path.display(), "config section saved");

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Sample {
    name: String,
    size: u32,
  }

  fn backend() -> (tempfile::TempDir, TomlConfigBackend) {
    let tmp = tempdir().unwrap();
    let paths = SetlistPaths::at(tmp.path()).unwrap();
    (tmp, TomlConfigBackend::new(paths))
  }

  #[test]
  fn missing_file_yields_default() {
    let (_tmp, backend) = backend();

    let loaded: Sample = backend.load_section_with_default("sample").unwrap();
    assert_eq!(loaded, Sample::default());
    assert!(backend.load_section::<Sample>("sample").is_err());
  }

  #[test]
  fn save_then_load_section() {
    let (_tmp, backend) = backend();
    let value = Sample { name: "rock".into(), size: 4 };

    backend.save_section("sample", &value).unwrap();

    assert_eq!(backend.load_section::<Sample>("sample").unwrap(), value);
  }

  #[test]
  fn save_preserves_other_sections_and_comments() {
    let (_tmp, backend) = backend();
    let file = backend.paths().config_file();
    fs::write(&file, "# keep me\n[other]\nflag = true\n").unwrap();

    backend.save_section("sample", &Sample { name: "jazz".into(), size: 1 }).unwrap();

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("# keep me"));
    assert!(content.contains("flag = true"));
    assert!(content.contains("[sample]"));
  }
}
