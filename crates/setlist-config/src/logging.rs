use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::{CONFIG_BACKEND, ConfigBackend, ConfigError};

/// Sección `[logging]` de `setlist.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
  /// Directivas de `EnvFilter` (p. ej. `"info,setlist_core=debug"`).
  #[serde(default = "default_filter")]
  pub filter: String,

  /// Colores ANSI en la salida.
  #[serde(default = "default_ansi")]
  pub ansi: bool,
}

fn default_filter() -> String {
  "info".to_string()
}

fn default_ansi() -> bool {
  true
}

impl Default for LoggingConfig {
  fn default() -> Self {
    LoggingConfig { filter: default_filter(), ansi: default_ansi() }
  }
}

impl LoggingConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("logging")?;
    CONFIG_BACKEND.save_section("logging", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("logging", self)
  }

  /// `RUST_LOG` manda sobre el filtro configurado.
  fn env_filter(&self) -> EnvFilter {
    EnvFilter::try_from_default_env()
      .or_else(|_| EnvFilter::try_new(&self.filter))
      .unwrap_or_else(|_| EnvFilter::new(default_filter()))
  }
}

/// Instala el subscriber global. Si ya había uno, no hace nada.
pub fn init_tracing(cfg: &LoggingConfig) {
  let _ = tracing_subscriber::registry()
    .with(cfg.env_filter())
    .with(tracing_subscriber::fmt::layer().with_ansi(cfg.ansi))
    .try_init();
}
