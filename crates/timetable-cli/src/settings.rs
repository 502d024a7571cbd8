//! Layered configuration: optional TOML file, then `TIMETABLE_*` environment
//! variables. Command-line flags are applied on top by `main`.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;
use timetable_store_sqlite::DEFAULT_KEY;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
  /// SQLite file holding the schedule. A leading `~/` is expanded.
  #[serde(default = "default_store_path")]
  pub store_path:  PathBuf,
  /// Key the lesson collection is stored under.
  #[serde(default = "default_storage_key")]
  pub storage_key: String,
  /// Start the week view in dark mode.
  #[serde(default)]
  pub dark_mode:   bool,
}

fn default_store_path() -> PathBuf { PathBuf::from("~/.local/share/timetable/timetable.db") }

fn default_storage_key() -> String { DEFAULT_KEY.to_owned() }

impl Default for Settings {
  fn default() -> Self {
    Self {
      store_path:  default_store_path(),
      storage_key: default_storage_key(),
      dark_mode:   false,
    }
  }
}

impl Settings {
  /// Read `path` (if it exists) and the environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("TIMETABLE"))
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?
      .try_deserialize()
      .context("failed to deserialise settings")
  }

  /// `store_path` with a leading `~` expanded to the user's home directory.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
