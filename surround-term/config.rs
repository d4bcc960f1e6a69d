//! `config.toml` for the command-line host.
//!
//! ```toml
//! [log]
//! level = "warn"
//! ```
//!
//! Every key is optional. The file lives in `$SURROUND_CONFIG_DIR`, or in
//! `surround/` under the platform config directory.

use std::path::{
  Path,
  PathBuf,
};

use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};
use eyre::{
  Result,
  WrapErr,
};
use serde::Deserialize;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
  pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct LogConfig {
  /// Filter used when `RUST_LOG` is unset, in `EnvFilter` syntax.
  pub level: String,
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      level: "warn".to_string(),
    }
  }
}

pub fn config_dir() -> Option<PathBuf> {
  if let Some(dir) = std::env::var_os("SURROUND_CONFIG_DIR") {
    return Some(PathBuf::from(dir));
  }
  let strategy = choose_base_strategy().ok()?;
  let mut path = strategy.config_dir();
  path.push("surround");
  Some(path)
}

pub fn default_config_file() -> Option<PathBuf> {
  config_dir().map(|dir| dir.join("config.toml"))
}

impl Config {
  /// Loads `explicit` if given, otherwise the default file when it exists.
  ///
  /// # Errors
  ///
  /// If `explicit` cannot be read, or if the file that was read is not a
  /// valid config.
  pub fn load(explicit: Option<&Path>) -> Result<Self> {
    let path = match explicit {
      Some(path) => path.to_path_buf(),
      None => {
        match default_config_file() {
          Some(path) if path.is_file() => path,
          _ => return Ok(Self::default()),
        }
      },
    };

    let text = std::fs::read_to_string(&path)
      .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
    Self::from_toml(&text).wrap_err_with(|| format!("invalid config file {}", path.display()))
  }

  pub fn from_toml(text: &str) -> Result<Self> {
    Ok(toml::from_str(text)?)
  }
}

#[cfg(test)]
mod test {
  use std::io::Write;

  use super::*;

  #[test]
  fn empty_file_is_default() {
    assert_eq!(Config::from_toml("").unwrap(), Config::default());
  }

  #[test]
  fn empty_table_keeps_default_level() {
    let config = Config::from_toml("[log]\n").unwrap();
    assert_eq!(config.log, LogConfig::default());
    assert_eq!(config.log.level, "warn");
  }

  #[test]
  fn unknown_keys_are_rejected() {
    assert!(Config::from_toml("[log]\nlevle = \"debug\"\n").is_err());
    assert!(Config::from_toml("[pairs]\n").is_err());
    assert!(Config::from_toml("[messages]\nhistory-limit = 4\n").is_err());
  }

  #[test]
  fn load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[log]\nlevel = \"surround_lib=debug\"").unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.log.level, "surround_lib=debug");
  }

  #[test]
  fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(err.to_string().starts_with("failed to read config file"));
  }
}
