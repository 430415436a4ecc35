//! Container configuration: the programmatic builder and its file-backed subset.

use crate::core::{Constructible, Factory, Value};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DEFAULT_APP_PATH: &str = ".";

/// Everything a [`Container`](crate::Container) is seeded with.
///
/// All fields are optional. Nothing is validated here; constructibles are only
/// inspected when something asks for them.
#[derive(Clone)]
pub struct ContainerConfig {
  pub app_path: PathBuf,
  pub aliases: HashMap<String, String>,
  pub classes: HashMap<String, Factory>,
  pub objects: HashMap<String, Value>,
}

impl Default for ContainerConfig {
  fn default() -> Self {
    Self {
      app_path: PathBuf::from(DEFAULT_APP_PATH),
      aliases: HashMap::new(),
      classes: HashMap::new(),
      objects: HashMap::new(),
    }
  }
}

impl ContainerConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// Base directory for conventional application paths.
  pub fn app_path(mut self, app_path: impl Into<PathBuf>) -> Self {
    self.app_path = app_path.into();
    self
  }

  /// Makes `alias` a synonym of `canonical`.
  pub fn alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
    self.aliases.insert(alias.into(), canonical.into());
    self
  }

  /// Pre-registers a factory.
  pub fn class<C: Constructible + 'static>(mut self, identifier: impl Into<String>, constructible: C) -> Self {
    self.classes.insert(identifier.into(), Arc::new(constructible));
    self
  }

  /// Pre-registers a ready-made instance.
  pub fn object<T: Any + Send + Sync>(mut self, identifier: impl Into<String>, object: T) -> Self {
    self.objects.insert(identifier.into(), Value::new(object));
    self
  }
}

impl fmt::Debug for ContainerConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ContainerConfig")
      .field("app_path", &self.app_path)
      .field("aliases", &self.aliases)
      .field("classes", &self.classes.keys().collect::<Vec<_>>())
      .field("objects", &self.objects)
      .finish()
  }
}

/// The serialisable part of a [`ContainerConfig`].
///
/// ```yaml
/// app_path: ./app/
/// aliases:
///   bt: BaseTest
/// ```
#[derive(Debug, Deserialize, PartialEq, Eq, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Settings {
  #[serde(default, alias = "appPath")]
  pub app_path: Option<PathBuf>,
  #[serde(default)]
  pub aliases: HashMap<String, String>,
}

impl Settings {
  pub fn from_yaml_str(source: &str) -> Result<Self> {
    serde_yaml::from_str(source).map_err(|e| Error::ConfigParse(e.to_string()))
  }

  pub fn from_json_str(source: &str) -> Result<Self> {
    serde_json::from_str(source).map_err(|e| Error::ConfigParse(e.to_string()))
  }

  /// Reads settings from a file: JSON for `.json`, YAML for anything else.
  pub fn from_file(path: &Path) -> Result<Self> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);

    let is_json = path
      .extension()
      .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
      serde_json::from_reader(reader).map_err(|e| Error::ConfigParse(e.to_string()))
    } else {
      serde_yaml::from_reader(reader).map_err(|e| Error::ConfigParse(e.to_string()))
    }
  }
}

impl From<Settings> for ContainerConfig {
  fn from(settings: Settings) -> Self {
    let defaults = ContainerConfig::default();
    ContainerConfig {
      app_path: settings.app_path.unwrap_or(defaults.app_path),
      aliases: settings.aliases,
      ..defaults
    }
  }
}
