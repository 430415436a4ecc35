//! The loader: turns a bare name or an application path into a constructible.

use crate::core::{Constructible, Factory};
use std::collections::HashMap;
use std::fmt;
use std::path::{Component as PathComponent, Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Why a loader could not produce a constructible.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
  #[error("no component is known under the name `{0}`")]
  UnknownName(String),

  #[error("no component is provided at {}", .0.display())]
  UnresolvablePath(PathBuf),
}

/// Resolves constructibles that are not yet in the container's registry.
///
/// The container tries [`Loader::resolve_by_name`] first and falls back to
/// [`Loader::resolve_by_path`] with a path derived from the identifier.
pub trait Loader: Send + Sync {
  /// Library-style lookup of a bare name.
  fn resolve_by_name(&self, name: &str) -> Result<Factory, LoadError>;

  /// Lookup of an application component by its conventional path.
  fn resolve_by_path(&self, path: &Path) -> Result<Factory, LoadError>;
}

/// A loader backed by two lookup tables filled at startup.
///
/// Paths are compared lexically after dropping `.` components, so
/// `./app/Base/Test` and `app/Base/Test` name the same entry.
#[derive(Default, Clone)]
pub struct Catalog {
  names: HashMap<String, Factory>,
  paths: HashMap<PathBuf, Factory>,
}

impl Catalog {
  pub fn new() -> Self {
    Self::default()
  }

  /// Makes `constructible` loadable by its bare `name`.
  pub fn with_name<C: Constructible + 'static>(mut self, name: impl Into<String>, constructible: C) -> Self {
    self.insert_name(name, Arc::new(constructible));
    self
  }

  /// Makes `constructible` loadable from the application `path`.
  pub fn with_path<C: Constructible + 'static>(mut self, path: impl AsRef<Path>, constructible: C) -> Self {
    self.insert_path(path, Arc::new(constructible));
    self
  }

  pub fn insert_name(&mut self, name: impl Into<String>, factory: Factory) -> &mut Self {
    self.names.insert(name.into(), factory);
    self
  }

  pub fn insert_path(&mut self, path: impl AsRef<Path>, factory: Factory) -> &mut Self {
    self.paths.insert(normalize(path.as_ref()), factory);
    self
  }

  pub fn len(&self) -> usize {
    self.names.len() + self.paths.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Loader for Catalog {
  fn resolve_by_name(&self, name: &str) -> Result<Factory, LoadError> {
    self
      .names
      .get(name)
      .cloned()
      .ok_or_else(|| LoadError::UnknownName(name.to_owned()))
  }

  fn resolve_by_path(&self, path: &Path) -> Result<Factory, LoadError> {
    self
      .paths
      .get(&normalize(path))
      .cloned()
      .ok_or_else(|| LoadError::UnresolvablePath(path.to_path_buf()))
  }
}

impl fmt::Debug for Catalog {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Catalog")
      .field("names", &self.names.keys().collect::<Vec<_>>())
      .field("paths", &self.paths.keys().collect::<Vec<_>>())
      .finish()
  }
}

fn normalize(path: &Path) -> PathBuf {
  path
    .components()
    .filter(|component| !matches!(component, PathComponent::CurDir))
    .collect()
}
