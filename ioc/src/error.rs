use crate::loader::LoadError;
use std::path::PathBuf;
use thiserror::Error;

/// Error type returned by constructibles and injectors for their own failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for the `autowire_ioc` library.
#[derive(Debug, Error)]
pub enum Error {
  /// `make` was asked for an identifier that has no registered factory.
  #[error("Component `{identifier}` is not registered as a factory")]
  UnregisteredFactory { identifier: String },

  /// Autoload exhausted both the bare-name and the application-path lookups.
  #[error("`{identifier}` could not be loaded from {}", .path.display())]
  ComponentNotFound {
    identifier: String,
    path: PathBuf,
    #[source]
    source: LoadError,
  },

  /// A constructible (or a custom injector) failed. Passed through as-is.
  #[error(transparent)]
  Construct(BoxError),

  #[error("Component `{identifier}` is not of type `{expected}`")]
  TypeMismatch {
    identifier: String,
    expected: &'static str,
  },

  #[error("Constructor argument {index} (`{expected}`) was not supplied")]
  MissingArgument { index: usize, expected: &'static str },

  #[error("Constructor argument {index} is not of type `{expected}`")]
  ArgumentType { index: usize, expected: &'static str },

  #[error("Failed to read settings file: {0}")]
  ConfigRead(#[from] std::io::Error),

  #[error("Failed to parse settings: {0}")]
  ConfigParse(String),
}

/// A specialized `Result` type for `autowire_ioc` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
