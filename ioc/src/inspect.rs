//! The signature inspector: lists the dependencies a constructible declares.

use crate::core::Constructible;

/// Produces the ordered dependency identifiers of a constructible.
///
/// The container asks its inspector every time it has to build something, so
/// an inspector may rename, filter or reorder what a constructible declares.
pub trait Inspector: Send + Sync {
  fn inspect(&self, constructible: &dyn Constructible) -> Vec<String>;
}

/// The stock inspector: trusts [`Constructible::dependencies`] as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclaredDependencies;

impl Inspector for DeclaredDependencies {
  fn inspect(&self, constructible: &dyn Constructible) -> Vec<String> {
    constructible.dependencies()
  }
}
