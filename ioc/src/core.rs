//! Core data structures shared by the container and its collaborators.

use crate::error::{BoxError, Error, Result};
use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A shared, type-erased handle to a built component.
///
/// Cloning a `Value` never clones the component itself: every clone points at
/// the same allocation, which is what makes cached instances "the exact stored
/// value" on every lookup.
#[derive(Clone)]
pub struct Value {
  inner: Arc<dyn Any + Send + Sync>,
  type_name: &'static str,
}

impl Value {
  /// Moves `value` into a new shared allocation.
  pub fn new<T: Any + Send + Sync>(value: T) -> Self {
    Self::from_arc(Arc::new(value))
  }

  /// Wraps an already shared component without re-allocating it.
  pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
    Self {
      inner: value,
      type_name: type_name::<T>(),
    }
  }

  /// Returns a typed handle if the component is a `T`.
  pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
    Arc::clone(&self.inner).downcast::<T>().ok()
  }

  pub fn downcast_ref<T: Any + Send + Sync>(&self) -> Option<&T> {
    self.inner.downcast_ref::<T>()
  }

  pub fn is<T: Any + Send + Sync>(&self) -> bool {
    self.inner.is::<T>()
  }

  /// Name of the concrete type this value was created from.
  pub fn type_name(&self) -> &'static str {
    self.type_name
  }

  /// Whether both handles point at the same component.
  pub fn ptr_eq(a: &Value, b: &Value) -> bool {
    Arc::ptr_eq(&a.inner, &b.inner)
  }
}

impl fmt::Debug for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Value({})", self.type_name)
  }
}

/// Something that can produce a component from an ordered argument list.
///
/// This is the explicit replacement for constructor reflection: a constructible
/// declares the identifiers of its dependencies up front, and the container
/// resolves them in that order before calling [`Constructible::construct`].
pub trait Constructible: Send + Sync {
  /// Identifiers of the dependencies, in the order `construct` expects them.
  fn dependencies(&self) -> Vec<String>;

  /// Builds a new component from positional arguments.
  fn construct(&self, args: Vec<Value>) -> Result<Value, BoxError>;
}

/// A shared constructible, as stored in the factory registry.
pub type Factory = Arc<dyn Constructible>;

type BuildFn = dyn Fn(Args) -> Result<Value, BoxError> + Send + Sync;

/// A constructible made from a dependency list and a closure.
pub struct FnConstructible {
  dependencies: Vec<String>,
  build: Box<BuildFn>,
}

impl FnConstructible {
  pub fn new<I, S, F>(dependencies: I, build: F) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: Fn(Args) -> Result<Value, BoxError> + Send + Sync + 'static,
  {
    Self {
      dependencies: dependencies.into_iter().map(Into::into).collect(),
      build: Box::new(build),
    }
  }
}

impl Constructible for FnConstructible {
  fn dependencies(&self) -> Vec<String> {
    self.dependencies.clone()
  }

  fn construct(&self, args: Vec<Value>) -> Result<Value, BoxError> {
    (self.build)(Args::new(args))
  }
}

impl fmt::Debug for FnConstructible {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FnConstructible")
      .field("dependencies", &self.dependencies)
      .finish_non_exhaustive()
  }
}

/// A concrete type that knows how to build itself from named dependencies.
///
/// ```
/// use autowire_ioc::{Args, BoxError, Component};
///
/// struct Greeter {
///   greeting: std::sync::Arc<String>,
/// }
///
/// impl Component for Greeter {
///   const DEPENDENCIES: &'static [&'static str] = &["greeting"];
///
///   fn build(mut args: Args) -> Result<Self, BoxError> {
///     Ok(Greeter { greeting: args.take::<String>()? })
///   }
/// }
/// ```
pub trait Component: Any + Send + Sync + Sized {
  const DEPENDENCIES: &'static [&'static str];

  fn build(args: Args) -> Result<Self, BoxError>;
}

/// Adapts a [`Component`] type into a [`Constructible`].
pub struct ComponentFactory<T>(PhantomData<fn() -> T>);

impl<T: Component> ComponentFactory<T> {
  pub fn new() -> Self {
    Self(PhantomData)
  }
}

impl<T: Component> Default for ComponentFactory<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Component> Constructible for ComponentFactory<T> {
  fn dependencies(&self) -> Vec<String> {
    T::DEPENDENCIES.iter().map(|dep| (*dep).to_owned()).collect()
  }

  fn construct(&self, args: Vec<Value>) -> Result<Value, BoxError> {
    T::build(Args::new(args)).map(Value::new)
  }
}

/// Positional arguments handed to a constructible, consumed front to back.
#[derive(Debug)]
pub struct Args {
  values: std::vec::IntoIter<Value>,
  index: usize,
}

impl Args {
  pub fn new(values: Vec<Value>) -> Self {
    Self {
      values: values.into_iter(),
      index: 0,
    }
  }

  /// Number of arguments not yet taken.
  pub fn remaining(&self) -> usize {
    self.values.len()
  }

  /// Takes the next argument without checking its type.
  pub fn take_value(&mut self) -> Result<Value> {
    let index = self.index;
    let value = self.values.next().ok_or(Error::MissingArgument {
      index,
      expected: "Value",
    })?;
    self.index += 1;
    Ok(value)
  }

  /// Takes the next argument as a `T`.
  pub fn take<T: Any + Send + Sync>(&mut self) -> Result<Arc<T>> {
    let index = self.index;
    let expected = type_name::<T>();
    let value = self
      .values
      .next()
      .ok_or(Error::MissingArgument { index, expected })?;
    self.index += 1;
    value
      .downcast::<T>()
      .ok_or(Error::ArgumentType { index, expected })
  }
}

/// What an identifier is bound to: a factory to build from, or a finished value.
#[derive(Clone)]
pub enum Binding {
  Factory(Factory),
  Instance(Value),
}

impl Binding {
  pub fn factory<C: Constructible + 'static>(constructible: C) -> Self {
    Binding::Factory(Arc::new(constructible))
  }

  pub fn component<T: Component>() -> Self {
    Binding::factory(ComponentFactory::<T>::new())
  }

  pub fn instance<T: Any + Send + Sync>(value: T) -> Self {
    Binding::Instance(Value::new(value))
  }
}

impl From<Factory> for Binding {
  fn from(factory: Factory) -> Self {
    Binding::Factory(factory)
  }
}

impl From<FnConstructible> for Binding {
  fn from(constructible: FnConstructible) -> Self {
    Binding::factory(constructible)
  }
}

impl From<Value> for Binding {
  fn from(value: Value) -> Self {
    Binding::Instance(value)
  }
}

impl fmt::Debug for Binding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Binding::Factory(factory) => f
        .debug_tuple("Factory")
        .field(&factory.dependencies())
        .finish(),
      Binding::Instance(value) => f.debug_tuple("Instance").field(value).finish(),
    }
  }
}
