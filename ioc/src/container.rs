//! The main `Container` struct and its associated methods.

use crate::config::ContainerConfig;
use crate::convention;
use crate::core::{Binding, Constructible, Factory, Value};
use crate::error::{BoxError, Error, Result};
use crate::inspect::{DeclaredDependencies, Inspector};
use crate::loader::{Catalog, Loader};
use dashmap::DashMap;
use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};

/// A custom injector for [`Container::make_with_injector`].
pub type Injector<'a> = Box<dyn FnOnce(Vec<Value>) -> Result<Value, BoxError> + 'a>;

/// The Inversion of Control (IoC) container.
///
/// Components are looked up by identifier. Ready-made instances are returned
/// as stored; everything else is built from a factory, which is itself either
/// registered up front or autoloaded on first use. The container is `Send +
/// Sync`, and no internal lock is held while a component is being built.
pub struct Container {
  app_path: PathBuf,
  aliases: HashMap<String, String>,
  classes: DashMap<String, Factory>,
  objects: DashMap<String, Value>,
  inspector: Box<dyn Inspector>,
  loader: Box<dyn Loader>,
}

impl Container {
  /// Creates a container with the stock inspector and an empty [`Catalog`].
  pub fn new(config: ContainerConfig) -> Self {
    Self::with_parts(config, DeclaredDependencies, Catalog::new())
  }

  pub fn with_loader<L: Loader + 'static>(config: ContainerConfig, loader: L) -> Self {
    Self::with_parts(config, DeclaredDependencies, loader)
  }

  pub fn with_parts<I, L>(config: ContainerConfig, inspector: I, loader: L) -> Self
  where
    I: Inspector + 'static,
    L: Loader + 'static,
  {
    let ContainerConfig {
      app_path,
      aliases,
      classes,
      objects,
    } = config;

    Self {
      app_path,
      aliases,
      classes: classes.into_iter().collect(),
      objects: objects.into_iter().collect(),
      inspector: Box::new(inspector),
      loader: Box::new(loader),
    }
  }

  pub fn app_path(&self) -> &Path {
    &self.app_path
  }

  // --- PRIVATE HELPERS ---

  /// Finds the factory for `identifier`, loading and registering it if needed.
  fn autoload(&self, identifier: &str) -> Result<Factory> {
    let name = self.canonical_name(identifier);
    if name != identifier {
      trace!(alias = %identifier, identifier = %name, "Following alias");
    }

    // Clone out of the map so no shard lock outlives this statement.
    if let Some(factory) = self.classes.get(name).map(|entry| Arc::clone(entry.value())) {
      return Ok(factory);
    }

    let loaded = match self.loader.resolve_by_name(name) {
      Ok(factory) => {
        debug!(identifier = %name, "Loaded component by name");
        factory
      }
      Err(err) => {
        trace!(identifier = %name, error = %err, "Name lookup failed, trying application path");
        self.load_app_component(name)?
      }
    };

    // A concurrent autoload may have won the race; keep whichever landed first.
    let factory = Arc::clone(self.classes.entry(name.to_owned()).or_insert(loaded).value());
    Ok(factory)
  }

  fn load_app_component(&self, name: &str) -> Result<Factory> {
    let path = convention::resolve_app_path(&self.app_path, name);

    match self.loader.resolve_by_path(&path) {
      Ok(factory) => {
        debug!(identifier = %name, path = %path.display(), "Loaded application component");
        Ok(factory)
      }
      Err(source) => {
        debug!(identifier = %name, path = %path.display(), "Component not found");
        Err(Error::ComponentNotFound {
          identifier: name.to_owned(),
          path,
          source,
        })
      }
    }
  }

  /// Resolves the declared dependencies of `factory` and builds a new value.
  fn build(&self, identifier: &str, factory: &dyn Constructible) -> Result<Value> {
    let dependencies = self.inspector.inspect(factory);
    trace!(identifier = %identifier, ?dependencies, "Injecting dependencies");

    let args = dependencies
      .iter()
      .map(|dependency| self.get(dependency))
      .collect::<Result<Vec<_>>>()?;

    Self::inject(factory, args)
  }

  /// The default injector: positional construction.
  fn inject(factory: &dyn Constructible, args: Vec<Value>) -> Result<Value> {
    factory.construct(args).map_err(Error::Construct)
  }

  fn registered_factory(&self, identifier: &str) -> Result<Factory> {
    self
      .classes
      .get(identifier)
      .map(|entry| Arc::clone(entry.value()))
      .ok_or_else(|| Error::UnregisteredFactory {
        identifier: identifier.to_owned(),
      })
  }

  fn make_internal(&self, identifier: &str, dependencies: Vec<Value>, injector: Option<Injector<'_>>) -> Result<Value> {
    let factory = self.registered_factory(identifier)?;

    if dependencies.is_empty() {
      return self.build(identifier, factory.as_ref());
    }

    match injector {
      Some(injector) => {
        trace!(identifier = %identifier, count = dependencies.len(), "Using custom injector");
        injector(dependencies).map_err(Error::Construct)
      }
      None => Self::inject(factory.as_ref(), dependencies),
    }
  }

  fn downcast<T: Any + Send + Sync>(identifier: &str, value: Value) -> Result<Arc<T>> {
    value.downcast::<T>().ok_or_else(|| Error::TypeMismatch {
      identifier: identifier.to_owned(),
      expected: type_name::<T>(),
    })
  }

  // --- PUBLIC API ---

  // --- Resolution ---

  /// Returns the component for `identifier`, building it if it is not cached.
  ///
  /// Cached instances are returned as stored. Otherwise the factory is
  /// autoloaded, its dependencies are resolved through `get` in declaration
  /// order, and a new value is built. Built values are never cached.
  pub fn get(&self, identifier: &str) -> Result<Value> {
    if let Some(object) = self.objects.get(identifier).map(|entry| entry.value().clone()) {
      trace!(identifier = %identifier, "Returning cached instance");
      return Ok(object);
    }

    let factory = self.autoload(identifier)?;
    self.build(identifier, factory.as_ref())
  }

  /// Typed variant of [`Container::get`].
  pub fn get_as<T: Any + Send + Sync>(&self, identifier: &str) -> Result<Arc<T>> {
    let value = self.get(identifier)?;
    Self::downcast(identifier, value)
  }

  // --- Factory Invocation ---

  /// Builds a registered factory, resolving its declared dependencies.
  ///
  /// Unlike [`Container::get`], this never autoloads and ignores aliases.
  pub fn make(&self, identifier: &str) -> Result<Value> {
    self.make_internal(identifier, Vec::new(), None)
  }

  /// Builds a registered factory from explicit arguments.
  ///
  /// A non-empty `dependencies` list is passed straight to the constructible
  /// and the inspector is not consulted. An empty list behaves like `make`.
  pub fn make_with(&self, identifier: &str, dependencies: Vec<Value>) -> Result<Value> {
    self.make_internal(identifier, dependencies, None)
  }

  /// Builds a value for a registered factory with a custom injector.
  ///
  /// With a non-empty `dependencies` list the injector alone produces the
  /// result. With an empty list the injector is unused and this behaves like
  /// `make`.
  pub fn make_with_injector<F>(&self, identifier: &str, dependencies: Vec<Value>, injector: F) -> Result<Value>
  where
    F: FnOnce(Vec<Value>) -> Result<Value, BoxError>,
  {
    self.make_internal(identifier, dependencies, Some(Box::new(injector)))
  }

  /// Typed variant of [`Container::make`].
  pub fn make_as<T: Any + Send + Sync>(&self, identifier: &str) -> Result<Arc<T>> {
    let value = self.make(identifier)?;
    Self::downcast(identifier, value)
  }

  // --- Registration ---

  /// Binds `identifier` to a factory or a ready-made instance, replacing any
  /// previous binding of the same kind.
  pub fn register(&self, identifier: impl Into<String>, binding: impl Into<Binding>) -> &Self {
    let identifier = identifier.into();
    match binding.into() {
      Binding::Factory(factory) => {
        debug!(identifier = %identifier, "Registered factory");
        self.classes.insert(identifier, factory);
      }
      Binding::Instance(value) => {
        debug!(identifier = %identifier, type_name = value.type_name(), "Registered instance");
        self.objects.insert(identifier, value);
      }
    }
    self
  }

  pub fn register_factory<C: Constructible + 'static>(&self, identifier: impl Into<String>, constructible: C) -> &Self {
    self.register(identifier, Binding::factory(constructible))
  }

  pub fn register_instance<T: Any + Send + Sync>(&self, identifier: impl Into<String>, instance: T) -> &Self {
    self.register(identifier, Binding::instance(instance))
  }

  // --- Introspection ---

  /// Rewrites `identifier` through the alias table. Aliases are not chained.
  pub fn canonical_name<'a>(&'a self, identifier: &'a str) -> &'a str {
    self.aliases.get(identifier).map_or(identifier, String::as_str)
  }

  pub fn contains_factory(&self, identifier: &str) -> bool {
    self.classes.contains_key(identifier)
  }

  pub fn contains_instance(&self, identifier: &str) -> bool {
    self.objects.contains_key(identifier)
  }
}

impl Default for Container {
  fn default() -> Self {
    Self::new(ContainerConfig::default())
  }
}

impl fmt::Debug for Container {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Container")
      .field("app_path", &self.app_path)
      .field("aliases", &self.aliases)
      .field("classes", &self.classes.len())
      .field("objects", &self.objects.len())
      .finish_non_exhaustive()
  }
}
