#![allow(dead_code)]

use autowire_ioc::{Catalog, Constructible, Container, ContainerConfig, Factory, FnConstructible, Inspector, LoadError, Loader, Value};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// Call counters shared between a test and the collaborators it hands to a container.
#[derive(Clone, Default)]
pub struct Calls {
  inspect: Arc<AtomicUsize>,
  by_name: Arc<AtomicUsize>,
  by_path: Arc<AtomicUsize>,
  paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl Calls {
  pub fn inspect(&self) -> usize {
    self.inspect.load(Ordering::SeqCst)
  }
  pub fn by_name(&self) -> usize {
    self.by_name.load(Ordering::SeqCst)
  }
  pub fn by_path(&self) -> usize {
    self.by_path.load(Ordering::SeqCst)
  }
  pub fn loader(&self) -> usize {
    self.by_name() + self.by_path()
  }
  pub fn paths(&self) -> Vec<PathBuf> {
    self.paths.lock().unwrap().clone()
  }
}

pub struct CountingInspector(Calls);

impl Inspector for CountingInspector {
  fn inspect(&self, constructible: &dyn Constructible) -> Vec<String> {
    self.0.inspect.fetch_add(1, Ordering::SeqCst);
    constructible.dependencies()
  }
}

pub struct RecordingLoader {
  catalog: Catalog,
  calls: Calls,
}

impl Loader for RecordingLoader {
  fn resolve_by_name(&self, name: &str) -> Result<Factory, LoadError> {
    self.calls.by_name.fetch_add(1, Ordering::SeqCst);
    self.catalog.resolve_by_name(name)
  }

  fn resolve_by_path(&self, path: &Path) -> Result<Factory, LoadError> {
    self.calls.by_path.fetch_add(1, Ordering::SeqCst);
    self.calls.paths.lock().unwrap().push(path.to_path_buf());
    self.catalog.resolve_by_path(path)
  }
}

/// Builds a container whose inspector and loader report every call.
pub fn instrumented(config: ContainerConfig, catalog: Catalog) -> (Container, Calls) {
  let calls = Calls::default();
  let container = Container::with_parts(
    config,
    CountingInspector(calls.clone()),
    RecordingLoader {
      catalog,
      calls: calls.clone(),
    },
  );
  (container, calls)
}

/// A factory with no dependencies that builds a fresh `Marker` each time.
pub fn marker(label: &'static str) -> FnConstructible {
  FnConstructible::new(Vec::<String>::new(), move |_| Ok(Value::new(Marker(label))))
}

#[derive(Debug, PartialEq, Eq)]
pub struct Marker(pub &'static str);

/// A factory that records the positional arguments it was built with.
pub fn collector(dependencies: &[&str]) -> FnConstructible {
  FnConstructible::new(dependencies.iter().copied(), |args| {
    let mut args = args;
    let mut collected = Vec::new();
    while args.remaining() > 0 {
      collected.push(args.take_value()?);
    }
    Ok(Value::new(Collected(collected)))
  })
}

#[derive(Debug)]
pub struct Collected(pub Vec<Value>);
