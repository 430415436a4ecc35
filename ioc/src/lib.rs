//! # Autowire IoC
//!
//! A name-keyed Inversion of Control (IoC) container that builds components from
//! their declared dependencies and autoloads factories by naming convention.
//!
//! ## Core Concepts
//!
//! - **Container**: holds an alias table, a factory registry and an instance cache.
//! - **Constructible**: a factory that declares the identifiers of its dependencies
//!   and builds a [`Value`] from them, in order.
//! - **Resolution**: [`Container::get`] returns a cached instance if there is one,
//!   otherwise autoloads the factory, resolves its dependencies through `get` and
//!   builds a fresh value. Built values are never cached.
//! - **Autoload**: identifiers are rewritten through the alias table (one hop), then
//!   looked up by bare name in the [`Loader`], then at a conventional application
//!   path: `BaseTest` under `./app/` is looked for at `./app/Base/Test`.
//! - **Explicit wiring**: [`Container::make_with`] and
//!   [`Container::make_with_injector`] bypass dependency inspection for a
//!   registered factory.
//!
//! ## Quick Start
//!
//! ```
//! use autowire_ioc::{constructible, Catalog, Container, ContainerConfig};
//! use std::sync::Arc;
//!
//! struct Database {
//!   url: Arc<String>,
//! }
//!
//! struct UserRepository {
//!   db: Arc<Database>,
//! }
//!
//! // Components the application ships, keyed by their conventional path.
//! let catalog = Catalog::new()
//!   .with_path("app/Database", constructible!(["databaseUrl"] => |url: String| Database { url }))
//!   .with_path("app/User/Repository", constructible!(["Database"] => |db: Database| UserRepository { db }));
//!
//! let config = ContainerConfig::new()
//!   .app_path("./app/")
//!   .alias("users", "UserRepository")
//!   .object("databaseUrl", String::from("postgres://localhost/app"));
//!
//! let container = Container::with_loader(config, catalog);
//!
//! let users = container.get_as::<UserRepository>("users").unwrap();
//! assert_eq!(*users.db.url, "postgres://localhost/app");
//!
//! // The factory was registered under its canonical name by the autoload.
//! assert!(container.contains_factory("UserRepository"));
//! ```

mod config;
mod container;
mod convention;
mod core;
mod error;
mod inspect;
mod loader;
mod macros;

pub use crate::config::{ContainerConfig, Settings};
pub use crate::container::{Container, Injector};
pub use crate::convention::{app_relative_path, resolve_app_path};
pub use crate::core::{Args, Binding, Component, ComponentFactory, Constructible, Factory, FnConstructible, Value};
pub use crate::error::{BoxError, Error, Result};
pub use crate::inspect::{DeclaredDependencies, Inspector};
pub use crate::loader::{Catalog, LoadError, Loader};
