//! Public macros for typed resolution and for declaring constructibles.

/// Resolves a typed component from a container, returning `None` on failure.
///
/// Any resolution error (unknown component, failed construction, wrong type)
/// is discarded. Use [`Container::get_as`](crate::Container::get_as) to keep it.
///
/// # Examples
///
/// ```
/// use autowire_ioc::{maybe_resolve, Container};
///
/// let container = Container::default();
/// container.register_instance("port", 8080u16);
///
/// assert_eq!(maybe_resolve!(container, u16, "port").as_deref(), Some(&8080));
/// assert!(maybe_resolve!(container, String, "port").is_none());
/// ```
#[macro_export]
macro_rules! maybe_resolve {
  // Arm for a trait object stored as `Arc<dyn Trait>`: maybe_resolve!(c, trait MyTrait, "id")
  ($container:expr, trait $trait_ident:ident, $identifier:expr) => {
    $container
      .get_as::<::std::sync::Arc<dyn $trait_ident>>($identifier)
      .ok()
      .map(|service| ::std::sync::Arc::clone(&*service))
  };

  // Arm for a concrete type: maybe_resolve!(c, MyService, "id")
  ($container:expr, $type:ty, $identifier:expr) => {
    $container.get_as::<$type>($identifier).ok()
  };
}

/// Resolves a typed component from a container.
///
/// # Panics
///
/// Panics with the underlying error if the component cannot be resolved or is
/// not of the requested type.
///
/// # Examples
///
/// ```
/// use autowire_ioc::{resolve, Container, ContainerConfig};
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync { fn greet(&self) -> String; }
/// struct EnglishGreeter;
/// impl Greeter for EnglishGreeter { fn greet(&self) -> String { "Hello!".to_string() } }
///
/// let container = Container::new(ContainerConfig::new().object("name", String::from("world")));
/// container.register_instance("greeter", Arc::new(EnglishGreeter) as Arc<dyn Greeter>);
///
/// assert_eq!(*resolve!(container, String, "name"), "world");
/// assert_eq!(resolve!(container, trait Greeter, "greeter").greet(), "Hello!");
/// ```
#[macro_export]
macro_rules! resolve {
  ($container:expr, trait $trait_ident:ident, $identifier:expr) => {
    match $container.get_as::<::std::sync::Arc<dyn $trait_ident>>($identifier) {
      Ok(service) => ::std::sync::Arc::clone(&*service),
      Err(err) => panic!(
        "Failed to resolve required trait service '{}': {}",
        $identifier, err
      ),
    }
  };

  ($container:expr, $type:ty, $identifier:expr) => {
    match $container.get_as::<$type>($identifier) {
      Ok(service) => service,
      Err(err) => panic!(
        "Failed to resolve required service '{}': {}",
        $identifier, err
      ),
    }
  };
}

/// Declares a [`FnConstructible`](crate::FnConstructible) from a dependency
/// list and a closure over the resolved dependencies.
///
/// Each closure parameter receives an `Arc` of the written type, taken from
/// the argument list in the same order as the identifiers.
///
/// ```
/// use autowire_ioc::{constructible, Container};
/// use std::sync::Arc;
///
/// struct Mailer {
///   host: Arc<String>,
///   port: Arc<u16>,
/// }
///
/// let container = Container::default();
/// container
///   .register_instance("host", String::from("smtp.local"))
///   .register_instance("port", 25u16)
///   .register("mailer", constructible!(["host", "port"] => |host: String, port: u16| Mailer { host, port }));
///
/// let mailer = container.get_as::<Mailer>("mailer").unwrap();
/// assert_eq!(*mailer.host, "smtp.local");
/// assert_eq!(*mailer.port, 25);
/// ```
#[macro_export]
macro_rules! constructible {
  // `||` is a single token, so closures without parameters need their own arm.
  ([$($dependency:expr),* $(,)?] => || $body:expr) => {
    $crate::constructible!([$($dependency),*] => | | $body)
  };

  ([$($dependency:expr),* $(,)?] => |$($arg:ident : $type:ty),* $(,)?| $body:expr) => {{
    let dependencies: &[&str] = &[$($dependency),*];
    $crate::FnConstructible::new(
      dependencies.iter().copied(),
      move |args: $crate::Args| -> ::std::result::Result<$crate::Value, $crate::BoxError> {
        #[allow(unused_mut, unused_variables)]
        let mut args = args;
        $(let $arg: ::std::sync::Arc<$type> = args.take::<$type>()?;)*
        Ok($crate::Value::new($body))
      },
    )
  }};
}
