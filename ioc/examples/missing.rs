use autowire_ioc::{resolve, Container, ContainerConfig, Error};
use std::panic;

struct UnregisteredService;

fn main() {
  let container = Container::new(ContainerConfig::new().app_path("./app/"));

  // --- Using the panicking `resolve!` macro ---
  println!("Attempting to resolve a service that was never registered...");

  let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
    // This line will panic!
    let _service = resolve!(container, UnregisteredService, "UnregisteredService");
  }));

  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");

  // --- Using the fallible `get()` method ---
  println!("\nNow, attempting to resolve using the fallible `get()` method...");

  match container.get("UnregisteredService") {
    Ok(_) => panic!("Should not have found the service!"),
    Err(Error::ComponentNotFound { identifier, path, .. }) => {
      println!("`{}` is not loadable; last place looked: {}", identifier, path.display());
    }
    Err(other) => panic!("Unexpected error: {}", other),
  }

  // --- `make` never autoloads ---
  match container.make("UnregisteredService") {
    Err(err @ Error::UnregisteredFactory { .. }) => println!("make: {}", err),
    other => panic!("Unexpected result: {:?}", other),
  }
}
