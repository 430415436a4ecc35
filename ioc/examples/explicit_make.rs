use autowire_ioc::{constructible, Container, ContainerConfig, Value};
use std::sync::Arc;

struct Service {
  name: String,
}

fn main() {
  let config = ContainerConfig::new()
    .object("name", String::from("configured"))
    .class("Service", constructible!(["name"] => |name: String| Service { name: (*name).clone() }));
  let container = Container::new(config);

  // --- Automatic wiring ---
  let automatic = container.make_as::<Service>("Service").unwrap();
  println!("make:               {}", automatic.name);

  // --- Explicit positional arguments, no inspection ---
  let explicit = container
    .make_with("Service", vec![Value::new(String::from("explicit"))])
    .unwrap();
  println!("make_with:          {}", explicit.downcast::<Service>().unwrap().name);

  // --- A custom injector builds the value on its own ---
  let injected = container
    .make_with_injector("Service", vec![Value::new(String::from("a")), Value::new(String::from("b"))], |deps| {
      let name = deps
        .iter()
        .filter_map(|dep| dep.downcast::<String>())
        .map(|part: Arc<String>| (*part).clone())
        .collect::<Vec<_>>()
        .join("+");
      Ok(Value::new(Service { name }))
    })
    .unwrap();
  println!("make_with_injector: {}", injected.downcast::<Service>().unwrap().name);
}
