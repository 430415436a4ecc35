use autowire_ioc::{constructible, resolve, Args, BoxError, Catalog, Component, Container, ContainerConfig, Settings};
use std::sync::Arc;

// --- Application components ---

struct Logger {
  prefix: String,
}

impl Logger {
  fn log(&self, message: &str) {
    println!("{} {}", self.prefix, message);
  }
}

struct BaseTest {
  logger: Arc<Logger>,
}

struct BaseCheck {
  test: Arc<BaseTest>,
  logger: Arc<Logger>,
}

impl Component for BaseCheck {
  const DEPENDENCIES: &'static [&'static str] = &["bt", "logger"];

  fn build(mut args: Args) -> Result<Self, BoxError> {
    Ok(BaseCheck {
      test: args.take::<BaseTest>()?,
      logger: args.take::<Logger>()?,
    })
  }
}

fn main() {
  // Aliases and the application directory usually come from a settings file.
  let settings = Settings::from_yaml_str("app_path: ./app/\naliases:\n  bt: BaseTest\n").expect("valid settings");

  // Components the application ships, registered at their conventional paths.
  // `BaseTest` is split at the capital `T`, so it lives at `./app/Base/Test`.
  let catalog = Catalog::new()
    .with_path("app/Base/Test", constructible!(["logger"] => |logger: Logger| BaseTest { logger }))
    .with_path("app/Base/Check", autowire_ioc::ComponentFactory::<BaseCheck>::new());

  let container = Container::with_loader(ContainerConfig::from(settings), catalog);
  container.register_instance(
    "logger",
    Logger {
      prefix: "[autoload]".to_string(),
    },
  );

  let check = resolve!(container, BaseCheck, "BaseCheck");
  check.logger.log("BaseCheck built");
  check.test.logger.log("BaseTest built through its alias");

  assert!(Arc::ptr_eq(&check.logger, &check.test.logger));
  assert!(container.contains_factory("BaseTest"));
  assert!(container.contains_factory("BaseCheck"));
  println!("{:?}", container);
}
