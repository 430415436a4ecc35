//! Naming convention that maps identifiers onto application paths.

use std::path::{Path, PathBuf};

/// Splits a camel-case identifier into path segments.
///
/// A separator is inserted after every ASCII letter that is directly followed
/// by an ASCII uppercase letter: `BaseTest` becomes `Base/Test`, `HTTPServer`
/// becomes `H/T/T/P/Server`. Everything else is kept verbatim.
pub fn app_relative_path(identifier: &str) -> PathBuf {
  let mut segments = Vec::new();
  let mut current = String::new();
  let mut chars = identifier.chars().peekable();

  while let Some(ch) = chars.next() {
    current.push(ch);
    let boundary = ch.is_ascii_alphabetic()
      && chars.peek().is_some_and(|next| next.is_ascii_uppercase());
    if boundary {
      segments.push(std::mem::take(&mut current));
    }
  }
  segments.push(current);

  segments.iter().collect()
}

/// Joins the conventional path for `identifier` onto `app_path`.
pub fn resolve_app_path(app_path: &Path, identifier: &str) -> PathBuf {
  app_path.join(app_relative_path(identifier))
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_splits_at_each_capital_after_a_letter() {
    assert_eq!(app_relative_path("BaseTest"), PathBuf::from("Base/Test"));
    assert_eq!(
      app_relative_path("UserAccountRepository"),
      PathBuf::from("User/Account/Repository")
    );
  }

  #[test]
  fn test_consecutive_capitals_each_start_a_segment() {
    assert_eq!(app_relative_path("HTTPServer"), PathBuf::from("H/T/T/P/Server"));
  }

  #[test]
  fn test_single_words_and_non_letters_are_untouched() {
    assert_eq!(app_relative_path("logger"), PathBuf::from("logger"));
    assert_eq!(app_relative_path("Logger"), PathBuf::from("Logger"));
    assert_eq!(app_relative_path("v2Api"), PathBuf::from("v2Api"));
    assert_eq!(app_relative_path("_Private"), PathBuf::from("_Private"));
  }

  #[test]
  fn test_resolve_app_path_prefixes_the_base_directory() {
    assert_eq!(
      resolve_app_path(Path::new("./app/"), "BaseTest"),
      PathBuf::from("./app/Base/Test")
    );
  }
}
