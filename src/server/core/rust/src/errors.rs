/* src/server/core/rust/src/errors.rs */

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "VALIDATION_ERROR" => 400,
    "NOT_FOUND" => 404,
    _ => 500,
  }
}

impl PageError {
  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::with_code("VALIDATION_ERROR", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for PageError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for PageError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_status_known_codes() {
    assert_eq!(default_status("VALIDATION_ERROR"), 400);
    assert_eq!(default_status("NOT_FOUND"), 404);
    assert_eq!(default_status("INTERNAL_ERROR"), 500);
  }

  #[test]
  fn default_status_unknown_code() {
    assert_eq!(default_status("CUSTOM_ERROR"), 500);
  }

  #[test]
  fn with_code_resolves_status() {
    let err = PageError::with_code("GONE", "post removed");
    assert_eq!(err.code(), "GONE");
    assert_eq!(err.message(), "post removed");
    assert_eq!(err.status(), 500);
  }

  #[test]
  fn convenience_constructors() {
    assert_eq!(PageError::validation("x").status(), 400);
    assert_eq!(PageError::not_found("x").status(), 404);
  }

  #[test]
  fn display_format() {
    let err = PageError::not_found("no page matches /nope");
    assert_eq!(err.to_string(), "NOT_FOUND: no page matches /nope");
  }
}
