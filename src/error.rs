use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Produced when a `Nothing` leaves the chain through
/// [`Maybe::into_result`](crate::Maybe::into_result).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NothingError {
  pub message: String,
}

impl NothingError {
  pub fn new<S>(message: S) -> Self
  where
    S: Into<String>,
  {
    Self {
      message: message.into(),
    }
  }
}

impl Display for NothingError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.message)
  }
}

impl Error for NothingError {}

impl From<NothingError> for String {
  fn from(err: NothingError) -> Self {
    err.message
  }
}

impl From<String> for NothingError {
  fn from(message: String) -> Self {
    Self { message }
  }
}

impl From<&str> for NothingError {
  fn from(message: &str) -> Self {
    Self::new(message)
  }
}

/// Asked an `Either` for the variant it does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnwrapError {
  ExpectedLeft,
  ExpectedRight,
}

impl Display for UnwrapError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::ExpectedLeft => write!(f, "expected Left, found Right"),
      Self::ExpectedRight => write!(f, "expected Right, found Left"),
    }
  }
}

impl Error for UnwrapError {}
