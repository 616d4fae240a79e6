use crate::bind::Bind;
use crate::error::UnwrapError;
use std::fmt::{self, Display, Formatter};
use std::ops::{BitOr, Shr};

/// Either an error (`Left`) or a value (`Right`).
///
/// Chains built with [`bind`](Either::bind), `>>` or `|` stop at the first
/// `Left`: every later step is skipped and that error reaches the end of the
/// chain untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<M, T> {
  Left(M),
  Right(T),
}

impl<M, T> Either<M, T> {
  pub fn pure(value: T) -> Self {
    Either::Right(value)
  }

  pub fn is_left(&self) -> bool {
    matches!(self, Either::Left(_))
  }

  pub fn is_right(&self) -> bool {
    !self.is_left()
  }

  /// The error carried by a `Left`. A `Right` has no error.
  pub fn error(&self) -> Option<&M> {
    match self {
      Either::Left(err) => Some(err),
      Either::Right(_) => None,
    }
  }

  pub fn value(&self) -> Option<&T> {
    match self {
      Either::Left(_) => None,
      Either::Right(value) => Some(value),
    }
  }

  pub fn left(self) -> Option<M> {
    match self {
      Either::Left(err) => Some(err),
      Either::Right(_) => None,
    }
  }

  pub fn right(self) -> Option<T> {
    match self {
      Either::Left(_) => None,
      Either::Right(value) => Some(value),
    }
  }

  pub fn as_ref(&self) -> Either<&M, &T> {
    match self {
      Either::Left(err) => Either::Left(err),
      Either::Right(value) => Either::Right(value),
    }
  }

  pub fn try_unwrap_left(self) -> Result<M, UnwrapError> {
    self.left().ok_or(UnwrapError::ExpectedLeft)
  }

  pub fn try_unwrap_right(self) -> Result<T, UnwrapError> {
    self.right().ok_or(UnwrapError::ExpectedRight)
  }

  pub fn unwrap_left(self) -> M {
    match self.try_unwrap_left() {
      Ok(err) => err,
      Err(err) => panic!("unwrap_left: {}", err),
    }
  }

  pub fn unwrap_right(self) -> T {
    match self.try_unwrap_right() {
      Ok(value) => value,
      Err(err) => panic!("unwrap_right: {}", err),
    }
  }

  /// Feeds the value of a `Right` to `f` and returns `f`'s result as is.
  /// A `Left` is returned unchanged without calling `f`.
  pub fn bind<S, F>(self, f: F) -> Either<M, S>
  where
    F: FnOnce(T) -> Either<M, S>,
  {
    match self {
      Either::Left(err) => Either::Left(err),
      Either::Right(value) => f(value),
    }
  }

  pub fn map<S, F>(self, f: F) -> Either<M, S>
  where
    F: FnOnce(T) -> S,
  {
    self.bind(|value| Either::Right(f(value)))
  }

  pub fn either<R, L, G>(self, on_left: L, on_right: G) -> R
  where
    L: FnOnce(M) -> R,
    G: FnOnce(T) -> R,
  {
    match self {
      Either::Left(err) => on_left(err),
      Either::Right(value) => on_right(value),
    }
  }
}

impl<M, F> Either<M, F> {
  /// Applies a wrapped function to a wrapped argument. The function side is
  /// checked first, so its error wins when both are `Left`.
  pub fn apply<T, S>(self, arg: Either<M, T>) -> Either<M, S>
  where
    F: FnOnce(T) -> S,
  {
    self.bind(|f| arg.map(f))
  }
}

impl<M, T> Bind for Either<M, T> {
  type Value = T;
  type Output<S> = Either<M, S>;

  fn is_success(&self) -> bool {
    self.is_right()
  }

  fn bind<S, F>(self, f: F) -> Self::Output<S>
  where
    F: FnOnce(Self::Value) -> Self::Output<S>,
  {
    Either::bind(self, f)
  }
}

impl<M, T, S, F> Shr<F> for Either<M, T>
where
  F: FnOnce(T) -> Either<M, S>,
{
  type Output = Either<M, S>;

  fn shr(self, f: F) -> Either<M, S> {
    self.bind(f)
  }
}

impl<M, T, S, F> BitOr<F> for Either<M, T>
where
  F: FnOnce(T) -> Either<M, S>,
{
  type Output = Either<M, S>;

  fn bitor(self, f: F) -> Either<M, S> {
    self.bind(f)
  }
}

impl<M, T> From<Result<T, M>> for Either<M, T> {
  fn from(result: Result<T, M>) -> Self {
    match result {
      Ok(value) => Either::Right(value),
      Err(err) => Either::Left(err),
    }
  }
}

impl<M, T> From<Either<M, T>> for Result<T, M> {
  fn from(either: Either<M, T>) -> Self {
    match either {
      Either::Left(err) => Err(err),
      Either::Right(value) => Ok(value),
    }
  }
}

impl<M: Display, T: Display> Display for Either<M, T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Either::Left(err) => write!(f, "Left({})", err),
      Either::Right(value) => write!(f, "Right({})", value),
    }
  }
}
