use crate::bind::Bind;
use crate::error::NothingError;
use std::fmt::{self, Display, Formatter};
use std::ops::Shr;

/// A present value (`Just`) or an absence (`Nothing`) explaining itself with
/// a message. The message is the error: [`error`](Maybe::error) returns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
  Just(T),
  Nothing(String),
}

impl<T> Maybe<T> {
  pub fn pure(value: T) -> Self {
    Maybe::Just(value)
  }

  pub fn nothing<S>(message: S) -> Self
  where
    S: Into<String>,
  {
    Maybe::Nothing(message.into())
  }

  pub fn from_option<S>(option: Option<T>, message: S) -> Self
  where
    S: Into<String>,
  {
    match option {
      Some(value) => Maybe::Just(value),
      None => Maybe::nothing(message),
    }
  }

  pub fn is_just(&self) -> bool {
    matches!(self, Maybe::Just(_))
  }

  pub fn is_nothing(&self) -> bool {
    !self.is_just()
  }

  pub fn error(&self) -> Option<&str> {
    match self {
      Maybe::Just(_) => None,
      Maybe::Nothing(message) => Some(message.as_str()),
    }
  }

  pub fn value(&self) -> Option<&T> {
    match self {
      Maybe::Just(value) => Some(value),
      Maybe::Nothing(_) => None,
    }
  }

  /// Borrows a `Just`. A `Nothing` clones its message.
  pub fn as_ref(&self) -> Maybe<&T> {
    match self {
      Maybe::Just(value) => Maybe::Just(value),
      Maybe::Nothing(message) => Maybe::Nothing(message.clone()),
    }
  }

  pub fn into_option(self) -> Option<T> {
    match self {
      Maybe::Just(value) => Some(value),
      Maybe::Nothing(_) => None,
    }
  }

  pub fn into_result(self) -> Result<T, NothingError> {
    match self {
      Maybe::Just(value) => Ok(value),
      Maybe::Nothing(message) => Err(NothingError { message }),
    }
  }

  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Maybe::Just(value) => value,
      Maybe::Nothing(_) => default,
    }
  }

  /// Feeds the value of a `Just` to `f` and returns `f`'s result as is.
  /// A `Nothing` keeps its message and `f` is not called.
  pub fn bind<S, F>(self, f: F) -> Maybe<S>
  where
    F: FnOnce(T) -> Maybe<S>,
  {
    match self {
      Maybe::Just(value) => f(value),
      Maybe::Nothing(message) => Maybe::Nothing(message),
    }
  }

  pub fn map<S, F>(self, f: F) -> Maybe<S>
  where
    F: FnOnce(T) -> S,
  {
    self.bind(|value| Maybe::Just(f(value)))
  }

  pub fn maybe<R, F>(self, default: R, f: F) -> R
  where
    F: FnOnce(T) -> R,
  {
    match self {
      Maybe::Just(value) => f(value),
      Maybe::Nothing(_) => default,
    }
  }
}

impl<T> Bind for Maybe<T> {
  type Value = T;
  type Output<S> = Maybe<S>;

  fn is_success(&self) -> bool {
    self.is_just()
  }

  fn bind<S, F>(self, f: F) -> Self::Output<S>
  where
    F: FnOnce(Self::Value) -> Self::Output<S>,
  {
    Maybe::bind(self, f)
  }
}

impl<T, S, F> Shr<F> for Maybe<T>
where
  F: FnOnce(T) -> Maybe<S>,
{
  type Output = Maybe<S>;

  fn shr(self, f: F) -> Maybe<S> {
    self.bind(f)
  }
}

/// Prints `Nothing` without its message.
impl<T: Display> Display for Maybe<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Maybe::Just(value) => write!(f, "Just({})", value),
      Maybe::Nothing(_) => write!(f, "Nothing"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::Maybe::{Just, Nothing};
  use super::*;
  use insta::assert_snapshot;
  use pretty_assertions::assert_eq;
  use quickcheck_macros::quickcheck;
  use std::cell::Cell;
  use std::collections::HashMap;

  fn at_most_five(x: i32) -> Maybe<i32> {
    if x > 5 {
      Maybe::nothing("too big")
    } else {
      Just(x)
    }
  }

  fn reciprocal(x: i32) -> Maybe<f64> {
    if x == 0 {
      Maybe::nothing("division by zero")
    } else {
      Just(1.0 / x as f64)
    }
  }

  #[test]
  fn construction_tags() {
    let j = Just(3);
    assert!(j.is_just());
    assert!(!j.is_nothing());
    assert_eq!(j.error(), None);
    assert_eq!(j.value(), Some(&3));

    let n: Maybe<i32> = Nothing("missing".to_owned());
    assert!(n.is_nothing());
    assert!(!n.is_just());
    assert_eq!(n.error(), Some("missing"));
    assert_eq!(n.value(), None);
  }

  #[test]
  fn just_over_limit() {
    let r = Just(10) >> at_most_five;
    assert_eq!(r, Maybe::nothing("too big"));
  }

  #[test]
  fn nothing_skips_callback() {
    let calls = Cell::new(0);
    let r = Maybe::<i32>::nothing("missing")
      >> (|x: i32| {
        calls.set(calls.get() + 1);
        Just(x * 2)
      });
    assert_eq!(r, Maybe::nothing("missing"));
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn lookup_chain() {
    let mut ages = HashMap::new();
    ages.insert("ann", 0);
    ages.insert("bob", 4);
    let lookup = |name: &str| {
      Maybe::from_option(ages.get(name).copied(), format!("no age for {}", name))
    };

    assert_eq!(lookup("bob") >> at_most_five >> reciprocal, Just(0.25));
    assert_eq!(
      (lookup("ann") >> reciprocal).error(),
      Some("division by zero")
    );
    assert_eq!(
      (lookup("cid") >> reciprocal).error(),
      Some("no age for cid")
    );
  }

  #[test]
  fn map_and_default() {
    assert_eq!(Just(2).map(|x| x + 1), Just(3));
    assert_eq!(Maybe::<i32>::nothing("e").map(|x| x + 1).error(), Some("e"));
    assert_eq!(Just(2).maybe(0, |x| x * 4), 8);
    assert_eq!(Maybe::nothing("e").maybe(0, |x: i32| x * 4), 0);
    assert_eq!(Maybe::nothing("e").unwrap_or(7), 7);
  }

  #[test]
  fn conversions() {
    assert_eq!(Just(1).into_option(), Some(1));
    assert_eq!(Maybe::<i32>::nothing("e").into_option(), None);
    assert_eq!(Just(1).into_result(), Ok(1));
    assert_eq!(
      Maybe::<i32>::nothing("gone").into_result(),
      Err(NothingError::new("gone"))
    );
    assert_eq!(Maybe::<i32>::nothing("gone").as_ref(), Maybe::nothing("gone"));
  }

  #[test]
  fn question_mark() {
    fn total(a: Maybe<u32>, b: Maybe<u32>) -> Result<u32, NothingError> {
      Ok(a.into_result()? + b.into_result()?)
    }

    assert_eq!(total(Just(1), Just(2)), Ok(3));
    assert_eq!(
      total(Just(1), Maybe::nothing("b missing")).map_err(String::from),
      Err("b missing".to_owned())
    );
  }

  #[test]
  fn display() {
    assert_snapshot!(Just(10).to_string(), @"Just(10)");
    assert_snapshot!(Maybe::<i32>::nothing("missing").to_string(), @"Nothing");
    assert_snapshot!(Just("x").to_string(), @"Just(x)");
  }

  #[quickcheck]
  fn just_has_no_error(v: i32) -> bool {
    let j = Just(v);
    j.is_just() && !j.is_nothing() && j.error().is_none()
  }

  #[quickcheck]
  fn nothing_keeps_message(m: String) -> bool {
    let called = Cell::new(false);
    let n = Maybe::<i32>::Nothing(m.clone());
    let r = n.bind(|x| {
      called.set(true);
      at_most_five(x)
    });
    r.is_nothing() && r.error() == Some(m.as_str()) && !called.get()
  }

  #[quickcheck]
  fn operator_matches_bind(a: Maybe<i32>) -> bool {
    (a.clone() >> at_most_five) == a.bind(at_most_five)
  }

  #[quickcheck]
  fn bind_is_associative(a: Maybe<i32>) -> bool {
    let lhs = a.clone().bind(at_most_five).bind(reciprocal);
    let rhs = a.bind(|x| at_most_five(x).bind(reciprocal));
    lhs == rhs
  }

  #[quickcheck]
  fn pure_is_identity(v: i32, a: Maybe<i32>) -> bool {
    Maybe::pure(v).bind(at_most_five) == at_most_five(v)
      && a.clone().bind(Maybe::pure) == a
  }

  #[quickcheck]
  fn map_identity(a: Maybe<i32>) -> bool {
    a.clone().map(|x| x) == a
  }

  #[quickcheck]
  fn option_round_trip(o: Option<i32>) -> bool {
    Maybe::from_option(o, "missing").into_option() == o
  }
}
