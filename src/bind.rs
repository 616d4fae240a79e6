/// Capability shared by [`Either`](crate::Either) and [`Maybe`](crate::Maybe).
///
/// A value is in either its success state (`Right`/`Just`) or its failure
/// state (`Left`/`Nothing`), fixed at construction. `bind` is the only
/// transition: a success hands its value to `f` and becomes whatever `f`
/// returns, a failure is returned unchanged and `f` is never called.
pub trait Bind: Sized {
  type Value;
  type Output<S>;

  fn is_success(&self) -> bool;

  fn is_failure(&self) -> bool {
    !self.is_success()
  }

  fn bind<S, F>(self, f: F) -> Self::Output<S>
  where
    F: FnOnce(Self::Value) -> Self::Output<S>;
}
