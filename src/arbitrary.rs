use crate::{Either, Maybe};
use quickcheck::{Arbitrary, Gen};

impl<M: Arbitrary, T: Arbitrary> Arbitrary for Either<M, T> {
  fn arbitrary(g: &mut Gen) -> Self {
    if bool::arbitrary(g) {
      Either::Right(T::arbitrary(g))
    } else {
      Either::Left(M::arbitrary(g))
    }
  }

  fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
    match self {
      Either::Left(err) => Box::new(err.shrink().map(Either::Left)),
      Either::Right(value) => Box::new(value.shrink().map(Either::Right)),
    }
  }
}

impl<T: Arbitrary> Arbitrary for Maybe<T> {
  fn arbitrary(g: &mut Gen) -> Self {
    if bool::arbitrary(g) {
      Maybe::Just(T::arbitrary(g))
    } else {
      Maybe::Nothing(String::arbitrary(g))
    }
  }

  fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
    match self {
      Maybe::Just(value) => Box::new(value.shrink().map(Maybe::Just)),
      Maybe::Nothing(message) => Box::new(message.shrink().map(Maybe::Nothing)),
    }
  }
}
