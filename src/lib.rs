//! `Either` and `Maybe`: chainable success/failure wrappers.
//!
//! ```
//! use monadkit::{Just, Left, Maybe, Right};
//!
//! let r = Right::<&str, i32>(5) >> (|x: i32| Right(x + 1));
//! assert_eq!(r, Right(6));
//!
//! let l = Left::<&str, i32>("bad input") | (|x: i32| Right(x + 1));
//! assert_eq!(l.error(), Some(&"bad input"));
//!
//! let m = Just(10)
//!   >> (|x: i32| if x > 5 { Maybe::nothing("too big") } else { Just(x) });
//! assert_eq!(m.error(), Some("too big"));
//! ```

#[cfg(any(test, feature = "quickcheck"))]
mod arbitrary;
pub mod bind;
pub mod either;
pub mod error;
pub mod maybe;

pub use self::bind::*;
pub use self::either::*;
pub use self::error::*;
pub use self::maybe::*;

pub use self::either::Either::{Left, Right};
pub use self::maybe::Maybe::{Just, Nothing};
