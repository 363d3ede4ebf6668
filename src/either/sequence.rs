//! Sequencing tuples of `Either` (and `Option`) values.
//!
//! [`SequenceTuple`] turns a tuple of wrapped values into a wrapped tuple,
//! stopping at the first failure. [`SequenceTupleV`] does the same for
//! `Either` but combines every `Left` with the error type's [`Semigroup`].
//! Both are implemented for tuples of 1 to 10 elements.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::{Either, SequenceTuple, SequenceTupleV};
//!
//! let host: Either<String, &str> = Either::Right("localhost");
//! let port: Either<String, u16> = Either::Right(5432);
//! assert_eq!((host, port).sequence(), Either::Right(("localhost", 5432)));
//!
//! assert_eq!((Some(1), Some('a'), None::<bool>).sequence(), None);
//!
//! let name: Either<String, &str> = Either::Left("name missing. ".to_string());
//! let age: Either<String, u8> = Either::Left("age missing.".to_string());
//! assert_eq!(
//!     (name, age).sequence_v(),
//!     Either::Left("name missing. age missing.".to_string())
//! );
//! ```

use super::Either;
use crate::typeclass::Semigroup;

/// Turns a tuple of wrapped values into a wrapped tuple; the first failure wins.
pub trait SequenceTuple {
    /// The wrapped tuple.
    type Output;

    /// Sequences the tuple, left to right.
    fn sequence(self) -> Self::Output;
}

/// Turns a tuple of `Either`s into an `Either` of a tuple, combining every `Left`.
pub trait SequenceTupleV {
    /// The wrapped tuple.
    type Output;

    /// Sequences the tuple, accumulating left values from left to right.
    fn sequence_v(self) -> Self::Output;
}

// Folds the elements with `map2_v`, growing a flat tuple one element at a time.
macro_rules! accumulate_tuple {
    ($accumulated:expr; [$($done:ident),*]; $next:ident $(, $rest:ident)*) => {
        accumulate_tuple!(
            $accumulated.map2_v($next, |($($done,)*), $next| ($($done,)* $next,));
            [$($done,)* $next];
            $($rest),*
        )
    };
    ($accumulated:expr; [$($done:ident),*];) => {
        $accumulated
    };
}

macro_rules! sequence_tuple {
    ($($value:ident: $type:ident),+) => {
        impl<E, $($type),+> SequenceTuple for ($(Either<E, $type>,)+) {
            type Output = Either<E, ($($type,)+)>;

            fn sequence(self) -> Self::Output {
                let ($($value,)+) = self;
                Either::Right(($(
                    match $value {
                        Either::Right(inner) => inner,
                        Either::Left(error) => return Either::Left(error),
                    },
                )+))
            }
        }

        impl<$($type),+> SequenceTuple for ($(Option<$type>,)+) {
            type Output = Option<($($type,)+)>;

            fn sequence(self) -> Self::Output {
                let ($($value,)+) = self;
                Some(($($value?,)+))
            }
        }

        impl<E: Semigroup, $($type),+> SequenceTupleV for ($(Either<E, $type>,)+) {
            type Output = Either<E, ($($type,)+)>;

            fn sequence_v(self) -> Self::Output {
                let ($($value,)+) = self;
                accumulate_tuple!(Either::Right(()); []; $($value),+)
            }
        }
    };
}

sequence_tuple!(first: A);
sequence_tuple!(first: A, second: B);
sequence_tuple!(first: A, second: B, third: C);
sequence_tuple!(first: A, second: B, third: C, fourth: D);
sequence_tuple!(first: A, second: B, third: C, fourth: D, fifth: F);
sequence_tuple!(first: A, second: B, third: C, fourth: D, fifth: F, sixth: G);
sequence_tuple!(first: A, second: B, third: C, fourth: D, fifth: F, sixth: G, seventh: H);
sequence_tuple!(first: A, second: B, third: C, fourth: D, fifth: F, sixth: G, seventh: H, eighth: I);
sequence_tuple!(
    first: A, second: B, third: C, fourth: D, fifth: F, sixth: G, seventh: H, eighth: I, ninth: J
);
sequence_tuple!(
    first: A, second: B, third: C, fourth: D, fifth: F, sixth: G, seventh: H, eighth: I, ninth: J,
    tenth: K
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn single_element_tuple() {
        let single: (Either<&str, i32>,) = (Either::Right(1),);
        assert_eq!(single.sequence(), Either::Right((1,)));
    }

    #[rstest]
    fn first_left_wins_in_fail_fast_sequence() {
        let tuple: (Either<&str, i32>, Either<&str, i32>, Either<&str, i32>) =
            (Either::Right(1), Either::Left("second"), Either::Left("third"));
        assert_eq!(tuple.sequence(), Either::Left("second"));
    }

    #[rstest]
    fn accumulating_sequence_of_ten() {
        let ok = |n: u8| Either::<Vec<u8>, u8>::Right(n);
        let bad = |n: u8| Either::<Vec<u8>, u8>::Left(vec![n]);
        let tuple = (bad(1), ok(2), ok(3), ok(4), bad(5), ok(6), ok(7), ok(8), ok(9), bad(10));
        assert_eq!(tuple.sequence_v(), Either::Left(vec![1, 5, 10]));
    }

    #[rstest]
    fn accumulating_sequence_all_right() {
        let tuple: (Either<String, u8>, Either<String, char>, Either<String, bool>) =
            (Either::Right(1), Either::Right('x'), Either::Right(true));
        assert_eq!(tuple.sequence_v(), Either::Right((1, 'x', true)));
    }

    #[rstest]
    fn accumulating_sequence_single_left() {
        let single: (Either<String, i32>,) = (Either::Left("only".to_string()),);
        assert_eq!(single.sequence_v(), Either::Left("only".to_string()));
    }

    #[rstest]
    fn option_tuple_all_some() {
        assert_eq!((Some(1), Some("two")).sequence(), Some((1, "two")));
    }
}
