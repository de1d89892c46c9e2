//! Helper combinators for building pipeline stages.
//!
//! - [`identity`]: returns its argument unchanged (I combinator)
//! - [`constant`]: ignores its input, always yields the same value (K)
//! - [`flip`]: swaps the arguments of a binary function (C)

/// Returns the value unchanged.
///
/// The unit element of composition: queuing `identity` onto any pipeline
/// leaves its result untouched.
///
/// # Examples
///
/// ```
/// use functorial::prelude::*;
///
/// assert_eq!(identity(42), 42);
/// let pipeline = Functor::wrap(7) >> identity;
/// assert_eq!(pipeline.run(), 7);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// # Examples
///
/// ```
/// use functorial::prelude::*;
///
/// let pipeline = Functor::wrap(99) >> constant(1);
/// assert_eq!(pipeline.run(), 1);
/// ```
#[inline]
pub fn constant<T, U>(value: T) -> impl Fn(U) -> T
where
    T: Clone,
{
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Satisfies `flip(f)(a, b) == f(b, a)`; flipping twice restores the
/// original argument order.
///
/// # Examples
///
/// ```
/// use functorial::compose::flip;
///
/// fn describe(count: i32, noun: &str) -> String {
///     format!("{count} {noun}")
/// }
///
/// let flipped = flip(describe);
/// assert_eq!(flipped("apples", 3), "3 apples");
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_returns_its_argument() {
        assert_eq!(identity(5), 5);
        assert_eq!(identity("text"), "text");
    }

    #[rstest]
    fn constant_ignores_input() {
        let always_seven = constant(7);
        assert_eq!(always_seven(1), 7);
        assert_eq!(always_seven(100), 7);
    }

    #[rstest]
    fn flip_swaps_arguments() {
        let subtract = |x: i32, y: i32| x - y;
        let flipped = flip(subtract);
        assert_eq!(flipped(2, 10), 8);
    }
}
