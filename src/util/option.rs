use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts like [`Option::unwrap`] except that the none branch is [`unreachable!`] for dev builds
    /// and [`unreachable_unchecked`](hint::unreachable_unchecked) for release builds.
    ///
    /// Calling this method states that None cannot occur; every use site carries an UNREACHABLE
    /// comment explaining why. No panic annotations are applied because a panic here is a bug in
    /// this crate, not an error a caller can reach.
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: It is the responsibility of the caller to ensure that None is impossible
            // when invoking this method.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
