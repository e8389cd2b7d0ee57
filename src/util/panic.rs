/// Asserts that evaluating the provided block panics, for exercising the panicking variants of
/// fallible operations.
///
/// The panic is caught rather than suppressed, so each use leaves one backtrace in the test
/// output; the trailing note marks it as intentional. An optional second argument replaces the
/// message reported when the block completes without panicking.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "The block should have panicked but completed instead.")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
        println!("^ intentional, caught by assert_panics!");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
