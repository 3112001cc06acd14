//! Unwrap helpers with good error messages.
//!
//! These replace `unwrap()` and `expect()` in test code. `#[track_caller]`
//! makes the panic point at the test line, not at this module.

use std::fmt::Debug;

/// Unwrap a `Result`, panicking with the error value on `Err`.
///
/// # Example
///
/// ```rust
/// use synthvr_test_helpers::must;
///
/// let result: Result<i32, &str> = Ok(42);
/// assert_eq!(must(result), 42);
/// ```
///
/// # Panics
///
/// Panics if the result is `Err`.
#[track_caller]
pub fn must<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must: unexpected Err: {e:?}"),
    }
}

/// Unwrap an `Option`, panicking with `msg` on `None`.
///
/// # Panics
///
/// Panics if the option is `None`.
#[track_caller]
pub fn must_some<T>(option: Option<T>, msg: &str) -> T {
    match option {
        Some(v) => v,
        None => panic!("must_some: {msg}"),
    }
}

/// Unwrap a `Result` with a context message.
///
/// # Panics
///
/// Panics if the result is `Err`, with the context and error value.
#[track_caller]
pub fn must_with<T, E: Debug>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must_with: {context}: {e:?}"),
    }
}

/// Unwrap the error of a `Result` that is expected to fail.
///
/// # Example
///
/// ```rust
/// use synthvr_test_helpers::must_err;
///
/// let result: Result<i32, &str> = Err("nope");
/// assert_eq!(must_err(result), "nope");
/// ```
///
/// # Panics
///
/// Panics if the result is `Ok`.
#[track_caller]
pub fn must_err<T: Debug, E>(result: Result<T, E>) -> E {
    match result {
        Ok(v) => panic!("must_err: unexpected Ok: {v:?}"),
        Err(e) => e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_ok() {
        let r: Result<u8, ()> = Ok(7);
        assert_eq!(must(r), 7);
    }

    #[test]
    #[should_panic(expected = "must: unexpected Err")]
    fn test_must_err_panics() {
        let r: Result<u8, &str> = Err("bad");
        must(r);
    }

    #[test]
    #[should_panic(expected = "must_some: missing")]
    fn test_must_some_none() {
        let o: Option<u8> = None;
        must_some(o, "missing");
    }

    #[test]
    #[should_panic(expected = "loading config")]
    fn test_must_with_context() {
        let r: Result<u8, &str> = Err("bad");
        must_with(r, "loading config");
    }

    #[test]
    #[should_panic(expected = "must_err: unexpected Ok")]
    fn test_must_err_on_ok() {
        let r: Result<u8, &str> = Ok(1);
        must_err(r);
    }
}
