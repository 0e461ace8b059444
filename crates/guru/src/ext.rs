//! Coding errors in flight through `Result`.

use crate::{BoxError, Error};

/// Extension methods that code the `Err` side of a `Result`.
///
/// `Ok` values pass through untouched, the same way [`crate::with_code`] and
/// [`crate::wrap`] pass `None` through.
pub trait ResultExt<T> {
    /// Attach `code` to the error.
    fn with_code(self, code: i32) -> Result<T, Error>;

    /// Attach `code` and `message` to the error.
    fn wrap(self, code: i32, message: impl Into<String>) -> Result<T, Error>;

    /// Attach `code` and a lazily built message to the error.
    fn wrap_with<M, F>(self, code: i32, f: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn with_code(self, code: i32) -> Result<T, Error> {
        self.map_err(|err| Error::with_code(code, err))
    }

    fn wrap(self, code: i32, message: impl Into<String>) -> Result<T, Error> {
        self.map_err(|err| Error::wrap(code, err, message))
    }

    fn wrap_with<M, F>(self, code: i32, f: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        self.map_err(|err| Error::wrap(code, err, f()))
    }
}
