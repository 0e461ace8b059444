//! # guru
//!
//! Errors with a Guru Meditation code.
//!
//! ## Design Philosophy
//!
//! - **Code**: an integer attached to an error, e.g. an HTTP status
//! - **Chain**: every coded error keeps its cause reachable through `source()`
//! - **Precedence**: the code nearest to the caller wins; inner codes are
//!   shadowed, never removed
//!
//! ## Usage
//!
//! ```rust
//! use guru::{Leaf, ResultExt};
//!
//! let err = guru::new(404, "no such user");
//! assert_eq!(err.to_string(), "error 404: no such user");
//! assert_eq!(guru::code(&err), 404);
//!
//! // Re-coding shadows the inner code.
//! let err = guru::with_code(500, Some(err)).unwrap();
//! assert_eq!(guru::code(&err), 500);
//!
//! // An annotation is the plain message; Display renders the whole chain.
//! let err = guru::wrap(3, Some(Leaf::new("Dennis Ritchie")), "no longer with us").unwrap();
//! assert_eq!(err.message(), "no longer with us");
//! assert_eq!(err.to_string(), "error 3: Dennis Ritchie: no longer with us");
//!
//! // No error in, no error out.
//! assert!(guru::with_code(500, None::<Leaf>).is_none());
//!
//! let port: Result<u16, _> = "http".parse::<u16>().wrap(400, "bad port");
//! assert_eq!(guru::code(&port.unwrap_err()), 400);
//! ```
//!
//! ## Principles
//!
//! - Constructors never fail; an absent error propagates as absent
//! - `code` returns 0 when nothing in the chain is coded
//! - Foreign errors are wrapped as-is and stay reachable for `downcast_ref`

mod chain;
mod error;
mod ext;
mod kind;

pub use chain::{Chain, Coded, as_coded, chain, code, code_of};
pub use error::{BoxError, Error, Leaf, new, with_code, wrap};
pub use ext::ResultExt;
pub use kind::{ErrorKind, LinkKind};

/// Result type alias using guru Error
pub type Result<T> = std::result::Result<T, Error>;

/// Create a coded error from a format string.
///
/// ```rust
/// let err = guru::errorf!(429, "{} requests in {}s", 120, 60);
/// assert_eq!(err.to_string(), "error 429: 120 requests in 60s");
/// ```
#[macro_export]
macro_rules! errorf {
    ($code:expr, $($arg:tt)+) => {
        $crate::Error::new($code, ::std::format!($($arg)+))
    };
}

/// Attach a code and a formatted message to an optional error.
///
/// The message is only formatted when there is an error to annotate.
///
/// ```rust
/// let cause = Some(guru::Leaf::new("connection reset"));
/// let err = guru::wrapf!(502, cause, "upstream {}", "db-1").unwrap();
/// assert_eq!(err.to_string(), "error 502: connection reset: upstream db-1");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($code:expr, $err:expr, $($arg:tt)+) => {
        match $err {
            ::std::option::Option::Some(err) => ::std::option::Option::Some(
                $crate::Error::wrap($code, err, ::std::format!($($arg)+)),
            ),
            ::std::option::Option::None => ::std::option::Option::None,
        }
    };
}
