//! Kinds of errors and chain links

use crate::Leaf;
use crate::chain::as_guru_error;
use strum_macros::{Display, IntoStaticStr};

/// The flavour of a [`crate::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
pub enum ErrorKind {
    /// A code attached to a cause, with no text of its own
    Coded,

    /// A code and an annotation message attached to a cause
    Annotated,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// What a single link of an error chain is.
///
/// Only `Coded` and `Annotated` links carry a code. Any error type this crate
/// does not know about is `Opaque`; it is still walked through via `source()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
pub enum LinkKind {
    Coded,
    Annotated,
    Leaf,
    Opaque,
}

impl LinkKind {
    /// Classify a link of an error chain.
    pub fn of(link: &(dyn std::error::Error + 'static)) -> Self {
        if let Some(err) = as_guru_error(link) {
            err.kind().into()
        } else if link.is::<Leaf>() {
            LinkKind::Leaf
        } else {
            LinkKind::Opaque
        }
    }

    /// Returns the link kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if links of this kind carry a code
    pub fn is_coded(&self) -> bool {
        matches!(self, LinkKind::Coded | LinkKind::Annotated)
    }
}

impl From<ErrorKind> for LinkKind {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Coded => LinkKind::Coded,
            ErrorKind::Annotated => LinkKind::Annotated,
        }
    }
}
