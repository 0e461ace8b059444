//! The coded error type and its constructors.

use crate::chain::as_guru_error;
use crate::{Coded, ErrorKind};
use std::borrow::Cow;
use std::fmt;

/// A boxed, thread-safe error: the cause carried by every coded error.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error annotated with a Guru Meditation code.
///
/// Two flavours exist, told apart by [`Error::kind`]:
///
/// - [`ErrorKind::Coded`] only attaches a code to its cause.
/// - [`ErrorKind::Annotated`] attaches a code and a message. Its plain text
///   ([`Error::message`]) is the message alone, while `Display` renders the
///   whole chain.
///
/// Either way the cause stays reachable through
/// [`std::error::Error::source`].
pub struct Error {
    kind: ErrorKind,
    code: i32,
    message: String,
    source: BoxError,
}

impl Error {
    /// Create a coded error from a plain message.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self::with_code(code, Leaf::new(message))
    }

    /// Attach `code` to an existing error.
    ///
    /// Strings are accepted too, but they become a std string error rather
    /// than a [`Leaf`], so [`crate::LinkKind::of`] reports the cause as
    /// `Opaque`. Use [`Error::new`] to start a chain from a message.
    pub fn with_code<E>(code: i32, err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            kind: ErrorKind::Coded,
            code,
            message: String::new(),
            source: err.into(),
        }
    }

    /// Attach `code` and an annotation `message` to an existing error.
    pub fn wrap<E>(code: i32, err: E, message: impl Into<String>) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            kind: ErrorKind::Annotated,
            code,
            message: message.into(),
            source: err.into(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the code attached to this link.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Get the plain error text, as opposed to the chain-aware `Display`.
    ///
    /// An annotated error yields exactly its annotation. A coded error has no
    /// text of its own and yields the plain text of its cause.
    pub fn message(&self) -> Cow<'_, str> {
        match self.kind {
            ErrorKind::Annotated => Cow::Borrowed(&self.message),
            ErrorKind::Coded => plain_text(self.source.as_ref()),
        }
    }

    /// Get the cause.
    pub fn source_ref(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.source.as_ref()
    }

    /// Drop this layer and take back the cause.
    pub fn into_source(self) -> BoxError {
        self.source
    }
}

fn plain_text<'a>(err: &'a (dyn std::error::Error + 'static)) -> Cow<'a, str> {
    if let Some(coded) = as_guru_error(err) {
        coded.message()
    } else if let Some(leaf) = err.downcast_ref::<Leaf>() {
        Cow::Borrowed(leaf.as_str())
    } else {
        Cow::Owned(err.to_string())
    }
}

impl Coded for Error {
    fn code(&self) -> i32 {
        self.code
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error {}: {}", self.code, self.source)?;

        if self.kind == ErrorKind::Annotated && !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} error {}", self.kind, self.code)?;

        if self.kind == ErrorKind::Annotated && !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        writeln!(f)?;
        writeln!(f, "    Source: {:?}", self.source)?;

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// The root of a chain: an error that is nothing but a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Leaf {
    message: String,
}

impl Leaf {
    /// Create a leaf error holding `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the message.
    pub fn as_str(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Leaf {}

/// Create a coded error from a plain message.
pub fn new(code: i32, message: impl Into<String>) -> Error {
    Error::new(code, message)
}

/// Attach `code` to `err`. Returns `None` when there is no error to code.
pub fn with_code<E>(code: i32, err: Option<E>) -> Option<Error>
where
    E: Into<BoxError>,
{
    err.map(|err| Error::with_code(code, err))
}

/// Attach `code` and `message` to `err`. Returns `None` when there is no
/// error to annotate.
pub fn wrap<E>(code: i32, err: Option<E>, message: impl Into<String>) -> Option<Error>
where
    E: Into<BoxError>,
{
    err.map(|err| Error::wrap(code, err, message))
}
