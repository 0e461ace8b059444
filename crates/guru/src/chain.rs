//! Walking a chain of causes and extracting codes from it.

use crate::{Error, LinkKind};
use std::error::Error as StdError;
use std::iter::FusedIterator;
use std::sync::Arc;

mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::Error {}
}

/// An error that reports a Guru Meditation code.
///
/// Sealed: [`Error`] is the only implementor, so it is the only link
/// [`code`] ever stops at. Other error types cannot opt in:
///
/// ```rust,compile_fail
/// #[derive(Debug)]
/// struct Teapot;
///
/// impl std::fmt::Display for Teapot {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("short and stout")
///     }
/// }
///
/// impl std::error::Error for Teapot {}
///
/// impl guru::Coded for Teapot {
///     fn code(&self) -> i32 {
///         418
///     }
/// }
/// ```
pub trait Coded: sealed::Sealed {
    /// Get the code attached to this link.
    fn code(&self) -> i32;
}

/// Iterator over an error and its causes, outermost first.
///
/// Each step follows [`std::error::Error::source`]; iteration ends at the
/// first link without a source.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    /// Start a walk at `head`.
    pub fn new(head: &'a (dyn StdError + 'static)) -> Self {
        Self { next: Some(head) }
    }

    /// Pair every link with its [`LinkKind`].
    pub fn links(self) -> impl Iterator<Item = (LinkKind, &'a (dyn StdError + 'static))> {
        self.map(|link| (LinkKind::of(link), link))
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Walk `err` and its causes.
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain::new(err)
}

/// Test a single link for the [`Coded`] capability.
pub fn as_coded<'a>(link: &'a (dyn StdError + 'static)) -> Option<&'a dyn Coded> {
    as_guru_error(link).map(|err| err as &dyn Coded)
}

/// Find a guru [`Error`] behind a link, looking through `Box` and `Arc`.
///
/// `Box<T>` and `Arc<T>` are errors in their own right and forward `source()`
/// to the inner error's cause, so the smart pointer itself is the link.
pub(crate) fn as_guru_error<'a>(link: &'a (dyn StdError + 'static)) -> Option<&'a Error> {
    if let Some(err) = link.downcast_ref::<Error>() {
        Some(err)
    } else if let Some(err) = link.downcast_ref::<Box<Error>>() {
        Some(err.as_ref())
    } else {
        link.downcast_ref::<Arc<Error>>().map(|err| err.as_ref())
    }
}

/// Extract the code from `err` or the errors it wraps.
///
/// The first coded link found walking from `err` toward the root wins, so an
/// outer code shadows any inner one. Returns 0 if no link carries a code,
/// which cannot be told apart from an explicit code of 0.
pub fn code(err: &(dyn StdError + 'static)) -> i32 {
    code_of(Some(err))
}

/// Like [`code`], for an error that may be absent. `None` yields 0.
pub fn code_of(err: Option<&(dyn StdError + 'static)>) -> i32 {
    let found = Chain { next: err }
        .enumerate()
        .find_map(|(depth, link)| as_coded(link).map(|coded| (depth, coded.code())));

    match found {
        Some((depth, code)) => {
            tracing::trace!("resolved code {} after {} unwrap steps", code, depth);
            code
        }
        None => {
            tracing::trace!("no coded link in error chain");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Leaf, new, with_code, wrap};

    #[test]
    fn test_code_of_new() {
        assert_eq!(code(&new(5, "x")), 5);
    }

    #[test]
    fn test_code_of_with_code() {
        let err = with_code(9, Some(Leaf::new("y"))).unwrap();
        assert_eq!(code(&err), 9);
    }

    #[test]
    fn test_outer_code_wins() {
        let err = with_code(2, Some(new(1, "x"))).unwrap();
        assert_eq!(code(&err), 2);

        let inner = err.source().unwrap();
        assert_eq!(code(inner), 1);
    }

    #[test]
    fn test_absent_and_uncoded() {
        assert_eq!(code_of(None), 0);
        assert_eq!(code(&Leaf::new("plain")), 0);

        let io_err = std::io::Error::other("boom");
        assert_eq!(code(&io_err), 0);
    }

    #[test]
    fn test_chain_walks_to_root() {
        let err = wrap(500, Some(new(404, "missing")), "lookup failed").unwrap();
        let kinds: Vec<_> = chain(&err).links().map(|(kind, _)| kind).collect();
        assert_eq!(
            kinds,
            vec![LinkKind::Annotated, LinkKind::Coded, LinkKind::Leaf]
        );
    }

    #[test]
    fn test_shadowed_codes_stay_visible() {
        let err = Error::with_code(2, Error::with_code(1, Leaf::new("x")));
        let codes: Vec<_> = chain(&err)
            .filter_map(as_coded)
            .map(|coded| coded.code())
            .collect();
        assert_eq!(codes, vec![2, 1]);
    }

    #[test]
    fn test_only_guru_errors_are_coded() {
        let io_err = std::io::Error::other("teapot");
        assert!(as_coded(&io_err).is_none());
        assert!(as_coded(&Leaf::new("teapot")).is_none());
        assert_eq!(as_coded(&new(418, "teapot")).map(|c| c.code()), Some(418));
    }

    #[test]
    fn test_code_through_smart_pointers() {
        let boxed = Box::new(new(404, "x"));
        assert_eq!(code(&boxed), 404);
        assert_eq!(LinkKind::of(&boxed), LinkKind::Coded);

        let shared = Arc::new(Error::wrap(503, Leaf::new("x"), "busy"));
        assert_eq!(code(&shared), 503);
        assert_eq!(LinkKind::of(&shared), LinkKind::Annotated);
    }

    #[test]
    fn test_boxed_coded_cause() {
        let err = Error::with_code(500, Box::new(new(404, "x")));
        let codes: Vec<_> = chain(&err)
            .filter_map(as_coded)
            .map(|coded| coded.code())
            .collect();
        assert_eq!(codes, vec![500, 404]);
        assert_eq!(chain(&err).skip(1).map(LinkKind::of).next(), Some(LinkKind::Coded));
    }
}
