use std::fmt;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()))
        .with_test_writer()
        .try_init();
}

/// An uncoded error that adds context on top of a cause, the way an
/// application error type would.
#[derive(Debug)]
pub struct Context {
    pub what: &'static str,
    pub source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.what, self.source)
    }
}

impl std::error::Error for Context {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[allow(dead_code)]
pub fn nest(depth: usize, root: impl std::error::Error + Send + Sync + 'static) -> Context {
    let mut err = Context {
        what: "layer",
        source: Box::new(root),
    };
    for _ in 1..depth {
        err = Context {
            what: "layer",
            source: Box::new(err),
        };
    }
    err
}
