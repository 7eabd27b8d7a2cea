//! Error taxonomy for the render pipeline.
//!
//! Hooks fail with [`HookError`]; the orchestrator wraps each failure in
//! an [`EngineError`] variant naming the stage it came from. Stage
//! provenance drives logging only — status selection always reads the
//! inner error, so a status discovered deep inside matching or hydration
//! surfaces on the classified outcome verbatim.

use thiserror::Error;

use router_resolver_routes::RouteError;

/// Boxed error used as the source of hook failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure produced by a caller-supplied hook (store construction, view
/// serialization, state stringification).
///
/// Carries the message shown to the classifier, an optional explicit
/// HTTP status, and the original error as source:
///
/// ```
/// use router_resolver::HookError;
///
/// let err = HookError::new("account suspended").with_status(403);
/// assert_eq!(err.status(), Some(403));
/// assert_eq!(err.message(), "account suspended");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HookError {
    message: String,
    status: Option<u16>,
    #[source]
    source: Option<BoxError>,
}

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Attaches an explicit HTTP status; the classifier uses it verbatim
    /// instead of the 500 default.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attaches the original error as source.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<anyhow::Error> for HookError {
    fn from(err: anyhow::Error) -> Self {
        Self {
            message: err.to_string(),
            status: None,
            source: Some(err.into()),
        }
    }
}

impl From<serde_json::Error> for HookError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
            status: None,
            source: Some(Box::new(err)),
        }
    }
}

/// Classified failure of one render call, tagged with the stage that
/// produced it.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The route table itself could not be matched (malformed tree or a
    /// matcher-internal failure). Not a no-match.
    #[error("route matching failed: {0}")]
    Matching(#[source] HookError),

    /// The store-construction hook rejected.
    #[error("store hydration failed: {0}")]
    Hydration(#[source] HookError),

    /// View or state serialization failed.
    #[error("render serialization failed: {0}")]
    Render(#[source] HookError),
}

impl EngineError {
    pub(crate) fn matching(err: RouteError) -> Self {
        Self::Matching(HookError::new(err.to_string()).with_source(err))
    }

    fn inner(&self) -> &HookError {
        match self {
            Self::Matching(err) | Self::Hydration(err) | Self::Render(err) => err,
        }
    }

    /// Explicit status carried by the failing hook, if any.
    pub fn status(&self) -> Option<u16> {
        self.inner().status()
    }

    /// The inner error's message text (what the classifier reports).
    pub fn message(&self) -> &str {
        self.inner().message()
    }

    /// The stage this failure came from, for logging.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Matching(_) => "matching",
            Self::Hydration(_) => "hydration",
            Self::Render(_) => "render",
        }
    }
}

/// Construction-time configuration failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The required store-construction hook was never supplied.
    #[error("engine configuration is missing the store-construction hook")]
    MissingCreateStore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anyhow_interop_preserves_the_message() {
        let err: HookError = anyhow::anyhow!("database unreachable").into();
        assert_eq!(err.message(), "database unreachable");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn status_and_message_read_through_the_stage_wrapper() {
        let err = EngineError::Hydration(HookError::new("forbidden").with_status(403));
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.message(), "forbidden");
        assert_eq!(err.stage(), "hydration");
    }

    #[test]
    fn matching_errors_keep_the_route_error_as_source() {
        let route_err = RouteError::EmptyRedirectTarget {
            pattern: "/old".to_string(),
        };
        let err = EngineError::matching(route_err.clone());
        assert_eq!(err.message(), route_err.to_string());
        assert!(std::error::Error::source(&err).is_some());
    }
}
