//! Render outcomes and the transport payload boundary.

use serde::Serialize;

use crate::error::EngineError;

/// Terminal, caller-visible result of one render call. Exactly one per
/// call; immutable once constructed.
#[derive(Debug)]
pub enum RenderOutcome {
    /// The route matched and both serializations succeeded. `prefetch`
    /// is the stringified store state, for embedding so a client can
    /// resume without re-fetching.
    Success { html: String, prefetch: String },
    /// A redirect route answered the path.
    Redirect { path: String },
    /// No route answered the path.
    NotFound { path: String },
    /// A matching, hydration, or serialization failure, classified. The
    /// cause is kept for diagnostics and never serialized.
    Error {
        status: u16,
        message: String,
        path: String,
        cause: EngineError,
    },
}

impl RenderOutcome {
    /// The HTTP status a server adapter responds with.
    pub fn status(&self) -> u16 {
        match self {
            Self::Success { .. } => 200,
            Self::Redirect { .. } => 302,
            Self::NotFound { .. } => 404,
            Self::Error { status, .. } => *status,
        }
    }

    /// Converts the outcome into the wire-contract payload. Exhaustive:
    /// every outcome has exactly one payload shape.
    pub fn to_payload(&self) -> ResponsePayload {
        match self {
            Self::Success { html, prefetch } => ResponsePayload::Success {
                status: 200,
                html: html.clone(),
                prefetch: prefetch.clone(),
            },
            Self::Redirect { path } => ResponsePayload::Redirect {
                status: 302,
                path: path.clone(),
            },
            Self::NotFound { path } => ResponsePayload::NotFound {
                status: 404,
                message: format!("router-resolver: Path {} not found", path),
            },
            Self::Error {
                status,
                message,
                path,
                ..
            } => ResponsePayload::Error {
                status: *status,
                message: message.clone(),
                path: path.clone(),
            },
        }
    }
}

/// The wire contract a server adapter translates into an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    Success {
        status: u16,
        html: String,
        prefetch: String,
    },
    Redirect {
        status: u16,
        path: String,
    },
    NotFound {
        status: u16,
        message: String,
    },
    Error {
        status: u16,
        message: String,
        path: String,
    },
}

/// Maps an intercepted failure to the error outcome: an explicit status
/// carried by the error surfaces verbatim, everything else is a 500.
pub(crate) fn classify(err: EngineError, path: &str) -> RenderOutcome {
    RenderOutcome::Error {
        status: err.status().unwrap_or(500),
        message: err.message().to_string(),
        path: path.to_string(),
        cause: err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::HookError;

    #[test]
    fn explicit_status_surfaces_verbatim() {
        let err = EngineError::Matching(HookError::new("moved").with_status(301));
        let outcome = classify(err, "/old");
        assert_eq!(outcome.status(), 301);
    }

    #[test]
    fn plain_errors_default_to_500() {
        let err = EngineError::Hydration(HookError::new("backend down"));
        match classify(err, "/page") {
            RenderOutcome::Error {
                status,
                message,
                path,
                cause,
            } => {
                assert_eq!(status, 500);
                assert_eq!(message, "backend down");
                assert_eq!(path, "/page");
                assert_eq!(cause.stage(), "hydration");
            }
            other => panic!("expected an error outcome, got {other:?}"),
        }
    }

    #[test]
    fn not_found_payload_carries_the_documented_message() {
        let outcome = RenderOutcome::NotFound {
            path: "/unknown".to_string(),
        };
        assert_eq!(
            outcome.to_payload(),
            ResponsePayload::NotFound {
                status: 404,
                message: "router-resolver: Path /unknown not found".to_string(),
            }
        );
    }

    #[test]
    fn error_payload_never_serializes_the_cause() {
        let err = EngineError::Render(HookError::new("bad state"));
        let payload = classify(err, "/page").to_payload();

        let json = serde_json::to_value(&payload).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        // serde_json orders object keys alphabetically.
        assert_eq!(keys, vec!["message", "path", "status"]);
    }
}
