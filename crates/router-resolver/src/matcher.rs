//! Route matcher adapter.
//!
//! Wraps the route-table library and normalizes its outcomes into
//! [`MatchResult`]. A table-level error (malformed tree) is routed to
//! the classifier as a matching failure — it is not a no-match.

use router_resolver_routes::{PathMatch, RouteMatch, RouteTable};

use crate::error::EngineError;

/// Normalized outcome of matching a request path.
#[derive(Debug, Clone)]
pub enum MatchResult {
    /// No route answered the path.
    NoMatch,
    /// A redirect route answered, with parameters already substituted
    /// into the location.
    Redirect { location: String },
    /// A page route answered.
    Matched(RouteMatch),
}

pub(crate) fn resolve_match(table: &RouteTable, path: &str) -> Result<MatchResult, EngineError> {
    match table.match_path(path) {
        Ok(PathMatch::None) => Ok(MatchResult::NoMatch),
        Ok(PathMatch::Redirect { location }) => Ok(MatchResult::Redirect { location }),
        Ok(PathMatch::Route(matched)) => Ok(MatchResult::Matched(matched)),
        Err(err) => Err(EngineError::matching(err)),
    }
}
