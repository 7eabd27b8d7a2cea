//! Route declarations and pattern segment parsing.

use thiserror::Error;

/// Error produced while compiling a route tree.
///
/// Compilation happens inside [`RouteTable::new`](crate::RouteTable::new),
/// but a malformed tree is reported from `match_path` rather than at
/// construction, so callers that classify failures per request see it
/// there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A pattern could not be parsed into segments.
    #[error("invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A redirect route was declared without a target.
    #[error("redirect route {pattern:?} has an empty target")]
    EmptyRedirectTarget { pattern: String },
}

/// One node of the declarative route tree.
///
/// A route carries a path pattern (absolute like `/users/:id`, or
/// relative like `settings`, joined onto the parent pattern), an optional
/// component label for the view layer, an optional index child rendered
/// on exact matches, an optional redirect target, and nested children.
///
/// Built with consuming `with_*` methods:
///
/// ```
/// use router_resolver_routes::Route;
///
/// let route = Route::new("/docs")
///     .with_component("DocsLayout")
///     .with_index(Route::index("DocsHome"))
///     .with_child(Route::new(":slug").with_component("DocPage"));
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    pub(crate) pattern: String,
    pub(crate) component: Option<String>,
    pub(crate) redirect_to: Option<String>,
    pub(crate) index: Option<Box<Route>>,
    pub(crate) children: Vec<Route>,
}

impl Route {
    /// Creates a route with the given path pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            component: None,
            redirect_to: None,
            index: None,
            children: Vec::new(),
        }
    }

    /// Creates an index route: no pattern of its own, rendered when the
    /// parent pattern matches the path exactly.
    pub fn index(component: impl Into<String>) -> Self {
        Self {
            pattern: String::new(),
            component: Some(component.into()),
            redirect_to: None,
            index: None,
            children: Vec::new(),
        }
    }

    /// Creates a redirect route. Parameters matched by `pattern` are
    /// substituted into `target`:
    ///
    /// ```
    /// use router_resolver_routes::{PathMatch, Route, RouteTable};
    ///
    /// let table = RouteTable::new(vec![Route::redirect("/blog/:slug", "/articles/:slug")]);
    /// match table.match_path("/blog/hello").unwrap() {
    ///     PathMatch::Redirect { location } => assert_eq!(location, "/articles/hello"),
    ///     _ => panic!("expected a redirect"),
    /// }
    /// ```
    pub fn redirect(pattern: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            component: None,
            redirect_to: Some(target.into()),
            index: None,
            children: Vec::new(),
        }
    }

    /// Sets the component label for this route.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Sets the index child, rendered on exact matches of this route.
    pub fn with_index(mut self, index: Route) -> Self {
        self.index = Some(Box::new(index));
        self
    }

    /// Adds a nested child route.
    pub fn with_child(mut self, child: Route) -> Self {
        self.children.push(child);
        self
    }

    /// Adds multiple nested child routes.
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Route>,
    {
        self.children.extend(children);
        self
    }

    /// The pattern as declared (before joining onto the parent).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The component label, if any.
    pub fn component(&self) -> Option<&str> {
        self.component.as_deref()
    }
}

/// A typed pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Literal text, matched verbatim.
    Static(String),
    /// `:name` — captures exactly one path segment.
    Param(String),
    /// `*name` — captures one or more trailing segments. Must be last.
    CatchAll(String),
}

/// Parses a full (joined, normalized) pattern into typed segments.
pub(crate) fn parse_segments(pattern: &str) -> Result<Vec<Segment>, RouteError> {
    let invalid = |reason: &str| RouteError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    };

    let raw: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let last = raw.len().saturating_sub(1);

    raw.iter()
        .enumerate()
        .map(|(idx, seg)| {
            if let Some(name) = seg.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid("parameter segment is missing a name"));
                }
                Ok(Segment::Param(name.to_string()))
            } else if let Some(name) = seg.strip_prefix('*') {
                if name.is_empty() {
                    return Err(invalid("catch-all segment is missing a name"));
                }
                if idx != last {
                    return Err(invalid("catch-all segment must be last"));
                }
                Ok(Segment::CatchAll(name.to_string()))
            } else {
                Ok(Segment::Static((*seg).to_string()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_segments() {
        let segments = parse_segments("/users/new").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Static("users".to_string()),
                Segment::Static("new".to_string()),
            ]
        );
    }

    #[test]
    fn parses_params_and_catch_all() {
        let segments = parse_segments("/docs/:section/*rest").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Static("docs".to_string()),
                Segment::Param("section".to_string()),
                Segment::CatchAll("rest".to_string()),
            ]
        );
    }

    #[test]
    fn root_pattern_has_no_segments() {
        assert!(parse_segments("/").unwrap().is_empty());
    }

    #[test]
    fn rejects_unnamed_param() {
        let err = parse_segments("/users/:").unwrap_err();
        assert!(matches!(err, RouteError::InvalidPattern { .. }));
    }

    #[test]
    fn rejects_catch_all_before_end() {
        let err = parse_segments("/docs/*rest/extra").unwrap_err();
        assert!(matches!(err, RouteError::InvalidPattern { .. }));
    }
}
