//! Compiled route table and path matching.

use std::collections::HashMap;
use std::sync::Arc;

use crate::path::normalize_path;
use crate::route::{parse_segments, Route, RouteError, Segment};

/// One compiled node of a matched chain: the full pattern it answers to
/// and the component label the view layer renders for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNode {
    pattern: String,
    component: Option<String>,
}

impl RouteNode {
    /// Full pattern, joined from the root (e.g. `/docs/:slug`).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Component label, if the route declared one.
    pub fn component(&self) -> Option<&str> {
        self.component.as_deref()
    }
}

/// A successful match: the node chain from root to leaf (the index child
/// included on exact matches) plus the extracted parameters.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    chain: Vec<Arc<RouteNode>>,
    params: HashMap<String, String>,
}

impl RouteMatch {
    /// The matched nodes, outermost first.
    pub fn chain(&self) -> &[Arc<RouteNode>] {
        &self.chain
    }

    /// Parameters extracted from the path.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// The innermost matched node.
    pub fn leaf(&self) -> &RouteNode {
        self.chain.last().expect("a match always has at least one node")
    }
}

/// Result of resolving a path against the table.
#[derive(Debug, Clone)]
pub enum PathMatch {
    /// No route answered the path.
    None,
    /// A redirect route answered; `location` already has parameters
    /// substituted.
    Redirect { location: String },
    /// A page route answered.
    Route(RouteMatch),
}

#[derive(Debug, Clone)]
enum Target {
    Page,
    Redirect(String),
}

#[derive(Debug, Clone)]
struct FlatRoute {
    segments: Vec<Segment>,
    chain: Vec<Arc<RouteNode>>,
    target: Target,
    priority: usize,
}

/// An immutable, compiled route table.
///
/// Construction flattens the declarative tree into priority-ordered flat
/// routes. The table is never mutated afterwards and is safe to share
/// across concurrent lookups.
///
/// A malformed tree does not fail construction; the error is kept inside
/// the table and returned from every [`match_path`](Self::match_path)
/// call, so callers that classify failures per request see it there.
#[derive(Debug, Clone)]
pub struct RouteTable {
    compiled: Result<Vec<FlatRoute>, RouteError>,
}

impl RouteTable {
    /// Compiles a route tree into a table.
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            compiled: compile(&routes),
        }
    }

    /// Resolves a path against the table.
    ///
    /// The path is normalized first (`source` and `/source/` both resolve
    /// like `/source`). Routes are tried in priority order — static
    /// before dynamic before catch-all — and the first match wins.
    pub fn match_path(&self, path: &str) -> Result<PathMatch, RouteError> {
        let flat = self.compiled.as_ref().map_err(Clone::clone)?;

        let normalized = normalize_path(path);
        let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();

        let matched = flat.iter().find_map(|route| {
            match_segments(&route.segments, &segments).map(|params| (route, params))
        });

        Ok(match matched {
            None => PathMatch::None,
            Some((route, params)) => match &route.target {
                Target::Redirect(target) => PathMatch::Redirect {
                    location: substitute_params(target, &params),
                },
                Target::Page => PathMatch::Route(RouteMatch {
                    chain: route.chain.clone(),
                    params,
                }),
            },
        })
    }
}

fn compile(routes: &[Route]) -> Result<Vec<FlatRoute>, RouteError> {
    let mut flat = Vec::new();
    for route in routes {
        flatten(route, "/", &[], &mut flat)?;
    }
    // Stable sort: equal priorities keep declaration order.
    flat.sort_by_key(|r| r.priority);
    Ok(flat)
}

fn flatten(
    route: &Route,
    parent: &str,
    ancestors: &[Arc<RouteNode>],
    out: &mut Vec<FlatRoute>,
) -> Result<(), RouteError> {
    if route.pattern.is_empty() {
        return Err(RouteError::InvalidPattern {
            pattern: String::new(),
            reason: "empty pattern (index routes go in with_index)".to_string(),
        });
    }

    let full = join_patterns(parent, &route.pattern);
    let segments = parse_segments(&full)?;
    let priority = priority_of(&segments);

    let node = Arc::new(RouteNode {
        pattern: full.clone(),
        component: route.component.clone(),
    });
    let mut chain = ancestors.to_vec();
    chain.push(node);

    if let Some(target) = &route.redirect_to {
        if target.is_empty() {
            return Err(RouteError::EmptyRedirectTarget { pattern: full });
        }
        out.push(FlatRoute {
            segments,
            chain,
            target: Target::Redirect(target.clone()),
            priority,
        });
        return Ok(());
    }

    // An exact match renders this node, with the index child appended
    // when one was declared.
    let mut exact_chain = chain.clone();
    if let Some(index) = &route.index {
        exact_chain.push(Arc::new(RouteNode {
            pattern: full.clone(),
            component: index.component.clone(),
        }));
    }
    out.push(FlatRoute {
        segments,
        chain: exact_chain,
        target: Target::Page,
        priority,
    });

    for child in &route.children {
        flatten(child, &full, &chain, out)?;
    }
    Ok(())
}

/// Joins a child pattern onto its parent. Absolute children replace the
/// parent prefix; relative children extend it.
fn join_patterns(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        normalize_path(child).into_owned()
    } else {
        normalize_path(&format!("{}/{}", parent, child)).into_owned()
    }
}

/// Priority for matching order; lower is matched first.
///
/// Static routes win over dynamic routes, dynamic routes win over
/// catch-alls; within a class, shallower and less-dynamic patterns win.
fn priority_of(segments: &[Segment]) -> usize {
    let depth = segments.len();
    let dynamic = segments
        .iter()
        .filter(|s| matches!(s, Segment::Param(_)))
        .count();
    let has_catch_all = segments.iter().any(|s| matches!(s, Segment::CatchAll(_)));

    if has_catch_all {
        1000 + depth
    } else if dynamic > 0 {
        dynamic + depth
    } else {
        0
    }
}

fn match_segments(pattern: &[Segment], path: &[&str]) -> Option<HashMap<String, String>> {
    let mut params = HashMap::new();
    let mut i = 0;

    for segment in pattern {
        match segment {
            Segment::CatchAll(name) => {
                // Consumes the rest of the path; needs at least one
                // remaining segment. Validated to be last at compile.
                if i >= path.len() {
                    return None;
                }
                params.insert(name.clone(), path[i..].join("/"));
                return Some(params);
            }
            Segment::Param(name) => {
                let value = path.get(i)?;
                params.insert(name.clone(), (*value).to_string());
                i += 1;
            }
            Segment::Static(text) => {
                if path.get(i).copied() != Some(text.as_str()) {
                    return None;
                }
                i += 1;
            }
        }
    }

    (i == path.len()).then_some(params)
}

/// Substitutes matched parameters into a redirect target.
fn substitute_params(target: &str, params: &HashMap<String, String>) -> String {
    params.iter().fold(target.to_string(), |acc, (name, value)| {
        acc.replace(&format!(":{}", name), value)
    })
}
