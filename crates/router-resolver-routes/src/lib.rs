//! # router-resolver-routes
//!
//! A declarative, tree-shaped route table with path matching:
//! - Static segments (`/about`)
//! - Dynamic parameters (`/users/:id`)
//! - Catch-all segments (`/docs/*rest`)
//! - Nested children, index routes, and redirect routes
//!
//! Routes are declared as a tree and compiled once into an immutable
//! [`RouteTable`]. Matching walks the flattened routes in priority order
//! (static before dynamic before catch-all) and returns the full node
//! chain from root to leaf together with the extracted parameters.
//!
//! ## Path Normalization
//!
//! Request paths are normalized before matching, so common mistakes are
//! handled gracefully:
//! - Missing leading slash: `source` → `/source`
//! - Trailing slashes: `/path/` → `/path`
//! - Double slashes: `/path//to` → `/path/to`
//!
//! ## Example
//!
//! ```
//! use router_resolver_routes::{PathMatch, Route, RouteTable};
//!
//! let table = RouteTable::new(vec![
//!     Route::new("/users/:id").with_component("UserPage"),
//!     Route::redirect("/old-users/:id", "/users/:id"),
//! ]);
//!
//! match table.match_path("/users/123").unwrap() {
//!     PathMatch::Route(m) => {
//!         assert_eq!(m.params().get("id"), Some(&"123".to_string()));
//!     }
//!     _ => panic!("expected a route match"),
//! }
//!
//! match table.match_path("/old-users/7").unwrap() {
//!     PathMatch::Redirect { location } => assert_eq!(location, "/users/7"),
//!     _ => panic!("expected a redirect"),
//! }
//! ```

pub mod path;
pub mod route;
pub mod table;

pub use path::{is_valid_path, normalize_path};
pub use route::{Route, RouteError};
pub use table::{PathMatch, RouteMatch, RouteNode, RouteTable};
