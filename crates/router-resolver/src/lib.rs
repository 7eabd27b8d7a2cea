//! # router-resolver
//!
//! Resolves an incoming request path against a declarative, tree-shaped
//! route table, asynchronously hydrates an application-state store for
//! the request, and produces one of four render outcomes — success
//! markup, redirect, not-found, or error — that a server adapter
//! translates into an HTTP response.
//!
//! The engine is framework-agnostic: it owns no network listener, no
//! templating engine, and no reducers. Callers supply the route table
//! and an async store-construction hook; view and state serialization
//! have built-in defaults and can be replaced per engine or per call.
//!
//! ## Example
//!
//! ```
//! use router_resolver::{Engine, Request, Route, RouteTable, Store};
//! use serde::Serialize;
//!
//! #[derive(Clone, Serialize)]
//! struct AppState {
//!     greeting: String,
//! }
//!
//! struct AppStore {
//!     state: AppState,
//! }
//!
//! impl Store for AppStore {
//!     type State = AppState;
//!     fn state(&self) -> AppState {
//!         self.state.clone()
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let routes = RouteTable::new(vec![
//!     Route::new("/test")
//!         .with_component("Page")
//!         .with_index(Route::index("Home")),
//!     Route::redirect("source", "target"),
//! ]);
//!
//! let engine = Engine::builder(routes)
//!     .create_store(|_cx, _req, _matched| async {
//!         Ok(AppStore {
//!             state: AppState { greeting: "hello".to_string() },
//!         })
//!     })
//!     .build()
//!     .unwrap();
//!
//! let outcome = engine.render(&Request::new("source")).await;
//! assert_eq!(outcome.status(), 302);
//!
//! let outcome = engine.render(&Request::new("/test")).await;
//! assert_eq!(outcome.status(), 200);
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod outcome;
pub mod request;
pub mod store;

pub use config::{BoxFuture, HookResult, RenderOptions};
pub use engine::{Engine, EngineBuilder, EngineContext};
pub use error::{BoxError, ConfigError, EngineError, HookError};
pub use matcher::MatchResult;
pub use outcome::{RenderOutcome, ResponsePayload};
pub use request::Request;
pub use store::Store;

// Re-export the route-table surface so downstreams can declare routes
// without depending on the routes crate directly.
pub use router_resolver_routes as routes;
pub use router_resolver_routes::{PathMatch, Route, RouteMatch, RouteTable};
