//! Engine construction and the render orchestrator.

use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use router_resolver_routes::{RouteMatch, RouteTable};

use crate::config::{
    default_render_view, default_stringify_state, EngineConfig, HookResult, RenderOptions,
};
use crate::error::{ConfigError, EngineError};
use crate::matcher::{resolve_match, MatchResult};
use crate::outcome::{classify, RenderOutcome};
use crate::request::Request;
use crate::store::{hydrate, Store};

/// The engine's read-only surface, passed to the store-construction hook
/// as an explicit argument so callers can reuse engine-held state
/// without a back-reference to the engine itself.
#[derive(Clone)]
pub struct EngineContext {
    routes: Arc<RouteTable>,
    with_ids: bool,
}

impl EngineContext {
    /// The engine's route table.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// The effective `with_ids` flag for this render call.
    pub fn with_ids(&self) -> bool {
        self.with_ids
    }
}

/// Resolves request paths against an immutable route table, hydrates a
/// per-request state store, and classifies every outcome into one of
/// four response shapes.
///
/// An engine holds only the route table and the default hook set, both
/// read-only after construction — concurrent [`render`](Self::render)
/// calls share nothing mutable and need no synchronization.
pub struct Engine<S: Store> {
    routes: Arc<RouteTable>,
    defaults: EngineConfig<S>,
}

impl<S: Store> Engine<S> {
    /// Starts building an engine for the given route table. The table is
    /// fixed for the engine's lifetime and not overridable per call.
    pub fn builder(routes: RouteTable) -> EngineBuilder<S> {
        EngineBuilder {
            routes,
            create_store: None,
            with_ids: false,
            stringify_state: None,
            log_error: None,
            render_view: None,
        }
    }

    /// Renders one request with the engine's default configuration.
    pub async fn render(&self, req: &Request) -> RenderOutcome {
        self.render_with(req, RenderOptions::new()).await
    }

    /// Renders one request, merging `overrides` over the defaults for
    /// this call only.
    ///
    /// Always settles into exactly one [`RenderOutcome`]: matching,
    /// hydration, and serialization failures are logged and classified,
    /// never returned as errors and never left pending.
    pub async fn render_with(&self, req: &Request, overrides: RenderOptions<S>) -> RenderOutcome {
        let effective = self.defaults.resolve(&overrides);

        match self.try_render(&effective, req).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(
                    path = %req.path(),
                    stage = err.stage(),
                    error = %err,
                    "render failed"
                );
                // The configured logger is a side effect that must never
                // mask the classified outcome, so panics are contained.
                let _ = catch_unwind(AssertUnwindSafe(|| (effective.log_error)(req, &err)));
                classify(err, req.path())
            }
        }
    }

    /// The happy-path sequence: match, hydrate, serialize view, then
    /// serialize state. Strict total order; nothing is skipped,
    /// reordered, or retried.
    async fn try_render(
        &self,
        cfg: &EngineConfig<S>,
        req: &Request,
    ) -> Result<RenderOutcome, EngineError> {
        let matched = match resolve_match(&self.routes, req.path())? {
            MatchResult::NoMatch => {
                tracing::debug!(path = %req.path(), "no route matched");
                return Ok(RenderOutcome::NotFound {
                    path: req.path().to_string(),
                });
            }
            MatchResult::Redirect { location } => {
                tracing::debug!(path = %req.path(), location = %location, "redirect matched");
                return Ok(RenderOutcome::Redirect { path: location });
            }
            MatchResult::Matched(matched) => matched,
        };
        tracing::debug!(path = %req.path(), pattern = %matched.leaf().pattern(), "route matched");

        let context = EngineContext {
            routes: Arc::clone(&self.routes),
            with_ids: cfg.with_ids,
        };
        let store = hydrate(&cfg.create_store, context, req, &matched).await?;

        let html =
            (cfg.render_view)(req, &store, &matched, cfg.with_ids).map_err(EngineError::Render)?;
        let prefetch = (cfg.stringify_state)(&store.state()).map_err(EngineError::Render)?;

        Ok(RenderOutcome::Success { html, prefetch })
    }
}

/// Builder for [`Engine`]. The route table is required up front; the
/// store-construction hook is required before [`build`](Self::build);
/// every other hook has a built-in default.
pub struct EngineBuilder<S: Store> {
    routes: RouteTable,
    create_store: Option<crate::config::CreateStoreFn<S>>,
    with_ids: bool,
    stringify_state: Option<crate::config::StringifyStateFn<S::State>>,
    log_error: Option<crate::config::LogErrorFn>,
    render_view: Option<crate::config::RenderViewFn<S>>,
}

impl<S: Store> EngineBuilder<S> {
    /// Sets the store-construction hook (required). Invoked exactly once
    /// per matched render call.
    pub fn create_store<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(EngineContext, Request, RouteMatch) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult<S>> + Send + 'static,
    {
        self.create_store = Some(Arc::new(move |cx, req, m| Box::pin(hook(cx, req, m))));
        self
    }

    /// Whether the view serializer decorates markup with ids. Default:
    /// false.
    pub fn with_ids(mut self, with_ids: bool) -> Self {
        self.with_ids = with_ids;
        self
    }

    /// Replaces the default `serde_json` state stringifier.
    pub fn stringify_state<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S::State) -> HookResult<String> + Send + Sync + 'static,
    {
        self.stringify_state = Some(Arc::new(hook));
        self
    }

    /// Replaces the default no-op error logger.
    pub fn log_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Request, &EngineError) + Send + Sync + 'static,
    {
        self.log_error = Some(Arc::new(hook));
        self
    }

    /// Replaces the default view serializer.
    pub fn render_view<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Request, &S, &RouteMatch, bool) -> HookResult<String> + Send + Sync + 'static,
    {
        self.render_view = Some(Arc::new(hook));
        self
    }

    /// Builds the engine, failing when the required store-construction
    /// hook was never supplied.
    pub fn build(self) -> Result<Engine<S>, ConfigError> {
        let create_store = self.create_store.ok_or(ConfigError::MissingCreateStore)?;

        Ok(Engine {
            routes: Arc::new(self.routes),
            defaults: EngineConfig {
                create_store,
                with_ids: self.with_ids,
                stringify_state: self
                    .stringify_state
                    .unwrap_or_else(|| Arc::new(|state| default_stringify_state(state))),
                log_error: self.log_error.unwrap_or_else(|| Arc::new(|_req, _err| {})),
                render_view: self
                    .render_view
                    .unwrap_or_else(|| Arc::new(|req, store, m, ids| default_render_view(req, store, m, ids))),
            },
        })
    }
}
