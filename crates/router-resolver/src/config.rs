// File: src/config.rs
// Purpose: Engine configuration, per-call overrides, and built-in defaults

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use maud::{html, PreEscaped};
use serde::Serialize;

use router_resolver_routes::RouteMatch;

use crate::engine::EngineContext;
use crate::error::{EngineError, HookError};
use crate::request::Request;
use crate::store::Store;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Result type for caller-supplied hooks.
pub type HookResult<T> = Result<T, HookError>;

/// Store-construction hook. Owns its arguments so the returned future is
/// freestanding; the [`EngineContext`] argument is the engine's read-only
/// surface.
pub type CreateStoreFn<S> = Arc<
    dyn Fn(EngineContext, Request, RouteMatch) -> BoxFuture<'static, HookResult<S>> + Send + Sync,
>;

/// View serializer: `(request, store, match, with_ids) -> markup`.
pub type RenderViewFn<S> =
    Arc<dyn Fn(&Request, &S, &RouteMatch, bool) -> HookResult<String> + Send + Sync>;

/// State stringifier applied to the store's state snapshot.
pub type StringifyStateFn<State> = Arc<dyn Fn(&State) -> HookResult<String> + Send + Sync>;

/// Error-logging side effect. Must not block the response; a panicking
/// logger is contained by the orchestrator.
pub type LogErrorFn = Arc<dyn Fn(&Request, &EngineError) + Send + Sync>;

/// The engine's hook set. Held once as constructor defaults; `resolve`
/// merges per-call overrides into the effective configuration for one
/// render.
pub(crate) struct EngineConfig<S: Store> {
    pub(crate) create_store: CreateStoreFn<S>,
    pub(crate) with_ids: bool,
    pub(crate) stringify_state: StringifyStateFn<S::State>,
    pub(crate) log_error: LogErrorFn,
    pub(crate) render_view: RenderViewFn<S>,
}

impl<S: Store> Clone for EngineConfig<S> {
    fn clone(&self) -> Self {
        Self {
            create_store: Arc::clone(&self.create_store),
            with_ids: self.with_ids,
            stringify_state: Arc::clone(&self.stringify_state),
            log_error: Arc::clone(&self.log_error),
            render_view: Arc::clone(&self.render_view),
        }
    }
}

impl<S: Store> EngineConfig<S> {
    /// Field-by-field merge: every override present wins, every absent
    /// field falls back to the constructor default. The route table is
    /// not part of the hook set and is never overridable per call.
    pub(crate) fn resolve(&self, overrides: &RenderOptions<S>) -> EngineConfig<S> {
        EngineConfig {
            create_store: overrides
                .create_store
                .clone()
                .unwrap_or_else(|| Arc::clone(&self.create_store)),
            with_ids: overrides.with_ids.unwrap_or(self.with_ids),
            stringify_state: overrides
                .stringify_state
                .clone()
                .unwrap_or_else(|| Arc::clone(&self.stringify_state)),
            log_error: overrides
                .log_error
                .clone()
                .unwrap_or_else(|| Arc::clone(&self.log_error)),
            render_view: overrides
                .render_view
                .clone()
                .unwrap_or_else(|| Arc::clone(&self.render_view)),
        }
    }
}

/// Per-call overrides for [`Engine::render_with`](crate::Engine::render_with).
/// Applies to that call only; the engine's defaults are untouched.
pub struct RenderOptions<S: Store> {
    pub(crate) create_store: Option<CreateStoreFn<S>>,
    pub(crate) with_ids: Option<bool>,
    pub(crate) stringify_state: Option<StringifyStateFn<S::State>>,
    pub(crate) log_error: Option<LogErrorFn>,
    pub(crate) render_view: Option<RenderViewFn<S>>,
}

impl<S: Store> Default for RenderOptions<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Store> RenderOptions<S> {
    pub fn new() -> Self {
        Self {
            create_store: None,
            with_ids: None,
            stringify_state: None,
            log_error: None,
            render_view: None,
        }
    }

    pub fn create_store<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(EngineContext, Request, RouteMatch) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult<S>> + Send + 'static,
    {
        self.create_store = Some(Arc::new(move |cx, req, m| Box::pin(hook(cx, req, m))));
        self
    }

    pub fn with_ids(mut self, with_ids: bool) -> Self {
        self.with_ids = Some(with_ids);
        self
    }

    pub fn stringify_state<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S::State) -> HookResult<String> + Send + Sync + 'static,
    {
        self.stringify_state = Some(Arc::new(hook));
        self
    }

    pub fn log_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Request, &EngineError) + Send + Sync + 'static,
    {
        self.log_error = Some(Arc::new(hook));
        self
    }

    pub fn render_view<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Request, &S, &RouteMatch, bool) -> HookResult<String> + Send + Sync + 'static,
    {
        self.render_view = Some(Arc::new(hook));
        self
    }
}

// -- Built-in defaults --

pub(crate) fn default_stringify_state<State: Serialize>(state: &State) -> HookResult<String> {
    serde_json::to_string(state).map_err(HookError::from)
}

/// Default view serializer: the matched chain as nested component
/// shells. Stands in for a real markup serializer; servers that embed
/// actual views supply their own hook.
pub(crate) fn default_render_view<S: Store>(
    _req: &Request,
    _store: &S,
    matched: &RouteMatch,
    with_ids: bool,
) -> HookResult<String> {
    let mut markup = String::new();
    for (depth, node) in matched.chain().iter().enumerate().rev() {
        let component = node.component().unwrap_or("view");
        let inner = PreEscaped(markup);
        markup = if with_ids {
            html! { div id=(format!("view-{}", depth)) data-component=(component) { (inner) } }
                .into_string()
        } else {
            html! { div data-component=(component) { (inner) } }.into_string()
        };
    }
    Ok(markup)
}
