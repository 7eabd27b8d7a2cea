//! Application-state store abstraction and the hydration step.

use serde::Serialize;

use router_resolver_routes::RouteMatch;

use crate::config::CreateStoreFn;
use crate::engine::EngineContext;
use crate::error::EngineError;
use crate::request::Request;

/// An application-state store, hydrated once per render call.
///
/// `state()` returns a point-in-time snapshot of the store's state; the
/// default state stringifier serializes that snapshot with `serde_json`
/// to produce the prefetch payload.
pub trait Store: Send + 'static {
    type State: Serialize + Send;

    fn state(&self) -> Self::State;
}

/// Invokes the store-construction hook exactly once and awaits the
/// returned future. A rejection is wrapped with hydration provenance and
/// otherwise propagated untouched — message, status, and source all
/// survive for the classifier.
pub(crate) async fn hydrate<S: Store>(
    create_store: &CreateStoreFn<S>,
    context: EngineContext,
    req: &Request,
    matched: &RouteMatch,
) -> Result<S, EngineError> {
    create_store(context, req.clone(), matched.clone())
        .await
        .map_err(EngineError::Hydration)
}
