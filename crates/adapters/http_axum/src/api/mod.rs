//! JSON API handler modules.

pub mod control;
pub mod settings;
pub mod sse;
pub mod status;
pub mod visibility;

use axum::Router;
use axum::routing::{get, post, put};

use infinity_app::ports::{EventPublisher, PageDriver, SettingsStore, Surface};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<D, S, U, P>() -> Router<AppState<D, S, U, P>>
where
    D: PageDriver + Send + Sync + 'static,
    S: SettingsStore + Send + Sync + 'static,
    U: Surface + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/state", get(status::get::<D, S, U, P>))
        .route("/control", post(control::dispatch::<D, S, U, P>))
        .route("/settings", get(settings::list::<D, S, U, P>))
        .route("/settings/{key}", put(settings::update::<D, S, U, P>))
        .route("/visibility", post(visibility::update::<D, S, U, P>))
        .route("/events/stream", get(sse::stream::<D, S, U, P>))
}
