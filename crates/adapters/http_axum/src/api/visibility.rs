//! Page visibility reports.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use infinity_app::ports::{EventPublisher, PageDriver, SettingsStore, Surface};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct VisibilityRequest {
    pub hidden: bool,
}

/// `POST /api/visibility` — `{ "hidden": true }` stops a running loop.
pub async fn update<D, S, U, P>(
    State(state): State<AppState<D, S, U, P>>,
    Json(req): Json<VisibilityRequest>,
) -> StatusCode
where
    D: PageDriver + Send + Sync + 'static,
    S: SettingsStore + Send + Sync + 'static,
    U: Surface + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    state.bridge.on_visibility_changed(req.hidden).await;
    StatusCode::NO_CONTENT
}
