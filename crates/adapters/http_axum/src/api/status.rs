//! Controller status.

use axum::Json;
use axum::extract::State;

use infinity_app::controller::Snapshot;
use infinity_app::ports::{EventPublisher, PageDriver, SettingsStore, Surface};

use crate::state::AppState;

/// `GET /api/state` — whether the loop runs, its phase and configuration.
pub async fn get<D, S, U, P>(State(state): State<AppState<D, S, U, P>>) -> Json<Snapshot>
where
    D: PageDriver + Send + Sync + 'static,
    S: SettingsStore + Send + Sync + 'static,
    U: Surface + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    Json(state.controller().snapshot())
}
