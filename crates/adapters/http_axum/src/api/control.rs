//! Control messages from remote surfaces.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use infinity_app::ports::{EventPublisher, PageDriver, SettingsStore, Surface};
use infinity_domain::command::ControlMessage;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the control endpoint.
pub enum DispatchResponse {
    Accepted,
}

impl IntoResponse for DispatchResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Accepted => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `POST /api/control` — dispatch `{ "action": …, "args": … }`.
pub async fn dispatch<D, S, U, P>(
    State(state): State<AppState<D, S, U, P>>,
    Json(message): Json<ControlMessage>,
) -> Result<DispatchResponse, ApiError>
where
    D: PageDriver + Send + Sync + 'static,
    S: SettingsStore + Send + Sync + 'static,
    U: Surface + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    state.bridge.dispatch(message).await?;
    Ok(DispatchResponse::Accepted)
}
