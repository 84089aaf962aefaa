//! Settings read and write.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;

use infinity_app::ports::{EventPublisher, PageDriver, SettingValues, SettingsStore, Surface};
use infinity_domain::settings::{self, SettingKey};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for updating one setting.
#[derive(Deserialize)]
pub struct UpdateSettingRequest {
    pub value: Value,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<SettingValues>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    NoContent,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/settings` — every stored setting.
pub async fn list<D, S, U, P>(
    State(state): State<AppState<D, S, U, P>>,
) -> Result<ListResponse, ApiError>
where
    D: PageDriver + Send + Sync + 'static,
    S: SettingsStore + Send + Sync + 'static,
    U: Surface + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let values = state.controller().store().load(&SettingKey::ALL).await?;
    Ok(ListResponse::Ok(Json(values)))
}

/// `PUT /api/settings/{key}` — save a value, then let the loop react to it.
pub async fn update<D, S, U, P>(
    State(state): State<AppState<D, S, U, P>>,
    Path(key): Path<String>,
    Json(req): Json<UpdateSettingRequest>,
) -> Result<UpdateResponse, ApiError>
where
    D: PageDriver + Send + Sync + 'static,
    S: SettingsStore + Send + Sync + 'static,
    U: Surface + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let key = SettingKey::from_str(&key)?;
    settings::validate(key, &req.value)?;
    state.controller().store().save(key, req.value).await?;
    state.bridge.apply_setting_change(key).await?;
    Ok(UpdateResponse::NoContent)
}
