//! Shared fixtures for handler tests.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use infinity_adapter_settings_toml::TomlSettingsStore;
use infinity_adapter_virtual::{VirtualPage, VirtualSurface};
use infinity_app::bridge::ControlBridge;
use infinity_app::controller::{AutomationController, ControllerOptions};
use infinity_app::event_bus::InProcessEventBus;
use infinity_app::ports::SettingsStore;
use infinity_domain::settings::SettingKey;

use crate::state::AppState;

pub(crate) type TestState = AppState<
    Arc<VirtualPage>,
    Arc<TomlSettingsStore>,
    Arc<VirtualSurface>,
    Arc<InProcessEventBus>,
>;

/// App state wired to a virtual page and an in-memory settings store.
pub(crate) struct TestApp {
    pub state: TestState,
    pub page: Arc<VirtualPage>,
    pub store: Arc<TomlSettingsStore>,
    pub surface: Arc<VirtualSurface>,
    pub event_bus: Arc<InProcessEventBus>,
}

impl TestApp {
    pub fn new() -> Self {
        let page = Arc::new(VirtualPage::new(Duration::from_secs(2)));
        let store = Arc::new(TomlSettingsStore::in_memory());
        let surface = Arc::new(VirtualSurface::default());
        let event_bus = Arc::new(InProcessEventBus::new(64));
        let controller = AutomationController::with_options(
            Arc::clone(&page),
            Arc::clone(&store),
            Arc::clone(&surface),
            Arc::clone(&event_bus),
            ControllerOptions {
                settle_delay: Duration::from_millis(10),
            },
        );
        let state = AppState::new(ControlBridge::new(controller), Arc::clone(&event_bus));
        Self {
            state,
            page,
            store,
            surface,
            event_bus,
        }
    }

    pub fn router(&self) -> Router {
        crate::router::build(self.state.clone())
    }

    pub async fn stored(&self, key: SettingKey) -> Option<Value> {
        self.store.load(&[key]).await.unwrap().remove(&key)
    }
}

pub(crate) fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request; an empty or non-JSON body comes back as `null`.
pub(crate) async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
