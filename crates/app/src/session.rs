//! Session bootstrap — runs once when the conversation page loads.

use serde_json::Value;

use infinity_domain::error::InfinityError;
use infinity_domain::settings::{Configuration, SettingKey};

use crate::controller::AutomationController;
use crate::ports::{EventPublisher, PageDriver, SettingsStore, Surface};

/// Prepare a freshly loaded page.
///
/// Records the detected UI language, resets the persisted mode to off (a
/// new page never starts running), seeds the reply settings that have no
/// value yet, loads the configuration and, once the page and its sidebar are
/// ready, draws the toggle.
///
/// # Errors
///
/// Returns a storage error when the settings cannot be read or written.
#[tracing::instrument(skip(controller))]
pub async fn bootstrap<D, S, U, P>(
    controller: &AutomationController<D, S, U, P>,
    detected_language: &str,
) -> Result<(), InfinityError>
where
    D: PageDriver + Send + Sync + 'static,
    S: SettingsStore + Send + Sync + 'static,
    U: Surface + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let store = controller.store();
    store
        .save(
            SettingKey::UserLanguage,
            Value::String(detected_language.to_string()),
        )
        .await?;
    store
        .save(SettingKey::InfinityMode, Value::Bool(false))
        .await?;

    let stored = store.load(&SettingKey::CONFIGURATION).await?;
    for key in SettingKey::CONFIGURATION {
        if !is_unset(stored.get(&key)) {
            continue;
        }
        if let Some(seed) = Configuration::seed_value(key, detected_language) {
            tracing::debug!(%key, %seed, "seeding default");
            store.save(key, seed).await?;
        }
    }
    controller
        .reload_configuration(&SettingKey::CONFIGURATION)
        .await?;

    let driver = controller.driver();
    driver.wait_page_ready().await;
    driver.wait_sidebar_ready().await;
    controller.refresh_toggle();
    tracing::info!("session ready");
    Ok(())
}

fn is_unset(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v.abs() < f64::EPSILON),
        Some(Value::Bool(flag)) => !flag,
        Some(_) => false,
    }
}
