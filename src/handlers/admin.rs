use axum::{extract::State, Json};
use serde_json::json;

use crate::{
    errors::{AppError, Result},
    handlers::AppState,
};

/// Dev-only schema bootstrap. Unauthenticated; a deployment hazard kept for
/// parity with local development workflows.
pub async fn init_db(State(state): State<AppState>) -> Result<&'static str> {
    state.database.migrate().await?;
    Ok("DB created")
}

/// Dev-only: lists provider models that support text generation.
/// Unauthenticated and leaks provider configuration.
pub async fn debug_models(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let models = state
        .provider
        .list_models()
        .await
        .map_err(|e| AppError::Provider(e.to_string()))?;

    let available: Vec<_> = models
        .into_iter()
        .filter(|m| {
            m.supported_generation_methods
                .iter()
                .any(|method| method == "generateContent")
        })
        .map(|m| {
            json!({
                "name": m.name,
                "methods": m.supported_generation_methods,
            })
        })
        .collect();

    Ok(Json(json!({ "available_models": available })))
}
