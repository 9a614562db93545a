use axum::response::Redirect;
use std::sync::Arc;

use crate::{
    config::Config,
    database::Database,
    services::{GeminiClient, RecipeGenerator},
};

pub mod admin;
pub mod auth;
pub mod billing;
pub mod health;
pub mod pages;
pub mod recipes;

#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub config: Config,
    pub provider: GeminiClient,
    pub generator: Arc<RecipeGenerator>,
}

/// Redirects carrying a flash message in the query string, the way the
/// browser-facing form routes report success and warnings.
pub fn redirect_with_flash(path: &str, message: &str) -> Redirect {
    let encoded = message.replace(' ', "+");
    Redirect::to(&format!("{}?flash={}", path, encoded))
}
