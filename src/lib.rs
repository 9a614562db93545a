use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use config::Config;
use database::Database;
use handlers::AppState;
use services::{GeminiClient, RecipeGenerator};

pub async fn create_app(database: Database, config: Config) -> Router {
    let provider = GeminiClient::new(&config.gemini_base_url, &config.gemini_api_key);
    let generator = Arc::new(RecipeGenerator::new(
        provider.clone(),
        &config.recipe_models,
    ));

    let state = AppState {
        database,
        config,
        provider,
        generator,
    };

    Router::new()
        // Browser pages
        .route("/", get(handlers::pages::index))
        .route("/register", get(handlers::pages::register_page).post(handlers::auth::register))
        .route("/login", get(handlers::pages::login_page).post(handlers::auth::login))
        .route("/logout", get(handlers::auth::logout))
        .route("/dashboard", get(handlers::pages::dashboard_page))
        .route("/history", get(handlers::pages::history_page))
        .route("/upgrade", post(handlers::billing::upgrade))
        // JSON API
        .route("/api/generate_recipe", post(handlers::recipes::generate_recipe))
        .route("/api/history", get(handlers::recipes::history))
        // Ops
        .route("/health", get(handlers::health::health_check))
        // Dev-only helpers, unauthenticated by design of the original app
        .route("/_init_db", get(handlers::admin::init_db))
        .route("/_debug_models", get(handlers::admin::debug_models))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
