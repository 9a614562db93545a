use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub secret_key: String,
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub recipe_models: Vec<String>,
    pub daily_free_limit: i64,
    pub payment_public_key: String,
    pub payment_secret_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:recipes.db".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            secret_key: env::var("SECRET_KEY")
                .unwrap_or_else(|_| "super-secret".to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            recipe_models: env::var("RECIPE_MODELS")
                .unwrap_or_else(|_| "gemini-2.0-flash-001,gemini-1.5-flash-002".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            daily_free_limit: env::var("DAILY_FREE_LIMIT")
                .unwrap_or_else(|_| "2".to_string())
                .parse()?,
            // Placeholder payment provider keys; no real gateway is called.
            payment_public_key: env::var("PAYMENT_PUBLIC_KEY")
                .unwrap_or_else(|_| "pk_test_placeholder".to_string()),
            payment_secret_key: env::var("PAYMENT_SECRET_KEY")
                .unwrap_or_else(|_| "sk_test_placeholder".to_string()),
        })
    }
}
