use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct RecipeHistory {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ingredients: String,
    pub recipe: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRecipeRequest {
    pub ingredients: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRecipeResponse {
    pub recipe: String,
    pub attempts_left: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub ingredients: String,
    pub recipe: String,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

impl From<RecipeHistory> for HistoryEntry {
    fn from(row: RecipeHistory) -> Self {
        Self {
            ingredients: row.ingredients,
            recipe: row.recipe,
            created_at: row.created_at.to_rfc3339(),
        }
    }
}
