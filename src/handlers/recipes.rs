use axum::{extract::State, Json};
use chrono::Utc;

use crate::{
    database::queries::{HistoryQueries, UserQueries},
    errors::{AppError, Result},
    handlers::AppState,
    middleware::AuthenticatedUser,
    models::{GenerateRecipeRequest, GenerateRecipeResponse, HistoryEntry, HistoryResponse},
    services::DailyQuota,
};

pub async fn generate_recipe(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<GenerateRecipeRequest>,
) -> Result<Json<GenerateRecipeResponse>> {
    let ingredients = request.ingredients.trim().to_string();
    if ingredients.is_empty() {
        return Err(AppError::Validation("Please provide ingredients".to_string()));
    }

    let record = UserQueries::find_by_id(state.database.pool(), user.id)
        .await?
        .ok_or_else(|| AppError::Auth("User not found".to_string()))?;

    let today = Utc::now().date_naive();
    let decision =
        DailyQuota::from_user(&record).apply(today, record.premium, state.config.daily_free_limit);

    if !decision.allowed {
        return Err(AppError::QuotaExceeded(
            "Daily free limit reached. Upgrade to premium for unlimited recipes.".to_string(),
        ));
    }

    UserQueries::update_quota(state.database.pool(), record.id, decision.next.used, today).await?;

    let generated = state.generator.generate(&ingredients).await;

    // Every attempt lands in history, fallback outcomes included.
    HistoryQueries::append(state.database.pool(), record.id, &ingredients, &generated.text)
        .await?;

    let note = if generated.fallback {
        Some("Emergency fallback - AI service unavailable".to_string())
    } else {
        Some("Creative recipe generated with your unique ingredients!".to_string())
    };

    Ok(Json(GenerateRecipeResponse {
        recipe: generated.text,
        attempts_left: decision.remaining,
        note,
    }))
}

pub async fn history(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<HistoryResponse>> {
    let rows = HistoryQueries::list_for_user(state.database.pool(), user.id).await?;

    Ok(Json(HistoryResponse {
        history: rows.into_iter().map(HistoryEntry::from).collect(),
    }))
}
