use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};

use crate::{
    database::queries::{PaymentQueries, UserQueries},
    errors::Result,
    handlers::{redirect_with_flash, AppState},
    middleware::AuthenticatedUser,
    models::UpgradeForm,
};

const DEFAULT_UPGRADE_AMOUNT: f64 = 5.00;

/// Simulated purchase: records the payment and flips the premium flag. No
/// real gateway is contacted and there is no idempotency or refund path.
pub async fn upgrade(
    State(state): State<AppState>,
    user: Option<AuthenticatedUser>,
    Form(form): Form<UpgradeForm>,
) -> Result<Response> {
    let Some(user) = user else {
        return Ok(Redirect::to("/login").into_response());
    };

    let amount = form.amount.unwrap_or(DEFAULT_UPGRADE_AMOUNT);

    let payment =
        PaymentQueries::create_payment(state.database.pool(), user.id, amount, "paid").await?;
    UserQueries::set_premium(state.database.pool(), user.id).await?;

    tracing::info!(user_id = %user.id, payment_id = %payment.id, amount, "premium upgrade recorded");

    Ok(redirect_with_flash("/dashboard", "Premium activated").into_response())
}
