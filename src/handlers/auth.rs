use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect},
    Form,
};

use crate::{
    auth::{JwtService, PasswordService},
    database::queries::UserQueries,
    errors::Result,
    handlers::{redirect_with_flash, AppState},
    middleware::SESSION_COOKIE,
    models::{LoginForm, RegisterForm},
};

pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect> {
    if form.email.is_empty() || form.password.is_empty() {
        return Ok(redirect_with_flash("/register", "Email and password required"));
    }

    // Username defaults to the email local part.
    let username = form
        .username
        .as_deref()
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            form.email
                .split('@')
                .next()
                .unwrap_or(form.email.as_str())
                .to_string()
        });

    let existing =
        UserQueries::find_by_email_or_username(state.database.pool(), &form.email, &username)
            .await?;
    if existing.is_some() {
        return Ok(redirect_with_flash("/register", "User already exists"));
    }

    let password_hash = PasswordService::hash_password(&form.password)?;
    let user =
        UserQueries::create_user(state.database.pool(), &username, &form.email, &password_hash)
            .await?;

    tracing::info!(user_id = %user.id, "registered new user");

    Ok(redirect_with_flash(
        "/login",
        "Registered successfully. Please login.",
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<axum::response::Response> {
    let user = UserQueries::find_by_email(state.database.pool(), &form.email).await?;

    let user = match user {
        Some(user) if PasswordService::verify_password(&form.password, &user.password_hash)? => {
            user
        }
        _ => {
            return Ok(redirect_with_flash("/login", "Invalid credentials").into_response());
        }
    };

    let jwt_service = JwtService::new(&state.config.secret_key);
    let token = jwt_service.generate_session_token(user.id, &user.email)?;

    let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, token);

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Redirect::to("/dashboard"),
    )
        .into_response())
}

pub async fn logout() -> impl IntoResponse {
    let cookie = format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE);

    (AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to("/"))
}
