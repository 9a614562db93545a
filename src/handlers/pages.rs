use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::middleware::AuthenticatedUser;

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub async fn register_page() -> Html<&'static str> {
    Html(include_str!("../../static/register.html"))
}

pub async fn login_page() -> Html<&'static str> {
    Html(include_str!("../../static/login.html"))
}

pub async fn dashboard_page(user: Option<AuthenticatedUser>) -> Response {
    match user {
        Some(_) => Html(include_str!("../../static/dashboard.html")).into_response(),
        None => Redirect::to("/login").into_response(),
    }
}

pub async fn history_page(user: Option<AuthenticatedUser>) -> Response {
    match user {
        Some(_) => Html(include_str!("../../static/history.html")).into_response(),
        None => Redirect::to("/login").into_response(),
    }
}
