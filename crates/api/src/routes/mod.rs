pub mod auth;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/signup    create account (public)
/// /auth/login     login (public)
/// /auth/refresh   new access token (refreshToken cookie)
/// /auth/logout    end session (refreshToken cookie)
/// /auth/getdata   protected fetch (accessToken cookie, Admin role)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (signup, login, refresh, logout, getdata).
        .nest("/auth", auth::router())
}
