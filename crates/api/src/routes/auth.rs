//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /signup   -> signup
/// POST /login    -> login
/// POST /refresh  -> refresh (requires refreshToken cookie)
/// POST /logout   -> logout (requires refreshToken cookie)
/// GET  /getdata  -> get_data (requires accessToken cookie + Admin role)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .route("/getdata", get(auth::get_data))
}
