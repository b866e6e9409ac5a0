//! Cookie-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use keygate_core::error::CoreError;
use keygate_core::roles::Role;
use keygate_core::types::DbId;
use keygate_db::repositories::UserRepo;

use crate::auth::cookies::ACCESS_COOKIE;
use crate::auth::jwt::validate_access_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the `accessToken` cookie.
///
/// The token is verified against the access secret, then the user row is
/// loaded so handlers see the current identity rather than a claims
/// snapshot. The password hash never leaves this extractor; only identity
/// fields are attached.
///
/// ```ignore
/// async fn my_handler(user: CurrentUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// The user's internal database id (from `claims.sub`).
    pub id: DbId,
    pub username: String,
    pub role: Role,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(ACCESS_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Not authorized, no token".into()))
            })?;

        let claims = validate_access_token(&token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Token expired or invalid".into()))
        })?;

        // The decoded id is trusted only as far as the row it resolves to.
        let user = UserRepo::find_by_id(&state.pool, claims.sub)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Token expired or invalid".into()))
            })?;

        Ok(CurrentUser {
            id: user.id,
            username: user.username,
            role: user.role,
        })
    }
}
