//! Handlers for the `/api/auth` resource (signup, login, refresh, logout,
//! protected data fetch).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use keygate_core::credentials::{validate_login_fields, validate_password, validate_username};
use keygate_core::error::CoreError;
use keygate_core::roles::Role;
use keygate_db::models::user::CreateUser;
use keygate_db::repositories::UserRepo;

use crate::auth::cookies::{
    access_cookie, refresh_cookie, removal_cookie, ACCESS_COOKIE, REFRESH_COOKIE,
};
use crate::auth::jwt::{
    generate_access_token, generate_refresh_token, hash_refresh_token, validate_refresh_token,
};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/auth/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    /// Optional role name; defaults to `User`. Kept as a string so an
    /// unknown role surfaces as a 400 validation failure rather than a
    /// body-decode rejection.
    pub role: Option<String>,
}

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
///
/// Token fields are populated only when `debug_tokens_in_body` is enabled;
/// the httpOnly cookies are the real transport.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Successful refresh response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/signup
///
/// Create an account. No tokens are issued here; the user logs in
/// separately.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    validate_username(&input.username)?;
    validate_password(&input.password)?;
    let role = match input.role.as_deref() {
        Some(name) => name.parse::<Role>()?,
        None => Role::default(),
    };

    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "User already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            password_hash,
            role,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok("User registered successfully")),
    ))
}

/// POST /api/auth/login
///
/// Authenticate with username + password. Sets both token cookies and
/// overwrites the stored refresh digest, so any earlier session for this
/// user stops refreshing.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<LoginResponse>)> {
    validate_login_fields(&input.username, &input.password)?;

    // Unknown username and wrong password take the same exit, so the two
    // cases are indistinguishable to the caller.
    let user = UserRepo::find_by_username(&state.pool, &input.username).await?;
    let password_valid = match &user {
        Some(u) => verify_password(&input.password, &u.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?,
        None => false,
    };
    let Some(user) = user.filter(|_| password_valid) else {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    };

    let access_token = generate_access_token(user.id, user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let refresh_token = generate_refresh_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    UserRepo::set_refresh_token(&state.pool, user.id, &hash_refresh_token(&refresh_token))
        .await?;

    tracing::info!(user_id = user.id, "login successful");

    let jar = jar
        .add(access_cookie(access_token.clone(), &state.config.jwt))
        .add(refresh_cookie(refresh_token.clone(), &state.config.jwt));

    let (body_access, body_refresh) = if state.config.debug_tokens_in_body {
        (Some(access_token), Some(refresh_token))
    } else {
        (None, None)
    };

    Ok((
        jar,
        Json(LoginResponse {
            success: true,
            message: "Login successful",
            role: user.role,
            access_token: body_access,
            refresh_token: body_refresh,
        }),
    ))
}

/// POST /api/auth/refresh
///
/// Exchange the refresh cookie for a new access token. The refresh token
/// itself is NOT rotated: the same cookie keeps working until logout,
/// re-login, or expiry.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<RefreshResponse>)> {
    let token = jar
        .get(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("No refresh token found".into())))?;

    // Stored-digest check first: a token that was overwritten or cleared is
    // rejected even while its signature is still valid.
    let user = UserRepo::find_by_refresh_token_hash(&state.pool, &hash_refresh_token(&token))
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid refresh token".into())))?;

    validate_refresh_token(&token, &state.config.jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthorized(
            "Refresh token expired or invalid".into(),
        ))
    })?;

    let access_token = generate_access_token(user.id, user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::debug!(user_id = user.id, "access token refreshed");

    let jar = jar.add(access_cookie(access_token.clone(), &state.config.jwt));

    let body_access = state.config.debug_tokens_in_body.then_some(access_token);

    Ok((
        jar,
        Json(RefreshResponse {
            success: true,
            message: "Access token refreshed",
            access_token: body_access,
        }),
    ))
}

/// POST /api/auth/logout
///
/// Clear the stored refresh digest and expire both cookies.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<MessageResponse>)> {
    let token = jar
        .get(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not logged in".into())))?;

    let user = UserRepo::find_by_refresh_token_hash(&state.pool, &hash_refresh_token(&token))
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid session".into())))?;

    UserRepo::clear_refresh_token(&state.pool, user.id).await?;

    tracing::info!(user_id = user.id, "logout");

    let jar = jar
        .remove(removal_cookie(ACCESS_COOKIE))
        .remove(removal_cookie(REFRESH_COOKIE));

    Ok((jar, Json(MessageResponse::ok("Logged out successfully"))))
}

/// GET /api/auth/getdata
///
/// Admin-gated placeholder for a protected resource.
pub async fn get_data(RequireAdmin(user): RequireAdmin) -> Json<DataResponse<&'static str>> {
    tracing::debug!(user_id = user.id, "admin data fetch");
    Json(DataResponse::ok("Confidential admin data only"))
}
