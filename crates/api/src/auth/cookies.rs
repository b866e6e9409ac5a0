//! Cookie construction for the two token kinds.
//!
//! Both cookies are httpOnly and SameSite=Strict, with a max-age matching
//! the token expiry so the cookie and the credential inside it die together.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use super::jwt::JwtConfig;

/// Cookie carrying the access token.
pub const ACCESS_COOKIE: &str = "accessToken";

/// Cookie carrying the refresh token.
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Build the access-token cookie (15-minute max-age by default).
pub fn access_cookie(token: String, config: &JwtConfig) -> Cookie<'static> {
    base_cookie(
        ACCESS_COOKIE,
        token,
        Duration::minutes(config.access_token_expiry_mins),
    )
}

/// Build the refresh-token cookie (7-day max-age by default).
pub fn refresh_cookie(token: String, config: &JwtConfig) -> Cookie<'static> {
    base_cookie(
        REFRESH_COOKIE,
        token,
        Duration::days(config.refresh_token_expiry_days),
    )
}

/// A blank cookie with attributes matching the originals, for removal.
///
/// `CookieJar::remove` needs the path to match the cookie being cleared,
/// otherwise browsers keep the original.
pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build()
}

fn base_cookie(name: &'static str, value: String, max_age: Duration) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(max_age)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            access_secret: "a-secret".to_string(),
            refresh_secret: "r-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        }
    }

    #[test]
    fn test_access_cookie_attributes() {
        let cookie = access_cookie("tok".to_string(), &test_config());

        assert_eq!(cookie.name(), "accessToken");
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::minutes(15)));
    }

    #[test]
    fn test_refresh_cookie_attributes() {
        let cookie = refresh_cookie("tok".to_string(), &test_config());

        assert_eq!(cookie.name(), "refreshToken");
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    }

    #[test]
    fn test_removal_cookie_matches_path() {
        let cookie = removal_cookie(ACCESS_COOKIE);
        assert_eq!(cookie.path(), Some("/"));
        assert!(cookie.value().is_empty());
    }
}
