//! Authentication and authorization middleware extractors.
//!
//! - [`auth::CurrentUser`] -- resolves the `accessToken` cookie to a user.
//! - [`rbac::RequireAdmin`] -- requires the `Admin` role on top of that.

pub mod auth;
pub mod rbac;
