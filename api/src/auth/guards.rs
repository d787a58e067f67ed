//! Route-level authorization guards.
//!
//! Guards are applied with `axum::middleware::from_fn` on a router or a
//! nested group of routes. Each guard verifies the bearer token, inserts
//! the resulting [`AuthUser`] into request extensions for downstream
//! handlers, and rejects the request when the role check fails.

use axum::{
    Json,
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use serde::Serialize;

use crate::response::ApiResponse;
use db::models::user::Role;

use super::claims::AuthUser;

/// Placeholder payload for responses that carry no data.
#[derive(Serialize, Default)]
pub struct Empty;

type GuardRejection = (StatusCode, Json<ApiResponse<Empty>>);

/// Runs the [`AuthUser`] extractor against the request and, on success,
/// stores the claims in request extensions so handlers can read them with
/// `Extension<AuthUser>`.
async fn extract_and_insert_authuser(
    mut req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), GuardRejection> {
    let (mut parts, body) = req.into_parts();
    let auth_user = AuthUser::from_request_parts(&mut parts, &())
        .await
        .map_err(|(status, msg)| (status, Json(ApiResponse::<Empty>::error(msg))))?;
    req = Request::from_parts(parts, body);
    req.extensions_mut().insert(auth_user.clone());
    Ok((req, auth_user))
}

/// Allows any request carrying a valid token, regardless of role.
pub async fn allow_authenticated(
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, GuardRejection> {
    let (req, _) = extract_and_insert_authuser(req).await?;
    Ok(next.run(req).await)
}

async fn require_role(
    req: Request<Body>,
    next: Next,
    role: Role,
    denied: &'static str,
) -> Result<axum::response::Response, GuardRejection> {
    let (req, auth_user) = extract_and_insert_authuser(req).await?;
    if auth_user.0.role != role {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<Empty>::error(denied)),
        ));
    }
    Ok(next.run(req).await)
}

/// Allows only administrators.
pub async fn allow_admin(
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, GuardRejection> {
    require_role(req, next, Role::Admin, "Admin access required").await
}

/// Allows only faculty members.
pub async fn allow_faculty(
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, GuardRejection> {
    require_role(req, next, Role::Faculty, "Faculty access required").await
}

/// Allows only students.
pub async fn allow_student(
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, GuardRejection> {
    require_role(req, next, Role::Student, "Student access required").await
}
