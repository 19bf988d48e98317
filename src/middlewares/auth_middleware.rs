use axum::{
    body::Body, extract::State, http::HeaderMap, http::Request, http::StatusCode,
    middleware::Next, response::Response,
};
use bson::oid::ObjectId;
use std::sync::Arc;

use crate::model::user::ROLE_ADMIN;
use crate::repository::user_repo::UserRepository;
use crate::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};

pub struct AuthState {
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
    pub user_repo: Arc<dyn UserRepository>,
}

/// Authenticated requester, loaded fresh from the database so role changes
/// take effect before the token expires.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: ObjectId,
    pub email: String,
    pub role: String,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

async fn resolve_user(
    state: &AuthState,
    headers: &HeaderMap,
) -> Result<CurrentUser, StatusCode> {
    let auth_header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = state
        .jwt_utils
        .extract_token_from_header(auth_header)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;
    let claims = state
        .jwt_utils
        .validate_token(&token)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let user_id = ObjectId::parse_str(&claims.sub).map_err(|_| StatusCode::UNAUTHORIZED)?;
    let user = state
        .user_repo
        .find_by_id(&user_id)
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    Ok(CurrentUser {
        id: user_id,
        email: user.email,
        role: user.role,
    })
}

/// Requires a valid bearer token and an existing user.
pub async fn authenticate(
    State(state): State<Arc<AuthState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let user = resolve_user(&state, req.headers()).await?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// Same as [`authenticate`], plus an admin role gate.
pub async fn admin_auth(
    State(state): State<Arc<AuthState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let user = resolve_user(&state, req.headers()).await?;
    if !user.is_admin() {
        return Err(StatusCode::FORBIDDEN);
    }
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
