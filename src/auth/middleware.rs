//! Authentication middleware for Axum

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::infrastructure::crypto::jwt::{verify_token, Claims, JwtConfig};

/// Authentication state shared by the protected routes
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// Authenticated user information extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub username: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
            role: claims.role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Extract token from Authorization header
fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// JWT authentication middleware - requires valid token
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);

    let Some(auth_header) = auth_header else {
        return auth_error_response(StatusCode::UNAUTHORIZED, "Missing authentication token");
    };

    let Some(token) = extract_token(&auth_header) else {
        return auth_error_response(StatusCode::UNAUTHORIZED, "Invalid authentication token");
    };

    match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => {
            if claims.is_expired() {
                return auth_error_response(StatusCode::UNAUTHORIZED, "Token has expired");
            }

            // Make the identity available to handlers downstream
            let user = AuthenticatedUser::from_claims(claims);
            request.extensions_mut().insert(user);

            next.run(request).await
        }
        Err(_) => auth_error_response(StatusCode::UNAUTHORIZED, "Invalid authentication token"),
    }
}

/// Admin-only middleware - must be used after auth_middleware
pub async fn admin_middleware(request: Request<Body>, next: Next) -> Response {
    let user = request.extensions().get::<AuthenticatedUser>();

    match user {
        Some(user) if user.is_admin() => next.run(request).await,
        Some(_) => auth_error_response(StatusCode::FORBIDDEN, "Insufficient permissions"),
        None => auth_error_response(StatusCode::UNAUTHORIZED, "Missing authentication token"),
    }
}

fn auth_error_response(status: StatusCode, message: &str) -> Response {
    let body = Json(json!({
        "success": false,
        "error": message
    }));

    (status, body).into_response()
}
