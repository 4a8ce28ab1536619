//! Authentication handlers

use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use tracing::{info, warn};

use super::dto::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest, UserInfo,
};
use crate::auth::AuthenticatedUser;
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::infrastructure::database::entities::user::{self, UserRole};
use crate::interfaces::http::common::{db_error_response, ApiResponse, ValidatedJson};

/// Auth handler state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub db: sea_orm::DatabaseConnection,
    pub jwt_config: JwtConfig,
}

fn parse_role(raw: &str) -> Option<UserRole> {
    match raw.to_lowercase().as_str() {
        "admin" => Some(UserRole::Admin),
        "operator" => Some(UserRole::Operator),
        "viewer" => Some(UserRole::Viewer),
        _ => None,
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let invalid = || {
        (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Invalid credentials")),
        )
    };

    // Accept username or e-mail in the same field
    let found = user::Entity::find()
        .filter(
            user::Column::Username
                .eq(&request.username)
                .or(user::Column::Email.eq(&request.username)),
        )
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    let Some(found) = found else {
        warn!("Login failed for unknown user '{}'", request.username);
        return Err(invalid());
    };

    if !found.is_active {
        warn!("Login rejected for inactive user '{}'", found.username);
        return Err(invalid());
    }

    let password_ok = verify_password(&request.password, &found.password_hash).unwrap_or(false);
    if !password_ok {
        warn!("Login failed for user '{}'", found.username);
        return Err(invalid());
    }

    let token = create_token(
        &found.id,
        &found.username,
        &found.role.to_string(),
        &state.jwt_config,
    )
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to issue token: {}", e))),
        )
    })?;

    info!("User '{}' logged in", found.username);

    let user_info = UserInfo::from(found.clone());

    let mut active: user::ActiveModel = found.into();
    active.last_login_at = Set(Some(Utc::now()));
    if let Err(e) = active.update(&state.db).await {
        warn!("Failed to record last login: {}", e);
    }

    Ok(Json(ApiResponse::success(LoginResponse {
        token,
        user: user_info,
    })))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserInfo>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_current_user(
    State(state): State<AuthHandlerState>,
    Extension(current): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<UserInfo>>, (StatusCode, Json<ApiResponse<()>>)> {
    let found = user::Entity::find_by_id(&current.user_id)
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    match found {
        Some(u) => Ok(Json(ApiResponse::success(UserInfo::from(u)))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("User not found")),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Auth",
    security(("bearer_auth" = [])),
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserInfo>),
        (status = 403, description = "Admin only"),
        (status = 409, description = "Username or e-mail taken"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserInfo>>), (StatusCode, Json<ApiResponse<()>>)> {
    let role = match request.role.as_deref() {
        None => UserRole::Viewer,
        Some(raw) => match parse_role(raw) {
            Some(role) => role,
            None => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::error("role must be admin, operator or viewer")),
                ));
            }
        },
    };

    let password_hash = hash_password(&request.password).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to hash password: {}", e))),
        )
    })?;

    let now = Utc::now();
    let new_user = user::ActiveModel {
        id: Set(uuid::Uuid::new_v4().to_string()),
        username: Set(request.username),
        email: Set(request.email),
        password_hash: Set(password_hash),
        role: Set(role),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        last_login_at: Set(None),
    };

    let created = new_user.insert(&state.db).await.map_err(|e| {
        if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
            (
                StatusCode::CONFLICT,
                Json(ApiResponse::error("Username or email already exists")),
            )
        } else {
            db_error_response(e)
        }
    })?;

    info!("User '{}' created", created.username);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(UserInfo::from(created))),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/change-password",
    tag = "Auth",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed"),
        (status = 401, description = "Wrong current password")
    )
)]
pub async fn change_password(
    State(state): State<AuthHandlerState>,
    Extension(current): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    let found = user::Entity::find_by_id(&current.user_id)
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    let Some(found) = found else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("User not found")),
        ));
    };

    let current_ok =
        verify_password(&request.current_password, &found.password_hash).unwrap_or(false);
    if !current_ok {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Current password is incorrect")),
        ));
    }

    let new_hash = hash_password(&request.new_password).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to hash password: {}", e))),
        )
    })?;

    let username = found.username.clone();
    let mut active: user::ActiveModel = found.into();
    active.password_hash = Set(new_hash);
    active.updated_at = Set(Utc::now());
    active.update(&state.db).await.map_err(db_error_response)?;

    info!("User '{}' changed password", username);

    Ok(Json(ApiResponse::success(())))
}
