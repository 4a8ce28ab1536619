//! Estado management handlers

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, Set};

use super::dto::{CreateEstadoRequest, EstadoDto, UpdateEstadoRequest};
use crate::infrastructure::database::entities::estado;
use crate::interfaces::http::common::{
    db_error_response, ApiResponse, ListParams, PaginatedResponse, ValidatedJson,
};
use crate::listing::{
    paginate, FilterDescriptor, ListDefinition, ListRequest, SortDescriptor, SortDirection,
};

/// Estado handler state
#[derive(Clone)]
pub struct EstadoHandlerState {
    pub db: sea_orm::DatabaseConnection,
}

fn list_definition() -> ListDefinition<estado::Entity> {
    ListDefinition::new(estado::Column::Nome, SortDirection::Asc)
        .with_filters(vec![
            FilterDescriptor::text("nome", "Nome", estado::Column::Nome)
                .with_placeholder("Nome...")
                .with_weight(4),
            FilterDescriptor::text("uf", "UF", estado::Column::Uf).with_placeholder("UF..."),
        ])
        .with_sorts(vec![
            SortDescriptor::asc("nome", "Nome", estado::Column::Nome),
            SortDescriptor::asc("uf", "UF", estado::Column::Uf),
            SortDescriptor::desc("id", "ID", estado::Column::Id),
        ])
        .with_quick_search(vec![estado::Column::Uf, estado::Column::Nome])
}

#[utoipa::path(
    get,
    path = "/api/v1/estados",
    tag = "Estados",
    security(("bearer_auth" = [])),
    params(ListParams),
    responses(
        (status = 200, description = "Estado list", body = PaginatedResponse<EstadoDto>)
    )
)]
pub async fn list_estados(
    State(state): State<EstadoHandlerState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PaginatedResponse<EstadoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let request = ListRequest::from_params(params);
    let page = paginate(&state.db, estado::Entity::find(), &list_definition(), &request)
        .await
        .map_err(db_error_response)?;

    Ok(Json(PaginatedResponse::from_page(page, EstadoDto::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/estados/{id}",
    tag = "Estados",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Estado ID")),
    responses(
        (status = 200, description = "Estado details", body = ApiResponse<EstadoDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_estado(
    State(state): State<EstadoHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<EstadoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let model = estado::Entity::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    match model {
        Some(m) => Ok(Json(ApiResponse::success(EstadoDto::from(m)))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Estado not found")),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/estados",
    tag = "Estados",
    security(("bearer_auth" = [])),
    request_body = CreateEstadoRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<EstadoDto>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_estado(
    State(state): State<EstadoHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateEstadoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<EstadoDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let model = estado::ActiveModel {
        id: NotSet,
        nome: Set(request.nome),
        uf: Set(request.uf.to_uppercase()),
    };

    let created = model.insert(&state.db).await.map_err(db_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(EstadoDto::from(created))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/estados/{id}",
    tag = "Estados",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Estado ID")),
    request_body = UpdateEstadoRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<EstadoDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_estado(
    State(state): State<EstadoHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateEstadoRequest>,
) -> Result<Json<ApiResponse<EstadoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let model = estado::Entity::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    let Some(model) = model else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Estado not found")),
        ));
    };

    let mut active: estado::ActiveModel = model.into();
    if let Some(nome) = request.nome {
        active.nome = Set(nome);
    }
    if let Some(uf) = request.uf {
        active.uf = Set(uf.to_uppercase());
    }

    let updated = active.update(&state.db).await.map_err(db_error_response)?;
    Ok(Json(ApiResponse::success(EstadoDto::from(updated))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/estados/{id}",
    tag = "Estados",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Estado ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_estado(
    State(state): State<EstadoHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    let result = estado::Entity::delete_by_id(id)
        .exec(&state.db)
        .await
        .map_err(db_error_response)?;

    if result.rows_affected == 0 {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Estado not found")),
        ));
    }

    Ok(Json(ApiResponse::success(())))
}
