//! Cidade management handlers

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, Set};

use super::dto::{CidadeDto, CreateCidadeRequest, UpdateCidadeRequest};
use crate::infrastructure::database::entities::{cidade, estado};
use crate::interfaces::http::common::{
    db_error_response, ApiResponse, ListParams, PaginatedResponse, ValidatedJson,
};
use crate::listing::{
    paginate, FilterDescriptor, ListDefinition, ListRequest, SortDescriptor, SortDirection,
};

/// Cidade handler state
#[derive(Clone)]
pub struct CidadeHandlerState {
    pub db: sea_orm::DatabaseConnection,
}

fn list_definition() -> ListDefinition<cidade::Entity> {
    ListDefinition::new(cidade::Column::Nome, SortDirection::Asc)
        .with_filters(vec![
            FilterDescriptor::text("nome", "Nome", cidade::Column::Nome)
                .with_placeholder("Nome...")
                .with_weight(4),
            FilterDescriptor::select_id("estadoId", "Estado", cidade::Column::EstadoId),
            FilterDescriptor::text("codigo", "Código IBGE", cidade::Column::Codigo),
        ])
        .with_sorts(vec![
            SortDescriptor::asc("nome", "Nome", cidade::Column::Nome),
            SortDescriptor::desc("id", "ID", cidade::Column::Id),
        ])
        .with_quick_search(vec![cidade::Column::Nome])
}

#[utoipa::path(
    get,
    path = "/api/v1/cidades",
    tag = "Cidades",
    security(("bearer_auth" = [])),
    params(ListParams),
    responses(
        (status = 200, description = "Cidade list", body = PaginatedResponse<CidadeDto>)
    )
)]
pub async fn list_cidades(
    State(state): State<CidadeHandlerState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PaginatedResponse<CidadeDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let request = ListRequest::from_params(params);
    let page = paginate(&state.db, cidade::Entity::find(), &list_definition(), &request)
        .await
        .map_err(db_error_response)?;

    Ok(Json(PaginatedResponse::from_page(page, CidadeDto::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/cidades/{id}",
    tag = "Cidades",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Cidade ID")),
    responses(
        (status = 200, description = "Cidade details", body = ApiResponse<CidadeDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_cidade(
    State(state): State<CidadeHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CidadeDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let model = cidade::Entity::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    match model {
        Some(m) => Ok(Json(ApiResponse::success(CidadeDto::from(m)))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Cidade not found")),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/cidades",
    tag = "Cidades",
    security(("bearer_auth" = [])),
    request_body = CreateCidadeRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<CidadeDto>),
        (status = 400, description = "Unknown estado"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_cidade(
    State(state): State<CidadeHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateCidadeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CidadeDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    // The referenced estado must exist before we touch the FK
    let parent = estado::Entity::find_by_id(request.estado_id)
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    if parent.is_none() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!(
                "Estado {} not found",
                request.estado_id
            ))),
        ));
    }

    let model = cidade::ActiveModel {
        id: NotSet,
        estado_id: Set(request.estado_id),
        nome: Set(request.nome),
        codigo: Set(request.codigo),
    };

    let created = model.insert(&state.db).await.map_err(db_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CidadeDto::from(created))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/cidades/{id}",
    tag = "Cidades",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Cidade ID")),
    request_body = UpdateCidadeRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<CidadeDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_cidade(
    State(state): State<CidadeHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateCidadeRequest>,
) -> Result<Json<ApiResponse<CidadeDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let model = cidade::Entity::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    let Some(model) = model else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Cidade not found")),
        ));
    };

    let mut active: cidade::ActiveModel = model.into();
    if let Some(nome) = request.nome {
        active.nome = Set(nome);
    }
    if let Some(codigo) = request.codigo {
        active.codigo = Set(Some(codigo));
    }

    let updated = active.update(&state.db).await.map_err(db_error_response)?;
    Ok(Json(ApiResponse::success(CidadeDto::from(updated))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/cidades/{id}",
    tag = "Cidades",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Cidade ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_cidade(
    State(state): State<CidadeHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    let result = cidade::Entity::delete_by_id(id)
        .exec(&state.db)
        .await
        .map_err(db_error_response)?;

    if result.rows_affected == 0 {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Cidade not found")),
        ));
    }

    Ok(Json(ApiResponse::success(())))
}
