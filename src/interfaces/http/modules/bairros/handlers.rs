//! Bairro management handlers

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, Set};

use super::dto::{BairroDto, CreateBairroRequest, UpdateBairroRequest};
use crate::infrastructure::database::entities::{bairro, cidade};
use crate::interfaces::http::common::{
    db_error_response, ApiResponse, ListParams, PaginatedResponse, ValidatedJson,
};
use crate::listing::{
    paginate, FilterDescriptor, ListDefinition, ListRequest, SortDescriptor, SortDirection,
};

/// Bairro handler state
#[derive(Clone)]
pub struct BairroHandlerState {
    pub db: sea_orm::DatabaseConnection,
}

fn list_definition() -> ListDefinition<bairro::Entity> {
    ListDefinition::new(bairro::Column::Nome, SortDirection::Asc)
        .with_filters(vec![
            FilterDescriptor::text("nome", "Nome", bairro::Column::Nome)
                .with_placeholder("Nome...")
                .with_weight(4),
            FilterDescriptor::select_id("cidadeId", "Cidade", bairro::Column::CidadeId),
        ])
        .with_sorts(vec![
            SortDescriptor::asc("nome", "Nome", bairro::Column::Nome),
            SortDescriptor::desc("id", "ID", bairro::Column::Id),
        ])
        .with_quick_search(vec![bairro::Column::Nome])
}

#[utoipa::path(
    get,
    path = "/api/v1/bairros",
    tag = "Bairros",
    security(("bearer_auth" = [])),
    params(ListParams),
    responses(
        (status = 200, description = "Bairro list", body = PaginatedResponse<BairroDto>)
    )
)]
pub async fn list_bairros(
    State(state): State<BairroHandlerState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PaginatedResponse<BairroDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let request = ListRequest::from_params(params);
    let page = paginate(&state.db, bairro::Entity::find(), &list_definition(), &request)
        .await
        .map_err(db_error_response)?;

    Ok(Json(PaginatedResponse::from_page(page, BairroDto::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/bairros/{id}",
    tag = "Bairros",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Bairro ID")),
    responses(
        (status = 200, description = "Bairro details", body = ApiResponse<BairroDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_bairro(
    State(state): State<BairroHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<BairroDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let model = bairro::Entity::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    match model {
        Some(m) => Ok(Json(ApiResponse::success(BairroDto::from(m)))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Bairro not found")),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/bairros",
    tag = "Bairros",
    security(("bearer_auth" = [])),
    request_body = CreateBairroRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<BairroDto>),
        (status = 400, description = "Unknown cidade"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_bairro(
    State(state): State<BairroHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateBairroRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BairroDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let parent = cidade::Entity::find_by_id(request.cidade_id)
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    if parent.is_none() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!(
                "Cidade {} not found",
                request.cidade_id
            ))),
        ));
    }

    let model = bairro::ActiveModel {
        id: NotSet,
        cidade_id: Set(request.cidade_id),
        nome: Set(request.nome),
        codigo: Set(request.codigo),
    };

    let created = model.insert(&state.db).await.map_err(db_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(BairroDto::from(created))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/bairros/{id}",
    tag = "Bairros",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Bairro ID")),
    request_body = UpdateBairroRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<BairroDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_bairro(
    State(state): State<BairroHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateBairroRequest>,
) -> Result<Json<ApiResponse<BairroDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let model = bairro::Entity::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    let Some(model) = model else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Bairro not found")),
        ));
    };

    let mut active: bairro::ActiveModel = model.into();
    if let Some(nome) = request.nome {
        active.nome = Set(nome);
    }
    if let Some(codigo) = request.codigo {
        active.codigo = Set(Some(codigo));
    }

    let updated = active.update(&state.db).await.map_err(db_error_response)?;
    Ok(Json(ApiResponse::success(BairroDto::from(updated))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/bairros/{id}",
    tag = "Bairros",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Bairro ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_bairro(
    State(state): State<BairroHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    let result = bairro::Entity::delete_by_id(id)
        .exec(&state.db)
        .await
        .map_err(db_error_response)?;

    if result.rows_affected == 0 {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Bairro not found")),
        ));
    }

    Ok(Json(ApiResponse::success(())))
}
