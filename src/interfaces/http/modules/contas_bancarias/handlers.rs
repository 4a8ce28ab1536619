//! Conta bancária management handlers

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, Set};

use super::dto::{ContaBancariaDto, CreateContaBancariaRequest, UpdateContaBancariaRequest};
use crate::infrastructure::database::entities::conta_bancaria;
use crate::interfaces::http::common::{
    db_error_response, ApiResponse, ListParams, PaginatedResponse, ValidatedJson,
};
use crate::listing::{
    paginate, FilterDescriptor, ListDefinition, ListRequest, SortDescriptor, SortDirection,
};

/// Conta bancária handler state
#[derive(Clone)]
pub struct ContaBancariaHandlerState {
    pub db: sea_orm::DatabaseConnection,
}

fn list_definition() -> ListDefinition<conta_bancaria::Entity> {
    ListDefinition::new(conta_bancaria::Column::Titular, SortDirection::Asc)
        .with_filters(vec![
            FilterDescriptor::text("titular", "Titular", conta_bancaria::Column::Titular)
                .with_placeholder("Titular...")
                .with_weight(4),
            FilterDescriptor::boolean("ativo", "Ativo", conta_bancaria::Column::Ativo),
            FilterDescriptor::boolean("principal", "Principal", conta_bancaria::Column::Principal),
        ])
        .with_sorts(vec![
            SortDescriptor::asc("titular", "Titular", conta_bancaria::Column::Titular),
            SortDescriptor::desc("id", "ID", conta_bancaria::Column::Id),
        ])
        .with_quick_search(vec![
            conta_bancaria::Column::Titular,
            conta_bancaria::Column::Descricao,
        ])
}

#[utoipa::path(
    get,
    path = "/api/v1/contas-bancarias",
    tag = "ContasBancarias",
    security(("bearer_auth" = [])),
    params(ListParams),
    responses(
        (status = 200, description = "Conta bancária list", body = PaginatedResponse<ContaBancariaDto>)
    )
)]
pub async fn list_contas_bancarias(
    State(state): State<ContaBancariaHandlerState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PaginatedResponse<ContaBancariaDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let request = ListRequest::from_params(params);
    let page = paginate(
        &state.db,
        conta_bancaria::Entity::find(),
        &list_definition(),
        &request,
    )
    .await
    .map_err(db_error_response)?;

    Ok(Json(PaginatedResponse::from_page(page, ContaBancariaDto::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/contas-bancarias/{id}",
    tag = "ContasBancarias",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Conta bancária ID")),
    responses(
        (status = 200, description = "Conta details", body = ApiResponse<ContaBancariaDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_conta_bancaria(
    State(state): State<ContaBancariaHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ContaBancariaDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let model = conta_bancaria::Entity::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    match model {
        Some(m) => Ok(Json(ApiResponse::success(ContaBancariaDto::from(m)))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Conta bancária not found")),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/contas-bancarias",
    tag = "ContasBancarias",
    security(("bearer_auth" = [])),
    request_body = CreateContaBancariaRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<ContaBancariaDto>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_conta_bancaria(
    State(state): State<ContaBancariaHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateContaBancariaRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ContaBancariaDto>>), (StatusCode, Json<ApiResponse<()>>)>
{
    let model = conta_bancaria::ActiveModel {
        id: NotSet,
        banco_codigo: Set(request.banco_codigo),
        banco_nome: Set(request.banco_nome),
        agencia: Set(request.agencia),
        codigo: Set(request.codigo),
        digito: Set(request.digito),
        titular: Set(request.titular),
        principal: Set(request.principal),
        ativo: Set(true),
        descricao: Set(request.descricao),
        created_at: Set(Utc::now()),
    };

    let created = model.insert(&state.db).await.map_err(db_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ContaBancariaDto::from(created))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/contas-bancarias/{id}",
    tag = "ContasBancarias",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Conta bancária ID")),
    request_body = UpdateContaBancariaRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<ContaBancariaDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_conta_bancaria(
    State(state): State<ContaBancariaHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateContaBancariaRequest>,
) -> Result<Json<ApiResponse<ContaBancariaDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let model = conta_bancaria::Entity::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    let Some(model) = model else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Conta bancária not found")),
        ));
    };

    let mut active: conta_bancaria::ActiveModel = model.into();
    if let Some(titular) = request.titular {
        active.titular = Set(titular);
    }
    if let Some(principal) = request.principal {
        active.principal = Set(principal);
    }
    if let Some(ativo) = request.ativo {
        active.ativo = Set(ativo);
    }
    if let Some(descricao) = request.descricao {
        active.descricao = Set(Some(descricao));
    }

    let updated = active.update(&state.db).await.map_err(db_error_response)?;
    Ok(Json(ApiResponse::success(ContaBancariaDto::from(updated))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/contas-bancarias/{id}",
    tag = "ContasBancarias",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Conta bancária ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_conta_bancaria(
    State(state): State<ContaBancariaHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    let result = conta_bancaria::Entity::delete_by_id(id)
        .exec(&state.db)
        .await
        .map_err(db_error_response)?;

    if result.rows_affected == 0 {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Conta bancária not found")),
        ));
    }

    Ok(Json(ApiResponse::success(())))
}
