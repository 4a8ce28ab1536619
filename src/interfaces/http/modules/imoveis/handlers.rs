//! Imóvel management handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sea_orm::EntityTrait;
use tracing::info;

use super::dto::{CreateImovelRequest, ImovelDto, UpdateImovelRequest};
use crate::domain::imovel::NovoImovel;
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::entities::imovel;
use crate::interfaces::http::common::{
    db_error_response, domain_error_response, ApiResponse, ListParams, PaginatedResponse,
    ValidatedJson,
};
use crate::listing::{
    paginate, FilterDescriptor, ListDefinition, ListRequest, SelectOption, SortDescriptor,
    SortDirection,
};

/// Imóvel handler state
#[derive(Clone)]
pub struct ImovelHandlerState {
    pub db: sea_orm::DatabaseConnection,
    pub repos: Arc<dyn RepositoryProvider>,
}

fn list_definition() -> ListDefinition<imovel::Entity> {
    ListDefinition::new(imovel::Column::CodigoInterno, SortDirection::Asc)
        .with_filters(vec![
            FilterDescriptor::text("codigoInterno", "Código", imovel::Column::CodigoInterno)
                .with_placeholder("Buscar..."),
            FilterDescriptor::select(
                "situacao",
                "Situação",
                imovel::Column::Situacao,
                vec![
                    SelectOption::new("DISPONIVEL", "Disponível"),
                    SelectOption::new("ALUGADO", "Alugado"),
                    SelectOption::new("RESERVADO", "Reservado"),
                    SelectOption::new("INDISPONIVEL", "Indisponível"),
                ],
            ),
            FilterDescriptor::boolean(
                "disponivelAluguel",
                "Disponível p/ aluguel",
                imovel::Column::DisponivelAluguel,
            ),
            FilterDescriptor::select_id("bairroId", "Bairro", imovel::Column::BairroId),
        ])
        .with_sorts(vec![
            SortDescriptor::asc("codigoInterno", "Código", imovel::Column::CodigoInterno),
            SortDescriptor::desc(
                "valorAluguel",
                "Valor",
                imovel::Column::ValorAluguelCentavos,
            ),
            SortDescriptor::asc("situacao", "Situação", imovel::Column::Situacao),
        ])
        .with_quick_search(vec![imovel::Column::CodigoInterno, imovel::Column::Endereco])
}

#[utoipa::path(
    get,
    path = "/api/v1/imoveis",
    tag = "Imoveis",
    security(("bearer_auth" = [])),
    params(ListParams),
    responses(
        (status = 200, description = "Imóvel list", body = PaginatedResponse<ImovelDto>)
    )
)]
pub async fn list_imoveis(
    State(state): State<ImovelHandlerState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PaginatedResponse<ImovelDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let request = ListRequest::from_params(params);
    let page = paginate(&state.db, imovel::Entity::find(), &list_definition(), &request)
        .await
        .map_err(db_error_response)?;

    Ok(Json(PaginatedResponse::from_page(page, ImovelDto::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/imoveis/{id}",
    tag = "Imoveis",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Imóvel ID")),
    responses(
        (status = 200, description = "Imóvel details", body = ApiResponse<ImovelDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_imovel(
    State(state): State<ImovelHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ImovelDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.imoveis().find_by_id(id).await {
        Ok(Some(im)) => Ok(Json(ApiResponse::success(ImovelDto::from_domain(im)))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Imóvel {} not found", id))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/imoveis",
    tag = "Imoveis",
    security(("bearer_auth" = [])),
    request_body = CreateImovelRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<ImovelDto>),
        (status = 400, description = "Unknown proprietário"),
        (status = 409, description = "Código already in use"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_imovel(
    State(state): State<ImovelHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateImovelRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ImovelDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    // The owner must exist and hold the locador role
    let proprietario = state
        .repos
        .pessoas()
        .find_by_id(request.proprietario_id)
        .await
        .map_err(domain_error_response)?;

    match proprietario {
        None => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(format!(
                    "Pessoa {} not found",
                    request.proprietario_id
                ))),
            ));
        }
        Some(p) if !p.locador => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(format!(
                    "Pessoa {} is not registered as locador",
                    request.proprietario_id
                ))),
            ));
        }
        Some(_) => {}
    }

    let dados = NovoImovel {
        codigo_interno: request.codigo_interno,
        tipo: request.tipo,
        endereco: request.endereco,
        bairro_id: request.bairro_id,
        proprietario_id: request.proprietario_id,
        disponivel_aluguel: request.disponivel_aluguel,
        valor_aluguel_centavos: request.valor_aluguel_centavos,
        qtd_quartos: request.qtd_quartos,
    };

    match state.repos.imoveis().create(dados).await {
        Ok(im) => {
            info!("Imóvel {} registered ({})", im.id, im.codigo_interno);
            Ok((
                StatusCode::CREATED,
                Json(ApiResponse::success(ImovelDto::from_domain(im))),
            ))
        }
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/imoveis/{id}",
    tag = "Imoveis",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Imóvel ID")),
    request_body = UpdateImovelRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<ImovelDto>),
        (status = 400, description = "Unknown situação"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_imovel(
    State(state): State<ImovelHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateImovelRequest>,
) -> Result<Json<ApiResponse<ImovelDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let Some(dados) = request.into_domain() else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "situacao must be DISPONIVEL, ALUGADO, RESERVADO or INDISPONIVEL",
            )),
        ));
    };

    match state.repos.imoveis().update(id, dados).await {
        Ok(Some(im)) => Ok(Json(ApiResponse::success(ImovelDto::from_domain(im)))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Imóvel {} not found", id))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/imoveis/{id}",
    tag = "Imoveis",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Imóvel ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Imóvel has an active contract")
    )
)]
pub async fn delete_imovel(
    State(state): State<ImovelHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    // Never drop a property out from under a live contract
    let ativo = state
        .repos
        .contratos()
        .find_ativo_por_imovel(id)
        .await
        .map_err(domain_error_response)?;

    if let Some(contrato) = ativo {
        return Err((
            StatusCode::CONFLICT,
            Json(ApiResponse::error(format!(
                "Imóvel {} has active contract {}",
                id, contrato.codigo
            ))),
        ));
    }

    match state.repos.imoveis().delete(id).await {
        Ok(()) => Ok(Json(ApiResponse::success(()))),
        Err(e) => Err(domain_error_response(e)),
    }
}
