//! Contrato management handlers
//!
//! Opening a contract flips the imóvel to ALUGADO; closing it flips the
//! imóvel back to DISPONIVEL. Both transitions live here, next to the
//! endpoint that triggers them.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sea_orm::EntityTrait;
use tracing::{info, warn};

use super::dto::{
    ContratoDto, CreateContratoRequest, EncerrarContratoRequest, UpdateContratoRequest,
};
use crate::domain::contrato::{AtualizaContrato, NovoContrato};
use crate::domain::imovel::SituacaoImovel;
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::entities::contrato;
use crate::interfaces::http::common::{
    db_error_response, domain_error_response, ApiResponse, ListParams, PaginatedResponse,
    ValidatedJson,
};
use crate::listing::{
    paginate, FilterDescriptor, ListDefinition, ListRequest, SelectOption, SortDescriptor,
    SortDirection,
};

/// Contrato handler state
#[derive(Clone)]
pub struct ContratoHandlerState {
    pub db: sea_orm::DatabaseConnection,
    pub repos: Arc<dyn RepositoryProvider>,
}

fn list_definition() -> ListDefinition<contrato::Entity> {
    ListDefinition::new(contrato::Column::DataInicio, SortDirection::Desc)
        .with_filters(vec![
            FilterDescriptor::text("codigo", "Código", contrato::Column::Codigo)
                .with_placeholder("Buscar..."),
            FilterDescriptor::select(
                "status",
                "Status",
                contrato::Column::Status,
                vec![
                    SelectOption::new("ATIVO", "Ativo"),
                    SelectOption::new("SUSPENSO", "Suspenso"),
                    SelectOption::new("ENCERRADO", "Encerrado"),
                ],
            ),
            FilterDescriptor::date_from("inicioDe", "Início De", contrato::Column::DataInicio),
            FilterDescriptor::date_to("inicioAte", "Início Até", contrato::Column::DataInicio),
        ])
        .with_sorts(vec![
            SortDescriptor::desc("dataInicio", "Início", contrato::Column::DataInicio),
            SortDescriptor::desc(
                "valorAluguel",
                "Valor",
                contrato::Column::ValorAluguelCentavos,
            ),
            SortDescriptor::asc("status", "Status", contrato::Column::Status),
        ])
        .with_quick_search(vec![contrato::Column::Codigo])
}

#[utoipa::path(
    get,
    path = "/api/v1/contratos",
    tag = "Contratos",
    security(("bearer_auth" = [])),
    params(ListParams),
    responses(
        (status = 200, description = "Contrato list", body = PaginatedResponse<ContratoDto>)
    )
)]
pub async fn list_contratos(
    State(state): State<ContratoHandlerState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PaginatedResponse<ContratoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let request = ListRequest::from_params(params);
    let page = paginate(
        &state.db,
        contrato::Entity::find(),
        &list_definition(),
        &request,
    )
    .await
    .map_err(db_error_response)?;

    Ok(Json(PaginatedResponse::from_page(page, ContratoDto::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/contratos/{id}",
    tag = "Contratos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Contrato ID")),
    responses(
        (status = 200, description = "Contrato details", body = ApiResponse<ContratoDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_contrato(
    State(state): State<ContratoHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ContratoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.contratos().find_by_id(id).await {
        Ok(Some(ct)) => Ok(Json(ApiResponse::success(ContratoDto::from_domain(ct)))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Contrato {} not found", id))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/contratos",
    tag = "Contratos",
    security(("bearer_auth" = [])),
    request_body = CreateContratoRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<ContratoDto>),
        (status = 400, description = "Referenced records missing or unfit"),
        (status = 409, description = "Imóvel already under contract"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_contrato(
    State(state): State<ContratoHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateContratoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ContratoDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let bad_request = |msg: String| (StatusCode::BAD_REQUEST, Json(ApiResponse::error(msg)));

    // Imóvel must exist and be open for rental
    let imovel = state
        .repos
        .imoveis()
        .find_by_id(request.imovel_id)
        .await
        .map_err(domain_error_response)?;

    let Some(imovel) = imovel else {
        return Err(bad_request(format!("Imóvel {} not found", request.imovel_id)));
    };
    if !imovel.pode_alugar() {
        return Err(bad_request(format!(
            "Imóvel {} is not available for rental",
            imovel.codigo_interno
        )));
    }

    // One active contract per imóvel
    let existing = state
        .repos
        .contratos()
        .find_ativo_por_imovel(request.imovel_id)
        .await
        .map_err(domain_error_response)?;

    if let Some(existing) = existing {
        return Err((
            StatusCode::CONFLICT,
            Json(ApiResponse::error(format!(
                "Imóvel {} already has active contract {}",
                request.imovel_id, existing.codigo
            ))),
        ));
    }

    // Parties must exist and carry the matching roles
    let locador = state
        .repos
        .pessoas()
        .find_by_id(request.locador_id)
        .await
        .map_err(domain_error_response)?;
    match locador {
        None => return Err(bad_request(format!("Pessoa {} not found", request.locador_id))),
        Some(p) if !p.locador => {
            return Err(bad_request(format!(
                "Pessoa {} is not registered as locador",
                request.locador_id
            )))
        }
        Some(_) => {}
    }

    let locatario = state
        .repos
        .pessoas()
        .find_by_id(request.locatario_id)
        .await
        .map_err(domain_error_response)?;
    match locatario {
        None => {
            return Err(bad_request(format!(
                "Pessoa {} not found",
                request.locatario_id
            )))
        }
        Some(p) if !p.locatario => {
            return Err(bad_request(format!(
                "Pessoa {} is not registered as locatário",
                request.locatario_id
            )))
        }
        Some(_) => {}
    }

    let dados = NovoContrato {
        codigo: request.codigo,
        imovel_id: request.imovel_id,
        locador_id: request.locador_id,
        locatario_id: request.locatario_id,
        fiador_id: request.fiador_id,
        data_inicio: request.data_inicio,
        valor_aluguel_centavos: request.valor_aluguel_centavos,
        dia_vencimento: request.dia_vencimento,
    };

    let contrato = state
        .repos
        .contratos()
        .create(dados)
        .await
        .map_err(domain_error_response)?;

    info!(
        "Contrato {} opened for imóvel {} (locatário {})",
        contrato.codigo, contrato.imovel_id, contrato.locatario_id
    );

    // The imóvel follows the contract; a failure here leaves the contract
    // valid, so log and move on
    if let Err(e) = state
        .repos
        .imoveis()
        .set_situacao(contrato.imovel_id, SituacaoImovel::Alugado)
        .await
    {
        warn!(
            "Failed to flag imóvel {} as alugado: {}",
            contrato.imovel_id, e
        );
    }

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ContratoDto::from_domain(contrato))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/contratos/{id}",
    tag = "Contratos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Contrato ID")),
    request_body = UpdateContratoRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<ContratoDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_contrato(
    State(state): State<ContratoHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateContratoRequest>,
) -> Result<Json<ApiResponse<ContratoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let dados = AtualizaContrato {
        fiador_id: request.fiador_id,
        valor_aluguel_centavos: request.valor_aluguel_centavos,
        dia_vencimento: request.dia_vencimento,
        status: None,
    };

    match state.repos.contratos().update(id, dados).await {
        Ok(Some(ct)) => Ok(Json(ApiResponse::success(ContratoDto::from_domain(ct)))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Contrato {} not found", id))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/contratos/{id}/encerrar",
    tag = "Contratos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Contrato ID")),
    request_body = EncerrarContratoRequest,
    responses(
        (status = 200, description = "Closed", body = ApiResponse<ContratoDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Contract is not active")
    )
)]
pub async fn encerrar_contrato(
    State(state): State<ContratoHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<EncerrarContratoRequest>,
) -> Result<Json<ApiResponse<ContratoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let contrato = state
        .repos
        .contratos()
        .encerrar(id, request.data_fim)
        .await
        .map_err(domain_error_response)?;

    info!("Contrato {} closed on {}", contrato.codigo, request.data_fim);

    if let Err(e) = state
        .repos
        .imoveis()
        .set_situacao(contrato.imovel_id, SituacaoImovel::Disponivel)
        .await
    {
        warn!(
            "Failed to release imóvel {} after closing contract: {}",
            contrato.imovel_id, e
        );
    }

    Ok(Json(ApiResponse::success(ContratoDto::from_domain(contrato))))
}
