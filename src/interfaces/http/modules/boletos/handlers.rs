//! Boleto management handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::EntityTrait;
use tracing::info;

use super::dto::{
    BoletoDto, CreateBoletoRequest, MarcarVencidosRequest, MarcarVencidosResponse,
    RegistrarPagamentoRequest,
};
use crate::domain::boleto::NovoBoleto;
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::entities::boleto;
use crate::interfaces::http::common::{
    db_error_response, domain_error_response, ApiResponse, ListParams, PaginatedResponse,
    ValidatedJson,
};
use crate::listing::{
    paginate, FilterDescriptor, ListDefinition, ListRequest, SelectOption, SortDescriptor,
    SortDirection,
};

/// Boleto handler state
#[derive(Clone)]
pub struct BoletoHandlerState {
    pub db: sea_orm::DatabaseConnection,
    pub repos: Arc<dyn RepositoryProvider>,
}

fn list_definition() -> ListDefinition<boleto::Entity> {
    ListDefinition::new(boleto::Column::DataVencimento, SortDirection::Desc)
        .with_filters(vec![
            FilterDescriptor::text("nossoNumero", "Nosso Número", boleto::Column::NossoNumero)
                .with_placeholder("Buscar..."),
            FilterDescriptor::select(
                "status",
                "Status",
                boleto::Column::Status,
                vec![
                    SelectOption::new("PENDENTE", "Pendente"),
                    SelectOption::new("REGISTRADO", "Registrado"),
                    SelectOption::new("PAGO", "Pago"),
                    SelectOption::new("VENCIDO", "Vencido"),
                    SelectOption::new("BAIXADO", "Baixado"),
                    SelectOption::new("PROTESTADO", "Protestado"),
                    SelectOption::new("ERRO", "Erro"),
                ],
            ),
            FilterDescriptor::date_from("vencimentoDe", "Venc. De", boleto::Column::DataVencimento),
            FilterDescriptor::date_to("vencimentoAte", "Venc. Até", boleto::Column::DataVencimento),
        ])
        .with_sorts(vec![
            SortDescriptor::desc("dataVencimento", "Vencimento", boleto::Column::DataVencimento),
            SortDescriptor::desc(
                "valorNominal",
                "Valor",
                boleto::Column::ValorNominalCentavos,
            ),
            SortDescriptor::desc("dataEmissao", "Emissão", boleto::Column::DataEmissao),
            SortDescriptor::asc("status", "Status", boleto::Column::Status),
        ])
}

#[utoipa::path(
    get,
    path = "/api/v1/boletos",
    tag = "Boletos",
    security(("bearer_auth" = [])),
    params(ListParams),
    responses(
        (status = 200, description = "Boleto list", body = PaginatedResponse<BoletoDto>)
    )
)]
pub async fn list_boletos(
    State(state): State<BoletoHandlerState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PaginatedResponse<BoletoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let request = ListRequest::from_params(params);
    let page = paginate(&state.db, boleto::Entity::find(), &list_definition(), &request)
        .await
        .map_err(db_error_response)?;

    Ok(Json(PaginatedResponse::from_page(page, BoletoDto::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/boletos/{id}",
    tag = "Boletos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Boleto ID")),
    responses(
        (status = 200, description = "Boleto details", body = ApiResponse<BoletoDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_boleto(
    State(state): State<BoletoHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<BoletoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.boletos().find_by_id(id).await {
        Ok(Some(b)) => Ok(Json(ApiResponse::success(BoletoDto::from_domain(b)))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Boleto {} not found", id))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/boletos",
    tag = "Boletos",
    security(("bearer_auth" = [])),
    request_body = CreateBoletoRequest,
    responses(
        (status = 201, description = "Issued", body = ApiResponse<BoletoDto>),
        (status = 400, description = "Referenced records missing or unfit"),
        (status = 409, description = "Nosso número already issued"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_boleto(
    State(state): State<BoletoHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateBoletoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BoletoDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let bad_request = |msg: String| (StatusCode::BAD_REQUEST, Json(ApiResponse::error(msg)));

    if request.data_vencimento < request.data_emissao {
        return Err(bad_request(
            "data_vencimento cannot precede data_emissao".to_string(),
        ));
    }

    // Slips are only issued against live contracts
    let contrato = state
        .repos
        .contratos()
        .find_by_id(request.contrato_id)
        .await
        .map_err(domain_error_response)?;

    match contrato {
        None => {
            return Err(bad_request(format!(
                "Contrato {} not found",
                request.contrato_id
            )))
        }
        Some(ct) if !ct.is_ativo() => {
            return Err(bad_request(format!("Contrato {} is not active", ct.codigo)))
        }
        Some(_) => {}
    }

    let pagador = state
        .repos
        .pessoas()
        .find_by_id(request.pagador_id)
        .await
        .map_err(domain_error_response)?;

    if pagador.is_none() {
        return Err(bad_request(format!(
            "Pessoa {} not found",
            request.pagador_id
        )));
    }

    let dados = NovoBoleto {
        contrato_id: request.contrato_id,
        pagador_id: request.pagador_id,
        nosso_numero: request.nosso_numero,
        seu_numero: request.seu_numero,
        valor_nominal_centavos: request.valor_nominal_centavos,
        data_emissao: request.data_emissao,
        data_vencimento: request.data_vencimento,
        linha_digitavel: request.linha_digitavel,
    };

    match state.repos.boletos().create(dados).await {
        Ok(b) => {
            info!("Boleto {} issued for contrato {}", b.nosso_numero, b.contrato_id);
            Ok((
                StatusCode::CREATED,
                Json(ApiResponse::success(BoletoDto::from_domain(b))),
            ))
        }
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/boletos/{id}/pagamento",
    tag = "Boletos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Boleto ID")),
    request_body = RegistrarPagamentoRequest,
    responses(
        (status = 200, description = "Settled", body = ApiResponse<BoletoDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Status does not accept payment")
    )
)]
pub async fn registrar_pagamento(
    State(state): State<BoletoHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<RegistrarPagamentoRequest>,
) -> Result<Json<ApiResponse<BoletoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let boleto = state
        .repos
        .boletos()
        .registrar_pagamento(id, request.data_pagamento, request.valor_pago_centavos)
        .await
        .map_err(domain_error_response)?;

    info!(
        "Boleto {} settled on {} ({} centavos)",
        boleto.nosso_numero, request.data_pagamento, request.valor_pago_centavos
    );

    Ok(Json(ApiResponse::success(BoletoDto::from_domain(boleto))))
}

#[utoipa::path(
    post,
    path = "/api/v1/boletos/{id}/baixa",
    tag = "Boletos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Boleto ID")),
    responses(
        (status = 200, description = "Written off", body = ApiResponse<BoletoDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Status does not allow write-off")
    )
)]
pub async fn baixar_boleto(
    State(state): State<BoletoHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<BoletoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let boleto = state
        .repos
        .boletos()
        .baixar(id)
        .await
        .map_err(domain_error_response)?;

    info!("Boleto {} written off", boleto.nosso_numero);

    Ok(Json(ApiResponse::success(BoletoDto::from_domain(boleto))))
}

#[utoipa::path(
    post,
    path = "/api/v1/boletos/marcar-vencidos",
    tag = "Boletos",
    security(("bearer_auth" = [])),
    request_body = MarcarVencidosRequest,
    responses(
        (status = 200, description = "Overdue slips flagged", body = ApiResponse<MarcarVencidosResponse>)
    )
)]
pub async fn marcar_vencidos(
    State(state): State<BoletoHandlerState>,
    Json(request): Json<MarcarVencidosRequest>,
) -> Result<Json<ApiResponse<MarcarVencidosResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let referencia = request
        .data_referencia
        .unwrap_or_else(|| Utc::now().date_naive());

    let atualizados = state
        .repos
        .boletos()
        .marcar_vencidos(referencia)
        .await
        .map_err(domain_error_response)?;

    if atualizados > 0 {
        info!("{} boletos flagged as vencidos (ref {})", atualizados, referencia);
    }

    Ok(Json(ApiResponse::success(MarcarVencidosResponse {
        atualizados,
    })))
}
