//! Lançamento financeiro handlers

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, Set};

use super::dto::{CreateLancamentoRequest, LancamentoDto, UpdateLancamentoRequest};
use crate::infrastructure::database::entities::{conta_bancaria, imovel, lancamento};
use crate::interfaces::http::common::{
    db_error_response, ApiResponse, ListParams, PaginatedResponse, ValidatedJson,
};
use crate::listing::{
    paginate, FilterDescriptor, ListDefinition, ListRequest, SelectOption, SortDescriptor,
    SortDirection,
};

const STATUS_VALUES: [&str; 3] = ["PENDENTE", "PAGO", "CANCELADO"];

/// Lançamento handler state
#[derive(Clone)]
pub struct LancamentoHandlerState {
    pub db: sea_orm::DatabaseConnection,
}

fn list_definition() -> ListDefinition<lancamento::Entity> {
    ListDefinition::new(lancamento::Column::DataVencimento, SortDirection::Desc)
        .with_filters(vec![
            FilterDescriptor::select(
                "tipo",
                "Tipo",
                lancamento::Column::Tipo,
                vec![
                    SelectOption::new("C", "Crédito"),
                    SelectOption::new("D", "Débito"),
                ],
            ),
            FilterDescriptor::select(
                "status",
                "Status",
                lancamento::Column::Status,
                vec![
                    SelectOption::new("PENDENTE", "Pendente"),
                    SelectOption::new("PAGO", "Pago"),
                    SelectOption::new("CANCELADO", "Cancelado"),
                ],
            ),
            FilterDescriptor::date_from(
                "vencimentoDe",
                "Venc. De",
                lancamento::Column::DataVencimento,
            ),
            FilterDescriptor::date_to(
                "vencimentoAte",
                "Venc. Até",
                lancamento::Column::DataVencimento,
            ),
            FilterDescriptor::select("competencia", "Competência", lancamento::Column::Competencia, vec![]),
            FilterDescriptor::boolean("conciliado", "Conciliado", lancamento::Column::Conciliado),
        ])
        .with_sorts(vec![
            SortDescriptor::desc(
                "dataVencimento",
                "Vencimento",
                lancamento::Column::DataVencimento,
            ),
            SortDescriptor::desc("competencia", "Competência", lancamento::Column::Competencia),
            SortDescriptor::desc("valor", "Valor", lancamento::Column::ValorCentavos),
            SortDescriptor::asc("status", "Status", lancamento::Column::Status),
        ])
        .with_quick_search(vec![
            lancamento::Column::Historico,
            lancamento::Column::NumeroDocumento,
        ])
}

#[utoipa::path(
    get,
    path = "/api/v1/lancamentos",
    tag = "Lancamentos",
    security(("bearer_auth" = [])),
    params(ListParams),
    responses(
        (status = 200, description = "Lançamento list", body = PaginatedResponse<LancamentoDto>)
    )
)]
pub async fn list_lancamentos(
    State(state): State<LancamentoHandlerState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PaginatedResponse<LancamentoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let request = ListRequest::from_params(params);
    let page = paginate(
        &state.db,
        lancamento::Entity::find(),
        &list_definition(),
        &request,
    )
    .await
    .map_err(db_error_response)?;

    Ok(Json(PaginatedResponse::from_page(page, LancamentoDto::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/lancamentos/{id}",
    tag = "Lancamentos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Lançamento ID")),
    responses(
        (status = 200, description = "Lançamento details", body = ApiResponse<LancamentoDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_lancamento(
    State(state): State<LancamentoHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<LancamentoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let model = lancamento::Entity::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    match model {
        Some(m) => Ok(Json(ApiResponse::success(LancamentoDto::from(m)))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Lançamento not found")),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/lancamentos",
    tag = "Lancamentos",
    security(("bearer_auth" = [])),
    request_body = CreateLancamentoRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<LancamentoDto>),
        (status = 400, description = "Bad references or period"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_lancamento(
    State(state): State<LancamentoHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateLancamentoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LancamentoDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let bad_request = |msg: String| (StatusCode::BAD_REQUEST, Json(ApiResponse::error(msg)));

    if request.tipo != "C" && request.tipo != "D" {
        return Err(bad_request("tipo must be 'C' or 'D'".to_string()));
    }

    // "YYYY-MM" — parseable once padded to a full date
    let competencia_ok =
        NaiveDate::parse_from_str(&format!("{}-01", request.competencia), "%Y-%m-%d").is_ok();
    if !competencia_ok {
        return Err(bad_request(format!(
            "competencia '{}' is not a valid YYYY-MM period",
            request.competencia
        )));
    }

    if let Some(conta_id) = request.conta_bancaria_id {
        let conta = conta_bancaria::Entity::find_by_id(conta_id)
            .one(&state.db)
            .await
            .map_err(db_error_response)?;
        if conta.is_none() {
            return Err(bad_request(format!("Conta bancária {} not found", conta_id)));
        }
    }

    if let Some(imovel_id) = request.imovel_id {
        let im = imovel::Entity::find_by_id(imovel_id)
            .one(&state.db)
            .await
            .map_err(db_error_response)?;
        if im.is_none() {
            return Err(bad_request(format!("Imóvel {} not found", imovel_id)));
        }
    }

    let now = chrono::Utc::now();
    let model = lancamento::ActiveModel {
        id: NotSet,
        conta_bancaria_id: Set(request.conta_bancaria_id),
        imovel_id: Set(request.imovel_id),
        historico: Set(request.historico),
        numero_documento: Set(request.numero_documento),
        competencia: Set(request.competencia),
        data_vencimento: Set(request.data_vencimento),
        valor_centavos: Set(request.valor_centavos),
        tipo: Set(request.tipo),
        status: Set("PENDENTE".to_string()),
        conciliado: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = model.insert(&state.db).await.map_err(db_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(LancamentoDto::from(created))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/lancamentos/{id}",
    tag = "Lancamentos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Lançamento ID")),
    request_body = UpdateLancamentoRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<LancamentoDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_lancamento(
    State(state): State<LancamentoHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateLancamentoRequest>,
) -> Result<Json<ApiResponse<LancamentoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    if let Some(ref status) = request.status {
        if !STATUS_VALUES.contains(&status.as_str()) {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(
                    "status must be PENDENTE, PAGO or CANCELADO",
                )),
            ));
        }
    }

    let model = lancamento::Entity::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    let Some(model) = model else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Lançamento not found")),
        ));
    };

    let mut active: lancamento::ActiveModel = model.into();
    if let Some(historico) = request.historico {
        active.historico = Set(historico);
    }
    if let Some(numero) = request.numero_documento {
        active.numero_documento = Set(Some(numero));
    }
    if let Some(vencimento) = request.data_vencimento {
        active.data_vencimento = Set(vencimento);
    }
    if let Some(valor) = request.valor_centavos {
        active.valor_centavos = Set(valor);
    }
    if let Some(status) = request.status {
        active.status = Set(status);
    }
    active.updated_at = Set(chrono::Utc::now());

    let updated = active.update(&state.db).await.map_err(db_error_response)?;
    Ok(Json(ApiResponse::success(LancamentoDto::from(updated))))
}

#[utoipa::path(
    post,
    path = "/api/v1/lancamentos/{id}/conciliar",
    tag = "Lancamentos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Lançamento ID")),
    responses(
        (status = 200, description = "Reconciled", body = ApiResponse<LancamentoDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Already reconciled")
    )
)]
pub async fn conciliar_lancamento(
    State(state): State<LancamentoHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<LancamentoDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let model = lancamento::Entity::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    let Some(model) = model else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Lançamento not found")),
        ));
    };

    if model.conciliado {
        return Err((
            StatusCode::CONFLICT,
            Json(ApiResponse::error("Lançamento already reconciled")),
        ));
    }

    let mut active: lancamento::ActiveModel = model.into();
    active.conciliado = Set(true);
    active.updated_at = Set(chrono::Utc::now());

    let updated = active.update(&state.db).await.map_err(db_error_response)?;
    Ok(Json(ApiResponse::success(LancamentoDto::from(updated))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/lancamentos/{id}",
    tag = "Lancamentos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Lançamento ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Reconciled entries cannot be deleted")
    )
)]
pub async fn delete_lancamento(
    State(state): State<LancamentoHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    let model = lancamento::Entity::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error_response)?;

    let Some(model) = model else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Lançamento not found")),
        ));
    };

    // Reconciled lines are part of the bank statement history
    if model.conciliado {
        return Err((
            StatusCode::CONFLICT,
            Json(ApiResponse::error(
                "Lançamento is reconciled and cannot be deleted",
            )),
        ));
    }

    lancamento::Entity::delete_by_id(id)
        .exec(&state.db)
        .await
        .map_err(db_error_response)?;

    Ok(Json(ApiResponse::success(())))
}
