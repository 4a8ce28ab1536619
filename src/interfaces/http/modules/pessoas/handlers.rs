//! Pessoa management handlers
//!
//! Listing goes straight through the shared engine; create/update/delete
//! delegate to the domain repository so the uniqueness and role rules stay in
//! one place.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sea_orm::EntityTrait;
use tracing::info;

use super::dto::{CreatePessoaRequest, PessoaDto, UpdatePessoaRequest};
use crate::domain::pessoa::{NaturezaPessoa, NovaPessoa};
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::entities::pessoa;
use crate::interfaces::http::common::{
    db_error_response, domain_error_response, ApiResponse, ListParams, PaginatedResponse,
    ValidatedJson,
};
use crate::listing::{
    paginate, FilterDescriptor, ListDefinition, ListRequest, SortDescriptor, SortDirection,
};

/// Pessoa handler state
#[derive(Clone)]
pub struct PessoaHandlerState {
    pub db: sea_orm::DatabaseConnection,
    pub repos: Arc<dyn RepositoryProvider>,
}

fn list_definition() -> ListDefinition<pessoa::Entity> {
    ListDefinition::new(pessoa::Column::Nome, SortDirection::Asc)
        .with_filters(vec![
            FilterDescriptor::text("nome", "Nome", pessoa::Column::Nome)
                .with_placeholder("Nome...")
                .with_weight(4),
            FilterDescriptor::text("documento", "CPF/CNPJ", pessoa::Column::Documento),
            FilterDescriptor::boolean("ativo", "Ativo", pessoa::Column::Ativo),
            FilterDescriptor::boolean("locador", "Locador", pessoa::Column::Locador),
            FilterDescriptor::boolean("locatario", "Locatário", pessoa::Column::Locatario),
        ])
        .with_sorts(vec![
            SortDescriptor::asc("nome", "Nome", pessoa::Column::Nome),
            SortDescriptor::desc("dtCadastro", "Cadastro", pessoa::Column::DtCadastro),
        ])
        .with_quick_search(vec![
            pessoa::Column::Nome,
            pessoa::Column::Documento,
            pessoa::Column::Email,
        ])
}

#[utoipa::path(
    get,
    path = "/api/v1/pessoas",
    tag = "Pessoas",
    security(("bearer_auth" = [])),
    params(ListParams),
    responses(
        (status = 200, description = "Pessoa list", body = PaginatedResponse<PessoaDto>)
    )
)]
pub async fn list_pessoas(
    State(state): State<PessoaHandlerState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PaginatedResponse<PessoaDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let request = ListRequest::from_params(params);
    let page = paginate(&state.db, pessoa::Entity::find(), &list_definition(), &request)
        .await
        .map_err(db_error_response)?;

    Ok(Json(PaginatedResponse::from_page(page, PessoaDto::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/pessoas/{id}",
    tag = "Pessoas",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Pessoa ID")),
    responses(
        (status = 200, description = "Pessoa details", body = ApiResponse<PessoaDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_pessoa(
    State(state): State<PessoaHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<PessoaDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.pessoas().find_by_id(id).await {
        Ok(Some(p)) => Ok(Json(ApiResponse::success(PessoaDto::from_domain(p)))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Pessoa {} not found", id))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/pessoas",
    tag = "Pessoas",
    security(("bearer_auth" = [])),
    request_body = CreatePessoaRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<PessoaDto>),
        (status = 409, description = "Documento already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_pessoa(
    State(state): State<PessoaHandlerState>,
    ValidatedJson(request): ValidatedJson<CreatePessoaRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PessoaDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let Some(natureza) = NaturezaPessoa::from_str(&request.fisica_juridica) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("fisica_juridica must be 'F' or 'J'")),
        ));
    };

    let dados = NovaPessoa {
        nome: request.nome,
        documento: request.documento,
        natureza,
        email: request.email,
        telefone: request.telefone,
        locador: request.locador,
        locatario: request.locatario,
        fiador: request.fiador,
        observacoes: request.observacoes,
    };

    match state.repos.pessoas().create(dados).await {
        Ok(p) => {
            info!("Pessoa {} registered ({})", p.id, p.nome);
            Ok((
                StatusCode::CREATED,
                Json(ApiResponse::success(PessoaDto::from_domain(p))),
            ))
        }
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/pessoas/{id}",
    tag = "Pessoas",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Pessoa ID")),
    request_body = UpdatePessoaRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<PessoaDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_pessoa(
    State(state): State<PessoaHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdatePessoaRequest>,
) -> Result<Json<ApiResponse<PessoaDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.pessoas().update(id, request.into_domain()).await {
        Ok(Some(p)) => Ok(Json(ApiResponse::success(PessoaDto::from_domain(p)))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Pessoa {} not found", id))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/pessoas/{id}",
    tag = "Pessoas",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Pessoa ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_pessoa(
    State(state): State<PessoaHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.pessoas().delete(id).await {
        Ok(()) => Ok(Json(ApiResponse::success(()))),
        Err(e) => Err(domain_error_response(e)),
    }
}
