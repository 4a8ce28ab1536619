//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    extract::FromRef,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::{admin_middleware, auth_middleware, AuthState};
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse};
use crate::interfaces::http::modules::{
    auth, bairros, boletos, cidades, contas_bancarias, contratos, estados, health, imoveis,
    lancamentos, pessoas,
};

/// Unified state for the whole API.
/// Axum extracts the specific handler state via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub repos: Arc<dyn RepositoryProvider>,
    pub jwt_config: JwtConfig,
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<AppState> for estados::handlers::EstadoHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self { db: s.db.clone() }
    }
}

impl FromRef<AppState> for cidades::handlers::CidadeHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self { db: s.db.clone() }
    }
}

impl FromRef<AppState> for bairros::handlers::BairroHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self { db: s.db.clone() }
    }
}

impl FromRef<AppState> for pessoas::handlers::PessoaHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            db: s.db.clone(),
            repos: Arc::clone(&s.repos),
        }
    }
}

impl FromRef<AppState> for imoveis::handlers::ImovelHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            db: s.db.clone(),
            repos: Arc::clone(&s.repos),
        }
    }
}

impl FromRef<AppState> for contratos::handlers::ContratoHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            db: s.db.clone(),
            repos: Arc::clone(&s.repos),
        }
    }
}

impl FromRef<AppState> for boletos::handlers::BoletoHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            db: s.db.clone(),
            repos: Arc::clone(&s.repos),
        }
    }
}

impl FromRef<AppState> for lancamentos::handlers::LancamentoHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self { db: s.db.clone() }
    }
}

impl FromRef<AppState> for contas_bancarias::handlers::ContaBancariaHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self { db: s.db.clone() }
    }
}

impl FromRef<AppState> for auth::handlers::AuthHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            db: s.db.clone(),
            jwt_config: s.jwt_config.clone(),
        }
    }
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Auth
        auth::handlers::login,
        auth::handlers::get_current_user,
        auth::handlers::register,
        auth::handlers::change_password,
        // Estados
        estados::handlers::list_estados,
        estados::handlers::get_estado,
        estados::handlers::create_estado,
        estados::handlers::update_estado,
        estados::handlers::delete_estado,
        // Cidades
        cidades::handlers::list_cidades,
        cidades::handlers::get_cidade,
        cidades::handlers::create_cidade,
        cidades::handlers::update_cidade,
        cidades::handlers::delete_cidade,
        // Bairros
        bairros::handlers::list_bairros,
        bairros::handlers::get_bairro,
        bairros::handlers::create_bairro,
        bairros::handlers::update_bairro,
        bairros::handlers::delete_bairro,
        // Pessoas
        pessoas::handlers::list_pessoas,
        pessoas::handlers::get_pessoa,
        pessoas::handlers::create_pessoa,
        pessoas::handlers::update_pessoa,
        pessoas::handlers::delete_pessoa,
        // Imóveis
        imoveis::handlers::list_imoveis,
        imoveis::handlers::get_imovel,
        imoveis::handlers::create_imovel,
        imoveis::handlers::update_imovel,
        imoveis::handlers::delete_imovel,
        // Contratos
        contratos::handlers::list_contratos,
        contratos::handlers::get_contrato,
        contratos::handlers::create_contrato,
        contratos::handlers::update_contrato,
        contratos::handlers::encerrar_contrato,
        // Boletos
        boletos::handlers::list_boletos,
        boletos::handlers::get_boleto,
        boletos::handlers::create_boleto,
        boletos::handlers::registrar_pagamento,
        boletos::handlers::baixar_boleto,
        boletos::handlers::marcar_vencidos,
        // Lançamentos
        lancamentos::handlers::list_lancamentos,
        lancamentos::handlers::get_lancamento,
        lancamentos::handlers::create_lancamento,
        lancamentos::handlers::update_lancamento,
        lancamentos::handlers::conciliar_lancamento,
        lancamentos::handlers::delete_lancamento,
        // Contas bancárias
        contas_bancarias::handlers::list_contas_bancarias,
        contas_bancarias::handlers::get_conta_bancaria,
        contas_bancarias::handlers::create_conta_bancaria,
        contas_bancarias::handlers::update_conta_bancaria,
        contas_bancarias::handlers::delete_conta_bancaria,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginatedResponse<estados::dto::EstadoDto>,
            PaginatedResponse<cidades::dto::CidadeDto>,
            PaginatedResponse<bairros::dto::BairroDto>,
            PaginatedResponse<pessoas::dto::PessoaDto>,
            PaginatedResponse<imoveis::dto::ImovelDto>,
            PaginatedResponse<contratos::dto::ContratoDto>,
            PaginatedResponse<boletos::dto::BoletoDto>,
            PaginatedResponse<lancamentos::dto::LancamentoDto>,
            PaginatedResponse<contas_bancarias::dto::ContaBancariaDto>,
            // Health
            health::handlers::HealthStatus,
            // Auth
            auth::dto::LoginRequest,
            auth::dto::LoginResponse,
            auth::dto::UserInfo,
            auth::dto::RegisterRequest,
            auth::dto::ChangePasswordRequest,
            // Estados
            estados::dto::EstadoDto,
            estados::dto::CreateEstadoRequest,
            estados::dto::UpdateEstadoRequest,
            // Cidades
            cidades::dto::CidadeDto,
            cidades::dto::CreateCidadeRequest,
            cidades::dto::UpdateCidadeRequest,
            // Bairros
            bairros::dto::BairroDto,
            bairros::dto::CreateBairroRequest,
            bairros::dto::UpdateBairroRequest,
            // Pessoas
            pessoas::dto::PessoaDto,
            pessoas::dto::CreatePessoaRequest,
            pessoas::dto::UpdatePessoaRequest,
            // Imóveis
            imoveis::dto::ImovelDto,
            imoveis::dto::CreateImovelRequest,
            imoveis::dto::UpdateImovelRequest,
            // Contratos
            contratos::dto::ContratoDto,
            contratos::dto::CreateContratoRequest,
            contratos::dto::UpdateContratoRequest,
            contratos::dto::EncerrarContratoRequest,
            // Boletos
            boletos::dto::BoletoDto,
            boletos::dto::CreateBoletoRequest,
            boletos::dto::RegistrarPagamentoRequest,
            boletos::dto::MarcarVencidosRequest,
            boletos::dto::MarcarVencidosResponse,
            // Lançamentos
            lancamentos::dto::LancamentoDto,
            lancamentos::dto::CreateLancamentoRequest,
            lancamentos::dto::UpdateLancamentoRequest,
            // Contas bancárias
            contas_bancarias::dto::ContaBancariaDto,
            contas_bancarias::dto::CreateContaBancariaRequest,
            contas_bancarias::dto::UpdateContaBancariaRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Auth", description = "Authentication and user management"),
        (name = "Estados", description = "Estados (UF) lookup table"),
        (name = "Cidades", description = "Cidades lookup table"),
        (name = "Bairros", description = "Bairros lookup table"),
        (name = "Pessoas", description = "Locadores, locatários and fiadores"),
        (name = "Imoveis", description = "Property registry"),
        (name = "Contratos", description = "Rental contracts"),
        (name = "Boletos", description = "Payment slips"),
        (name = "Lancamentos", description = "Financial ledger"),
        (name = "ContasBancarias", description = "Bank accounts"),
    )
)]
pub struct ApiDoc;

/// Build the full API router.
///
/// `/health`, `/api/v1/auth/login` and the Swagger UI are public; everything
/// else requires a valid JWT, and user registration additionally requires the
/// admin role.
pub fn create_api_router(
    db: DatabaseConnection,
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
) -> Router {
    let auth_state = AuthState {
        jwt_config: jwt_config.clone(),
    };
    let app_state = AppState {
        db,
        repos,
        jwt_config,
    };

    let public = Router::new()
        .route("/health", get(health::handlers::health_check))
        .route("/api/v1/auth/login", post(auth::handlers::login))
        .with_state(app_state.clone());

    let admin_only = Router::new()
        .route("/api/v1/auth/register", post(auth::handlers::register))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(app_state.clone());

    let protected = Router::new()
        // Auth
        .route("/api/v1/auth/me", get(auth::handlers::get_current_user))
        .route(
            "/api/v1/auth/change-password",
            post(auth::handlers::change_password),
        )
        // Estados
        .route("/api/v1/estados", get(estados::handlers::list_estados))
        .route("/api/v1/estados", post(estados::handlers::create_estado))
        .route("/api/v1/estados/{id}", get(estados::handlers::get_estado))
        .route("/api/v1/estados/{id}", put(estados::handlers::update_estado))
        .route(
            "/api/v1/estados/{id}",
            delete(estados::handlers::delete_estado),
        )
        // Cidades
        .route("/api/v1/cidades", get(cidades::handlers::list_cidades))
        .route("/api/v1/cidades", post(cidades::handlers::create_cidade))
        .route("/api/v1/cidades/{id}", get(cidades::handlers::get_cidade))
        .route("/api/v1/cidades/{id}", put(cidades::handlers::update_cidade))
        .route(
            "/api/v1/cidades/{id}",
            delete(cidades::handlers::delete_cidade),
        )
        // Bairros
        .route("/api/v1/bairros", get(bairros::handlers::list_bairros))
        .route("/api/v1/bairros", post(bairros::handlers::create_bairro))
        .route("/api/v1/bairros/{id}", get(bairros::handlers::get_bairro))
        .route("/api/v1/bairros/{id}", put(bairros::handlers::update_bairro))
        .route(
            "/api/v1/bairros/{id}",
            delete(bairros::handlers::delete_bairro),
        )
        // Pessoas
        .route("/api/v1/pessoas", get(pessoas::handlers::list_pessoas))
        .route("/api/v1/pessoas", post(pessoas::handlers::create_pessoa))
        .route("/api/v1/pessoas/{id}", get(pessoas::handlers::get_pessoa))
        .route("/api/v1/pessoas/{id}", put(pessoas::handlers::update_pessoa))
        .route(
            "/api/v1/pessoas/{id}",
            delete(pessoas::handlers::delete_pessoa),
        )
        // Imóveis
        .route("/api/v1/imoveis", get(imoveis::handlers::list_imoveis))
        .route("/api/v1/imoveis", post(imoveis::handlers::create_imovel))
        .route("/api/v1/imoveis/{id}", get(imoveis::handlers::get_imovel))
        .route("/api/v1/imoveis/{id}", put(imoveis::handlers::update_imovel))
        .route(
            "/api/v1/imoveis/{id}",
            delete(imoveis::handlers::delete_imovel),
        )
        // Contratos
        .route("/api/v1/contratos", get(contratos::handlers::list_contratos))
        .route(
            "/api/v1/contratos",
            post(contratos::handlers::create_contrato),
        )
        .route(
            "/api/v1/contratos/{id}",
            get(contratos::handlers::get_contrato),
        )
        .route(
            "/api/v1/contratos/{id}",
            put(contratos::handlers::update_contrato),
        )
        .route(
            "/api/v1/contratos/{id}/encerrar",
            post(contratos::handlers::encerrar_contrato),
        )
        // Boletos
        .route("/api/v1/boletos", get(boletos::handlers::list_boletos))
        .route("/api/v1/boletos", post(boletos::handlers::create_boleto))
        .route(
            "/api/v1/boletos/marcar-vencidos",
            post(boletos::handlers::marcar_vencidos),
        )
        .route("/api/v1/boletos/{id}", get(boletos::handlers::get_boleto))
        .route(
            "/api/v1/boletos/{id}/pagamento",
            post(boletos::handlers::registrar_pagamento),
        )
        .route(
            "/api/v1/boletos/{id}/baixa",
            post(boletos::handlers::baixar_boleto),
        )
        // Lançamentos
        .route(
            "/api/v1/lancamentos",
            get(lancamentos::handlers::list_lancamentos),
        )
        .route(
            "/api/v1/lancamentos",
            post(lancamentos::handlers::create_lancamento),
        )
        .route(
            "/api/v1/lancamentos/{id}",
            get(lancamentos::handlers::get_lancamento),
        )
        .route(
            "/api/v1/lancamentos/{id}",
            put(lancamentos::handlers::update_lancamento),
        )
        .route(
            "/api/v1/lancamentos/{id}",
            delete(lancamentos::handlers::delete_lancamento),
        )
        .route(
            "/api/v1/lancamentos/{id}/conciliar",
            post(lancamentos::handlers::conciliar_lancamento),
        )
        // Contas bancárias
        .route(
            "/api/v1/contas-bancarias",
            get(contas_bancarias::handlers::list_contas_bancarias),
        )
        .route(
            "/api/v1/contas-bancarias",
            post(contas_bancarias::handlers::create_conta_bancaria),
        )
        .route(
            "/api/v1/contas-bancarias/{id}",
            get(contas_bancarias::handlers::get_conta_bancaria),
        )
        .route(
            "/api/v1/contas-bancarias/{id}",
            put(contas_bancarias::handlers::update_conta_bancaria),
        )
        .route(
            "/api/v1/contas-bancarias/{id}",
            delete(contas_bancarias::handlers::delete_conta_bancaria),
        )
        .route_layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(app_state);

    Router::new()
        .merge(public)
        .merge(admin_only)
        .merge(protected)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
