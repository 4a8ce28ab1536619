//! # Imobiliária Back Office
//!
//! Back office for property management: imóveis, contratos, pessoas
//! (locadores/locatários/fiadores), boletos, lançamentos financeiros and the
//! address lookup tables (estados, cidades, bairros).
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and repository traits
//! - **listing**: Declarative filter/sort descriptors and the shared paginator
//! - **infrastructure**: External concerns (database, migrations, crypto)
//! - **interfaces**: REST API with Swagger documentation
//! - **auth**: JWT authentication middleware

pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod listing;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::database::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
