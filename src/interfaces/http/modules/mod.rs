//! Per-entity API modules
//!
//! Each module declares its own filter/sort descriptors (the controller glue)
//! and delegates the heavy lifting to the shared listing engine and, for the
//! aggregates, to the domain repositories.

pub mod auth;
pub mod bairros;
pub mod boletos;
pub mod cidades;
pub mod contas_bancarias;
pub mod contratos;
pub mod estados;
pub mod health;
pub mod imoveis;
pub mod lancamentos;
pub mod pessoas;
