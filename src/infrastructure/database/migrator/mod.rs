//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_estados;
mod m20240601_000002_create_cidades;
mod m20240601_000003_create_bairros;
mod m20240601_000004_create_pessoas;
mod m20240601_000005_create_users;
mod m20240601_000006_create_imoveis;
mod m20240601_000007_create_contratos;
mod m20240601_000008_create_boletos;
mod m20240601_000009_create_contas_bancarias;
mod m20240601_000010_create_lancamentos;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_estados::Migration),
            Box::new(m20240601_000002_create_cidades::Migration),
            Box::new(m20240601_000003_create_bairros::Migration),
            Box::new(m20240601_000004_create_pessoas::Migration),
            Box::new(m20240601_000005_create_users::Migration),
            Box::new(m20240601_000006_create_imoveis::Migration),
            Box::new(m20240601_000007_create_contratos::Migration),
            Box::new(m20240601_000008_create_boletos::Migration),
            Box::new(m20240601_000009_create_contas_bancarias::Migration),
            Box::new(m20240601_000010_create_lancamentos::Migration),
        ]
    }
}
