//! Contrato repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{AtualizaContrato, Contrato, NovoContrato};
use crate::domain::DomainResult;

#[async_trait]
pub trait ContratoRepository: Send + Sync {
    async fn create(&self, dados: NovoContrato) -> DomainResult<Contrato>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Contrato>>;
    /// The active contract for a property, if any. At most one exists.
    async fn find_ativo_por_imovel(&self, imovel_id: i32) -> DomainResult<Option<Contrato>>;
    async fn update(&self, id: i32, dados: AtualizaContrato) -> DomainResult<Option<Contrato>>;
    async fn encerrar(&self, id: i32, data_fim: NaiveDate) -> DomainResult<Contrato>;
}
