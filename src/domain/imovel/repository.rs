//! Imóvel repository interface

use async_trait::async_trait;

use super::model::{AtualizaImovel, Imovel, NovoImovel, SituacaoImovel};
use crate::domain::DomainResult;

#[async_trait]
pub trait ImovelRepository: Send + Sync {
    async fn create(&self, dados: NovoImovel) -> DomainResult<Imovel>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Imovel>>;
    async fn find_by_codigo(&self, codigo_interno: &str) -> DomainResult<Option<Imovel>>;
    async fn update(&self, id: i32, dados: AtualizaImovel) -> DomainResult<Option<Imovel>>;
    async fn set_situacao(&self, id: i32, situacao: SituacaoImovel) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
