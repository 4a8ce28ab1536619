//! Pessoa repository interface

use async_trait::async_trait;

use super::model::{AtualizaPessoa, NovaPessoa, Pessoa};
use crate::domain::DomainResult;

#[async_trait]
pub trait PessoaRepository: Send + Sync {
    async fn create(&self, dados: NovaPessoa) -> DomainResult<Pessoa>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Pessoa>>;
    async fn find_by_documento(&self, documento: &str) -> DomainResult<Option<Pessoa>>;
    async fn update(&self, id: i32, dados: AtualizaPessoa) -> DomainResult<Option<Pessoa>>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
