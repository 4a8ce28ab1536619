//! Boleto repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{Boleto, NovoBoleto};
use crate::domain::DomainResult;

#[async_trait]
pub trait BoletoRepository: Send + Sync {
    async fn create(&self, dados: NovoBoleto) -> DomainResult<Boleto>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Boleto>>;
    async fn find_by_nosso_numero(&self, nosso_numero: &str) -> DomainResult<Option<Boleto>>;
    /// Settle a slip; fails when its status does not accept payment
    async fn registrar_pagamento(
        &self,
        id: i32,
        data: NaiveDate,
        valor_centavos: i64,
    ) -> DomainResult<Boleto>;
    /// Write a slip off without payment
    async fn baixar(&self, id: i32) -> DomainResult<Boleto>;
    /// Flag every collectable slip due before `hoje` as VENCIDO;
    /// returns how many rows changed
    async fn marcar_vencidos(&self, hoje: NaiveDate) -> DomainResult<u64>;
}
