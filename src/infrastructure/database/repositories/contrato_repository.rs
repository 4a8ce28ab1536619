//! SeaORM implementation of ContratoRepository

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::domain::contrato::{
    AtualizaContrato, Contrato, ContratoRepository, ContratoStatus, NovoContrato,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::contrato;

pub struct SeaOrmContratoRepository {
    db: DatabaseConnection,
}

impl SeaOrmContratoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: contrato::Model) -> Contrato {
    Contrato {
        id: m.id,
        codigo: m.codigo,
        imovel_id: m.imovel_id,
        locador_id: m.locador_id,
        locatario_id: m.locatario_id,
        fiador_id: m.fiador_id,
        data_inicio: m.data_inicio,
        data_fim: m.data_fim,
        valor_aluguel_centavos: m.valor_aluguel_centavos,
        dia_vencimento: m.dia_vencimento as u8,
        status: ContratoStatus::from_str(&m.status).unwrap_or(ContratoStatus::Encerrado),
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

// ── ContratoRepository impl ─────────────────────────────────────

#[async_trait]
impl ContratoRepository for SeaOrmContratoRepository {
    async fn create(&self, dados: NovoContrato) -> DomainResult<Contrato> {
        debug!("Creating contrato: {}", dados.codigo);
        let now = Utc::now();

        let model = contrato::ActiveModel {
            id: NotSet,
            codigo: Set(dados.codigo),
            imovel_id: Set(dados.imovel_id),
            locador_id: Set(dados.locador_id),
            locatario_id: Set(dados.locatario_id),
            fiador_id: Set(dados.fiador_id),
            data_inicio: Set(dados.data_inicio),
            data_fim: Set(None),
            valor_aluguel_centavos: Set(dados.valor_aluguel_centavos),
            dia_vencimento: Set(dados.dia_vencimento as i32),
            status: Set(ContratoStatus::Ativo.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
                DomainError::Conflict("Contract code already in use".to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(model_to_domain(created))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Contrato>> {
        let model = contrato::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_ativo_por_imovel(&self, imovel_id: i32) -> DomainResult<Option<Contrato>> {
        let model = contrato::Entity::find()
            .filter(contrato::Column::ImovelId.eq(imovel_id))
            .filter(contrato::Column::Status.eq(ContratoStatus::Ativo.as_str()))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, id: i32, dados: AtualizaContrato) -> DomainResult<Option<Contrato>> {
        let existing = contrato::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: contrato::ActiveModel = existing.into();

        if let Some(fiador_id) = dados.fiador_id {
            active.fiador_id = Set(Some(fiador_id));
        }
        if let Some(valor) = dados.valor_aluguel_centavos {
            active.valor_aluguel_centavos = Set(valor);
        }
        if let Some(dia) = dados.dia_vencimento {
            active.dia_vencimento = Set(dia as i32);
        }
        if let Some(status) = dados.status {
            active.status = Set(status.as_str().to_string());
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(db_err)?;
        Ok(Some(model_to_domain(updated)))
    }

    async fn encerrar(&self, id: i32, data_fim: NaiveDate) -> DomainResult<Contrato> {
        debug!("Closing contrato {}", id);

        let existing = contrato::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Contrato",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut domain = model_to_domain(existing.clone());
        if !domain.is_ativo() {
            return Err(DomainError::InvalidOperation(format!(
                "Contrato {} is not active",
                domain.codigo
            )));
        }
        domain.encerrar(data_fim);

        let mut active: contrato::ActiveModel = existing.into();
        active.status = Set(domain.status.as_str().to_string());
        active.data_fim = Set(domain.data_fim);
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(updated))
    }
}
