//! SeaORM implementation of BoletoRepository

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::domain::boleto::{Boleto, BoletoRepository, BoletoStatus, NovoBoleto};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::boleto;

pub struct SeaOrmBoletoRepository {
    db: DatabaseConnection,
}

impl SeaOrmBoletoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: boleto::Model) -> Boleto {
    Boleto {
        id: m.id,
        contrato_id: m.contrato_id,
        pagador_id: m.pagador_id,
        nosso_numero: m.nosso_numero,
        seu_numero: m.seu_numero,
        valor_nominal_centavos: m.valor_nominal_centavos,
        data_emissao: m.data_emissao,
        data_vencimento: m.data_vencimento,
        data_pagamento: m.data_pagamento,
        valor_pago_centavos: m.valor_pago_centavos,
        status: BoletoStatus::from_str(&m.status).unwrap_or(BoletoStatus::Erro),
        linha_digitavel: m.linha_digitavel,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

async fn load(db: &DatabaseConnection, id: i32) -> DomainResult<boleto::Model> {
    boleto::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or(DomainError::NotFound {
            entity: "Boleto",
            field: "id",
            value: id.to_string(),
        })
}

// ── BoletoRepository impl ───────────────────────────────────────

#[async_trait]
impl BoletoRepository for SeaOrmBoletoRepository {
    async fn create(&self, dados: NovoBoleto) -> DomainResult<Boleto> {
        debug!("Issuing boleto: {}", dados.nosso_numero);
        let now = Utc::now();

        let model = boleto::ActiveModel {
            id: NotSet,
            contrato_id: Set(dados.contrato_id),
            pagador_id: Set(dados.pagador_id),
            nosso_numero: Set(dados.nosso_numero),
            seu_numero: Set(dados.seu_numero),
            valor_nominal_centavos: Set(dados.valor_nominal_centavos),
            data_emissao: Set(dados.data_emissao),
            data_vencimento: Set(dados.data_vencimento),
            data_pagamento: Set(None),
            valor_pago_centavos: Set(None),
            status: Set(BoletoStatus::Pendente.as_str().to_string()),
            linha_digitavel: Set(dados.linha_digitavel),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
                DomainError::Conflict("Nosso número already issued".to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(model_to_domain(created))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Boleto>> {
        let model = boleto::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_nosso_numero(&self, nosso_numero: &str) -> DomainResult<Option<Boleto>> {
        let model = boleto::Entity::find()
            .filter(boleto::Column::NossoNumero.eq(nosso_numero))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn registrar_pagamento(
        &self,
        id: i32,
        data: NaiveDate,
        valor_centavos: i64,
    ) -> DomainResult<Boleto> {
        let existing = load(&self.db, id).await?;

        // Run the transition on the domain model so its rules decide
        let mut domain = model_to_domain(existing.clone());
        domain.registrar_pagamento(data, valor_centavos)?;

        let mut active: boleto::ActiveModel = existing.into();
        active.status = Set(domain.status.as_str().to_string());
        active.data_pagamento = Set(domain.data_pagamento);
        active.valor_pago_centavos = Set(domain.valor_pago_centavos);
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(db_err)?;
        debug!("Boleto {} settled", id);
        Ok(model_to_domain(updated))
    }

    async fn baixar(&self, id: i32) -> DomainResult<Boleto> {
        let existing = load(&self.db, id).await?;

        let mut domain = model_to_domain(existing.clone());
        domain.baixar()?;

        let mut active: boleto::ActiveModel = existing.into();
        active.status = Set(domain.status.as_str().to_string());
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(db_err)?;
        debug!("Boleto {} written off", id);
        Ok(model_to_domain(updated))
    }

    async fn marcar_vencidos(&self, hoje: NaiveDate) -> DomainResult<u64> {
        let result = boleto::Entity::update_many()
            .filter(boleto::Column::DataVencimento.lt(hoje))
            .filter(boleto::Column::Status.is_in([
                BoletoStatus::Pendente.as_str(),
                BoletoStatus::Registrado.as_str(),
            ]))
            .col_expr(
                boleto::Column::Status,
                Expr::value(BoletoStatus::Vencido.as_str()),
            )
            .col_expr(boleto::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected > 0 {
            debug!("{} boletos flagged as vencidos", result.rows_affected);
        }
        Ok(result.rows_affected)
    }
}
