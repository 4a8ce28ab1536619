//! SeaORM implementation of ImovelRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::domain::imovel::{
    AtualizaImovel, Imovel, ImovelRepository, NovoImovel, SituacaoImovel,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::imovel;

pub struct SeaOrmImovelRepository {
    db: DatabaseConnection,
}

impl SeaOrmImovelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: imovel::Model) -> Imovel {
    Imovel {
        id: m.id,
        codigo_interno: m.codigo_interno,
        tipo: m.tipo,
        endereco: m.endereco,
        bairro_id: m.bairro_id,
        proprietario_id: m.proprietario_id,
        situacao: SituacaoImovel::from_str(&m.situacao).unwrap_or(SituacaoImovel::Indisponivel),
        disponivel_aluguel: m.disponivel_aluguel,
        valor_aluguel_centavos: m.valor_aluguel_centavos,
        qtd_quartos: m.qtd_quartos,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

// ── ImovelRepository impl ───────────────────────────────────────

#[async_trait]
impl ImovelRepository for SeaOrmImovelRepository {
    async fn create(&self, dados: NovoImovel) -> DomainResult<Imovel> {
        debug!("Creating imovel: {}", dados.codigo_interno);
        let now = Utc::now();

        let model = imovel::ActiveModel {
            id: NotSet,
            codigo_interno: Set(dados.codigo_interno),
            tipo: Set(dados.tipo),
            endereco: Set(dados.endereco),
            bairro_id: Set(dados.bairro_id),
            proprietario_id: Set(dados.proprietario_id),
            situacao: Set(SituacaoImovel::Disponivel.as_str().to_string()),
            disponivel_aluguel: Set(dados.disponivel_aluguel),
            valor_aluguel_centavos: Set(dados.valor_aluguel_centavos),
            qtd_quartos: Set(dados.qtd_quartos),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
                DomainError::Conflict("Código interno already in use".to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(model_to_domain(created))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Imovel>> {
        let model = imovel::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_codigo(&self, codigo_interno: &str) -> DomainResult<Option<Imovel>> {
        let model = imovel::Entity::find()
            .filter(imovel::Column::CodigoInterno.eq(codigo_interno))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, id: i32, dados: AtualizaImovel) -> DomainResult<Option<Imovel>> {
        let existing = imovel::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: imovel::ActiveModel = existing.into();

        if let Some(tipo) = dados.tipo {
            active.tipo = Set(tipo);
        }
        if let Some(endereco) = dados.endereco {
            active.endereco = Set(endereco);
        }
        if let Some(bairro_id) = dados.bairro_id {
            active.bairro_id = Set(Some(bairro_id));
        }
        if let Some(situacao) = dados.situacao {
            active.situacao = Set(situacao.as_str().to_string());
        }
        if let Some(disponivel) = dados.disponivel_aluguel {
            active.disponivel_aluguel = Set(disponivel);
        }
        if let Some(valor) = dados.valor_aluguel_centavos {
            active.valor_aluguel_centavos = Set(Some(valor));
        }
        if let Some(quartos) = dados.qtd_quartos {
            active.qtd_quartos = Set(quartos);
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(db_err)?;
        Ok(Some(model_to_domain(updated)))
    }

    async fn set_situacao(&self, id: i32, situacao: SituacaoImovel) -> DomainResult<()> {
        debug!("Setting imovel {} situacao to {}", id, situacao.as_str());

        let existing = imovel::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Imovel",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut active: imovel::ActiveModel = existing.into();
        active.situacao = Set(situacao.as_str().to_string());
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = imovel::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Imovel",
                field: "id",
                value: id.to_string(),
            });
        }

        Ok(())
    }
}
