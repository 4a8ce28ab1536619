//! SeaORM implementation of PessoaRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::domain::pessoa::{AtualizaPessoa, NaturezaPessoa, NovaPessoa, Pessoa, PessoaRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::pessoa;

pub struct SeaOrmPessoaRepository {
    db: DatabaseConnection,
}

impl SeaOrmPessoaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: pessoa::Model) -> Pessoa {
    Pessoa {
        id: m.id,
        nome: m.nome,
        documento: m.documento,
        natureza: NaturezaPessoa::from_str(&m.fisica_juridica).unwrap_or(NaturezaPessoa::Fisica),
        email: m.email,
        telefone: m.telefone,
        locador: m.locador,
        locatario: m.locatario,
        fiador: m.fiador,
        ativo: m.ativo,
        observacoes: m.observacoes,
        dt_cadastro: m.dt_cadastro,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

// ── PessoaRepository impl ───────────────────────────────────────

#[async_trait]
impl PessoaRepository for SeaOrmPessoaRepository {
    async fn create(&self, dados: NovaPessoa) -> DomainResult<Pessoa> {
        debug!("Creating pessoa: {}", dados.nome);

        let model = pessoa::ActiveModel {
            id: NotSet,
            nome: Set(dados.nome),
            documento: Set(dados.documento),
            fisica_juridica: Set(dados.natureza.as_str().to_string()),
            email: Set(dados.email),
            telefone: Set(dados.telefone),
            locador: Set(dados.locador),
            locatario: Set(dados.locatario),
            fiador: Set(dados.fiador),
            ativo: Set(true),
            observacoes: Set(dados.observacoes),
            dt_cadastro: Set(Utc::now()),
        };

        let created = model.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
                DomainError::Conflict("Documento already registered".to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(model_to_domain(created))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Pessoa>> {
        let model = pessoa::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_documento(&self, documento: &str) -> DomainResult<Option<Pessoa>> {
        let model = pessoa::Entity::find()
            .filter(pessoa::Column::Documento.eq(documento))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, id: i32, dados: AtualizaPessoa) -> DomainResult<Option<Pessoa>> {
        let existing = pessoa::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: pessoa::ActiveModel = existing.into();

        if let Some(nome) = dados.nome {
            active.nome = Set(nome);
        }
        if let Some(email) = dados.email {
            active.email = Set(Some(email));
        }
        if let Some(telefone) = dados.telefone {
            active.telefone = Set(Some(telefone));
        }
        if let Some(locador) = dados.locador {
            active.locador = Set(locador);
        }
        if let Some(locatario) = dados.locatario {
            active.locatario = Set(locatario);
        }
        if let Some(fiador) = dados.fiador {
            active.fiador = Set(fiador);
        }
        if let Some(ativo) = dados.ativo {
            active.ativo = Set(ativo);
        }
        if let Some(observacoes) = dados.observacoes {
            active.observacoes = Set(Some(observacoes));
        }

        let updated = active.update(&self.db).await.map_err(db_err)?;
        Ok(Some(model_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = pessoa::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Pessoa",
                field: "id",
                value: id.to_string(),
            });
        }

        Ok(())
    }
}
