//! Unified repository access backed by SeaORM

use sea_orm::DatabaseConnection;

use super::{
    SeaOrmBoletoRepository, SeaOrmContratoRepository, SeaOrmImovelRepository,
    SeaOrmPessoaRepository,
};
use crate::domain::{
    BoletoRepository, ContratoRepository, ImovelRepository, PessoaRepository, RepositoryProvider,
};

/// Bundles one repository per aggregate over a shared connection pool.
pub struct SeaOrmRepositoryProvider {
    pessoas: SeaOrmPessoaRepository,
    imoveis: SeaOrmImovelRepository,
    contratos: SeaOrmContratoRepository,
    boletos: SeaOrmBoletoRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            pessoas: SeaOrmPessoaRepository::new(db.clone()),
            imoveis: SeaOrmImovelRepository::new(db.clone()),
            contratos: SeaOrmContratoRepository::new(db.clone()),
            boletos: SeaOrmBoletoRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn pessoas(&self) -> &dyn PessoaRepository {
        &self.pessoas
    }

    fn imoveis(&self) -> &dyn ImovelRepository {
        &self.imoveis
    }

    fn contratos(&self) -> &dyn ContratoRepository {
        &self.contratos
    }

    fn boletos(&self) -> &dyn BoletoRepository {
        &self.boletos
    }
}
