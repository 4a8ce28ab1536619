//! SeaORM repository implementations

pub mod boleto_repository;
pub mod contrato_repository;
pub mod imovel_repository;
pub mod pessoa_repository;
pub mod repository_provider;

pub use boleto_repository::SeaOrmBoletoRepository;
pub use contrato_repository::SeaOrmContratoRepository;
pub use imovel_repository::SeaOrmImovelRepository;
pub use pessoa_repository::SeaOrmPessoaRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
