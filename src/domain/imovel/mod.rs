pub mod model;
pub mod repository;

pub use model::{AtualizaImovel, Imovel, NovoImovel, SituacaoImovel};
pub use repository::ImovelRepository;
