pub mod model;
pub mod repository;

pub use model::{AtualizaContrato, Contrato, ContratoStatus, NovoContrato};
pub use repository::ContratoRepository;
