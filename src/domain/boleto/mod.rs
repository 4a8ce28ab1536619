pub mod model;
pub mod repository;

pub use model::{Boleto, BoletoStatus, NovoBoleto};
pub use repository::BoletoRepository;
