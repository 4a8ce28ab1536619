//! SeaORM entity definitions

pub mod bairro;
pub mod boleto;
pub mod cidade;
pub mod conta_bancaria;
pub mod contrato;
pub mod estado;
pub mod imovel;
pub mod lancamento;
pub mod pessoa;
pub mod user;
