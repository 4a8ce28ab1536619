pub mod model;
pub mod repository;

pub use model::{AtualizaPessoa, NaturezaPessoa, NovaPessoa, Pessoa};
pub use repository::PessoaRepository;
