//! Repository access for the domain layer

use super::boleto::BoletoRepository;
use super::contrato::ContratoRepository;
use super::imovel::ImovelRepository;
use super::pessoa::PessoaRepository;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let imovel = repos.imoveis().find_by_id(42).await?;
///     let contrato = repos.contratos().find_ativo_por_imovel(42).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn pessoas(&self) -> &dyn PessoaRepository;
    fn imoveis(&self) -> &dyn ImovelRepository;
    fn contratos(&self) -> &dyn ContratoRepository;
    fn boletos(&self) -> &dyn BoletoRepository;
}
