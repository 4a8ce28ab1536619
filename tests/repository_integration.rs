//! Repository integration tests against an in-memory SQLite database.
//!
//! Each test builds the full aggregate chain (pessoa → imóvel → contrato →
//! boleto) through the domain repositories, so the FK layout and the status
//! rules are exercised together.

use chrono::NaiveDate;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;

use imobiliaria_backoffice::domain::{
    DomainError, NaturezaPessoa, NovaPessoa, NovoBoleto, NovoContrato, NovoImovel,
    RepositoryProvider,
};
use imobiliaria_backoffice::infrastructure::database::migrator::Migrator;
use imobiliaria_backoffice::SeaOrmRepositoryProvider;

async fn setup() -> SeaOrmRepositoryProvider {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    SeaOrmRepositoryProvider::new(db)
}

fn data(ano: i32, mes: u32, dia: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
}

async fn criar_pessoa(
    repos: &SeaOrmRepositoryProvider,
    nome: &str,
    documento: &str,
    locador: bool,
    locatario: bool,
) -> i32 {
    repos
        .pessoas()
        .create(NovaPessoa {
            nome: nome.to_string(),
            documento: documento.to_string(),
            natureza: NaturezaPessoa::Fisica,
            email: None,
            telefone: None,
            locador,
            locatario,
            fiador: false,
            observacoes: None,
        })
        .await
        .unwrap()
        .id
}

/// Full chain up to an open contract; returns (contrato_id, locatario_id)
async fn criar_contrato(repos: &SeaOrmRepositoryProvider) -> (i32, i32) {
    let locador_id = criar_pessoa(repos, "João Locador", "11111111111", true, false).await;
    let locatario_id = criar_pessoa(repos, "Maria Locatária", "22222222222", false, true).await;

    let imovel = repos
        .imoveis()
        .create(NovoImovel {
            codigo_interno: "IM-0001".to_string(),
            tipo: "Apartamento".to_string(),
            endereco: "Rua das Flores, 100".to_string(),
            bairro_id: None,
            proprietario_id: locador_id,
            disponivel_aluguel: true,
            valor_aluguel_centavos: Some(250_000),
            qtd_quartos: 2,
        })
        .await
        .unwrap();

    let contrato = repos
        .contratos()
        .create(NovoContrato {
            codigo: "CT-2024-001".to_string(),
            imovel_id: imovel.id,
            locador_id,
            locatario_id,
            fiador_id: None,
            data_inicio: data(2024, 1, 1),
            valor_aluguel_centavos: 250_000,
            dia_vencimento: 10,
        })
        .await
        .unwrap();

    (contrato.id, locatario_id)
}

async fn emitir_boleto(
    repos: &SeaOrmRepositoryProvider,
    contrato_id: i32,
    pagador_id: i32,
    nosso_numero: &str,
    vencimento: NaiveDate,
) -> i32 {
    repos
        .boletos()
        .create(NovoBoleto {
            contrato_id,
            pagador_id,
            nosso_numero: nosso_numero.to_string(),
            seu_numero: None,
            valor_nominal_centavos: 250_000,
            data_emissao: data(2024, 1, 1),
            data_vencimento: vencimento,
            linha_digitavel: None,
        })
        .await
        .unwrap()
        .id
}

// ── Boletos ────────────────────────────────────────────────────

#[tokio::test]
async fn boleto_payment_lifecycle() {
    let repos = setup().await;
    let (contrato_id, pagador_id) = criar_contrato(&repos).await;
    let boleto_id = emitir_boleto(&repos, contrato_id, pagador_id, "000001", data(2024, 1, 10)).await;

    let pago = repos
        .boletos()
        .registrar_pagamento(boleto_id, data(2024, 1, 9), 250_000)
        .await
        .unwrap();

    assert!(pago.is_pago());
    assert_eq!(pago.data_pagamento, Some(data(2024, 1, 9)));
    assert_eq!(pago.valor_pago_centavos, Some(250_000));

    // settling twice is a state-machine violation
    let err = repos
        .boletos()
        .registrar_pagamento(boleto_id, data(2024, 1, 10), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidOperation(_)));

    // and a paid slip cannot be written off
    let err = repos.boletos().baixar(boleto_id).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidOperation(_)));
}

#[tokio::test]
async fn duplicate_nosso_numero_is_a_conflict() {
    let repos = setup().await;
    let (contrato_id, pagador_id) = criar_contrato(&repos).await;
    emitir_boleto(&repos, contrato_id, pagador_id, "000077", data(2024, 2, 10)).await;

    let err = repos
        .boletos()
        .create(NovoBoleto {
            contrato_id,
            pagador_id,
            nosso_numero: "000077".to_string(),
            seu_numero: None,
            valor_nominal_centavos: 100,
            data_emissao: data(2024, 2, 1),
            data_vencimento: data(2024, 2, 20),
            linha_digitavel: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Conflict(_)));
}

#[tokio::test]
async fn marcar_vencidos_skips_settled_slips() {
    let repos = setup().await;
    let (contrato_id, pagador_id) = criar_contrato(&repos).await;

    let cedo = emitir_boleto(&repos, contrato_id, pagador_id, "000010", data(2024, 1, 5)).await;
    emitir_boleto(&repos, contrato_id, pagador_id, "000011", data(2024, 1, 10)).await;
    let futuro = emitir_boleto(&repos, contrato_id, pagador_id, "000012", data(2024, 1, 15)).await;

    // settle the earliest before the sweep
    repos
        .boletos()
        .registrar_pagamento(cedo, data(2024, 1, 4), 250_000)
        .await
        .unwrap();

    let atualizados = repos.boletos().marcar_vencidos(data(2024, 1, 12)).await.unwrap();
    assert_eq!(atualizados, 1);

    // the slip due after the reference date is untouched
    let b = repos.boletos().find_by_id(futuro).await.unwrap().unwrap();
    assert_eq!(b.status.as_str(), "PENDENTE");
}

// ── Contratos ──────────────────────────────────────────────────

#[tokio::test]
async fn one_active_contract_per_imovel() {
    let repos = setup().await;
    let (contrato_id, _) = criar_contrato(&repos).await;

    let contrato = repos
        .contratos()
        .find_by_id(contrato_id)
        .await
        .unwrap()
        .unwrap();

    let ativo = repos
        .contratos()
        .find_ativo_por_imovel(contrato.imovel_id)
        .await
        .unwrap();
    assert_eq!(ativo.map(|c| c.id), Some(contrato_id));

    let encerrado = repos
        .contratos()
        .encerrar(contrato_id, data(2024, 12, 31))
        .await
        .unwrap();
    assert!(!encerrado.is_ativo());
    assert_eq!(encerrado.data_fim, Some(data(2024, 12, 31)));

    // no active contract left for the property
    let ativo = repos
        .contratos()
        .find_ativo_por_imovel(contrato.imovel_id)
        .await
        .unwrap();
    assert!(ativo.is_none());

    // closing twice is rejected
    let err = repos
        .contratos()
        .encerrar(contrato_id, data(2025, 1, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidOperation(_)));
}

// ── Pessoas ────────────────────────────────────────────────────

#[tokio::test]
async fn duplicate_documento_is_a_conflict() {
    let repos = setup().await;
    criar_pessoa(&repos, "Primeira", "33333333333", false, true).await;

    let err = repos
        .pessoas()
        .create(NovaPessoa {
            nome: "Segunda".to_string(),
            documento: "33333333333".to_string(),
            natureza: NaturezaPessoa::Fisica,
            email: None,
            telefone: None,
            locador: false,
            locatario: true,
            fiador: false,
            observacoes: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Conflict(_)));
}

#[tokio::test]
async fn delete_missing_pessoa_is_not_found() {
    let repos = setup().await;
    let err = repos.pessoas().delete(999).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}
