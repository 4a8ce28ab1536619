//! End-to-end tests for the shared listing engine against an in-memory
//! SQLite database, using the real migrations.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, EntityTrait, NotSet, Set};
use sea_orm_migration::MigratorTrait;

use imobiliaria_backoffice::infrastructure::database::entities::{estado, lancamento};
use imobiliaria_backoffice::infrastructure::database::migrator::Migrator;
use imobiliaria_backoffice::listing::{
    paginate, FilterDescriptor, ListDefinition, ListRequest, SortDescriptor, SortDirection,
};

async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

fn request(pairs: &[(&str, &str)]) -> ListRequest {
    let params: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ListRequest::from_params(params)
}

/// Same descriptor set the estados endpoint declares
fn estados_definition() -> ListDefinition<estado::Entity> {
    ListDefinition::new(estado::Column::Nome, SortDirection::Asc)
        .with_filters(vec![
            FilterDescriptor::text("nome", "Nome", estado::Column::Nome),
            FilterDescriptor::text("uf", "UF", estado::Column::Uf),
        ])
        .with_sorts(vec![
            SortDescriptor::asc("nome", "Nome", estado::Column::Nome),
            SortDescriptor::asc("uf", "UF", estado::Column::Uf),
            SortDescriptor::desc("id", "ID", estado::Column::Id),
        ])
        .with_quick_search(vec![estado::Column::Uf, estado::Column::Nome])
}

fn lancamentos_definition() -> ListDefinition<lancamento::Entity> {
    ListDefinition::new(lancamento::Column::DataVencimento, SortDirection::Desc)
        .with_filters(vec![
            FilterDescriptor::date_from(
                "vencimentoDe",
                "Venc. De",
                lancamento::Column::DataVencimento,
            ),
            FilterDescriptor::date_to(
                "vencimentoAte",
                "Venc. Até",
                lancamento::Column::DataVencimento,
            ),
            FilterDescriptor::boolean("conciliado", "Conciliado", lancamento::Column::Conciliado),
        ])
        .with_sorts(vec![SortDescriptor::desc(
            "dataVencimento",
            "Vencimento",
            lancamento::Column::DataVencimento,
        )])
}

async fn seed_estados(db: &DatabaseConnection, count: u8) {
    for i in 0..count {
        let model = estado::ActiveModel {
            id: NotSet,
            nome: Set(format!("Estado {:02}", i)),
            uf: Set(format!("{}{}", (b'A' + i / 26) as char, (b'A' + i % 26) as char)),
        };
        model.insert(db).await.unwrap();
    }
}

async fn seed_lancamento(db: &DatabaseConnection, dia: u32, conciliado: bool) {
    let now = Utc::now();
    let model = lancamento::ActiveModel {
        id: NotSet,
        conta_bancaria_id: Set(None),
        imovel_id: Set(None),
        historico: Set(format!("Aluguel dia {:02}", dia)),
        numero_documento: Set(None),
        competencia: Set("2024-01".to_string()),
        data_vencimento: Set(NaiveDate::from_ymd_opt(2024, 1, dia).unwrap()),
        valor_centavos: Set(1_000 * dia as i64),
        tipo: Set("C".to_string()),
        status: Set("PENDENTE".to_string()),
        conciliado: Set(conciliado),
        created_at: Set(now),
        updated_at: Set(now),
    };
    model.insert(db).await.unwrap();
}

// ── Clamping and allow-list ────────────────────────────────────

#[tokio::test]
async fn twenty_five_records_page_three_holds_the_remainder() {
    let db = setup_db().await;
    seed_estados(&db, 25).await;

    let page = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&[("page", "3"), ("perPage", "10")]),
    )
    .await
    .unwrap();

    assert_eq!(page.items.len(), 5);
    assert_eq!(page.total_items, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.current_page, 3);
    assert_eq!(page.per_page, 10);
}

#[tokio::test]
async fn page_beyond_last_returns_last_page_not_empty() {
    let db = setup_db().await;
    seed_estados(&db, 25).await;

    let page = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&[("page", "9999"), ("perPage", "10")]),
    )
    .await
    .unwrap();

    assert_eq!(page.current_page, 3);
    assert_eq!(page.items.len(), 5);
}

#[tokio::test]
async fn zero_matches_is_page_one_of_one() {
    let db = setup_db().await;
    seed_estados(&db, 5).await;

    let page = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&[("nome", "nada-parecido")]),
    )
    .await
    .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 0);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.current_page, 1);
}

#[tokio::test]
async fn disallowed_per_page_falls_back_to_default() {
    let db = setup_db().await;
    seed_estados(&db, 20).await;

    let page = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&[("perPage", "7")]),
    )
    .await
    .unwrap();

    assert_eq!(page.per_page, 15);
    assert_eq!(page.items.len(), 15);
}

#[tokio::test]
async fn repeated_call_returns_identical_result() {
    let db = setup_db().await;
    seed_estados(&db, 12).await;

    let params = [("page", "1"), ("perPage", "10"), ("sort", "uf"), ("dir", "DESC")];

    let first = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&params),
    )
    .await
    .unwrap();
    let second = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&params),
    )
    .await
    .unwrap();

    let first_ids: Vec<i32> = first.items.iter().map(|m| m.id).collect();
    let second_ids: Vec<i32> = second.items.iter().map(|m| m.id).collect();
    assert_eq!(first_ids, second_ids);
    assert_eq!(first.total_items, second.total_items);
    assert_eq!(first.total_pages, second.total_pages);
}

// ── Filters ────────────────────────────────────────────────────

#[tokio::test]
async fn unknown_query_key_changes_nothing() {
    let db = setup_db().await;
    seed_estados(&db, 8).await;

    let plain = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&[]),
    )
    .await
    .unwrap();
    let with_noise = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&[("foo", "bar")]),
    )
    .await
    .unwrap();

    let plain_ids: Vec<i32> = plain.items.iter().map(|m| m.id).collect();
    let noise_ids: Vec<i32> = with_noise.items.iter().map(|m| m.id).collect();
    assert_eq!(plain_ids, noise_ids);
    assert_eq!(plain.total_items, with_noise.total_items);
    // and the undeclared key is not echoed back
    assert!(!with_noise.filters.contains_key("foo"));
}

#[tokio::test]
async fn text_filter_is_case_insensitive_containment() {
    let db = setup_db().await;
    seed_estados(&db, 5).await;

    let page = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&[("nome", "eStAdO 03")]),
    )
    .await
    .unwrap();

    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].nome, "Estado 03");
}

#[tokio::test]
async fn range_pair_bounds_are_inclusive_and_compose() {
    let db = setup_db().await;
    for dia in 1..=31 {
        seed_lancamento(&db, dia, false).await;
    }

    let page = paginate(
        &db,
        lancamento::Entity::find(),
        &lancamentos_definition(),
        &request(&[
            ("vencimentoDe", "2024-01-10"),
            ("vencimentoAte", "2024-01-20"),
            ("perPage", "50"),
        ]),
    )
    .await
    .unwrap();

    assert_eq!(page.total_items, 11);
    let de = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    let ate = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
    assert!(page
        .items
        .iter()
        .all(|l| l.data_vencimento >= de && l.data_vencimento <= ate));
}

#[tokio::test]
async fn open_ended_range_widens() {
    let db = setup_db().await;
    for dia in 1..=31 {
        seed_lancamento(&db, dia, false).await;
    }

    let page = paginate(
        &db,
        lancamento::Entity::find(),
        &lancamentos_definition(),
        &request(&[("vencimentoDe", "2024-01-25"), ("perPage", "50")]),
    )
    .await
    .unwrap();

    // 25..=31, no upper bound
    assert_eq!(page.total_items, 7);
}

#[tokio::test]
async fn malformed_filter_value_is_treated_as_absent() {
    let db = setup_db().await;
    for dia in 1..=10 {
        seed_lancamento(&db, dia, false).await;
    }

    let page = paginate(
        &db,
        lancamento::Entity::find(),
        &lancamentos_definition(),
        &request(&[("vencimentoDe", "not-a-date")]),
    )
    .await
    .unwrap();

    // filter skipped, not a failure
    assert_eq!(page.total_items, 10);
}

#[tokio::test]
async fn boolean_filter_coerces_and_applies() {
    let db = setup_db().await;
    for dia in 1..=6 {
        seed_lancamento(&db, dia, dia % 2 == 0).await;
    }

    let page = paginate(
        &db,
        lancamento::Entity::find(),
        &lancamentos_definition(),
        &request(&[("conciliado", "true")]),
    )
    .await
    .unwrap();

    assert_eq!(page.total_items, 3);
    assert!(page.items.iter().all(|l| l.conciliado));
}

#[tokio::test]
async fn quick_search_or_matches_across_columns() {
    let db = setup_db().await;
    let nome_hit = estado::ActiveModel {
        id: NotSet,
        nome: Set("Santa Catarina".to_string()),
        uf: Set("SC".to_string()),
    };
    nome_hit.insert(&db).await.unwrap();
    let uf_hit = estado::ActiveModel {
        id: NotSet,
        nome: Set("Paraná".to_string()),
        uf: Set("PR".to_string()),
    };
    uf_hit.insert(&db).await.unwrap();
    let miss = estado::ActiveModel {
        id: NotSet,
        nome: Set("Bahia".to_string()),
        uf: Set("BA".to_string()),
    };
    miss.insert(&db).await.unwrap();

    // "sa" hits "Santa Catarina" by nome only; "pr" hits Paraná by uf
    let page = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&[("search", "sa")]),
    )
    .await
    .unwrap();
    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].uf, "SC");

    let page = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&[("search", "pr")]),
    )
    .await
    .unwrap();
    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].uf, "PR");
}

// ── Sorting ────────────────────────────────────────────────────

#[tokio::test]
async fn unknown_sort_key_behaves_like_omitted_sort() {
    let db = setup_db().await;
    seed_estados(&db, 10).await;

    let default_order = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&[]),
    )
    .await
    .unwrap();
    let bogus_sort = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&[("sort", "doesNotExist"), ("dir", "DESC")]),
    )
    .await
    .unwrap();

    let default_ids: Vec<i32> = default_order.items.iter().map(|m| m.id).collect();
    let bogus_ids: Vec<i32> = bogus_sort.items.iter().map(|m| m.id).collect();
    assert_eq!(default_ids, bogus_ids);
}

#[tokio::test]
async fn direction_override_reverses_order() {
    let db = setup_db().await;
    seed_estados(&db, 6).await;

    let asc = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&[("sort", "uf")]),
    )
    .await
    .unwrap();
    let desc = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&[("sort", "uf"), ("dir", "desc")]),
    )
    .await
    .unwrap();

    let mut asc_ufs: Vec<String> = asc.items.iter().map(|m| m.uf.clone()).collect();
    let desc_ufs: Vec<String> = desc.items.iter().map(|m| m.uf.clone()).collect();
    asc_ufs.reverse();
    assert_eq!(asc_ufs, desc_ufs);
}

// ── Count/bound consistency ────────────────────────────────────

#[tokio::test]
async fn total_is_independent_of_requested_page() {
    let db = setup_db().await;
    seed_estados(&db, 23).await;

    let first = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&[("page", "1"), ("perPage", "10")]),
    )
    .await
    .unwrap();
    let last = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&[("page", "3"), ("perPage", "10")]),
    )
    .await
    .unwrap();

    assert_eq!(first.total_items, 23);
    assert_eq!(last.total_items, 23);
    assert_eq!(last.items.len(), 3);
}

// ── Echoed state ───────────────────────────────────────────────

#[tokio::test]
async fn envelope_echoes_filter_and_sort_state() {
    let db = setup_db().await;
    seed_estados(&db, 3).await;

    let page = paginate(
        &db,
        estado::Entity::find(),
        &estados_definition(),
        &request(&[("nome", "Estado"), ("sort", "uf"), ("dir", "DESC")]),
    )
    .await
    .unwrap();

    assert_eq!(page.sort, "uf");
    assert_eq!(page.dir, SortDirection::Desc);
    assert_eq!(page.filters.get("nome").map(String::as_str), Some("Estado"));
    // declared but unsubmitted keys echo as empty
    assert_eq!(page.filters.get("uf").map(String::as_str), Some(""));
}
