use std::sync::Arc;

use diesel::prelude::*;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use plata_core::alerts::AlertRepositoryTrait;
use plata_core::alerts::NewAlert;
use plata_core::profiles::{NewProfile, ProfileRepositoryTrait, UserProfile};
use plata_core::records::{NewRecord, RecordKind, RecordRepositoryTrait};
use plata_storage_sqlite::alerts::AlertRepository;
use plata_storage_sqlite::profiles::ProfileRepository;
use plata_storage_sqlite::records::RecordRepository;
use plata_storage_sqlite::{create_pool, get_connection, init, run_migrations, spawn_writer, DbPool, WriteHandle};

struct TestDb {
    // Held so the directory outlives the pool.
    _dir: TempDir,
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

fn setup_db() -> TestDb {
    let dir = TempDir::new().expect("temp dir");
    let db_path = init(dir.path().to_str().unwrap()).expect("init db");
    let pool = create_pool(&db_path).expect("create pool");
    run_migrations(&pool).expect("run migrations");
    let writer = spawn_writer(pool.clone());
    TestDb {
        _dir: dir,
        pool,
        writer,
    }
}

fn expense(name: &str) -> NewRecord {
    NewRecord {
        kind: RecordKind::Expense,
        name: name.to_string(),
        amount: dec!(250000),
        date: "1/1/2025".to_string(),
        category: "Comida".to_string(),
        target_amount: None,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_record_insert_and_read_back() {
    let db = setup_db();
    let repo = RecordRepository::new(db.pool.clone(), db.writer.clone());

    let inserted = repo.insert("uid-1", expense("Mercado")).await.unwrap();
    assert!(!inserted.id.is_empty());
    assert_eq!(inserted.amount, dec!(250000));

    let fetched = repo.get_by_id("uid-1", &inserted.id).unwrap();
    assert_eq!(fetched, inserted);

    // Another user never sees the row.
    let other = repo.get_by_id("uid-2", &inserted.id);
    assert!(matches!(other, Err(ref e) if e.is_not_found()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_record_listing_filters_by_kind() {
    let db = setup_db();
    let repo = RecordRepository::new(db.pool.clone(), db.writer.clone());

    repo.insert("uid-1", expense("Mercado")).await.unwrap();
    repo.insert(
        "uid-1",
        NewRecord {
            kind: RecordKind::Income,
            name: "Sueldo".to_string(),
            amount: dec!(1500000),
            date: "5/1/2025".to_string(),
            category: "Salario".to_string(),
            target_amount: None,
        },
    )
    .await
    .unwrap();

    let expenses = repo.list_by_kind("uid-1", RecordKind::Expense).unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].name, "Mercado");

    let all = repo.list_all("uid-1").unwrap();
    assert_eq!(all.len(), 2);

    assert!(repo.list_all("uid-2").unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_to_amount_accumulates_and_refreshes_date() {
    let db = setup_db();
    let repo = RecordRepository::new(db.pool.clone(), db.writer.clone());

    let savings = repo
        .insert(
            "uid-1",
            NewRecord {
                kind: RecordKind::Savings,
                name: "Viaje".to_string(),
                amount: dec!(900000),
                date: "1/1/2025".to_string(),
                category: "Ahorro".to_string(),
                target_amount: Some(dec!(1000000)),
            },
        )
        .await
        .unwrap();

    let updated = repo
        .add_to_amount("uid-1", &savings.id, dec!(100000), Some("2/1/2025".to_string()))
        .await
        .unwrap();

    assert_eq!(updated.amount, dec!(1000000));
    assert_eq!(updated.date, "2/1/2025");
    assert_eq!(updated.target_amount, Some(dec!(1000000)));

    // Top-up of a missing record reports not found.
    let missing = repo.add_to_amount("uid-1", "ghost", dec!(100), None).await;
    assert!(matches!(missing, Err(ref e) if e.is_not_found()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_legacy_grouped_amount_parses_on_read() {
    let db = setup_db();
    let repo = RecordRepository::new(db.pool.clone(), db.writer.clone());

    // Simulate a row written by an old version that stored the display
    // string instead of a canonical decimal.
    {
        use plata_storage_sqlite::schema::records::dsl::*;
        let mut conn = get_connection(&db.pool).unwrap();
        diesel::insert_into(records)
            .values((
                id.eq("legacy-1"),
                owner_user_id.eq("uid-1"),
                kind.eq("EXPENSE"),
                name.eq("Mercado"),
                amount.eq("250.000"),
                record_date.eq("1/1/2025"),
                category.eq("Comida"),
            ))
            .execute(&mut conn)
            .unwrap();
    }

    let fetched = repo.get_by_id("uid-1", "legacy-1").unwrap();
    assert_eq!(fetched.amount, dec!(250000));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_record_delete_reports_rows() {
    let db = setup_db();
    let repo = RecordRepository::new(db.pool.clone(), db.writer.clone());

    let inserted = repo.insert("uid-1", expense("Mercado")).await.unwrap();

    // Wrong owner deletes nothing.
    assert_eq!(repo.delete("uid-2", &inserted.id).await.unwrap(), 0);
    assert_eq!(repo.delete("uid-1", &inserted.id).await.unwrap(), 1);
    assert_eq!(repo.delete("uid-1", &inserted.id).await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_alert_lifecycle() {
    let db = setup_db();
    let repo = AlertRepository::new(db.pool.clone(), db.writer.clone());

    let alert = repo
        .insert(
            "uid-1",
            NewAlert {
                title: "Nuevo Gasto".to_string(),
                message: "Has registrado un gasto de $250.000 en Comida.".to_string(),
                category_tag: "gasto".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(!alert.read);
    assert!(alert.created_at.is_some());

    let listed = repo.list("uid-1").unwrap();
    assert_eq!(listed.len(), 1);
    assert!(repo.list("uid-2").unwrap().is_empty());

    // First mark touches one row, the second none.
    assert_eq!(repo.mark_read("uid-1", &alert.id).await.unwrap(), 1);
    assert_eq!(repo.mark_read("uid-1", &alert.id).await.unwrap(), 0);
    assert!(repo.list("uid-1").unwrap()[0].read);

    assert_eq!(repo.delete("uid-1", &alert.id).await.unwrap(), 1);
    assert!(repo.list("uid-1").unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_profile_insert_update_and_photo_clear() {
    let db = setup_db();
    let repo = ProfileRepository::new(db.pool.clone(), db.writer.clone());

    let profile = repo
        .insert(NewProfile {
            id: "uid-1".to_string(),
            name: "Ana".to_string(),
            surname: "Gómez".to_string(),
            email: "ana@example.com".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(profile.age, None);

    let updated = repo
        .update(UserProfile {
            age: Some(30),
            monthly_income: Some(dec!(2500000)),
            avatar_key: Some("ic_avatar_3".to_string()),
            profile_photo: Some("photo-bytes".to_string()),
            ..profile
        })
        .await
        .unwrap();
    assert_eq!(updated.age, Some(30));
    assert_eq!(updated.monthly_income, Some(dec!(2500000)));

    // Clearing the photo persists as NULL, not as a stale value.
    let cleared = repo
        .update(UserProfile {
            profile_photo: None,
            ..updated
        })
        .await
        .unwrap();
    assert_eq!(cleared.profile_photo, None);
    assert_eq!(repo.get("uid-1").unwrap().profile_photo, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_profile_is_not_found() {
    let db = setup_db();
    let repo = ProfileRepository::new(db.pool.clone(), db.writer.clone());

    let result = repo.get("ghost");
    assert!(matches!(result, Err(ref e) if e.is_not_found()));
}
