//! Database functionality tests
//!
//! Tests for migrations, the record entity and the import path against a
//! file-backed database

use anyhow::Result;
use recordchart::database::entities::*;
use recordchart::database::migrations::Migrator;
use recordchart::database::{migrate_database, setup_database, MigrateDirection};
use recordchart::errors::{ImportError, RecordError};
use recordchart::services::{ImportService, RecordService};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, EntityTrait, Set};
use sea_orm_migration::MigratorTrait;
use tempfile::NamedTempFile;

/// Create a test database connection with migrations
async fn setup_test_db() -> Result<(DatabaseConnection, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = Database::connect(&db_url).await?;
    setup_database(&db).await?;

    Ok((db, temp_file))
}

#[tokio::test]
async fn test_database_migrations() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let rows = records::Entity::find().all(&db).await?;
    assert_eq!(rows.len(), 0);

    // running again is a no-op
    setup_database(&db).await?;
    assert_eq!(Migrator::get_applied_migrations(&db).await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_record_entity_crud() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let record = records::ActiveModel {
        name: Set("Anna".to_string()),
        age: Set(31),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert!(record.id > 0);
    assert_eq!(record.display_line(), "Anna, 31");

    let mut active: records::ActiveModel = record.clone().into();
    active.age = Set(32);
    let updated = active.update(&db).await?;
    assert_eq!(updated.id, record.id);
    assert_eq!(updated.age, 32);

    records::Entity::delete_by_id(record.id).exec(&db).await?;
    assert!(records::Entity::find_by_id(record.id).one(&db).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_record_service_keeps_ids_stable() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let service = RecordService::new(db);

    let first = service.create("Anna", 31).await?;
    let second = service.create("Bob", 45).await?;
    assert!(second.id > first.id);

    service.delete(first.id).await?;
    let third = service.create("Carl", 7).await?;
    assert!(third.id > second.id);

    let lines = service.list_formatted().await?;
    assert_eq!(lines, vec!["Bob, 45".to_string(), "Carl, 7".to_string()]);

    assert!(matches!(
        service.get(first.id).await,
        Err(RecordError::NotFound(id)) if id == first.id
    ));

    Ok(())
}

#[tokio::test]
async fn test_import_file_is_all_or_nothing() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let dir = tempfile::tempdir()?;
    let service = ImportService::new(db.clone(), dir.path().join("uploaded_data.csv"));

    let good = dir.path().join("good.csv");
    std::fs::write(&good, "Anna,31\nBob,45\n")?;
    let summary = service.import_file(&good).await?;
    assert_eq!(summary.rows_imported, 2);

    let bad = dir.path().join("bad.csv");
    std::fs::write(&bad, "Carl,7\nDora,old\n")?;
    let err = service.import_file(&bad).await.unwrap_err();
    assert!(matches!(err, ImportError::Parse { line: 2, .. }));

    let rows = records::Entity::find().all(&db).await?;
    assert_eq!(rows.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_migrate_fresh_clears_records() -> Result<()> {
    let temp_file = NamedTempFile::new()?;
    let path = temp_file.path().display().to_string();

    migrate_database(&path, MigrateDirection::Up).await?;
    {
        let db = Database::connect(format!("sqlite://{}?mode=rwc", path)).await?;
        RecordService::new(db).create("Anna", 31).await?;
    }

    migrate_database(&path, MigrateDirection::Fresh).await?;

    let db = Database::connect(format!("sqlite://{}?mode=rwc", path)).await?;
    assert!(records::Entity::find().all(&db).await?.is_empty());

    Ok(())
}
