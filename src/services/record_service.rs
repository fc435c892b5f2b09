use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::{debug, info};

use crate::database::entities::{records, Records};
use crate::errors::{RecordError, RecordResult};
use crate::services::ValidationService;

/// CRUD access to the `data` table
#[derive(Clone)]
pub struct RecordService {
    db: DatabaseConnection,
}

impl RecordService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All records, oldest first
    pub async fn list(&self) -> RecordResult<Vec<records::Model>> {
        let records = Records::find()
            .order_by_asc(records::Column::Id)
            .all(&self.db)
            .await?;
        debug!("Loaded {} records", records.len());
        Ok(records)
    }

    /// Records rendered as `"name, age"` lines
    pub async fn list_formatted(&self) -> RecordResult<Vec<String>> {
        Ok(self
            .list()
            .await?
            .iter()
            .map(records::Model::display_line)
            .collect())
    }

    pub async fn create(&self, name: &str, age: i32) -> RecordResult<records::Model> {
        let name = ValidationService::validate_name(name)?;

        let record = records::ActiveModel {
            name: Set(name),
            age: Set(age),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        info!("Created record {} ({})", record.id, record.name);
        Ok(record)
    }

    pub async fn get(&self, id: i32) -> RecordResult<records::Model> {
        Records::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(RecordError::NotFound(id))
    }

    pub async fn update(&self, id: i32, name: &str, age: i32) -> RecordResult<records::Model> {
        let name = ValidationService::validate_name(name)?;

        let mut record: records::ActiveModel = self.get(id).await?.into();
        record.name = Set(name);
        record.age = Set(age);

        let record = record.update(&self.db).await?;
        info!("Updated record {}", record.id);
        Ok(record)
    }

    pub async fn delete(&self, id: i32) -> RecordResult<()> {
        let result = Records::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(RecordError::NotFound(id));
        }

        info!("Deleted record {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_create_then_list() {
        let service = RecordService::new(setup_test_db().await);

        let anna = service.create("Anna", 31).await.unwrap();
        let bob = service.create("Bob", 45).await.unwrap();
        assert_ne!(anna.id, bob.id);

        let records = service.list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Anna");
        assert_eq!(records[0].age, 31);
        assert_eq!(records[1].name, "Bob");
        assert_eq!(records[1].age, 45);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let service = RecordService::new(setup_test_db().await);
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_then_get() {
        let service = RecordService::new(setup_test_db().await);
        let record = service.create("Anna", 31).await.unwrap();

        service.update(record.id, "Anne", 32).await.unwrap();

        let fetched = service.get(record.id).await.unwrap();
        assert_eq!(fetched.name, "Anne");
        assert_eq!(fetched.age, 32);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = RecordService::new(setup_test_db().await);
        let record = service.create("Anna", 31).await.unwrap();

        service.delete(record.id).await.unwrap();

        let err = service.get(record.id).await.unwrap_err();
        assert!(matches!(err, RecordError::NotFound(id) if id == record.id));
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let service = RecordService::new(setup_test_db().await);

        assert!(service.get(99).await.unwrap_err().is_not_found());
        assert!(service.update(99, "X", 1).await.unwrap_err().is_not_found());
        assert!(service.delete(99).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_values_stored_exactly() {
        let service = RecordService::new(setup_test_db().await);

        let padded = service.create(" Anna ", 31).await.unwrap();
        let negative = service.create("Bob", -1).await.unwrap();
        let unnamed = service.create("", 5).await.unwrap();

        assert_eq!(service.get(padded.id).await.unwrap().name, " Anna ");
        assert_eq!(service.get(negative.id).await.unwrap().age, -1);
        assert_eq!(service.get(unnamed.id).await.unwrap().name, "");

        service.update(negative.id, "  Bob", -7).await.unwrap();
        let updated = service.get(negative.id).await.unwrap();
        assert_eq!((updated.name.as_str(), updated.age), ("  Bob", -7));
    }

    #[tokio::test]
    async fn test_invalid_name_rejected() {
        let service = RecordService::new(setup_test_db().await);

        assert!(matches!(
            service.create("bad\u{0007}name", 3).await,
            Err(RecordError::Validation(_))
        ));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_formatted() {
        let service = RecordService::new(setup_test_db().await);
        service.create("Anna", 31).await.unwrap();
        service.create("Bob", 45).await.unwrap();

        assert_eq!(
            service.list_formatted().await.unwrap(),
            vec!["Anna, 31".to_string(), "Bob, 45".to_string()]
        );
    }
}
