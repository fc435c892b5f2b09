use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::database::entities::records;
use crate::errors::{ImportError, ImportResult};
use crate::services::ValidationService;

/// A CSV row that passed validation and is ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    pub name: String,
    pub age: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub rows_imported: usize,
}

/// Imports headerless `name,age` CSV files into the record store.
///
/// Imports are all-or-nothing: every row is validated before the first
/// insert, and the inserts share one transaction.
#[derive(Clone)]
pub struct ImportService {
    db: DatabaseConnection,
    upload_path: PathBuf,
}

impl ImportService {
    pub fn new(db: DatabaseConnection, upload_path: impl Into<PathBuf>) -> Self {
        Self {
            db,
            upload_path: upload_path.into(),
        }
    }

    pub fn upload_path(&self) -> &Path {
        &self.upload_path
    }

    /// Store an uploaded file at the upload path, replacing the previous
    /// upload, then import it.
    pub async fn import_upload(&self, contents: &[u8]) -> ImportResult<ImportSummary> {
        if let Some(parent) = self.upload_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.upload_path, contents).await?;
        debug!(
            "Stored upload of {} bytes at {}",
            contents.len(),
            self.upload_path.display()
        );

        self.import_file(&self.upload_path).await
    }

    /// Import an existing CSV file without copying it.
    pub async fn import_file(&self, path: &Path) -> ImportResult<ImportSummary> {
        let contents = tokio::fs::read(path).await?;
        let rows = parse_rows(contents.as_slice())?;
        let summary = self.insert_rows(&rows).await?;
        info!(
            "Imported {} records from {}",
            summary.rows_imported,
            path.display()
        );
        Ok(summary)
    }

    async fn insert_rows(&self, rows: &[ImportRow]) -> ImportResult<ImportSummary> {
        let txn = self.db.begin().await?;

        for row in rows {
            records::ActiveModel {
                name: Set(row.name.clone()),
                age: Set(row.age),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(ImportSummary {
            rows_imported: rows.len(),
        })
    }
}

/// Parse headerless CSV: column 0 is the name, column 1 the age, anything
/// after that is ignored.
pub fn parse_rows<R: Read>(reader: R) -> ImportResult<Vec<ImportRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|pos| pos.line()).unwrap_or(0);

        if record.len() < 2 {
            return Err(ImportError::parse(
                line,
                format!("expected at least 2 columns, found {}", record.len()),
            ));
        }

        let name = ValidationService::validate_name(&record[0])
            .map_err(|e| ImportError::parse(line, e.to_string()))?;
        let age = ValidationService::parse_age(&record[1])
            .map_err(|e| ImportError::parse(line, e.to_string()))?;

        rows.push(ImportRow { name, age });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::setup_test_db;
    use crate::services::RecordService;

    #[test]
    fn test_parse_rows_keeps_order() {
        let rows = parse_rows("Anna,31\nBob,45\nCarl,2,extra\n".as_bytes()).unwrap();
        assert_eq!(
            rows,
            vec![
                ImportRow { name: "Anna".to_string(), age: 31 },
                ImportRow { name: "Bob".to_string(), age: 45 },
                ImportRow { name: "Carl".to_string(), age: 2 },
            ]
        );
    }

    #[test]
    fn test_parse_rows_does_not_skip_first_line() {
        let err = parse_rows("name,age\nAnna,31\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_parse_rows_short_row() {
        let err = parse_rows("Anna,31\nBob\n".as_bytes()).unwrap_err();
        match err {
            ImportError::Parse { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("at least 2 columns"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rows_bad_age() {
        let err = parse_rows("Anna,thirty\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_parse_rows_keeps_cells_as_written() {
        let rows = parse_rows(",20\nCarl,-3\n Dora , 4 \n".as_bytes()).unwrap();
        assert_eq!(
            rows,
            vec![
                ImportRow { name: "".to_string(), age: 20 },
                ImportRow { name: "Carl".to_string(), age: -3 },
                ImportRow { name: " Dora ".to_string(), age: 4 },
            ]
        );
    }

    #[tokio::test]
    async fn test_import_file_creates_records() {
        let db = setup_test_db().await;
        let dir = tempfile::tempdir().unwrap();
        let upload = dir.path().join("uploads").join("uploaded_data.csv");
        let service = ImportService::new(db.clone(), &upload);

        let summary = service
            .import_upload(b"Anna,31\nBob,45\n")
            .await
            .unwrap();
        assert_eq!(summary.rows_imported, 2);
        assert_eq!(std::fs::read(&upload).unwrap(), b"Anna,31\nBob,45\n");

        let records = RecordService::new(db).list().await.unwrap();
        let pairs: Vec<(String, i32)> = records.into_iter().map(|r| (r.name, r.age)).collect();
        assert_eq!(
            pairs,
            vec![("Anna".to_string(), 31), ("Bob".to_string(), 45)]
        );
    }

    #[tokio::test]
    async fn test_failed_import_creates_nothing() {
        let db = setup_test_db().await;
        let dir = tempfile::tempdir().unwrap();
        let service = ImportService::new(db.clone(), dir.path().join("upload.csv"));

        let result = service.import_upload(b"Anna,31\nBob,old\n").await;
        assert!(matches!(result, Err(ImportError::Parse { line: 2, .. })));

        assert!(RecordService::new(db).list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_overwrites_previous_file() {
        let db = setup_test_db().await;
        let dir = tempfile::tempdir().unwrap();
        let upload = dir.path().join("upload.csv");
        let service = ImportService::new(db, &upload);

        service.import_upload(b"Anna,31\nBob,45\n").await.unwrap();
        service.import_upload(b"Carl,9\n").await.unwrap();

        assert_eq!(std::fs::read(&upload).unwrap(), b"Carl,9\n");
    }
}
