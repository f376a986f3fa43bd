use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use ledger_core::error::AppError;
use ledger_core::models::{ExpenseRecord, NewRecord, RecordUpdate};

/// Repository for expense records in SQLite.
#[derive(Clone)]
pub struct RecordRepository {
    pool: SqlitePool,
}

impl RecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a record stamped with the current UTC time.
    pub async fn create(&self, record: &NewRecord) -> Result<ExpenseRecord, AppError> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            INSERT INTO expense_records (amount, item, record_date)
            VALUES (?1, ?2, ?3)
            RETURNING id, amount, item, record_date
            "#,
        )
        .bind(record.amount)
        .bind(&record.item)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Result<Vec<ExpenseRecord>, AppError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT id, amount, item, record_date
            FROM expense_records
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> Result<Option<ExpenseRecord>, AppError> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"SELECT id, amount, item, record_date FROM expense_records WHERE id = ?1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// Overwrite amount and item; `record_date` only when provided.
    pub async fn update(
        &self,
        id: i64,
        update: &RecordUpdate,
    ) -> Result<Option<ExpenseRecord>, AppError> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            UPDATE expense_records
            SET amount = ?2, item = ?3, record_date = COALESCE(?4, record_date)
            WHERE id = ?1
            RETURNING id, amount, item, record_date
            "#,
        )
        .bind(id)
        .bind(update.amount)
        .bind(&update.item)
        .bind(update.record_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// Delete a record, returning its last stored state.
    pub async fn delete(&self, id: i64) -> Result<Option<ExpenseRecord>, AppError> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            DELETE FROM expense_records
            WHERE id = ?1
            RETURNING id, amount, item, record_date
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct RecordRow {
    id: i64,
    amount: i64,
    item: String,
    record_date: DateTime<Utc>,
}

impl From<RecordRow> for ExpenseRecord {
    fn from(row: RecordRow) -> Self {
        ExpenseRecord {
            id: row.id,
            amount: row.amount,
            item: row.item,
            record_date: row.record_date,
        }
    }
}
