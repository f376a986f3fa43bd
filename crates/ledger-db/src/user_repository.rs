use sqlx::SqlitePool;

use ledger_core::error::AppError;
use ledger_core::models::{NewUser, UserAccount};
use ledger_core::traits::UserStore;

/// SQLite-backed user accounts. Name uniqueness is backed by a `UNIQUE` column.
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    password_hash: String,
}

impl From<UserRow> for UserAccount {
    fn from(row: UserRow) -> Self {
        UserAccount {
            id: row.id,
            name: row.name,
            password_hash: row.password_hash,
        }
    }
}

/// A concurrent insert can slip past the service's name check; the
/// constraint still catches it.
fn map_write_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::user_exists(),
        _ => AppError::DatabaseError(err.to_string()),
    }
}

impl UserStore for UserRepository {
    async fn insert_user(&self, user: &NewUser) -> Result<UserAccount, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO user_accounts (name, password_hash)
            VALUES (?1, ?2)
            RETURNING id, name, password_hash
            "#,
        )
        .bind(&user.name)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(row.into())
    }

    async fn get_user(&self, id: i64) -> Result<Option<UserAccount>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"SELECT id, name, password_hash FROM user_accounts WHERE id = ?1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<UserAccount>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"SELECT id, name, password_hash FROM user_accounts WHERE name = ?1"#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn list_users(&self) -> Result<Vec<UserAccount>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"SELECT id, name, password_hash FROM user_accounts ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update_user(&self, id: i64, user: &NewUser) -> Result<Option<UserAccount>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE user_accounts
            SET name = ?2, password_hash = ?3
            WHERE id = ?1
            RETURNING id, name, password_hash
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(row.map(Into::into))
    }

    async fn delete_user(&self, id: i64) -> Result<Option<UserAccount>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            DELETE FROM user_accounts
            WHERE id = ?1
            RETURNING id, name, password_hash
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }
}
