use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ledger_core::models::{Credentials, ExpenseRecord, NewRecord, RecordUpdate, UserAccount};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateRecordRequest {
    /// Expense amount in whole currency units
    pub amount: i64,
    /// What the money was spent on (max 240 characters)
    pub item: String,
}

impl From<CreateRecordRequest> for NewRecord {
    fn from(body: CreateRecordRequest) -> Self {
        NewRecord::new(body.amount, body.item)
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateRecordRequest {
    pub amount: i64,
    pub item: String,
    /// RFC 3339 timestamp; the stored date is kept when omitted
    pub record_date: Option<DateTime<Utc>>,
}

impl From<UpdateRecordRequest> for RecordUpdate {
    fn from(body: UpdateRecordRequest) -> Self {
        RecordUpdate {
            amount: body.amount,
            item: body.item,
            record_date: body.record_date,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RecordResponse {
    pub id: i64,
    pub amount: i64,
    pub item: String,
    pub record_date: DateTime<Utc>,
}

impl From<ExpenseRecord> for RecordResponse {
    fn from(r: ExpenseRecord) -> Self {
        Self {
            id: r.id,
            amount: r.amount,
            item: r.item,
            record_date: r.record_date,
        }
    }
}

// ---------------------------------------------------------------------------
// Users & auth
// ---------------------------------------------------------------------------

/// Name/password pair used by `/register`, `/login`, `POST /users` and `PUT /users/{id}`.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CredentialsRequest {
    pub name: String,
    pub password: String,
}

impl From<CredentialsRequest> for Credentials {
    fn from(body: CredentialsRequest) -> Self {
        Credentials::new(body.name, body.password)
    }
}

/// Public view of a user. The password hash is never serialized.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
}

impl From<UserAccount> for UserResponse {
    fn from(u: UserAccount) -> Self {
        Self {
            id: u.id,
            name: u.name,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
