use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use ledger_core::AppError;
use ledger_core::models::{NewRecord, RecordUpdate};

use crate::dto::{
    CreateRecordRequest, CredentialsRequest, HealthResponse, LoginResponse, RecordResponse,
    UpdateRecordRequest, UserResponse,
};
use crate::error::{ApiError, IdPath, JsonBody};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Largest accepted request body. Every payload here is a handful of scalars.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the full router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/records", post(create_record).get(list_records))
        .route(
            "/records/{id}",
            get(get_record).put(update_record).delete(delete_record),
        )
        .route("/users", post(create_user).get(list_users))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/register", post(register))
        .route("/login", post(login))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

    let public = Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(api).with_state(state)
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/records",
    request_body = CreateRecordRequest,
    responses(
        (status = 201, description = "Record created", body = RecordResponse),
        (status = 400, description = "Invalid payload", body = crate::dto::ErrorResponse),
    ),
    tag = "records"
)]
pub async fn create_record(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateRecordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let record = NewRecord::from(body);
    record.validate()?;

    let created = state.db.record_repo().create(&record).await?;
    tracing::info!(record_id = created.id, "Record created");

    Ok((StatusCode::CREATED, axum::Json(RecordResponse::from(created))))
}

#[utoipa::path(
    get,
    path = "/records",
    responses(
        (status = 200, description = "All records", body = [RecordResponse]),
    ),
    tag = "records"
)]
pub async fn list_records(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let records = state.db.record_repo().list().await?;
    let response: Vec<RecordResponse> = records.into_iter().map(RecordResponse::from).collect();

    Ok(axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/records/{id}",
    params(
        ("id" = i64, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Record details", body = RecordResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "records"
)]
pub async fn get_record(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .db
        .record_repo()
        .get(id)
        .await?
        .ok_or_else(AppError::record_not_found)?;

    Ok(axum::Json(RecordResponse::from(record)))
}

#[utoipa::path(
    put,
    path = "/records/{id}",
    params(
        ("id" = i64, Path, description = "Record ID")
    ),
    request_body = UpdateRecordRequest,
    responses(
        (status = 200, description = "Record updated", body = RecordResponse),
        (status = 400, description = "Invalid payload", body = crate::dto::ErrorResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "records"
)]
pub async fn update_record(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
    JsonBody(body): JsonBody<UpdateRecordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let update = RecordUpdate::from(body);
    update.validate()?;

    let record = state
        .db
        .record_repo()
        .update(id, &update)
        .await?
        .ok_or_else(AppError::record_not_found)?;

    Ok(axum::Json(RecordResponse::from(record)))
}

#[utoipa::path(
    delete,
    path = "/records/{id}",
    params(
        ("id" = i64, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Deleted record", body = RecordResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "records"
)]
pub async fn delete_record(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .db
        .record_repo()
        .delete(id)
        .await?
        .ok_or_else(AppError::record_not_found)?;
    tracing::info!(record_id = record.id, "Record deleted");

    Ok(axum::Json(RecordResponse::from(record)))
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/users",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid payload or name taken", body = crate::dto::ErrorResponse),
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.accounts().register(body.into()).await?;

    Ok((StatusCode::CREATED, axum::Json(UserResponse::from(user))))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
    ),
    tag = "users"
)]
pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let users = state.accounts().list().await?;
    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.accounts().get(id).await?;

    Ok(axum::Json(UserResponse::from(user)))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid payload or name taken", body = crate::dto::ErrorResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
    JsonBody(body): JsonBody<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.accounts().update(id, body.into()).await?;

    Ok(axum::Json(UserResponse::from(user)))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Deleted user", body = UserResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.accounts().delete(id).await?;

    Ok(axum::Json(UserResponse::from(user)))
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/register",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "User already exists", body = crate::dto::ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.accounts().register(body.into()).await?;

    Ok((StatusCode::CREATED, axum::Json(UserResponse::from(user))))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::dto::ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.accounts().login(body.into()).await?;

    let response = LoginResponse {
        message: "Login successful".to_string(),
        user: UserResponse::from(user),
    };

    Ok(axum::Json(response))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let db_status = match state.db.health_check().await {
        Ok(()) => "ok",
        Err(_) => "error",
    };

    let status = if db_status == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if db_status == "ok" {
            "healthy"
        } else {
            "unhealthy"
        },
        database: db_status,
    };

    (status, axum::Json(response))
}
