use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ledger API",
        version = "0.1.0",
        description = "Expense records and user accounts."
    ),
    paths(
        crate::routes::create_record,
        crate::routes::list_records,
        crate::routes::get_record,
        crate::routes::update_record,
        crate::routes::delete_record,
        crate::routes::create_user,
        crate::routes::list_users,
        crate::routes::get_user,
        crate::routes::update_user,
        crate::routes::delete_user,
        crate::routes::register,
        crate::routes::login,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::CreateRecordRequest,
        crate::dto::UpdateRecordRequest,
        crate::dto::RecordResponse,
        crate::dto::CredentialsRequest,
        crate::dto::UserResponse,
        crate::dto::LoginResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "records", description = "Expense record CRUD"),
        (name = "users", description = "User account management"),
        (name = "auth", description = "Registration and credential checks"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
