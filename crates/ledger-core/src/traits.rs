use std::future::Future;

use crate::error::AppError;
use crate::models::{NewUser, UserAccount};

/// Persists and retrieves user accounts.
///
/// Implementations report a uniqueness violation on `name` as
/// [`AppError::Conflict`].
pub trait UserStore: Send + Sync + Clone {
    /// Insert a new user. Returns the stored row with its assigned id.
    fn insert_user(
        &self,
        user: &NewUser,
    ) -> impl Future<Output = Result<UserAccount, AppError>> + Send;

    fn get_user(&self, id: i64)
    -> impl Future<Output = Result<Option<UserAccount>, AppError>> + Send;

    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<UserAccount>, AppError>> + Send;

    /// All users, ordered by id.
    fn list_users(&self) -> impl Future<Output = Result<Vec<UserAccount>, AppError>> + Send;

    /// Overwrite name and password hash. Returns `None` if the id does not exist.
    fn update_user(
        &self,
        id: i64,
        user: &NewUser,
    ) -> impl Future<Output = Result<Option<UserAccount>, AppError>> + Send;

    /// Remove a user, returning the deleted row.
    fn delete_user(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<UserAccount>, AppError>> + Send;
}
