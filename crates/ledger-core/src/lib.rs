pub mod accounts;
pub mod error;
pub mod models;
pub mod password;
pub mod traits;


pub use accounts::AccountService;
pub use error::AppError;
pub use models::{Credentials, ExpenseRecord, NewRecord, NewUser, RecordUpdate, UserAccount};
pub use traits::UserStore;
