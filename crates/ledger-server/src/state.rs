use ledger_core::AccountService;
use ledger_db::{Database, UserRepository};

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Account service over this state's user table.
    pub fn accounts(&self) -> AccountService<UserRepository> {
        AccountService::new(self.db.user_repo())
    }
}
