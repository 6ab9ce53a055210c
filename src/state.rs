use crate::db::{DbPool, OrmConn};

/// Shared handler state: the sqlx pool backs migrations and the audit trail,
/// the SeaORM connection backs resource CRUD.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
}
