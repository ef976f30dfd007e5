use sea_orm::DatabaseConnection;

/// Shared handler state. The pool is the only thing handlers share.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
