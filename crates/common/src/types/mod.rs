use serde::Serialize;

/// Liveness payload returned by `/health`.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct Health {
    pub status: &'static str,
    pub database: &'static str,
}
