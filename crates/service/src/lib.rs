//! Service layer for the hotel back office.
//! - One module per resource under `db`, each a set of async functions over a `DatabaseConnection`.
//! - Entities and field validation come from the `models` crate.
//! - Response shapes returned by detail and aggregate reads live in `views`.

pub mod errors;
pub mod pagination;
pub mod crud;
pub mod views;
pub mod db;
#[cfg(test)]
pub mod test_support;
