pub mod errors;
pub mod extractor;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::{init_logging, load_config, serve};
