//! Response projections. Views are rebuilt from storage on every request.

pub mod records;
pub mod guest;
pub mod stay;

pub use guest::*;
pub use records::*;
pub use stay::*;
