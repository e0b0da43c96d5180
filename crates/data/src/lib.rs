//! Data loading and validation for battle content.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
