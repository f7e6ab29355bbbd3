pub mod loader;
pub mod schema;

pub use schema::{Constraint, FieldRule, Pattern, Schema};
