pub mod error;

// Table Schema generation
pub mod schema;
