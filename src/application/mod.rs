pub mod use_cases;

pub use use_cases::schema_generator::SchemaGenerator;
