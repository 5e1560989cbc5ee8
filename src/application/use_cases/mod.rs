pub mod schema_generator;
