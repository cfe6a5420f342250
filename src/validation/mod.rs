//! Input schema validation.
//!
//! Checks that an input table carries the three required columns before any
//! filtering or generation runs. Extra columns, empty tables, and odd cell
//! contents are all acceptable here; cell coercion happens downstream.

mod schema_validator;

pub use schema_validator::{check_schema, SchemaCheck, REQUIRED_COLUMNS};
