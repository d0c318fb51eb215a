//! Graph Module
//!
//! The record shape (sheet, first cut, double cut) and the schema that
//! names its categories.

pub mod record;
pub mod schema;

pub use record::{Cut, Interpretants, Record, SheetParts};
pub use schema::Schema;
