//! Schema module
//!
//! Warehouse data types, table definitions, and the seven tables of the
//! song-play star schema.

pub mod table;
pub mod types;
pub mod warehouse;

pub use table::{Column, TableDef};
pub use types::DataType;
pub use warehouse::warehouse_tables;
