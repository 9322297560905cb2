//! starcat - Star-schema statement catalog for a song-play event warehouse
//!
//! This library builds the ordered SQL statement lists used to stage,
//! transform, and load song-play event data into a star-schema warehouse:
//! - DDL (drop/create) for two staging tables and the star schema
//! - COPY statements bulk-loading the staging tables from object storage
//! - INSERT..SELECT statements populating dimensions and the fact table
//! - Two non-normative sample analysis queries
//!
//! The crate executes nothing itself: an external driver runs the lists,
//! drop -> create -> copy -> insert, against a warehouse connection.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod copy;
pub mod error;
pub mod schema;
pub mod timedim;
pub mod transform;

pub use catalog::StatementCatalog;
pub use config::WarehouseConfig;
pub use error::{Error, Result};
