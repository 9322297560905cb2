//! Statement catalog
//!
//! The central product of the crate: every statement list an external driver
//! needs, built in one shot from a validated configuration. Construction does
//! all configuration lookups and copy-statement guard checks, so a catalog
//! value in hand means every statement is fully formed.

use crate::analysis;
use crate::config::WarehouseConfig;
use crate::copy::{copy_from_s3, JsonFormat};
use crate::error::{Error, Result};
use crate::schema::{warehouse_tables, TableDef};
use crate::transform;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// Ordered statement lists for one full drop/reload of the warehouse
#[derive(Debug, Serialize)]
pub struct StatementCatalog {
    /// Table definitions in dependency order
    #[serde(skip)]
    tables: IndexMap<String, TableDef>,
    /// DROP statements, fact first so IF EXISTS drops never trip a FK
    drop_statements: Vec<String>,
    /// CREATE statements in dependency order
    create_statements: Vec<String>,
    /// COPY statements loading the two staging tables from S3
    copy_statements: Vec<String>,
    /// INSERT..SELECT statements, dimensions then fact
    insert_statements: Vec<String>,
    /// Non-normative sample analysis queries
    analysis_statements: Vec<String>,
}

impl StatementCatalog {
    /// Build the full catalog from a validated configuration.
    ///
    /// Fails if any configuration value cannot be safely inlined into a
    /// COPY statement; succeeds with every list populated otherwise.
    pub fn new(config: &WarehouseConfig) -> Result<Self> {
        let tables = warehouse_tables();

        let create_statements: Vec<String> =
            tables.values().map(|t| t.create_sql()).collect();
        let drop_statements: Vec<String> =
            tables.values().rev().map(|t| t.drop_sql()).collect();

        let copy_statements = vec![
            copy_from_s3(
                "staging_events",
                &config.s3.log_data,
                &config.iam_role.arn,
                &JsonFormat::JsonPaths(config.s3.log_jsonpath.clone()),
            )?,
            copy_from_s3(
                "staging_songs",
                &config.s3.song_data,
                &config.iam_role.arn,
                &JsonFormat::Auto,
            )?,
        ];

        let insert_statements = transform::insert_statements();
        let analysis_statements = analysis::analysis_statements();

        debug!(
            tables = tables.len(),
            copies = copy_statements.len(),
            inserts = insert_statements.len(),
            "statement catalog built"
        );

        Ok(Self {
            tables,
            drop_statements,
            create_statements,
            copy_statements,
            insert_statements,
            analysis_statements,
        })
    }

    /// Table definition by name
    pub fn table(&self, name: &str) -> Result<&TableDef> {
        self.tables
            .get(name)
            .ok_or_else(|| Error::TableNotFound(name.to_string()))
    }

    /// Table names in dependency order
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(|n| n.as_str()).collect()
    }

    /// DROP statements, to be run first
    pub fn drop_statements(&self) -> &[String] {
        &self.drop_statements
    }

    /// CREATE statements, to be run after the drops
    pub fn create_statements(&self) -> &[String] {
        &self.create_statements
    }

    /// COPY statements, to be run after the creates
    pub fn copy_statements(&self) -> &[String] {
        &self.copy_statements
    }

    /// INSERT statements, to be run after the copies
    pub fn insert_statements(&self) -> &[String] {
        &self.insert_statements
    }

    /// Sample analysis queries; illustrative, not part of the load
    pub fn analysis_statements(&self) -> &[String] {
        &self.analysis_statements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> WarehouseConfig {
        WarehouseConfig::from_toml_str(
            r#"
            [s3]
            log_data = "s3://udacity-dend/log_data"
            song_data = "s3://udacity-dend/song_data"
            log_jsonpath = "s3://udacity-dend/log_json_path.json"

            [iam_role]
            arn = "arn:aws:iam::123456789012:role/dwhRole"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_list_lengths() {
        let catalog = StatementCatalog::new(&test_config()).unwrap();
        assert_eq!(catalog.drop_statements().len(), 7);
        assert_eq!(catalog.create_statements().len(), 7);
        assert_eq!(catalog.copy_statements().len(), 2);
        assert_eq!(catalog.insert_statements().len(), 5);
        assert_eq!(catalog.analysis_statements().len(), 2);
    }

    #[test]
    fn test_table_lookup() {
        let catalog = StatementCatalog::new(&test_config()).unwrap();
        assert_eq!(catalog.table("songplays").unwrap().name(), "songplays");
        assert!(matches!(
            catalog.table("sessions"),
            Err(Error::TableNotFound(_))
        ));
    }

    #[test]
    fn test_copy_statements_carry_configured_locations() {
        let catalog = StatementCatalog::new(&test_config()).unwrap();
        let [events, songs] = catalog.copy_statements() else {
            panic!("expected two copy statements");
        };
        assert!(events.contains("FROM 's3://udacity-dend/log_data'"));
        assert!(events.contains("FORMAT AS JSON 's3://udacity-dend/log_json_path.json'"));
        assert!(songs.contains("FROM 's3://udacity-dend/song_data'"));
        assert!(songs.contains("FORMAT AS JSON 'auto'"));
    }

    #[test]
    fn test_json_serialization_lists_statements() {
        let catalog = StatementCatalog::new(&test_config()).unwrap();
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["create_statements"].as_array().unwrap().len(), 7);
        assert!(json.get("tables").is_none());
    }
}
