//! Table definitions
//!
//! This module defines columns and tables and renders their DDL text.

use super::types::DataType;
use serde::{Deserialize, Serialize};

/// Foreign key reference to another table's column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Referenced table
    pub table: String,
    /// Referenced column
    pub column: String,
}

/// Column definition in a table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Data type
    pub data_type: DataType,
    /// Is this the primary key?
    pub primary_key: bool,
    /// Auto-increment (seed, step), rendered as IDENTITY(seed,step)
    pub identity: Option<(i64, i64)>,
    /// Foreign key reference
    pub references: Option<ForeignKey>,
}

impl Column {
    /// Create a new column with minimal required fields
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            primary_key: false,
            identity: None,
            references: None,
        }
    }

    /// Set primary key flag
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Set auto-increment seed and step
    pub fn identity(mut self, seed: i64, step: i64) -> Self {
        self.identity = Some((seed, step));
        self
    }

    /// Add a foreign key reference
    pub fn references(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.references = Some(ForeignKey {
            table: table.into(),
            column: column.into(),
        });
        self
    }

    /// Render this column's DDL fragment
    pub fn sql(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.data_type);
        if let Some((seed, step)) = self.identity {
            sql.push_str(&format!(" IDENTITY({},{})", seed, step));
        }
        if self.primary_key {
            sql.push_str(" PRIMARY KEY");
        }
        if let Some(fk) = &self.references {
            sql.push_str(&format!(" REFERENCES {}({})", fk.table, fk.column));
        }
        sql
    }
}

/// Table definition - name plus ordered columns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDef {
    /// Table name
    pub name: String,
    /// Ordered list of columns
    pub columns: Vec<Column>,
}

impl TableDef {
    /// Create a new table definition
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Get the table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get column by name
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Tables this table references via foreign keys
    pub fn referenced_tables(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter_map(|c| c.references.as_ref())
            .map(|fk| fk.table.as_str())
            .collect()
    }

    /// Render the CREATE TABLE statement
    pub fn create_sql(&self) -> String {
        let columns: Vec<String> = self.columns.iter().map(|c| format!("    {}", c.sql())).collect();
        format!("CREATE TABLE {} (\n{}\n);", self.name, columns.join(",\n"))
    }

    /// Render the DROP TABLE statement, safe against a fresh database
    pub fn drop_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {};", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_sql() {
        let col = Column::new("user_id", DataType::Integer).primary_key();
        assert_eq!(col.sql(), "user_id INT PRIMARY KEY");

        let col = Column::new("songplay_id", DataType::Integer)
            .identity(0, 1)
            .primary_key();
        assert_eq!(col.sql(), "songplay_id INT IDENTITY(0,1) PRIMARY KEY");

        let col = Column::new("artist_id", DataType::Varchar).references("artists", "artist_id");
        assert_eq!(col.sql(), "artist_id VARCHAR REFERENCES artists(artist_id)");
    }

    #[test]
    fn test_create_and_drop_sql() {
        let table = TableDef::new(
            "users",
            vec![
                Column::new("user_id", DataType::Integer).primary_key(),
                Column::new("first_name", DataType::Varchar),
            ],
        );

        assert_eq!(
            table.create_sql(),
            "CREATE TABLE users (\n    user_id INT PRIMARY KEY,\n    first_name VARCHAR\n);"
        );
        assert_eq!(table.drop_sql(), "DROP TABLE IF EXISTS users;");
    }

    #[test]
    fn test_referenced_tables() {
        let table = TableDef::new(
            "songs",
            vec![
                Column::new("song_id", DataType::Varchar).primary_key(),
                Column::new("artist_id", DataType::Varchar).references("artists", "artist_id"),
            ],
        );
        assert_eq!(table.referenced_tables(), vec!["artists"]);
    }
}
