//! Data types for the warehouse schema
//!
//! This module defines the SQL data types used by the warehouse tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// SQL data types as the target warehouse spells them
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Integer (32-bit)
    Integer,
    /// Big integer (64-bit), used for epoch-millisecond timestamps
    BigInt,
    /// Floating point
    Float,
    /// Fixed-length character string
    Char(usize),
    /// Variable-length character string
    Varchar,
    /// Unlimited text
    Text,
    /// Timestamp (date + time)
    Timestamp,
}

impl DataType {
    /// Check if this type is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Integer | DataType::BigInt | DataType::Float)
    }

    /// Check if this type is a string type
    pub fn is_string(&self) -> bool {
        matches!(self, DataType::Char(_) | DataType::Varchar | DataType::Text)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Integer => write!(f, "INT"),
            DataType::BigInt => write!(f, "BIGINT"),
            DataType::Float => write!(f, "FLOAT"),
            DataType::Char(n) => write!(f, "CHAR({})", n),
            DataType::Varchar => write!(f, "VARCHAR"),
            DataType::Text => write!(f, "TEXT"),
            DataType::Timestamp => write!(f, "TIMESTAMP"),
        }
    }
}
