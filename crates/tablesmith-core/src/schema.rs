use serde::{Deserialize, Serialize};

/// SQL engine family governing type and default-expression syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    MySql,
    Postgres,
    SqlServer,
    Sqlite,
}

impl Dialect {
    /// Resolve a connection driver name as reported by common database layers.
    pub fn from_driver(driver: &str) -> Option<Self> {
        match driver {
            "mysql" | "mariadb" => Some(Dialect::MySql),
            "pgsql" | "postgres" | "postgresql" => Some(Dialect::Postgres),
            "sqlsrv" | "mssql" | "sqlserver" => Some(Dialect::SqlServer),
            "sqlite" => Some(Dialect::Sqlite),
            _ => None,
        }
    }
}

/// Raw column metadata as reported by a schema reader.
///
/// `raw_type` carries the full declaration (e.g. `decimal(8,2)`), while
/// `raw_type_name` is the bare type keyword (e.g. `decimal`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub raw_type: String,
    pub raw_type_name: String,
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    pub auto_increment: bool,
}

/// Foreign-key descriptor; only column membership matters to synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForeignKey {
    pub columns: Vec<String>,
}

/// Index descriptor; primary indexes exclude their columns from synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Index {
    pub primary: bool,
    pub columns: Vec<String>,
}
