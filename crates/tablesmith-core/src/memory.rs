//! In-memory implementations of the reader traits, for tests and static
//! wiring of known schemas.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::reader::{EnumRegistry, ModelReader, SchemaReader};
use crate::schema::{ColumnDescriptor, Dialect, ForeignKey, Index};
use crate::value::EnumCase;

/// Schema of a single table held in memory.
#[derive(Debug, Clone, Default)]
pub struct TableSchema {
    pub columns: Vec<ColumnDescriptor>,
    pub foreign_keys: Vec<ForeignKey>,
    pub indexes: Vec<Index>,
}

/// Static schema reader backed by a table map.
#[derive(Debug, Clone)]
pub struct MemorySchema {
    dialect: Dialect,
    tables: BTreeMap<String, TableSchema>,
}

impl MemorySchema {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            tables: BTreeMap::new(),
        }
    }

    pub fn with_table(mut self, name: impl Into<String>, table: TableSchema) -> Self {
        self.tables.insert(name.into(), table);
        self
    }

    fn table(&self, name: &str) -> Result<&TableSchema> {
        self.tables
            .get(name)
            .ok_or_else(|| Error::InvalidSchema(format!("unknown table '{name}'")))
    }
}

impl SchemaReader for MemorySchema {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        Ok(self.table(table)?.columns.clone())
    }

    fn foreign_keys(&self, table: &str) -> Result<Vec<ForeignKey>> {
        Ok(self.table(table)?.foreign_keys.clone())
    }

    fn indexes(&self, table: &str) -> Result<Vec<Index>> {
        Ok(self.table(table)?.indexes.clone())
    }
}

/// Static model metadata: casts, date-tracked columns, and registered enums.
#[derive(Debug, Clone, Default)]
pub struct MemoryModel {
    casts: BTreeMap<String, String>,
    dates: BTreeSet<String>,
    enums: BTreeMap<String, Vec<EnumCase>>,
}

impl MemoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cast(mut self, column: impl Into<String>, cast: impl Into<String>) -> Self {
        self.casts.insert(column.into(), cast.into());
        self
    }

    pub fn with_date_tracked(mut self, column: impl Into<String>) -> Self {
        self.dates.insert(column.into());
        self
    }

    pub fn with_enum(mut self, name: impl Into<String>, cases: Vec<EnumCase>) -> Self {
        self.enums.insert(name.into(), cases);
        self
    }
}

impl EnumRegistry for MemoryModel {
    fn enum_exists(&self, name: &str) -> bool {
        self.enums.contains_key(name)
    }

    fn enum_cases(&self, name: &str) -> Vec<EnumCase> {
        self.enums.get(name).cloned().unwrap_or_default()
    }
}

impl ModelReader for MemoryModel {
    fn cast_for(&self, column: &str) -> Option<String> {
        self.casts.get(column).cloned()
    }

    fn is_date_tracked(&self, column: &str) -> bool {
        self.dates.contains(column)
    }
}
