use crate::error::Result;
use crate::schema::{ColumnDescriptor, Dialect, ForeignKey, Index};
use crate::value::EnumCase;

/// Lookup of application-level enumerated types by opaque reference.
///
/// Enum references are strings carried in cast tokens; the core never
/// reflects over language-level enums.
pub trait EnumRegistry {
    /// Whether the reference names a known enumerated type.
    fn enum_exists(&self, name: &str) -> bool;

    /// Cases of the named enum; empty when the reference is unknown.
    fn enum_cases(&self, name: &str) -> Vec<EnumCase>;
}

/// Per-column model metadata: declared casts and date-tracked fields.
pub trait ModelReader: EnumRegistry {
    /// The cast token declared for the column, if any.
    fn cast_for(&self, column: &str) -> Option<String>;

    /// Whether the model tracks the column as a timestamp field.
    fn is_date_tracked(&self, column: &str) -> bool;
}

/// Trait implemented by schema metadata sources.
pub trait SchemaReader {
    /// The SQL dialect of the underlying connection.
    fn dialect(&self) -> Dialect;

    /// Columns of the table, in schema order.
    fn columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>>;

    /// Foreign keys declared on the table.
    fn foreign_keys(&self, table: &str) -> Result<Vec<ForeignKey>>;

    /// Indexes declared on the table.
    fn indexes(&self, table: &str) -> Result<Vec<Index>>;
}
