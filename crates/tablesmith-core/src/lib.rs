//! Core contracts for Tablesmith.
//!
//! This crate defines the column/schema metadata types, the canonical type
//! descriptor, the generated-value type, and the reader traits the synthesis
//! engine depends on.

pub mod error;
pub mod memory;
pub mod reader;
pub mod schema;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use memory::{MemoryModel, MemorySchema, TableSchema};
pub use reader::{EnumRegistry, ModelReader, SchemaReader};
pub use schema::{ColumnDescriptor, Dialect, ForeignKey, Index};
pub use types::{TypeDescriptor, TypeKind};
pub use value::{EnumCase, EnumScalar, Value};
