//! Schema-driven value synthesis for Tablesmith.
//!
//! This crate turns raw column metadata into plausible fake attribute values:
//! it normalizes dialect-specific SQL types, parses default expressions,
//! classifies declared casts, and dispatches to a generator set backed by an
//! injected fake-data source.

pub mod casts;
pub mod defaults;
pub mod errors;
pub mod faker;
pub mod generators;
pub mod heuristics;
pub mod synthesizer;
pub mod typemap;

pub use casts::CastClass;
pub use defaults::DefaultValue;
pub use errors::SynthesisError;
pub use faker::{FakeData, FakeSource};
pub use synthesizer::{Attributes, ColumnSynthesizer};
