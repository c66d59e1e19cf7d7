//! Classification of declared cast tokens into a closed [`CastClass`].

use tablesmith_core::EnumRegistry;

use crate::errors::SynthesisError;

/// Cast tokens that coerce a column to an array shape.
const ARRAY_CASTS: &[&str] = &[
    "array",
    "json",
    "object",
    "collection",
    "encrypted:array",
    "encrypted:collection",
    "encrypted:json",
    "encrypted:object",
    "array_object",
    "collection_object",
    "encrypted:array_object",
    "encrypted:collection_object",
];

/// Cast-token prefixes marking a collection of enum cases.
const ENUM_COLLECTION_PREFIXES: &[&str] = &["enum_collection", "enum_array_object"];

/// Semantic class of a column's declared cast token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastClass {
    /// No cast declared, or the token classifies as nothing usable.
    None,
    Array,
    Boolean,
    Integer,
    Real,
    /// Decimal with rounding precision from the token suffix.
    Decimal(u32),
    Date,
    Timestamp,
    /// Collection of cases of the referenced enum.
    EnumCollection(String),
    /// One case of the referenced enum.
    Enum(String),
    String,
}

/// Classify a cast token, first match wins.
///
/// The branch order is semantic: several predicates overlap (a token can look
/// like an array cast and also name an enum), so reordering changes behavior.
pub fn classify(
    cast: Option<&str>,
    date_tracked: bool,
    enums: &dyn EnumRegistry,
) -> Result<CastClass, SynthesisError> {
    // A model-level date-tracked marker wins over any cast token.
    if date_tracked {
        return Ok(CastClass::Date);
    }
    let Some(token) = cast else {
        return Ok(CastClass::None);
    };

    if ARRAY_CASTS.contains(&token) {
        return Ok(CastClass::Array);
    }
    if matches!(token, "int" | "integer") {
        return Ok(CastClass::Integer);
    }
    if matches!(token, "real" | "float" | "double") {
        return Ok(CastClass::Real);
    }
    if token.starts_with("decimal") {
        let precision = token
            .split_once(':')
            .and_then(|(_, suffix)| suffix.parse::<u32>().ok())
            .ok_or_else(|| SynthesisError::InvalidCastSpec(token.to_string()))?;
        return Ok(CastClass::Decimal(precision));
    }
    if matches!(token, "bool" | "boolean") {
        return Ok(CastClass::Boolean);
    }
    if matches!(
        token,
        "date" | "datetime" | "immutable_date" | "immutable_datetime"
    ) {
        return Ok(CastClass::Date);
    }
    if token == "timestamp" {
        return Ok(CastClass::Timestamp);
    }

    let (prefix, suffix) = match token.split_once(':') {
        Some((prefix, suffix)) => (Some(prefix), suffix),
        None => (None, token),
    };
    if let Some(prefix) = prefix {
        if ENUM_COLLECTION_PREFIXES.contains(&prefix) && enums.enum_exists(suffix) {
            return Ok(CastClass::EnumCollection(suffix.to_string()));
        }
    }
    if enums.enum_exists(suffix) {
        return Ok(CastClass::Enum(suffix.to_string()));
    }

    if matches!(token, "string" | "encrypted" | "stringable") {
        return Ok(CastClass::String);
    }
    Ok(CastClass::None)
}
