use serde::{Deserialize, Serialize};

/// Canonical kind a raw dialect-specific SQL type maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Integer,
    Date,
    Numeric,
    Time,
    Datetime,
    Timestamp,
    Text,
    Boolean,
    Json,
    Enum,
    Set,
    Char,
    String,
    Binary,
    Year,
    Uuid,
    MacAddress,
    IpAddress,
    Geometry,
    Geography,
    /// Raw type the mapper does not recognize; treated downstream as a
    /// generic string with no length parameter.
    Unknown,
}

/// Canonical type descriptor derived from a column's raw type declaration.
///
/// Parameters are present only when the raw type carried them; absent
/// parameters are `None`, never present with a null value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srid: Option<u32>,
}

impl TypeDescriptor {
    /// Descriptor of the given kind with no parameters.
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            length: None,
            precision: None,
            scale: None,
            values: None,
            subtype: None,
            srid: None,
        }
    }
}
