use chrono::NaiveDateTime;
use serde::Serialize;

/// Generated value for a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    DateTime(NaiveDateTime),
    Array(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values.as_slice()),
            _ => None,
        }
    }
}

/// Backing scalar of an enumerated-type case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EnumScalar {
    Int(i64),
    Str(String),
}

impl From<EnumScalar> for Value {
    fn from(scalar: EnumScalar) -> Self {
        match scalar {
            EnumScalar::Int(value) => Value::Int(value),
            EnumScalar::Str(value) => Value::Text(value),
        }
    }
}

/// One case of an application-level enumerated type.
///
/// Backed cases carry a scalar value; pure cases expose only their name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumCase {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<EnumScalar>,
}

impl EnumCase {
    /// Pure case with no backing scalar.
    pub fn pure(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Case backed by an integer scalar.
    pub fn backed_int(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value: Some(EnumScalar::Int(value)),
        }
    }

    /// Case backed by a string scalar.
    pub fn backed_str(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(EnumScalar::Str(value.into())),
        }
    }
}
