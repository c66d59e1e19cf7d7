//! The value-generator set.
//!
//! Leaf functions producing a value of a fixed shape, each delegating entropy
//! to the injected [`FakeSource`].

use tablesmith_core::{EnumRegistry, Value};

use crate::faker::FakeSource;

/// Number of pseudo-words in array-shaped values and of draws in an enum
/// collection.
const COLLECTION_SIZE: usize = 5;

/// Default rounding precision for decimal values.
pub const DEFAULT_PRECISION: u32 = 2;
/// Default upper bound for decimal values.
pub const DEFAULT_MAX: f64 = 100.0;

pub fn array_value(faker: &mut dyn FakeSource) -> Value {
    Value::Array(
        faker
            .words(COLLECTION_SIZE)
            .into_iter()
            .map(Value::Text)
            .collect(),
    )
}

pub fn boolean_value(faker: &mut dyn FakeSource) -> Value {
    Value::Bool(faker.boolean())
}

pub fn date_value(faker: &mut dyn FakeSource) -> Value {
    Value::DateTime(faker.date_time())
}

/// Random float in `[0, max]` rounded to `precision` digits.
pub fn decimal_value(faker: &mut dyn FakeSource, precision: u32, max: f64) -> Value {
    Value::Float(faker.random_float(precision, 0.0, max))
}

pub fn real_value(faker: &mut dyn FakeSource) -> Value {
    decimal_value(faker, DEFAULT_PRECISION, DEFAULT_MAX)
}

/// Random single digit; the narrow range is intentional.
pub fn integer_value(faker: &mut dyn FakeSource) -> Value {
    Value::Int(faker.random_digit())
}

pub fn json_value(faker: &mut dyn FakeSource) -> Value {
    let words = faker
        .words(COLLECTION_SIZE)
        .into_iter()
        .map(serde_json::Value::String)
        .collect();
    Value::Text(serde_json::Value::Array(words).to_string())
}

pub fn timestamp_value(faker: &mut dyn FakeSource) -> Value {
    Value::Int(faker.unix_time())
}

pub fn string_value(faker: &mut dyn FakeSource, length: Option<u32>) -> Value {
    Value::Text(faker.text(length.unwrap_or(10) as usize))
}

/// One random case of the referenced enum: backed cases yield their scalar,
/// pure cases their symbolic name. `None` when the enum resolves to no cases.
pub fn enum_value(
    faker: &mut dyn FakeSource,
    enums: &dyn EnumRegistry,
    enum_ref: &str,
) -> Option<Value> {
    let cases = enums.enum_cases(enum_ref);
    if cases.is_empty() {
        return None;
    }
    let case = &cases[faker.random_index(cases.len())];
    Some(
        case.value
            .clone()
            .map(Value::from)
            .unwrap_or_else(|| Value::Text(case.name.clone())),
    )
}

/// Five independent enum draws; duplicates allowed.
pub fn enum_collection_value(
    faker: &mut dyn FakeSource,
    enums: &dyn EnumRegistry,
    enum_ref: &str,
) -> Option<Value> {
    let mut draws = Vec::with_capacity(COLLECTION_SIZE);
    for _ in 0..COLLECTION_SIZE {
        draws.push(enum_value(faker, enums, enum_ref)?);
    }
    Some(Value::Array(draws))
}
