//! Per-table orchestration: key/identity exclusion, the heuristic → cast →
//! type precedence policy, and the final ordered attribute mapping.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, info};

use tablesmith_core::{
    ColumnDescriptor, Dialect, ForeignKey, Index, ModelReader, SchemaReader, TypeDescriptor,
    TypeKind, Value,
};

use crate::casts::{self, CastClass};
use crate::defaults::{self, DefaultValue};
use crate::errors::SynthesisError;
use crate::faker::FakeSource;
use crate::generators;
use crate::heuristics;
use crate::typemap;

/// Ordered mapping from column name to generated value.
///
/// Insertion order is schema column order; serializes as a JSON map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(String, Value)>,
}

impl Attributes {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, name: String, value: Value) {
        self.entries.push((name, value));
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl IntoIterator for Attributes {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Entry point for synthesizing a table's attribute values.
pub struct ColumnSynthesizer<'a> {
    schema: &'a dyn SchemaReader,
    model: &'a dyn ModelReader,
    faker: &'a mut dyn FakeSource,
}

impl<'a> ColumnSynthesizer<'a> {
    pub fn new(
        schema: &'a dyn SchemaReader,
        model: &'a dyn ModelReader,
        faker: &'a mut dyn FakeSource,
    ) -> Self {
        Self {
            schema,
            model,
            faker,
        }
    }

    /// Synthesize one value per non-excluded column of the table.
    ///
    /// Auto-increment columns, foreign-key columns, and primary-index columns
    /// are skipped entirely; they never appear in the output.
    pub fn synthesize(&mut self, table: &str) -> Result<Attributes, SynthesisError> {
        let dialect = self.schema.dialect();
        let columns = self.schema.columns(table)?;
        let foreign_keys = self.schema.foreign_keys(table)?;
        let indexes = self.schema.indexes(table)?;

        info!(table, columns = columns.len(), "synthesizing attributes");

        let mut attributes = Attributes::default();
        for column in &columns {
            if is_excluded(column, &foreign_keys, &indexes) {
                debug!(table, column = %column.name, "key or identity column skipped");
                continue;
            }
            let value = self.value_for(column, dialect)?;
            attributes.push(column.name.clone(), value);
        }

        info!(table, generated = attributes.len(), "attributes synthesized");
        Ok(attributes)
    }

    /// Resolve one column through the precedence policy: name heuristic, then
    /// declared cast, then default expression and raw type.
    fn value_for(
        &mut self,
        column: &ColumnDescriptor,
        dialect: Dialect,
    ) -> Result<Value, SynthesisError> {
        if let Some(value) = heuristics::guess(&column.name, self.faker) {
            debug!(column = %column.name, "name heuristic matched");
            return Ok(value);
        }

        let descriptor = typemap::classify(&column.raw_type, &column.raw_type_name);
        let class = casts::classify(
            self.model.cast_for(&column.name).as_deref(),
            self.model.is_date_tracked(&column.name),
            self.model,
        )?;

        match class {
            CastClass::None => self.value_from_column(column, &descriptor, dialect),
            class => match self.value_from_cast(class, &descriptor) {
                Some(value) => Ok(value),
                // Enum casts whose registry lookup yields no cases fall back
                // to type-based generation.
                None => self.value_from_column(column, &descriptor, dialect),
            },
        }
    }

    fn value_from_cast(&mut self, class: CastClass, descriptor: &TypeDescriptor) -> Option<Value> {
        let value = match class {
            CastClass::None => return None,
            CastClass::Array => generators::array_value(self.faker),
            CastClass::Integer => generators::integer_value(self.faker),
            CastClass::Real => generators::real_value(self.faker),
            CastClass::Decimal(precision) => {
                generators::decimal_value(self.faker, precision, generators::DEFAULT_MAX)
            }
            CastClass::Boolean => generators::boolean_value(self.faker),
            CastClass::Date => generators::date_value(self.faker),
            CastClass::Timestamp => generators::timestamp_value(self.faker),
            CastClass::EnumCollection(enum_ref) => {
                return generators::enum_collection_value(self.faker, self.model, &enum_ref);
            }
            CastClass::Enum(enum_ref) => {
                return generators::enum_value(self.faker, self.model, &enum_ref);
            }
            CastClass::String => generators::string_value(self.faker, descriptor.length),
        };
        Some(value)
    }

    /// Type-based fallback: null for nullable columns without a default, the
    /// default literal when one parses, else a value shaped by the canonical
    /// kind.
    fn value_from_column(
        &mut self,
        column: &ColumnDescriptor,
        descriptor: &TypeDescriptor,
        dialect: Dialect,
    ) -> Result<Value, SynthesisError> {
        if column.nullable && column.default.is_none() {
            return Ok(Value::Null);
        }
        if let DefaultValue::Literal(text) = defaults::parse(dialect, column.default.as_deref()) {
            return Ok(Value::Text(text));
        }

        let value = match descriptor.kind {
            TypeKind::Integer => generators::integer_value(self.faker),
            TypeKind::Date | TypeKind::Datetime => generators::date_value(self.faker),
            TypeKind::Numeric => generators::decimal_value(
                self.faker,
                descriptor.precision.unwrap_or(10),
                f64::from(descriptor.scale.unwrap_or(2)),
            ),
            TypeKind::Time => Value::Text(self.faker.time().format("%H:%M:%S").to_string()),
            TypeKind::Timestamp => generators::timestamp_value(self.faker),
            TypeKind::Text => Value::Text(self.faker.text(200)),
            TypeKind::Boolean => generators::boolean_value(self.faker),
            TypeKind::Json => generators::json_value(self.faker),
            TypeKind::Enum => descriptor
                .values
                .as_deref()
                .and_then(|values| self.faker.random_element(values))
                .map(Value::Text)
                .unwrap_or(Value::Null),
            TypeKind::Set => Value::Array(
                self.faker
                    .random_elements(descriptor.values.as_deref().unwrap_or(&[]), 1)
                    .into_iter()
                    .map(Value::Text)
                    .collect(),
            ),
            _ => generators::string_value(self.faker, descriptor.length),
        };
        Ok(value)
    }
}

fn is_excluded(column: &ColumnDescriptor, foreign_keys: &[ForeignKey], indexes: &[Index]) -> bool {
    column.auto_increment
        || foreign_keys
            .iter()
            .any(|fk| fk.columns.iter().any(|name| *name == column.name))
        || indexes
            .iter()
            .any(|index| index.primary && index.columns.iter().any(|name| *name == column.name))
}
