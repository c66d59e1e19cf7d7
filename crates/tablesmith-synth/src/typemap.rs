//! Normalization of raw dialect-specific SQL types into canonical
//! [`TypeDescriptor`] values.

use tablesmith_core::{TypeDescriptor, TypeKind};

/// Classify a raw column type into a canonical descriptor.
///
/// `raw_type` is the full declaration (e.g. `decimal(8,2)`), `raw_type_name`
/// the bare keyword (e.g. `decimal`). Unrecognized types classify as
/// [`TypeKind::Unknown`] with no parameters.
pub fn classify(raw_type: &str, raw_type_name: &str) -> TypeDescriptor {
    let kind = match_full_type(raw_type)
        .or_else(|| match_type_name(raw_type_name))
        .unwrap_or(TypeKind::Unknown);

    let mut descriptor = TypeDescriptor::new(kind);
    if let Some(tokens) = parameter_tokens(raw_type) {
        apply_parameters(&mut descriptor, raw_type_name, &tokens);
    }
    descriptor
}

/// Dialect irregularities that are only visible in the full type string.
fn match_full_type(raw_type: &str) -> Option<TypeKind> {
    match raw_type {
        "tinyint(1)" | "bit" => Some(TypeKind::Boolean),
        "varchar(max)" | "nvarchar(max)" => Some(TypeKind::Text),
        _ => None,
    }
}

fn match_type_name(raw_type_name: &str) -> Option<TypeKind> {
    match raw_type_name {
        "integer" | "int" | "int4" | "smallint" | "int2" | "tinyint" | "mediumint" | "bigint"
        | "int8" => Some(TypeKind::Integer),
        "date" => Some(TypeKind::Date),
        "numeric" | "decimal" | "float" | "real" | "float4" | "double" | "float8" => {
            Some(TypeKind::Numeric)
        }
        "time" | "timetz" => Some(TypeKind::Time),
        "datetime" | "datetime2" | "smalldatetime" | "datetimeoffset" => Some(TypeKind::Datetime),
        "timestamp" | "timestamptz" => Some(TypeKind::Timestamp),
        "text" | "ntext" | "tinytext" | "mediumtext" | "longtext" => Some(TypeKind::Text),
        "boolean" | "bool" => Some(TypeKind::Boolean),
        "json" | "jsonb" => Some(TypeKind::Json),
        "enum" => Some(TypeKind::Enum),
        "set" => Some(TypeKind::Set),
        "char" | "bpchar" | "nchar" => Some(TypeKind::Char),
        "varchar" | "nvarchar" => Some(TypeKind::String),
        "binary" | "varbinary" | "bytea" | "image" | "blob" | "tinyblob" | "mediumblob"
        | "longblob" => Some(TypeKind::Binary),
        "year" => Some(TypeKind::Year),
        "uuid" | "uniqueidentifier" => Some(TypeKind::Uuid),
        "macaddr" | "macaddr8" => Some(TypeKind::MacAddress),
        "inet" | "inet4" | "inet6" | "cidr" => Some(TypeKind::IpAddress),
        "geometry" | "geometrycollection" | "linestring" | "multilinestring" | "point"
        | "multipoint" | "polygon" | "multipolygon" => Some(TypeKind::Geometry),
        "geography" => Some(TypeKind::Geography),
        _ => None,
    }
}

/// Tokens of the parenthesized parameter list, if the raw type carries one.
fn parameter_tokens(raw_type: &str) -> Option<Vec<String>> {
    let open = raw_type.find('(')?;
    let close = raw_type.rfind(')')?;
    if close <= open {
        return None;
    }
    Some(split_quoted(&raw_type[open + 1..close]))
}

/// Comma-split honoring single-quote enclosures, so enum/set value lists
/// containing commas or doubled-quote escapes are not mis-split.
fn split_quoted(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '\'' {
                if chars.peek() == Some(&'\'') {
                    current.push('\'');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else {
            match ch {
                '\'' => in_quotes = true,
                ',' => tokens.push(std::mem::take(&mut current)),
                ch if ch.is_whitespace() && current.is_empty() => {}
                ch => current.push(ch),
            }
        }
    }
    tokens.push(current);
    tokens
}

/// Parameter extraction is keyed strictly off the mapped kind.
fn apply_parameters(descriptor: &mut TypeDescriptor, raw_type_name: &str, tokens: &[String]) {
    match descriptor.kind {
        TypeKind::String | TypeKind::Char | TypeKind::Binary => {
            descriptor.length = int_param(tokens.first());
        }
        TypeKind::Datetime | TypeKind::Time | TypeKind::Timestamp => {
            descriptor.precision = int_param(tokens.first());
        }
        TypeKind::Numeric => {
            descriptor.precision = int_param(tokens.first());
            descriptor.scale = int_param(tokens.get(1));
        }
        TypeKind::Enum | TypeKind::Set => {
            if !tokens.is_empty() {
                descriptor.values = Some(tokens.to_vec());
            }
        }
        TypeKind::Geometry | TypeKind::Geography => {
            descriptor.subtype = tokens
                .first()
                .filter(|token| !token.is_empty())
                .cloned()
                .or_else(|| (!raw_type_name.is_empty()).then(|| raw_type_name.to_string()));
            descriptor.srid = int_param(tokens.get(1));
        }
        _ => {}
    }
}

/// Zero and unparsable tokens count as absent, mirroring the falsy filtering
/// of the upstream metadata formats.
fn int_param(token: Option<&String>) -> Option<u32> {
    token
        .and_then(|token| token.trim().parse::<u32>().ok())
        .filter(|value| *value != 0)
}
