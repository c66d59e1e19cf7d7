//! Parsing of dialect-specific default-value expressions.
//!
//! A default either yields a usable literal (quoting stripped, doubled-quote
//! escapes collapsed exactly once) or no literal at all, in which case the
//! caller falls back to type-based generation.

use regex::Regex;
use tablesmith_core::Dialect;

/// Outcome of parsing a raw default expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// A concrete literal with dialect quoting removed.
    Literal(String),
    /// No usable literal; defer to type-based generation.
    NoLiteral,
}

/// Parse a raw default expression under the given dialect.
///
/// Null or blank input yields [`DefaultValue::NoLiteral`]. An expression no
/// dialect rule matches passes through verbatim as a literal.
pub fn parse(dialect: Dialect, raw: Option<&str>) -> DefaultValue {
    let Some(raw) = raw else {
        return DefaultValue::NoLiteral;
    };
    if raw.trim().is_empty() {
        return DefaultValue::NoLiteral;
    }

    match dialect {
        Dialect::MySql => parse_mysql(raw),
        Dialect::Postgres => parse_postgres(raw),
        Dialect::SqlServer => parse_sqlserver(raw),
        Dialect::Sqlite => parse_sqlite(raw),
    }
}

fn parse_mysql(raw: &str) -> DefaultValue {
    if raw == "NULL"
        || paren_inner(raw).is_some()
        || raw.ends_with("()")
        || raw.to_lowercase().starts_with("current_timestamp")
    {
        return DefaultValue::NoLiteral;
    }
    if let Some(inner) = quoted_inner(raw, false) {
        return DefaultValue::Literal(inner);
    }
    DefaultValue::Literal(raw.to_string())
}

fn parse_postgres(raw: &str) -> DefaultValue {
    // A `NULL::type` default carries no literal; nothing below can match it.
    if raw.starts_with("NULL::") {
        return DefaultValue::NoLiteral;
    }
    if let Some(inner) = pg_cast_inner(raw) {
        return DefaultValue::Literal(inner);
    }
    DefaultValue::Literal(raw.to_string())
}

fn parse_sqlserver(raw: &str) -> DefaultValue {
    let mut stripped = raw.to_string();
    while let Some(inner) = paren_inner(&stripped) {
        stripped = inner;
    }

    if stripped == "NULL" || stripped.ends_with("()") {
        return DefaultValue::NoLiteral;
    }
    if let Some(inner) = quoted_inner(&stripped, false) {
        return DefaultValue::Literal(inner);
    }
    DefaultValue::Literal(stripped)
}

fn parse_sqlite(raw: &str) -> DefaultValue {
    if raw == "NULL" || raw.to_lowercase().starts_with("current_timestamp") {
        return DefaultValue::NoLiteral;
    }
    // SQLite renders string defaults verbatim, including embedded newlines.
    if let Some(inner) = quoted_inner(raw, true) {
        return DefaultValue::Literal(inner);
    }
    DefaultValue::Literal(raw.to_string())
}

/// Inner text of a fully single-quoted value, doubled quotes collapsed.
fn quoted_inner(raw: &str, multiline: bool) -> Option<String> {
    let pattern = if multiline {
        r"(?s)^'(.*)'$"
    } else {
        r"^'(.*)'$"
    };
    let re = Regex::new(pattern).ok()?;
    let caps = re.captures(raw)?;
    Some(unescape(&caps[1]))
}

/// Inner text of an expression fully wrapped in one layer of parentheses.
fn paren_inner(raw: &str) -> Option<String> {
    let re = Regex::new(r"^\((.*)\)$").ok()?;
    let caps = re.captures(raw)?;
    Some(caps[1].to_string())
}

/// Inner text of a quoted or parenthesized literal followed by a Postgres
/// type-cast suffix, e.g. `'draft'::character varying`.
fn pg_cast_inner(raw: &str) -> Option<String> {
    let re = Regex::new(r"^['(](.*)[')]::").ok()?;
    let caps = re.captures(raw)?;
    Some(unescape(&caps[1]))
}

fn unescape(inner: &str) -> String {
    inner.replace("''", "'")
}
