//! Best-effort type sniffing shared by the code generators.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Primitive type tag inferred from a hint substring or a raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Integer,
    Date,
    Boolean,
    UniqueId,
    String,
}

impl TypeTag {
    /// Infer a tag from a type-hint substring (e.g. a SQL column type).
    ///
    /// Matching is case-insensitive substring containment, first match
    /// wins: `int` > `date` > `bit` > `unique` > anything else.
    pub fn from_hint(hint: &str) -> Self {
        let hint = hint.to_lowercase();
        if hint.contains("int") {
            TypeTag::Integer
        } else if hint.contains("date") {
            TypeTag::Date
        } else if hint.contains("bit") {
            TypeTag::Boolean
        } else if hint.contains("unique") {
            TypeTag::UniqueId
        } else {
            TypeTag::String
        }
    }

    /// Infer a tag from a raw textual value.
    ///
    /// Tries integer, then date, then boolean parsing; anything else
    /// (including blank input) is a string. Never fails. `UniqueId` is only
    /// produced by hints, never by values.
    pub fn from_value(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.parse::<i64>().is_ok() {
            TypeTag::Integer
        } else if parses_as_date(trimmed) {
            TypeTag::Date
        } else if trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("false") {
            TypeTag::Boolean
        } else {
            TypeTag::String
        }
    }

    /// The generated member type for this tag.
    pub fn member_type(self) -> &'static str {
        match self {
            TypeTag::Integer => "int",
            TypeTag::Date => "DateTime",
            TypeTag::Boolean => "bool",
            TypeTag::UniqueId => "Guid",
            TypeTag::String => "string",
        }
    }

    /// Default-value literal emitted when a generated member needs an
    /// explicit initializer.
    pub fn default_literal(self) -> &'static str {
        match self {
            TypeTag::Integer => "0",
            TypeTag::Date => "DateTime.MinValue",
            TypeTag::Boolean => "false",
            TypeTag::UniqueId => "Guid.Empty",
            TypeTag::String => "string.Empty",
        }
    }
}

/// Invariant calendar formats accepted by [`TypeTag::from_value`].
fn parses_as_date(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || NaiveDate::parse_from_str(value, "%m/%d/%Y").is_ok()
}
