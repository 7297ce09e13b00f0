//! Encoders over tab-separated row/column input.
//!
//! Lines are newline-separated, fields tab-separated. Pairing is strictly
//! positional: a row/column arity mismatch fails with a generic index error
//! rather than being padded or truncated.

use crate::error::{Error, Result};
use crate::transform::EMPTY_INPUT;
use crate::transform::identifier::normalize;
use crate::transform::sniff::TypeTag;

/// Encode a header line plus a value line as a JSON object.
///
/// Value rules, in priority order: integer-parseable values are emitted
/// unquoted, `NULL` (any case) and blank values become `""`, everything
/// else is quoted as-is.
pub fn row_to_json(input: &str) -> Result<String> {
    if input.is_empty() {
        return Err(Error::validation(EMPTY_INPUT));
    }
    let lines: Vec<&str> = input.split('\n').collect();
    let cols: Vec<&str> = lines[0].split('\t').collect();
    let values: Vec<&str> = field_at(&lines, 1)?.split('\t').collect();

    let mut result = String::new();
    for (x, col) in cols.iter().enumerate() {
        let value = *field_at(&values, x)?;
        let mut chars = col.chars();
        let first = chars
            .next()
            .ok_or(Error::IndexOutOfRange { index: 0, len: 0 })?;
        let name = format!("{}{}", first.to_lowercase(), chars.as_str());

        if value.trim().parse::<i64>().is_ok() {
            result.push_str(&format!("\"{name}\":{value},\n"));
        } else if value.trim().eq_ignore_ascii_case("null") || value.trim().is_empty() {
            result.push_str(&format!("\"{name}\":\"\",\n"));
        } else {
            result.push_str(&format!("\"{name}\":\"{value}\",\n"));
        }
    }
    // Drop the trailing ",\n".
    result.truncate(result.len().saturating_sub(2));
    Ok(format!("{{\n{result}\n}}"))
}

/// Encode `name<TAB>typeHint<TAB>nullability` lines as member declarations.
///
/// Each line gets a doc comment built from the raw name. A line with only a
/// name emits an explicit `Insufficient arguments.` marker and processing
/// continues. Identifier normalization and the optional `?` suffix apply
/// only when the nullability column is present; two-column lines keep their
/// name untouched and are never optional. The string arm never takes the
/// `?` suffix even when the column is nullable.
pub fn rows_to_members(input: &str) -> Result<String> {
    if input.is_empty() {
        return Err(Error::validation(EMPTY_INPUT));
    }
    let mut result = String::new();
    for line in input.split('\n') {
        let properties: Vec<&str> = line.split('\t').collect();
        result.push_str(&format!(
            "///<summary>\n/// Gets/Sets the {}.\n///</summary>\n",
            properties[0]
        ));
        match properties.len() {
            1 => result.push_str("Insufficient arguments.\n\n"),
            2 => {
                let tag = TypeTag::from_hint(properties[1]);
                result.push_str(&format!(
                    "public {} {} {{ get; set; }}\n\n",
                    tag.member_type(),
                    properties[0]
                ));
            }
            3 => {
                let nullable = if properties[2].eq_ignore_ascii_case("YES") {
                    "?"
                } else {
                    ""
                };
                let name = normalize(properties[0]);
                let tag = TypeTag::from_hint(properties[1]);
                match tag {
                    TypeTag::String => result
                        .push_str(&format!("public string {name} {{ get; set; }}\n\n")),
                    _ => result.push_str(&format!(
                        "public {}{nullable} {name} {{ get; set; }}\n\n",
                        tag.member_type()
                    )),
                }
            }
            // Wider lines keep the doc comment but emit no declaration.
            _ => {}
        }
    }
    Ok(result)
}

/// Quote each line and escape tabs, producing a pasteable string-array body.
///
/// Four leading spaces count as a tab, so editor-expanded indentation still
/// escapes.
pub fn snippet(input: &str) -> Result<String> {
    if input.is_empty() {
        return Err(Error::validation(EMPTY_INPUT));
    }
    Ok(format!(
        "\"{}\"",
        input
            .replace('\n', "\",\n\"")
            .replace('\t', "\\t")
            .replace("    ", "\\t")
    ))
}

/// Turn a list of column names into `name = source.name,` assignment lines,
/// with identifier normalization applied to each name.
pub fn assignment_lines(input: &str) -> Result<String> {
    if input.is_empty() {
        return Err(Error::validation(EMPTY_INPUT));
    }
    let mut result = String::new();
    for line in input.split('\n') {
        let name = normalize(line);
        result.push_str(&format!("{name} = source.{name},\n"));
    }
    Ok(result)
}

/// Turn a list of property names into fluent column-mapping lines.
pub fn property_schema(input: &str) -> String {
    let mut result = String::new();
    for item in input.split('\n') {
        result.push_str(&format!(
            "builder.Property(p => p.{item}).HasColumnName(\"{item}\");\n\n"
        ));
    }
    result
}

/// Turn `name<TAB>type` lines into a SQL column list fragment. A bare
/// `varchar` is widened to `varchar(50)`.
pub fn sql_columns(input: &str) -> Result<String> {
    let mut result = String::new();
    for line in input.split('\n') {
        let columns: Vec<&str> = line.split('\t').collect();
        let name = columns[0];
        let ty = *field_at(&columns, 1)?;
        let ty = if ty == "varchar" { "varchar(50)" } else { ty };
        result.push_str(&format!("[{name}] {ty},\n\t"));
    }
    Ok(result)
}

fn field_at<'a, T>(fields: &'a [T], index: usize) -> Result<&'a T> {
    fields.get(index).ok_or(Error::IndexOutOfRange {
        index,
        len: fields.len(),
    })
}
