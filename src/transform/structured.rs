//! Converters between JSON documents, XML fragments, and generated members.
//!
//! All converters pattern-match over `serde_json::Value` as the generic
//! document model; XML input goes through a read-only roxmltree parse and
//! XML output through a quick-xml writer.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use roxmltree::{Document, Node};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::transform::EMPTY_INPUT;
use crate::transform::sniff::TypeTag;

/// Name of the synthetic root wrapped around JSON input when emitting XML.
const DEFAULT_ROOT: &str = "DefaultRoot";

/// Generated member declarations plus any non-fatal warnings.
#[derive(Debug, Clone, Default)]
pub struct GeneratedMembers {
    /// The generated declarations, ready to paste.
    pub code: String,
    /// Names of properties that were nested objects and got a pseudo-type
    /// instead of being recursed into.
    pub nested: Vec<String>,
}

impl GeneratedMembers {
    /// A human-readable warning listing the nested objects, if any were hit.
    pub fn warning(&self) -> Option<String> {
        if self.nested.is_empty() {
            None
        } else {
            Some(format!(
                "Nested objects are not expanded: {}",
                self.nested.join(", ")
            ))
        }
    }
}

/// Generate member declarations from the immediate properties of a JSON
/// object body.
///
/// The input is treated as the inside of an object literal and wrapped in
/// braces unless it already starts with one. A property whose value is a
/// non-empty object becomes a capitalized pseudo-type member and is
/// reported through [`GeneratedMembers::nested`]; nothing is recursed.
/// Scalars are classified from their string form.
pub fn json_object_to_members(input: &str) -> Result<GeneratedMembers> {
    if input.is_empty() {
        return Err(Error::validation(EMPTY_INPUT));
    }
    let map = parse_object_body(input)?;

    let mut members = GeneratedMembers::default();
    for (name, value) in &map {
        push_summary(&mut members.code, name);
        match value {
            Value::Object(inner) if !inner.is_empty() => {
                members.code.push_str(&format!(
                    "public {} {name} {{ get; set; }}\n\n",
                    capitalize(name)
                ));
                members.nested.push(name.clone());
            }
            scalar => {
                let declaration = match TypeTag::from_value(&scalar_text(scalar)) {
                    TypeTag::Integer => format!("public int {name} {{ get; set; }}\n\n"),
                    TypeTag::Date => format!("public DateTime? {name} {{ get; set; }}\n\n"),
                    TypeTag::Boolean => format!("public bool {name} {{ get; set; }}\n\n"),
                    _ => format!("public string {name} {{ get; set; }} = string.Empty;\n\n"),
                };
                members.code.push_str(&declaration);
            }
        }
    }
    Ok(members)
}

/// Emit a JSON object body as an indented XML fragment under a synthetic
/// `DefaultRoot` element. Arrays become repeated elements, null becomes an
/// empty element.
pub fn json_to_xml(input: &str) -> Result<String> {
    if input.is_empty() {
        return Err(Error::validation(EMPTY_INPUT));
    }
    let map = parse_object_body(input)?;

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_element(&mut writer, DEFAULT_ROOT, &Value::Object(map))?;
    String::from_utf8(writer.into_inner())
        .map_err(|e| Error::configuration(format!("generated XML was not UTF-8: {e}")))
}

/// Generate member declarations from the immediate children of an XML
/// document's root element.
///
/// A child with no inner text or with more than one element child becomes a
/// capitalized pseudo-type member with no default; otherwise the inner text
/// is sniffed and the member gets the matching default initializer.
/// Comment nodes are skipped.
pub fn xml_to_members(input: &str) -> Result<GeneratedMembers> {
    if input.is_empty() {
        return Err(Error::validation(EMPTY_INPUT));
    }
    let unescaped = unescape_angles(input);
    let doc = parse_document(&unescaped)?;
    let root = doc.root_element();

    let mut members = GeneratedMembers::default();
    for child in root.children().filter(Node::is_element) {
        let name = child.tag_name().name();
        push_summary(&mut members.code, name);

        let element_children = child.children().filter(Node::is_element).count();
        let text = child.text().map(str::trim).unwrap_or("");
        if element_children > 1 || text.is_empty() {
            members.code.push_str(&format!(
                "public {} {name} {{ get; set; }}\n\n",
                capitalize(name)
            ));
            members.nested.push(name.to_string());
        } else {
            let tag = TypeTag::from_value(text);
            let ty = match tag {
                TypeTag::Integer | TypeTag::Date | TypeTag::Boolean => tag,
                _ => TypeTag::String,
            };
            members.code.push_str(&format!(
                "public {} {name} {{ get; set; }} = {};\n\n",
                ty.member_type(),
                ty.default_literal()
            ));
        }
    }
    Ok(members)
}

/// Convert an XML document to a pretty-printed JSON document keyed by the
/// document's actual root element name. Repeated sibling names collapse to
/// arrays, attributes become `@`-prefixed properties, comments are skipped.
pub fn xml_to_json(input: &str) -> Result<String> {
    if input.is_empty() {
        return Err(Error::validation(EMPTY_INPUT));
    }
    let unescaped = unescape_angles(input);
    let doc = parse_document(&unescaped)?;
    let root = doc.root_element();

    let mut top = Map::new();
    top.insert(root.tag_name().name().to_string(), element_to_value(root));
    serde_json::to_string_pretty(&Value::Object(top))
        .map_err(|e| Error::configuration(format!("failed to serialize JSON: {e}")))
}

/// Wrap a body in braces when needed and parse it into an object.
fn parse_object_body(input: &str) -> Result<Map<String, Value>> {
    let braced = if input.trim_start().starts_with('{') {
        input.to_string()
    } else {
        format!("{{{input}}}")
    };
    match serde_json::from_str(&braced) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(Error::validation(
            "Input must be the body of a JSON object.",
        )),
        Err(e) => Err(Error::validation(format!(
            "Input is not a JSON object body: {e}"
        ))),
    }
}

fn parse_document(input: &str) -> Result<Document<'_>> {
    Document::parse(input)
        .map_err(|e| Error::configuration(format!("missing or malformed root element: {e}")))
}

fn element_to_value(node: Node<'_, '_>) -> Value {
    let mut map = Map::new();
    for attr in node.attributes() {
        map.insert(
            format!("@{}", attr.name()),
            Value::String(attr.value().to_string()),
        );
    }

    let elements: Vec<Node> = node.children().filter(Node::is_element).collect();
    if elements.is_empty() {
        let text = node.text().map(str::trim).unwrap_or("").to_string();
        if map.is_empty() {
            return Value::String(text);
        }
        if !text.is_empty() {
            map.insert("#text".to_string(), Value::String(text));
        }
        return Value::Object(map);
    }

    for child in elements {
        let name = child.tag_name().name().to_string();
        let value = element_to_value(child);
        match map.get_mut(&name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let prior = existing.take();
                *existing = Value::Array(vec![prior, value]);
            }
            None => {
                map.insert(name, value);
            }
        }
    }
    Value::Object(map)
}

fn write_element(writer: &mut Writer<Vec<u8>>, name: &str, value: &Value) -> Result<()> {
    match value {
        Value::Array(items) => {
            for item in items {
                write_element(writer, name, item)?;
            }
        }
        Value::Object(map) => {
            write_event(writer, Event::Start(BytesStart::new(name)))?;
            for (child, child_value) in map {
                write_element(writer, child, child_value)?;
            }
            write_event(writer, Event::End(BytesEnd::new(name)))?;
        }
        Value::Null => {
            write_event(writer, Event::Empty(BytesStart::new(name)))?;
        }
        scalar => {
            write_event(writer, Event::Start(BytesStart::new(name)))?;
            write_event(writer, Event::Text(BytesText::new(&scalar_text(scalar))))?;
            write_event(writer, Event::End(BytesEnd::new(name)))?;
        }
    }
    Ok(())
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::configuration(format!("failed to write XML: {e}")))
}

/// HTML-entity-escaped angle brackets show up when input is pasted out of a
/// browser; undo them before parsing.
fn unescape_angles(input: &str) -> String {
    input.replace("&lt;", "<").replace("&gt;", ">")
}

/// String form used for type sniffing and XML text emission: JSON strings
/// contribute their raw contents, everything else its literal rendering.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn push_summary(code: &mut String, name: &str) {
    code.push_str(&format!(
        "///<summary>\n/// Gets/Sets the {name}.\n///</summary>\n"
    ));
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_members_classify_scalars() {
        let members = json_object_to_members(
            "\"age\": 41, \"born\": \"1983-05-01\", \"active\": true, \"name\": \"Ada\"",
        )
        .unwrap();
        assert!(members.code.contains("public int age { get; set; }"));
        assert!(members.code.contains("public DateTime? born { get; set; }"));
        assert!(members.code.contains("public bool active { get; set; }"));
        assert!(
            members
                .code
                .contains("public string name { get; set; } = string.Empty;")
        );
        assert!(members.nested.is_empty());
        assert!(members.warning().is_none());
    }

    #[test]
    fn json_members_accept_already_braced_input() {
        let members = json_object_to_members("{\"a\": 1}").unwrap();
        assert!(members.code.contains("public int a { get; set; }"));
    }

    #[test]
    fn json_members_flag_nested_objects_without_recursing() {
        let members =
            json_object_to_members("\"name\": \"Ada\", \"address\": {\"city\": \"London\"}")
                .unwrap();
        assert!(
            members
                .code
                .contains("public Address address { get; set; }")
        );
        assert_eq!(members.nested, vec!["address"]);
        assert!(members.warning().unwrap().contains("address"));
        // The nested property was not expanded.
        assert!(!members.code.contains("city"));
    }

    #[test]
    fn json_members_empty_object_is_not_flagged_as_nested() {
        let members = json_object_to_members("\"empty\": {}").unwrap();
        assert!(members.nested.is_empty());
        assert!(
            members
                .code
                .contains("public string empty { get; set; } = string.Empty;")
        );
    }

    #[test]
    fn json_members_array_value_falls_through_to_string() {
        let members = json_object_to_members("\"tags\": [1, 2]").unwrap();
        assert!(members.nested.is_empty());
        assert!(members.code.contains("public string tags"));
    }

    #[test]
    fn json_members_preserve_property_order() {
        let members = json_object_to_members("\"b\": 1, \"a\": 2").unwrap();
        let b = members.code.find("public int b").unwrap();
        let a = members.code.find("public int a").unwrap();
        assert!(b < a);
    }

    #[test]
    fn json_to_xml_wraps_in_default_root() {
        let xml = json_to_xml("\"name\": \"Ada\", \"age\": 41").unwrap();
        assert!(xml.starts_with("<DefaultRoot>"));
        assert!(xml.ends_with("</DefaultRoot>"));
        assert!(xml.contains("<name>Ada</name>"));
        assert!(xml.contains("<age>41</age>"));
    }

    #[test]
    fn json_to_xml_arrays_repeat_and_null_is_empty() {
        let xml = json_to_xml("\"tag\": [1, 2], \"gone\": null").unwrap();
        assert_eq!(xml.matches("<tag>").count(), 2);
        assert!(xml.contains("<gone/>"));
    }

    #[test]
    fn json_to_xml_nests_objects() {
        let xml = json_to_xml("\"address\": {\"city\": \"London\"}").unwrap();
        assert!(xml.contains("<address>"));
        assert!(xml.contains("<city>London</city>"));
    }

    #[test]
    fn xml_members_infer_from_inner_text() {
        let members = xml_to_members(
            "<Policy><Count>3</Count><Start>2024-01-01</Start><Open>true</Open><Name>Ada</Name></Policy>",
        )
        .unwrap();
        assert!(members.code.contains("public int Count { get; set; } = 0;"));
        assert!(
            members
                .code
                .contains("public DateTime Start { get; set; } = DateTime.MinValue;")
        );
        assert!(members.code.contains("public bool Open { get; set; } = false;"));
        assert!(
            members
                .code
                .contains("public string Name { get; set; } = string.Empty;")
        );
    }

    #[test]
    fn xml_members_pseudo_type_for_complex_children() {
        let members = xml_to_members(
            "<Root><Address><City>London</City><Zip>E1</Zip></Address><Empty></Empty></Root>",
        )
        .unwrap();
        assert!(
            members
                .code
                .contains("public Address Address { get; set; }")
        );
        assert!(members.code.contains("public Empty Empty { get; set; }"));
        assert_eq!(members.nested, vec!["Address", "Empty"]);
    }

    #[test]
    fn xml_members_skip_comments() {
        let members =
            xml_to_members("<Root><!-- note --><Name>Ada</Name></Root>").unwrap();
        assert!(!members.code.contains("note"));
        assert!(members.code.contains("public string Name"));
    }

    #[test]
    fn xml_members_unescape_angle_brackets_first() {
        let members = xml_to_members("&lt;Root&gt;&lt;Age&gt;3&lt;/Age&gt;&lt;/Root&gt;").unwrap();
        assert!(members.code.contains("public int Age { get; set; } = 0;"));
    }

    #[test]
    fn xml_members_missing_root_is_a_configuration_error() {
        assert!(matches!(
            xml_to_members("not xml at all"),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn xml_to_json_uses_actual_root_name() {
        let json = xml_to_json("<Policy><Name>Ada</Name><Age>41</Age></Policy>").unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Policy"]["Name"], "Ada");
        assert_eq!(value["Policy"]["Age"], "41");
    }

    #[test]
    fn xml_to_json_repeated_siblings_become_arrays() {
        let json = xml_to_json("<Root><Tag>a</Tag><Tag>b</Tag></Root>").unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Root"]["Tag"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn xml_to_json_attributes_get_at_prefix() {
        let json = xml_to_json("<Root id=\"7\"><Name>Ada</Name></Root>").unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Root"]["@id"], "7");
    }

    #[test]
    fn round_trip_nested_object_is_flagged_not_lossless() {
        // One level of nesting is flagged, not recursed, so the pseudo-typed
        // member is all that survives the round trip.
        let members =
            json_object_to_members("\"name\": \"Ada\", \"address\": {\"city\": \"London\"}")
                .unwrap();
        assert_eq!(members.nested.len(), 1);

        let xml = json_to_xml("\"name\": \"Ada\", \"address\": {\"city\": \"London\"}").unwrap();
        let json = xml_to_json(&xml).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["DefaultRoot"]["address"]["city"], "London");
    }
}
