//! Pure text transforms and code generators.
//!
//! Every function here consumes the whole input buffer at once and returns
//! a new output buffer; nothing is mutated in place and no state is carried
//! between calls.

pub mod identifier;
pub mod rewrap;
pub mod sniff;
pub mod structured;
pub mod tabular;

pub use identifier::normalize;
pub use rewrap::{RewrapField, RewrapOptions, rewrap};
pub use sniff::TypeTag;
pub use structured::{
    GeneratedMembers, json_object_to_members, json_to_xml, xml_to_json, xml_to_members,
};
pub use tabular::{
    assignment_lines, property_schema, row_to_json, rows_to_members, snippet, sql_columns,
};

/// Error text shared by every encoder that rejects an empty buffer.
pub(crate) const EMPTY_INPUT: &str = "Input box is empty.";
