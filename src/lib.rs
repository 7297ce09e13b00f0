//! Text-transformation and code-generation engine for a developer utility UI.
//!
//! The library turns snippets of tabular, JSON, or XML text into other
//! textual representations (generated class members, JSON objects, XML
//! fragments, SQL-ish column lists, delimiter-rewrapped lists) and manages a
//! small repository of named, user-authored transform scripts that can be
//! dispatched to a sandboxed execution host.
//!
//! Every conversion is a pure function over the whole input buffer plus a
//! handful of configuration strings; it either returns a new output buffer
//! or fails with one of the typed errors in [`error::Error`]. The UI layer
//! owns presentation, editing, and prompting - this crate only deals in
//! plain strings.

pub mod config;
pub mod error;
pub mod scripts;
pub mod services;
pub mod transform;

pub use config::{ChatConfig, Config};
pub use error::{Error, Result};
pub use scripts::{
    DeleteOutcome, DocumentStore, ExecutionHost, FileStore, LuaHost, MemoryStore, ScriptEntry,
    ScriptRepository, ScriptRunner,
};
pub use services::{ChatClient, Conversation, Exoplanet, ExoplanetService, Message};
pub use transform::{
    GeneratedMembers, RewrapField, RewrapOptions, TypeTag, assignment_lines,
    json_object_to_members, json_to_xml, normalize, property_schema, rewrap, row_to_json,
    rows_to_members, snippet, sql_columns, xml_to_json, xml_to_members,
};
