//! User-authored transform scripts: storage, navigation, and execution.

pub mod host;
pub mod repository;
pub mod runner;
pub mod store;

pub use host::{ExecutionHost, LuaHost};
pub use repository::{DeleteOutcome, ScriptEntry, ScriptRepository};
pub use runner::ScriptRunner;
pub use store::{DocumentStore, FileStore, MemoryStore};
