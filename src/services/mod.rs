//! Network collaborators: chat completion and the exoplanet feed.
//!
//! Both are plain request/response round trips with no retry or backoff;
//! failures are reported (chat) or logged and swallowed (exoplanets).

pub mod chat;
pub mod exoplanets;

pub use chat::{ChatClient, Conversation, MISSING_KEY_MESSAGE, Message};
pub use exoplanets::{Exoplanet, ExoplanetService};
