//! Ordered collection of named, owned script snippets.
//!
//! The whole collection is the unit of persistence: every mutation rewrites
//! the backing document in full, so saves and deletes appear atomic to
//! callers. Mutations take `&mut self`; a single active user is assumed and
//! callers serialize access.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::scripts::store::DocumentStore;

/// Two-character comment marker every stored script name begins with. The
/// editor strips it for display and restores it on save.
pub const NAME_MARKER: &str = "//";

const DEFAULT_NAME: &str = "//Converter";
const DEFAULT_BODY: &str =
    "output = input.split('\\t').map(x => `${x} = source.${x}`).join(',\\n')";

/// A stored script snippet.
///
/// `id` is assigned as the collection length at save time, so ids are not
/// stable under deletion; `name` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub id: usize,
    pub owner: String,
    pub name: String,
    pub body: String,
}

impl ScriptEntry {
    /// Name without the leading comment marker, for display.
    pub fn title(&self) -> &str {
        self.name.strip_prefix(NAME_MARKER).unwrap_or(&self.name)
    }

    /// The text handed to the editor: name line followed by the body.
    pub fn editor_text(&self) -> String {
        format!("{}\n{}", self.name, self.body)
    }
}

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Entry removed and the provided secret matched the configured hash.
    Deleted,
    /// Entry removed even though the secret did not match. See the module
    /// notes in DESIGN.md; this mirrors the observed behavior and is a
    /// suspected defect.
    SecretMismatch,
    /// Caller did not confirm; nothing was mutated.
    Cancelled,
}

pub struct ScriptRepository {
    entries: Vec<ScriptEntry>,
    store: Box<dyn DocumentStore>,
    secret_hash: String,
}

impl ScriptRepository {
    /// Load the collection from the store. A blank document is seeded with
    /// the default converter script and persisted immediately.
    pub async fn load(
        store: Box<dyn DocumentStore>,
        secret_hash: impl Into<String>,
    ) -> Result<Self> {
        let raw = store.read().await?;
        let mut repository = ScriptRepository {
            entries: Vec::new(),
            store,
            secret_hash: secret_hash.into().to_lowercase(),
        };
        if raw.trim().is_empty() {
            repository.entries.push(ScriptEntry {
                id: 0,
                owner: "system".to_string(),
                name: DEFAULT_NAME.to_string(),
                body: DEFAULT_BODY.to_string(),
            });
            repository.persist().await?;
        } else {
            repository.entries = serde_json::from_str(&raw)
                .map_err(|e| Error::store(format!("script store is not a JSON entry array: {e}")))?;
        }
        Ok(repository)
    }

    /// Entries in insertion order.
    pub fn list(&self) -> &[ScriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ScriptEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Save editor text as a script. The first line names the script and
    /// must begin with `//`; the remainder is the body. A name collision
    /// replaces the prior entry in place (position and id kept); a new name
    /// appends with `id = current length`.
    pub async fn save(&mut self, source: &str, owner: &str) -> Result<ScriptEntry> {
        let (name, body) = split_source(source)?;

        let entry = if let Some(existing) = self.entries.iter_mut().find(|e| e.name == name) {
            existing.owner = owner.to_string();
            existing.body = body;
            existing.clone()
        } else {
            let entry = ScriptEntry {
                id: self.entries.len(),
                owner: owner.to_string(),
                name,
                body,
            };
            self.entries.push(entry.clone());
            entry
        };
        self.persist().await?;
        Ok(entry)
    }

    /// Delete a script by name.
    ///
    /// `confirmed` models the caller's confirmation prompt; when false the
    /// repository is untouched. Once confirmed, the entry is removed and
    /// persisted regardless of whether the secret matches the configured
    /// hash; the secret only decides the reported outcome.
    pub async fn delete(
        &mut self,
        name: &str,
        provided_secret: &str,
        confirmed: bool,
    ) -> Result<DeleteOutcome> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.name == name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        if !confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }
        let authorized = hash_secret(provided_secret) == self.secret_hash;
        self.entries.remove(index);
        self.persist().await?;
        Ok(if authorized {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::SecretMismatch
        })
    }

    /// The entry after `current` in insertion order, wrapping past the end.
    pub fn next(&self, current: &str) -> Result<&ScriptEntry> {
        self.navigate(current, 1)
    }

    /// The entry before `current`, wrapping before the start.
    pub fn previous(&self, current: &str) -> Result<&ScriptEntry> {
        self.navigate(current, -1)
    }

    fn navigate(&self, current: &str, step: isize) -> Result<&ScriptEntry> {
        if self.entries.is_empty() {
            return Err(Error::EmptyRepository);
        }
        if current.is_empty() {
            return Ok(&self.entries[0]);
        }
        let index = self
            .entries
            .iter()
            .position(|entry| entry.name == current)
            .ok_or_else(|| Error::NotFound(current.to_string()))?;
        let len = self.entries.len() as isize;
        let target = (index as isize + step).rem_euclid(len) as usize;
        Ok(&self.entries[target])
    }

    async fn persist(&self) -> Result<()> {
        let document = serde_json::to_string(&self.entries)
            .map_err(|e| Error::store(format!("failed to serialize script list: {e}")))?;
        self.store.write(&document).await
    }
}

/// First line = name (must carry the marker), remainder = body.
fn split_source(source: &str) -> Result<(String, String)> {
    let mut parts = source.splitn(2, '\n');
    let first = parts.next().unwrap_or("").trim_end_matches('\r');
    let body = parts.next().unwrap_or("").to_string();
    if !first.starts_with(NAME_MARKER) || first.len() == NAME_MARKER.len() {
        return Err(Error::validation(
            "The first line must name the script, e.g. //Converter.",
        ));
    }
    if body.trim().is_empty() {
        return Err(Error::validation("Script body is empty."));
    }
    Ok((first.to_string(), body))
}

fn hash_secret(secret: &str) -> String {
    hex::encode(Sha256::digest(secret.as_bytes()))
}
