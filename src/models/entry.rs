use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use tracing::info;

use crate::error::{ProverbdexError, Result};

/// A four-field text record
///
/// `primary_text` doubles as the natural key. Entries are immutable once
/// built; a collection shares each inserted entry between its ordered store
/// and both word indices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    primary_text: String,
    secondary_text: String,
    primary_explanation: String,
    secondary_explanation: String,
}

impl Entry {
    pub fn new(
        primary_text: impl Into<String>,
        secondary_text: impl Into<String>,
        primary_explanation: impl Into<String>,
        secondary_explanation: impl Into<String>,
    ) -> Self {
        Self {
            primary_text: primary_text.into(),
            secondary_text: secondary_text.into(),
            primary_explanation: primary_explanation.into(),
            secondary_explanation: secondary_explanation.into(),
        }
    }

    /// The ordering key
    pub fn primary_text(&self) -> &str {
        &self.primary_text
    }

    pub fn secondary_text(&self) -> &str {
        &self.secondary_text
    }

    pub fn primary_explanation(&self) -> &str {
        &self.primary_explanation
    }

    pub fn secondary_explanation(&self) -> &str {
        &self.secondary_explanation
    }
}

/// One of the two word-indexed text fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Primary,
    Secondary,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Primary, Field::Secondary];

    /// The text this field selects from an entry
    pub fn text(self, entry: &Entry) -> &str {
        match self {
            Field::Primary => entry.primary_text(),
            Field::Secondary => entry.secondary_text(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Primary => f.write_str("primary"),
            Field::Secondary => f.write_str("secondary"),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Primary text: {}", self.primary_text)?;
        writeln!(f, "Secondary text: {}", self.secondary_text)?;
        writeln!(f, "Primary explanation: {}", self.primary_explanation)?;
        writeln!(f, "Secondary explanation: {}", self.secondary_explanation)
    }
}

/// Parse a JSON dataset: an array of objects carrying all four fields
pub fn parse_entries(json: &str) -> Result<Vec<Entry>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(ProverbdexError::InvalidDataset(
            "top-level value must be an array of entries".to_string(),
        ));
    }
    let entries: Vec<Entry> = serde_json::from_value(value)?;
    Ok(entries)
}

/// Read and parse a JSON dataset file
pub fn load_entries(path: impl AsRef<Path>) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let entries = parse_entries(&json)?;
    info!(path = %path.display(), count = entries.len(), "Loaded dataset");
    Ok(entries)
}
