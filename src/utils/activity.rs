/// Activity records as handed to the card components
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One schedulable activity: what, when, where and who.
///
/// Text fields that are missing or `null` in JSON come through as empty
/// strings, and `participants` is coerced to an empty list at the same
/// boundary, so the views only ever deal with plain values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    /// ISO-8601 instant, kept as supplied and parsed at render time
    #[serde(default, deserialize_with = "nullable_string")]
    pub date: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub location: String,
    #[serde(default, deserialize_with = "nullable_participants")]
    pub participants: Vec<String>,
}

impl Activity {
    #[allow(dead_code)]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date: date.into(),
            location: location.into(),
            participants: Vec::new(),
        }
    }

    /// Attach participants; `None` means nobody has joined yet
    #[allow(dead_code)]
    pub fn with_participants(mut self, participants: Option<Vec<String>>) -> Self {
        self.participants = participants.unwrap_or_default();
        self
    }

    #[allow(dead_code)]
    pub fn has_participants(&self) -> bool {
        !self.participants.is_empty()
    }

    /// Parse a single activity object
    #[allow(dead_code)]
    pub fn from_json(json: &str) -> Result<Self, ActivityError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a JSON array of activities, keeping their order
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, ActivityError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_participants<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Errors raised while reading activity records
#[derive(Debug)]
pub enum ActivityError {
    /// Input was not valid activity JSON
    Parse(serde_json::Error),
}

impl fmt::Display for ActivityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "Invalid activity data: {}", err),
        }
    }
}

impl std::error::Error for ActivityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ActivityError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
