use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Plain `{username, name, age, email}` record.
///
/// Used both as the input to [`User::new`](super::User::new) and as the
/// snapshot returned by [`User::profile`](super::User::profile). A snapshot is
/// an owned copy and is never linked back to the user it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub username: String,
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl Profile {
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        age: i32,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse user profile")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize user profile")
    }
}
