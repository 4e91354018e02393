use std::{cmp::Ordering, collections::HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const FIELD_FIRST: &str = "first";
pub const FIELD_LAST: &str = "last";
pub const FIELD_TWITTER: &str = "twitter";
pub const FIELD_AVATAR: &str = "avatar";
pub const FIELD_NOTES: &str = "notes";
pub const FIELD_FAVORITE: &str = "favorite";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub fn new(id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            first: None,
            last: None,
            twitter: None,
            avatar: None,
            notes: None,
            favorite: false,
            created_at,
        }
    }

    /// `"first last"`, or whichever half is set. `None` when the contact has no name at all.
    pub fn display_name(&self) -> Option<String> {
        let name = [self.first.as_deref(), self.last.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        (!name.is_empty()).then_some(name)
    }

    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        [self.first.as_deref(), self.last.as_deref()]
            .into_iter()
            .flatten()
            .any(|name| name.to_lowercase().contains(needle))
    }

    pub fn apply(&mut self, fields: &HashMap<String, String>) {
        for (key, value) in fields {
            match key.as_str() {
                FIELD_FIRST => self.first = optional(value),
                FIELD_LAST => self.last = optional(value),
                FIELD_TWITTER => self.twitter = optional(value),
                FIELD_AVATAR => self.avatar = optional(value),
                FIELD_NOTES => self.notes = optional(value),
                FIELD_FAVORITE => self.favorite = value == "true",
                _ => debug!("Ignoring unknown contact field {key}"),
            }
        }
    }

    pub fn listing_order(&self, other: &Self) -> Ordering {
        sort_name(self)
            .cmp(&sort_name(other))
            .then_with(|| self.created_at.cmp(&other.created_at))
            .then_with(|| self.id.cmp(&other.id))
    }
}

fn sort_name(contact: &Contact) -> String {
    contact.last.as_deref().unwrap_or_default().to_lowercase()
}

// blank form fields unset the value instead of storing an empty string
fn optional(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
