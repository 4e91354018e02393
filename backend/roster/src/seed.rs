//! # Seed Data
//!
//! Contacts loaded into a fresh store when seeding is enabled. The list ships inside the
//! binary, so there is nothing to fetch at startup.
use chrono::{Duration, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::contact::Contact;

const SEED: &str = include_str!("../seed.json");

#[derive(Deserialize)]
struct SeedContact {
    first: String,
    last: String,
    #[serde(default)]
    twitter: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

pub fn seed_contacts() -> Result<Vec<Contact>, serde_json::Error> {
    let seeds: Vec<SeedContact> = serde_json::from_str(SEED)?;
    let now = Utc::now();

    Ok(seeds
        .into_iter()
        .enumerate()
        .map(|(index, seed)| {
            let mut contact = Contact::new(
                Uuid::new_v4().to_string(),
                now + Duration::milliseconds(index as i64),
            );
            contact.first = Some(seed.first);
            contact.last = Some(seed.last);
            contact.twitter = seed.twitter;
            contact.notes = seed.notes;
            contact
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parses() {
        let contacts = seed_contacts().unwrap();

        assert!(contacts.iter().all(|contact| contact.display_name().is_some()));
        assert!(contacts.iter().all(|contact| !contact.favorite));
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let contacts = seed_contacts().unwrap();
        let mut ids: Vec<&str> = contacts.iter().map(|contact| contact.id.as_str()).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), contacts.len());
    }
}
