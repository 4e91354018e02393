use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{contact::Contact, seed::seed_contacts};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No contact found for {0}")]
    NotFound(String),
}

#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn list(&self, query: Option<&str>) -> Vec<Contact>;

    async fn get(&self, id: &str) -> Option<Contact>;

    async fn create(&self) -> Contact;

    async fn update(&self, id: &str, fields: &HashMap<String, String>) -> Result<(), StoreError>;

    async fn destroy(&self, id: &str) -> Result<(), StoreError>;
}

/// Single-process store. Every write holds the lock for the whole mutation, so a form
/// submission lands all at once or not at all.
#[derive(Default)]
pub struct MemoryStore {
    contacts: RwLock<HashMap<String, Contact>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        let contacts = contacts
            .into_iter()
            .map(|contact| (contact.id.clone(), contact))
            .collect();

        Self {
            contacts: RwLock::new(contacts),
        }
    }

    pub fn seeded() -> Result<Self, serde_json::Error> {
        Ok(Self::with_contacts(seed_contacts()?))
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn list(&self, query: Option<&str>) -> Vec<Contact> {
        let needle = query
            .map(str::to_lowercase)
            .filter(|needle| !needle.is_empty());

        let mut contacts: Vec<Contact> = self
            .contacts
            .read()
            .await
            .values()
            .filter(|contact| needle.as_deref().is_none_or(|needle| contact.matches(needle)))
            .cloned()
            .collect();

        contacts.sort_by(Contact::listing_order);
        contacts
    }

    async fn get(&self, id: &str) -> Option<Contact> {
        self.contacts.read().await.get(id).cloned()
    }

    async fn create(&self) -> Contact {
        let mut contacts = self.contacts.write().await;

        let mut id = Uuid::new_v4().to_string();
        while contacts.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }

        let contact = Contact::new(id.clone(), Utc::now());
        contacts.insert(id, contact.clone());

        contact
    }

    async fn update(&self, id: &str, fields: &HashMap<String, String>) -> Result<(), StoreError> {
        self.contacts
            .write()
            .await
            .get_mut(id)
            .map(|contact| contact.apply(fields))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn destroy(&self, id: &str) -> Result<(), StoreError> {
        self.contacts
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::contact::{FIELD_FIRST, FIELD_LAST, FIELD_TWITTER};

    fn person(id: &str, first: &str, last: &str, minutes: i64) -> Contact {
        let mut contact = Contact::new(id.to_string(), Utc::now() + Duration::minutes(minutes));
        contact.first = Some(first.to_string());
        contact.last = Some(last.to_string());
        contact
    }

    fn shelby_and_jim() -> MemoryStore {
        MemoryStore::with_contacts([
            person("shelby", "Shelby", "Flores", 0),
            person("jim", "Jim", "Beam", 1),
        ])
    }

    fn ids(contacts: &[Contact]) -> Vec<&str> {
        contacts.iter().map(|contact| contact.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_filters_by_first_or_last_name() {
        let store = shelby_and_jim();

        assert_eq!(ids(&store.list(Some("sh")).await), vec!["shelby"]);
        assert_eq!(ids(&store.list(Some("BEA")).await), vec!["jim"]);
        assert_eq!(ids(&store.list(Some("e")).await), vec!["jim", "shelby"]);
        assert!(store.list(Some("zzz")).await.is_empty());
    }

    #[tokio::test]
    async fn test_list_without_filter_is_sorted_by_last_name() {
        let store = shelby_and_jim();

        assert_eq!(ids(&store.list(None).await), vec!["jim", "shelby"]);
        assert_eq!(ids(&store.list(Some("")).await), vec!["jim", "shelby"]);
    }

    #[tokio::test]
    async fn test_list_breaks_ties_by_creation() {
        let store = MemoryStore::with_contacts([
            person("later", "Bo", "Same", 5),
            person("earlier", "Al", "same", 1),
        ]);

        assert_eq!(ids(&store.list(None).await), vec!["earlier", "later"]);
    }

    #[tokio::test]
    async fn test_create_then_get_is_empty() {
        let store = MemoryStore::new();

        let created = store.create().await;
        let fetched = store.get(&created.id).await.expect("created contact exists");

        assert_eq!(fetched, created);
        assert_eq!(fetched.first, None);
        assert_eq!(fetched.last, None);
        assert_eq!(fetched.twitter, None);
        assert_eq!(fetched.avatar, None);
        assert_eq!(fetched.notes, None);
        assert!(!fetched.favorite);
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let store = MemoryStore::new();

        let first = store.create().await;
        let second = store.create().await;

        assert_ne!(first.id, second.id);
        assert_eq!(store.list(None).await.len(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_unsubmitted_fields() {
        let store = MemoryStore::new();
        let id = store.create().await.id;

        store
            .update(
                &id,
                &HashMap::from([
                    (FIELD_FIRST.to_string(), "Grace".to_string()),
                    (FIELD_LAST.to_string(), "Hopper".to_string()),
                    (FIELD_TWITTER.to_string(), "@grace".to_string()),
                ]),
            )
            .await
            .unwrap();

        store
            .update(&id, &HashMap::from([(FIELD_FIRST.to_string(), "Ada".to_string())]))
            .await
            .unwrap();

        let contact = store.get(&id).await.unwrap();
        assert_eq!(contact.first.as_deref(), Some("Ada"));
        assert_eq!(contact.last.as_deref(), Some("Hopper"));
        assert_eq!(contact.twitter.as_deref(), Some("@grace"));
    }

    #[tokio::test]
    async fn test_unknown_ids_fail() {
        let store = MemoryStore::new();

        assert_eq!(store.get("missing").await, None);
        assert_eq!(
            store.update("missing", &HashMap::new()).await,
            Err(StoreError::NotFound("missing".to_string()))
        );
        assert_eq!(
            store.destroy("missing").await,
            Err(StoreError::NotFound("missing".to_string()))
        );
    }

    #[tokio::test]
    async fn test_destroy_removes() {
        let store = shelby_and_jim();

        store.destroy("jim").await.unwrap();

        assert_eq!(store.get("jim").await, None);
        assert_eq!(ids(&store.list(None).await), vec!["shelby"]);
    }

    #[tokio::test]
    async fn test_seeded_store_is_searchable() {
        let store = MemoryStore::seeded().unwrap();

        assert!(!store.list(None).await.is_empty());
        assert_eq!(store.list(Some("shelby")).await.len(), 1);
    }
}
