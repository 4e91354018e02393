//! # Loaders
//!
//! Read-only handlers computing what a view needs before it renders.
//!
//! The root loader echoes `q` back untouched. After a full reload the search box has no
//! state of its own, the echo is the only way to put the typed text back in it.
use roster::{Contact, ContactStore, payloads::RootData};
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;

#[derive(Deserialize, Debug, Default)]
pub struct SearchQuery {
    pub q: Option<String>,
}

pub async fn root_loader(store: &dyn ContactStore, q: Option<String>) -> RootData {
    let contacts = store.list(q.as_deref()).await;

    debug!("Root loader q={q:?} matched {} contacts", contacts.len());

    RootData { contacts, q }
}

pub async fn contact_loader(store: &dyn ContactStore, id: &str) -> Result<Contact, AppError> {
    store
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(id.to_string()))
}
