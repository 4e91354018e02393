//! # Actions
//!
//! Write handlers. Each performs exactly one mutation and answers with the location the client
//! navigates to next, never with a rendered view. The follow-up navigation is a plain read, so
//! every loader on the page runs again and nothing rendered before the write survives it.
use std::collections::HashMap;

use roster::{
    ContactStore,
    contact::FIELD_FAVORITE,
    payloads::{contact_path, edit_path},
};
use tracing::info;

use crate::{error::AppError, utils::require_param};

pub async fn create_action(store: &dyn ContactStore) -> String {
    let contact = store.create().await;

    info!("Created contact {}", contact.id);

    edit_path(&contact.id)
}

pub async fn update_action(
    store: &dyn ContactStore,
    id: &str,
    fields: &HashMap<String, String>,
) -> Result<String, AppError> {
    let id = require_param("id", id)?;

    store.update(id, fields).await?;

    info!("Updated contact {id} ({} fields)", fields.len());

    Ok(contact_path(id))
}

pub async fn favorite_action(
    store: &dyn ContactStore,
    id: &str,
    fields: &HashMap<String, String>,
) -> Result<String, AppError> {
    let id = require_param("id", id)?;

    let favorite = match fields.get(FIELD_FAVORITE).map(String::as_str) {
        Some(value @ ("true" | "false")) => value,
        _ => return Err(AppError::MalformedPayload),
    };

    let update = HashMap::from([(FIELD_FAVORITE.to_string(), favorite.to_string())]);
    store.update(id, &update).await?;

    info!("Contact {id} favorite={favorite}");

    Ok(contact_path(id))
}

pub async fn destroy_action(store: &dyn ContactStore, id: &str) -> Result<String, AppError> {
    let id = require_param("id", id)?;

    store.destroy(id).await?;

    info!("Destroyed contact {id}");

    Ok("/".to_string())
}
