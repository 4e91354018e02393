//! # Payloads
//!
//! Loader output shared by the server's data routes and the navigator.
//!
//! ## Data Routes
//! - `GET /_data/root?q=...`: [`RootData`], `q` is `null` when the request carried no `q`
//! - `GET /_data/contacts/{id}`: a single [`Contact`], 404 when missing
//!
//! ## Actions
//! Every mutating route answers `303 See Other`. The `Location` header is the only payload.
use serde::{Deserialize, Serialize};

use crate::contact::Contact;

pub const SEARCH_PARAM: &str = "q";
pub const ROOT_DATA_PATH: &str = "/_data/root";
pub const CONTACT_DATA_PREFIX: &str = "/_data/contacts";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootData {
    pub contacts: Vec<Contact>,
    /// Echo of the request's `q`. Absent and empty are different values.
    pub q: Option<String>,
}

pub fn contact_path(id: &str) -> String {
    format!("/contacts/{id}")
}

pub fn edit_path(id: &str) -> String {
    format!("/contacts/{id}/edit")
}

pub fn destroy_path(id: &str) -> String {
    format!("/contacts/{id}/destroy")
}

pub fn contact_data_path(id: &str) -> String {
    format!("{CONTACT_DATA_PREFIX}/{id}")
}
