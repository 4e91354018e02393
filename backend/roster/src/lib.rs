//! # Roster
//!
//! Contact records and the store that owns them.
//!
//! ## Store Contract
//!
//! - `list`: every contact, optionally filtered by a case-insensitive substring over first/last name
//! - `get`: one contact or nothing
//! - `create`: a fresh contact with every optional field unset, favorite off
//! - `update`: partial field update, keys not submitted are left untouched
//! - `destroy`: remove a contact
//!
//! `update` and `destroy` fail with [`StoreError::NotFound`] on an unknown id.
//!
//! The store is handed to loaders and actions as an `Arc<dyn ContactStore>`, there is no
//! module-level singleton.
//!
//! ## Ordering
//!
//! Listing is sorted by last name (case-insensitive, missing last names first), then by
//! creation time, then by id. The order is stable between calls as long as nothing is written.

pub mod contact;
pub mod payloads;
pub mod seed;
pub mod store;

pub use contact::Contact;
pub use store::{ContactStore, MemoryStore, StoreError};
