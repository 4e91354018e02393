//! # Navigator
//!
//! Client side of the contacts app: keeps the address bar, the search field and the sidebar
//! in agreement while the user types, clicks, submits and goes back/forward.
//!
//!
//!
//! ## Search Reconciliation
//!
//! 1. Every keystroke issues a read navigation to `/?q=<text>` right away, there is no delay
//! 2. The first search navigation of a session (last committed `q` absent) pushes a history
//!    entry, every later one replaces the current entry
//! 3. After any navigation commits, back/forward included, the search field is reset to the
//!    `q` the root loader echoed back
//! 4. A pending read with a non-empty `q` marks the search field as in progress
//! 5. A pending navigation to another view that is not a search marks the detail pane loading
//!
//!
//!
//! ## Revalidation
//!
//! Mounted loaders keep their output until their key changes (`q` for the root, the path for
//! the detail) or an invalidation arrives. Every successful submission invalidates all of
//! them before the redirect is followed, so the sidebar is never stale after a write.
//!
//!
//!
//! ## Concurrency
//!
//! Single-threaded and cooperative. Navigations are never cancelled, a newer one simply
//! makes the older one's completion a no-op.

pub mod error;
pub mod history;
pub mod location;
pub mod navigation;
pub mod navigator;
pub mod revalidate;
pub mod routes;
pub mod transport;

pub use error::NavigatorError;
pub use location::Location;
pub use navigation::{Navigation, Submission};
pub use navigator::{Navigator, Outcome};
pub use transport::{HttpTransport, LoaderData, Transport};
