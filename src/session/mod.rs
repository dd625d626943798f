//! Local session marker storage.
//!
//! The marker is opaque evidence that a login occurred; presence alone is
//! trusted (no TTL, no signature). It lives in one of two client-side
//! stores: a durable file-backed store that survives restarts, or a
//! tab-scoped in-memory store. The [`SessionVault`] checks the durable
//! store first.

mod marker;
mod store;

pub use marker::SessionMarker;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, SessionVault};
