// Session State for the Docextract Client
//
// The browser original kept the session in two localStorage keys: a bearer
// token string and a serialized user record. This crate re-expresses that
// storage as an explicit accessor trait so the API client and the navigation
// guard can be exercised against an in-memory store in tests.

pub mod store;
pub mod user;

// Re-exports
pub use store::{FileStore, MemoryStore, SessionError, SessionStore};
pub use user::{current_user, SessionUser};
