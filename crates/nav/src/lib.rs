// Navigation layer for the Docextract Client
//
// A static route table and the pre-navigation authentication guard. The
// guard is evaluated once per navigation attempt, synchronously, against
// the locally cached session only; it never calls the backend.

pub mod guard;
pub mod routes;

// Re-exports
pub use guard::{check, NavDecision};
pub use routes::{find_route, routes, Route, HOME_PATH, LOGIN_PATH};
