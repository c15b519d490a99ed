// Docextract API Client
//
// HTTP client for the docextract backend. One configured reqwest client,
// operations grouped by resource (auth, tasks, files). Cross-cutting
// behavior is two explicit functions applied on every call: a request
// decorator that attaches the cached bearer token, and a response unwrapper
// that hands callers the deserialized body and nothing else.

pub mod auth;
pub mod config;
pub mod error;
pub mod files;
pub mod http;
pub mod models;
pub mod tasks;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use http::ApiClient;
pub use models::{ApiResponse, LoginData, Page, Task, TaskProgress, User};
