//! Backend Command Wrappers
//!
//! Frontend bindings to the identity provider and server function,
//! organized by domain. Errors come back as display-ready strings.

mod auth;
mod data;

// Re-export all public items
pub use auth::*;
pub use data::*;
