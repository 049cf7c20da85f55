//! Taskboard Core
//!
//! Platform-independent logic behind the taskboard front end:
//! - models: Task, User and identifier normalization
//! - stats: dashboard aggregation
//! - navigation: role-gated sidebar destinations
//! - auth: sign-in/registration gateway producing a Session
//! - backend: HTTP implementation of the auth backend
//! - config: endpoints and user-facing labels

pub mod auth;
pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod stats;
pub mod submission;

pub use auth::{AuthBackend, AuthGateway, Session};
pub use backend::SupabaseBackend;
pub use config::{AppConfig, BackendConfig, Labels};
pub use error::{AuthError, BackendError, ConfigError};
pub use models::{EntityId, Role, Task, TaskStatus, User};
pub use navigation::{Destination, NavItem};
pub use stats::{aggregate, DashboardStats, DerivedUserStat, StatusCounts};
pub use submission::{SubmissionGuard, SubmissionToken};
