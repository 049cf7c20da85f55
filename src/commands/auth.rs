//! Auth Command Wrappers

use taskboard_core::{AuthError, Session, SubmissionGuard};

use crate::context::Gateway;

/// Why a submission produced no session
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// Another submission from this form is still running; leave the UI as is
    InFlight,
    /// Message for the error banner
    Message(String),
}

impl From<AuthError> for SubmitError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Busy { .. } => SubmitError::InFlight,
            other => SubmitError::Message(other.user_message().to_string()),
        }
    }
}

pub async fn sign_in(
    gateway: &Gateway,
    guard: &SubmissionGuard,
    email: &str,
    password: &str,
) -> Result<Session, SubmitError> {
    Ok(gateway.submit_sign_in(guard, email, password).await?)
}

pub async fn register(
    gateway: &Gateway,
    guard: &SubmissionGuard,
    name: &str,
    email: &str,
    password: &str,
) -> Result<Session, SubmitError> {
    Ok(gateway.submit_register(guard, name, email, password).await?)
}
