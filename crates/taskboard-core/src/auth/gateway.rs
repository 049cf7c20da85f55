//! Auth Gateway
//!
//! Turns form submissions into backend calls and backend results into a
//! `Session` or a user-facing `AuthError`. One attempt per submission.

use tracing::{debug, error, warn};

use super::{AuthBackend, PasswordCredentials, Session, SignUpRequest};
use crate::config::{Labels, MIN_PASSWORD_LEN};
use crate::error::{AuthError, BackendError};
use crate::submission::SubmissionGuard;

pub struct AuthGateway<B> {
    backend: B,
    labels: Labels,
}

impl<B: AuthBackend> AuthGateway<B> {
    pub fn new(backend: B, labels: Labels) -> Self {
        Self { backend, labels }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Password sign-in
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.sign_in_inner(email, password, &self.labels.default_name)
            .await
            .map_err(|e| self.map_backend_error(e, &self.labels.login_failed))?
            .ok_or_else(|| self.missing_session())
    }

    /// Create the account through the custodial endpoint, then sign in
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::Validation {
                message: self.labels.password_too_short.clone(),
            });
        }

        let request = SignUpRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        debug!(email, "registering account");

        let reply = self
            .backend
            .sign_up(&request)
            .await
            .map_err(|e| self.map_backend_error(e, &self.labels.register_failed))?;

        if !reply.is_success() || reply.error_message().is_some() {
            let message = reply
                .error_message()
                .unwrap_or(self.labels.register_failed.as_str())
                .to_string();
            warn!(status = reply.status, %message, "sign-up refused");
            return Err(AuthError::Provider { message });
        }

        let fallback_name = if name.trim().is_empty() {
            self.labels.default_name.as_str()
        } else {
            name
        };

        // The account exists from here on; any sign-in failure asks for a manual login.
        match self.sign_in_inner(email, password, fallback_name).await {
            Ok(Some(session)) => Ok(session),
            Ok(None) => {
                warn!(email, "no session after registration");
                Err(self.manual_login())
            }
            Err(e) => {
                warn!(error = %e, "sign-in after registration failed");
                Err(self.manual_login())
            }
        }
    }

    /// `sign_in` unless another submission from the same form is still running
    pub async fn submit_sign_in(
        &self,
        guard: &SubmissionGuard,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let _token = guard.try_begin().ok_or_else(|| self.busy())?;
        self.sign_in(email, password).await
    }

    /// `register` unless another submission from the same form is still running
    pub async fn submit_register(
        &self,
        guard: &SubmissionGuard,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let _token = guard.try_begin().ok_or_else(|| self.busy())?;
        self.register(name, email, password).await
    }

    async fn sign_in_inner(
        &self,
        email: &str,
        password: &str,
        fallback_name: &str,
    ) -> Result<Option<Session>, BackendError> {
        let credentials = PasswordCredentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        debug!(email, "signing in");

        let data = self.backend.sign_in_with_password(&credentials).await?;
        let session = Session::from_sign_in(data, fallback_name, &self.labels.default_role);
        if session.is_none() {
            warn!(email, "sign-in succeeded without a usable session");
        }
        Ok(session)
    }

    fn map_backend_error(&self, e: BackendError, generic: &str) -> AuthError {
        match e {
            BackendError::Provider { message } => {
                warn!(%message, "provider refused request");
                AuthError::Provider { message }
            }
            BackendError::Transport { message } => {
                error!(cause = %message, "auth request failed");
                AuthError::Transport { message: generic.to_string() }
            }
        }
    }

    fn missing_session(&self) -> AuthError {
        AuthError::MissingSession {
            message: self.labels.missing_session.clone(),
        }
    }

    fn manual_login(&self) -> AuthError {
        AuthError::RegisteredManualLogin {
            message: self.labels.registered_manual_login.clone(),
        }
    }

    fn busy(&self) -> AuthError {
        AuthError::Busy {
            message: self.labels.busy.clone(),
        }
    }
}
