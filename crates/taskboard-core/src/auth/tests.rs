//! Auth Gateway Tests
//!
//! Exercise the gateway against an in-memory backend with scripted replies.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use serde_json::json;

    use crate::auth::{
        AuthBackend, AuthGateway, HttpReply, PasswordCredentials, ProviderSession, ProviderUser,
        SignInData, SignUpRequest, UserMetadata,
    };
    use crate::config::Labels;
    use crate::error::{AuthError, BackendError};
    use crate::models::{EntityId, Role};
    use crate::submission::SubmissionGuard;

    #[derive(Default)]
    struct MockBackend {
        sign_in_replies: RefCell<VecDeque<Result<SignInData, BackendError>>>,
        sign_up_replies: RefCell<VecDeque<Result<HttpReply, BackendError>>>,
        sign_in_calls: Cell<usize>,
        sign_up_calls: Cell<usize>,
        last_sign_up: RefCell<Option<SignUpRequest>>,
    }

    impl MockBackend {
        fn with_sign_in(self, reply: Result<SignInData, BackendError>) -> Self {
            self.sign_in_replies.borrow_mut().push_back(reply);
            self
        }

        fn with_sign_up(self, reply: Result<HttpReply, BackendError>) -> Self {
            self.sign_up_replies.borrow_mut().push_back(reply);
            self
        }
    }

    #[async_trait(?Send)]
    impl AuthBackend for MockBackend {
        async fn sign_in_with_password(
            &self,
            _credentials: &PasswordCredentials,
        ) -> Result<SignInData, BackendError> {
            self.sign_in_calls.set(self.sign_in_calls.get() + 1);
            self.sign_in_replies
                .borrow_mut()
                .pop_front()
                .expect("unexpected sign-in call")
        }

        async fn sign_up(&self, request: &SignUpRequest) -> Result<HttpReply, BackendError> {
            self.sign_up_calls.set(self.sign_up_calls.get() + 1);
            *self.last_sign_up.borrow_mut() = Some(request.clone());
            self.sign_up_replies
                .borrow_mut()
                .pop_front()
                .expect("unexpected sign-up call")
        }
    }

    fn signed_in(name: Option<&str>, role: Option<&str>) -> SignInData {
        SignInData {
            user: Some(ProviderUser {
                id: EntityId::new("user-1"),
                email: Some("ana@example.com".to_string()),
                user_metadata: UserMetadata {
                    name: name.map(str::to_string),
                    role: role.map(str::to_string),
                },
            }),
            session: Some(ProviderSession {
                access_token: "jwt-token".to_string(),
            }),
        }
    }

    fn provider_error(message: &str) -> BackendError {
        BackendError::Provider {
            message: message.to_string(),
        }
    }

    fn gateway(backend: MockBackend) -> AuthGateway<MockBackend> {
        AuthGateway::new(backend, Labels::default())
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let backend =
            MockBackend::default().with_sign_in(Ok(signed_in(Some("Ana"), Some("admin"))));
        let gw = gateway(backend);

        let session = gw.sign_in("ana@example.com", "12345678").await.expect("sign in");

        assert_eq!(session.user_id.as_str(), "user-1");
        assert_eq!(session.email, "ana@example.com");
        assert_eq!(session.name, "Ana");
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.access_token, "jwt-token");
    }

    #[tokio::test]
    async fn test_sign_in_defaults_missing_metadata() {
        let gw = gateway(MockBackend::default().with_sign_in(Ok(signed_in(None, None))));

        let session = gw.sign_in("ana@example.com", "12345678").await.unwrap();

        assert_eq!(session.name, "Usuario");
        assert_eq!(session.role, Role::User);
    }

    #[tokio::test]
    async fn test_sign_in_provider_error_verbatim() {
        let backend =
            MockBackend::default().with_sign_in(Err(provider_error("Invalid credentials")));
        let gw = gateway(backend);

        let err = gw.sign_in("ana@example.com", "wrong").await.unwrap_err();

        assert_eq!(err.user_message(), "Invalid credentials");
        assert!(matches!(err, AuthError::Provider { .. }));
    }

    #[tokio::test]
    async fn test_sign_in_without_session() {
        let mut data = signed_in(Some("Ana"), None);
        data.session = None;
        let gw = gateway(MockBackend::default().with_sign_in(Ok(data)));

        let err = gw.sign_in("ana@example.com", "12345678").await.unwrap_err();

        assert!(matches!(err, AuthError::MissingSession { .. }));
    }

    #[tokio::test]
    async fn test_sign_in_transport_error_is_generic() {
        let gw = gateway(MockBackend::default().with_sign_in(Err(BackendError::Transport {
            message: "connection reset".to_string(),
        })));

        let err = gw.sign_in("ana@example.com", "12345678").await.unwrap_err();

        assert_eq!(err.user_message(), "Error al iniciar sesión");
    }

    #[tokio::test]
    async fn test_register_short_password_no_network() {
        let gw = gateway(MockBackend::default());

        let err = gw.register("Ana", "ana@example.com", "short12").await.unwrap_err();

        assert!(matches!(err, AuthError::Validation { .. }));
        assert_eq!(err.user_message(), Labels::default().password_too_short);
        assert_eq!(gw.backend().sign_up_calls.get(), 0);
        assert_eq!(gw.backend().sign_in_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_register_then_sign_in_uses_submitted_name() {
        let backend = MockBackend::default()
            .with_sign_up(Ok(HttpReply { status: 200, body: json!({"user": {"id": "user-1"}}) }))
            .with_sign_in(Ok(signed_in(None, None)));
        let gw = gateway(backend);

        let session = gw.register("Lucía", "ana@example.com", "longenough").await.unwrap();

        assert_eq!(session.name, "Lucía");
        assert_eq!(gw.backend().sign_up_calls.get(), 1);
        assert_eq!(gw.backend().sign_in_calls.get(), 1);
        let sent = gw.backend().last_sign_up.borrow().clone().unwrap();
        assert_eq!(sent.name, "Lucía");
        assert_eq!(sent.password, "longenough");
    }

    #[tokio::test]
    async fn test_register_server_error_message() {
        let backend = MockBackend::default().with_sign_up(Ok(HttpReply {
            status: 400,
            body: json!({"error": "User already registered"}),
        }));
        let gw = gateway(backend);

        let err = gw.register("Ana", "ana@example.com", "longenough").await.unwrap_err();

        assert_eq!(err.user_message(), "User already registered");
        assert_eq!(gw.backend().sign_in_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_register_server_error_fallback() {
        let backend = MockBackend::default().with_sign_up(Ok(HttpReply {
            status: 500,
            body: json!({}),
        }));
        let gw = gateway(backend);

        let err = gw.register("Ana", "ana@example.com", "longenough").await.unwrap_err();

        assert_eq!(err.user_message(), "Error al registrarse");
    }

    #[tokio::test]
    async fn test_register_ok_status_with_error_field() {
        let backend = MockBackend::default().with_sign_up(Ok(HttpReply {
            status: 200,
            body: json!({"error": "Email rate limit exceeded"}),
        }));
        let gw = gateway(backend);

        let err = gw.register("Ana", "ana@example.com", "longenough").await.unwrap_err();

        assert_eq!(err.user_message(), "Email rate limit exceeded");
    }

    #[tokio::test]
    async fn test_register_sign_in_failure_asks_manual_login() {
        let backend = MockBackend::default()
            .with_sign_up(Ok(HttpReply { status: 201, body: json!({}) }))
            .with_sign_in(Err(provider_error("Email not confirmed")));
        let gw = gateway(backend);

        let err = gw.register("Ana", "ana@example.com", "longenough").await.unwrap_err();

        assert!(matches!(err, AuthError::RegisteredManualLogin { .. }));
        assert_eq!(err.user_message(), "Usuario registrado. Por favor inicia sesión manualmente.");
    }

    #[tokio::test]
    async fn test_register_without_session_asks_manual_login() {
        let mut data = signed_in(Some("Ana"), None);
        data.session = None;
        let backend = MockBackend::default()
            .with_sign_up(Ok(HttpReply { status: 200, body: json!({}) }))
            .with_sign_in(Ok(data));
        let gw = gateway(backend);

        let err = gw.register("Ana", "a@b.c", "longenough").await.unwrap_err();

        assert!(matches!(err, AuthError::RegisteredManualLogin { .. }));
        assert_eq!(err.user_message(), Labels::default().registered_manual_login);
        assert_eq!(gw.backend().sign_in_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_register_blank_name_uses_default_name() {
        let backend = MockBackend::default()
            .with_sign_up(Ok(HttpReply { status: 200, body: json!({}) }))
            .with_sign_in(Ok(signed_in(None, None)));
        let gw = gateway(backend);

        let session = gw.register("   ", "ana@example.com", "longenough").await.unwrap();

        assert_eq!(session.name, "Usuario");
    }

    #[tokio::test]
    async fn test_busy_guard_blocks_second_submission() {
        let gw = gateway(MockBackend::default().with_sign_in(Ok(signed_in(None, None))));
        let guard = SubmissionGuard::new();

        let held = guard.try_begin().unwrap();
        let err = gw.submit_sign_in(&guard, "ana@example.com", "12345678").await.unwrap_err();
        assert!(matches!(err, AuthError::Busy { .. }));
        assert_eq!(gw.backend().sign_in_calls.get(), 0);
        drop(held);

        gw.submit_sign_in(&guard, "ana@example.com", "12345678").await.unwrap();
        assert!(!guard.is_busy());
    }

    #[tokio::test]
    async fn test_busy_flag_cleared_after_failure() {
        let gw = gateway(MockBackend::default());
        let guard = SubmissionGuard::new();

        let err = gw.submit_register(&guard, "Ana", "ana@example.com", "short").await.unwrap_err();

        assert!(matches!(err, AuthError::Validation { .. }));
        assert!(!guard.is_busy());
    }
}
