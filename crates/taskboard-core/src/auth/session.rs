//! Normalized Session

use serde::{Deserialize, Serialize};

use super::SignInData;
use crate::models::{EntityId, Role};

/// Locally held proof of authentication. Every field is set after defaulting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: EntityId,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub access_token: String,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl Session {
    /// Build from a sign-in payload.
    ///
    /// Returns None unless both an access token and a user id are present.
    /// `fallback_name` and `fallback_role` replace missing metadata.
    pub fn from_sign_in(
        data: SignInData,
        fallback_name: &str,
        fallback_role: &str,
    ) -> Option<Self> {
        let token = data.session?.access_token;
        let user = data.user?;
        if token.is_empty() || user.id.is_empty() {
            return None;
        }

        let name = non_blank(user.user_metadata.name.as_deref()).unwrap_or(fallback_name);
        let role = non_blank(user.user_metadata.role.as_deref()).unwrap_or(fallback_role);

        Some(Self {
            name: name.to_string(),
            role: Role::from_str(role),
            email: user.email.unwrap_or_default(),
            user_id: user.id,
            access_token: token,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Value for an `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{ProviderSession, ProviderUser, UserMetadata};

    fn data(name: Option<&str>, role: Option<&str>, token: &str) -> SignInData {
        SignInData {
            user: Some(ProviderUser {
                id: EntityId::new("u-1"),
                email: Some("a@b.c".to_string()),
                user_metadata: UserMetadata {
                    name: name.map(str::to_string),
                    role: role.map(str::to_string),
                },
            }),
            session: Some(ProviderSession { access_token: token.to_string() }),
        }
    }

    #[test]
    fn test_metadata_used_when_present() {
        let data = data(Some("Facu"), Some("admin"), "tok");
        let s = Session::from_sign_in(data, "Usuario", "user").unwrap();
        assert_eq!(s.name, "Facu");
        assert!(s.is_admin());
        assert_eq!(s.bearer(), "Bearer tok");
    }

    #[test]
    fn test_defaults_when_metadata_missing() {
        let s = Session::from_sign_in(data(None, Some(""), "tok"), "Usuario", "user").unwrap();
        assert_eq!(s.name, "Usuario");
        assert_eq!(s.role, Role::User);
    }

    #[test]
    fn test_requires_token_and_user() {
        assert!(Session::from_sign_in(data(None, None, ""), "Usuario", "user").is_none());
        let mut no_user = data(None, None, "tok");
        no_user.user = None;
        assert!(Session::from_sign_in(no_user, "Usuario", "user").is_none());
        let mut no_session = data(None, None, "tok");
        no_session.session = None;
        assert!(Session::from_sign_in(no_session, "Usuario", "user").is_none());
    }
}
