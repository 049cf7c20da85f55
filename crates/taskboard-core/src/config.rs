//! Application Configuration
//!
//! Backend endpoints plus every user-facing label, so a locale change is a
//! single edit (or a single JSON override).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::TaskStatus;

/// Default name of the custodial server function
pub const DEFAULT_FUNCTION_NAME: &str = "make-server-154d65af";

/// Minimum password length accepted by registration
pub const MIN_PASSWORD_LEN: usize = 8;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub labels: Labels,
}

impl AppConfig {
    /// Parse a JSON document; missing labels fall back to their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.backend.validate()?;
        Ok(config)
    }
}

/// Identity provider and server function location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// e.g. `https://<project>.supabase.co`
    pub project_url: String,
    /// App-level anonymous key (identifies the application, not the user)
    pub anon_key: String,
    #[serde(default = "default_function_name")]
    pub function_name: String,
}

fn default_function_name() -> String {
    DEFAULT_FUNCTION_NAME.to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            project_url: String::new(),
            anon_key: String::new(),
            function_name: default_function_name(),
        }
    }
}

impl BackendConfig {
    pub fn new(project_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            project_url: project_url.into(),
            anon_key: anon_key.into(),
            function_name: default_function_name(),
        }
    }

    /// Build from a bare project id, as handed out by the provider dashboard
    pub fn for_project(project_id: &str, anon_key: impl Into<String>) -> Self {
        Self::new(format!("https://{}.supabase.co", project_id), anon_key)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_url.trim().is_empty() {
            return Err(ConfigError::MissingProjectUrl);
        }
        if !self.project_url.starts_with("http://") && !self.project_url.starts_with("https://") {
            return Err(ConfigError::InvalidProjectUrl(self.project_url.clone()));
        }
        Ok(())
    }

    fn base(&self) -> &str {
        self.project_url.trim_end_matches('/')
    }

    fn function_url(&self, route: &str) -> String {
        format!("{}/functions/v1/{}/{}", self.base(), self.function_name, route)
    }

    pub fn sign_in_url(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.base())
    }

    pub fn sign_up_url(&self) -> String {
        self.function_url("signup")
    }

    pub fn tasks_url(&self) -> String {
        self.function_url("tasks")
    }

    pub fn users_url(&self) -> String {
        self.function_url("users")
    }
}

/// User-facing strings and placeholder values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Name used when a user has none
    pub default_name: String,
    /// Role string used when a user has none
    pub default_role: String,
    pub login_failed: String,
    pub register_failed: String,
    pub password_too_short: String,
    pub registered_manual_login: String,
    pub missing_session: String,
    pub busy: String,

    pub nav_dashboard: String,
    pub nav_tasks_admin: String,
    pub nav_tasks_user: String,
    pub nav_users: String,
    pub nav_create_task: String,
    pub nav_profile: String,
    pub nav_logout: String,

    pub role_admin: String,
    pub role_user: String,

    // Auth screen
    pub app_title: String,
    pub app_subtitle: String,
    pub tab_login: String,
    pub tab_register: String,
    pub field_name: String,
    pub field_email: String,
    pub field_password: String,
    pub name_placeholder: String,
    pub password_hint: String,
    pub signing_in: String,
    pub registering: String,

    // Dashboard
    pub refresh: String,
    pub stat_total: String,
    pub stat_pending: String,
    pub stat_in_progress: String,
    pub stat_completed: String,
    pub overall_progress: String,
    /// Follows the percentage, as in "67% completado"
    pub completed_suffix: String,
    pub chart_title: String,
    pub chart_empty: String,

    // Lists and profile
    pub tasks_empty: String,
    pub users_empty: String,
    pub status_pending: String,
    pub status_in_progress: String,
    pub status_completed: String,
    /// Shown for tasks without any status
    pub status_none: String,
    pub profile_name: String,
    pub profile_role: String,
}

impl Labels {
    /// Display text for a task status. Unknown statuses show their raw value.
    pub fn status_label(&self, status: Option<&TaskStatus>) -> String {
        match status {
            None => self.status_none.clone(),
            Some(TaskStatus::Pending) => self.status_pending.clone(),
            Some(TaskStatus::InProgress) => self.status_in_progress.clone(),
            Some(TaskStatus::Completed) => self.status_completed.clone(),
            Some(TaskStatus::Other(raw)) => raw.clone(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            default_name: "Usuario".to_string(),
            default_role: "user".to_string(),
            login_failed: "Error al iniciar sesión".to_string(),
            register_failed: "Error al registrarse".to_string(),
            password_too_short: "La contraseña debe tener al menos 8 caracteres".to_string(),
            registered_manual_login: "Usuario registrado. Por favor inicia sesión manualmente."
                .to_string(),
            missing_session: "No se pudo establecer la sesión".to_string(),
            busy: "Solicitud en curso, espera un momento".to_string(),

            nav_dashboard: "Dashboard".to_string(),
            nav_tasks_admin: "Gestionar Tareas".to_string(),
            nav_tasks_user: "Mis Tareas".to_string(),
            nav_users: "Usuarios".to_string(),
            nav_create_task: "Nueva Tarea".to_string(),
            nav_profile: "Configuración".to_string(),
            nav_logout: "Cerrar Sesión".to_string(),

            role_admin: "Administrador".to_string(),
            role_user: "Usuario".to_string(),

            app_title: "Gestión de Tareas".to_string(),
            app_subtitle: "Accede a tu panel de control".to_string(),
            tab_login: "Iniciar Sesión".to_string(),
            tab_register: "Registrarse".to_string(),
            field_name: "Nombre completo".to_string(),
            field_email: "Correo electrónico".to_string(),
            field_password: "Contraseña".to_string(),
            name_placeholder: "Tu nombre".to_string(),
            password_hint: "Mínimo 8 caracteres".to_string(),
            signing_in: "Iniciando sesión...".to_string(),
            registering: "Registrando...".to_string(),

            refresh: "Actualizar".to_string(),
            stat_total: "Total".to_string(),
            stat_pending: "Pendientes".to_string(),
            stat_in_progress: "En progreso".to_string(),
            stat_completed: "Completadas".to_string(),
            overall_progress: "Progreso general".to_string(),
            completed_suffix: "completado".to_string(),
            chart_title: "Tareas completadas por usuario".to_string(),
            chart_empty: "Sin usuarios".to_string(),

            tasks_empty: "No hay tareas".to_string(),
            users_empty: "No hay usuarios".to_string(),
            status_pending: "Pendiente".to_string(),
            status_in_progress: "En progreso".to_string(),
            status_completed: "Completada".to_string(),
            status_none: "—".to_string(),
            profile_name: "Nombre".to_string(),
            profile_role: "Rol".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let cfg = BackendConfig::for_project("abc", "key");
        assert_eq!(cfg.sign_in_url(), "https://abc.supabase.co/auth/v1/token?grant_type=password");
        assert_eq!(
            cfg.sign_up_url(),
            "https://abc.supabase.co/functions/v1/make-server-154d65af/signup"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let cfg = BackendConfig::new("http://localhost:54321/", "key");
        assert_eq!(
            cfg.tasks_url(),
            "http://localhost:54321/functions/v1/make-server-154d65af/tasks"
        );
    }

    #[test]
    fn test_from_json_partial_labels() {
        let cfg = AppConfig::from_json(
            r#"{"backend": {"project_url": "https://x.supabase.co", "anon_key": "k"},
                "labels": {"default_name": "User"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.labels.default_name, "User");
        assert_eq!(cfg.labels.nav_users, "Usuarios");
        assert_eq!(cfg.backend.function_name, DEFAULT_FUNCTION_NAME);
    }

    #[test]
    fn test_from_json_rejects_missing_url() {
        let err = AppConfig::from_json(r#"{"backend": {"project_url": "", "anon_key": "k"}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingProjectUrl));
    }

    #[test]
    fn test_status_label() {
        let labels = Labels::default();
        assert_eq!(labels.status_label(Some(&TaskStatus::InProgress)), "En progreso");
        assert_eq!(labels.status_label(Some(&TaskStatus::Other("blocked".to_string()))), "blocked");
        assert_eq!(labels.status_label(None), "—");
    }

    #[test]
    fn test_screen_labels_overridable() {
        let labels: Labels =
            serde_json::from_str(r#"{"refresh": "Refresh", "tasks_empty": "No tasks"}"#).unwrap();
        assert_eq!(labels.refresh, "Refresh");
        assert_eq!(labels.tasks_empty, "No tasks");
        assert_eq!(labels.chart_title, Labels::default().chart_title);
    }
}
