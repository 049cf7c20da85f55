//! Frontend Configuration
//!
//! Backend location is baked in at build time:
//! `TASKBOARD_PROJECT_URL`, `TASKBOARD_ANON_KEY`, `TASKBOARD_FUNCTION`,
//! and optionally `TASKBOARD_LABELS` (JSON object overriding any label).

use taskboard_core::config::DEFAULT_FUNCTION_NAME;
use taskboard_core::{AppConfig, BackendConfig, Labels};
use tracing::warn;

pub const LOG_DIRECTIVES: &str = "info,taskboard_core=debug";

const DEFAULT_PROJECT_URL: &str = "http://localhost:54321";

pub fn load_config() -> AppConfig {
    let backend = BackendConfig {
        project_url: option_env!("TASKBOARD_PROJECT_URL")
            .unwrap_or(DEFAULT_PROJECT_URL)
            .to_string(),
        anon_key: option_env!("TASKBOARD_ANON_KEY").unwrap_or_default().to_string(),
        function_name: option_env!("TASKBOARD_FUNCTION")
            .unwrap_or(DEFAULT_FUNCTION_NAME)
            .to_string(),
    };
    if let Err(e) = backend.validate() {
        warn!(error = %e, "backend configuration is invalid");
    }

    let labels = match option_env!("TASKBOARD_LABELS") {
        Some(json) => serde_json::from_str::<Labels>(json).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring TASKBOARD_LABELS");
            Labels::default()
        }),
        None => Labels::default(),
    };

    AppConfig { backend, labels }
}
