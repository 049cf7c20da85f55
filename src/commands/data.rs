//! Task/User Listing Wrappers

use taskboard_core::{Session, Task, User};
use tracing::{info, warn};

use crate::context::Gateway;

/// Fetch tasks and, for admins, users. Failures leave that list empty.
pub async fn load_dashboard_data(gateway: &Gateway, session: &Session) -> (Vec<Task>, Vec<User>) {
    let backend = gateway.backend();

    let tasks = match backend.list_tasks(session).await {
        Ok(tasks) => tasks,
        Err(e) => {
            warn!(error = %e, "failed to load tasks");
            Vec::new()
        }
    };

    let users = if session.is_admin() {
        match backend.list_users(session).await {
            Ok(users) => users,
            Err(e) => {
                warn!(error = %e, "failed to load users");
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    info!(tasks = tasks.len(), users = users.len(), "dashboard data loaded");
    (tasks, users)
}
