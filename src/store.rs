//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use taskboard_core::navigation::is_allowed;
use taskboard_core::{Destination, Labels, Session, Task, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Present once signed in; cleared on logout
    pub session: Option<Session>,
    /// Tasks visible to the signed-in user
    pub tasks: Vec<Task>,
    /// Users (admins only; empty otherwise)
    pub users: Vec<User>,
    /// View shown in the main area
    pub active_view: Destination,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Start a new session on the dashboard
pub fn store_login(store: &AppStore, session: Session) {
    store.active_view().set(Destination::Dashboard);
    store.session().set(Some(session));
}

/// Drop the session and everything loaded with it
pub fn store_logout(store: &AppStore) {
    store.session().set(None);
    store.tasks().write().clear();
    store.users().write().clear();
    store.active_view().set(Destination::Dashboard);
}

/// Replace the loaded snapshots
pub fn store_set_data(store: &AppStore, tasks: Vec<Task>, users: Vec<User>) {
    store.tasks().set(tasks);
    store.users().set(users);
}

/// Switch views, ignoring destinations the current role may not open
pub fn store_navigate(store: &AppStore, destination: Destination, labels: &Labels) {
    let role = store.session().get().map(|s| s.role).unwrap_or_default();
    if is_allowed(role, destination, labels) {
        store.active_view().set(destination);
    } else {
        tracing::warn!(destination = destination.as_str(), "navigation refused for role");
    }
}
