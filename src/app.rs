//! Taskboard Frontend App
//!
//! Auth screen until a session exists, then sidebar + main view layout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use taskboard_core::{Destination, Session};

use crate::commands;
use crate::components::{AuthForm, Dashboard, ProfilePanel, Sidebar, TaskList, UserList};
use crate::config::load_config;
use crate::context::{use_app_context, AppContext};
use crate::store::{
    store_login, store_logout, store_navigate, store_set_data, AppState, AppStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new(load_config(), (reload_trigger, set_reload_trigger));
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Load tasks/users whenever the session or reload trigger changes
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(session) = store.session().get() else { return };
        let gateway = ctx.gateway();
        spawn_local(async move {
            let (tasks, users) = commands::load_dashboard_data(&gateway, &session).await;
            // Session may have ended while loading
            let current = store.session().get_untracked().map(|s| s.access_token);
            if current.as_deref() == Some(session.access_token.as_str()) {
                store_set_data(&store, tasks, users);
            }
        });
    });

    let on_login = Callback::new(move |session: Session| {
        tracing::info!(user = %session.user_id, role = session.role.as_str(), "signed in");
        store_login(&store, session);
    });

    view! {
        <Show
            when=move || store.session().get().is_some()
            fallback=move || view! { <AuthForm on_login=on_login /> }
        >
            <Shell />
        </Show>
    }
}

/// Signed-in layout
#[component]
fn Shell() -> impl IntoView {
    let ctx = use_app_context();
    let store = crate::store::use_app_store();
    let labels = ctx.labels();

    let session = move || store.session().get();
    let active_view = Signal::derive(move || store.active_view().get());
    let tasks = Signal::derive(move || store.tasks().get());
    let users = Signal::derive(move || store.users().get());

    let nav_labels = labels.clone();
    let on_view_change = Callback::new(move |destination: Destination| {
        store_navigate(&store, destination, &nav_labels);
    });
    let on_logout = Callback::new(move |_: ()| {
        tracing::info!("signed out");
        store_logout(&store);
    });

    view! {
        {move || session().map(|session| {
            let role = session.role;
            let name = session.name.clone();
            let tasks_title = if role.is_admin() {
                labels.nav_tasks_admin.clone()
            } else {
                labels.nav_tasks_user.clone()
            };
            let create_title = labels.nav_create_task.clone();
            view! {
                <div class="app-layout">
                    <Sidebar
                        name=name
                        role=role
                        active_view=active_view
                        on_view_change=on_view_change
                        on_logout=on_logout
                    />
                    <main class="main-content">
                        {move || match active_view.get() {
                            Destination::Dashboard => view! {
                                <Dashboard role=role tasks=tasks users=users />
                            }.into_any(),
                            Destination::Tasks => view! {
                                <TaskList title=tasks_title.clone() tasks=tasks />
                            }.into_any(),
                            Destination::Users => view! { <UserList users=users /> }.into_any(),
                            Destination::CreateTask => view! {
                                <section class="create-task">
                                    <h2>{create_title.clone()}</h2>
                                </section>
                            }.into_any(),
                            Destination::Profile => view! {
                                <ProfilePanel session=session.clone() />
                            }.into_any(),
                        }}
                    </main>
                </div>
            }
        })}
    }
}
