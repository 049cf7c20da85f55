//! Sidebar Component
//!
//! Role-gated navigation with user header and settings/logout footer.

use leptos::prelude::*;
use taskboard_core::navigation::{avatar_initial, role_badge, visible_destinations};
use taskboard_core::{Destination, Role};

use crate::context::use_app_context;

#[component]
pub fn Sidebar(
    #[prop(into)] name: String,
    role: Role,
    #[prop(into)] active_view: Signal<Destination>,
    #[prop(into)] on_view_change: Callback<Destination>,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    let labels = use_app_context().labels();
    let items = visible_destinations(role, &labels);
    let initial = avatar_initial(&name);
    let badge = role_badge(role, &labels).to_string();
    let badge_class = if role.is_admin() { "role-badge admin" } else { "role-badge user" };

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <div class="avatar">{initial}</div>
                <div class="sidebar-user">
                    <p class="sidebar-user-name">{name}</p>
                    <span class=badge_class>{badge}</span>
                </div>
            </div>

            <nav class="sidebar-nav">
                {items.into_iter().map(|item| {
                    let destination = item.destination;
                    let is_active = move || active_view.get() == destination;
                    view! {
                        <button
                            class=move || if is_active() { "nav-item active" } else { "nav-item" }
                            on:click=move |_| on_view_change.run(destination)
                        >
                            {item.label}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class="sidebar-footer">
                <button class="nav-item" on:click=move |_| on_view_change.run(Destination::Profile)>
                    {labels.nav_profile.clone()}
                </button>
                <button class="nav-item logout" on:click=move |_| on_logout.run(())>
                    {labels.nav_logout.clone()}
                </button>
            </div>
        </aside>
    }
}
