//! Dashboard Component
//!
//! Status counts, overall completion and (for admins) the per-user chart.
//! Every input is optional and defaults to empty.

use leptos::prelude::*;
use taskboard_core::{aggregate, Role, Task, User};

use crate::components::{CompletionChart, StatCard};
use crate::context::use_app_context;

#[component]
pub fn Dashboard(
    #[prop(optional)] role: Option<Role>,
    #[prop(optional)] tasks: Option<Signal<Vec<Task>>>,
    #[prop(optional)] users: Option<Signal<Vec<User>>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let labels = ctx.labels();
    let is_admin = role.map(|r| r.is_admin()).unwrap_or(false);

    let stats_labels = labels.clone();
    let stats = Memo::new(move |_| {
        let tasks = tasks.map(|t| t.get()).unwrap_or_default();
        let users = users.map(|u| u.get()).unwrap_or_default();
        aggregate(&tasks, &users, &stats_labels)
    });

    let counts = move || stats.get().counts;
    let completed_suffix = labels.completed_suffix.clone();

    view! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h1>{labels.nav_dashboard.clone()}</h1>
                <button class="refresh-btn" on:click=move |_| ctx.reload()>
                    {labels.refresh.clone()}
                </button>
            </div>
            <div class="stat-grid">
                <StatCard
                    title=labels.stat_total.clone()
                    value=Signal::derive(move || counts().total.to_string())
                />
                <StatCard
                    title=labels.stat_pending.clone()
                    accent="pending"
                    value=Signal::derive(move || counts().pending.to_string())
                />
                <StatCard
                    title=labels.stat_in_progress.clone()
                    accent="in-progress"
                    value=Signal::derive(move || counts().in_progress.to_string())
                />
                <StatCard
                    title=labels.stat_completed.clone()
                    accent="completed"
                    value=Signal::derive(move || counts().completed.to_string())
                />
            </div>

            <section class="completion">
                <h2>{labels.overall_progress.clone()}</h2>
                <div class="progress-track">
                    <div
                        class="progress-bar"
                        style:width=move || format!("{}%", stats.get().completion_percentage)
                    ></div>
                </div>
                <p class="progress-label">
                    {move || format!("{}% {}", stats.get().completion_percentage, completed_suffix)}
                </p>
            </section>

            <Show when=move || is_admin>
                <CompletionChart stats=stats />
            </Show>
        </div>
    }
}
