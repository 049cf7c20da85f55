use leptos::prelude::*;
use taskboard_core::navigation::role_badge;
use taskboard_core::Session;

use crate::context::use_app_context;

/// Read-only view of the signed-in account
#[component]
pub fn ProfilePanel(session: Session) -> impl IntoView {
    let labels = use_app_context().labels();
    let badge = role_badge(session.role, &labels).to_string();

    view! {
        <section class="profile-panel">
            <h2>{labels.nav_profile.clone()}</h2>
            <dl>
                <dt>{labels.profile_name.clone()}</dt>
                <dd>{session.name}</dd>
                <dt>{labels.field_email.clone()}</dt>
                <dd>{session.email}</dd>
                <dt>{labels.profile_role.clone()}</dt>
                <dd>{badge}</dd>
            </dl>
        </section>
    }
}
