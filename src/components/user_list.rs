use leptos::prelude::*;
use taskboard_core::navigation::role_badge;
use taskboard_core::User;

use crate::context::use_app_context;

/// Admin-only user directory
#[component]
pub fn UserList(#[prop(into)] users: Signal<Vec<User>>) -> impl IntoView {
    let labels = use_app_context().labels();
    let heading = labels.nav_users.clone();
    let empty = labels.users_empty.clone();

    view! {
        <section class="user-list">
            <h2>{heading}</h2>
            <Show
                when=move || !users.get().is_empty()
                fallback=move || view! { <p class="list-empty">{empty.clone()}</p> }
            >
                <ul>
                    <For
                        each=move || users.get().into_iter().enumerate()
                        key=|(index, user)| (*index, user.id.clone())
                        children={
                            let labels = labels.clone();
                            move |(_, user)| {
                                let name = user.display_name(&labels.default_name).to_string();
                                let badge = role_badge(user.role(), &labels).to_string();
                                view! {
                                    <li class="user-row">
                                        <span class="user-name">{name}</span>
                                        <span class="user-email">
                                            {user.email.clone().unwrap_or_default()}
                                        </span>
                                        <span class="role-badge">{badge}</span>
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
