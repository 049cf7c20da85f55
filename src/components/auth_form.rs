//! Auth Form Component
//!
//! Login / registration tabs. Each tab owns its own submission guard, so a
//! second submit while one is in flight is ignored.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_core::{Session, SubmissionGuard};

use crate::commands::{self, SubmitError};
use crate::context::use_app_context;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    Login,
    Register,
}

/// Authentication screen shown while no session exists
#[component]
pub fn AuthForm(#[prop(into)] on_login: Callback<Session>) -> impl IntoView {
    let labels = use_app_context().labels();
    let (tab, set_tab) = signal(AuthTab::Login);
    // Shared banner: cleared at the start of every submission
    let (error, set_error) = signal(String::new());

    let tab_class = move |t: AuthTab| if tab.get() == t { "auth-tab active" } else { "auth-tab" };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>{labels.app_title.clone()}</h1>
                    <p>{labels.app_subtitle.clone()}</p>
                </div>

                <div class="auth-tabs">
                    <button
                        class=move || tab_class(AuthTab::Login)
                        on:click=move |_| set_tab.set(AuthTab::Login)
                    >
                        {labels.tab_login.clone()}
                    </button>
                    <button
                        class=move || tab_class(AuthTab::Register)
                        on:click=move |_| set_tab.set(AuthTab::Register)
                    >
                        {labels.tab_register.clone()}
                    </button>
                </div>

                <Show when=move || !error.get().is_empty()>
                    <div class="auth-error">{move || error.get()}</div>
                </Show>

                {move || match tab.get() {
                    AuthTab::Login => {
                        view! { <LoginForm on_login=on_login set_error=set_error /> }.into_any()
                    }
                    AuthTab::Register => {
                        view! { <RegisterForm on_login=on_login set_error=set_error /> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn LoginForm(on_login: Callback<Session>, set_error: WriteSignal<String>) -> impl IntoView {
    let ctx = use_app_context();
    let labels = ctx.labels();
    let (busy_text, idle_text) = (labels.signing_in.clone(), labels.tab_login.clone());
    let guard = StoredValue::new_local(SubmissionGuard::new());

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let guard = guard.get_value();
        if guard.is_busy() {
            return;
        }
        set_loading.set(true);
        set_error.set(String::new());

        let gateway = ctx.gateway();
        let email = email.get();
        let password = password.get();
        spawn_local(async move {
            match commands::sign_in(&gateway, &guard, &email, &password).await {
                Err(SubmitError::InFlight) => {}
                Err(SubmitError::Message(message)) => {
                    set_loading.set(false);
                    set_error.set(message);
                }
                Ok(session) => {
                    set_loading.set(false);
                    on_login.run(session);
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <label for="login-email">{labels.field_email.clone()}</label>
            <input
                id="login-email"
                type="email"
                placeholder="tu@email.com"
                required
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <label for="login-password">{labels.field_password.clone()}</label>
            <input
                id="login-password"
                type="password"
                placeholder="••••••••"
                required
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit" class="auth-submit" disabled=move || loading.get()>
                {move || if loading.get() { busy_text.clone() } else { idle_text.clone() }}
            </button>
        </form>
    }
}

#[component]
fn RegisterForm(on_login: Callback<Session>, set_error: WriteSignal<String>) -> impl IntoView {
    let ctx = use_app_context();
    let labels = ctx.labels();
    let (busy_text, idle_text) = (labels.registering.clone(), labels.tab_register.clone());
    let guard = StoredValue::new_local(SubmissionGuard::new());

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let guard = guard.get_value();
        if guard.is_busy() {
            return;
        }
        set_loading.set(true);
        set_error.set(String::new());

        let gateway = ctx.gateway();
        let (name, email, password) = (name.get(), email.get(), password.get());
        spawn_local(async move {
            match commands::register(&gateway, &guard, &name, &email, &password).await {
                Err(SubmitError::InFlight) => {}
                Err(SubmitError::Message(message)) => {
                    set_loading.set(false);
                    set_error.set(message);
                }
                Ok(session) => {
                    set_loading.set(false);
                    on_login.run(session);
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <label for="register-name">{labels.field_name.clone()}</label>
            <input
                id="register-name"
                type="text"
                placeholder=labels.name_placeholder.clone()
                required
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <label for="register-email">{labels.field_email.clone()}</label>
            <input
                id="register-email"
                type="email"
                placeholder="tu@email.com"
                required
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <label for="register-password">{labels.field_password.clone()}</label>
            <input
                id="register-password"
                type="password"
                placeholder="••••••••"
                minlength="8"
                required
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <p class="auth-hint">{labels.password_hint.clone()}</p>
            <button type="submit" class="auth-submit register" disabled=move || loading.get()>
                {move || if loading.get() { busy_text.clone() } else { idle_text.clone() }}
            </button>
        </form>
    }
}
