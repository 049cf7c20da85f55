use leptos::prelude::*;

/// One headline number on the dashboard
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] accent: String,
) -> impl IntoView {
    let class = if accent.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card {}", accent)
    };
    view! {
        <div class=class>
            <p class="stat-card-title">{title}</p>
            <p class="stat-card-value">{move || value.get()}</p>
        </div>
    }
}
