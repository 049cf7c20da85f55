//! Task List Component

use leptos::prelude::*;
use taskboard_core::Task;

use crate::context::use_app_context;

#[component]
pub fn TaskList(
    #[prop(into)] title: String,
    #[prop(into)] tasks: Signal<Vec<Task>>,
) -> impl IntoView {
    let labels = use_app_context().labels();
    let empty = labels.tasks_empty.clone();

    view! {
        <section class="task-list">
            <h2>{title}</h2>
            <Show
                when=move || !tasks.get().is_empty()
                fallback=move || view! { <p class="list-empty">{empty.clone()}</p> }
            >
                <ul>
                    // Ids may be missing, so the position is part of the key
                    <For
                        each=move || tasks.get().into_iter().enumerate()
                        key=|(index, task)| (*index, task.id.clone())
                        children={
                            let labels = labels.clone();
                            move |(_, task)| {
                                let status = task.status.as_ref();
                                let status_class = format!(
                                    "task-status {}",
                                    status.map(|s| s.as_str()).unwrap_or("none")
                                );
                                let status_text = labels.status_label(status);
                                view! {
                                    <li class="task-row">
                                        <span class="task-title">{task.title.clone()}</span>
                                        <span class=status_class>{status_text}</span>
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
