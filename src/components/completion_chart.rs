//! Completed-Tasks Chart
//!
//! Horizontal bars, one per user, scaled against the top performer.

use leptos::prelude::*;
use taskboard_core::DashboardStats;

use crate::context::use_app_context;

#[component]
pub fn CompletionChart(stats: Memo<DashboardStats>) -> impl IntoView {
    let labels = use_app_context().labels();
    let empty = labels.chart_empty.clone();

    let rows = move || {
        let stats = stats.get();
        let max = stats.chart_max();
        stats
            .per_user
            .into_iter()
            .map(|s| (s.bar_width_percent(max), s))
            .collect::<Vec<_>>()
    };

    view! {
        <section class="chart">
            <h2>{labels.chart_title.clone()}</h2>
            <Show
                when=move || !stats.get().per_user.is_empty()
                fallback=move || view! { <p class="chart-empty">{empty.clone()}</p> }
            >
                <ul class="chart-rows">
                    {move || rows().into_iter().map(|(width, stat)| view! {
                        <li class="chart-row">
                            <span class="chart-label">{stat.name.clone()}</span>
                            <div class="chart-track">
                                <div class="chart-bar" style:width=format!("{}%", width)></div>
                            </div>
                            <span class="chart-value">
                                {format!(
                                    "{}/{} ({}%)",
                                    stat.completed,
                                    stat.total,
                                    stat.percentage,
                                )}
                            </span>
                        </li>
                    }).collect_view()}
                </ul>
            </Show>
        </section>
    }
}
