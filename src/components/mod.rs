//! UI Components
//!
//! Leptos components for the auth screen and the signed-in shell.

mod auth_form;
mod completion_chart;
mod dashboard;
mod profile_panel;
mod sidebar;
mod stat_card;
mod task_list;
mod user_list;

pub use auth_form::AuthForm;
pub use completion_chart::CompletionChart;
pub use dashboard::Dashboard;
pub use profile_panel::ProfilePanel;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use task_list::TaskList;
pub use user_list::UserList;
