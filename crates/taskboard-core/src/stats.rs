//! Dashboard Statistics
//!
//! Derived values recomputed from the current task/user snapshots on every
//! render. Nothing here is persisted.

use serde::Serialize;

use crate::config::Labels;
use crate::models::{Task, TaskStatus, User};

/// Rounded completion percentage, 0 when there is nothing to complete.
///
/// Rounds half up, so 1/8 (12.5%) becomes 13.
pub fn completion_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    ((200 * completed + total) / (2 * total)) as u8
}

/// Task tallies by status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Every task, including unclassified statuses
    pub total: usize,
}

impl StatusCounts {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut counts = StatusCounts {
            total: tasks.len(),
            ..Default::default()
        };
        for status in tasks.iter().filter_map(|t| t.status.as_ref()) {
            match status {
                TaskStatus::Pending => counts.pending += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Completed => counts.completed += 1,
                TaskStatus::Other(_) => {}
            }
        }
        counts
    }

    /// Tasks whose status is one of the three known values
    pub fn classified(&self) -> usize {
        self.pending + self.in_progress + self.completed
    }

    pub fn completion_percentage(&self) -> u8 {
        completion_percentage(self.completed, self.total)
    }
}

/// Per-user completion metrics for the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedUserStat {
    pub name: String,
    pub role: String,
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
}

impl DerivedUserStat {
    /// Bar width relative to the best performer, in percent
    pub fn bar_width_percent(&self, max_completed: usize) -> u8 {
        if max_completed == 0 {
            return 0;
        }
        completion_percentage(self.completed, max_completed)
    }
}

/// Everything the dashboard renders
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DashboardStats {
    pub counts: StatusCounts,
    pub completion_percentage: u8,
    /// Sorted by completed count, descending; ties keep input order
    pub per_user: Vec<DerivedUserStat>,
}

impl DashboardStats {
    /// Largest completed count across users, used to scale chart bars
    pub fn chart_max(&self) -> usize {
        self.per_user.iter().map(|s| s.completed).max().unwrap_or(0)
    }
}

fn user_stat(user: &User, tasks: &[Task], labels: &Labels) -> DerivedUserStat {
    let assigned: Vec<&Task> = tasks.iter().filter(|t| t.is_assigned_to(&user.id)).collect();
    let completed = assigned.iter().filter(|t| t.has_status(&TaskStatus::Completed)).count();
    let total = assigned.len();

    DerivedUserStat {
        name: user.display_name(&labels.default_name).to_string(),
        role: user.role.clone().unwrap_or_else(|| labels.default_role.clone()),
        completed,
        total,
        percentage: completion_percentage(completed, total),
    }
}

/// Aggregate tasks and users into dashboard stats
pub fn aggregate(tasks: &[Task], users: &[User], labels: &Labels) -> DashboardStats {
    let counts = StatusCounts::from_tasks(tasks);

    let mut per_user: Vec<DerivedUserStat> =
        users.iter().map(|u| user_stat(u, tasks, labels)).collect();
    // sort_by is stable
    per_user.sort_by(|a, b| b.completed.cmp(&a.completed));

    DashboardStats {
        completion_percentage: counts.completion_percentage(),
        counts,
        per_user,
    }
}
