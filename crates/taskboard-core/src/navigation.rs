//! Navigation Policy
//!
//! Static role -> sidebar destinations table.

use crate::config::Labels;
use crate::models::Role;

/// A view the sidebar can switch to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Destination {
    #[default]
    Dashboard,
    Tasks,
    Users,
    CreateTask,
    /// Footer entry, not part of the role table
    Profile,
}

impl Destination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Dashboard => "dashboard",
            Destination::Tasks => "tasks",
            Destination::Users => "users",
            Destination::CreateTask => "create-task",
            Destination::Profile => "profile",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dashboard" => Some(Destination::Dashboard),
            "tasks" => Some(Destination::Tasks),
            "users" => Some(Destination::Users),
            "create-task" => Some(Destination::CreateTask),
            "profile" => Some(Destination::Profile),
            _ => None,
        }
    }
}

/// Sidebar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub destination: Destination,
    pub label: String,
    pub available: bool,
}

/// All role-gated destinations in display order, with availability
pub fn destinations(role: Role, labels: &Labels) -> Vec<NavItem> {
    let is_admin = role.is_admin();
    let tasks_label = if is_admin { &labels.nav_tasks_admin } else { &labels.nav_tasks_user };

    vec![
        NavItem {
            destination: Destination::Dashboard,
            label: labels.nav_dashboard.clone(),
            available: true,
        },
        NavItem { destination: Destination::Tasks, label: tasks_label.clone(), available: true },
        NavItem {
            destination: Destination::Users,
            label: labels.nav_users.clone(),
            available: is_admin,
        },
        NavItem {
            destination: Destination::CreateTask,
            label: labels.nav_create_task.clone(),
            available: is_admin,
        },
    ]
}

/// Only the destinations the role may open
pub fn visible_destinations(role: Role, labels: &Labels) -> Vec<NavItem> {
    destinations(role, labels).into_iter().filter(|item| item.available).collect()
}

/// Whether `role` may open `destination`. Profile is open to everyone.
pub fn is_allowed(role: Role, destination: Destination, labels: &Labels) -> bool {
    destination == Destination::Profile
        || destinations(role, labels)
            .iter()
            .any(|item| item.destination == destination && item.available)
}

/// Avatar letter: first character uppercased, `U` for an empty name
pub fn avatar_initial(name: &str) -> String {
    match name.chars().next() {
        Some(c) => c.to_uppercase().collect(),
        None => "U".to_string(),
    }
}

/// Role badge text
pub fn role_badge(role: Role, labels: &Labels) -> &str {
    if role.is_admin() {
        &labels.role_admin
    } else {
        &labels.role_user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_sees_everything() {
        let labels = Labels::default();
        let items = visible_destinations(Role::Admin, &labels);
        let ids: Vec<&str> = items.iter().map(|i| i.destination.as_str()).collect();
        assert_eq!(ids, vec!["dashboard", "tasks", "users", "create-task"]);
        assert_eq!(items[1].label, "Gestionar Tareas");
    }

    #[test]
    fn test_user_sees_dashboard_and_own_tasks() {
        let labels = Labels::default();
        let all = destinations(Role::User, &labels);
        assert_eq!(all.len(), 4);
        assert!(!all[2].available);
        assert!(!all[3].available);

        let visible = visible_destinations(Role::User, &labels);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[1].label, "Mis Tareas");
    }

    #[test]
    fn test_is_allowed() {
        let labels = Labels::default();
        assert!(!is_allowed(Role::User, Destination::Users, &labels));
        assert!(is_allowed(Role::User, Destination::Profile, &labels));
        assert!(is_allowed(Role::Admin, Destination::CreateTask, &labels));
    }

    #[test]
    fn test_destination_ids_parse_back() {
        for d in [
            Destination::Dashboard,
            Destination::Tasks,
            Destination::Users,
            Destination::CreateTask,
            Destination::Profile,
        ] {
            assert_eq!(Destination::parse(d.as_str()), Some(d));
        }
        assert_eq!(Destination::parse("settings"), None);
    }

    #[test]
    fn test_avatar_and_badge() {
        assert_eq!(avatar_initial("ana"), "A");
        assert_eq!(avatar_initial(""), "U");
        let labels = Labels::default();
        assert_eq!(role_badge(Role::Admin, &labels), "Administrador");
        assert_eq!(role_badge(Role::User, &labels), "Usuario");
    }
}
