//! Normalized in-memory entity graph: tasks plus the directory entities
//! they reference (statuses, priorities, projects, users).
//!
//! Identifiers are strings, and directory entities deliberately use the
//! human-readable name as the id so remote rows stay human-editable.

pub mod directory;
pub mod task;

pub use directory::{Priority, Project, Status, User};
pub use task::{ReferenceLink, Task};

/// The whole entity graph, replaced wholesale on a successful pull and
/// patched incrementally on local edits.
///
/// Insertion order is preserved in every list; position is display-only,
/// never load-bearing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityModel {
    pub tasks: Vec<Task>,
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub statuses: Vec<Status>,
    pub priorities: Vec<Priority>,
}

impl EntityModel {
    /// A fresh model seeded with the built-in status and priority sets,
    /// usable before the first pull.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            statuses: directory::default_statuses(),
            priorities: directory::default_priorities(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    #[must_use]
    pub fn status(&self, id: &str) -> Option<&Status> {
        self.statuses.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn priority(&self, id: &str) -> Option<&Priority> {
        self.priorities.iter().find(|p| p.id == id)
    }
}
