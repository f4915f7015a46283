use serde::{Deserialize, Serialize};

/// A lifecycle column. Closed, small, ordered set; remote-configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: String,
    pub name: String,
}

impl Status {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            id: name.to_string(),
            name: name.to_string(),
        }
    }
}

/// A priority level with an opaque presentation-color token. The engine
/// never interprets the color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// A project grouping. Color token is opaque, description optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Project {
    /// Minimal placeholder for a project referenced from a task row but
    /// absent from the Projects sheet: the foreign-key string becomes both
    /// id and name.
    #[must_use]
    pub fn placeholder(name: &str) -> Self {
        Self {
            id: name.to_string(),
            name: name.to_string(),
            color: DEFAULT_PROJECT_COLOR.to_string(),
            description: None,
        }
    }
}

/// A team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl User {
    /// Minimal placeholder for an assignee referenced from a task row but
    /// absent from the Team Members sheet.
    #[must_use]
    pub fn placeholder(name: &str) -> Self {
        Self {
            id: name.to_string(),
            name: name.to_string(),
            email: String::new(),
            avatar: generated_avatar_url(name),
        }
    }
}

pub(crate) const DEFAULT_PROJECT_COLOR: &str = "bg-gray-100";
pub(crate) const DEFAULT_PRIORITY_COLOR: &str = "bg-gray-100 text-gray-800";

/// Avatar URL for members created without one, matching the sheet
/// template's convention.
#[must_use]
pub fn generated_avatar_url(name: &str) -> String {
    let encoded: String = name
        .chars()
        .map(|c| if c == ' ' { '+' } else { c })
        .collect();
    format!("https://ui-avatars.com/api/?name={encoded}&background=random")
}

/// Built-in status set, used until the remote Status sheet is authored.
#[must_use]
pub fn default_statuses() -> Vec<Status> {
    ["To Do", "In Progress", "Review", "Done"]
        .into_iter()
        .map(Status::named)
        .collect()
}

/// Built-in priority set with the stock color tokens.
#[must_use]
pub fn default_priorities() -> Vec<Priority> {
    [
        ("Low", "bg-gray-100 text-gray-700 border-gray-200"),
        ("Medium", "bg-blue-100 text-blue-700 border-blue-200"),
        ("High", "bg-orange-100 text-orange-700 border-orange-200"),
        ("Critical", "bg-red-100 text-red-700 border-red-200"),
    ]
    .into_iter()
    .map(|(name, color)| Priority {
        id: name.to_string(),
        name: name.to_string(),
        color: color.to_string(),
    })
    .collect()
}
