//! Row codec: deterministic mapping between flat sheet rows and typed
//! entities, in both directions.
//!
//! Decode is total. The sheet is an uncontrolled, human-editable document,
//! so every missing or malformed cell resolves to a defined fallback and
//! decoding never fails. Encode is total because it runs on
//! already-validated local data and never emits nulls.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::model::directory::{DEFAULT_PRIORITY_COLOR, DEFAULT_PROJECT_COLOR};
use crate::model::{Priority, Project, ReferenceLink, Status, Task, User};
use crate::row::Row;

/// Single-character delimiter between a reference link's title and URL
/// within one encoded line.
const LINK_DELIMITER: char = '|';

/// Title given to legacy link lines that carry only a bare URL.
const LEGACY_LINK_TITLE: &str = "Link";

/// Task-sheet column set. Anything else in a task row is reported as
/// ignored.
const TASK_COLUMNS: &[&str] = &[
    "ID",
    "Title",
    "Description",
    "Status",
    "Priority",
    "DueDate",
    "Assignee",
    "Project",
    "RefLinks",
    "ActivityTrail",
    "Subtasks",
    "UpdatedAt",
];

const MEMBER_COLUMNS: &[&str] = &["Name", "Email", "AvatarUrl"];
const PROJECT_COLUMNS: &[&str] = &["Name", "ColorHex", "Description"];
const STATUS_COLUMNS: &[&str] = &["Name"];
const PRIORITY_COLUMNS: &[&str] = &["Name", "ColorClass"];

/// A decoded entity plus the row columns the schema did not consume.
/// Unknown columns are benign (the remote schema evolves freely); callers
/// log them and move on.
#[derive(Debug, Clone)]
pub struct Decoded<T> {
    pub entity: T,
    pub ignored: Vec<String>,
}

/// Fallback foreign keys for task decoding: the first available status and
/// priority ids, with hard defaults when even the directory is empty, so
/// a decoded task never carries a null identifier.
#[derive(Debug, Clone, Copy)]
pub struct TaskDefaults<'a> {
    pub status_id: &'a str,
    pub priority_id: &'a str,
}

impl<'a> TaskDefaults<'a> {
    #[must_use]
    pub fn from_directories(statuses: &'a [Status], priorities: &'a [Priority]) -> Self {
        Self {
            status_id: statuses.first().map_or("To Do", |s| s.id.as_str()),
            priority_id: priorities.first().map_or("Low", |p| p.id.as_str()),
        }
    }
}

fn ignored_columns(row: &Row, known: &[&str]) -> Vec<String> {
    let ignored: Vec<String> = row
        .columns()
        .filter(|column| !known.contains(column))
        .map(ToString::to_string)
        .collect();
    if !ignored.is_empty() {
        debug!(columns = ?ignored, "ignoring unknown row columns");
    }
    ignored
}

/// Decode one task row. Total: every anomaly resolves to a fallback.
#[must_use]
pub fn decode_task(row: &Row, defaults: TaskDefaults<'_>) -> Decoded<Task> {
    let task = Task {
        id: row
            .text("ID")
            .unwrap_or_else(crate::model::task::new_task_id),
        title: row.text("Title").unwrap_or_else(|| "Untitled".to_string()),
        description: row.text("Description").unwrap_or_default(),
        status_id: row
            .text("Status")
            .unwrap_or_else(|| defaults.status_id.to_string()),
        priority_id: row
            .text("Priority")
            .unwrap_or_else(|| defaults.priority_id.to_string()),
        assignee_id: row.text("Assignee").unwrap_or_default(),
        project_id: row.text("Project").unwrap_or_default(),
        due_date: normalize_date(row.text("DueDate").as_deref()),
        reference_links: decode_links(row.text("RefLinks").as_deref()),
        activity_log: decode_lines(row.text("ActivityTrail").as_deref()),
        subtasks: decode_lines(row.text("Subtasks").as_deref()),
        updated_at: row
            .text("UpdatedAt")
            .unwrap_or_else(crate::model::task::now_stamp),
    };

    Decoded {
        entity: task,
        ignored: ignored_columns(row, TASK_COLUMNS),
    }
}

/// Encode one task into its sheet row. Never emits nulls; absent optionals
/// encode as empty strings.
#[must_use]
pub fn encode_task(task: &Task) -> Row {
    let mut row = Row::new();
    row.set("ID", task.id.clone());
    row.set("Title", task.title.clone());
    row.set("Description", task.description.clone());
    row.set("Status", task.status_id.clone());
    row.set("Priority", task.priority_id.clone());
    row.set("DueDate", normalize_date(Some(task.due_date.as_str())));
    row.set("Assignee", task.assignee_id.clone());
    row.set("Project", task.project_id.clone());
    row.set("RefLinks", encode_links(&task.reference_links));
    row.set("ActivityTrail", task.activity_log.join("\n"));
    row.set("Subtasks", task.subtasks.join("\n"));
    row.set("UpdatedAt", task.updated_at.clone());
    row
}

/// Decode one status row; the display name doubles as the id.
#[must_use]
pub fn decode_status(row: &Row) -> Decoded<Status> {
    let name = row.text("Name").unwrap_or_default();
    Decoded {
        entity: Status::named(&name),
        ignored: ignored_columns(row, STATUS_COLUMNS),
    }
}

#[must_use]
pub fn decode_priority(row: &Row) -> Decoded<Priority> {
    let name = row.text("Name").unwrap_or_default();
    Decoded {
        entity: Priority {
            id: name.clone(),
            name,
            color: row
                .text("ColorClass")
                .unwrap_or_else(|| DEFAULT_PRIORITY_COLOR.to_string()),
        },
        ignored: ignored_columns(row, PRIORITY_COLUMNS),
    }
}

#[must_use]
pub fn decode_project(row: &Row) -> Decoded<Project> {
    let name = row.text("Name").unwrap_or_default();
    let color = row
        .text("ColorHex")
        .map_or_else(
            || DEFAULT_PROJECT_COLOR.to_string(),
            |hex| format!("bg-[{hex}]"),
        );
    Decoded {
        entity: Project {
            id: name.clone(),
            name,
            color,
            description: row.text("Description"),
        },
        ignored: ignored_columns(row, PROJECT_COLUMNS),
    }
}

#[must_use]
pub fn encode_project(project: &Project) -> Row {
    let mut row = Row::new();
    row.set("Name", project.name.clone());
    // The sheet stores the raw hex; strip the presentation wrapper when the
    // local token carries one.
    let hex = project
        .color
        .strip_prefix("bg-[")
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(&project.color);
    row.set("ColorHex", hex);
    row.set(
        "Description",
        project.description.clone().unwrap_or_default(),
    );
    row
}

#[must_use]
pub fn decode_member(row: &Row) -> Decoded<User> {
    let name = row.text("Name").unwrap_or_default();
    Decoded {
        entity: User {
            id: name.clone(),
            name,
            email: row.text("Email").unwrap_or_default(),
            avatar: row.text("AvatarUrl").unwrap_or_default(),
        },
        ignored: ignored_columns(row, MEMBER_COLUMNS),
    }
}

#[must_use]
pub fn encode_member(user: &User) -> Row {
    let mut row = Row::new();
    row.set("Name", user.name.clone());
    row.set("Email", user.email.clone());
    row.set("AvatarUrl", user.avatar.clone());
    row
}

/// Split a newline-joined cell into its lines, dropping empty ones.
fn decode_lines(cell: Option<&str>) -> Vec<String> {
    cell.map_or_else(Vec::new, |text| {
        text.lines()
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect()
    })
}

/// Decode the `RefLinks` cell: one link per line, `Title|URL` with the
/// split on the FIRST delimiter only so URLs containing `|` stay intact.
/// A line with no delimiter is a legacy bare URL.
fn decode_links(cell: Option<&str>) -> Vec<ReferenceLink> {
    cell.map_or_else(Vec::new, |text| {
        text.lines()
            .filter(|line| !line.is_empty())
            .map(|line| match line.split_once(LINK_DELIMITER) {
                Some((title, url)) => ReferenceLink::new(title, url),
                None => ReferenceLink::new(LEGACY_LINK_TITLE, line),
            })
            .collect()
    })
}

fn encode_links(links: &[ReferenceLink]) -> String {
    links
        .iter()
        .map(|link| format!("{}{LINK_DELIMITER}{}", link.title, link.url))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Normalize a date cell to `YYYY-MM-DD`. Tolerates RFC 3339 instants and
/// common locale renderings; anything unparseable (or absent) becomes
/// today.
#[must_use]
pub fn normalize_date(cell: Option<&str>) -> String {
    cell.and_then(parse_date)
        .unwrap_or_else(|| Utc::now().date_naive())
        .format("%Y-%m-%d")
        .to_string()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.date_naive());
    }
    for format in ["%m/%d/%Y", "%d.%m.%Y", "%Y/%m/%d", "%b %d, %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{
        decode_member, decode_priority, decode_project, decode_status, decode_task, encode_member,
        encode_project, encode_task, normalize_date, TaskDefaults,
    };
    use crate::model::directory::{default_priorities, default_statuses};
    use crate::model::{Project, ReferenceLink, Task, User};
    use crate::row::Row;
    use serde_json::json;

    fn row(value: serde_json::Value) -> Row {
        serde_json::from_value(value).expect("row JSON")
    }

    fn defaults_fixture() -> (Vec<crate::model::Status>, Vec<crate::model::Priority>) {
        (default_statuses(), default_priorities())
    }

    fn sample_task() -> Task {
        Task {
            id: "t1".to_string(),
            title: "Design Home Page".to_string(),
            description: "High-fidelity mockups".to_string(),
            status_id: "In Progress".to_string(),
            priority_id: "High".to_string(),
            assignee_id: "Alice Johnson".to_string(),
            project_id: "Website Redesign".to_string(),
            due_date: "2025-03-01".to_string(),
            reference_links: vec![
                ReferenceLink::new("PRD", "https://docs.example.com/prd"),
                ReferenceLink::new("Inspiration", "https://dribbble.com/shots/1"),
            ],
            activity_log: vec!["2025-02-20 - Initial draft done.".to_string()],
            subtasks: vec!["Header".to_string(), "Footer".to_string()],
            updated_at: "2025-02-21T10:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn task_round_trip_is_a_fixed_point() {
        let (statuses, priorities) = defaults_fixture();
        let defaults = TaskDefaults::from_directories(&statuses, &priorities);
        let original = sample_task();
        let decoded = decode_task(&encode_task(&original), defaults);
        assert_eq!(decoded.entity, original);
        assert!(decoded.ignored.is_empty());
    }

    #[test]
    fn decode_is_total_on_empty_row() {
        let (statuses, priorities) = defaults_fixture();
        let defaults = TaskDefaults::from_directories(&statuses, &priorities);
        let decoded = decode_task(&Row::new(), defaults).entity;

        assert!(decoded.id.starts_with('t'));
        assert_eq!(decoded.title, "Untitled");
        assert_eq!(decoded.status_id, "To Do");
        assert_eq!(decoded.priority_id, "Low");
        assert!(decoded.assignee_id.is_empty());
        assert!(decoded.project_id.is_empty());
        assert!(decoded.reference_links.is_empty());
        // Due date falls back to today, still normalized.
        assert_eq!(decoded.due_date.len(), 10);
    }

    #[test]
    fn fallback_keys_use_first_directory_entries() {
        let statuses = vec![crate::model::Status::named("Doing")];
        let priorities = vec![crate::model::Priority {
            id: "Urgent".to_string(),
            name: "Urgent".to_string(),
            color: String::new(),
        }];
        let defaults = TaskDefaults::from_directories(&statuses, &priorities);
        let decoded = decode_task(&row(json!({"ID": "t9"})), defaults).entity;
        assert_eq!(decoded.status_id, "Doing");
        assert_eq!(decoded.priority_id, "Urgent");
    }

    #[test]
    fn hard_defaults_survive_empty_directories() {
        let defaults = TaskDefaults::from_directories(&[], &[]);
        assert_eq!(defaults.status_id, "To Do");
        assert_eq!(defaults.priority_id, "Low");
    }

    #[test]
    fn numeric_id_cells_decode_as_strings() {
        let (statuses, priorities) = defaults_fixture();
        let defaults = TaskDefaults::from_directories(&statuses, &priorities);
        let decoded = decode_task(&row(json!({"ID": 17, "Title": "Audit"})), defaults).entity;
        assert_eq!(decoded.id, "17");
    }

    #[test]
    fn link_url_containing_delimiter_round_trips() {
        let (statuses, priorities) = defaults_fixture();
        let defaults = TaskDefaults::from_directories(&statuses, &priorities);
        let mut task = sample_task();
        task.reference_links = vec![ReferenceLink::new(
            "Query",
            "https://example.com/search?q=a|b|c",
        )];
        let decoded = decode_task(&encode_task(&task), defaults).entity;
        assert_eq!(decoded.reference_links, task.reference_links);
    }

    #[test]
    fn legacy_bare_url_line_gets_placeholder_title() {
        let (statuses, priorities) = defaults_fixture();
        let defaults = TaskDefaults::from_directories(&statuses, &priorities);
        let decoded = decode_task(
            &row(json!({"ID": "t1", "RefLinks": "http://example.com"})),
            defaults,
        )
        .entity;
        assert_eq!(
            decoded.reference_links,
            vec![ReferenceLink::new("Link", "http://example.com")]
        );
    }

    #[test]
    fn list_cells_drop_empty_lines() {
        let (statuses, priorities) = defaults_fixture();
        let defaults = TaskDefaults::from_directories(&statuses, &priorities);
        let decoded = decode_task(
            &row(json!({"ID": "t1", "Subtasks": "Header\n\nFooter\n"})),
            defaults,
        )
        .entity;
        assert_eq!(decoded.subtasks, vec!["Header", "Footer"]);
    }

    #[test]
    fn dates_renormalize_from_locale_formats() {
        assert_eq!(normalize_date(Some("2025-03-01")), "2025-03-01");
        assert_eq!(normalize_date(Some("3/1/2025")), "2025-03-01");
        assert_eq!(normalize_date(Some("01.03.2025")), "2025-03-01");
        assert_eq!(normalize_date(Some("2025/03/01")), "2025-03-01");
        assert_eq!(normalize_date(Some("Mar 01, 2025")), "2025-03-01");
        assert_eq!(
            normalize_date(Some("2025-03-01T09:30:00.000Z")),
            "2025-03-01"
        );
    }

    #[test]
    fn garbage_dates_fall_back_to_today() {
        let today = normalize_date(None);
        assert_eq!(normalize_date(Some("next tuesday")), today);
        assert_eq!(normalize_date(Some("")), today);
    }

    #[test]
    fn unknown_columns_are_reported_not_fatal() {
        let (statuses, priorities) = defaults_fixture();
        let defaults = TaskDefaults::from_directories(&statuses, &priorities);
        let decoded = decode_task(
            &row(json!({"ID": "t1", "Sprint": "W12", "Points": 5})),
            defaults,
        );
        assert_eq!(decoded.entity.id, "t1");
        let mut ignored = decoded.ignored;
        ignored.sort();
        assert_eq!(ignored, vec!["Points", "Sprint"]);
    }

    #[test]
    fn directory_rows_use_name_as_id() {
        let status = decode_status(&row(json!({"Name": "Doing"}))).entity;
        assert_eq!(status.id, "Doing");

        let priority = decode_priority(&row(json!({"Name": "High"}))).entity;
        assert_eq!(priority.id, "High");
        assert_eq!(priority.color, "bg-gray-100 text-gray-800");

        let project = decode_project(&row(json!({"Name": "Launch", "ColorHex": "#DBEAFE"}))).entity;
        assert_eq!(project.id, "Launch");
        assert_eq!(project.color, "bg-[#DBEAFE]");

        let member = decode_member(&row(json!({"Name": "Bob", "Email": "bob@x.com"}))).entity;
        assert_eq!(member.id, "Bob");
        assert_eq!(member.email, "bob@x.com");
    }

    #[test]
    fn project_encode_strips_presentation_wrapper() {
        let project = Project {
            id: "Launch".to_string(),
            name: "Launch".to_string(),
            color: "bg-[#DCFCE7]".to_string(),
            description: None,
        };
        let encoded = encode_project(&project);
        assert_eq!(encoded.get("ColorHex").as_deref(), Some("#DCFCE7"));
        assert_eq!(encoded.get("Description").as_deref(), Some(""));
    }

    #[test]
    fn member_encode_decode_round_trips() {
        let user = User {
            id: "Bob Smith".to_string(),
            name: "Bob Smith".to_string(),
            email: "bob@company.com".to_string(),
            avatar: "https://ui-avatars.com/api/?name=Bob+Smith&background=random".to_string(),
        };
        let decoded = decode_member(&encode_member(&user)).entity;
        assert_eq!(decoded, user);
    }
}
