//! Plain-text tables for terminal output, padded by display width.

use std::fmt::Write as _;

use diploma_teams::logic::{non_standard_topics, standard_topics};
use diploma_teams::state::{BackendUser, PendingTopic, Role, Topic};
use diploma_teams::util::{pad_to_width, short_date};

/// Column widths for the topic table.
const TOPIC_COLS: [usize; 6] = [6, 40, 28, 9, 10, 10];

/// Join cells padded to `widths`, trimming trailing spaces.
fn row(cells: &[&str], widths: &[usize]) -> String {
    let mut line = String::new();
    for (cell, w) in cells.iter().zip(widths) {
        line.push_str(&pad_to_width(cell, *w));
        line.push(' ');
    }
    line.trim_end().to_string()
}

/// What: Render topics as a table.
///
/// Inputs:
/// - `topics`: Rows in display order
///
/// Output:
/// - Header plus one line per topic, or a short notice when empty.
pub fn render_topics<'a>(topics: impl IntoIterator<Item = &'a Topic>) -> String {
    let mut out = row(
        &["ID", "TITLE", "SUPERVISOR", "TEAM", "STATUS", "CREATED"],
        &TOPIC_COLS,
    );
    let mut count = 0usize;
    for t in topics {
        count += 1;
        let team = format!(
            "{}/{}{}",
            t.members(),
            t.max_members,
            if t.is_open { "" } else { " x" }
        );
        let created = short_date(&t.creation_date);
        out.push('\n');
        out.push_str(&row(
            &[
                t.id.as_str(),
                &t.title,
                &t.supervisor.display_name(),
                &team,
                t.status.label(),
                &created,
            ],
            &TOPIC_COLS,
        ));
    }
    if count == 0 {
        return "No topics match.".to_string();
    }
    out
}

/// Render one topic with its team.
pub fn render_topic_detail(t: &Topic) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", t.id, t.title);
    let _ = writeln!(out, "Supervisor: {}", t.supervisor.display_name());
    let _ = writeln!(
        out,
        "Status:     {}{}",
        t.status.label(),
        if t.is_open { ", open" } else { ", closed" }
    );
    let _ = writeln!(
        out,
        "Team:       {}/{}{}",
        t.members(),
        t.max_members,
        if t.is_standard { "" } else { " (non-standard)" }
    );
    if !t.creation_date.is_empty() {
        let _ = writeln!(out, "Created:    {}", short_date(&t.creation_date));
    }
    if !t.description.trim().is_empty() {
        let _ = writeln!(out, "\n{}", t.description.trim());
    }
    for s in &t.team {
        let _ = writeln!(out, "  - {} ({})", s.full_name, s.student_index);
    }
    out.trim_end().to_string()
}

/// Column widths for pending tables.
const PENDING_COLS: [usize; 4] = [6, 44, 28, 8];

/// Render one pending bucket under `heading`.
fn render_pending_bucket<'a>(
    heading: &str,
    topics: impl Iterator<Item = &'a PendingTopic>,
    with_justification: bool,
) -> String {
    let mut out = format!("{heading}\n");
    out.push_str(&row(&["ID", "TITLE", "SUPERVISOR", "STUDENTS"], &PENDING_COLS));
    let mut any = false;
    for t in topics {
        any = true;
        out.push('\n');
        out.push_str(&row(
            &[
                t.id.as_str(),
                &t.title,
                &t.teacher(),
                &t.student_count.to_string(),
            ],
            &PENDING_COLS,
        ));
        if with_justification
            && let Some(j) = t.topic_justification.as_deref().filter(|j| !j.trim().is_empty())
        {
            let _ = write!(out, "\n       justification: {}", j.trim());
        }
    }
    if !any {
        out.push_str("\n(none)");
    }
    out
}

/// What: Render the approval queue split into its two buckets.
///
/// Inputs:
/// - `topics`: Pending queue
///
/// Output:
/// - Standard topics (bulk-approvable) followed by non-standard ones with justifications.
pub fn render_pending(topics: &[PendingTopic]) -> String {
    let standard = render_pending_bucket(
        "Standard topics (bulk approval available)",
        standard_topics(topics),
        false,
    );
    let non_standard = render_pending_bucket(
        "Non-standard topics (review individually)",
        non_standard_topics(topics),
        true,
    );
    format!("{standard}\n\n{non_standard}")
}

/// Render accounts with raw and mapped roles.
pub fn render_users(users: &[BackendUser]) -> String {
    const COLS: [usize; 3] = [6, 32, 24];
    let mut out = row(&["ID", "NAME", "ROLE"], &COLS);
    for u in users {
        let role = Role::from_backend_or_student(&u.role);
        let shown = if Role::from_backend(&u.role).is_some() {
            role.as_config_key().to_string()
        } else {
            format!("{} ({})", role.as_config_key(), u.role)
        };
        out.push('\n');
        out.push_str(&row(
            &[&u.user_id.to_string(), u.name.as_deref().unwrap_or("-"), &shown],
            &COLS,
        ));
    }
    out
}
