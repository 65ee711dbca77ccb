//! Core value types used by diploma-teams state.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque backend record identifier.
///
/// The backend sends numeric ids for database rows and string ids in some
/// projections. The text is the identity; the wire form it arrived in is
/// remembered so it is written back unchanged (`"007"` stays a string, `7`
/// stays a number).
#[derive(Clone, Debug, Default)]
pub struct RecordId {
    /// Textual form, used for equality, ordering and URLs.
    text: String,
    /// Whether the backend sent a JSON number.
    numeric: bool,
}

/// Identifier of a topic.
pub type TopicId = RecordId;

impl RecordId {
    /// Build a textual id.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            text: raw.into(),
            numeric: false,
        }
    }

    /// Borrow the textual form of the id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the id travels as a JSON number.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.numeric
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for RecordId {}

impl std::hash::Hash for RecordId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for RecordId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RecordId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self {
            text: value.to_string(),
            numeric: true,
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self {
            text: value.to_string(),
            numeric: true,
        }
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.numeric {
            if let Ok(n) = self.text.parse::<i64>() {
                return serializer.serialize_i64(n);
            }
            if let Ok(n) = self.text.parse::<u64>() {
                return serializer.serialize_u64(n);
            }
        }
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Signed(i64),
            Unsigned(u64),
            Text(String),
        }
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Signed(n) => Self::from(n),
            Raw::Unsigned(n) => Self::from(n),
            Raw::Text(s) => Self::new(s),
        })
    }
}

/// Approval status of a topic as reported by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopicStatus {
    /// Approved by the program committee.
    #[serde(rename = "ZATWIERDZONY")]
    Approved,
    /// Rejected by the program committee.
    #[serde(rename = "ODRZUCONY")]
    Rejected,
    /// Waiting for a committee decision.
    #[serde(rename = "OCZEKUJACY")]
    Pending,
}

impl TopicStatus {
    /// Wire name of the status.
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Approved => "ZATWIERDZONY",
            Self::Rejected => "ODRZUCONY",
            Self::Pending => "OCZEKUJACY",
        }
    }

    /// Short english label for terminal output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Pending => "pending",
        }
    }
}

/// Supervising teacher of a topic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supervisor {
    /// Backend identifier of the supervisor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Academic title, e.g. "dr" or "Prof".
    #[serde(default)]
    pub title: String,
    /// Full display name.
    #[serde(default)]
    pub full_name: String,
}

impl Supervisor {
    /// Title and name joined the way lists display them.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.title, self.full_name)
    }
}

/// Student enrolled in a topic team.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Backend identifier of the student.
    pub id: RecordId,
    /// Full display name.
    #[serde(default)]
    pub full_name: String,
    /// University index number.
    #[serde(default)]
    pub student_index: String,
}

/// Proposed or ongoing diploma project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Stable identifier.
    pub id: TopicId,
    /// Display title, used for search and sorting.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Supervising teacher.
    #[serde(default)]
    pub supervisor: Supervisor,
    /// Committee decision state.
    pub status: TopicStatus,
    /// Whether the team still accepts members.
    #[serde(default)]
    pub is_open: bool,
    /// Whether the topic uses the default team size.
    #[serde(default = "default_true")]
    pub is_standard: bool,
    /// Current members in join order.
    #[serde(default)]
    pub team: Vec<Student>,
    /// Declared team capacity.
    #[serde(default = "default_max_members")]
    pub max_members: u32,
    /// Creation timestamp as sent by the backend.
    #[serde(default)]
    pub creation_date: String,
}

/// Serde default for `is_standard`.
const fn default_true() -> bool {
    true
}

/// Serde default for `max_members`.
const fn default_max_members() -> u32 {
    crate::logic::STANDARD_TEAM_SIZE
}

impl Topic {
    /// Number of team slots in use.
    #[must_use]
    pub fn members(&self) -> usize {
        self.team.len()
    }
}

/// Reduced projection of a topic used by the approval queue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTopic {
    /// Stable identifier.
    pub id: TopicId,
    /// Display title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Committee decision state.
    pub status: TopicStatus,
    /// Reason given for a non-default team size.
    #[serde(default)]
    pub topic_justification: Option<String>,
    /// Academic title of the supervisor.
    #[serde(default)]
    pub teacher_title: String,
    /// Full name of the supervisor.
    #[serde(default)]
    pub teacher_full_name: String,
    /// Declared number of students.
    pub student_count: u32,
}

impl PendingTopic {
    /// Supervisor title and name as a single line.
    #[must_use]
    pub fn teacher(&self) -> String {
        format!("{} {}", self.teacher_title, self.teacher_full_name)
    }
}

/// Payload for creating a new topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTopic {
    /// Display title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Whether the topic uses the default team size.
    pub is_standard: bool,
    /// Declared team capacity.
    pub max_members: u32,
}

impl NewTopic {
    /// What: Build a creation payload, deriving `is_standard` from the capacity.
    ///
    /// Inputs:
    /// - `title`, `description`: Topic text
    /// - `max_members`: Declared capacity
    ///
    /// Output:
    /// - Payload with `is_standard` set iff capacity equals the default team size.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, max_members: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            is_standard: max_members == crate::logic::STANDARD_TEAM_SIZE,
            max_members,
        }
    }
}

/// Account summary returned by the users endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendUser {
    /// Account identifier.
    pub user_id: u64,
    /// Display name when known.
    #[serde(default)]
    pub name: Option<String>,
    /// Raw backend role string, e.g. `KPK_MEMBER`.
    pub role: String,
}

/// Sorting key for topic lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Title, locale-aware ascending.
    TitleAsc,
    /// Title, locale-aware descending.
    TitleDesc,
    /// Team size ascending.
    MembersAsc,
    /// Team size descending.
    MembersDesc,
    /// Creation date, oldest first.
    CreatedAsc,
    /// Creation date, newest first.
    CreatedDesc,
}

impl SortKey {
    /// Return the config/CLI key for this sort key.
    #[must_use]
    pub const fn as_config_key(&self) -> &'static str {
        match self {
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
            Self::MembersAsc => "members-asc",
            Self::MembersDesc => "members-desc",
            Self::CreatedAsc => "created-asc",
            Self::CreatedDesc => "created-desc",
        }
    }

    /// Parse a sort key from its config key. Accepts underscores as separators.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "title-asc" | "title" => Some(Self::TitleAsc),
            "title-desc" => Some(Self::TitleDesc),
            "members-asc" | "members" => Some(Self::MembersAsc),
            "members-desc" => Some(Self::MembersDesc),
            "created-asc" | "oldest" => Some(Self::CreatedAsc),
            "created-desc" | "newest" => Some(Self::CreatedDesc),
            _ => None,
        }
    }
}
