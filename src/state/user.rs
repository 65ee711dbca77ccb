//! Current user identity and role permissions.
//!
//! The host passes a [`CurrentUser`] explicitly; nothing here is global.

use tracing::warn;

/// Permission tier of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Student choosing or joining a topic.
    Student,
    /// Member of the program committee (KPK) that approves topics.
    Kpk,
    /// Supervising instructor proposing topics.
    Teacher,
    /// System administrator.
    Administrator,
    /// Subject coordinator.
    Coordinator,
}

impl Role {
    /// What: Strictly map a backend role string to a `Role`.
    ///
    /// Inputs:
    /// - `raw`: Role string as sent by the users endpoint (e.g. `KPK_MEMBER`)
    ///
    /// Output:
    /// - `Some(Role)` for the five known values (case-insensitive), `None` otherwise.
    #[must_use]
    pub fn from_backend(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "STUDENT" => Some(Self::Student),
            "KPK_MEMBER" | "KPK" => Some(Self::Kpk),
            "TEACHER" => Some(Self::Teacher),
            "ADMIN" | "ADMINISTRATOR" => Some(Self::Administrator),
            "COORDINATOR" => Some(Self::Coordinator),
            _ => None,
        }
    }

    /// What: Map a backend role string, defaulting unknown values to `Student`.
    ///
    /// Inputs:
    /// - `raw`: Role string from the backend
    ///
    /// Output:
    /// - Mapped role; `Role::Student` when unrecognized.
    ///
    /// Details:
    /// - An unrecognized value usually means the backend schema drifted, so it
    ///   is logged at warn level with the offending string.
    #[must_use]
    pub fn from_backend_or_student(raw: &str) -> Self {
        Self::from_backend(raw).unwrap_or_else(|| {
            warn!(role = %raw, "unrecognized backend role; treating as student");
            Self::Student
        })
    }

    /// Config key used in `settings.conf` and on the command line.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Kpk => "kpk",
            Self::Teacher => "teacher",
            Self::Administrator => "admin",
            Self::Coordinator => "coordinator",
        }
    }

    /// Parse a role from its config key; backend spellings are accepted too.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Some(Self::Student),
            "kpk" => Some(Self::Kpk),
            "teacher" | "supervisor" => Some(Self::Teacher),
            "admin" | "administrator" => Some(Self::Administrator),
            "coordinator" => Some(Self::Coordinator),
            other => Self::from_backend(other),
        }
    }
}

/// The user on whose behalf the host acts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// Permission tier.
    pub role: Role,
    /// Display name, when known.
    pub name: Option<String>,
}

impl CurrentUser {
    /// User with the given role and no name.
    #[must_use]
    pub const fn with_role(role: Role) -> Self {
        Self { role, name: None }
    }

    /// Whether the user holds any of `roles`.
    #[must_use]
    pub fn has_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }

    /// Whether the user may approve or reject pending topics.
    #[must_use]
    pub fn can_review_topics(&self) -> bool {
        self.has_role(&[Role::Kpk, Role::Administrator])
    }

    /// Whether the user may propose new topics.
    #[must_use]
    pub fn can_create_topics(&self) -> bool {
        self.has_role(&[Role::Teacher, Role::Administrator])
    }
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self::with_role(Role::Student)
    }
}
