//! User-edited criteria for the topic list.

use crate::state::types::SortKey;

/// Filter and sort criteria applied to a topic list.
///
/// Every field is independent. The default value is the identity filter:
/// nothing is narrowed and insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title and supervisor.
    pub search_query: String,
    /// Ordering applied after filtering; `None` keeps input order.
    pub sort_by: Option<SortKey>,
    /// Keep only topics still accepting members.
    pub show_open_only: bool,
    /// Keep only approved topics.
    pub show_approved_only: bool,
    /// Inclusive lower bound on team size.
    pub min_members: Option<i64>,
    /// Inclusive upper bound on team size. `Some(0)` matches empty teams.
    pub max_members: Option<i64>,
}

impl FilterCriteria {
    /// Replace the search text.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    /// Replace the sort key.
    pub const fn set_sort_by(&mut self, key: Option<SortKey>) {
        self.sort_by = key;
    }

    /// Toggle the open-only clause.
    pub const fn set_show_open_only(&mut self, on: bool) {
        self.show_open_only = on;
    }

    /// Toggle the approved-only clause.
    pub const fn set_show_approved_only(&mut self, on: bool) {
        self.show_approved_only = on;
    }

    /// Replace the lower team-size bound. Negative values are accepted.
    pub const fn set_min_members(&mut self, n: Option<i64>) {
        self.min_members = n;
    }

    /// Replace the upper team-size bound. Negative values match nothing.
    pub const fn set_max_members(&mut self, n: Option<i64>) {
        self.max_members = n;
    }

    /// Whether these criteria narrow or reorder anything.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self == &Self::default()
    }
}
