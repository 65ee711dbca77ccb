//! State of the browsable topic list.

use crate::state::filters::FilterCriteria;
use crate::state::types::Topic;

/// Full topic list, the derived view, and the list cursor.
#[derive(Debug, Clone, Default)]
pub struct TopicListState {
    /// Everything loaded from the backend, in backend order.
    pub all_topics: Vec<Topic>,
    /// Filtered and sorted view of `all_topics`.
    pub results: Vec<Topic>,
    /// Current criteria.
    pub criteria: FilterCriteria,
    /// Cursor into `results`; `None` when `results` is empty.
    pub selected: Option<usize>,
}

impl TopicListState {
    /// What: Build list state and derive the initial view.
    ///
    /// Inputs:
    /// - `topics`: Full list from the backend
    /// - `criteria`: Starting criteria (usually from settings)
    ///
    /// Output:
    /// - State with `results` computed and cursor on the first row.
    #[must_use]
    pub fn new(topics: Vec<Topic>, criteria: FilterCriteria) -> Self {
        let mut state = Self {
            all_topics: topics,
            criteria,
            ..Self::default()
        };
        crate::logic::apply_filters_and_sort_preserve_selection(&mut state);
        state
    }

    /// Topic under the cursor.
    #[must_use]
    pub fn selected_topic(&self) -> Option<&Topic> {
        self.selected.and_then(|i| self.results.get(i))
    }
}
