use crate::state::{FilterCriteria, Topic, TopicListState, TopicStatus};

/// What: Decide whether a topic passes every active clause of `criteria`.
///
/// Inputs:
/// - `topic`: Candidate topic
/// - `criteria`: Current filter criteria
///
/// Output:
/// - `true` when the topic is kept.
///
/// Details:
/// - Clauses are AND-combined; an empty query, `None` bound or `false` flag is skipped.
/// - Search matches the title or `"{supervisor.title} {supervisor.full_name}"`, case-insensitively.
/// - Bounds compare against the team length as `i64`, so negative bounds are legal.
#[must_use]
pub fn matches_criteria(topic: &Topic, criteria: &FilterCriteria) -> bool {
    if !criteria.search_query.is_empty() {
        let q = criteria.search_query.to_lowercase();
        let in_title = topic.title.to_lowercase().contains(&q);
        let in_supervisor = topic
            .supervisor
            .display_name()
            .to_lowercase()
            .contains(&q);
        if !in_title && !in_supervisor {
            return false;
        }
    }
    if criteria.show_open_only && !topic.is_open {
        return false;
    }
    if criteria.show_approved_only && topic.status != TopicStatus::Approved {
        return false;
    }
    let members = i64::try_from(topic.members()).unwrap_or(i64::MAX);
    if let Some(min) = criteria.min_members
        && members < min
    {
        return false;
    }
    if let Some(max) = criteria.max_members
        && members > max
    {
        return false;
    }
    true
}

/// What: Derive the filtered and sorted view of `topics`.
///
/// Inputs:
/// - `topics`: Full list in backend order
/// - `criteria`: Current filter criteria
///
/// Output:
/// - References to the kept topics, sorted by `criteria.sort_by`.
///
/// Details:
/// - Pure: the input is not reordered or mutated. Same inputs give the same output.
/// - With `sort_by == None` the kept topics stay in their original relative order.
#[must_use]
pub fn filtered_topics<'a>(topics: &'a [Topic], criteria: &FilterCriteria) -> Vec<&'a Topic> {
    let mut kept: Vec<&Topic> = topics
        .iter()
        .filter(|t| matches_criteria(t, criteria))
        .collect();
    if let Some(key) = criteria.sort_by {
        crate::logic::sort::sort_topic_refs(&mut kept, key);
    }
    kept
}

/// What: Re-derive `state.results` from `state.all_topics`, keeping the cursor on the same topic.
///
/// Inputs:
/// - `state`: Mutable list state with `all_topics`, `criteria` and cursor
///
/// Output:
/// - Updates `state.results` and `state.selected`.
///
/// Details:
/// - Cursor follows the previously selected topic by id when it survives the filter.
/// - Otherwise it is clamped to the new length, or cleared when the view is empty.
pub fn apply_filters_and_sort_preserve_selection(state: &mut TopicListState) {
    let prev_id = state.selected_topic().map(|t| t.id.clone());

    state.results = filtered_topics(&state.all_topics, &state.criteria)
        .into_iter()
        .cloned()
        .collect();

    if state.results.is_empty() {
        state.selected = None;
        return;
    }
    let last = state.results.len() - 1;
    state.selected = match prev_id {
        Some(id) => state
            .results
            .iter()
            .position(|t| t.id == id)
            .or_else(|| state.selected.map(|i| i.min(last))),
        None => Some(state.selected.unwrap_or(0).min(last)),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SortKey;
    use crate::test_utils::{sample_topics, topic};

    fn ids(view: &[&Topic]) -> Vec<String> {
        view.iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    /// What: Identity criteria return the input unchanged
    ///
    /// - Input: Four sample topics, default criteria
    /// - Output: Same ids in the same order
    fn identity_filter_keeps_everything_in_order() {
        let topics = sample_topics();
        let view = filtered_topics(&topics, &FilterCriteria::default());
        assert_eq!(ids(&view), vec!["1", "2", "3", "4"]);
    }

    #[test]
    /// What: Search hits title or supervisor and ignores case
    ///
    /// - Input: "machine", "ADVANCED"/"advanced", "prof", "nonexistent"
    /// - Output: Matching ids only; case variants agree
    fn search_matches_title_or_supervisor() {
        let topics = sample_topics();
        let mut c = FilterCriteria::default();

        c.set_search_query("machine");
        assert_eq!(ids(&filtered_topics(&topics, &c)), vec!["1"]);

        c.set_search_query("ADVANCED");
        let upper = ids(&filtered_topics(&topics, &c));
        c.set_search_query("advanced");
        assert_eq!(upper, ids(&filtered_topics(&topics, &c)));
        assert_eq!(upper, vec!["1"]);

        c.set_search_query("prof");
        assert_eq!(ids(&filtered_topics(&topics, &c)), vec!["2"]);

        c.set_search_query("michael");
        assert_eq!(ids(&filtered_topics(&topics, &c)), vec!["4"]);

        c.set_search_query("nonexistent");
        assert!(filtered_topics(&topics, &c).is_empty());

        c.set_search_query("");
        assert_eq!(filtered_topics(&topics, &c).len(), 4);
    }

    #[test]
    /// What: Open-only and approved-only combine with AND
    ///
    /// - Input: Sample topics with independent open/status flags
    /// - Output: 3 open, 3 approved, 2 both
    fn open_and_approved_flags_combine() {
        let topics = sample_topics();
        let mut c = FilterCriteria::default();
        c.set_show_open_only(true);
        assert_eq!(ids(&filtered_topics(&topics, &c)), vec!["1", "3", "4"]);
        c.set_show_open_only(false);
        c.set_show_approved_only(true);
        assert_eq!(ids(&filtered_topics(&topics, &c)), vec!["1", "2", "4"]);
        c.set_show_open_only(true);
        assert_eq!(ids(&filtered_topics(&topics, &c)), vec!["1", "4"]);
    }

    #[test]
    /// What: Team-size bounds from the worked scenario
    ///
    /// - Input: Team sizes 2, 1, 3, 0
    /// - Output: min 2 => {1,3}; max 1 => {2,4}; max 0 => {4}; unset => all
    fn member_bounds_scenario() {
        let topics = sample_topics();
        let mut c = FilterCriteria::default();
        c.set_min_members(Some(2));
        assert_eq!(ids(&filtered_topics(&topics, &c)), vec!["1", "3"]);

        let mut c = FilterCriteria::default();
        c.set_max_members(Some(1));
        assert_eq!(ids(&filtered_topics(&topics, &c)), vec!["2", "4"]);
        c.set_max_members(Some(0));
        assert_eq!(ids(&filtered_topics(&topics, &c)), vec!["4"]);
        c.set_max_members(None);
        assert_eq!(filtered_topics(&topics, &c).len(), 4);

        let mut c = FilterCriteria::default();
        c.set_min_members(Some(1));
        c.set_max_members(Some(2));
        assert_eq!(ids(&filtered_topics(&topics, &c)), vec!["1", "2"]);
    }

    #[test]
    /// What: Disjoint and negative bounds yield nothing without panicking
    ///
    /// - Input: min 2 / max 1; max -1
    /// - Output: Empty view in both cases
    fn disjoint_and_negative_bounds_are_empty() {
        let topics = sample_topics();
        let mut c = FilterCriteria::default();
        c.set_min_members(Some(2));
        c.set_max_members(Some(1));
        assert!(filtered_topics(&topics, &c).is_empty());

        let mut c = FilterCriteria::default();
        c.set_max_members(Some(-1));
        assert!(filtered_topics(&topics, &c).is_empty());
    }

    #[test]
    /// What: Filtering a filtered view again changes nothing
    ///
    /// - Input: Search + open-only + members-desc sort
    /// - Output: Second pass equals first pass
    fn filtering_is_idempotent() {
        let topics = sample_topics();
        let mut c = FilterCriteria::default();
        c.set_search_query("a");
        c.set_show_open_only(true);
        c.set_sort_by(Some(SortKey::MembersDesc));
        let once: Vec<Topic> = filtered_topics(&topics, &c).into_iter().cloned().collect();
        let twice: Vec<Topic> = filtered_topics(&once, &c).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    /// What: Empty input stays empty and special characters search literally
    ///
    /// - Input: No topics; a "C++" titled topic
    /// - Output: Empty view; literal substring hit
    fn empty_input_and_literal_search() {
        let mut c = FilterCriteria::default();
        c.set_search_query("anything");
        assert!(filtered_topics(&[], &c).is_empty());

        let topics = vec![topic("9", "Systems programming in C++", 1)];
        c.set_search_query("C++");
        assert_eq!(filtered_topics(&topics, &c).len(), 1);
    }

    #[test]
    /// What: Re-applying criteria keeps the cursor on the same topic
    ///
    /// - Input: Cursor on topic 3, then open-only, then max 0
    /// - Output: Cursor follows id 3; clamps once it is filtered out; clears on empty
    fn apply_filters_preserves_cursor() {
        let mut state = TopicListState::new(sample_topics(), FilterCriteria::default());
        assert_eq!(state.selected, Some(0));
        state.selected = Some(2);

        state.criteria.set_show_open_only(true);
        apply_filters_and_sort_preserve_selection(&mut state);
        assert_eq!(state.selected_topic().map(|t| t.id.to_string()), Some("3".into()));

        state.criteria.set_max_members(Some(0));
        apply_filters_and_sort_preserve_selection(&mut state);
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.selected, Some(0));

        state.criteria.set_search_query("zzz");
        apply_filters_and_sort_preserve_selection(&mut state);
        assert_eq!(state.selected, None);
    }
}
