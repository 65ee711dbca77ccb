use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::logic::collate::compare_titles;
use crate::state::{SortKey, Topic};

/// What: Parse a backend creation timestamp into a comparable value.
///
/// Inputs:
/// - `raw`: Timestamp string from the backend
///
/// Output:
/// - `Some(NaiveDateTime)` when one of the known formats matches; `None` otherwise.
///
/// Details:
/// - Accepts RFC 3339, RFC 2822 (Flask's default JSON date form), ISO
///   date-times without offset, and bare `YYYY-MM-DD` dates (midnight).
#[must_use]
pub fn parse_creation_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Compare creation dates ascending; unparseable dates sort after every valid one.
fn compare_created(a: &Topic, b: &Topic) -> Ordering {
    match (
        parse_creation_date(&a.creation_date),
        parse_creation_date(&b.creation_date),
    ) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// What: Ordering between two topics for `key`.
///
/// Inputs:
/// - `key`: Active sort key
/// - `a`, `b`: Topics to compare
///
/// Output:
/// - Ordering; descending keys are the exact reverse of their ascending twin,
///   except that unparseable creation dates stay last in both directions.
#[must_use]
pub fn compare_topics(key: SortKey, a: &Topic, b: &Topic) -> Ordering {
    match key {
        SortKey::TitleAsc => compare_titles(&a.title, &b.title),
        SortKey::TitleDesc => compare_titles(&b.title, &a.title),
        SortKey::MembersAsc => a.members().cmp(&b.members()),
        SortKey::MembersDesc => b.members().cmp(&a.members()),
        SortKey::CreatedAsc => compare_created(a, b),
        SortKey::CreatedDesc => match (
            parse_creation_date(&a.creation_date),
            parse_creation_date(&b.creation_date),
        ) {
            (Some(x), Some(y)) => y.cmp(&x),
            _ => compare_created(a, b),
        },
    }
}

/// Stable in-place sort of borrowed topics.
pub fn sort_topic_refs(topics: &mut [&Topic], key: SortKey) {
    topics.sort_by(|a, b| compare_topics(key, a, b));
}

/// Stable in-place sort of owned topics.
pub fn sort_topics(topics: &mut [Topic], key: SortKey) {
    topics.sort_by(|a, b| compare_topics(key, a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::filtered_topics;
    use crate::state::FilterCriteria;
    use crate::test_utils::{sample_topics, topic};

    fn titles(view: &[&Topic]) -> Vec<String> {
        view.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    /// What: Title sort ascending matches a sorted title list; descending is its reverse
    ///
    /// - Input: Sample topics, title-asc then title-desc
    /// - Output: Lexicographic order, then exactly reversed
    fn title_sort_and_reverse() {
        let topics = sample_topics();
        let mut c = FilterCriteria::default();
        c.set_sort_by(Some(SortKey::TitleAsc));
        let asc = titles(&filtered_topics(&topics, &c));
        let mut expected: Vec<String> = topics.iter().map(|t| t.title.clone()).collect();
        expected.sort();
        assert_eq!(asc, expected);

        c.set_sort_by(Some(SortKey::TitleDesc));
        let mut desc = titles(&filtered_topics(&topics, &c));
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    /// What: Member sorts order by team size
    ///
    /// - Input: Team sizes 2, 1, 3, 0
    /// - Output: asc 0,1,2,3; desc 3,2,1,0
    fn members_sort_both_directions() {
        let topics = sample_topics();
        let mut c = FilterCriteria::default();
        c.set_sort_by(Some(SortKey::MembersAsc));
        let asc: Vec<usize> = filtered_topics(&topics, &c).iter().map(|t| t.members()).collect();
        assert_eq!(asc, vec![0, 1, 2, 3]);
        c.set_sort_by(Some(SortKey::MembersDesc));
        let desc: Vec<usize> = filtered_topics(&topics, &c).iter().map(|t| t.members()).collect();
        assert_eq!(desc, vec![3, 2, 1, 0]);
    }

    #[test]
    /// What: Equal keys keep their original relative order
    ///
    /// - Input: Three topics with equal team sizes
    /// - Output: members-asc leaves them in input order
    fn sort_is_stable() {
        let mut topics = vec![topic("a", "Gamma", 1), topic("b", "Alpha", 1), topic("c", "Beta", 1)];
        sort_topics(&mut topics, SortKey::MembersAsc);
        let ids: Vec<String> = topics.iter().map(|t| t.id.to_string()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    /// What: Creation date sort understands the backend's date formats
    ///
    /// - Input: RFC 2822, ISO date-time, bare date, garbage
    /// - Output: Chronological order with the unparseable date last both ways
    fn created_sort_mixed_formats() {
        let mut a = topic("a", "A", 0);
        a.creation_date = "Fri, 03 Jan 2025 10:00:00 GMT".into();
        let mut b = topic("b", "B", 0);
        b.creation_date = "2025-01-01T08:30:00".into();
        let mut c = topic("c", "C", 0);
        c.creation_date = "2025-01-02".into();
        let mut d = topic("d", "D", 0);
        d.creation_date = "yesterday".into();

        let mut topics = vec![d.clone(), a.clone(), c.clone(), b.clone()];
        sort_topics(&mut topics, SortKey::CreatedAsc);
        let ids: Vec<String> = topics.iter().map(|t| t.id.to_string()).collect();
        assert_eq!(ids, vec!["b", "c", "a", "d"]);

        sort_topics(&mut topics, SortKey::CreatedDesc);
        let ids: Vec<String> = topics.iter().map(|t| t.id.to_string()).collect();
        assert_eq!(ids, vec!["a", "c", "b", "d"]);
    }
}
