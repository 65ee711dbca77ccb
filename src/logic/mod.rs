//! Core non-UI logic: topic filtering, sorting and approval-queue buckets.

pub mod buckets;
pub mod collate;
pub mod filter;
pub mod sort;

// Re-export public APIs so callers can use crate::logic::...
pub use buckets::{Bucket, STANDARD_TEAM_SIZE, bucket_of, non_standard_topics, standard_topics};
pub use collate::compare_titles;
pub use filter::{apply_filters_and_sort_preserve_selection, filtered_topics, matches_criteria};
pub use sort::{compare_topics, parse_creation_date, sort_topic_refs, sort_topics};
