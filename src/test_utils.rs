//! Test utilities for common test setup.
//!
//! Shared fixtures used across unit test modules.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::sources::{Result, TopicBackend};
use crate::state::{
    BackendUser, NewTopic, PendingTopic, RecordId, Student, Supervisor, Topic, TopicId,
    TopicStatus,
};

/// What: Build a topic with `members` placeholder students.
///
/// Inputs:
/// - `id`, `title`: Identity and title
/// - `members`: Team size
///
/// Output:
/// - Approved, open topic supervised by "dr Jan Nowak".
pub fn topic(id: &str, title: &str, members: usize) -> Topic {
    Topic {
        id: TopicId::from(id),
        title: title.to_string(),
        description: String::new(),
        supervisor: Supervisor {
            id: None,
            title: "dr".into(),
            full_name: "Jan Nowak".into(),
        },
        status: TopicStatus::Approved,
        is_open: true,
        is_standard: true,
        team: (0..members)
            .map(|i| Student {
                id: RecordId::new(format!("{id}-s{i}")),
                full_name: format!("Student {i}"),
                student_index: format!("S{i:03}"),
            })
            .collect(),
        max_members: 4,
        creation_date: String::new(),
    }
}

/// Build a topic with an explicit supervisor, status and open flag.
fn topic_with(
    id: &str,
    title: &str,
    members: usize,
    supervisor: (&str, &str),
    status: TopicStatus,
    is_open: bool,
) -> Topic {
    let mut t = topic(id, title, members);
    t.supervisor = Supervisor {
        id: None,
        title: supervisor.0.into(),
        full_name: supervisor.1.into(),
    };
    t.status = status;
    t.is_open = is_open;
    t
}

/// What: The four-topic fixture used by the filter and sort tests.
///
/// Output:
/// - Ids 1-4 with team sizes 2, 1, 3, 0; topic 2 closed; topic 3 pending.
pub fn sample_topics() -> Vec<Topic> {
    vec![
        topic_with(
            "1",
            "Advanced Machine Learning",
            2,
            ("Dr", "Dr. John Smith"),
            TopicStatus::Approved,
            true,
        ),
        topic_with(
            "2",
            "Web Application Development",
            1,
            ("Prof", "Prof. Jane Doe"),
            TopicStatus::Approved,
            false,
        ),
        topic_with(
            "3",
            "Mobile Application Design",
            3,
            ("Dr", "Dr. John Smith"),
            TopicStatus::Pending,
            true,
        ),
        topic_with(
            "4",
            "Cloud Computing Infrastructure",
            0,
            ("Dr", "Dr. Michael Chen"),
            TopicStatus::Approved,
            true,
        ),
    ]
}

/// Pending topic with the given declared student count.
pub fn pending(id: &str, student_count: u32) -> PendingTopic {
    PendingTopic {
        id: TopicId::from(id),
        title: format!("Topic {id}"),
        description: String::new(),
        status: TopicStatus::Pending,
        topic_justification: None,
        teacher_title: "dr".into(),
        teacher_full_name: "Anna Kowalska".into(),
        student_count,
    }
}

/// What: Pending queue fixture.
///
/// Output:
/// - Ids 10, 11, 14 standard (4 students); 12 (3) and 13 (5) non-standard.
pub fn pending_queue() -> Vec<PendingTopic> {
    vec![
        pending("10", 4),
        pending("11", 4),
        pending("12", 3),
        pending("13", 5),
        pending("14", 4),
    ]
}

/// In-memory backend that records every call.
///
/// Approve and reject calls remove the topic from the pending queue, so a
/// reload after a mutation observes the change.
#[derive(Debug, Default)]
pub struct MockBackend {
    topics: Vec<Topic>,
    pending: Mutex<Vec<PendingTopic>>,
    calls: Mutex<Vec<String>>,
    pending_loads: AtomicUsize,
    failure: Option<String>,
}

impl MockBackend {
    /// Backend serving `pending` as the approval queue.
    pub fn new(pending: Vec<PendingTopic>) -> Self {
        Self {
            pending: Mutex::new(pending),
            ..Self::default()
        }
    }

    /// Backend whose every call fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Serve `topics` from `list_topics`.
    pub fn with_topics(mut self, topics: Vec<Topic>) -> Self {
        self.topics = topics;
        self
    }

    /// Mutation calls in order, e.g. `"approve 10"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of `list_pending_topics` calls.
    pub fn pending_loads(&self) -> usize {
        self.pending_loads.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(m) => Err(m.clone().into()),
            None => Ok(()),
        }
    }

    fn mutate(&self, call: String, ids: &[TopicId]) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        self.check()?;
        self.pending.lock().unwrap().retain(|t| !ids.contains(&t.id));
        Ok(())
    }
}

impl TopicBackend for MockBackend {
    async fn list_topics(&self) -> Result<Vec<Topic>> {
        self.check()?;
        Ok(self.topics.clone())
    }

    async fn list_pending_topics(&self) -> Result<Vec<PendingTopic>> {
        self.pending_loads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.pending.lock().unwrap().clone())
    }

    async fn approve_topic(&self, id: &TopicId) -> Result<()> {
        self.mutate(format!("approve {id}"), std::slice::from_ref(id))
    }

    async fn approve_topics_bulk(&self, ids: &[TopicId]) -> Result<()> {
        let joined: Vec<&str> = ids.iter().map(TopicId::as_str).collect();
        self.mutate(format!("approve-bulk {}", joined.join(",")), ids)
    }

    async fn reject_topic(&self, id: &TopicId, reason: &str) -> Result<()> {
        self.mutate(format!("reject {id} {reason}"), std::slice::from_ref(id))
    }

    async fn get_topic(&self, id: &TopicId) -> Result<Option<Topic>> {
        self.check()?;
        Ok(self.topics.iter().find(|t| &t.id == id).cloned())
    }

    async fn create_topic(&self, topic: &NewTopic) -> Result<Topic> {
        self.calls.lock().unwrap().push(format!("create {}", topic.title));
        self.check()?;
        let mut created = crate::test_utils::topic("100", &topic.title, 0);
        created.description.clone_from(&topic.description);
        created.status = TopicStatus::Pending;
        created.max_members = topic.max_members;
        created.is_standard = topic.is_standard;
        Ok(created)
    }

    async fn list_users(&self) -> Result<Vec<BackendUser>> {
        self.check()?;
        Ok(vec![
            BackendUser {
                user_id: 1,
                name: Some("Anna Kowalska".into()),
                role: "KPK_MEMBER".into(),
            },
            BackendUser {
                user_id: 2,
                name: None,
                role: "GUEST".into(),
            },
        ])
    }
}
