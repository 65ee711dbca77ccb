//! REST implementation of [`TopicBackend`] on top of `reqwest`.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::{Result, TopicBackend};
use crate::config::Settings;
use crate::state::{BackendUser, NewTopic, PendingTopic, Topic, TopicId};

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    /// Shared client with connection pooling.
    client: Client,
    /// API root, always ending with `/`.
    base: Url,
}

impl HttpBackend {
    /// What: Build a backend client for `api_url`.
    ///
    /// Inputs:
    /// - `api_url`: API root, e.g. `http://localhost:5000/api`
    /// - `connect_timeout`, `timeout`: Client timeouts
    ///
    /// Output:
    /// - `Ok(HttpBackend)`; `Err` when the URL does not parse or the client cannot be built.
    ///
    /// # Errors
    /// - Invalid `api_url`
    /// - TLS/client initialization failure
    pub fn new(api_url: &str, connect_timeout: Duration, timeout: Duration) -> Result<Self> {
        let mut root = api_url.trim().to_string();
        if !root.ends_with('/') {
            root.push('/');
        }
        let base = Url::parse(&root).map_err(|e| format!("invalid api_url {api_url:?}: {e}"))?;
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .user_agent(format!("diploma-teams/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {e}"))?;
        Ok(Self { client, base })
    }

    /// Build a backend client from loaded settings.
    ///
    /// # Errors
    /// - See [`HttpBackend::new`]
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            &settings.api_url,
            Duration::from_secs(settings.connect_timeout_secs),
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    /// API root this client talks to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// What: Resolve an endpoint path against the API root.
    ///
    /// Inputs:
    /// - `segments`: Path segments, each percent-encoded as needed
    ///
    /// Output:
    /// - Absolute URL; `Err` only if the base cannot carry a path.
    ///
    /// # Errors
    /// - Base URL is not hierarchical (e.g. `mailto:`)
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| format!("api_url {} cannot be a base", self.base))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    /// GET `url` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");
        let resp = self.client.get(url.clone()).send().await?;
        let resp = ensure_success(resp, &url).await?;
        Ok(resp.json::<T>().await?)
    }

    /// POST `body` as JSON to `url`, expecting a success status.
    async fn post_json<B: serde::Serialize + Sync>(&self, url: Url, body: &B) -> Result<Response> {
        debug!(%url, "POST");
        let resp = self.client.post(url.clone()).json(body).send().await?;
        ensure_success(resp, &url).await
    }
}

/// What: Turn a non-success HTTP status into an error.
///
/// Inputs:
/// - `resp`: Response to check
/// - `url`: Request URL for the log line
///
/// Output:
/// - The response unchanged on 2xx; `Err` with status and a body preview otherwise.
///
/// # Errors
/// - Any non-2xx status
async fn ensure_success(resp: Response, url: &Url) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let preview: String = body.chars().take(300).collect();
    warn!(
        status = status.as_u16(),
        %url,
        %preview,
        "backend returned non-success status"
    );
    Err(describe_status(status, &body).into())
}

/// What: One-line message for a failed backend call.
///
/// Inputs:
/// - `status`: HTTP status
/// - `body`: Response body, possibly a JSON `{"error": "..."}` object
///
/// Output:
/// - `"backend status 404 Not Found: <error>"` style message.
#[must_use]
pub fn describe_status(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .or_else(|| v.get("message"))
                .and_then(|m| m.as_str().map(str::to_string))
        });
    match detail {
        Some(d) if !d.trim().is_empty() => format!("backend status {status}: {}", d.trim()),
        _ => format!("backend status {status}"),
    }
}

/// What: Decode a JSON array record by record.
///
/// Inputs:
/// - `values`: Raw array elements
/// - `what`: Record kind for log lines
///
/// Output:
/// - Every record that decodes; malformed ones are logged and skipped.
fn decode_records<T: DeserializeOwned>(values: Vec<serde_json::Value>, what: &str) -> Vec<T> {
    let total = values.len();
    let mut out = Vec::with_capacity(total);
    for (index, value) in values.into_iter().enumerate() {
        let id = value.get("id").map(ToString::to_string).unwrap_or_default();
        match serde_json::from_value::<T>(value) {
            Ok(record) => out.push(record),
            Err(e) => warn!(kind = what, index, id = %id, error = %e, "skipping malformed record"),
        }
    }
    if out.len() < total {
        warn!(kind = what, kept = out.len(), total, "some records could not be decoded");
    }
    out
}

impl TopicBackend for HttpBackend {
    async fn list_topics(&self) -> Result<Vec<Topic>> {
        let url = self.endpoint(&["topics"])?;
        let raw: Vec<serde_json::Value> = self.get_json(url).await?;
        let topics: Vec<Topic> = decode_records(raw, "topic");
        info!(count = topics.len(), "fetched topics");
        Ok(topics)
    }

    async fn list_pending_topics(&self) -> Result<Vec<PendingTopic>> {
        let url = self.endpoint(&["topics", "pending"])?;
        let raw: Vec<serde_json::Value> = self.get_json(url).await?;
        let topics: Vec<PendingTopic> = decode_records(raw, "pending topic");
        info!(count = topics.len(), "fetched pending topics");
        Ok(topics)
    }

    async fn approve_topic(&self, id: &TopicId) -> Result<()> {
        let url = self.endpoint(&["topics", id.as_str(), "approve"])?;
        self.post_json(url, &serde_json::json!({})).await?;
        info!(topic = %id, "topic approved");
        Ok(())
    }

    async fn approve_topics_bulk(&self, ids: &[TopicId]) -> Result<()> {
        let url = self.endpoint(&["topics", "approve-bulk"])?;
        self.post_json(url, &serde_json::json!({ "ids": ids }))
            .await?;
        info!(count = ids.len(), "topics approved in bulk");
        Ok(())
    }

    async fn reject_topic(&self, id: &TopicId, reason: &str) -> Result<()> {
        let url = self.endpoint(&["topics", id.as_str(), "reject"])?;
        self.post_json(url, &serde_json::json!({ "reason": reason }))
            .await?;
        info!(topic = %id, "topic rejected");
        Ok(())
    }

    async fn get_topic(&self, id: &TopicId) -> Result<Option<Topic>> {
        let url = self.endpoint(&["topics", id.as_str()])?;
        debug!(%url, "GET");
        let resp = self.client.get(url.clone()).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = ensure_success(resp, &url).await?;
        Ok(Some(resp.json::<Topic>().await?))
    }

    async fn create_topic(&self, topic: &NewTopic) -> Result<Topic> {
        let url = self.endpoint(&["topics"])?;
        let resp = self.post_json(url, topic).await?;
        let created: Topic = resp.json().await?;
        info!(topic = %created.id, title = %created.title, "topic created");
        Ok(created)
    }

    async fn list_users(&self) -> Result<Vec<BackendUser>> {
        let url = self.endpoint(&["users"])?;
        self.get_json(url).await
    }
}
