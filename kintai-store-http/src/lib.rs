//! HTTP backend for the attendance store.
//!
//! Speaks the attendance REST API:
//!   `POST {base}/attendance` with the event JSON body
//!   `GET  {base}/attendance/{user_id}` returning `{ "items": [...] }`
//!
//! The base address comes from the `KINTAI_API_BASE` environment variable;
//! without it neither operation is attempted.

use kintai_core::{AttendanceEvent, AttendanceStore, KintaiError, KintaiResult, ListResponse};

/// Environment variable holding the API base address.
pub const API_BASE_ENV: &str = "KINTAI_API_BASE";

pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        HttpStore {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Read the base address from `KINTAI_API_BASE`. A missing or empty
    /// variable is a configuration error, surfaced before any request.
    pub fn from_env() -> KintaiResult<Self> {
        Self::from_base(std::env::var(API_BASE_ENV).ok())
    }

    fn from_base(base_url: Option<String>) -> KintaiResult<Self> {
        match base_url {
            Some(url) if !url.trim().is_empty() => Ok(Self::new(url)),
            _ => Err(KintaiError::Config(format!(
                "{API_BASE_ENV} is not set; export it with the attendance API base address"
            ))),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl AttendanceStore for HttpStore {
    async fn append(&self, event: &AttendanceEvent) -> KintaiResult<()> {
        let response = self
            .client
            .post(self.endpoint("attendance"))
            .json(event)
            .send()
            .await
            .map_err(|e| KintaiError::Store(format!("append request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(KintaiError::Store(format!(
                "append rejected with status {}",
                response.status()
            )));
        }

        Ok(())
    }

    async fn list(&self, user_id: &str) -> KintaiResult<Vec<AttendanceEvent>> {
        let response = self
            .client
            .get(self.endpoint(&format!("attendance/{user_id}")))
            .send()
            .await
            .map_err(|e| KintaiError::Store(format!("list request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(KintaiError::Store(format!(
                "list rejected with status {}",
                response.status()
            )));
        }

        let body: ListResponse = response
            .json()
            .await
            .map_err(|e| KintaiError::Store(format!("failed to parse list response: {e}")))?;

        Ok(body.items)
    }
}
