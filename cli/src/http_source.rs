// SPDX-FileCopyrightText: 2026 Huddle Developers
//
// SPDX-License-Identifier: Apache-2.0

//! [`MeetingSource`] backed by the Huddle HTTP API.

use async_trait::async_trait;
use huddle_core::{CalendarError, Meeting, MeetingSource};
use reqwest::Client;

use crate::config::Config;

/// Fetches meetings from the backend, one month per request.
#[derive(Debug)]
pub struct HttpMeetingSource {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpMeetingSource {
    /// Creates a new HTTP meeting source from the configuration.
    pub fn new(config: &Config) -> Result<Self, CalendarError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("huddle/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CalendarError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }
}

#[async_trait]
impl MeetingSource for HttpMeetingSource {
    async fn fetch_month(&self, year: i32, month: u32) -> Result<Vec<Meeting>, CalendarError> {
        let url = format!("{}/meetings?year={year}&month={month}", self.base_url);
        tracing::debug!(%url, "fetching meetings");

        let mut req = self.client.get(&url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| CalendarError::Fetch(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response".to_string());
            return Err(CalendarError::Fetch(format!("{status}: {body}")));
        }

        resp.json::<Vec<Meeting>>()
            .await
            .map_err(|e| CalendarError::InvalidResponse(e.to_string()))
    }
}
