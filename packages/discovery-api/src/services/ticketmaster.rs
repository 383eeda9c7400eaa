use anyhow::{anyhow, Result};
use axum::http::StatusCode;
use serde_json::Value;
use std::time::Duration;

use crate::config::Config;
use crate::models::{ApiError, SearchRequest};

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(15);

/// Thin client over the upstream discovery API. Holds one reqwest
/// client for the process lifetime; responses are passed through as
/// opaque JSON.
#[derive(Debug, Clone)]
pub struct TicketmasterClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TicketmasterClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("discovery-api/", env!("CARGO_PKG_VERSION")))
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            api_key: config.tm_api_key.clone(),
            base_url: config.ticketmaster_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `{base}/events.json` with the validated search parameters.
    pub async fn search_events(&self, request: &SearchRequest) -> Result<Value, ApiError> {
        let mut query: Vec<(&str, &str)> = vec![
            ("apikey", self.api_key.as_str()),
            ("keyword", request.keyword.as_str()),
            ("geoPoint", request.geo_point.as_str()),
            ("radius", request.distance.as_str()),
            ("unit", "miles"),
            ("size", "20"),
        ];
        if let Some(segment_id) = request.segment_id {
            query.push(("segmentId", segment_id));
        }

        let url = format!("{}/events.json", self.base_url);
        self.fetch_json(&url, &query, "Failed to fetch events").await
    }

    /// GET `{base}/events/{id}.json`.
    pub async fn event_details(&self, id: &str) -> Result<Value, ApiError> {
        let url = format!("{}/events/{}.json", self.base_url, id);
        let query = [("apikey", self.api_key.as_str())];
        self.fetch_json(&url, &query, "Failed to fetch event details")
            .await
    }

    /// GET `{base}/venues.json`.
    pub async fn search_venues(&self, keyword: &str) -> Result<Value, ApiError> {
        let url = format!("{}/venues.json", self.base_url);
        let query = [("apikey", self.api_key.as_str()), ("keyword", keyword)];
        self.fetch_json(&url, &query, "Failed to fetch venue details")
            .await
    }

    async fn fetch_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
        failure_message: &'static str,
    ) -> Result<Value, ApiError> {
        tracing::debug!("Forwarding GET {}", url);

        let response = self.http.get(url).query(query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Upstream returned HTTP {} for {}", status, url);
            return Err(ApiError::Upstream {
                status: StatusCode::from_u16(status.as_u16())
                    .unwrap_or(StatusCode::BAD_GATEWAY),
                message: failure_message,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse upstream response: {}", e))?;

        Ok(body)
    }
}
