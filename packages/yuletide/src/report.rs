//! Forwarding a consented position to the collection endpoint.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yuletide_geolocation::{client_descriptor, Coordinates};

/// The record sent once per successful permission grant.
///
/// It is built right before transmission and dropped right after; nothing
/// about it is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationReport {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "timestamp")]
    pub captured_at: DateTime<Utc>,
    #[serde(rename = "userAgent")]
    pub client_descriptor: String,
    pub purpose: String,
}

impl LocationReport {
    pub fn new(coordinates: Coordinates, purpose: impl Into<String>) -> Self {
        Self {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            captured_at: Utc::now(),
            client_descriptor: client_descriptor(),
            purpose: purpose.into(),
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to reach the collection endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("collection endpoint answered with {0}")]
    Status(reqwest::StatusCode),
}

/// Delivers a [`LocationReport`] somewhere.
///
/// Implementations make a single attempt and never retry.
#[async_trait(?Send)]
pub trait Reporter {
    async fn submit(&self, report: &LocationReport) -> Result<(), ReportError>;
}

/// POSTs the report as JSON and judges the outcome by status code alone.
#[derive(Debug, Clone)]
pub struct HttpReporter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpReporter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl Reporter for HttpReporter {
    async fn submit(&self, report: &LocationReport) -> Result<(), ReportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(report)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::Status(status));
        }

        tracing::debug!(endpoint = %self.endpoint, %status, "location report accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_uses_page_field_names() {
        let report = LocationReport::new(Coordinates::new(51.5074, -0.1278), "testing");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["latitude"], 51.5074);
        assert_eq!(json["longitude"], -0.1278);
        assert_eq!(json["purpose"], "testing");
        assert!(json["userAgent"].as_str().is_some_and(|ua| !ua.is_empty()));
        assert!(json["timestamp"].as_str().is_some_and(|ts| ts.ends_with('Z')));
        assert_eq!(json.as_object().map(|o| o.len()), Some(5));
    }
}
