use std::time::Duration;

use yuletide_geolocation::PositionOptions;

/// Where reports go unless told otherwise. A throwaway echo service.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Sent with every report so the receiving end knows why it got the data.
pub const DEFAULT_PURPOSE: &str = "Christmas surprise delivery";

/// The configuration for the share flow.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub(crate) endpoint: String,
    pub(crate) position: PositionOptions,
    pub(crate) purpose: String,
}

impl Config {
    /// Initializes a new `Config` with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the collection endpoint that receives the POSTed report.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replace the options handed to the geolocation capability.
    pub fn with_position_options(mut self, options: PositionOptions) -> Self {
        self.position = options;
        self
    }

    /// Set how long the platform may take to produce a position.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.position.timeout = timeout;
        self
    }

    /// Set the purpose string carried by every report.
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn position_options(&self) -> &PositionOptions {
        &self.position
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            position: PositionOptions::default(),
            purpose: DEFAULT_PURPOSE.to_string(),
        }
    }
}
