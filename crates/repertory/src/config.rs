use std::{env, time::Duration};

/// DynamoDB Local endpoint the script subcommands talk to by default.
pub const LOCAL_ENDPOINT: &str = "http://localhost:8000";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local (default: none)
    pub endpoint_url: Option<String>,
    /// Prefix joined to each collection name to form the table name
    /// (default: "Repertory-")
    pub table_prefix: String,
    /// Per-request timeout for the HTTP server in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (default: none)
    /// - `REPERTORY_TABLE_PREFIX` - Table name prefix (default: "Repertory-")
    /// - `REQUEST_TIMEOUT_SECONDS` - HTTP request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            endpoint_url: env::var("AWS_ENDPOINT_URL").ok().filter(|v| !v.is_empty()),
            table_prefix: env::var("REPERTORY_TABLE_PREFIX")
                .unwrap_or_else(|_| "Repertory-".to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Override the endpoint when one was given on the command line.
    pub fn with_endpoint(mut self, endpoint_url: Option<String>) -> Self {
        if endpoint_url.is_some() {
            self.endpoint_url = endpoint_url;
        }
        self
    }

    /// Fall back to DynamoDB Local when no endpoint is configured.
    pub fn or_local_endpoint(mut self) -> Self {
        if self.endpoint_url.is_none() {
            self.endpoint_url = Some(LOCAL_ENDPOINT.to_string());
        }
        self
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Returns a display string for the store target.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
