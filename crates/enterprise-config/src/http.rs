use std::time::Duration;

const DEFAULT_REQUEST_BODY_LIMIT: usize = 2 * 1024 * 1024;

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    /// Timeout for a whole request, no timeout if unset.
    #[serde(deserialize_with = "duration_str::deserialize_option_duration")]
    pub timeout: Option<Duration>,
    /// Maximum size of the request body in bytes.
    pub request_body_limit: usize,
    /// How long in-flight requests may keep running after a shutdown signal.
    /// If unset the listener is closed right away and pending requests are dropped.
    #[serde(deserialize_with = "duration_str::deserialize_option_duration")]
    pub shutdown_grace_period: Option<Duration>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            request_body_limit: DEFAULT_REQUEST_BODY_LIMIT,
            shutdown_grace_period: None,
        }
    }
}
