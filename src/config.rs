//! Relay configuration parsed from environment variables.

use std::fmt;
use std::time::Duration;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Errors produced while reading relay configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing config: env var {var} not set")]
    Missing { var: String },

    /// A variable is set but cannot be parsed.
    #[error("invalid config: env var {var} has value {value:?}")]
    Invalid { var: String, value: String },
}

/// Identifiers and transport settings for the hosted email relay.
#[derive(Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Private key for relay accounts that require it on REST calls.
    pub access_token: Option<String>,
    pub endpoint: String,
    /// No timeout when `None`.
    pub timeout: Option<Duration>,
}

impl RelayConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            access_token: None,
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            timeout: None,
        }
    }

    /// Build typed relay config from environment variables.
    ///
    /// Required:
    /// - `CONTACT_SERVICE_ID`
    /// - `CONTACT_TEMPLATE_ID`
    /// - `CONTACT_PUBLIC_KEY`
    ///
    /// Optional:
    /// - `CONTACT_ACCESS_TOKEN`
    /// - `CONTACT_RELAY_ENDPOINT`: default EmailJS send endpoint
    /// - `CONTACT_RELAY_TIMEOUT_SECS`: no timeout when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &str| {
            non_blank(key).ok_or_else(|| ConfigError::Missing {
                var: key.to_string(),
            })
        };

        let service_id = required("CONTACT_SERVICE_ID")?;
        let template_id = required("CONTACT_TEMPLATE_ID")?;
        let public_key = required("CONTACT_PUBLIC_KEY")?;
        let access_token = non_blank("CONTACT_ACCESS_TOKEN");
        let endpoint = non_blank("CONTACT_RELAY_ENDPOINT")
            .unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeout = match non_blank("CONTACT_RELAY_TIMEOUT_SECS") {
            Some(raw) => Some(parse_secs("CONTACT_RELAY_TIMEOUT_SECS", &raw)?),
            None => None,
        };

        Ok(Self {
            service_id,
            template_id,
            public_key,
            access_token,
            endpoint,
            timeout,
        })
    }
}

fn parse_secs(var: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::Invalid {
            var: var.to_string(),
            value: raw.to_string(),
        })
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &self.public_key)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}
