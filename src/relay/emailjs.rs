//! EmailJS REST client.
//!
//! Thin HTTP wrapper around the `/email/send` endpoint. Request building and
//! response interpretation are pure functions so they can be tested without a
//! network.

use futures::future::{BoxFuture, FutureExt};
use serde::Serialize;

use super::{EmailRelay, RelayError};
use crate::config::RelayConfig;
use crate::contact::Submission;

pub struct EmailJsRelay {
    http: reqwest::Client,
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| RelayError::ClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

impl EmailRelay for EmailJsRelay {
    fn send(&self, submission: &Submission) -> BoxFuture<'static, Result<(), RelayError>> {
        let request = self
            .http
            .post(&self.config.endpoint)
            .json(&build_request(&self.config, submission));

        async move {
            let response = request.send().await.map_err(|e| RelayError::Request(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| RelayError::Request(e.to_string()))?;
            interpret_response(status, body)
        }
        .boxed()
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

pub(crate) fn build_request<'a>(
    config: &'a RelayConfig,
    submission: &'a Submission,
) -> SendRequest<'a> {
    SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: TemplateParams {
            name: submission.name(),
            email: submission.email(),
            message: submission.message(),
        },
        access_token: config.access_token.as_deref(),
    }
}

/// EmailJS answers `200 OK` on success and a plain-text reason otherwise.
pub(crate) fn interpret_response(status: u16, body: String) -> Result<(), RelayError> {
    if status == 200 {
        Ok(())
    } else {
        Err(RelayError::Rejected { status, body })
    }
}
