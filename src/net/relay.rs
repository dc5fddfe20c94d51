//! HTTP client for the third-party form relay.
//!
//! Client-side (csr): a real multipart POST via `gloo-net` + `FormData`.
//! Native builds: the relay reports `Unavailable`, which the submission flow
//! treats like any other transport failure.
//!
//! ERROR HANDLING
//! ==============
//! The HTTP status is not inspected. The relay answers refusals with a JSON
//! body on non-2xx statuses too, so the body alone decides between a soft
//! refusal and a hard failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use super::types::{RelayError, RelayResponse};
use crate::config::{ConfigError, RelayConfig};
use crate::state::contact::{ContactFormInput, GENERIC_FAILURE_MESSAGE, SubmissionOutcome};

/// Transport seam for posting a contact form.
#[allow(async_fn_in_trait)]
pub trait FormRelay {
    /// Send one submission. Implementations must not retry.
    async fn post(&self, input: &ContactFormInput) -> Result<RelayResponse, RelayError>;
}

/// Web3Forms-compatible relay: multipart body with an `access_key` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Web3FormsRelay {
    config: RelayConfig,
}

impl Web3FormsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    /// Relay configured from the build-time environment (see `crate::config`).
    pub fn from_build_env() -> Result<Self, ConfigError> {
        RelayConfig::from_build_env().map(Self::new)
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Multipart fields in the order they are appended to the request body.
    pub fn form_fields<'a>(&'a self, input: &'a ContactFormInput) -> [(&'static str, &'a str); 4] {
        [
            ("name", input.name.as_str()),
            ("email", input.email.as_str()),
            ("message", input.message.as_str()),
            ("access_key", self.config.access_key.as_str()),
        ]
    }
}

impl FormRelay for Web3FormsRelay {
    async fn post(&self, input: &ContactFormInput) -> Result<RelayResponse, RelayError> {
        #[cfg(feature = "csr")]
        {
            let form = web_sys::FormData::new().map_err(|e| RelayError::Transport(format!("{e:?}")))?;
            for (key, value) in self.form_fields(input) {
                form.append_with_str(key, value)
                    .map_err(|e| RelayError::Transport(format!("{e:?}")))?;
            }

            let resp = gloo_net::http::Request::post(self.endpoint())
                .body(form)
                .map_err(|e| RelayError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| RelayError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| RelayError::Transport(e.to_string()))?;
            RelayResponse::from_body(&body).map_err(|e| match e {
                RelayError::Decode(msg) => RelayError::Decode(format!("status {status}: {msg}")),
                other => other,
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = input;
            Err(RelayError::Unavailable)
        }
    }
}

/// Map a relay round-trip onto the form outcome.
///
/// Refusals keep the relay's own message; a refusal without one falls back
/// to the generic failure text.
pub fn interpret(result: Result<RelayResponse, RelayError>) -> SubmissionOutcome {
    match result {
        Ok(resp) if resp.success => SubmissionOutcome::Delivered,
        Ok(resp) => {
            log::warn!("form relay refused submission: {resp:?}");
            SubmissionOutcome::Rejected(resp.message.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned()))
        }
        Err(e) => {
            log::warn!("{e}");
            SubmissionOutcome::Failed
        }
    }
}
