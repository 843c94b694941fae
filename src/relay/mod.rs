// SPDX-License-Identifier: MPL-2.0
//! Email relay client.
//!
//! Contact-form submissions are forwarded to an EmailJS-compatible REST
//! endpoint. The payload shape is fixed: the structured fields are sent both
//! under their canonical names and under the redundant aliases different
//! email templates expect, so one template change never silently drops a
//! field. The caller treats the send as fire-and-forget; the single outcome
//! is reported back as a message.

use crate::config::{RelaySettings, DEFAULT_RELAY_ENDPOINT};
use crate::error::RelayError;
use serde_json::{json, Value};
use std::time::Duration;

const USER_AGENT: &str = concat!("IcedFolio/", env!("CARGO_PKG_VERSION"));

/// How long a send may take before it counts as timed out.
const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolved relay credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Builds a usable config from settings, or `None` when any credential is
    /// missing. The endpoint alone has a default; credentials do not.
    #[must_use]
    pub fn from_settings(settings: &RelaySettings) -> Option<Self> {
        let service_id = settings.service_id.clone()?;
        let template_id = settings.template_id.clone()?;
        let public_key = settings.public_key.clone()?;

        if service_id.is_empty() || template_id.is_empty() || public_key.is_empty() {
            return None;
        }

        Some(Self {
            endpoint: settings
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string()),
            service_id,
            template_id,
            public_key,
        })
    }
}

/// The validated, trimmed form fields handed over by the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    /// The pre-formatted message body delivered alongside the structured
    /// fields.
    #[must_use]
    pub fn combined_message(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nMobile: {}\n\nMessage: {}",
            self.name, self.email, self.phone, self.message
        )
    }
}

/// Template parameters with every alias the relay templates may reference.
fn template_params(fields: &ContactFields) -> Value {
    let combined = fields.combined_message();
    json!({
        "name": fields.name,
        "from_name": fields.name,
        "user_name": fields.name,
        "sender_name": fields.name,
        "email": fields.email,
        "from_email": fields.email,
        "reply_to": fields.email,
        "user_email": fields.email,
        "phone": fields.phone,
        "user_phone": fields.phone,
        "contact_number": fields.phone,
        "message": combined,
        "user_message": combined,
        "message_html": combined,
        "full_message": combined,
    })
}

/// The full request body in the shape the relay expects.
fn request_body(config: &RelayConfig, fields: &ContactFields) -> Value {
    json!({
        "service_id": config.service_id,
        "template_id": config.template_id,
        "user_id": config.public_key,
        "template_params": template_params(fields),
    })
}

/// Sends the submission to the relay.
///
/// Exactly one outcome is produced. The error detail is meant for the
/// diagnostics log; the UI shows a generic failure message regardless of the
/// variant.
pub async fn send(
    config: Option<RelayConfig>,
    fields: ContactFields,
) -> std::result::Result<(), RelayError> {
    let config = config.ok_or(RelayError::NotConfigured)?;

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(SEND_TIMEOUT)
        .build()
        .map_err(|e| RelayError::Other(e.to_string()))?;

    let response = client
        .post(&config.endpoint)
        .json(&request_body(&config, &fields))
        .send()
        .await
        .map_err(classify_transport_error)?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let detail = response.text().await.unwrap_or_default();
    Err(RelayError::Rejected {
        status: status.as_u16(),
        detail,
    })
}

fn classify_transport_error(err: reqwest::Error) -> RelayError {
    if err.is_timeout() {
        RelayError::Timeout
    } else if err.is_connect() {
        RelayError::Network(err.to_string())
    } else {
        RelayError::from_message(&err.to_string())
    }
}
