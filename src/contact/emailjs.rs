use serde::Serialize;
use thiserror::Error;

use super::ContactMessage;

const SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Build-time deployment credentials for the EmailJS REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

impl EmailJsConfig {
    /// All three values come from the environment at build time (see
    /// build.rs). Returns `None` when any of them is missing, e.g. in a
    /// development build.
    pub fn from_build_env() -> Option<Self> {
        Some(Self {
            service_id: option_env!("EMAILJS_SERVICE_ID")?,
            template_id: option_env!("EMAILJS_TEMPLATE_ID")?,
            public_key: option_env!("EMAILJS_PUBLIC_KEY")?,
        })
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("email delivery is not configured for this build")]
    NotConfigured,
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("delivery rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
}

impl<'a> SendRequest<'a> {
    fn new(config: &EmailJsConfig, message: &'a ContactMessage) -> Self {
        Self {
            service_id: config.service_id,
            template_id: config.template_id,
            user_id: config.public_key,
            template_params: TemplateParams {
                from_name: &message.sender_name,
                from_email: &message.sender_email,
                message: &message.body,
            },
        }
    }
}

/// Hand one message to EmailJS. Resolves when the provider accepts or rejects
/// the delivery; there is no local timeout, no retry, and no idempotency key,
/// so retrying after an ambiguous failure may deliver twice.
pub async fn send(
    config: Option<&EmailJsConfig>,
    message: &ContactMessage,
) -> Result<(), DispatchError> {
    let config = config.ok_or(DispatchError::NotConfigured)?;
    let response = reqwest::Client::new()
        .post(SEND_URL)
        .json(&SendRequest::new(config, message))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        // EmailJS returns a plain-text reason body on rejection.
        let reason = response
            .text()
            .await
            .unwrap_or_else(|_| "no reason given".to_string());
        Err(DispatchError::Rejected(reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EmailJsConfig {
        EmailJsConfig {
            service_id: "service_123",
            template_id: "template_456",
            public_key: "pk_789",
        }
    }

    #[test]
    fn request_payload_matches_provider_contract() {
        let message = ContactMessage {
            sender_name: "Alice".to_string(),
            sender_email: "alice@example.com".to_string(),
            body: "Hello".to_string(),
        };
        let payload = serde_json::to_value(SendRequest::new(&test_config(), &message))
            .expect("payload should serialize");

        assert_eq!(payload["service_id"], "service_123");
        assert_eq!(payload["template_id"], "template_456");
        assert_eq!(payload["user_id"], "pk_789");
        assert_eq!(payload["template_params"]["from_name"], "Alice");
        assert_eq!(payload["template_params"]["from_email"], "alice@example.com");
        assert_eq!(payload["template_params"]["message"], "Hello");
    }

    #[test]
    fn rejection_reason_shows_up_in_display() {
        let err = DispatchError::Rejected("The public key is invalid".to_string());
        assert!(err.to_string().contains("The public key is invalid"));
    }
}
