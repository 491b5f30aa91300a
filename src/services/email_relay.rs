//! Outbound relay to the transactional email provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::config::RelayCredentials;
use crate::error::RelayError;

/// Request timeout for the provider call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Template variables handed to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
    pub reply_to: String,
}

/// Something that can deliver a contact message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailRelay: Send + Sync {
    /// Sends one message. Resolves once the provider accepted or rejected it.
    async fn send(
        &self,
        credentials: &RelayCredentials,
        params: &TemplateParams,
    ) -> Result<(), RelayError>;
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

impl<'a> SendRequest<'a> {
    fn new(credentials: &'a RelayCredentials, params: &'a TemplateParams) -> Self {
        Self {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: params,
        }
    }
}

/// EmailJS REST client.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl EmailJsClient {
    /// Creates a client posting to `endpoint`.
    pub fn new(endpoint: &str) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint: Url::parse(endpoint)?,
        })
    }

    /// Returns the endpoint messages are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EmailRelay for EmailJsClient {
    async fn send(
        &self,
        credentials: &RelayCredentials,
        params: &TemplateParams,
    ) -> Result<(), RelayError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&SendRequest::new(credentials, params))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "relay accepted message");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
