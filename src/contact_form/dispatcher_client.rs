use std::time::Duration;

use reqwest::Client;

use super::ContactFields;

#[derive(thiserror::Error, Debug)]
pub enum DispatcherClientError {
    #[error("Failed to reach the contact endpoint")]
    Transport(#[from] reqwest::Error),
    #[error("The contact endpoint answered with status {status}")]
    Rejected { status: u16, message: Option<String> },
}

#[derive(serde::Deserialize)]
struct RejectionBody {
    error: String,
}

/// Sends contact-form fields to the `/api/send-email` endpoint.
pub struct DispatcherClient {
    http_client: Client,
    base_url: String,
}

impl DispatcherClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
        })
    }

    #[tracing::instrument(name = "Submitting the contact form", skip(self, fields))]
    pub async fn send(&self, fields: &ContactFields) -> Result<(), DispatcherClientError> {
        let response = self
            .http_client
            .post(&format!("{}/api/send-email", self.base_url))
            .json(fields)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response.json::<RejectionBody>().await.ok().map(|b| b.error);
        Err(DispatcherClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
