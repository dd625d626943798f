//! HTTP client for the garage backend.

use super::models::{ApiEnvelope, JobCard, JobCardUpdate};
use super::{ApiError, GarageApi};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// reqwest-backed implementation of [`GarageApi`].
pub struct GarageApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl GarageApiClient {
    /// Create a new backend client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the backend (e.g., "http://localhost:5000")
    /// * `timeout_sec` - Request timeout in seconds, applied to every call so
    ///   the console never hangs indefinitely on a dead backend
    pub fn new(base_url: String, timeout_sec: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .expect("Failed to create HTTP client");

        // Ensure base_url doesn't have trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn job_cards_url(&self) -> String {
        format!("{}/api/job-cards", self.base_url)
    }

    fn job_card_url(&self, id: &str) -> String {
        format!("{}/api/job-cards/{}", self.base_url, id)
    }
}

async fn read_envelope<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<ApiEnvelope<T>, ApiError> {
    response
        .json()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))
}

#[async_trait]
impl GarageApi for GarageApiClient {
    async fn get_job_card(&self, id: &str) -> Result<JobCard, ApiError> {
        let url = self.job_card_url(id);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let envelope: ApiEnvelope<JobCard> = read_envelope(response).await?;
        match envelope {
            ApiEnvelope {
                success: true,
                data: Some(card),
                ..
            } => Ok(card),
            // No success flag (or a success flag with nothing behind it)
            // means the backend has no such record.
            _ => Err(ApiError::NotFound),
        }
    }

    async fn update_job_card(&self, id: &str, update: &JobCardUpdate) -> Result<(), ApiError> {
        let url = self.job_card_url(id);
        debug!("PUT {}", url);
        let response = self
            .client
            .put(&url)
            .json(update)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let envelope: ApiEnvelope<JobCard> = read_envelope(response).await?;
        if envelope.success {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                message: envelope.message,
            })
        }
    }

    async fn list_job_cards(&self) -> Result<Vec<JobCard>, ApiError> {
        let url = self.job_cards_url();
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let envelope: ApiEnvelope<Vec<JobCard>> = read_envelope(response).await?;
        if envelope.success {
            Ok(envelope.data.unwrap_or_default())
        } else {
            Err(ApiError::Rejected {
                message: envelope.message,
            })
        }
    }
}
