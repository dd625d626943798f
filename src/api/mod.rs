//! Backend API contract.
//!
//! The garage backend wraps every response in a `{ success, data?, message? }`
//! envelope; server-side behavior is out of scope here.

mod client;
mod models;

pub use client::GarageApiClient;
pub use models::{ApiEnvelope, JobCard, JobCardUpdate, JobStatus};

use async_trait::async_trait;
use thiserror::Error;

/// Errors a backend call can surface.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The envelope reported no matching record for a fetch.
    #[error("no matching record")]
    NotFound,

    /// The request could not complete (network failure, timeout, or an
    /// unparseable response).
    #[error("backend unreachable: {0}")]
    Transport(String),

    /// The backend refused an update; `message` is its explanation, when it
    /// gave one.
    #[error("update rejected by backend")]
    Rejected { message: Option<String> },
}

/// Client-side seam over the backend endpoints the console consumes.
#[async_trait]
pub trait GarageApi: Send + Sync {
    /// `GET /api/job-cards/{id}`
    async fn get_job_card(&self, id: &str) -> Result<JobCard, ApiError>;

    /// `PUT /api/job-cards/{id}` with the full field set.
    async fn update_job_card(&self, id: &str, update: &JobCardUpdate) -> Result<(), ApiError>;

    /// `GET /api/job-cards`
    async fn list_job_cards(&self) -> Result<Vec<JobCard>, ApiError>;
}
