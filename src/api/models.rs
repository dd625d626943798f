//! Data models for the backend API.

use serde::{Deserialize, Serialize};

/// Response envelope used by every backend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Service state of a job card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    InProgress,
    Completed,
    Delivered,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::InProgress => "in_progress",
            JobStatus::Completed => "completed",
            JobStatus::Delivered => "delivered",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(JobStatus::Pending),
            "in_progress" => Some(JobStatus::InProgress),
            "completed" => Some(JobStatus::Completed),
            "delivered" => Some(JobStatus::Delivered),
            _ => None,
        }
    }
}

/// A job card as the backend holds it. The identifier is assigned by the
/// backend and immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCard {
    pub id: String,
    pub customer_name: String,
    pub phone: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub registration_no: String,
    pub service_type: String,
    pub status: JobStatus,
    pub bill_amount: Option<f64>,
    pub notes: Option<String>,
}

/// Full field set sent back on update, keyed by the identifier in the URL.
///
/// Field contents are forwarded as entered; validation is the backend's (and
/// the form layer's) job. The status travels as its string representation
/// and the bill amount as a number when the entered text parses as one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCardUpdate {
    pub customer_name: String,
    pub phone: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub registration_no: String,
    pub service_type: String,
    pub status: String,
    pub bill_amount: Option<f64>,
    pub notes: Option<String>,
}
