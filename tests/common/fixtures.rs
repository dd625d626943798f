//! Seed data for the stub backend

use garage_console::api::{JobCard, JobStatus};

/// The job card most tests edit: an in-progress full service.
pub fn job_card_42() -> JobCard {
    JobCard {
        id: "42".to_string(),
        customer_name: "Ada Lovelace".to_string(),
        phone: "555-0199".to_string(),
        vehicle_make: "honda".to_string(),
        vehicle_model: "civic".to_string(),
        registration_no: "KA-01-1234".to_string(),
        service_type: "full_service".to_string(),
        status: JobStatus::InProgress,
        bill_amount: Some(1500.0),
        notes: Some("squeaky brakes".to_string()),
    }
}

/// A second card, freshly opened with nothing billed yet.
pub fn job_card_7() -> JobCard {
    JobCard {
        id: "7".to_string(),
        customer_name: "Grace Hopper".to_string(),
        phone: "555-0107".to_string(),
        vehicle_make: "ford".to_string(),
        vehicle_model: "anglia".to_string(),
        registration_no: "KA-05-0007".to_string(),
        service_type: "oil_change".to_string(),
        status: JobStatus::Pending,
        bill_amount: None,
        notes: None,
    }
}
