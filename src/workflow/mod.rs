//! Two-step job-card editing workflow.
//!
//! A job card moves through a fixed linear sequence: detail review, then
//! edit-and-submit. The two steps load as independent pages; in-progress
//! field values travel between them in the navigation address and are
//! reconciled against a fresh authoritative fetch on arrival.

mod carry;
mod coordinator;
mod form;

pub use carry::{decode_pairs, encode_pairs, CARRIED_FIELDS};
pub use coordinator::{
    NavToken, Navigation, SubmitOutcome, WorkflowCoordinator, WorkflowError,
};
pub use form::{carried_subset, merge, snapshot_fields, MergedForm, FORM_FIELDS};
