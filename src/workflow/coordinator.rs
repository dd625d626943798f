//! Workflow coordinator.
//!
//! Drives a job card through the review and edit steps. The record is
//! reconstructed from scratch on every step's page load; nothing is cached
//! between steps except what the navigation address carries. The identifier
//! is always inherited from the route, never chosen here.

use super::carry::{decode_pairs, encode_pairs};
use super::form::{carried_subset, merge, MergedForm};
use crate::api::{ApiError, GarageApi, JobCard};
use crate::notifications::NotificationCenter;
use crate::routing;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

const SUBMIT_SUCCESS_MESSAGE: &str = "Job card updated";
const SUBMIT_FAILURE_MESSAGE: &str = "Failed to update job card";

/// Errors a workflow step can surface.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A newer navigation began while this operation was in flight; the
    /// result must be discarded, never applied to the unmounted step.
    #[error("navigation superseded")]
    Superseded,
}

/// Token tying an async operation to the navigation it started under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavToken(u64);

/// A navigation decision handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: String,
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The update was accepted; leave the edit step.
    Saved { navigation: Navigation },
    /// The update did not go through; stay on the edit step with all
    /// entered values preserved. Retry is a manual re-submit.
    Rejected { message: String },
}

/// Coordinates the two-step edit workflow against the backend.
pub struct WorkflowCoordinator {
    api: Arc<dyn GarageApi>,
    notices: Arc<NotificationCenter>,
    epoch: AtomicU64,
}

impl WorkflowCoordinator {
    pub fn new(api: Arc<dyn GarageApi>, notices: Arc<NotificationCenter>) -> Self {
        Self {
            api,
            notices,
            epoch: AtomicU64::new(0),
        }
    }

    /// Mark the start of a navigation. Any operation still holding an older
    /// token reports [`WorkflowError::Superseded`] instead of a result.
    pub fn begin_navigation(&self) -> NavToken {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        NavToken(epoch)
    }

    fn is_current(&self, token: NavToken) -> bool {
        self.epoch.load(Ordering::SeqCst) == token.0
    }

    /// Step 1 — review: fetch the authoritative record.
    ///
    /// `NotFound` and transport failures are blocking here; the review page
    /// has nothing to show without the record.
    pub async fn load(&self, token: NavToken, id: &str) -> Result<JobCard, WorkflowError> {
        let result = self.api.get_job_card(id).await;
        if !self.is_current(token) {
            return Err(WorkflowError::Superseded);
        }
        Ok(result?)
    }

    /// Transition 1→2: select the carried subset from the snapshot and
    /// serialize it into the edit route's address.
    pub fn advance(&self, snapshot: &JobCard) -> Navigation {
        let subset = carried_subset(snapshot);
        let query = encode_pairs(
            subset
                .iter()
                .map(|(name, value)| (*name, value.as_str())),
        );
        Navigation {
            route: format!("{}?{}", routing::job_card_edit(&snapshot.id), query),
        }
    }

    /// Step 2 — edit: reconcile carried-forward values with a fresh fetch.
    ///
    /// The fresh fetch failing does not block the step: carried values (or
    /// empty fields) are still editable, and submit is what matters here.
    /// An absent query degrades to a fresh-fetch-only merge, so the edit
    /// step stays deep-linkable.
    pub async fn resolve(
        &self,
        token: NavToken,
        id: &str,
        carried_query: Option<&str>,
    ) -> Result<MergedForm, WorkflowError> {
        let carried = carried_query.map(decode_pairs).unwrap_or_default();

        let fresh = match self.api.get_job_card(id).await {
            Ok(card) => Some(card),
            Err(err) => {
                warn!("Fresh fetch for job card {} failed, degrading: {}", id, err);
                None
            }
        };
        if !self.is_current(token) {
            return Err(WorkflowError::Superseded);
        }

        debug!(
            "Resolved edit form for job card {} ({} carried fields, fresh fetch {})",
            id,
            carried.len(),
            if fresh.is_some() { "ok" } else { "failed" }
        );
        Ok(merge(&carried, fresh.as_ref()))
    }

    /// Submit the full merged field set as an update keyed by `id`.
    pub async fn submit(
        &self,
        token: NavToken,
        id: &str,
        form: &MergedForm,
    ) -> Result<SubmitOutcome, WorkflowError> {
        let update = form.to_update();
        let result = self.api.update_job_card(id, &update).await;
        if !self.is_current(token) {
            return Err(WorkflowError::Superseded);
        }

        match result {
            Ok(()) => {
                self.notices.success(SUBMIT_SUCCESS_MESSAGE);
                Ok(SubmitOutcome::Saved {
                    navigation: Navigation {
                        route: routing::JOB_CARDS.to_string(),
                    },
                })
            }
            Err(ApiError::Rejected { message }) => {
                let message = message.unwrap_or_else(|| SUBMIT_FAILURE_MESSAGE.to_string());
                self.notices.error(message.clone());
                Ok(SubmitOutcome::Rejected { message })
            }
            Err(err) => {
                warn!("Submit for job card {} failed: {}", id, err);
                self.notices.error(SUBMIT_FAILURE_MESSAGE);
                Ok(SubmitOutcome::Rejected {
                    message: SUBMIT_FAILURE_MESSAGE.to_string(),
                })
            }
        }
    }

    /// Previous: unconditionally back to the review step for the same
    /// record. Unsaved edits are discarded without confirmation.
    pub fn retreat(&self, id: &str) -> Navigation {
        Navigation {
            route: routing::job_card_detail(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{JobCardUpdate, JobStatus};
    use async_trait::async_trait;

    struct StubApi {
        card: Option<JobCard>,
    }

    #[async_trait]
    impl GarageApi for StubApi {
        async fn get_job_card(&self, _id: &str) -> Result<JobCard, ApiError> {
            self.card.clone().ok_or(ApiError::NotFound)
        }

        async fn update_job_card(
            &self,
            _id: &str,
            _update: &JobCardUpdate,
        ) -> Result<(), ApiError> {
            Ok(())
        }

        async fn list_job_cards(&self) -> Result<Vec<JobCard>, ApiError> {
            Ok(self.card.clone().into_iter().collect())
        }
    }

    fn make_card() -> JobCard {
        JobCard {
            id: "42".to_string(),
            customer_name: "Ada".to_string(),
            phone: "555-0199".to_string(),
            vehicle_make: "honda".to_string(),
            vehicle_model: "civic".to_string(),
            registration_no: "KA-01-1234".to_string(),
            service_type: "full_service".to_string(),
            status: JobStatus::Pending,
            bill_amount: None,
            notes: None,
        }
    }

    fn make_coordinator(card: Option<JobCard>) -> WorkflowCoordinator {
        WorkflowCoordinator::new(
            Arc::new(StubApi { card }),
            Arc::new(NotificationCenter::new()),
        )
    }

    #[test]
    fn test_advance_builds_edit_route_with_carried_query() {
        let coordinator = make_coordinator(None);
        let navigation = coordinator.advance(&make_card());

        assert!(navigation.route.starts_with("/job-cards/42/edit?"));
        assert!(navigation.route.contains("vehicle_make=honda"));
        assert!(navigation.route.contains("customer_name=Ada"));
        // Not in the carried subset
        assert!(!navigation.route.contains("status="));
    }

    #[test]
    fn test_retreat_targets_detail_route() {
        let coordinator = make_coordinator(None);
        assert_eq!(coordinator.retreat("42").route, "/job-cards/42");
    }

    #[tokio::test]
    async fn test_load_superseded_by_newer_navigation() {
        let coordinator = make_coordinator(Some(make_card()));

        let stale = coordinator.begin_navigation();
        let _current = coordinator.begin_navigation();

        let result = coordinator.load(stale, "42").await;
        assert!(matches!(result, Err(WorkflowError::Superseded)));
    }

    #[tokio::test]
    async fn test_resolve_superseded_by_newer_navigation() {
        let coordinator = make_coordinator(Some(make_card()));

        let stale = coordinator.begin_navigation();
        let _current = coordinator.begin_navigation();

        let result = coordinator.resolve(stale, "42", None).await;
        assert!(matches!(result, Err(WorkflowError::Superseded)));
    }

    #[tokio::test]
    async fn test_load_passes_through_not_found() {
        let coordinator = make_coordinator(None);
        let token = coordinator.begin_navigation();

        let result = coordinator.load(token, "42").await;
        assert!(matches!(
            result,
            Err(WorkflowError::Api(ApiError::NotFound))
        ));
    }
}
