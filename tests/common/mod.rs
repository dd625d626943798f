//! Common test infrastructure
//!
//! This module provides the infrastructure for end-to-end tests: a stub
//! garage backend speaking the envelope contract, plus shared constants and
//! fixtures. Tests should only import from this module, not from internal
//! submodules.

// Not every test binary uses every helper.
#![allow(dead_code)]

mod backend;
mod constants;
mod fixtures;

// Public API - this is what tests import
pub use backend::{dead_backend_url, StubBackend};
pub use constants::*;
pub use fixtures::{job_card_42, job_card_7};
