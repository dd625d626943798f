//! Transient user notices.
//!
//! The workflow coordinator pushes success/error notices here; the
//! presentation layer drains them into whatever toast surface it renders.

mod center;
mod models;

pub use center::NotificationCenter;
pub use models::{Notice, NoticeLevel};
