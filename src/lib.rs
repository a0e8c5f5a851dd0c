// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod features;
pub mod metrics;
pub mod posting;
pub mod predict;
pub mod verdict;

// ---- Re-exports for stable public API ----
pub use crate::api::create_router;
pub use crate::engine::{ScanEngine, SCAM_PROBABILITY_THRESHOLD};
pub use crate::error::ScanError;
pub use crate::posting::{Department, EmploymentType, JobPosting};
pub use crate::predict::Predictors;
pub use crate::verdict::{RiskTier, Verdict};
