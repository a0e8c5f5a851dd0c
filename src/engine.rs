//! # Scan Engine
//! Pure, testable logic that maps a submitted posting to a verdict. No I/O
//! after construction, so it suits unit tests with stub predictors and
//! offline evaluation alike.
//!
//! Policy: the Nigerian-tuned tabular model speaks first; at or above the
//! fixed threshold its word is final (HighRisk). Below it, the global text
//! model gets a veto (Caution). Only when both stay quiet does the posting
//! pass as LowRisk.

use std::path::Path;

use crate::error::ScanError;
use crate::features::{self, FeatureVector};
use crate::posting::JobPosting;
use crate::predict::{PredictorError, Predictors};
use crate::verdict::Verdict;

/// Tabular probability at or above this routes straight to HighRisk.
/// Fixed at compile time, never read from configuration; the value is tied
/// to the shipped model artifacts.
pub const SCAM_PROBABILITY_THRESHOLD: f64 = 0.35;

/// The loaded predictor pair plus the decision protocol. Immutable and
/// cheaply cloneable; one instance serves every request.
#[derive(Clone)]
pub struct ScanEngine {
    predictors: Predictors,
}

impl ScanEngine {
    pub fn new(predictors: Predictors) -> Self {
        Self { predictors }
    }

    /// Loads both model artifacts from `model_dir`. Any failure here must
    /// abort startup; see [`Predictors::load`].
    pub fn load(model_dir: &Path) -> Result<Self, PredictorError> {
        Ok(Self::new(Predictors::load(model_dir)?))
    }

    /// Runs the full protocol for one posting.
    pub fn scan(&self, posting: &JobPosting) -> Result<Verdict, ScanError> {
        // 1) Required-field gate. Nothing is scored on incomplete input and
        //    neither predictor is consulted.
        if let Some(field) = posting.missing_required_field() {
            return Err(ScanError::MissingRequiredField(field));
        }

        // 2) Heuristic features feed the tabular model.
        let features = features::extract(posting);
        let probability = self.predictors.tabular.scam_probability(&features)?;
        if probability >= SCAM_PROBABILITY_THRESHOLD {
            return Ok(Verdict::high_risk(probability, &features));
        }

        // 3) Below threshold the global text model has the final word.
        let flagged = self
            .predictors
            .text
            .flags_scam(&features::combined_text(posting))?;
        if flagged {
            return Ok(Verdict::caution(&features));
        }

        Ok(Verdict::low_risk(probability, &features))
    }

    /// Extracts the feature vector without invoking any model. Same input
    /// gate as [`scan`](Self::scan); powers the debug surface.
    pub fn features(&self, posting: &JobPosting) -> Result<FeatureVector, ScanError> {
        if let Some(field) = posting.missing_required_field() {
            return Err(ScanError::MissingRequiredField(field));
        }
        Ok(features::extract(posting))
    }
}

// Make this helper available to other modules (request logging).
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posting::{Department, EmploymentType, RequiredField};
    use crate::predict::{FixedTabular, FixedText, UnavailablePredictor};
    use crate::verdict::RiskTier;
    use std::sync::Arc;

    fn engine(tabular_p: f64, text_flag: bool) -> ScanEngine {
        ScanEngine::new(Predictors::from_parts(
            Arc::new(FixedTabular(tabular_p)),
            Arc::new(FixedText(text_flag)),
        ))
    }

    fn posting(title: &str, desc: &str) -> JobPosting {
        JobPosting {
            job_title: title.to_string(),
            job_description: desc.to_string(),
            job_requirements: String::new(),
            company_name: String::new(),
            company_description: String::new(),
            employment_type: EmploymentType::FullTime,
            department: Department::Other,
        }
    }

    fn neutral() -> JobPosting {
        posting(
            "Accountant",
            "Prepare monthly statements and reconcile ledgers for our Lagos office.",
        )
    }

    #[test]
    fn threshold_is_inclusive() {
        let v = engine(0.35, false).scan(&neutral()).unwrap();
        assert_eq!(v.verdict, RiskTier::HighRisk);

        let v = engine(0.349_999, false).scan(&neutral()).unwrap();
        assert_eq!(v.verdict, RiskTier::LowRisk);
        assert!((v.confidence - 0.650_001).abs() < 1e-6);
    }

    #[test]
    fn text_model_decides_the_midfield() {
        let v = engine(0.2, true).scan(&neutral()).unwrap();
        assert_eq!(v.verdict, RiskTier::Caution);

        let v = engine(0.2, false).scan(&neutral()).unwrap();
        assert_eq!(v.verdict, RiskTier::LowRisk);
        assert!((v.confidence - 0.8).abs() < 1e-6);
    }

    #[test]
    fn high_probability_short_circuits_the_text_model() {
        // A text predictor that would fail if consulted proves the
        // short-circuit: at or above threshold it must never be called.
        let engine = ScanEngine::new(Predictors::from_parts(
            Arc::new(FixedTabular(0.9)),
            Arc::new(UnavailablePredictor),
        ));
        let v = engine.scan(&neutral()).unwrap();
        assert_eq!(v.verdict, RiskTier::HighRisk);
    }

    #[test]
    fn missing_input_never_reaches_a_predictor() {
        // Both predictors would error if touched; the field gate must win.
        let engine = ScanEngine::new(Predictors::from_parts(
            Arc::new(UnavailablePredictor),
            Arc::new(UnavailablePredictor),
        ));
        let err = engine.scan(&posting("", "desc")).unwrap_err();
        assert!(matches!(
            err,
            ScanError::MissingRequiredField(RequiredField::JobTitle)
        ));

        let err = engine.scan(&posting("title", "   ")).unwrap_err();
        assert!(matches!(
            err,
            ScanError::MissingRequiredField(RequiredField::JobDescription)
        ));
    }

    #[test]
    fn predictor_failure_propagates_instead_of_degrading() {
        let engine = ScanEngine::new(Predictors::from_parts(
            Arc::new(UnavailablePredictor),
            Arc::new(FixedText(false)),
        ));
        let err = engine.scan(&neutral()).unwrap_err();
        assert!(matches!(err, ScanError::Predictor(_)));
    }

    #[test]
    fn scanning_is_deterministic() {
        let engine = engine(0.2, false);
        let a = engine.scan(&neutral()).unwrap();
        let b = engine.scan(&neutral()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn features_endpoint_applies_the_same_gate() {
        let engine = engine(0.5, false);
        assert!(engine.features(&posting("", "desc")).is_err());
        let fv = engine.features(&neutral()).unwrap();
        assert_eq!(fv.scam_score, 0);
    }

    #[test]
    fn anon_hash_is_stable_and_short() {
        let a = anon_hash("Urgent Personal Assistant");
        let b = anon_hash("Urgent Personal Assistant");
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        assert_ne!(a, anon_hash("different text"));
    }
}
