//! Predictor abstraction: two capability traits plus the artifact-backed
//! implementations behind them.
//!
//! The decision logic never sees model internals. It talks to a
//! [`TabularPredictor`] (scam probability from engineered features) and a
//! [`TextPredictor`] (binary label from raw text), so tests can swap in the
//! fixed stubs below and the real artifacts stay an exchange format between
//! this service and the offline training pipeline.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::features::FeatureVector;

pub mod tabular;
pub mod text;

pub use tabular::TabularModel;
pub use text::TextModel;

/// Artifact file name of the Nigerian-tuned tabular model.
pub const TABULAR_ARTIFACT: &str = "yewo_nigerian.json";
/// Artifact file name of the global text model.
pub const TEXT_ARTIFACT: &str = "yewo_global.json";

// ------------------------------------------------------------
// Errors
// ------------------------------------------------------------

/// Anything that stops a predictor from loading or answering. Load-time
/// failures are fatal for the process; request-time failures surface as
/// service-unavailable, never as a verdict.
#[derive(Debug)]
pub enum PredictorError {
    /// Artifact file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// Artifact file is not valid JSON for the expected shape.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Artifact parsed but its contents are unusable.
    Invalid { path: PathBuf, detail: String },
    /// A loaded predictor could not produce an answer.
    Eval { model: String, detail: String },
}

impl fmt::Display for PredictorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictorError::Io { path, source } => {
                write!(f, "cannot read model artifact {}: {source}", path.display())
            }
            PredictorError::Parse { path, source } => {
                write!(f, "malformed model artifact {}: {source}", path.display())
            }
            PredictorError::Invalid { path, detail } => {
                write!(f, "unusable model artifact {}: {detail}", path.display())
            }
            PredictorError::Eval { model, detail } => {
                write!(f, "predictor {model} failed: {detail}")
            }
        }
    }
}

impl std::error::Error for PredictorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PredictorError::Io { source, .. } => Some(source),
            PredictorError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ------------------------------------------------------------
// Capability traits
// ------------------------------------------------------------

/// Predictor A: scam probability from the engineered feature vector.
pub trait TabularPredictor: Send + Sync {
    /// Probability of the scam class, in `[0.0, 1.0]`.
    fn scam_probability(&self, features: &FeatureVector) -> Result<f64, PredictorError>;
    /// Model name for logs and diagnostics.
    fn name(&self) -> &str;
}

/// Predictor B: binary scam label from the raw combined text.
pub trait TextPredictor: Send + Sync {
    fn flags_scam(&self, text: &str) -> Result<bool, PredictorError>;
    fn name(&self) -> &str;
}

pub type DynTabular = Arc<dyn TabularPredictor>;
pub type DynText = Arc<dyn TextPredictor>;

/// Both predictors, loaded once at startup and shared read-only afterwards.
#[derive(Clone)]
pub struct Predictors {
    pub tabular: DynTabular,
    pub text: DynText,
}

impl fmt::Debug for Predictors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictors")
            .field("tabular", &self.tabular.name())
            .field("text", &self.text.name())
            .finish()
    }
}

impl Predictors {
    /// Loads both artifacts from `dir` by their fixed file names. Either
    /// failing is fatal to the caller; a half-loaded pair would silently
    /// skew every verdict.
    pub fn load(dir: &Path) -> Result<Self, PredictorError> {
        let tabular = TabularModel::load(&dir.join(TABULAR_ARTIFACT))?;
        let text = TextModel::load(&dir.join(TEXT_ARTIFACT))?;
        Ok(Self {
            tabular: Arc::new(tabular),
            text: Arc::new(text),
        })
    }

    /// Assembles a pair from already-built predictors. Main seam for tests.
    pub fn from_parts(tabular: DynTabular, text: DynText) -> Self {
        Self { tabular, text }
    }
}

// ------------------------------------------------------------
// Fixed stubs for tests and dry runs
// ------------------------------------------------------------

/// Always answers with the same probability.
pub struct FixedTabular(pub f64);

impl TabularPredictor for FixedTabular {
    fn scam_probability(&self, _features: &FeatureVector) -> Result<f64, PredictorError> {
        Ok(self.0)
    }
    fn name(&self) -> &str {
        "fixed-tabular"
    }
}

/// Always answers with the same label.
pub struct FixedText(pub bool);

impl TextPredictor for FixedText {
    fn flags_scam(&self, _text: &str) -> Result<bool, PredictorError> {
        Ok(self.0)
    }
    fn name(&self) -> &str {
        "fixed-text"
    }
}

/// Always fails, for exercising the unavailable path.
pub struct UnavailablePredictor;

impl TabularPredictor for UnavailablePredictor {
    fn scam_probability(&self, _features: &FeatureVector) -> Result<f64, PredictorError> {
        Err(PredictorError::Eval {
            model: "unavailable".to_string(),
            detail: "predictor is offline".to_string(),
        })
    }
    fn name(&self) -> &str {
        "unavailable"
    }
}

impl TextPredictor for UnavailablePredictor {
    fn flags_scam(&self, _text: &str) -> Result<bool, PredictorError> {
        Err(PredictorError::Eval {
            model: "unavailable".to_string(),
            detail: "predictor is offline".to_string(),
        })
    }
    fn name(&self) -> &str {
        "unavailable"
    }
}
