//! Nigerian-tuned tabular model: a standardized logistic regression exported
//! by the offline training pipeline as plain JSON.
//!
//! Artifact shape:
//! {
//!   "model": "yewo-nigerian-lr",
//!   "version": "2024.11",
//!   "bias": -1.05,
//!   "numeric": {
//!     "scam_score": { "coef": 1.15, "mean": 1.2, "std": 2.4 },
//!     ... one entry per engineered feature ...
//!   },
//!   "employment_type": { "Full-time": -0.12, ... },
//!   "department": { "IT & Software": -0.08, ... }
//! }
//!
//! Numeric features are standardized as `coef * (x - mean) / std`; categorical
//! features contribute a per-label coefficient. The sum plus bias goes through
//! a sigmoid. Coefficient maps must cover every label the input enums accept,
//! checked once at load so scoring cannot hit a hole later.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::{PredictorError, TabularPredictor};
use crate::features::FeatureVector;
use crate::posting::{Department, EmploymentType};

#[derive(Debug, Deserialize)]
struct Artifact {
    model: String,
    version: String,
    bias: f64,
    numeric: NumericTerms,
    employment_type: HashMap<String, f64>,
    department: HashMap<String, f64>,
}

/// One struct field per engineered feature. `deny_unknown_fields` turns a
/// renamed or extra feature in the artifact into a load failure instead of a
/// silently ignored coefficient.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NumericTerms {
    job_desc_length: Term,
    company_desc_length: Term,
    percent_caps: Term,
    exclamation_count: Term,
    scam_score: Term,
    has_company_name: Term,
    has_company_desc: Term,
    has_job_requirement: Term,
}

impl NumericTerms {
    fn named(&self) -> [(&'static str, &Term); 8] {
        [
            ("job_desc_length", &self.job_desc_length),
            ("company_desc_length", &self.company_desc_length),
            ("percent_caps", &self.percent_caps),
            ("exclamation_count", &self.exclamation_count),
            ("scam_score", &self.scam_score),
            ("has_company_name", &self.has_company_name),
            ("has_company_desc", &self.has_company_desc),
            ("has_job_requirement", &self.has_job_requirement),
        ]
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Term {
    coef: f64,
    mean: f64,
    std: f64,
}

impl Term {
    fn apply(&self, raw: f64) -> f64 {
        self.coef * (raw - self.mean) / self.std
    }
}

/// Loaded, validated tabular predictor. Immutable after construction.
pub struct TabularModel {
    artifact: Artifact,
}

impl TabularModel {
    pub fn load(path: &Path) -> Result<Self, PredictorError> {
        let bytes = fs::read(path).map_err(|source| PredictorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: Artifact =
            serde_json::from_slice(&bytes).map_err(|source| PredictorError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        validate(path, &artifact)?;
        info!(
            target: "scan",
            model = %artifact.model,
            version = %artifact.version,
            path = %path.display(),
            "tabular model loaded"
        );
        Ok(Self { artifact })
    }

    pub fn version(&self) -> &str {
        &self.artifact.version
    }
}

fn validate(path: &Path, artifact: &Artifact) -> Result<(), PredictorError> {
    for (name, term) in artifact.numeric.named() {
        if !term.std.is_finite() || term.std <= 0.0 {
            return Err(PredictorError::Invalid {
                path: path.to_path_buf(),
                detail: format!("feature {name} has non-positive std {}", term.std),
            });
        }
    }
    for et in EmploymentType::ALL {
        if !artifact.employment_type.contains_key(et.label()) {
            return Err(PredictorError::Invalid {
                path: path.to_path_buf(),
                detail: format!("missing employment_type coefficient for {:?}", et.label()),
            });
        }
    }
    for dept in Department::ALL {
        if !artifact.department.contains_key(dept.label()) {
            return Err(PredictorError::Invalid {
                path: path.to_path_buf(),
                detail: format!("missing department coefficient for {:?}", dept.label()),
            });
        }
    }
    Ok(())
}

fn indicator(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl TabularPredictor for TabularModel {
    fn scam_probability(&self, features: &FeatureVector) -> Result<f64, PredictorError> {
        let n = &self.artifact.numeric;
        let mut z = self.artifact.bias;
        z += n.job_desc_length.apply(features.job_desc_length as f64);
        z += n.company_desc_length.apply(features.company_desc_length as f64);
        z += n.percent_caps.apply(features.percent_caps);
        z += n.exclamation_count.apply(features.exclamation_count as f64);
        z += n.scam_score.apply(f64::from(features.scam_score));
        z += n.has_company_name.apply(indicator(features.has_company_name));
        z += n.has_company_desc.apply(indicator(features.has_company_desc));
        z += n
            .has_job_requirement
            .apply(indicator(features.has_job_requirement));

        let et = features.employment_type.label();
        z += self
            .artifact
            .employment_type
            .get(et)
            .copied()
            .ok_or_else(|| PredictorError::Eval {
                model: self.artifact.model.clone(),
                detail: format!("no coefficient for employment type {et:?}"),
            })?;
        let dept = features.department.label();
        z += self
            .artifact
            .department
            .get(dept)
            .copied()
            .ok_or_else(|| PredictorError::Eval {
                model: self.artifact.model.clone(),
                detail: format!("no coefficient for department {dept:?}"),
            })?;

        Ok(sigmoid(z))
    }

    fn name(&self) -> &str {
        &self.artifact.model
    }
}
