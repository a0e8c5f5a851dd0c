//! Global text model: a linear bag-of-words classifier over lowercase
//! unigrams, exported by the offline training pipeline as plain JSON.
//!
//! Artifact shape:
//! {
//!   "model": "yewo-global-text",
//!   "version": "2024.11",
//!   "bias": -1.2,
//!   "binary": true,
//!   "vocabulary": { "whatsapp": 0.9, "experience": -0.35, ... }
//! }
//!
//! Scoring sums the weights of vocabulary tokens found in the text and adds
//! the bias; a strictly positive total flags the post. With `binary` set,
//! each distinct token counts once no matter how often it repeats.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::info;

use super::{PredictorError, TextPredictor};

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?u)\b\w+\b").expect("tokenizer regex"));

#[derive(Debug, Deserialize)]
struct Artifact {
    model: String,
    version: String,
    bias: f64,
    binary: bool,
    vocabulary: HashMap<String, f64>,
}

/// Loaded, validated text predictor. Immutable after construction.
pub struct TextModel {
    artifact: Artifact,
}

impl TextModel {
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
            terms = artifact.vocabulary.len(),
            path = %path.display(),
            "text model loaded"
        );
        Ok(Self { artifact })
    }

    pub fn version(&self) -> &str {
        &self.artifact.version
    }

    fn decision_score(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let mut score = self.artifact.bias;
        if self.artifact.binary {
            let mut seen: HashSet<&str> = HashSet::new();
            for tok in TOKEN.find_iter(&lower) {
                let t = tok.as_str();
                if seen.insert(t) {
                    if let Some(w) = self.artifact.vocabulary.get(t) {
                        score += w;
                    }
                }
            }
        } else {
            for tok in TOKEN.find_iter(&lower) {
                if let Some(w) = self.artifact.vocabulary.get(tok.as_str()) {
                    score += w;
                }
            }
        }
        score
    }
}

fn validate(path: &Path, artifact: &Artifact) -> Result<(), PredictorError> {
    if artifact.vocabulary.is_empty() {
        return Err(PredictorError::Invalid {
            path: path.to_path_buf(),
            detail: "empty vocabulary".to_string(),
        });
    }
    // The scorer lowercases its input, so an uppercase vocabulary entry
    // could never match anything.
    for term in artifact.vocabulary.keys() {
        if term != &term.to_lowercase() {
            return Err(PredictorError::Invalid {
                path: path.to_path_buf(),
                detail: format!("vocabulary term {term:?} is not lowercase"),
            });
        }
    }
    Ok(())
}

impl TextPredictor for TextModel {
    fn flags_scam(&self, text: &str) -> Result<bool, PredictorError> {
        Ok(self.decision_score(text) > 0.0)
    }

    fn name(&self) -> &str {
        &self.artifact.model
    }
}
