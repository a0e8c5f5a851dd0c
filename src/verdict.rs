//! Verdict types and report rendering.
//!
//! One verdict per scan: a risk tier, a confidence, and the explanation copy
//! the front-end shows. The markdown `report` keeps the exact wording and
//! layout users already know; the structured fields exist so clients can
//! render their own UI without parsing markdown.

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

/// Three mutually exclusive outcome tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    HighRisk,
    Caution,
    LowRisk,
}

impl RiskTier {
    /// Stable label, matches the wire form. Used for metrics labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::HighRisk => "HIGH_RISK",
            RiskTier::Caution => "CAUTION",
            RiskTier::LowRisk => "LOW_RISK",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptions shorter than this read as "too thin to be a real job ad"
/// when the tabular model flags a post without any keyword evidence.
pub const SHORT_DESCRIPTION_CHARS: usize = 150;

const HIGH_RISK_REASON_INDICATORS: &str = "Our Nigerian-focused model has flagged this post \
     because it contains high-risk indicators (like requests for payment, personal emails, \
     or WhatsApp numbers).";
const HIGH_RISK_REASON_BREVITY: &str = "Our Nigerian-focused model has flagged this post \
     because the description is unusually short and vague, a pattern commonly found in \
     fraudulent job postings.";
const HIGH_RISK_REASON_PATTERN: &str = "Our Nigerian-focused model has flagged this post \
     because it matches patterns commonly found in fraudulent job postings.";
const HIGH_RISK_RECOMMENDATION: &str =
    "Do NOT share personal details or make any payments. Avoid this opportunity.";

const CAUTION_REASON: &str = "Our primary Nigerian model did not find a direct match for \
     local scam tactics. However, our Global Expert model, trained on over 17,000 job posts, \
     detected that the general language and structure of this post are similar to \
     international job scams.";
const CAUTION_RECOMMENDATION: &str = "This job may be legitimate, but it is unusual. \
     Please research the company thoroughly before proceeding.";

const LOW_RISK_REASON: &str = "Neither our Nigerian-focused model nor our Global Expert \
     model detected high-risk indicators.";
const LOW_RISK_RECOMMENDATION: &str =
    "As always, please conduct your own research on the company.";

/// The complete scan outcome, shaped exactly like the API response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub verdict: RiskTier,
    /// In `[0.0, 1.0]`. Tabular-model probability for HighRisk, its
    /// complement for LowRisk, neutral 0.5 for the binary Caution tier.
    pub confidence: f32,
    pub reasoning: String,
    pub recommendation: String,
    /// Ready-to-render markdown combining banner, reasoning and
    /// recommendation.
    pub report: String,
    pub scam_score: u32,
}

impl Verdict {
    /// Tabular model at or above threshold. Exactly one reason is shown,
    /// first matching condition wins: keyword/contact evidence beats a thin
    /// description beats the generic pattern match.
    pub fn high_risk(probability: f64, features: &FeatureVector) -> Self {
        let reasoning = if features.has_red_flags() {
            HIGH_RISK_REASON_INDICATORS
        } else if features.job_desc_length < SHORT_DESCRIPTION_CHARS {
            HIGH_RISK_REASON_BREVITY
        } else {
            HIGH_RISK_REASON_PATTERN
        };
        let banner = format!(
            "HIGH RISK: LIKELY A SCAM (Nigerian Model Confidence: {})",
            percent(probability)
        );
        Self {
            verdict: RiskTier::HighRisk,
            confidence: clamp01(probability) as f32,
            reasoning: reasoning.to_string(),
            recommendation: HIGH_RISK_RECOMMENDATION.to_string(),
            report: format!(
                "{banner}\n\n**Reasoning:** {reasoning}\n\n**Recommendation:** {HIGH_RISK_RECOMMENDATION}"
            ),
            scam_score: features.scam_score,
        }
    }

    /// Tabular model stayed quiet but the global text model raised its hand.
    /// The text model is binary, so the banner carries no percentage and the
    /// confidence is a neutral 0.5.
    pub fn caution(features: &FeatureVector) -> Self {
        Self {
            verdict: RiskTier::Caution,
            confidence: 0.5,
            reasoning: CAUTION_REASON.to_string(),
            recommendation: CAUTION_RECOMMENDATION.to_string(),
            report: format!(
                "CAUTION: POTENTIAL RISK DETECTED\n\n**Reasoning:** {CAUTION_REASON}\n\n**Recommendation:** {CAUTION_RECOMMENDATION}"
            ),
            scam_score: features.scam_score,
        }
    }

    /// Both models stayed quiet. Confidence is the complement of the tabular
    /// scam probability.
    pub fn low_risk(probability: f64, features: &FeatureVector) -> Self {
        let legit = clamp01(1.0 - probability);
        let banner = format!(
            "LOW RISK: APPEARS LEGITIMATE (Nigerian Model Confidence: {})",
            percent(legit)
        );
        Self {
            verdict: RiskTier::LowRisk,
            confidence: legit as f32,
            reasoning: LOW_RISK_REASON.to_string(),
            recommendation: LOW_RISK_RECOMMENDATION.to_string(),
            // The low-risk report folds the advice into the reasoning block;
            // no separate recommendation section.
            report: format!("{banner}\n\n**Reasoning:** {LOW_RISK_REASON} {LOW_RISK_RECOMMENDATION}"),
            scam_score: features.scam_score,
        }
    }
}

fn percent(p: f64) -> String {
    format!("{:.0}%", p * 100.0)
}

fn clamp01(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}
