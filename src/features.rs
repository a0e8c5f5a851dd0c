//! Heuristic feature extraction over a submitted posting.
//!
//! Everything here is deterministic and pure: the same posting always yields
//! the same [`FeatureVector`]. The rules mirror the signals the tabular model
//! was trained on, so the constants below must stay in lockstep with the
//! model artifact (see `models/yewo_nigerian.json`).
//!
//! All lengths and counts are in characters, not bytes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::posting::{Department, EmploymentType, JobPosting};

/// Keywords that dominate Nigerian job-scam reports. Matched as plain
/// substrings of the lowercased combined text, so "WhatsApp" and
/// "prepayment" both count.
pub const RED_FLAG_KEYWORDS: [&str; 6] = [
    "whatsapp",
    "telegram",
    "fee",
    "payment",
    "registration",
    "bvn",
];

/// Free-mail domains. A real employer recruiting through one of these is the
/// exception, a scammer is the rule.
pub const PERSONAL_EMAIL_DOMAINS: [&str; 3] = ["@gmail.com", "@yahoo.com", "@outlook.com"];

/// Nigerian mobile numbers in local (`0xx...`) or international (`+234xx...`)
/// form. Unanchored: a number buried mid-sentence still matches.
static NIGERIAN_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\+234|0)[789][01]\d{8}").expect("phone regex"));

/// Each heuristic hit is worth the same fixed number of points.
pub const SCAM_SCORE_STEP: u32 = 3;

/// Everything the downstream models and the explanation templates need,
/// extracted once per request.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureVector {
    /// Characters in the job description.
    pub job_desc_length: usize,
    /// Characters in the company description.
    pub company_desc_length: usize,
    /// Uppercase chars in the description divided by `len + 1`.
    pub percent_caps: f64,
    /// `!` occurrences in the description.
    pub exclamation_count: usize,
    /// Red-flag keywords found in the combined text, in catalog order.
    pub matched_keywords: Vec<&'static str>,
    pub has_personal_email: bool,
    pub has_nigerian_phone: bool,
    /// 3 points per matched keyword kind, +3 for a personal email,
    /// +3 for a Nigerian mobile number.
    pub scam_score: u32,
    pub has_company_name: bool,
    pub has_company_desc: bool,
    pub has_job_requirement: bool,
    pub employment_type: EmploymentType,
    pub department: Department,
}

impl FeatureVector {
    /// True when any heuristic fired.
    pub fn has_red_flags(&self) -> bool {
        self.scam_score > 0
    }
}

/// Title, description and requirements joined with single spaces. This is the
/// text both the keyword scan and the global text model operate on.
pub fn combined_text(posting: &JobPosting) -> String {
    format!(
        "{} {} {}",
        posting.job_title, posting.job_description, posting.job_requirements
    )
}

fn uppercase_ratio(text: &str) -> f64 {
    let upper = text.chars().filter(|c| c.is_uppercase()).count();
    // +1 keeps the empty description at ratio 0 instead of dividing by zero.
    upper as f64 / (text.chars().count() as f64 + 1.0)
}

/// Runs every heuristic over the posting and assembles the feature vector.
pub fn extract(posting: &JobPosting) -> FeatureVector {
    let combined = combined_text(posting);
    let combined_lower = combined.to_lowercase();

    let matched_keywords: Vec<&'static str> = RED_FLAG_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| combined_lower.contains(kw))
        .collect();
    let has_personal_email = PERSONAL_EMAIL_DOMAINS
        .iter()
        .any(|domain| combined_lower.contains(domain));
    let has_nigerian_phone = NIGERIAN_PHONE.is_match(&combined);

    let scam_score = SCAM_SCORE_STEP
        * (matched_keywords.len() as u32
            + u32::from(has_personal_email)
            + u32::from(has_nigerian_phone));

    FeatureVector {
        job_desc_length: posting.job_description.chars().count(),
        company_desc_length: posting.company_description.chars().count(),
        percent_caps: uppercase_ratio(&posting.job_description),
        exclamation_count: posting.job_description.matches('!').count(),
        matched_keywords,
        has_personal_email,
        has_nigerian_phone,
        scam_score,
        has_company_name: posting.company_name.chars().count() > 3,
        has_company_desc: posting.company_description.chars().count() > 10,
        has_job_requirement: posting.job_requirements.chars().count() > 10,
        employment_type: posting.employment_type,
        department: posting.department,
    }
}
