// tests/scan_e2e.rs
//
// End-to-end runs against the model artifacts shipped in models/. These pin
// the full protocol: heuristics -> tabular model -> (optional) text model ->
// rendered report. One test also goes through the HTTP surface.

use std::path::Path;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use tower::ServiceExt; // for `oneshot`

use yewo_scam_detector::api;
use yewo_scam_detector::engine::ScanEngine;
use yewo_scam_detector::posting::{Department, EmploymentType, JobPosting};
use yewo_scam_detector::verdict::RiskTier;

fn shipped_engine() -> ScanEngine {
    ScanEngine::load(Path::new("models")).expect("load shipped model artifacts")
}

/// The classic local scam shape: WhatsApp contact, upfront fee, no company.
fn blatant_scam() -> JobPosting {
    JobPosting {
        job_title: "Urgent Personal Assistant (Work From Home)".to_string(),
        job_description: "Message our HR manager on WhatsApp today to secure your slot!!"
            .to_string(),
        job_requirements: "Pay a 5000 Naira registration fee before onboarding.".to_string(),
        company_name: String::new(),
        company_description: String::new(),
        employment_type: EmploymentType::FullTime,
        department: Department::Admin,
    }
}

/// A perfectly ordinary posting with a named company and real requirements.
fn ordinary_accountant() -> JobPosting {
    JobPosting {
        job_title: "Accountant".to_string(),
        job_description: "Horizon Foods is hiring an experienced accountant to prepare \
             monthly management accounts, reconcile bank statements, and support the \
             annual audit for our Lagos operations."
            .to_string(),
        job_requirements: "ICAN or ACCA certification and at least four years of relevant \
             experience."
            .to_string(),
        company_name: "Horizon Foods Ltd".to_string(),
        company_description: "A food processing company operating in Lagos since 1998, \
             supplying retail chains across the South-West."
            .to_string(),
        employment_type: EmploymentType::FullTime,
        department: Department::AccountingAuditingFinance,
    }
}

/// Scam-adjacent language ("earn guaranteed weekly pay", "urgent") without a
/// single red-flag keyword, phone number or personal email. The local
/// heuristics stay quiet; only the global text model can catch this one.
fn too_good_to_be_true() -> JobPosting {
    JobPosting {
        job_title: "Data Entry Clerk (Remote)".to_string(),
        job_description: "Earn guaranteed weekly pay working from home. Urgent openings \
             for serious applicants, start immediately."
            .to_string(),
        job_requirements: "Own laptop and stable internet connection required.".to_string(),
        company_name: "BrightPath Services".to_string(),
        company_description: "A staffing agency connecting Nigerians with flexible remote work."
            .to_string(),
        employment_type: EmploymentType::FullTime,
        department: Department::Admin,
    }
}

#[test]
fn blatant_scam_posting_is_high_risk_with_indicator_reason() {
    let engine = shipped_engine();
    let v = engine.scan(&blatant_scam()).expect("scan");

    assert_eq!(v.verdict, RiskTier::HighRisk);
    // whatsapp + registration + fee, each worth 3 points.
    assert_eq!(v.scam_score, 9);
    assert!(v.confidence > 0.9, "confidence was {}", v.confidence);
    assert!(
        v.reasoning.contains("high-risk indicators"),
        "keyword evidence should pick the indicator reason, got {:?}",
        v.reasoning
    );
    assert!(v.report.starts_with("HIGH RISK: LIKELY A SCAM"));
    assert!(v.report.contains("Confidence: 99%"));
    assert!(v.report.contains("Do NOT share personal details"));
}

#[test]
fn scam_posting_features_match_the_heuristics() {
    let engine = shipped_engine();
    let fv = engine.features(&blatant_scam()).expect("features");

    assert_eq!(fv.matched_keywords, vec!["whatsapp", "fee", "registration"]);
    assert_eq!(fv.scam_score, 9);
    assert!(!fv.has_nigerian_phone);
    assert!(!fv.has_personal_email);
    assert!(!fv.has_company_name);
    assert_eq!(fv.exclamation_count, 2);
}

#[test]
fn shouty_thin_posting_gets_the_brevity_reason() {
    // No keywords at all, but ALL CAPS plus a wall of bangs in a 15-char
    // description pushes the tabular model over the threshold on its own.
    let engine = shipped_engine();
    let posting = JobPosting {
        job_title: "Agent".to_string(),
        job_description: "APPLY NOW!!!!!!".to_string(),
        job_requirements: String::new(),
        company_name: String::new(),
        company_description: String::new(),
        employment_type: EmploymentType::FullTime,
        department: Department::Other,
    };
    let v = engine.scan(&posting).expect("scan");

    assert_eq!(v.verdict, RiskTier::HighRisk);
    assert_eq!(v.scam_score, 0);
    assert!(
        v.reasoning.contains("unusually short"),
        "no keyword evidence, so the brevity reason should win, got {:?}",
        v.reasoning
    );
}

#[test]
fn ordinary_accountant_posting_is_low_risk() {
    let engine = shipped_engine();
    let v = engine.scan(&ordinary_accountant()).expect("scan");

    assert_eq!(v.verdict, RiskTier::LowRisk);
    assert_eq!(v.scam_score, 0);
    assert!(v.confidence > 0.85, "confidence was {}", v.confidence);
    assert!(v.report.starts_with("LOW RISK: APPEARS LEGITIMATE"));
    assert!(v.report.contains("Confidence: 92%"));
    assert!(v.report.contains("conduct your own research"));
}

#[test]
fn global_text_model_catches_language_the_local_heuristics_miss() {
    let engine = shipped_engine();

    // Precondition: no local heuristic fires on this posting.
    let fv = engine.features(&too_good_to_be_true()).expect("features");
    assert_eq!(fv.scam_score, 0, "posting must carry no red-flag keywords");

    let v = engine.scan(&too_good_to_be_true()).expect("scan");
    assert_eq!(v.verdict, RiskTier::Caution);
    assert!((v.confidence - 0.5).abs() < 1e-6);
    assert!(v.report.starts_with("CAUTION: POTENTIAL RISK DETECTED"));
    assert!(!v.report.contains('%'), "binary model, no percentage");
    assert!(v.reasoning.contains("Global Expert model"));
}

#[test]
fn scanning_the_same_posting_twice_is_byte_identical() {
    let engine = shipped_engine();
    let a = engine.scan(&blatant_scam()).expect("scan once");
    let b = engine.scan(&blatant_scam()).expect("scan twice");
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).expect("serialize a"),
        serde_json::to_string(&b).expect("serialize b"),
    );
}

#[tokio::test]
async fn http_analyze_end_to_end_with_shipped_models() {
    let app = api::create_router(shipped_engine());

    let payload = serde_json::json!({
        "job_title": "Urgent Personal Assistant (Work From Home)",
        "job_description": "Message our HR manager on WhatsApp today to secure your slot!!",
        "job_requirements": "Pay a 5000 Naira registration fee before onboarding.",
        "company_name": "",
        "company_description": "",
        "employment_type": "Full-time",
        "department": "Admin"
    });
    let req = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build POST /analyze");

    let resp = app.oneshot(req).await.expect("oneshot /analyze");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    let s = String::from_utf8(bytes.to_vec()).expect("utf8");
    assert!(s.contains("\"verdict\":\"HIGH_RISK\""), "body: {s}");
    assert!(s.contains("HIGH RISK: LIKELY A SCAM"), "body: {s}");
}
