//! Demo that scans a few canned postings with the shipped model artifacts
//! and prints the rendered reports.

use std::path::Path;

use yewo_scam_detector::{Department, EmploymentType, JobPosting, ScanEngine};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let engine = ScanEngine::load(Path::new("models"))?;

    let samples = [
        (
            "blatant local scam",
            JobPosting {
                job_title: "Urgent Personal Assistant (Work From Home)".to_string(),
                job_description: "Message our HR manager on WhatsApp today to secure your slot!!"
                    .to_string(),
                job_requirements: "Pay a 5000 Naira registration fee before onboarding."
                    .to_string(),
                company_name: String::new(),
                company_description: String::new(),
                employment_type: EmploymentType::FullTime,
                department: Department::Admin,
            },
        ),
        (
            "ordinary posting",
            JobPosting {
                job_title: "Accountant".to_string(),
                job_description: "Prepare monthly management accounts, reconcile bank \
                     statements and support the annual audit for our Lagos head office. \
                     You will work closely with the finance lead and report to the CFO."
                    .to_string(),
                job_requirements: "BSc in Accounting, ICAN membership, and at least three \
                     years of post-qualification experience."
                    .to_string(),
                company_name: "Horizon Foods Ltd".to_string(),
                company_description: "Horizon Foods is a consumer goods producer operating \
                     across West Africa since 1998."
                    .to_string(),
                employment_type: EmploymentType::FullTime,
                department: Department::AccountingAuditingFinance,
            },
        ),
    ];

    for (label, posting) in samples {
        let verdict = engine.scan(&posting)?;
        println!("=== {label} ===");
        println!("{}", verdict.report);
        println!();
    }

    println!("scan-demo done");
    Ok(())
}
