//! Job posting input model: the raw form fields plus the closed categorical
//! sets the trained models were fitted on.
//!
//! The enum labels are load-bearing: they key the categorical coefficients in
//! the tabular model artifact, so serde pins each variant to the exact label
//! string used at training time. Anything outside the closed sets is rejected
//! at the deserialization boundary and never reaches scoring.

use serde::{Deserialize, Serialize};

/// Contract/engagement type offered by the posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Temporary,
    Internship,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 5] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Contract,
        EmploymentType::Temporary,
        EmploymentType::Internship,
    ];

    /// The training-time label for this variant.
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Temporary => "Temporary",
            EmploymentType::Internship => "Internship",
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Industry/department the posting claims to belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "Marketing & Communications")]
    MarketingCommunications,
    #[serde(rename = "IT & Software")]
    ItSoftware,
    Sales,
    Admin,
    #[serde(rename = "Manufacturing & Warehousing")]
    ManufacturingWarehousing,
    #[serde(rename = "Accounting, Auditing & Finance")]
    AccountingAuditingFinance,
    Engineering,
    Banking,
    #[serde(rename = "Human Resources")]
    HumanResources,
    Education,
    Healthcare,
    Retail,
    #[serde(rename = "Shipping & Logistics")]
    ShippingLogistics,
    Government,
    Finance,
    Hospitality,
    Other,
}

impl Department {
    pub const ALL: [Department; 17] = [
        Department::MarketingCommunications,
        Department::ItSoftware,
        Department::Sales,
        Department::Admin,
        Department::ManufacturingWarehousing,
        Department::AccountingAuditingFinance,
        Department::Engineering,
        Department::Banking,
        Department::HumanResources,
        Department::Education,
        Department::Healthcare,
        Department::Retail,
        Department::ShippingLogistics,
        Department::Government,
        Department::Finance,
        Department::Hospitality,
        Department::Other,
    ];

    /// The training-time label for this variant.
    pub fn label(&self) -> &'static str {
        match self {
            Department::MarketingCommunications => "Marketing & Communications",
            Department::ItSoftware => "IT & Software",
            Department::Sales => "Sales",
            Department::Admin => "Admin",
            Department::ManufacturingWarehousing => "Manufacturing & Warehousing",
            Department::AccountingAuditingFinance => "Accounting, Auditing & Finance",
            Department::Engineering => "Engineering",
            Department::Banking => "Banking",
            Department::HumanResources => "Human Resources",
            Department::Education => "Education",
            Department::Healthcare => "Healthcare",
            Department::Retail => "Retail",
            Department::ShippingLogistics => "Shipping & Logistics",
            Department::Government => "Government",
            Department::Finance => "Finance",
            Department::Hospitality => "Hospitality",
            Department::Other => "Other",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One submitted posting. Built per request, scored once, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_title: String,
    pub job_description: String,
    #[serde(default)]
    pub job_requirements: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_description: String,
    pub employment_type: EmploymentType,
    pub department: Department,
}

/// Fields that must be non-blank before any scoring happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    JobTitle,
    JobDescription,
}

impl RequiredField {
    /// Wire/form name of the field, for error payloads and the UI.
    pub fn name(&self) -> &'static str {
        match self {
            RequiredField::JobTitle => "job_title",
            RequiredField::JobDescription => "job_description",
        }
    }

    /// Human label used in the inline warning.
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::JobTitle => "Job Title",
            RequiredField::JobDescription => "Job Description",
        }
    }
}

impl JobPosting {
    /// Returns the first required field that is empty or whitespace-only,
    /// checked in form order. `None` means the posting may be scored.
    pub fn missing_required_field(&self) -> Option<RequiredField> {
        if self.job_title.trim().is_empty() {
            return Some(RequiredField::JobTitle);
        }
        if self.job_description.trim().is_empty() {
            return Some(RequiredField::JobDescription);
        }
        None
    }
}
