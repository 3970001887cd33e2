use crate::locale::Language;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One timesheet export row exactly as it comes out of the CSV.
#[derive(Debug, Default, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Consultant")]
    pub consultant: Option<String>,
    #[serde(rename = "Prj Code")]
    pub project_code: Option<String>,
    #[serde(rename = "Employee Status")]
    pub employee_status: Option<String>,
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Activity")]
    pub activity: Option<String>,
    #[serde(rename = "Cost (Consultant Curr)")]
    pub rate: Option<String>,
    #[serde(rename = "Total Hours")]
    pub hours: Option<String>,
    #[serde(rename = "Total Cost (Orig Currency)")]
    pub cost: Option<String>,
    #[serde(rename = "Consultant Currency")]
    pub currency: Option<String>,
    #[serde(rename = "Internal ID")]
    pub internal_id: Option<String>,
}

/// An eligible row with every field coerced to its typed value.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub consultant: String,
    pub project_code: String,
    pub internal_id: String,
    pub activity: String,
    pub rate: f64,
    pub hours: f64,
    pub cost: f64,
    pub currency: String,
}

/// Finest aggregation unit: one activity at one negotiated rate.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityBucket {
    pub activity: String,
    pub rate: f64,
    pub hours: f64,
    pub currency: String,
}

/// Two buckets merge only when both the label and the exact rate match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivityKey {
    activity: String,
    rate_bits: u64,
}

impl ActivityKey {
    pub fn new(activity: &str, rate: f64) -> Self {
        Self {
            activity: activity.to_string(),
            rate_bits: rate.to_bits(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectAggregate {
    pub activities: IndexMap<ActivityKey, ActivityBucket>,
    pub internal_ids: Vec<String>,
    pub total_cost: f64,
    /// Last currency seen among the project's rows.
    pub currency: String,
}

/// Projects of one consultant, in first-seen order.
pub type ConsultantAggregate = IndexMap<String, ProjectAggregate>;

/// Consultants in first-seen order.
pub type Consultants = IndexMap<String, ConsultantAggregate>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedEmail {
    pub consultant: String,
    pub first_name: String,
    pub subject: String,
    pub body: String,
    pub is_english: bool,
    #[serde(skip)]
    pub language: Language,
    #[serde(skip)]
    pub project_count: usize,
    /// Grand total as printed in the body, e.g. `"USD 90.00"`.
    #[serde(skip)]
    pub total: String,
}

/// Outcome handed back to callers. Never an error: inspect `success`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_emails: Option<usize>,
    pub emails: Vec<RenderedEmail>,
}

impl ProcessingResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            month: None,
            total_emails: None,
            emails: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct EmailSummaryRow {
    #[serde(rename = "Consultant")]
    #[tabled(rename = "Consultant")]
    pub consultant: String,
    #[serde(rename = "Language")]
    #[tabled(rename = "Language")]
    pub language: String,
    #[serde(rename = "Projects")]
    #[tabled(rename = "Projects")]
    pub projects: usize,
    #[serde(rename = "Total")]
    #[tabled(rename = "Total")]
    pub total: String,
}

impl From<&RenderedEmail> for EmailSummaryRow {
    fn from(email: &RenderedEmail) -> Self {
        Self {
            consultant: email.consultant.clone(),
            language: email.language.code().to_string(),
            projects: email.project_count,
            total: email.total.clone(),
        }
    }
}
