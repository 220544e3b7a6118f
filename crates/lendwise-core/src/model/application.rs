use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleInput;
use crate::types::{Money, RatePercent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
    Disbursed,
    Closed,
    Defaulted,
}

/// Free-form reviewer note attached to an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub application_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

/// One row of the application's status audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChange {
    pub id: String,
    pub application_id: String,
    pub status: ApplicationStatus,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanApplication {
    pub id: String,
    pub user_id: String,
    /// Human-facing reference, e.g. LW-20230115-4821.
    pub application_number: String,
    pub status: ApplicationStatus,

    // Personal information
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    pub phone_number: String,
    pub address: String,
    pub email: String,

    // Employment
    pub employment_status: String,
    pub employer: String,
    pub monthly_income: Money,
    pub employment_duration: String,

    // Loan terms
    pub loan_amount: Money,
    pub loan_purpose: String,
    pub loan_term: u32,
    pub interest_rate: RatePercent,

    // Banking
    pub bank_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    pub account_number: String,
    pub account_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub status_history: Vec<StatusChange>,
}

impl LoanApplication {
    /// Engine input derived from the stored terms. The schedule itself is
    /// never stored; it is recomputed from these on every request.
    pub fn schedule_input(&self, as_of: Option<NaiveDate>) -> ScheduleInput {
        ScheduleInput {
            principal: self.loan_amount,
            annual_rate_percent: self.interest_rate,
            term_months: self.loan_term,
            as_of,
        }
    }
}

/// What an applicant submits from the intake wizard. The store assigns
/// identity, status, pricing, and timestamps on acceptance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDraft {
    pub user_id: String,

    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    pub phone_number: String,
    pub address: String,
    pub email: String,

    pub employment_status: String,
    pub employer: String,
    pub monthly_income: Money,
    pub employment_duration: String,

    pub loan_amount: Money,
    pub loan_purpose: String,
    pub loan_term: u32,

    pub bank_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    pub account_number: String,
    pub account_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}
