use chrono::{NaiveDate, Utc};
use rand::Rng;
use rust_decimal_macros::dec;

use super::OriginationStore;
use crate::model::{
    ApplicationDraft, ApplicationStatus, LoanApplication, Note, StatusChange,
};
use crate::schedule::{self, ScheduleEntry};
use crate::types::{ComputationOutput, RatePercent};
use crate::validation;
use crate::{LendWiseError, LendWiseResult};

/// Rate assigned at intake; repricing happens at review, not submission.
pub const DEFAULT_INTEREST_RATE: RatePercent = dec!(4.99);

impl OriginationStore {
    pub fn applications(&self) -> Vec<LoanApplication> {
        self.simulate_latency();
        self.lock().applications.clone()
    }

    pub fn applications_for_user(&self, user_id: &str) -> Vec<LoanApplication> {
        self.simulate_latency();
        self.lock()
            .applications
            .iter()
            .filter(|app| app.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn application(&self, id: &str) -> LendWiseResult<LoanApplication> {
        self.simulate_latency();
        let state = self.lock();
        state
            .applications
            .iter()
            .find(|app| app.id == id)
            .cloned()
            .ok_or_else(|| LendWiseError::NotFound {
                entity: "Application",
                id: id.into(),
            })
    }

    /// Accept an intake draft. Validation runs first; a rejected draft
    /// leaves the store untouched.
    pub fn submit_application(
        &self,
        draft: ApplicationDraft,
    ) -> LendWiseResult<LoanApplication> {
        self.simulate_latency();
        validation::validate_application_draft(&draft)?;

        let mut state = self.lock();
        let id = state.next_application_id();
        let history_id = state.next_status_change_id();
        let now = Utc::now();

        let application = LoanApplication {
            id: id.clone(),
            user_id: draft.user_id,
            application_number: new_application_number(),
            status: ApplicationStatus::Pending,
            full_name: draft.full_name,
            national_id: draft.national_id,
            phone_number: draft.phone_number,
            address: draft.address,
            email: draft.email,
            employment_status: draft.employment_status,
            employer: draft.employer,
            monthly_income: draft.monthly_income,
            employment_duration: draft.employment_duration,
            loan_amount: draft.loan_amount,
            loan_purpose: draft.loan_purpose,
            loan_term: draft.loan_term,
            interest_rate: DEFAULT_INTEREST_RATE,
            bank_name: draft.bank_name,
            account_name: draft.account_name,
            account_number: draft.account_number,
            account_type: draft.account_type,
            additional_info: draft.additional_info,
            created_at: now,
            updated_at: now,
            notes: Vec::new(),
            status_history: vec![StatusChange {
                id: history_id,
                application_id: id,
                status: ApplicationStatus::Pending,
                notes: String::new(),
                created_at: now,
                created_by: "System".into(),
            }],
        };

        state.applications.push(application.clone());
        Ok(application)
    }

    /// Move an application to a new status, appending to its audit trail.
    pub fn update_application_status(
        &self,
        id: &str,
        status: ApplicationStatus,
        notes: &str,
        actor: &str,
    ) -> LendWiseResult<LoanApplication> {
        self.simulate_latency();
        validation::validate_status_notes(notes)?;

        let mut state = self.lock();
        let change_id = state.next_status_change_id();
        let application = state
            .applications
            .iter_mut()
            .find(|app| app.id == id)
            .ok_or_else(|| LendWiseError::NotFound {
                entity: "Application",
                id: id.into(),
            })?;

        let now = Utc::now();
        application.status = status;
        application.updated_at = now;
        application.status_history.push(StatusChange {
            id: change_id,
            application_id: id.into(),
            status,
            notes: notes.into(),
            created_at: now,
            created_by: actor.into(),
        });

        Ok(application.clone())
    }

    pub fn add_application_note(
        &self,
        id: &str,
        content: &str,
        actor: &str,
    ) -> LendWiseResult<Note> {
        self.simulate_latency();
        validation::validate_status_notes(content)?;

        let mut state = self.lock();
        let note_id = state.next_note_id();
        let application = state
            .applications
            .iter_mut()
            .find(|app| app.id == id)
            .ok_or_else(|| LendWiseError::NotFound {
                entity: "Application",
                id: id.into(),
            })?;

        let now = Utc::now();
        let note = Note {
            id: note_id,
            application_id: id.into(),
            content: content.into(),
            created_at: now,
            created_by: actor.into(),
        };
        application.notes.push(note.clone());
        application.updated_at = now;

        Ok(note)
    }

    /// Recompute the repayment schedule from the application's stored
    /// terms. Nothing is cached; the schedule has no lifecycle of its own.
    pub fn repayment_schedule(
        &self,
        id: &str,
        as_of: Option<NaiveDate>,
    ) -> LendWiseResult<ComputationOutput<Vec<ScheduleEntry>>> {
        let application = self.application(id)?;
        schedule::repayment_schedule(&application.schedule_input(as_of))
    }
}

/// Human-facing reference: LW-YYYYMMDD-NNNN with a random 4-digit suffix.
fn new_application_number() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(1000..10000);
    format!("LW-{}-{}", Utc::now().format("%Y%m%d"), suffix)
}
