use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use serde_json::Value;

use lendwise_core::model::{ApplicationDraft, ApplicationStatus};
use lendwise_core::store::{ApplicationFilter, OriginationStore};

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusOpt {
    Pending,
    Approved,
    Rejected,
    Disbursed,
    Closed,
    Defaulted,
}

impl From<StatusOpt> for ApplicationStatus {
    fn from(value: StatusOpt) -> Self {
        match value {
            StatusOpt::Pending => ApplicationStatus::Pending,
            StatusOpt::Approved => ApplicationStatus::Approved,
            StatusOpt::Rejected => ApplicationStatus::Rejected,
            StatusOpt::Disbursed => ApplicationStatus::Disbursed,
            StatusOpt::Closed => ApplicationStatus::Closed,
            StatusOpt::Defaulted => ApplicationStatus::Defaulted,
        }
    }
}

/// Arguments for the application listing
#[derive(Args)]
pub struct ApplicationsArgs {
    /// Only show applications in this status
    #[arg(long)]
    pub status: Option<StatusOpt>,

    /// Free-text search over name, application number, and email
    #[arg(long)]
    pub search: Option<String>,

    /// Only show applications belonging to this user
    #[arg(long)]
    pub user: Option<String>,
}

/// Arguments for showing a single application
#[derive(Args)]
pub struct ApplicationArgs {
    /// Application id, e.g. app_2
    pub id: String,

    /// Include the repayment schedule computed from the stored terms
    #[arg(long)]
    pub schedule: bool,

    /// Limit the schedule to the first N entries
    #[arg(long, requires = "schedule")]
    pub preview: Option<usize>,

    /// Schedule computation date (YYYY-MM-DD, defaults to today)
    #[arg(long, requires = "schedule")]
    pub as_of: Option<NaiveDate>,
}

/// Arguments for submitting an intake draft
#[derive(Args)]
pub struct SubmitArgs {
    /// Path to a JSON draft (reads stdin when piped)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for a status transition
#[derive(Args)]
pub struct SetStatusArgs {
    /// Application id
    pub id: String,

    /// Target status
    #[arg(long)]
    pub status: StatusOpt,

    /// Reviewer notes recorded in the audit trail
    #[arg(long)]
    pub notes: String,

    /// Acting reviewer
    #[arg(long, default_value = "Loan Officer")]
    pub actor: String,
}

/// Arguments for attaching a note
#[derive(Args)]
pub struct AddNoteArgs {
    /// Application id
    pub id: String,

    /// Note content
    #[arg(long)]
    pub content: String,

    /// Acting reviewer
    #[arg(long, default_value = "Loan Officer")]
    pub actor: String,
}

/// Arguments for dashboard stats
#[derive(Args)]
pub struct StatsArgs {
    /// Restrict counts to one user's applications
    #[arg(long)]
    pub user: Option<String>,
}

pub fn run_list(args: ApplicationsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let store = OriginationStore::seeded();
    let filter = ApplicationFilter {
        user_id: args.user,
        status: args.status.map(Into::into),
        search: args.search,
    };
    let applications = store.filtered_applications(&filter);
    Ok(serde_json::to_value(applications)?)
}

pub fn run_show(args: ApplicationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let store = OriginationStore::seeded();
    let application = store.application(&args.id)?;

    if !args.schedule {
        return Ok(serde_json::to_value(application)?);
    }

    let mut schedule = store.repayment_schedule(&args.id, args.as_of)?;
    if let Some(preview) = args.preview {
        schedule.result.truncate(preview);
    }
    Ok(serde_json::json!({
        "application": application,
        "schedule": schedule,
    }))
}

pub fn run_submit(args: SubmitArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let draft: ApplicationDraft = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input is required (or pipe a JSON draft to stdin)".into());
    };

    let store = OriginationStore::seeded();
    let application = store.submit_application(draft)?;
    Ok(serde_json::to_value(application)?)
}

pub fn run_set_status(args: SetStatusArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let store = OriginationStore::seeded();
    let application =
        store.update_application_status(&args.id, args.status.into(), &args.notes, &args.actor)?;
    Ok(serde_json::to_value(application)?)
}

pub fn run_add_note(args: AddNoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let store = OriginationStore::seeded();
    let note = store.add_application_note(&args.id, &args.content, &args.actor)?;
    Ok(serde_json::to_value(note)?)
}

pub fn run_stats(args: StatsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let store = OriginationStore::seeded();
    let stats = store.application_stats(args.user.as_deref());
    Ok(serde_json::to_value(stats)?)
}
