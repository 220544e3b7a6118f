use serde::{Deserialize, Serialize};

use super::OriginationStore;
use crate::model::{ApplicationStatus, LoanApplication};

/// Dashboard tile counts: one bucket per status plus the overall total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationStats {
    pub total: u32,
    pub pending: u32,
    pub approved: u32,
    pub rejected: u32,
    pub disbursed: u32,
    pub closed: u32,
    pub defaulted: u32,
}

impl ApplicationStats {
    fn bump(&mut self, status: ApplicationStatus) {
        self.total += 1;
        match status {
            ApplicationStatus::Pending => self.pending += 1,
            ApplicationStatus::Approved => self.approved += 1,
            ApplicationStatus::Rejected => self.rejected += 1,
            ApplicationStatus::Disbursed => self.disbursed += 1,
            ApplicationStatus::Closed => self.closed += 1,
            ApplicationStatus::Defaulted => self.defaulted += 1,
        }
    }
}

/// Admin console listing filter: status tab plus free-text search over
/// applicant name, application number, and email.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ApplicationFilter {
    fn matches(&self, app: &LoanApplication) -> bool {
        if let Some(ref user_id) = self.user_id {
            if &app.user_id != user_id {
                return false;
            }
        }
        if let Some(status) = self.status {
            if app.status != status {
                return false;
            }
        }
        if let Some(ref search) = self.search {
            let needle = search.to_lowercase();
            let hit = app.full_name.to_lowercase().contains(&needle)
                || app.application_number.to_lowercase().contains(&needle)
                || app.email.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}

impl OriginationStore {
    pub fn filtered_applications(&self, filter: &ApplicationFilter) -> Vec<LoanApplication> {
        self.simulate_latency();
        self.lock()
            .applications
            .iter()
            .filter(|app| filter.matches(app))
            .cloned()
            .collect()
    }

    /// Counts for one user's dashboard, or across the book when `user_id`
    /// is None.
    pub fn application_stats(&self, user_id: Option<&str>) -> ApplicationStats {
        self.simulate_latency();
        let state = self.lock();
        let mut stats = ApplicationStats::default();
        for app in &state.applications {
            if let Some(user_id) = user_id {
                if app.user_id != user_id {
                    continue;
                }
            }
            stats.bump(app.status);
        }
        stats
    }
}
