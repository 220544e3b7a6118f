//! In-memory origination backend.
//!
//! This is the Rust rendition of the web client's mock API layer: a seeded,
//! mutex-guarded store with an optional artificial latency knob. There is no
//! real persistence behind it; everything lives for the life of the process.

mod applications;
mod seed;
mod stats;
mod transactions;
mod users;

pub use stats::{ApplicationFilter, ApplicationStats};

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use crate::model::{LoanApplication, Transaction, User};

pub struct OriginationStore {
    /// Simulated network delay applied to every operation, mirroring the
    /// mock API the web client shipped with. None in tests.
    latency: Option<Duration>,
    inner: Mutex<State>,
}

#[derive(Default)]
struct State {
    users: Vec<User>,
    applications: Vec<LoanApplication>,
    transactions: Vec<Transaction>,
    counters: Counters,
}

#[derive(Default)]
struct Counters {
    user: u64,
    application: u64,
    transaction: u64,
    note: u64,
    status_change: u64,
}

impl Default for OriginationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginationStore {
    /// An empty store with no latency.
    pub fn new() -> Self {
        OriginationStore {
            latency: None,
            inner: Mutex::new(State::default()),
        }
    }

    /// A store pre-loaded with the demo data set.
    pub fn seeded() -> Self {
        let store = Self::new();
        seed::load_demo_data(&mut store.lock());
        store
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A poisoned lock only means another caller panicked mid-operation;
        // the data itself is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            std::thread::sleep(latency);
        }
    }
}

impl State {
    fn next_user_id(&mut self) -> String {
        self.counters.user += 1;
        format!("usr_{}", self.counters.user)
    }

    fn next_application_id(&mut self) -> String {
        self.counters.application += 1;
        format!("app_{}", self.counters.application)
    }

    fn next_transaction_id(&mut self) -> String {
        self.counters.transaction += 1;
        format!("txn_{}", self.counters.transaction)
    }

    fn next_note_id(&mut self) -> String {
        self.counters.note += 1;
        format!("note_{}", self.counters.note)
    }

    fn next_status_change_id(&mut self) -> String {
        self.counters.status_change += 1;
        format!("stat_{}", self.counters.status_change)
    }
}
