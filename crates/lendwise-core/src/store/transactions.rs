use chrono::Utc;

use super::OriginationStore;
use crate::model::{Transaction, TransactionDraft, TransactionStatus};
use crate::validation;
use crate::LendWiseResult;

impl OriginationStore {
    pub fn transactions(&self) -> Vec<Transaction> {
        self.simulate_latency();
        self.lock().transactions.clone()
    }

    pub fn transactions_for_user(&self, user_id: &str) -> Vec<Transaction> {
        self.simulate_latency();
        self.lock()
            .transactions
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn transactions_for_loan(&self, loan_id: &str) -> Vec<Transaction> {
        self.simulate_latency();
        self.lock()
            .transactions
            .iter()
            .filter(|t| t.loan_id == loan_id)
            .cloned()
            .collect()
    }

    /// Record a ledger entry. The entry settles immediately; there is no
    /// reconciliation against the application status (out of scope).
    pub fn record_transaction(&self, draft: TransactionDraft) -> LendWiseResult<Transaction> {
        self.simulate_latency();
        validation::validate_transaction_draft(&draft)?;

        let mut state = self.lock();
        let transaction = Transaction {
            id: state.next_transaction_id(),
            user_id: draft.user_id,
            loan_id: draft.loan_id,
            kind: draft.kind,
            amount: draft.amount,
            description: draft.description,
            status: TransactionStatus::Completed,
            created_at: Utc::now(),
        };
        state.transactions.push(transaction.clone());
        Ok(transaction)
    }
}
