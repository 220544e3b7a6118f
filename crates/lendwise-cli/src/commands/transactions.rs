use clap::Args;
use serde_json::Value;

use lendwise_core::model::TransactionDraft;
use lendwise_core::store::OriginationStore;

use crate::input;

/// Arguments for the transaction listing
#[derive(Args)]
pub struct TransactionsArgs {
    /// Only show this user's transactions
    #[arg(long, conflicts_with = "loan")]
    pub user: Option<String>,

    /// Only show transactions against this loan
    #[arg(long)]
    pub loan: Option<String>,
}

/// Arguments for recording a transaction
#[derive(Args)]
pub struct RecordTransactionArgs {
    /// Path to a JSON transaction draft (reads stdin when piped)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_list(args: TransactionsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let store = OriginationStore::seeded();
    let transactions = match (args.user, args.loan) {
        (Some(ref user), _) => store.transactions_for_user(user),
        (_, Some(ref loan)) => store.transactions_for_loan(loan),
        _ => store.transactions(),
    };
    Ok(serde_json::to_value(transactions)?)
}

pub fn run_record(args: RecordTransactionArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let draft: TransactionDraft = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input is required (or pipe a JSON draft to stdin)".into());
    };

    let store = OriginationStore::seeded();
    let transaction = store.record_transaction(draft)?;
    Ok(serde_json::to_value(transaction)?)
}
