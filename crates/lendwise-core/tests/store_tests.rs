use lendwise_core::model::{
    ApplicationDraft, ApplicationStatus, TransactionDraft, TransactionType,
};
use lendwise_core::store::{ApplicationFilter, OriginationStore};
use lendwise_core::LendWiseError;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn draft() -> ApplicationDraft {
    ApplicationDraft {
        user_id: "usr_1".into(),
        full_name: "Jane Applicant".into(),
        national_id: Some("ID-10101".into()),
        phone_number: "+15550001111".into(),
        address: "9 Harbor Lane, Port City".into(),
        email: "jane@example.com".into(),
        employment_status: "employed".into(),
        employer: "Harbor Logistics".into(),
        monthly_income: dec!(65_000),
        employment_duration: "5+".into(),
        loan_amount: dec!(400_000),
        loan_purpose: "Business expansion".into(),
        loan_term: 36,
        bank_name: "Metro Bank".into(),
        account_name: Some("Jane Applicant".into()),
        account_number: "9988776655".into(),
        account_type: "savings".into(),
        additional_info: None,
    }
}

// ===========================================================================
// Seed data
// ===========================================================================

#[test]
fn test_seeded_store_contents() {
    let store = OriginationStore::seeded();
    assert_eq!(store.users().len(), 2);
    assert_eq!(store.applications().len(), 3);
    assert_eq!(store.transactions().len(), 2);

    let app = store.application("app_2").unwrap();
    assert_eq!(app.status, ApplicationStatus::Approved);
    assert_eq!(app.loan_amount, dec!(5000));
    assert_eq!(app.status_history.len(), 2);
}

#[test]
fn test_unknown_ids_return_not_found() {
    let store = OriginationStore::seeded();
    for err in [
        store.application("app_404").unwrap_err(),
        store.user("usr_404").unwrap_err(),
    ] {
        match err {
            LendWiseError::NotFound { id, .. } => assert!(id.ends_with("404")),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }
}

// ===========================================================================
// Application lifecycle
// ===========================================================================

#[test]
fn test_submit_assigns_identity_and_defaults() {
    let store = OriginationStore::seeded();
    let app = store.submit_application(draft()).unwrap();

    assert_eq!(app.id, "app_4");
    assert_eq!(app.status, ApplicationStatus::Pending);
    assert_eq!(app.interest_rate, dec!(4.99));
    assert!(app.application_number.starts_with("LW-"));
    assert_eq!(app.application_number.len(), "LW-20230101-1234".len());
    assert_eq!(app.status_history.len(), 1);
    assert_eq!(app.status_history[0].created_by, "System");

    // The store now serves it back.
    assert_eq!(store.applications().len(), 4);
    assert_eq!(store.application("app_4").unwrap().full_name, "Jane Applicant");
}

#[test]
fn test_invalid_draft_leaves_store_untouched() {
    let store = OriginationStore::seeded();
    let mut bad = draft();
    bad.loan_amount = dec!(50);
    assert!(store.submit_application(bad).is_err());
    assert_eq!(store.applications().len(), 3);
}

#[test]
fn test_status_update_appends_audit_trail() {
    let store = OriginationStore::seeded();
    let app = store
        .update_application_status(
            "app_1",
            ApplicationStatus::Approved,
            "Verified income documents",
            "Loan Officer",
        )
        .unwrap();

    assert_eq!(app.status, ApplicationStatus::Approved);
    assert_eq!(app.status_history.len(), 3);
    let last = app.status_history.last().unwrap();
    assert_eq!(last.status, ApplicationStatus::Approved);
    assert_eq!(last.notes, "Verified income documents");
    assert!(app.updated_at >= app.created_at);
}

#[test]
fn test_status_update_requires_notes() {
    let store = OriginationStore::seeded();
    let err = store
        .update_application_status("app_1", ApplicationStatus::Rejected, "", "Loan Officer")
        .unwrap_err();
    match err {
        LendWiseError::InvalidInput { field, .. } => assert_eq!(field, "notes"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_add_note() {
    let store = OriginationStore::seeded();
    let note = store
        .add_application_note("app_2", "Requested updated payslip", "Reviewer")
        .unwrap();
    assert_eq!(note.application_id, "app_2");

    let app = store.application("app_2").unwrap();
    assert_eq!(app.notes.len(), 1);
    assert_eq!(app.notes[0].content, "Requested updated payslip");
}

#[test]
fn test_repayment_schedule_from_stored_terms() {
    let store = OriginationStore::seeded();
    let as_of = chrono::NaiveDate::from_ymd_opt(2023, 2, 15);
    let schedule = store.repayment_schedule("app_2", as_of).unwrap();

    // app_2: 5000 at 4.99% over 12 months.
    assert_eq!(schedule.result.len(), 12);
    assert!(schedule.result.last().unwrap().remaining_balance <= dec!(0.01));

    // Recomputed per request, not cached: both calls agree.
    let again = store.repayment_schedule("app_2", as_of).unwrap();
    assert_eq!(
        schedule.result[0].payment_amount,
        again.result[0].payment_amount
    );
}

// ===========================================================================
// Users and transactions
// ===========================================================================

#[test]
fn test_user_update_and_delete() {
    let store = OriginationStore::seeded();
    let patch = lendwise_core::model::UserPatch {
        address: Some("77 New Street".into()),
        ..Default::default()
    };
    let user = store.update_user("usr_1", patch).unwrap();
    assert_eq!(user.address, "77 New Street");
    assert_eq!(user.full_name, "John Doe");

    store.delete_user("usr_1").unwrap();
    assert_eq!(store.users().len(), 1);
    assert!(store.delete_user("usr_1").is_err());
}

#[test]
fn test_record_and_filter_transactions() {
    let store = OriginationStore::seeded();
    let txn = store
        .record_transaction(TransactionDraft {
            user_id: "usr_1".into(),
            loan_id: "app_2".into(),
            kind: TransactionType::Repayment,
            amount: dec!(450.25),
            description: "Monthly payment".into(),
        })
        .unwrap();
    assert_eq!(txn.id, "txn_3");

    assert_eq!(store.transactions_for_loan("app_2").len(), 3);
    assert_eq!(store.transactions_for_user("usr_1").len(), 3);
    assert!(store.transactions_for_user("usr_2").is_empty());
}

// ===========================================================================
// Stats and filtering
// ===========================================================================

#[test]
fn test_application_stats_per_user() {
    let store = OriginationStore::seeded();
    let stats = store.application_stats(Some("usr_1"));
    assert_eq!(stats.total, 3);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.approved, 1);
    assert_eq!(stats.rejected, 1);
    assert_eq!(stats.disbursed, 0);

    let nobody = store.application_stats(Some("usr_2"));
    assert_eq!(nobody.total, 0);
}

#[test]
fn test_filtered_listing() {
    let store = OriginationStore::seeded();

    let approved = store.filtered_applications(&ApplicationFilter {
        status: Some(ApplicationStatus::Approved),
        ..Default::default()
    });
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].id, "app_2");

    let by_number = store.filtered_applications(&ApplicationFilter {
        search: Some("20230310".into()),
        ..Default::default()
    });
    assert_eq!(by_number.len(), 1);
    assert_eq!(by_number[0].id, "app_3");

    let by_name = store.filtered_applications(&ApplicationFilter {
        search: Some("john".into()),
        status: Some(ApplicationStatus::Rejected),
        ..Default::default()
    });
    assert_eq!(by_name.len(), 1);

    let none = store.filtered_applications(&ApplicationFilter {
        search: Some("no such applicant".into()),
        ..Default::default()
    });
    assert!(none.is_empty());
}

#[test]
fn test_latency_knob_delays_operations() {
    use std::time::{Duration, Instant};

    let delay = Duration::from_millis(30);
    let store = OriginationStore::seeded().with_latency(delay);

    let start = Instant::now();
    let applications = store.applications();
    let elapsed = start.elapsed();

    // The simulated delay applies without changing results.
    assert_eq!(applications.len(), 3);
    assert!(
        elapsed >= delay,
        "expected at least {delay:?} of simulated latency, got {elapsed:?}"
    );
}

#[test]
fn test_store_is_shareable_across_threads() {
    use std::sync::Arc;

    let store = Arc::new(OriginationStore::seeded());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                store
                    .add_application_note("app_1", "Concurrent reviewer note", "Reviewer")
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(store.application("app_1").unwrap().notes.len(), 5);
}
