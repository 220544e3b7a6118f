use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use super::State;
use crate::model::{
    ApplicationStatus, LoanApplication, Note, Role, StatusChange, Transaction,
    TransactionStatus, TransactionType, User,
};

/// Demo data set carried over from the web client's mock backend: two
/// users, three applications in different review states, and the ledger
/// for the one disbursed loan.
pub(super) fn load_demo_data(state: &mut State) {
    state.users = vec![
        User {
            id: "usr_1".into(),
            email: "john@example.com".into(),
            full_name: "John Doe".into(),
            phone_number: "+15551234567".into(),
            address: "123 Main St, City, State, 12345".into(),
            date_of_birth: date(1990, 1, 1),
            role: Role::Applicant,
            created_at: ts(2023, 1, 1, 0, 0),
            updated_at: ts(2023, 1, 1, 0, 0),
        },
        User {
            id: "usr_2".into(),
            email: "admin@example.com".into(),
            full_name: "Admin User".into(),
            phone_number: "+15559876543".into(),
            address: "456 Admin St, City, State, 12345".into(),
            date_of_birth: date(1985, 1, 1),
            role: Role::Admin,
            created_at: ts(2023, 1, 1, 0, 0),
            updated_at: ts(2023, 1, 1, 0, 0),
        },
    ];

    state.applications = vec![
        LoanApplication {
            id: "app_1".into(),
            user_id: "usr_1".into(),
            application_number: "LW-20230101-1234".into(),
            status: ApplicationStatus::Pending,
            full_name: "John Doe".into(),
            national_id: None,
            phone_number: "+15551234567".into(),
            address: "123 Main St, City, State, 12345".into(),
            email: "john@example.com".into(),
            employment_status: "employed".into(),
            employer: "Tech Corp Inc.".into(),
            monthly_income: dec!(5000),
            employment_duration: "3-5".into(),
            loan_amount: dec!(10_000),
            loan_purpose: "Home renovation".into(),
            loan_term: 24,
            interest_rate: dec!(5.99),
            bank_name: "First National Bank".into(),
            account_name: None,
            account_number: "1234567890".into(),
            account_type: "checking".into(),
            additional_info: None,
            created_at: ts(2023, 1, 15, 0, 0),
            updated_at: ts(2023, 1, 15, 0, 0),
            notes: vec![Note {
                id: "note_1".into(),
                application_id: "app_1".into(),
                content: "Applicant has excellent credit score.".into(),
                created_at: ts(2023, 1, 16, 10, 0),
                created_by: "Loan Officer".into(),
            }],
            status_history: vec![
                StatusChange {
                    id: "stat_1".into(),
                    application_id: "app_1".into(),
                    status: ApplicationStatus::Pending,
                    notes: String::new(),
                    created_at: ts(2023, 1, 15, 0, 0),
                    created_by: "System".into(),
                },
                StatusChange {
                    id: "stat_2".into(),
                    application_id: "app_1".into(),
                    status: ApplicationStatus::Pending,
                    notes: "Application under initial review".into(),
                    created_at: ts(2023, 1, 15, 12, 0),
                    created_by: "Loan Officer".into(),
                },
            ],
        },
        LoanApplication {
            id: "app_2".into(),
            user_id: "usr_1".into(),
            application_number: "LW-20230205-5678".into(),
            status: ApplicationStatus::Approved,
            full_name: "John Doe".into(),
            national_id: None,
            phone_number: "+15551234567".into(),
            address: "123 Main St, City, State, 12345".into(),
            email: "john@example.com".into(),
            employment_status: "employed".into(),
            employer: "Tech Corp Inc.".into(),
            monthly_income: dec!(5000),
            employment_duration: "3-5".into(),
            loan_amount: dec!(5000),
            loan_purpose: "Debt consolidation".into(),
            loan_term: 12,
            interest_rate: dec!(4.99),
            bank_name: "First National Bank".into(),
            account_name: None,
            account_number: "1234567890".into(),
            account_type: "checking".into(),
            additional_info: None,
            created_at: ts(2023, 2, 5, 0, 0),
            updated_at: ts(2023, 2, 10, 0, 0),
            notes: Vec::new(),
            status_history: vec![
                StatusChange {
                    id: "stat_3".into(),
                    application_id: "app_2".into(),
                    status: ApplicationStatus::Pending,
                    notes: String::new(),
                    created_at: ts(2023, 2, 5, 0, 0),
                    created_by: "System".into(),
                },
                StatusChange {
                    id: "stat_4".into(),
                    application_id: "app_2".into(),
                    status: ApplicationStatus::Approved,
                    notes: "Application approved with standard terms".into(),
                    created_at: ts(2023, 2, 10, 0, 0),
                    created_by: "Loan Officer".into(),
                },
            ],
        },
        LoanApplication {
            id: "app_3".into(),
            user_id: "usr_1".into(),
            application_number: "LW-20230310-9012".into(),
            status: ApplicationStatus::Rejected,
            full_name: "John Doe".into(),
            national_id: None,
            phone_number: "+15551234567".into(),
            address: "123 Main St, City, State, 12345".into(),
            email: "john@example.com".into(),
            employment_status: "employed".into(),
            employer: "Tech Corp Inc.".into(),
            monthly_income: dec!(5000),
            employment_duration: "3-5".into(),
            loan_amount: dec!(25_000),
            loan_purpose: "Business expansion".into(),
            loan_term: 36,
            interest_rate: dec!(6.99),
            bank_name: "First National Bank".into(),
            account_name: None,
            account_number: "1234567890".into(),
            account_type: "checking".into(),
            additional_info: None,
            created_at: ts(2023, 3, 10, 0, 0),
            updated_at: ts(2023, 3, 15, 0, 0),
            notes: Vec::new(),
            status_history: Vec::new(),
        },
    ];

    state.transactions = vec![
        Transaction {
            id: "txn_1".into(),
            user_id: "usr_1".into(),
            loan_id: "app_2".into(),
            kind: TransactionType::Withdrawal,
            amount: dec!(5000),
            description: "Loan withdrawal".into(),
            status: TransactionStatus::Completed,
            created_at: ts(2023, 2, 15, 10, 30),
        },
        Transaction {
            id: "txn_2".into(),
            user_id: "usr_1".into(),
            loan_id: "app_2".into(),
            kind: TransactionType::Repayment,
            amount: dec!(450.25),
            description: "Monthly payment".into(),
            status: TransactionStatus::Completed,
            created_at: ts(2023, 3, 15, 14, 20),
        },
    ];

    state.counters.user = 2;
    state.counters.application = 3;
    state.counters.transaction = 2;
    state.counters.note = 1;
    state.counters.status_change = 4;
}

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
