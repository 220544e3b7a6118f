use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{ApplicationDraft, TransactionDraft};
use crate::{LendWiseError, LendWiseResult};

/// Intake limits, in PHP.
pub const MIN_MONTHLY_INCOME: Decimal = dec!(5_000);
pub const MIN_LOAN_AMOUNT: Decimal = dec!(100_000);
pub const MAX_LOAN_AMOUNT: Decimal = dec!(3_000_000);

/// Validate an intake draft before it enters the store. The first failing
/// field rejects the whole draft; a partially valid application must never
/// be accepted.
pub fn validate_application_draft(draft: &ApplicationDraft) -> LendWiseResult<()> {
    require_min_len("full_name", &draft.full_name, 3)?;
    if let Some(ref national_id) = draft.national_id {
        require_min_len("national_id", national_id, 5)?;
    }
    validate_phone_number("phone_number", &draft.phone_number)?;
    require_min_len("address", &draft.address, 5)?;
    validate_email("email", &draft.email)?;

    require_non_empty("employment_status", &draft.employment_status)?;
    require_non_empty("employer", &draft.employer)?;
    require_non_empty("employment_duration", &draft.employment_duration)?;
    if draft.monthly_income < MIN_MONTHLY_INCOME {
        return Err(invalid(
            "monthly_income",
            format!("Monthly income must be at least PHP {MIN_MONTHLY_INCOME}."),
        ));
    }

    if draft.loan_amount < MIN_LOAN_AMOUNT {
        return Err(invalid(
            "loan_amount",
            format!("Loan amount must be at least PHP {MIN_LOAN_AMOUNT}."),
        ));
    }
    if draft.loan_amount > MAX_LOAN_AMOUNT {
        return Err(invalid(
            "loan_amount",
            format!("Loan amount cannot exceed PHP {MAX_LOAN_AMOUNT}."),
        ));
    }
    if draft.loan_term == 0 {
        return Err(invalid("loan_term", "Please select a loan term.".into()));
    }
    require_non_empty("loan_purpose", &draft.loan_purpose)?;

    require_non_empty("bank_name", &draft.bank_name)?;
    if let Some(ref account_name) = draft.account_name {
        require_min_len("account_name", account_name, 3)?;
    }
    require_min_len("account_number", &draft.account_number, 8)?;
    require_non_empty("account_type", &draft.account_type)?;

    Ok(())
}

/// Status updates must carry a reviewer note.
pub fn validate_status_notes(notes: &str) -> LendWiseResult<()> {
    require_min_len("notes", notes, 3)
}

pub fn validate_transaction_draft(draft: &TransactionDraft) -> LendWiseResult<()> {
    if draft.amount <= Decimal::ZERO {
        return Err(invalid("amount", "Amount must be positive.".into()));
    }
    require_min_len("description", &draft.description, 3)
}

// ---------------------------------------------------------------------------
// Field checks
// ---------------------------------------------------------------------------

fn validate_email(field: &str, value: &str) -> LendWiseResult<()> {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(invalid(field, "Please enter a valid email address.".into()));
    }
    Ok(())
}

fn validate_phone_number(field: &str, value: &str) -> LendWiseResult<()> {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < 10 {
        return Err(invalid(
            field,
            "Phone number must contain at least 10 digits.".into(),
        ));
    }
    Ok(())
}

fn require_min_len(field: &str, value: &str, min: usize) -> LendWiseResult<()> {
    if value.trim().chars().count() < min {
        return Err(invalid(
            field,
            format!("Must be at least {min} characters."),
        ));
    }
    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> LendWiseResult<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, "This field is required.".into()));
    }
    Ok(())
}

fn invalid(field: &str, reason: String) -> LendWiseError {
    LendWiseError::InvalidInput {
        field: field.into(),
        reason,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TransactionType;

    fn valid_draft() -> ApplicationDraft {
        ApplicationDraft {
            user_id: "usr_1".into(),
            full_name: "John Doe".into(),
            national_id: Some("ID-99887".into()),
            phone_number: "+15551234567".into(),
            address: "123 Main St, City, State, 12345".into(),
            email: "john@example.com".into(),
            employment_status: "employed".into(),
            employer: "Tech Corp Inc.".into(),
            monthly_income: dec!(50_000),
            employment_duration: "3-5".into(),
            loan_amount: dec!(150_000),
            loan_purpose: "Home renovation".into(),
            loan_term: 24,
            bank_name: "First National Bank".into(),
            account_name: Some("John Doe".into()),
            account_number: "1234567890".into(),
            account_type: "checking".into(),
            additional_info: None,
        }
    }

    #[test]
    fn test_valid_draft_accepted() {
        assert!(validate_application_draft(&valid_draft()).is_ok());
    }

    #[test]
    fn test_short_name_rejected() {
        let mut draft = valid_draft();
        draft.full_name = "Jo".into();
        let err = validate_application_draft(&draft).unwrap_err();
        match err {
            LendWiseError::InvalidInput { field, .. } => assert_eq!(field, "full_name"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_email_rejected() {
        for bad in ["not-an-email", "@example.com", "john@", "john@nodot"] {
            let mut draft = valid_draft();
            draft.email = bad.into();
            assert!(
                validate_application_draft(&draft).is_err(),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn test_phone_digits_counted_through_punctuation() {
        let mut draft = valid_draft();
        draft.phone_number = "+1 (555) 123-4567".into();
        assert!(validate_application_draft(&draft).is_ok());

        draft.phone_number = "555-1234".into();
        assert!(validate_application_draft(&draft).is_err());
    }

    #[test]
    fn test_loan_amount_bounds() {
        let mut draft = valid_draft();
        draft.loan_amount = dec!(99_999.99);
        assert!(validate_application_draft(&draft).is_err());

        draft.loan_amount = dec!(3_000_000.01);
        assert!(validate_application_draft(&draft).is_err());

        draft.loan_amount = MIN_LOAN_AMOUNT;
        assert!(validate_application_draft(&draft).is_ok());
        draft.loan_amount = MAX_LOAN_AMOUNT;
        assert!(validate_application_draft(&draft).is_ok());
    }

    #[test]
    fn test_low_income_rejected() {
        let mut draft = valid_draft();
        draft.monthly_income = dec!(4_999);
        let err = validate_application_draft(&draft).unwrap_err();
        match err {
            LendWiseError::InvalidInput { field, .. } => assert_eq!(field, "monthly_income"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_optional_national_id_skipped_when_absent() {
        let mut draft = valid_draft();
        draft.national_id = None;
        assert!(validate_application_draft(&draft).is_ok());

        draft.national_id = Some("123".into());
        assert!(validate_application_draft(&draft).is_err());
    }

    #[test]
    fn test_status_notes_length() {
        assert!(validate_status_notes("ok").is_err());
        assert!(validate_status_notes("Approved with standard terms").is_ok());
    }

    #[test]
    fn test_transaction_draft_rules() {
        let draft = TransactionDraft {
            user_id: "usr_1".into(),
            loan_id: "app_2".into(),
            kind: TransactionType::Repayment,
            amount: dec!(450.25),
            description: "Monthly payment".into(),
        };
        assert!(validate_transaction_draft(&draft).is_ok());

        let mut negative = draft.clone();
        negative.amount = dec!(-1);
        assert!(validate_transaction_draft(&negative).is_err());

        let mut terse = draft;
        terse.description = "ok".into();
        assert!(validate_transaction_draft(&terse).is_err());
    }
}
