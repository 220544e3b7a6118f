use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::{types::*, LendWiseError, LendWiseResult};

/// Payment dates advance by a fixed 30-day stride rather than true calendar
/// months. Schedules already shown to borrowers were produced this way, so
/// the stride is load-bearing.
const DAYS_PER_PERIOD: i64 = 30;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    /// Original loan amount.
    pub principal: Money,
    /// Annual rate as a percentage (4.0 means 4%).
    pub annual_rate_percent: RatePercent,
    pub term_months: u32,
    /// Date the schedule is computed from. Defaults to today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub payment_number: u32,
    pub payment_date: NaiveDate,
    pub payment_amount: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub remaining_balance: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the complete month-by-month repayment schedule for a fixed-rate,
/// fixed-term amortizing loan.
///
/// The schedule is a pure derived value: callers recompute it from the
/// stored loan terms on every request and never persist it.
pub fn repayment_schedule(
    input: &ScheduleInput,
) -> LendWiseResult<ComputationOutput<Vec<ScheduleEntry>>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let as_of = input.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let rate = monthly_rate(input.annual_rate_percent);
    let payment = monthly_payment(input.principal, rate, input.term_months)?;

    let mut entries = Vec::with_capacity(input.term_months as usize);
    let mut balance = input.principal;

    for month in 1..=input.term_months {
        let interest = balance * rate;
        let principal_portion = payment - interest;
        balance = (balance - principal_portion).max(Decimal::ZERO);

        let payment_date = as_of + Duration::days(DAYS_PER_PERIOD * i64::from(month));

        // Each currency field is rounded independently at emission; the
        // unrounded balance carries through the loop. Cent-level drift on
        // the final entry is tolerated, not corrected.
        entries.push(ScheduleEntry {
            payment_number: month,
            payment_date,
            payment_amount: round_currency(payment),
            principal_portion: round_currency(principal_portion),
            interest_portion: round_currency(interest),
            remaining_balance: round_currency(balance),
        });
    }

    let principal_paid: Decimal = entries.iter().map(|e| e.principal_portion).sum();
    let drift = (principal_paid - input.principal).abs();
    if drift > dec!(0.01) * Decimal::from(input.term_months) {
        warnings.push(format!(
            "Rounded principal portions reconcile to {principal_paid}, {drift} away from the original principal"
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "monthly_rate": rate.to_string(),
        "day_stride": format!("{DAYS_PER_PERIOD}d"),
        "rounding": "2dp per field, midpoint away from zero",
        "as_of": as_of.to_string(),
    });

    Ok(with_metadata(
        "Fixed-payment amortization schedule",
        &assumptions,
        warnings,
        elapsed,
        entries,
    ))
}

/// Level payment for an amortizing loan: P * r * (1+r)^n / ((1+r)^n - 1).
/// A zero rate degenerates to equal principal installments.
pub fn monthly_payment(principal: Money, rate: Decimal, term_months: u32) -> LendWiseResult<Money> {
    let n = Decimal::from(term_months);
    if rate.is_zero() {
        if n.is_zero() {
            return Err(LendWiseError::DivisionByZero {
                context: "zero-rate payment with zero term".into(),
            });
        }
        return Ok(principal / n);
    }

    let growth = (Decimal::ONE + rate).powd(n);
    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        return Err(LendWiseError::DivisionByZero {
            context: "amortization payment denominator".into(),
        });
    }
    Ok(principal * rate * growth / denominator)
}

pub fn monthly_rate(annual_rate_percent: RatePercent) -> Decimal {
    annual_rate_percent / dec!(100) / dec!(12)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn round_currency(amount: Money) -> Money {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn validate_input(input: &ScheduleInput) -> LendWiseResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(LendWiseError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive.".into(),
        });
    }
    if input.annual_rate_percent < Decimal::ZERO {
        return Err(LendWiseError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "Interest rate cannot be negative.".into(),
        });
    }
    if input.term_months == 0 {
        return Err(LendWiseError::InvalidInput {
            field: "term_months".into(),
            reason: "Term must be at least one month.".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base_input() -> ScheduleInput {
        ScheduleInput {
            principal: dec!(100_000),
            annual_rate_percent: dec!(4.0),
            term_months: 12,
            as_of: NaiveDate::from_ymd_opt(2023, 1, 1),
        }
    }

    #[test]
    fn test_entry_count_and_ordering() {
        let result = repayment_schedule(&base_input()).unwrap();
        let entries = &result.result;
        assert_eq!(entries.len(), 12);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.payment_number, i as u32 + 1);
        }
    }

    #[test]
    fn test_first_month_interest() {
        let result = repayment_schedule(&base_input()).unwrap();
        // 100k * (4% / 12) = 333.33
        assert_eq!(result.result[0].interest_portion, dec!(333.33));
    }

    #[test]
    fn test_level_payment_value() {
        let result = repayment_schedule(&base_input()).unwrap();
        // Known value for 100k at 4% over 12 months.
        let payment = result.result[0].payment_amount;
        assert!(
            (payment - dec!(8514.99)).abs() <= dec!(0.01),
            "unexpected payment {payment}"
        );
        // Every entry carries the same level payment.
        assert!(result.result.iter().all(|e| e.payment_amount == payment));
    }

    #[test]
    fn test_final_balance_reaches_zero() {
        let result = repayment_schedule(&base_input()).unwrap();
        let last = result.result.last().unwrap();
        assert!(last.remaining_balance <= dec!(0.01));
    }

    #[test]
    fn test_balance_monotonically_non_increasing() {
        let result = repayment_schedule(&base_input()).unwrap();
        let mut previous = dec!(100_000);
        for entry in &result.result {
            assert!(entry.remaining_balance <= previous);
            assert!(entry.remaining_balance >= Decimal::ZERO);
            previous = entry.remaining_balance;
        }
    }

    #[test]
    fn test_principal_portions_reconcile() {
        let result = repayment_schedule(&base_input()).unwrap();
        let paid: Decimal = result.result.iter().map(|e| e.principal_portion).sum();
        // Independent per-entry rounding allows up to a cent of drift per entry.
        assert!((paid - dec!(100_000)).abs() <= dec!(0.12));
    }

    #[test]
    fn test_zero_rate_equal_installments() {
        let input = ScheduleInput {
            principal: dec!(5000),
            annual_rate_percent: Decimal::ZERO,
            term_months: 10,
            as_of: NaiveDate::from_ymd_opt(2023, 6, 1),
        };
        let result = repayment_schedule(&input).unwrap();
        let mut expected_balance = dec!(5000);
        for entry in &result.result {
            expected_balance -= dec!(500);
            assert_eq!(entry.payment_amount, dec!(500.00));
            assert_eq!(entry.interest_portion, dec!(0.00));
            assert_eq!(entry.remaining_balance, expected_balance);
        }
        assert_eq!(result.result.last().unwrap().remaining_balance, dec!(0));
    }

    #[test]
    fn test_thirty_day_date_stride() {
        let result = repayment_schedule(&base_input()).unwrap();
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert_eq!(result.result[0].payment_date, start + Duration::days(30));
        assert_eq!(result.result[5].payment_date, start + Duration::days(180));
    }

    #[test]
    fn test_non_positive_principal_rejected() {
        let mut input = base_input();
        input.principal = Decimal::ZERO;
        let err = repayment_schedule(&input).unwrap_err();
        match err {
            LendWiseError::InvalidInput { field, .. } => assert_eq!(field, "principal"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut input = base_input();
        input.annual_rate_percent = dec!(-1);
        let err = repayment_schedule(&input).unwrap_err();
        match err {
            LendWiseError::InvalidInput { field, .. } => assert_eq!(field, "annual_rate_percent"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_term_rejected() {
        let mut input = base_input();
        input.term_months = 0;
        let err = repayment_schedule(&input).unwrap_err();
        match err {
            LendWiseError::InvalidInput { field, .. } => assert_eq!(field, "term_months"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_single_month_term() {
        let input = ScheduleInput {
            principal: dec!(1200),
            annual_rate_percent: dec!(12),
            term_months: 1,
            as_of: NaiveDate::from_ymd_opt(2023, 1, 1),
        };
        let result = repayment_schedule(&input).unwrap();
        assert_eq!(result.result.len(), 1);
        let entry = &result.result[0];
        // One period at 1% monthly: 12 interest, 1200 principal.
        assert_eq!(entry.interest_portion, dec!(12.00));
        assert_eq!(entry.principal_portion, dec!(1200.00));
        assert_eq!(entry.remaining_balance, dec!(0.00));
    }

    #[test]
    fn test_metadata_populated() {
        let result = repayment_schedule(&base_input()).unwrap();
        assert!(!result.methodology.is_empty());
        assert_eq!(result.metadata.precision, "rust_decimal_128bit");
    }
}
