use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Repayment analytics
// ---------------------------------------------------------------------------

#[napi]
pub fn repayment_schedule(input_json: String) -> NapiResult<String> {
    let input: lendwise_core::schedule::ScheduleInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = lendwise_core::schedule::repayment_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Intake validation
// ---------------------------------------------------------------------------

/// Validate an intake draft before the wizard advances. Returns the field
/// and reason of the first violation, or `valid: true`.
#[napi]
pub fn validate_application(draft_json: String) -> NapiResult<String> {
    let draft: lendwise_core::model::ApplicationDraft =
        serde_json::from_str(&draft_json).map_err(to_napi_error)?;

    let verdict = match lendwise_core::validation::validate_application_draft(&draft) {
        Ok(()) => serde_json::json!({ "valid": true }),
        Err(lendwise_core::LendWiseError::InvalidInput { field, reason }) => {
            serde_json::json!({ "valid": false, "field": field, "reason": reason })
        }
        Err(other) => return Err(to_napi_error(other)),
    };
    serde_json::to_string(&verdict).map_err(to_napi_error)
}
