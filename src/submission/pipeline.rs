use serde_json::Value;

use crate::error::AppError;
use crate::models::Contact;
use crate::state::SharedState;

use super::validate;

/// Validate a parsed body and persist it. Exactly one insert is attempted
/// for valid input and none for invalid input.
pub async fn run(state: &SharedState, raw: Value) -> Result<Contact, AppError> {
    let contact = validate::contact(&raw)
        .map_err(|e| AppError::validation(e, state.config.strict_status))?;

    let saved = state.store.insert(&contact).await?;

    tracing::info!(
        "Saved contact {} via {} store",
        saved.id,
        state.store.backend()
    );

    Ok(saved)
}
