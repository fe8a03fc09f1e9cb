//! Field validators shared by request DTOs deriving [`validator::Validate`].

use validator::ValidationError;

/// Rejects values that are empty or whitespace-only.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }

    Ok(())
}
