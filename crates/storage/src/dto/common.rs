use validator::ValidationError;

/// Rejects labels carrying control characters; any other text is kept as given.
pub(crate) fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.chars().any(char::is_control) {
        let mut error = ValidationError::new("control_characters");
        error.message = Some("must not contain control characters".into());
        return Err(error);
    }

    Ok(())
}
