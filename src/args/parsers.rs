use crate::error::ValidationError;

/// Parses a `key=value` tag; the value may itself contain `=`.
///
/// # Errors
///
/// Returns an error when the separator is missing or the key or value is
/// empty.
pub fn parse_tag(s: &str) -> Result<(String, String), ValidationError> {
    let Some((key, value)) = s.split_once('=') else {
        return Err(ValidationError::InvalidTagFormat {
            value: s.to_owned(),
        });
    };
    validate_tag(key, value)?;
    Ok((key.trim().to_owned(), value.trim().to_owned()))
}

/// Line protocol has no representation for an empty tag key or value.
pub(crate) fn validate_tag(key: &str, value: &str) -> Result<(), ValidationError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(ValidationError::EmptyTagKey);
    }
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyTagValue {
            key: key.to_owned(),
        });
    }
    Ok(())
}
