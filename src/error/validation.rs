use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid tag format: '{value}'. Expected 'key=value'")]
    InvalidTagFormat { value: String },
    #[error("Tag key must not be empty.")]
    EmptyTagKey,
    #[error("Tag '{key}' must have a non-empty value.")]
    EmptyTagValue { key: String },
}
