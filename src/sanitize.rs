use crate::domain::models::FieldId;
use thiserror::Error;

/// Failure modes of the sanitization collaborator.
///
/// `Validation` carries a user-facing message and surfaces as a field
/// error; anything else is internal and must not block the form.
#[derive(Debug, Error)]
pub enum SanitizeError {
    #[error("{0}")]
    Validation(String),
    #[error("sanitization failed: {0}")]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for SanitizeError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

/// The record exchanged with the sanitization collaborator.
///
/// Only the field under validation is set; the collaborator returns the
/// same shape with cleaned values. The license field is not part of the
/// collaborator's contract.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub publisher: Option<String>,
}

impl FieldPayload {
    /// Builds a payload carrying only the given field, or `None` when
    /// the field is outside the collaborator's shape.
    pub fn for_field(id: FieldId, value: &str) -> Option<Self> {
        let mut payload = Self::default();
        match id {
            FieldId::Name => payload.name = Some(value.to_string()),
            FieldId::Description => payload.description = Some(value.to_string()),
            FieldId::Version => payload.version = Some(value.to_string()),
            FieldId::Publisher => payload.publisher = Some(value.to_string()),
            FieldId::License => return None,
        }
        Some(payload)
    }

    pub fn get(&self, id: FieldId) -> Option<&str> {
        match id {
            FieldId::Name => self.name.as_deref(),
            FieldId::Description => self.description.as_deref(),
            FieldId::Version => self.version.as_deref(),
            FieldId::Publisher => self.publisher.as_deref(),
            FieldId::License => None,
        }
    }
}

/// External service that cleans raw field input.
///
/// Implementations live in the host; this crate only defines the seam
/// the field validator calls through.
pub trait Sanitizer {
    fn sanitize(&self, payload: FieldPayload) -> Result<FieldPayload, SanitizeError>;
}
