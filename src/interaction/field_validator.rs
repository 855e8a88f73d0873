use crate::domain::models::{FieldDescriptor, FieldId, FormValues, ValidationOutcome};
use crate::sanitize::{FieldPayload, SanitizeError, Sanitizer};
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use tracing::debug;

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+(-[\w.]+)?$").expect("version pattern compiles"));

static PUBLISHER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?$").expect("publisher pattern compiles")
});

/// The fixed theme-metadata form. Name, version and publisher follow the
/// marketplace manifest rules; description and license are optional.
static THEME_FIELDS: [FieldDescriptor; 5] = [
    FieldDescriptor {
        id: FieldId::Name,
        label: "Name",
        placeholder: "my-color-theme",
        required: true,
        validator: None,
    },
    FieldDescriptor {
        id: FieldId::Description,
        label: "Description",
        placeholder: "A short description of the theme",
        required: false,
        validator: None,
    },
    FieldDescriptor {
        id: FieldId::Version,
        label: "Version",
        placeholder: "1.0.0",
        required: true,
        validator: Some(validate_version),
    },
    FieldDescriptor {
        id: FieldId::Publisher,
        label: "Publisher",
        placeholder: "publisher-id",
        required: true,
        validator: Some(validate_publisher),
    },
    FieldDescriptor {
        id: FieldId::License,
        label: "License",
        placeholder: "MIT",
        required: false,
        validator: None,
    },
];

pub fn theme_field_descriptors() -> &'static [FieldDescriptor] {
    &THEME_FIELDS
}

/// Value must be three dot-separated numbers with an optional hyphenated
/// pre-release suffix.
pub fn validate_version(value: &str) -> Option<String> {
    if VERSION_PATTERN.is_match(value) {
        None
    } else {
        Some("Version must follow semantic versioning (e.g., 1.0.0)".to_string())
    }
}

/// Value must start and end with an alphanumeric character, with only
/// alphanumerics and hyphens in between. A single alphanumeric character
/// is acceptable.
pub fn validate_publisher(value: &str) -> Option<String> {
    if PUBLISHER_PATTERN.is_match(value) {
        None
    } else {
        Some("Publisher must contain only letters, numbers, and hyphens".to_string())
    }
}

/// Validates and sanitizes theme-metadata form fields.
///
/// Sanitization is delegated to the host's [`Sanitizer`] and is
/// best-effort: a validation-kind failure becomes the field error, any
/// other failure degrades to the trimmed raw value so a misbehaving
/// sanitizer can never take the form down with it.
pub struct FieldValidator {
    sanitizer: Arc<dyn Sanitizer>,
}

impl FieldValidator {
    pub fn new(sanitizer: Arc<dyn Sanitizer>) -> Self {
        Self { sanitizer }
    }

    /// Validates a single field value against its descriptor.
    ///
    /// Returns the error message to display, or `None` when the value is
    /// acceptable.
    pub fn validate_field(&self, descriptor: &FieldDescriptor, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return descriptor
                .required
                .then(|| format!("{} is required", descriptor.label));
        }

        let value = match self.sanitize_input(descriptor.id, raw) {
            Ok(clean) => clean,
            Err(err) => return Some(err.to_string()),
        };

        if let Some(validate) = descriptor.validator
            && !value.is_empty()
        {
            return validate(&value);
        }
        None
    }

    /// Validates every field of the form, in declaration order, with no
    /// short-circuit: the outcome carries an error for each failing
    /// field.
    pub fn validate_all_fields(&self, values: &FormValues) -> ValidationOutcome {
        let mut errors = HashMap::new();
        for descriptor in theme_field_descriptors() {
            let value = values
                .get(&descriptor.id)
                .map(String::as_str)
                .unwrap_or_default();
            if let Some(error) = self.validate_field(descriptor, value) {
                errors.insert(descriptor.id, error);
            }
        }
        ValidationOutcome {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Runs the raw value through the sanitization collaborator.
    ///
    /// Only a validation-kind failure is returned as an error; anything
    /// else falls back to the trimmed raw value. Fields outside the
    /// collaborator's shape are trimmed and returned as-is.
    pub fn sanitize_input(&self, id: FieldId, raw: &str) -> Result<String, SanitizeError> {
        let trimmed = raw.trim();
        let Some(payload) = FieldPayload::for_field(id, raw) else {
            return Ok(trimmed.to_string());
        };

        match self.sanitizer.sanitize(payload) {
            Ok(cleaned) => Ok(cleaned
                .get(id)
                .map(str::to_string)
                .unwrap_or_else(|| trimmed.to_string())),
            Err(err @ SanitizeError::Validation(_)) => Err(err),
            Err(err) => {
                debug!(field = id.as_str(), error = %err, "sanitizer failed, keeping trimmed input");
                Ok(trimmed.to_string())
            }
        }
    }
}
