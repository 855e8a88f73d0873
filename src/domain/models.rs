use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of a theme-metadata form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Description,
    Version,
    Publisher,
    License,
}

impl FieldId {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Description => "description",
            FieldId::Version => "version",
            FieldId::Publisher => "publisher",
            FieldId::License => "license",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validator takes the (sanitized) field value and returns a
/// user-facing error message, or `None` when the value is acceptable.
pub type ValidatorFn = fn(&str) -> Option<String>;

/// Static description of a single form field.
///
/// Descriptors are built once per form type and never change at runtime.
#[derive(Clone, Copy, Debug)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
    pub validator: Option<ValidatorFn>,
}

/// Current raw values of a form, keyed by field id.
pub type FormValues = HashMap<FieldId, String>;

/// Result of validating a whole form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: HashMap<FieldId, String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
    Loading,
}

/// Screen corner a toast stack is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPosition {
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

/// An action offered on a notification. The host decides what the id
/// means when the user triggers it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationAction {
    pub id: String,
    pub label: String,
}

/// A transient on-screen message.
///
/// A `duration_ms` of zero means the notification never expires on its
/// own and must be dismissed explicitly (loading states).
#[derive(Clone, Debug)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
    pub duration_ms: u64,
    pub actions: Vec<NotificationAction>,
    pub created_at: DateTime<Utc>,
}
