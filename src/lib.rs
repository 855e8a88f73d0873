pub mod constants;
pub mod domain;
pub mod interaction;
pub mod keyboard;
pub mod sanitize;
pub mod timer;


pub use domain::models::{
    FieldDescriptor, FieldId, FormValues, Notification, NotificationAction, NotificationKind,
    NotificationPosition, ValidationOutcome,
};
pub use interaction::{
    field_validator::{FieldValidator, theme_field_descriptors, validate_publisher, validate_version},
    focus_tracker::FocusTracker,
    list_navigator::ListNavigator,
    list_row::ListRow,
    notification_center::{NotificationCenter, NotificationConfig},
    search_filter::SearchFilter,
};
pub use keyboard::{KeyBindings, key_combination};
pub use sanitize::{FieldPayload, SanitizeError, Sanitizer};
pub use timer::Countdown;
