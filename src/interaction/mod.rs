pub mod field_validator;
pub mod focus_tracker;
pub mod list_navigator;
pub mod list_row;
pub mod notification_center;
pub mod search_filter;

#[cfg(test)]
mod focus_tracker_test;
#[cfg(test)]
mod list_navigator_test;
