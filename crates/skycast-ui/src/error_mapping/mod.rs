//! Converts service-crate errors into the core error hierarchy so the UI
//! shows one consistent set of user messages.

mod weather;

pub use weather::app_error;
