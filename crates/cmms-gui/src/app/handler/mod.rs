//! Message handlers organized by concern.
//!
//! - `screen` - the generic management-screen handler every record kind
//!   routes through
//! - `settings` - settings screen changes and persistence

pub mod screen;
pub mod settings;
