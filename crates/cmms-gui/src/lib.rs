//! CMMS Console - GUI Library
//!
//! Application types for the desktop console, built with Iced using the
//! Elm architecture. The binary in `main.rs` wires these together.

pub mod app;
pub mod component;
pub mod message;
pub mod record;
pub mod settings;
pub mod state;
pub mod theme;
pub mod view;
