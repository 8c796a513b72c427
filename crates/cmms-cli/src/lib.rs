//! Library surface of the CMMS reporting CLI.
//!
//! Exposes the logging setup and table rendering so integration tests can
//! drive them without spawning the binary.

pub mod logging;
pub mod tables;
