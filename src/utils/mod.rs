//! Utility functions shared by the web panels and the terminal report.
//!
//! - [`format`] - Number formatting and French dates

pub mod format;
