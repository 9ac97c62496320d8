//! Shared building blocks: the input bundle, render configuration, errors and
//! text formatting helpers.

pub mod config;
pub mod error;
pub mod format;
pub mod metrics;
