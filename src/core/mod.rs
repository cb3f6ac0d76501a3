//! Core library components.
//!
//! The resolution, filtering and comparison engine, independent of the
//! terminal. The CLI layer only parses flags, prints and writes files.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod domain;
pub mod filter;
pub mod gateway;
pub mod progress;
pub mod report;
pub mod types;
