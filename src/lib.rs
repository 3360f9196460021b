//! unused-i18n - find translation keys that are never used
//!
//! Compares the keys defined in two locale JSON files (English and Turkish)
//! with the keys referenced from TypeScript/JavaScript sources through
//! `t('key')` calls, and reports the keys that nothing references.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and console output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Analysis engine (extract, scan, reconcile)
//! - `report`: Plain-text report file rendering

pub mod cli;
pub mod config;
pub mod core;
pub mod report;
