//! Core analysis engine.
//!
//! The pipeline has three stages:
//!
//! 1. **Extract**: load both locale files and flatten them into key sets
//!    (`parsers::json`)
//! 2. **Scan**: collect key references from source files (`scan`)
//! 3. **Reconcile**: compare defined and used keys (`analysis`)
//!
//! Stages 1 and 2 are independent and run in parallel; `context` wires
//! them together.

pub mod analysis;
pub mod context;
pub mod parsers;
pub mod scan;

pub use analysis::{AnalysisResult, KeySet, Locale, LocalePresence, format_usage_rate};
pub use context::{AnalysisPaths, AnalysisRun, analyze};
pub use scan::{ScanKeys, ScanWarning, ScannerPreference, UsageScan};
