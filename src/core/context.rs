use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{
    AnalysisResult, Locale, ScanWarning, ScannerPreference,
    parsers::json::{LocaleWarning, load_locale_keys},
    scan::scan_usages,
};

/// Resolved input and output locations for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPaths {
    pub en_messages: PathBuf,
    pub tr_messages: PathBuf,
    pub source_root: PathBuf,
    pub report_path: PathBuf,
}

/// Everything gathered by one analysis run.
#[derive(Debug)]
pub struct AnalysisRun {
    pub paths: AnalysisPaths,
    pub result: AnalysisResult,
    /// Number of locale files that loaded successfully (0..=2).
    pub locales_loaded: usize,
    pub locale_warnings: Vec<LocaleWarning>,
    pub scan_warnings: Vec<ScanWarning>,
    /// Name of the scanner that produced `result.used_keys`.
    pub scanner: &'static str,
    pub files_scanned: Option<usize>,
    /// Why ripgrep was abandoned for the walk scanner, if it was.
    pub scan_fallback: Option<String>,
}

impl AnalysisRun {
    /// True when at least one locale file could be loaded.
    pub fn has_locale_data(&self) -> bool {
        self.locales_loaded > 0
    }
}

/// Run the whole analysis.
///
/// Locale extraction and source scanning run in parallel. Locale and source
/// file failures are recorded as warnings; only a scanner failure that
/// cannot fall back is returned as an error.
pub fn analyze(
    paths: AnalysisPaths,
    scanner: ScannerPreference,
    rg_program: &Path,
) -> Result<AnalysisRun> {
    let ((en, tr), scan) = rayon::join(
        || {
            rayon::join(
                || load_locale_keys(&paths.en_messages, Locale::English),
                || load_locale_keys(&paths.tr_messages, Locale::Turkish),
            )
        },
        || scan_usages(&paths.source_root, scanner, rg_program),
    );
    let scan = scan?;

    let locales_loaded = [&en, &tr].iter().filter(|l| l.is_loaded()).count();
    let result = AnalysisResult::new(en.keys(), tr.keys(), scan.keys);
    let locale_warnings = [en.warning, tr.warning].into_iter().flatten().collect();

    Ok(AnalysisRun {
        paths,
        result,
        locales_loaded,
        locale_warnings,
        scan_warnings: scan.warnings,
        scanner: scan.scanner,
        files_scanned: scan.files_scanned,
        scan_fallback: scan.fallback,
    })
}
