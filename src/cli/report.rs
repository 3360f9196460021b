//! Console output for analysis runs.
//!
//! Everything is written through `*_to` functions taking a writer so the
//! output can be checked in tests. Separate from core logic to allow the
//! analysis to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{AnalysisRun, KeySet, Locale};
use crate::report::{ABSENT_MARK, MISSING_MARK, write_summary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

const RULE_WIDTH: usize = 50;

/// Limits for the console listings.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleOptions {
    pub max_unused: usize,
    pub max_used: usize,
}

/// Print the analysis summary to stdout.
pub fn print_analysis(run: &AnalysisRun, options: &ConsoleOptions) {
    print_analysis_to(run, options, &mut io::stdout().lock());
}

/// Print the analysis summary to a custom writer.
pub fn print_analysis_to<W: Write>(run: &AnalysisRun, options: &ConsoleOptions, writer: &mut W) {
    print_header(run, writer);
    print_key_counts(run, writer);
    print_results(run, writer);
    print_unused(run, options.max_unused, writer);
    print_used_sample(run, options.max_used, writer);
}

/// Print locale and source warnings to stderr.
pub fn print_warnings(run: &AnalysisRun, verbose: bool) {
    print_warnings_to(run, verbose, &mut io::stderr().lock());
}

/// Print warnings to a custom writer.
///
/// A ripgrep fallback and locale failures are always listed. Source scan failures are listed one
/// by one in verbose mode, otherwise summarized in a single line.
pub fn print_warnings_to<W: Write>(run: &AnalysisRun, verbose: bool, writer: &mut W) {
    if let Some(reason) = &run.scan_fallback {
        let _ = writeln!(
            writer,
            "{} ripgrep search failed, falling back to in-process scan: {}",
            "note:".bold().cyan(),
            reason
        );
    }

    for warning in &run.locale_warnings {
        let _ = writeln!(
            writer,
            "{} Failed to load {} translations: {}",
            "warning:".bold().yellow(),
            warning.locale,
            warning.error
        );
    }

    if verbose {
        for warning in &run.scan_warnings {
            let _ = writeln!(
                writer,
                "{} {}: {}",
                "warning:".bold().yellow(),
                warning.file_path,
                warning.error
            );
        }
    } else if !run.scan_warnings.is_empty() {
        let _ = writeln!(
            writer,
            "{} {} source path(s) could not be scanned (use {} for details)",
            "warning:".bold().yellow(),
            run.scan_warnings.len(),
            "-v".cyan()
        );
    }
}

/// Print the error shown when neither locale file could be loaded.
pub fn print_no_locale_data_to<W: Write>(writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} no locale data could be loaded; check the messages paths",
        "error:".bold().red()
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_header<W: Write>(run: &AnalysisRun, writer: &mut W) {
    let paths = &run.paths;
    let scanner = match run.files_scanned {
        Some(count) => format!(
            "{} ({} {})",
            run.scanner,
            count,
            if count == 1 { "file" } else { "files" }
        ),
        None => run.scanner.to_string(),
    };

    let _ = writeln!(writer, "{}", "Analyzing translation usage...".bold());
    let _ = writeln!(writer, "  Source directory:     {}", paths.source_root.display());
    let _ = writeln!(writer, "  English translations: {}", paths.en_messages.display());
    let _ = writeln!(writer, "  Turkish translations: {}", paths.tr_messages.display());
    let _ = writeln!(writer, "  Scanner:              {}", scanner);
    let _ = writeln!(writer);
}

fn print_key_counts<W: Write>(run: &AnalysisRun, writer: &mut W) {
    let result = &run.result;

    let _ = writeln!(writer, "English keys: {}", result.en_keys.len());
    let _ = writeln!(writer, "Turkish keys: {}", result.tr_keys.len());
    for (locale, only) in [
        (Locale::English, &result.en_only),
        (Locale::Turkish, &result.tr_only),
    ] {
        if !only.is_empty() {
            let _ = writeln!(
                writer,
                "{}",
                format!("Keys only in {}: {}", locale, only.len()).yellow()
            );
        }
    }
    let _ = writeln!(writer, "Total unique keys: {}", result.all_keys.len());
    let _ = writeln!(
        writer,
        "Found {} used translation {}",
        result.used_keys.len(),
        if result.used_keys.len() == 1 { "key" } else { "keys" }
    );
    let _ = writeln!(writer);
}

fn print_results<W: Write>(run: &AnalysisRun, writer: &mut W) {
    let mut summary = String::new();
    let _ = write_summary(&run.result, &mut summary);

    print_heading("ANALYSIS RESULTS", writer);
    let _ = write!(writer, "{}", summary);
    let _ = writeln!(writer);
}

fn print_unused<W: Write>(run: &AnalysisRun, limit: usize, writer: &mut W) {
    let unused = &run.result.unused_keys;

    if unused.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All translation keys are being used! No cleanup needed.".green()
        );
        let _ = writeln!(writer);
        return;
    }

    print_heading("UNUSED TRANSLATION KEYS", writer);
    let _ = writeln!(
        writer,
        "These keys are defined in locale files but never used in the codebase:"
    );
    let _ = writeln!(writer);
    print_key_preview(run, unused, limit, ABSENT_MARK, " unused keys", writer);
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} You can safely remove these {} unused keys from your translation files.",
        "hint:".bold().cyan(),
        unused.len()
    );
    let _ = writeln!(
        writer,
        "Full report saved to: {}",
        run.paths.report_path.display()
    );
    let _ = writeln!(writer);
}

fn print_used_sample<W: Write>(run: &AnalysisRun, limit: usize, writer: &mut W) {
    print_heading("SAMPLE USED KEYS (for verification)", writer);
    print_key_preview(run, &run.result.used_keys, limit, MISSING_MARK, "", writer);
}

fn print_heading<W: Write>(title: &str, writer: &mut W) {
    let _ = writeln!(writer, "{}", title.bold());
    let _ = writeln!(writer, "{}", "=".repeat(RULE_WIDTH));
}

/// Print up to `limit` keys with locale flags, then an "and N more" line.
fn print_key_preview<W: Write>(
    run: &AnalysisRun,
    keys: &KeySet,
    limit: usize,
    missing: &str,
    more_suffix: &str,
    writer: &mut W,
) {
    for key in keys.iter().take(limit) {
        let _ = writeln!(
            writer,
            "  {} {}",
            run.result.presence(key).label(missing),
            key
        );
    }

    let remaining = keys.len().saturating_sub(limit);
    if remaining > 0 {
        let _ = writeln!(writer, "  ... and {} more{}", remaining, more_suffix);
    }
}
