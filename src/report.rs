//! Plain-text analysis report.
//!
//! The report lists the same data as the console summary without any
//! truncation. Rendering is kept separate from writing so the text can be
//! checked without touching the filesystem.

use std::{fmt, fs, path::Path};

use anyhow::{Context, Result};

use crate::core::{AnalysisResult, KeySet, Locale, format_usage_rate};

/// Default file name of the report.
pub const REPORT_FILE_NAME: &str = "translation_analysis_report.txt";

/// Placeholder for a locale that does not define an unused key.
pub const ABSENT_MARK: &str = "  ";

/// Placeholder for a locale that does not define a used key.
pub const MISSING_MARK: &str = "\u{2718} "; // ✘

const HEADER_RULE_WIDTH: usize = 50;
const SECTION_RULE_WIDTH: usize = 30;

/// Render the full report.
pub fn render_report(result: &AnalysisResult, generated_at: &str) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = render_report_to(result, generated_at, &mut out);
    out
}

fn render_report_to<W: fmt::Write>(
    result: &AnalysisResult,
    generated_at: &str,
    out: &mut W,
) -> fmt::Result {
    writeln!(out, "TRANSLATION USAGE ANALYSIS REPORT")?;
    writeln!(out, "{}", "=".repeat(HEADER_RULE_WIDTH))?;
    writeln!(out, "Generated on: {}", generated_at)?;
    writeln!(out)?;

    write_summary(result, out)?;
    writeln!(out)?;

    write_locale_only(result, Locale::English, &result.en_only, out)?;
    write_locale_only(result, Locale::Turkish, &result.tr_only, out)?;

    if !result.unused_keys.is_empty() {
        writeln!(out, "UNUSED TRANSLATION KEYS")?;
        writeln!(out, "{}", "=".repeat(SECTION_RULE_WIDTH))?;
        for key in &result.unused_keys {
            writeln!(out, "{} {}", result.presence(key).label(ABSENT_MARK), key)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "USED KEYS (for verification)")?;
    writeln!(out, "{}", "=".repeat(SECTION_RULE_WIDTH))?;
    for key in &result.used_keys {
        writeln!(out, "{} {}", result.presence(key).label(MISSING_MARK), key)?;
    }

    Ok(())
}

/// Summary lines shared by the report file and the console output.
pub fn write_summary<W: fmt::Write>(result: &AnalysisResult, out: &mut W) -> fmt::Result {
    writeln!(out, "Total translation keys defined: {}", result.all_keys.len())?;
    writeln!(out, "Translation keys used in code:  {}", result.used_keys.len())?;
    writeln!(out, "Unused translation keys:        {}", result.unused_keys.len())?;
    writeln!(
        out,
        "Usage rate:                     {}",
        format_usage_rate(result.usage_rate)
    )
}

fn write_locale_only<W: fmt::Write>(
    result: &AnalysisResult,
    locale: Locale,
    keys: &KeySet,
    out: &mut W,
) -> fmt::Result {
    if keys.is_empty() {
        return Ok(());
    }
    writeln!(out, "Keys only in {}: {}", locale, keys.len())?;
    for key in keys {
        writeln!(out, "  {} {}", result.presence(key).label(ABSENT_MARK), key)?;
    }
    writeln!(out)
}

/// Render the report and write it to `path`, replacing any previous report.
pub fn write_report(path: &Path, result: &AnalysisResult, generated_at: &str) -> Result<()> {
    let content = render_report(result, generated_at);
    fs::write(path, content)
        .with_context(|| format!("Failed to write report file: {:?}", path))
}
