use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, REPORT_FILE, stderr, stdout};

#[test]
fn test_all_keys_used() -> Result<()> {
    let test = CliTest::with_project(
        r#"{"nav":{"home":"Home"}}"#,
        r#"{"nav":{"home":"Ev"}}"#,
        &[(
            "src/app/[locale]/page.tsx",
            r#"
  export default function Page() {
      return <a href="/">{t('nav.home')}</a>;
  }
  "#,
        )],
    )?;

    let output = test.analyze_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Unused translation keys:        0"));
    assert!(out.contains("Usage rate:                     100.0%"));
    assert!(out.contains("All translation keys are being used! No cleanup needed."));
    assert!(out.contains("  [EN] [TR] nav.home"));

    let report = test.read_report()?;
    assert!(report.starts_with("TRANSLATION USAGE ANALYSIS REPORT\n"));
    assert!(!report.contains("UNUSED TRANSLATION KEYS"));

    Ok(())
}

#[test]
fn test_locale_only_and_unused_keys() -> Result<()> {
    let test = CliTest::with_project(
        r#"{"a":"1","b":"2"}"#,
        r#"{"a":"1"}"#,
        &[("src/app.ts", "t('a')")],
    )?;

    let output = test.analyze_command().output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Keys only in English: 1"));
    assert!(!out.contains("Keys only in Turkish"));
    assert!(out.contains("Unused translation keys:        1"));
    assert!(out.contains("  [EN] [  ] b"));
    assert!(out.contains(&format!(
        "Full report saved to: {}",
        test.root().join(REPORT_FILE).display()
    )));

    let report = test.read_report()?;
    assert!(report.contains("Keys only in English: 1\n  [EN] [  ] b\n"));
    assert!(report.contains("UNUSED TRANSLATION KEYS\n==============================\n[EN] [  ] b\n"));
    assert!(report.contains("USED KEYS (for verification)\n==============================\n[EN] [TR] a\n"));

    Ok(())
}

#[test]
fn test_call_with_arguments_is_used() -> Result<()> {
    let test = CliTest::with_project(
        r#"{"x":"{count} items"}"#,
        r#"{"x":"{count} öğe"}"#,
        &[("src/list.tsx", "<p>{t('x', {count: 1})}</p>")],
    )?;

    let output = test.analyze_command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Unused translation keys:        0"));
    assert!(test.read_report()?.contains("[EN] [TR] x\n"));

    Ok(())
}

#[test]
fn test_declaration_files_are_not_scanned() -> Result<()> {
    let test = CliTest::with_project(
        r#"{"should":{"not":{"count":"x"}},"ok":"y"}"#,
        r#"{"should":{"not":{"count":"x"}},"ok":"y"}"#,
        &[
            ("src/types/global.d.ts", "declare const k = t('should.not.count');"),
            ("src/app.ts", "t('ok')"),
        ],
    )?;

    let output = test.analyze_command().output()?;

    assert!(output.status.success());
    let report = test.read_report()?;
    assert!(report.contains("UNUSED TRANSLATION KEYS\n==============================\n[EN] [TR] should.not.count\n"));

    Ok(())
}

#[test]
fn test_json_files_are_not_scanned() -> Result<()> {
    let test = CliTest::with_project(
        r#"{"json":{"key":"x"}}"#,
        r#"{"json":{"key":"x"}}"#,
        &[("src/data/fixture.json", r#"{"snippet": "t('json.key')"}"#)],
    )?;

    let output = test.analyze_command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("  [EN] [TR] json.key"));
    assert!(stdout(&output).contains("Unused translation keys:        1"));

    Ok(())
}

#[test]
fn test_unused_preview_is_capped() -> Result<()> {
    let entries: Vec<String> = (0..25).map(|i| format!(r#""k{:02}":"v""#, i)).collect();
    let messages = format!("{{{}}}", entries.join(","));
    let test = CliTest::with_project(&messages, &messages, &[("src/app.ts", "")])?;

    let output = test.analyze_command().output()?;

    let out = stdout(&output);
    assert!(out.contains("  [EN] [TR] k19\n"));
    assert!(!out.contains("  [EN] [TR] k20\n"));
    assert!(out.contains("  ... and 5 more unused keys"));

    // The report file is not capped.
    let report = test.read_report()?;
    assert!(report.contains("[EN] [TR] k24\n"));

    Ok(())
}

#[test]
fn test_max_unused_flag() -> Result<()> {
    let test = CliTest::with_project(
        r#"{"a":"1","b":"2","c":"3"}"#,
        r#"{"a":"1","b":"2","c":"3"}"#,
        &[("src/app.ts", "")],
    )?;

    let output = test.analyze_command().args(["--max-unused", "1"]).output()?;

    let out = stdout(&output);
    assert!(out.contains("  [EN] [TR] a\n"));
    assert!(!out.contains("  [EN] [TR] b\n"));
    assert!(out.contains("  ... and 2 more unused keys"));

    Ok(())
}

#[test]
fn test_one_broken_locale_file() -> Result<()> {
    let test = CliTest::with_project(r#"{"a":"1"}"#, "{ broken", &[("src/app.ts", "t('a')")])?;

    let output = test.analyze_command().output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: Failed to load Turkish translations"));
    assert!(stdout(&output).contains("Keys only in English: 1"));

    Ok(())
}

#[test]
fn test_no_locale_data_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.ts", "t('a')")?;

    let output = test.analyze_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Failed to load English translations"));
    assert!(err.contains("Failed to load Turkish translations"));
    assert!(err.contains("no locale data could be loaded"));
    assert!(stdout(&output).contains("Usage rate:                     n/a"));
    assert!(test.root().join(REPORT_FILE).exists());

    Ok(())
}

#[test]
fn test_missing_source_dir_is_warning() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"{"a":"1"}"#)?;
    test.write_file("messages/tr.json", r#"{"a":"1"}"#)?;

    let output = test.analyze_command().arg("-v").output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("Source directory does not exist"));
    assert!(stdout(&output).contains("Unused translation keys:        1"));

    Ok(())
}

#[test]
fn test_unreadable_source_file() -> Result<()> {
    let test = CliTest::with_project(r#"{"a":"1"}"#, r#"{"a":"1"}"#, &[("src/app.ts", "t('a')")])?;
    std::fs::write(test.root().join("src/bad.ts"), [0xff, 0xfe, 0xfd])?;

    let quiet = test.analyze_command().output()?;
    assert!(quiet.status.success());
    assert!(stderr(&quiet).contains("1 source path(s) could not be scanned (use -v for details)"));
    assert!(stdout(&quiet).contains("Unused translation keys:        0"));

    let verbose = test.analyze_command().arg("--verbose").output()?;
    assert!(stderr(&verbose).contains("bad.ts"));

    Ok(())
}

#[test]
fn test_report_is_overwritten() -> Result<()> {
    let test = CliTest::with_project(r#"{"a":"1"}"#, r#"{"a":"1"}"#, &[("src/app.ts", "t('a')")])?;
    test.write_file(REPORT_FILE, "OLD REPORT CONTENT\n")?;

    test.analyze_command().output()?;
    test.analyze_command().output()?;

    let report = test.read_report()?;
    assert!(!report.contains("OLD REPORT CONTENT"));
    assert_eq!(report.matches("TRANSLATION USAGE ANALYSIS REPORT").count(), 1);

    Ok(())
}

#[test]
fn test_config_file_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".unusedi18nrc.json",
        r#"{
         "enMessages": "locales/en.json",
         "trMessages": "locales/tr.json",
         "sourceRoot": "app",
         "reportPath": "out/report.txt",
         "scanner": "walk"
     }"#,
    )?;
    test.write_file("locales/en.json", r#"{"page":{"title":"T"},"gone":"G"}"#)?;
    test.write_file("locales/tr.json", r#"{"page":{"title":"T"},"gone":"G"}"#)?;
    test.write_file("app/page.jsx", "t('page.title')")?;
    test.write_file("out/.keep", "")?;

    let output = test.command().arg("analyze").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("  [EN] [TR] gone"));
    let report = test.read_file("out/report.txt")?;
    assert!(report.contains("[EN] [TR] page.title\n"));
    assert!(!test.root().join(REPORT_FILE).exists());

    Ok(())
}

#[test]
fn test_cli_flags_override_config() -> Result<()> {
    let test = CliTest::with_project(
        r#"{"from_app":"a","from_lib":"b"}"#,
        r#"{"from_app":"a","from_lib":"b"}"#,
        &[("app/page.ts", "t('from_app')"), ("lib/util.ts", "t('from_lib')")],
    )?;
    test.write_file(".unusedi18nrc.json", r#"{ "sourceRoot": "app" }"#)?;

    let output = test
        .analyze_command()
        .args(["--source-root", "lib", "--report", "custom.txt"])
        .output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("  [EN] [TR] from_app"));
    let report = test.read_file("custom.txt")?;
    assert!(report.contains("UNUSED TRANSLATION KEYS\n==============================\n[EN] [TR] from_app\n"));

    Ok(())
}

#[test]
fn test_invalid_config_is_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".unusedi18nrc.json", r#"{ "scanner": "grep" }"#)?;

    let output = test.analyze_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Failed to parse config file"));

    Ok(())
}

#[test]
fn test_forced_ripgrep_unavailable_is_error() -> Result<()> {
    let test = CliTest::with_project(r#"{"a":"1"}"#, r#"{"a":"1"}"#, &[("src/app.ts", "t('a')")])?;

    let output = test
        .command()
        .args([
            "analyze",
            "--scanner",
            "ripgrep",
            "--rg-path",
            "/nonexistent/definitely-not-rg",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Failed to run"));

    Ok(())
}

#[test]
fn test_auto_scanner_falls_back_to_walk() -> Result<()> {
    let test = CliTest::with_project(r#"{"a":"1"}"#, r#"{"a":"1"}"#, &[("src/app.ts", "t('a')")])?;

    let output = test
        .command()
        .arg("analyze")
        .env("UNUSED_I18N_RG", "/nonexistent/definitely-not-rg")
        .output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Scanner:              walk (1 file)"));
    assert!(stdout(&output).contains("Usage rate:                     100.0%"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_auto_scanner_falls_back_when_ripgrep_search_fails() -> Result<()> {
    let test = CliTest::with_project(r#"{"a":"1"}"#, r#"{"a":"1"}"#, &[("src/app.ts", "t('a')")])?;
    let rg = test.write_failing_rg("bin/rg")?;

    let output = test
        .command()
        .arg("analyze")
        .env("UNUSED_I18N_RG", &rg)
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("note: ripgrep search failed, falling back to in-process scan"));
    assert!(stderr(&output).contains("search exploded"));
    assert!(stdout(&output).contains("Scanner:              walk (1 file)"));
    assert!(stdout(&output).contains("Usage rate:                     100.0%"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_forced_ripgrep_search_failure_is_error() -> Result<()> {
    let test = CliTest::with_project(r#"{"a":"1"}"#, r#"{"a":"1"}"#, &[("src/app.ts", "t('a')")])?;
    let rg = test.write_failing_rg("bin/rg")?;

    let output = test
        .command()
        .args(["analyze", "--scanner", "ripgrep"])
        .env("UNUSED_I18N_RG", &rg)
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("search exploded"));

    Ok(())
}

#[test]
fn test_bare_extension_file_is_scanned() -> Result<()> {
    let test = CliTest::with_project(
        r#"{"dotfile":{"key":"x"},"inner":{"key":"y"}}"#,
        r#"{"dotfile":{"key":"x"},"inner":{"key":"y"}}"#,
        &[
            ("src/lib/.ts", "t('dotfile.key')"),
            ("src/pkg.d.ts/inner.tsx", "t('inner.key')"),
        ],
    )?;

    let output = test.analyze_command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Unused translation keys:        0"));

    Ok(())
}
