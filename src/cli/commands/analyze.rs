use std::{env, path::Path};

use anyhow::{Context, Result, bail};
use chrono::Local;

use super::super::{
    args::{AnalyzeArgs, AnalyzeCommand},
    exit_status::ExitStatus,
    report::{ConsoleOptions, print_analysis, print_no_locale_data_to, print_warnings},
};
use crate::{
    config::{CONFIG_FILE_NAME, Config, ConfigLoadResult, load_config},
    core::AnalysisPaths,
    report::write_report,
};

pub fn analyze(cmd: AnalyzeCommand) -> Result<ExitStatus> {
    let args = cmd.args;
    let cwd = env::current_dir().context("Failed to determine current directory")?;

    let ConfigLoadResult {
        mut config,
        from_file,
        root,
    } = load_config(&cwd)?;

    if args.verbose && !from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    // CLI > config file > defaults
    apply_overrides(&mut config, &args);
    config.validate()?;

    let mut paths = config.resolve_paths(&root);
    override_paths(&mut paths, &args, &cwd)?;
    let run = crate::core::analyze(paths, config.scanner, &args.rg_path)?;

    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    write_report(&run.paths.report_path, &run.result, &generated_at)?;

    print_warnings(&run, args.verbose);
    print_analysis(
        &run,
        &ConsoleOptions {
            max_unused: config.max_unused_preview,
            max_used: config.max_used_preview,
        },
    );

    let status = ExitStatus::of_analysis(&run);
    if status == ExitStatus::Failure {
        print_no_locale_data_to(&mut std::io::stderr().lock());
    }

    Ok(status)
}

/// Apply non-path CLI flags on top of the loaded config.
fn apply_overrides(config: &mut Config, args: &AnalyzeArgs) {
    if let Some(scanner) = args.scanner {
        config.scanner = scanner;
    }
    if let Some(max) = args.max_unused {
        config.max_unused_preview = max;
    }
    if let Some(max) = args.max_used {
        config.max_used_preview = max;
    }
}

/// Replace resolved paths with the ones given on the command line.
///
/// These are relative to the working directory, not to the config file.
/// They stay `PathBuf`s so non-UTF-8 names survive untouched.
fn override_paths(paths: &mut AnalysisPaths, args: &AnalyzeArgs, cwd: &Path) -> Result<()> {
    let overrides = [
        ("--en-messages", &args.en_messages, &mut paths.en_messages),
        ("--tr-messages", &args.tr_messages, &mut paths.tr_messages),
        ("--source-root", &args.source_root, &mut paths.source_root),
        ("--report", &args.report, &mut paths.report_path),
    ];

    for (flag, value, target) in overrides {
        if let Some(path) = value {
            if path.as_os_str().is_empty() {
                bail!("'{}' must not be empty", flag);
            }
            *target = cwd.join(path);
        }
    }
    Ok(())
}
