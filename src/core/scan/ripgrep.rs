use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::{Context, Result, bail};

use super::{
    DECLARATION_SUFFIX, SOURCE_EXTENSIONS, ScanKeys, ScanWarning, UsageScan,
    patterns::KEY_PATTERNS,
};
use crate::core::KeySet;

/// Default ripgrep executable, looked up on `PATH`.
pub const DEFAULT_RIPGREP: &str = "rg";

/// Accelerated scanner backed by a `rg` subprocess.
///
/// Runs one search per key sub-pattern over the whole tree and reads back
/// only the captured key of each match.
#[derive(Debug, Clone)]
pub struct RipgrepScanner {
    program: PathBuf,
}

impl RipgrepScanner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Probe the executable with `--version`.
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn search(&self, pattern: &str, root: &Path) -> Result<SearchOutput> {
        let source_type = format!("src:*.{{{}}}", SOURCE_EXTENSIONS.join(","));
        let declaration_type = format!("dts:*{}", DECLARATION_SUFFIX);
        // File types only ever match files, never directories.
        let output = Command::new(&self.program)
            .args([
                "--only-matching",
                "--replace",
                "$1",
                "--no-filename",
                "--no-heading",
                "--no-line-number",
                "--no-config",
                "--no-ignore",
                "--hidden",
                "--text",
                "--color",
                "never",
                "--type-add",
                source_type.as_str(),
                "--type-add",
                declaration_type.as_str(),
                "--type",
                "src",
                "--type-not",
                "dts",
                "--regexp",
                pattern,
            ])
            .arg(root)
            .output()
            .with_context(|| format!("Failed to run {:?}", self.program))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        // rg exits with 1 when nothing matched, and with 2 when any error
        // occurred, including a single unreadable file.
        let warnings = match output.status.code() {
            Some(0) | Some(1) => Vec::new(),
            Some(2) => match file_errors(&stderr) {
                Some(warnings) if !warnings.is_empty() => warnings,
                _ if !stdout.trim().is_empty() => vec![ScanWarning {
                    file_path: root.to_string_lossy().to_string(),
                    error: stderr.trim().to_string(),
                }],
                _ => bail!(
                    "{:?} exited with {}: {}",
                    self.program,
                    output.status,
                    stderr.trim()
                ),
            },
            _ => bail!(
                "{:?} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            ),
        };

        Ok(SearchOutput {
            keys: parse_output(&stdout),
            warnings,
        })
    }
}

impl Default for RipgrepScanner {
    fn default() -> Self {
        Self::new(DEFAULT_RIPGREP)
    }
}

struct SearchOutput {
    keys: KeySet,
    warnings: Vec<ScanWarning>,
}

fn parse_output(stdout: &str) -> KeySet {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Parse `rg: <path>: <error>` lines into warnings.
///
/// Returns `None` when any line does not name an existing path, which means
/// rg failed as a whole rather than on individual files.
fn file_errors(stderr: &str) -> Option<Vec<ScanWarning>> {
    stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let line = line.strip_prefix("rg: ").unwrap_or(line);
            let (path, error) = line.split_once(": ")?;
            Path::new(path).exists().then(|| ScanWarning {
                file_path: path.to_string(),
                error: error.to_string(),
            })
        })
        .collect()
}

impl ScanKeys for RipgrepScanner {
    fn name(&self) -> &'static str {
        "ripgrep"
    }

    fn scan(&self, root: &Path) -> Result<UsageScan> {
        let mut keys = KeySet::new();
        let mut warnings: Vec<ScanWarning> = Vec::new();
        for pattern in KEY_PATTERNS {
            let found = self.search(pattern, root)?;
            keys.extend(found.keys);
            // Both searches visit the same files and report the same failures.
            for warning in found.warnings {
                if !warnings.contains(&warning) {
                    warnings.push(warning);
                }
            }
        }

        Ok(UsageScan {
            keys,
            files_scanned: None,
            warnings,
            scanner: self.name(),
            fallback: None,
        })
    }
}
