use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;
use walkdir::WalkDir;

use super::{ScanKeys, ScanWarning, UsageScan, is_scannable_file, patterns::extract_keys};
use crate::core::KeySet;

/// In-process scanner: walks the source tree and matches every eligible file.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkScanner;

/// Files found under a source root.
pub struct CollectedFiles {
    pub files: Vec<PathBuf>,
    pub warnings: Vec<ScanWarning>,
}

/// Enumerate eligible source files under `root`, sorted by path.
///
/// Symlinks are not followed. Entries that cannot be accessed are reported
/// as warnings and skipped.
pub fn collect_files(root: &Path) -> CollectedFiles {
    let mut files = Vec::new();
    let mut warnings = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warnings.push(ScanWarning {
                    file_path: e
                        .path()
                        .unwrap_or(root)
                        .to_string_lossy()
                        .to_string(),
                    error: format!("Cannot access path: {}", e),
                });
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file() && is_scannable_file(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    CollectedFiles { files, warnings }
}

fn scan_file(path: &Path) -> Result<KeySet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {:?}", path))?;
    Ok(extract_keys(&content))
}

impl ScanKeys for WalkScanner {
    fn name(&self) -> &'static str {
        "walk"
    }

    fn scan(&self, root: &Path) -> Result<UsageScan> {
        let CollectedFiles {
            files,
            mut warnings,
        } = collect_files(root);

        let outcomes: Vec<(&PathBuf, Result<KeySet>)> =
            files.par_iter().map(|path| (path, scan_file(path))).collect();

        let mut keys = KeySet::new();
        for (path, outcome) in outcomes {
            match outcome {
                Ok(found) => keys.extend(found),
                Err(e) => warnings.push(ScanWarning {
                    file_path: path.to_string_lossy().to_string(),
                    error: format!("{:#}", e),
                }),
            }
        }

        Ok(UsageScan {
            keys,
            files_scanned: Some(files.len()),
            warnings,
            scanner: self.name(),
            fallback: None,
        })
    }
}
