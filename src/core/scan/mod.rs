//! Source scanning for translation key references.
//!
//! Two interchangeable strategies implement [`ScanKeys`]:
//!
//! - [`RipgrepScanner`]: delegates matching to an external `rg` process
//! - [`WalkScanner`]: walks the tree and matches each file in-process
//!
//! Both apply the grammar in [`patterns`] to the same set of files and
//! must agree on the resulting key set. [`select_scanner`] picks one from a
//! [`ScannerPreference`], and [`scan_usages`] falls back to the walk
//! scanner when `rg` fails under [`ScannerPreference::Auto`].

pub mod patterns;
pub mod ripgrep;
pub mod walk;

use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

pub use ripgrep::RipgrepScanner;
pub use walk::WalkScanner;

use crate::core::KeySet;

/// Extensions of source files that may reference translation keys.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Suffix of generated type declaration files, never scanned.
pub const DECLARATION_SUFFIX: &str = ".d.ts";

/// Check whether a path names a source file eligible for scanning.
///
/// Only the file name is inspected: it must end in `.ts`, `.tsx`, `.js` or
/// `.jsx` and must not end in `.d.ts`. A bare `.ts` counts as a source file.
pub fn is_scannable_file(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();

    let has_source_ext = SOURCE_EXTENSIONS.iter().any(|ext| {
        name.strip_suffix(ext)
            .is_some_and(|stem| stem.ends_with('.'))
    });

    has_source_ext && !name.ends_with(DECLARATION_SUFFIX)
}

/// A source file or path that could not be scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub file_path: String,
    pub error: String,
}

/// Keys referenced in a source tree.
#[derive(Debug, Clone, Default)]
pub struct UsageScan {
    pub keys: KeySet,
    /// Number of files matched, when the scanner can tell.
    pub files_scanned: Option<usize>,
    pub warnings: Vec<ScanWarning>,
    /// Name of the scanner that produced this result.
    pub scanner: &'static str,
    /// Why ripgrep was abandoned for the walk scanner, if it was.
    pub fallback: Option<String>,
}

/// Capability shared by all scanning strategies.
#[enum_dispatch]
pub trait ScanKeys {
    /// Short name shown in console output.
    fn name(&self) -> &'static str;

    /// Collect every key referenced under `root`.
    fn scan(&self, root: &Path) -> Result<UsageScan>;
}

#[enum_dispatch(ScanKeys)]
#[derive(Debug, Clone)]
pub enum KeyScanner {
    Ripgrep(RipgrepScanner),
    Walk(WalkScanner),
}

/// Which scanning strategy to use.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ScannerPreference {
    /// Use ripgrep when it is installed, otherwise walk the tree.
    #[default]
    Auto,
    /// Always use ripgrep.
    Ripgrep,
    /// Always walk the tree in-process.
    Walk,
}

/// Choose a scanner for `preference`, probing `rg_program` when needed.
pub fn select_scanner(preference: ScannerPreference, rg_program: &Path) -> KeyScanner {
    match preference {
        ScannerPreference::Walk => WalkScanner.into(),
        ScannerPreference::Ripgrep => RipgrepScanner::new(rg_program).into(),
        ScannerPreference::Auto => {
            let ripgrep = RipgrepScanner::new(rg_program);
            if ripgrep.is_available() {
                ripgrep.into()
            } else {
                WalkScanner.into()
            }
        }
    }
}

/// Scan `root` for key references.
///
/// A missing source root yields an empty result with a warning. When
/// ripgrep was picked automatically and fails, the walk scanner is used
/// instead and the failure is kept in [`UsageScan::fallback`].
pub fn scan_usages(
    root: &Path,
    preference: ScannerPreference,
    rg_program: &Path,
) -> Result<UsageScan> {
    if !root.is_dir() {
        return Ok(UsageScan {
            warnings: vec![ScanWarning {
                file_path: root.to_string_lossy().to_string(),
                error: "Source directory does not exist".to_string(),
            }],
            scanner: WalkScanner.name(),
            ..Default::default()
        });
    }

    let scanner = select_scanner(preference, rg_program);
    match scanner.scan(root) {
        Err(e)
            if preference == ScannerPreference::Auto
                && matches!(scanner, KeyScanner::Ripgrep(_)) =>
        {
            let mut scan = WalkScanner.scan(root)?;
            scan.fallback = Some(format!("{:#}", e));
            Ok(scan)
        }
        result => result,
    }
}
