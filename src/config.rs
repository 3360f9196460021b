use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{AnalysisPaths, ScannerPreference};

pub const CONFIG_FILE_NAME: &str = ".unusedi18nrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_en_messages")]
    pub en_messages: String,
    #[serde(default = "default_tr_messages")]
    pub tr_messages: String,
    #[serde(default = "default_source_root", alias = "sourceDir")]
    pub source_root: String,
    #[serde(default = "default_report_path")]
    pub report_path: String,
    #[serde(default)]
    pub scanner: ScannerPreference,
    #[serde(default = "default_max_unused_preview")]
    pub max_unused_preview: usize,
    #[serde(default = "default_max_used_preview")]
    pub max_used_preview: usize,
}

fn default_en_messages() -> String {
    "messages/en.json".to_string()
}

fn default_tr_messages() -> String {
    "messages/tr.json".to_string()
}

fn default_source_root() -> String {
    "src".to_string()
}

fn default_report_path() -> String {
    "translation_analysis_report.txt".to_string()
}

fn default_max_unused_preview() -> usize {
    20
}

fn default_max_used_preview() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            en_messages: default_en_messages(),
            tr_messages: default_tr_messages(),
            source_root: default_source_root(),
            report_path: default_report_path(),
            scanner: ScannerPreference::default(),
            max_unused_preview: default_max_unused_preview(),
            max_used_preview: default_max_used_preview(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Every path must be non-empty.
    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("enMessages", &self.en_messages),
            ("trMessages", &self.tr_messages),
            ("sourceRoot", &self.source_root),
            ("reportPath", &self.report_path),
        ];
        for (name, value) in paths {
            if value.trim().is_empty() {
                bail!("'{}' must not be empty", name);
            }
        }
        Ok(())
    }

    /// Resolve every path against `root`. Absolute paths are kept as-is.
    pub fn resolve_paths(&self, root: &Path) -> AnalysisPaths {
        AnalysisPaths {
            en_messages: resolve_path(root, &self.en_messages),
            tr_messages: resolve_path(root, &self.tr_messages),
            source_root: resolve_path(root, &self.source_root),
            report_path: resolve_path(root, &self.report_path),
        }
    }
}

fn resolve_path(root: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    let rel = path.strip_prefix(".").unwrap_or(path);
    root.join(rel)
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Nearest ancestor of `start_dir` (itself included) holding a `.git`
/// entry, or `start_dir` when there is none.
pub fn find_project_root(start_dir: &Path) -> PathBuf {
    start_dir
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .unwrap_or(start_dir)
        .to_path_buf()
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory that relative config paths resolve against: the config
    /// file's directory, or the start directory when using defaults.
    pub root: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                root,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            root: start_dir.to_path_buf(),
        }),
    }
}
