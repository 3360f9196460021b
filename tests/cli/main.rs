use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod analyze;

const BIN_NAME: &str = "unused-i18n";

pub const REPORT_FILE: &str = "translation_analysis_report.txt";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config lookup from escaping the temp project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with both locale files and a source tree.
    pub fn with_project(en: &str, tr: &str, sources: &[(&str, &str)]) -> Result<Self> {
        let test = Self::new()?;
        test.write_file("messages/en.json", en)?;
        test.write_file("messages/tr.json", tr)?;
        for (path, content) in sources {
            test.write_file(path, content)?;
        }
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    /// A command run from `dir`, relative to the project root.
    pub fn command_in(&self, dir: &str) -> Command {
        let mut cmd = self.command();
        cmd.current_dir(self.project_dir.join(dir));
        cmd
    }

    /// Write a `/bin/sh` script that answers `--version` like ripgrep and
    /// fails every search with exit status 2.
    #[cfg(unix)]
    pub fn write_failing_rg(&self, path: &str) -> Result<PathBuf> {
        use std::os::unix::fs::PermissionsExt;

        self.write_file(
            path,
            "#!/bin/sh\n\
             if [ \"$1\" = \"--version\" ]; then\n\
             \x20 echo 'ripgrep 14.1.1'\n\
             \x20 exit 0\n\
             fi\n\
             echo 'rg: search exploded' >&2\n\
             exit 2\n",
        )?;
        let script = self.project_dir.join(path);
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;
        Ok(script)
    }

    /// `analyze` pinned to the in-process scanner for deterministic output.
    pub fn analyze_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.args(["analyze", "--scanner", "walk"]);
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn read_report(&self) -> Result<String> {
        self.read_file(REPORT_FILE)
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("analyze"));
    assert!(out.contains("init"));

    Ok(())
}
