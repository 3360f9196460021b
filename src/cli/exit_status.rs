use std::process::ExitCode;

use crate::core::AnalysisRun;

/// Process exit status.
///
/// Unused keys never fail a run. `Failure` means there was nothing to
/// compare: neither locale file loaded, or `init` found a config already.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    Failure = 1,
    /// Invalid config, unwritable report, forced scanner unavailable.
    Error = 2,
}

impl ExitStatus {
    /// Status for a finished analysis.
    pub fn of_analysis(run: &AnalysisRun) -> Self {
        if run.has_locale_data() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
