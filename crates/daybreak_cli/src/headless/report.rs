//! Machine-readable report of a headless scenario run.

use anyhow::{bail, Result};
use daybreak_theme::ColorScheme;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Component, Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Outcome of one scenario run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub steps_run: usize,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    /// Mode and root marker when the run stopped
    pub final_mode: ColorScheme,
    pub marker_present: bool,
}

/// Where a run stopped
#[derive(Debug, Clone, Copy)]
pub struct RunProgress {
    pub steps_run: usize,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    pub final_mode: ColorScheme,
    pub marker_present: bool,
}

impl ScenarioReport {
    pub fn passed(progress: RunProgress) -> Self {
        Self::from_progress(ReportStatus::Passed, None, None, None, progress)
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        message: String,
        progress: RunProgress,
    ) -> Self {
        Self::from_progress(
            ReportStatus::Failed,
            Some(failed_step_index),
            Some(assertion.to_string()),
            Some(message),
            progress,
        )
    }

    fn from_progress(
        status: ReportStatus,
        failed_step_index: Option<usize>,
        assertion: Option<String>,
        message: Option<String>,
        progress: RunProgress,
    ) -> Self {
        Self {
            status,
            failed_step_index,
            assertion,
            message,
            steps_run: progress.steps_run,
            elapsed_frames: progress.elapsed_frames,
            elapsed_ms: progress.elapsed_ms,
            final_mode: progress.final_mode,
            marker_present: progress.marker_present,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == ReportStatus::Failed
    }

    /// Write the report as pretty JSON to a path relative to the working directory
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            bail!("report path must be relative");
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("report path cannot contain '..' or drive prefixes");
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress() -> RunProgress {
        RunProgress {
            steps_run: 3,
            elapsed_frames: 10,
            elapsed_ms: 160,
            final_mode: ColorScheme::Dark,
            marker_present: true,
        }
    }

    #[test]
    fn test_failed_report_json() {
        let report = ScenarioReport::failed("assert_mode", 2, "expected light".into(), progress());
        let mut out = Vec::new();
        report.write_to_writer(&mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["failed_step_index"], 2);
        assert_eq!(json["final_mode"], "dark");
    }

    #[test]
    fn test_report_path_must_stay_relative() {
        let report = ScenarioReport::passed(progress());
        assert!(report.write_to_path(Path::new("/tmp/report.json")).is_err());
        assert!(report.write_to_path(Path::new("../report.json")).is_err());
    }
}
