//! JSON run report.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::suite::Group;

#[derive(Debug, Default, serde::Serialize)]
pub(crate) struct Report {
    pub(crate) passed: bool,
    pub(crate) groups: Vec<GroupReport>,
    pub(crate) failure: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct GroupReport {
    pub(crate) group: Group,
    pub(crate) checks: usize,
    pub(crate) passed: bool,
}

/// Where a report goes: a file, or stdout when the path is `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReportTarget {
    Stdout,
    File(PathBuf),
}

impl ReportTarget {
    pub(crate) fn from_path(path: &Path) -> Self {
        if path == Path::new("-") {
            ReportTarget::Stdout
        } else {
            ReportTarget::File(path.to_path_buf())
        }
    }

    fn display_path(&self) -> String {
        match self {
            ReportTarget::Stdout => "stdout".to_string(),
            ReportTarget::File(path) => path.display().to_string(),
        }
    }

    pub(crate) fn write(&self, report: &Report) -> anyhow::Result<()> {
        match self {
            ReportTarget::Stdout => self.write_to(io::stdout().lock(), report),
            ReportTarget::File(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create report file: {}", path.display())
                })?;
                self.write_to(BufWriter::new(file), report)
            }
        }
    }

    fn write_to<W>(&self, mut writer: W, report: &Report) -> anyhow::Result<()>
    where
        W: Write,
    {
        serde_json::to_writer_pretty(&mut writer, report)
            .with_context(|| format!("Failed to write report to {}", self.display_path()))?;
        writeln!(writer)
            .and_then(|()| writer.flush())
            .with_context(|| format!("Failed to flush report to {}", self.display_path()))?;
        Ok(())
    }
}
