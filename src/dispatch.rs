use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::types::{DispatchSummary, Outcome};

/// An external formatter invoked as `<program> -style=file -i <file>`.
#[derive(Debug, Clone)]
pub struct Formatter {
    program: OsString,
}

impl Formatter {
    pub const DEFAULT_PROGRAM: &'static str = "clang-format";

    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Builds the command for one file. Arguments are passed as a vector,
    /// never through a shell.
    pub fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-style=file")
            .arg("-i")
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }

    /// Runs the formatter on `path` and waits for it to exit.
    pub fn run(&self, path: &Path) -> Outcome {
        match self.command(path).status() {
            Ok(status) if status.success() => Outcome::Formatted,
            Ok(status) => Outcome::Failed(status.code()),
            Err(err) => Outcome::SpawnError(err.to_string()),
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

/// Runs `invoke` once per file, in order. A failed invocation never stops
/// the loop; `on_each` sees every outcome as it happens.
pub fn dispatch_with<F, G>(files: &[PathBuf], mut invoke: F, mut on_each: G) -> DispatchSummary
where
    F: FnMut(&Path) -> Outcome,
    G: FnMut(&Path, &Outcome),
{
    let mut summary = DispatchSummary::default();
    for path in files {
        let outcome = invoke(path);
        on_each(path, &outcome);
        summary.record(path, &outcome);
    }
    summary
}

pub fn dispatch<G>(files: &[PathBuf], formatter: &Formatter, on_each: G) -> DispatchSummary
where
    G: FnMut(&Path, &Outcome),
{
    dispatch_with(files, |p| formatter.run(p), on_each)
}
