use std::path::{Path, PathBuf};

/// Result of running the formatter on a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Formatted,
    /// Formatter exited unsuccessfully; `None` when killed by a signal.
    Failed(Option<i32>),
    /// Formatter could not be started at all.
    SpawnError(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Formatted)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub invoked: usize,
    pub failed: Vec<PathBuf>,
}

impl DispatchSummary {
    pub fn record(&mut self, path: &Path, outcome: &Outcome) {
        self.invoked += 1;
        if !outcome.is_success() {
            self.failed.push(path.to_path_buf());
        }
    }

    pub fn succeeded(&self) -> usize {
        self.invoked - self.failed.len()
    }
}
