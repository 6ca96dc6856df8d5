use std::path::{Path, PathBuf};

use tracing::debug;

use super::domain::{AppSettings, CleanOptions, Operation, TextStats};
use super::infrastructure::error::Result;
use super::services::{export, text_ops};

/// The two text buffers and the toggles that decide how operations chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub input: String,
    pub output: String,
    /// Feed the previous output into the next operation when there is one
    pub apply_to_output: bool,
    pub remove_accents: bool,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            apply_to_output: true,
            remove_accents: false,
        }
    }
}

impl Workspace {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    /// Empty workspace with toggles taken from the saved settings
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            apply_to_output: settings.apply_to_output,
            remove_accents: settings.remove_accents,
            ..Default::default()
        }
    }

    /// Text the next operation reads.
    ///
    /// The trimmed output when chaining is on and the output is not blank,
    /// otherwise the input.
    pub fn source_text(&self) -> &str {
        let output = text_ops::trim(&self.output);
        if self.apply_to_output && !output.is_empty() {
            output
        } else {
            &self.input
        }
    }

    /// Run `op` on the source text and store the result as the new output.
    pub fn apply(&mut self, op: Operation) -> (TextStats, TextStats) {
        let options = CleanOptions {
            remove_accents: self.remove_accents,
        };
        let result = op.apply(self.source_text(), &options);
        debug!(
            "Applied {} ({} -> {} bytes)",
            op.name(),
            self.source_text().len(),
            result.len()
        );
        self.output = result;
        (self.input_stats(), self.output_stats())
    }

    /// Apply several operations in order
    pub fn apply_all(&mut self, ops: &[Operation]) {
        for op in ops {
            self.apply(*op);
        }
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.input, &mut self.output);
    }

    /// Clear both buffers and restore the default toggles
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn input_stats(&self) -> TextStats {
        text_ops::stats(&self.input)
    }

    pub fn output_stats(&self) -> TextStats {
        text_ops::stats(&self.output)
    }

    /// Trimmed output for copying; fails when there is nothing to copy
    pub fn exportable_output(&self) -> Result<&str> {
        export::exportable_text(&self.output)
    }

    pub fn export_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        export::export_to_dir(&self.output, dir)
    }
}
