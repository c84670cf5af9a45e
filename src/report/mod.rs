//! Renders diagnostics, load failures and the run summary

use colored::Colorize;
use std::io::{self, Write};

use crate::checker::Diagnostic;
use crate::loader::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One human-readable sentence per finding
    #[default]
    Text,
    /// One JSON object per finding (JSON Lines)
    Json,
}

/// Counters for the end-of-run summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub documents: usize,
    pub diagnostics: usize,
    pub failures: usize,
}

impl Summary {
    pub fn is_clean(&self) -> bool {
        self.diagnostics == 0 && self.failures == 0
    }

    pub fn render(&self) -> String {
        let text = format!(
            "Checked {} document(s): {} missing inner parameter(s), {} failed to load",
            self.documents, self.diagnostics, self.failures
        );

        if self.failures > 0 {
            text.red().to_string()
        } else if self.diagnostics > 0 {
            text.yellow().to_string()
        } else {
            text.green().to_string()
        }
    }
}

/// Writes findings to `out`; load errors always go to standard error
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
    summary: Summary,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            summary: Summary::default(),
        }
    }

    pub fn document_checked(&mut self) {
        self.summary.documents += 1;
    }

    pub fn diagnostic(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        self.summary.diagnostics += 1;

        match self.format {
            OutputFormat::Text => writeln!(self.out, "{diagnostic}"),
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, diagnostic)?;
                writeln!(self.out)
            }
        }
    }

    pub fn load_error(&mut self, err: LoadError) {
        self.summary.failures += 1;
        tracing::warn!("Skipping {}", err.document());
        eprintln!("{:?}", miette::Report::new(err));
    }

    pub fn finish(mut self) -> io::Result<Summary> {
        self.out.flush()?;
        Ok(self.summary)
    }
}
