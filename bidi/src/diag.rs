//! Structured diagnostics.
//!
//! The collection and reordering passes describe what they did through a
//! `DiagnosticSink` that the caller supplies. `LogSink` forwards to the
//! `log` crate; a `Vec<Diagnostic>` records the trace so that tests and
//! tooling can inspect it.
use std::fmt;

/// The reorder stage after which a run dump was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    Input,
    SplitInlines,
    ReorderedRuns,
    ReorderedWords,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnostic {
    /// A delimited text range had its levels resolved.
    RangeResolved { range: String },
    /// The run sequence of a line, one rendered run per entry.
    Runs { stage: Stage, runs: Vec<String> },
    /// The level bounds that drive the reorder passes.
    LevelBounds { min: i8, max: i8 },
    /// An inline area that run collection does not know how to order.
    LeafDropped { type_code: char },
    /// A word whose level array does not match its character count; it
    /// is ordered as a single run at its lowest level.
    LevelsMismatch { chars: usize, levels: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::RangeResolved { range } => write!(fmt, "BD: RESOLVE: {}", range),
            Self::Runs { stage, runs } => {
                let label = match stage {
                    Stage::Input => "INPUT",
                    Stage::SplitInlines => "SPLIT INLINES",
                    Stage::ReorderedRuns => "REORDERED RUNS",
                    Stage::ReorderedWords => "REORDERED WORDS",
                };
                write!(fmt, "BD: REORDER: {}:", label)?;
                for run in runs {
                    write!(fmt, "\n  {}", run)?;
                }
                Ok(())
            }
            Self::LevelBounds { min, max } => {
                write!(fmt, "BD: REORDER: {{ min = {}, max = {} }}", min, max)
            }
            Self::LeafDropped { type_code } => {
                write!(fmt, "BD: REORDER: dropped unrecognized area '{}'", type_code)
            }
            Self::LevelsMismatch { chars, levels } => write!(
                fmt,
                "BD: REORDER: word has {} levels for {} characters",
                levels, chars
            ),
        }
    }
}

pub trait DiagnosticSink {
    /// Returning false lets producers skip building diagnostics that
    /// nobody will look at.
    fn enabled(&self) -> bool {
        true
    }

    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `log::debug!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn enabled(&self) -> bool {
        log::log_enabled!(log::Level::Debug)
    }

    fn emit(&mut self, diagnostic: Diagnostic) {
        log::debug!("{}", diagnostic);
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k9::assert_equal as assert_eq;

    #[test]
    fn render_runs() {
        let diag = Diagnostic::Runs {
            stage: Stage::SplitInlines,
            runs: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(diag.to_string(), "BD: REORDER: SPLIT INLINES:\n  a\n  b");
        assert_eq!(
            Diagnostic::LevelBounds { min: 0, max: 2 }.to_string(),
            "BD: REORDER: { min = 0, max = 2 }"
        );
        assert_eq!(
            Diagnostic::LevelsMismatch {
                chars: 4,
                levels: 2
            }
            .to_string(),
            "BD: REORDER: word has 2 levels for 4 characters"
        );
    }
}
