//! Visual reordering of a laid out line (rule L2 of the UBA), applied at
//! the granularity of inline areas rather than characters.
use crate::area::{InlineArea, LineArea};
use crate::config::BidiConfig;
use crate::diag::{Diagnostic, DiagnosticSink, LogSink, Stage};
use crate::level::{level_bounds, lowest_odd_floor};
use crate::run::RunLevel;
use crate::unflatten::{flatten, unflatten, FlatLeaf};
use log::{debug, trace};
use wezterm_bidi::Level;

/// Reorders `line` in place using the default configuration, logging
/// diagnostics at debug level.
pub fn reorder(line: &mut LineArea) {
    LineReorderer::default().reorder_line(line, &mut LogSink);
}

/// Returns `areas` in visual order, using the default configuration.
pub fn reorder_areas(areas: Vec<InlineArea>) -> Vec<InlineArea> {
    LineReorderer::default().reorder_areas(areas, &mut LogSink)
}

#[derive(Debug, Clone, Copy)]
pub struct LineReorderer {
    enabled: bool,
    mirror: bool,
}

impl Default for LineReorderer {
    fn default() -> Self {
        Self::new(&BidiConfig::default())
    }
}

impl LineReorderer {
    pub fn new(config: &BidiConfig) -> Self {
        Self {
            enabled: config.enabled,
            mirror: config.mirror,
        }
    }

    pub fn reorder_line<S: DiagnosticSink + ?Sized>(&self, line: &mut LineArea, sink: &mut S) {
        if !self.enabled {
            return;
        }
        let areas = line.take_inline_areas();
        line.set_inline_areas(self.reorder_areas(areas, sink));
    }

    pub fn reorder_areas<S: DiagnosticSink + ?Sized>(
        &self,
        areas: Vec<InlineArea>,
        sink: &mut S,
    ) -> Vec<InlineArea> {
        if !self.enabled || areas.is_empty() {
            return areas;
        }
        let leaves = flatten(areas);

        let runs = collect_runs(&leaves, sink);
        dump_runs(sink, Stage::Input, &runs, &leaves);

        let runs: Vec<RunLevel> = runs.into_iter().flat_map(RunLevel::split).collect();
        dump_runs(sink, Stage::SplitInlines, &runs, &leaves);

        // An empty or entirely undirected line has nothing to reorder.
        let (min, max) = runs
            .iter()
            .fold(None, |bounds, run| run.update_min_max(bounds))
            .unwrap_or((Level(0), Level(0)));
        if sink.enabled() {
            sink.emit(Diagnostic::LevelBounds {
                min: min.0,
                max: max.0,
            });
        }

        let mut runs = runs;
        let floor = lowest_odd_floor(min);
        for level in (floor.0..=max.0).rev() {
            runs = reorder_runs(runs, Level(level));
        }
        dump_runs(sink, Stage::ReorderedRuns, &runs, &leaves);

        let (runs, leaves) = self.reverse_words(runs, leaves);
        dump_runs(sink, Stage::ReorderedWords, &runs, &leaves);

        debug!(
            "reordered {} runs, levels {}..={}",
            runs.len(),
            min.0,
            max.0
        );
        unflatten(leaves)
    }

    /// Produces one leaf per run, in run order, with word content reversed
    /// and mirrored as the reorder passes require. A word that was split
    /// contributes one new word per piece.
    fn reverse_words(
        &self,
        runs: Vec<RunLevel>,
        leaves: Vec<FlatLeaf>,
    ) -> (Vec<RunLevel>, Vec<FlatLeaf>) {
        let mut slots: Vec<Option<FlatLeaf>> = leaves.into_iter().map(Some).collect();
        let mut placed_runs = Vec::with_capacity(runs.len());
        let mut placed = Vec::with_capacity(runs.len());

        for run in runs {
            let leaf = match run.span() {
                Some(span) => slots[run.leaf()].as_ref().map(|leaf| FlatLeaf {
                    area: match &leaf.area {
                        InlineArea::Word(word) => InlineArea::Word(word.slice(span)),
                        area => area.clone(),
                    },
                    parents: leaf.parents.clone(),
                }),
                None => slots[run.leaf()].take(),
            };
            let mut leaf = match leaf {
                Some(leaf) => leaf,
                None => continue,
            };
            run.maybe_reverse_word(&mut leaf.area, self.mirror);
            placed_runs.push(run.rebind(placed.len()));
            placed.push(leaf);
        }
        (placed_runs, placed)
    }
}

/// Step 1: one run per leaf that carries levels. Leaves the reorderer
/// does not understand are dropped from the line.
///
/// A word whose levels do not cover its characters cannot be split
/// without losing text, so it is ordered as a whole at its lowest level.
fn collect_runs<S: DiagnosticSink + ?Sized>(leaves: &[FlatLeaf], sink: &mut S) -> Vec<RunLevel> {
    let mut runs = Vec::with_capacity(leaves.len());
    for (idx, leaf) in leaves.iter().enumerate() {
        match leaf.area.bidi_levels() {
            Some(levels) => {
                let levels = match leaf.area.as_word() {
                    Some(word) if !levels.is_empty() && levels.len() != word.len() => {
                        debug!(
                            "word '{}' has {} levels for {} characters",
                            word.word(),
                            levels.len(),
                            word.len()
                        );
                        if sink.enabled() {
                            sink.emit(Diagnostic::LevelsMismatch {
                                chars: word.len(),
                                levels: levels.len(),
                            });
                        }
                        let (min, _) = level_bounds(&levels);
                        vec![min; word.len()]
                    }
                    _ => levels,
                };
                runs.push(RunLevel::new(idx, levels));
            }
            None => {
                let type_code = leaf.area.type_code();
                debug!("dropping unrecognized inline area '{}'", type_code);
                if sink.enabled() {
                    sink.emit(Diagnostic::LeafDropped { type_code });
                }
            }
        }
    }
    runs
}

/// Reverses every maximal sequence of runs whose minimum level is at
/// least `level`, counting the reversal on each run in it.
fn reorder_runs(runs: Vec<RunLevel>, level: Level) -> Vec<RunLevel> {
    let mut reordered = Vec::with_capacity(runs.len());
    let mut pending: Vec<RunLevel> = vec![];

    fn flush(pending: &mut Vec<RunLevel>, reordered: &mut Vec<RunLevel>) {
        reordered.extend(pending.drain(..).rev().map(|mut run| {
            run.reverse();
            run
        }));
    }

    for run in runs {
        if run.min_level() < level {
            flush(&mut pending, &mut reordered);
            reordered.push(run);
        } else {
            pending.push(run);
        }
    }
    flush(&mut pending, &mut reordered);
    trace!("pass at level {}: {} runs", level.0, reordered.len());
    reordered
}

fn dump_runs<S: DiagnosticSink + ?Sized>(
    sink: &mut S,
    stage: Stage,
    runs: &[RunLevel],
    leaves: &[FlatLeaf],
) {
    if !sink.enabled() {
        return;
    }
    let runs = runs
        .iter()
        .filter_map(|run| leaves.get(run.leaf()).map(|leaf| run.describe(&leaf.area)))
        .collect();
    sink.emit(Diagnostic::Runs { stage, runs });
}
