use crate::area::InlineArea;
use crate::level::{format_levels, level_bounds};
use std::ops::Range;
use wezterm_bidi::Level;

/// The levels of one inline area of a line, or of one constant level
/// span of a word, together with the number of reorder passes that have
/// reversed it so far.
///
/// A `RunLevel` refers to its area by index into the leaf sequence of
/// the line being reordered; it never owns the area.
#[derive(Debug, Clone)]
pub struct RunLevel {
    leaf: usize,
    /// The characters of the leaf covered by this run, when it is one
    /// piece of a split word.
    span: Option<Range<usize>>,
    levels: Vec<Level>,
    min_level: Level,
    max_level: Level,
    reversals: usize,
}

impl RunLevel {
    pub fn new(leaf: usize, levels: Vec<Level>) -> Self {
        let (min_level, max_level) = level_bounds(&levels);
        Self {
            leaf,
            span: None,
            levels,
            min_level,
            max_level,
            reversals: 0,
        }
    }

    fn piece(leaf: usize, span: Range<usize>, level: Level) -> Self {
        let levels = vec![level; span.len()];
        Self {
            leaf,
            span: Some(span),
            levels,
            min_level: level,
            max_level: level,
            reversals: 0,
        }
    }

    pub fn leaf(&self) -> usize {
        self.leaf
    }

    pub fn span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    pub fn max_level(&self) -> Level {
        self.max_level
    }

    pub fn reversals(&self) -> usize {
        self.reversals
    }

    pub fn is_homogeneous(&self) -> bool {
        self.min_level == self.max_level
    }

    /// A run with no levels has no direction; it takes no part in the
    /// level bounds and is never reversed.
    pub fn is_degenerate(&self) -> bool {
        self.min_level.removed_by_x9()
    }

    /// Splits the run into one run per maximal constant level span.
    /// A homogeneous run comes back unchanged.
    pub fn split(self) -> Vec<RunLevel> {
        if self.is_homogeneous() {
            return vec![self];
        }
        let base = self.span.as_ref().map(|span| span.start).unwrap_or(0);
        let mut runs = vec![];
        let mut start = 0;
        while start < self.levels.len() {
            let level = self.levels[start];
            let len = self.levels[start..]
                .iter()
                .take_while(|&&l| l == level)
                .count();
            runs.push(Self::piece(
                self.leaf,
                base + start..base + start + len,
                level,
            ));
            start += len;
        }
        log::trace!("split leaf {} into {} runs", self.leaf, runs.len());
        runs
    }

    /// Widens `bounds` to include this run's levels.
    pub fn update_min_max(&self, bounds: Option<(Level, Level)>) -> Option<(Level, Level)> {
        if self.is_degenerate() {
            return bounds;
        }
        Some(match bounds {
            None => (self.min_level, self.max_level),
            Some((mn, mx)) => (mn.min(self.min_level), mx.max(self.max_level)),
        })
    }

    /// Records that a reorder pass reversed this run.
    pub fn reverse(&mut self) {
        self.reversals += 1;
    }

    /// A right to left run that no pass moved still has to show its
    /// mirrorable characters mirrored.
    pub fn needs_mirroring(&self) -> bool {
        self.is_homogeneous() && !self.is_degenerate() && self.min_level.0 % 2 == 1
    }

    /// Applies the net effect of the reorder passes to the characters of
    /// `area`, if it is a word. Other areas are left alone.
    pub fn maybe_reverse_word(&self, area: &mut InlineArea, mirror: bool) {
        if let Some(word) = area.as_word_mut() {
            if self.reversals % 2 == 1 {
                word.reverse(mirror);
            } else if mirror && self.needs_mirroring() {
                word.mirror();
            }
        }
    }

    /// Points the run at a different leaf that holds exactly the
    /// characters it covers.
    pub(crate) fn rebind(mut self, leaf: usize) -> Self {
        self.leaf = leaf;
        self.span = None;
        self
    }

    /// Renders the run for diagnostics; `area` is the leaf it refers to.
    pub fn describe(&self, area: &InlineArea) -> String {
        let content = match (area.as_word(), &self.span) {
            (Some(word), Some(span)) => word.slice(span.clone()).word(),
            _ => area.content(),
        };
        format!(
            "RR: {{ type = '{}', levels = '{}', min = {}, max = {}, reversals = {}, content = <{}> }}",
            area.type_code(),
            format_levels(&self.levels),
            self.min_level.0,
            self.max_level.0,
            self.reversals,
            content.escape_debug()
        )
    }
}

impl PartialEq for RunLevel {
    fn eq(&self, other: &Self) -> bool {
        self.leaf == other.leaf
            && self.min_level == other.min_level
            && self.max_level == other.max_level
            && self.levels == other.levels
    }
}
