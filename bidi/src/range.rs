use crate::error::{Error, Result};
use crate::level::format_levels;
use crate::resolver::LevelResolver;
use std::fmt;
use std::ops::Range;
use wezterm_bidi::{Direction, Level};

/// Where the characters of an interval came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalKind {
    /// Characters of a text or character node.
    Text,
    /// A synthetic embedding, override or pop control.
    Control,
    /// The object replacement placeholder for a citation or graphic.
    Object,
}

/// A span of a range's buffer contributed by a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInterval<N> {
    pub node: N,
    pub range: Range<usize>,
    pub kind: IntervalKind,
}

/// Receives the levels that resolution assigns to each node.
pub trait LevelSink<N> {
    /// `levels` holds one level per character that `node` contributed,
    /// in logical order.
    fn assign_levels(&mut self, node: N, levels: &[Level]);

    /// The paragraph level of the range that `node` opened.
    fn assign_block_level(&mut self, node: N, level: Level) {
        let _ = (node, level);
    }

    /// Forgets whatever an earlier resolution assigned to `node`, so that
    /// resolving again replaces levels instead of adding to them.
    fn clear_levels(&mut self, node: N) {
        let _ = node;
    }
}

/// A contiguous buffer of logical characters collected between two
/// structural boundaries; bidi resolution runs over it as one paragraph.
#[derive(Debug, Clone)]
pub struct DelimitedTextRange<N> {
    node: N,
    direction: Direction,
    buffer: Vec<char>,
    intervals: Vec<TextInterval<N>>,
    levels: Option<Vec<Level>>,
}

impl<N: Copy + Eq> DelimitedTextRange<N> {
    pub fn new(node: N, direction: Direction) -> Self {
        Self {
            node,
            direction,
            buffer: vec![],
            intervals: vec![],
            levels: None,
        }
    }

    /// The node that opened this range.
    pub fn node(&self) -> N {
        self.node
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn chars(&self) -> &[char] {
        &self.buffer
    }

    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn intervals(&self) -> &[TextInterval<N>] {
        &self.intervals
    }

    /// Resolved levels, one per character; `None` until `resolve`.
    pub fn levels(&self) -> Option<&[Level]> {
        self.levels.as_deref()
    }

    pub fn append_str(&mut self, text: &str, origin: N) {
        let start = self.buffer.len();
        self.buffer.extend(text.chars());
        self.add_interval(origin, start, IntervalKind::Text);
    }

    pub fn append(&mut self, c: char, origin: N, kind: IntervalKind) {
        let start = self.buffer.len();
        self.buffer.push(c);
        self.add_interval(origin, start, kind);
    }

    fn add_interval(&mut self, node: N, start: usize, kind: IntervalKind) {
        let end = self.buffer.len();
        if start == end {
            return;
        }
        if let Some(last) = self.intervals.last_mut() {
            if last.node == node && last.kind == kind && last.range.end == start {
                last.range.end = end;
                return;
            }
        }
        self.intervals.push(TextInterval {
            node,
            range: start..end,
            kind,
        });
    }

    /// Runs `resolver` over the buffered text, using the direction of the
    /// opening node as the paragraph direction.
    pub fn resolve<R: LevelResolver + ?Sized>(&mut self, resolver: &mut R) -> Result<&[Level]> {
        let levels = resolver.resolve_levels(&self.buffer, self.direction);
        if levels.len() != self.buffer.len() {
            return Err(Error::LevelCountMismatch {
                expected: self.buffer.len(),
                got: levels.len(),
            });
        }
        Ok(self.levels.insert(levels).as_slice())
    }

    /// The paragraph level of this range.
    pub fn base_level(&self) -> Level {
        match self.direction {
            Direction::LeftToRight => Level(0),
            Direction::RightToLeft => Level(1),
        }
    }

    /// Clears the levels of the opening node and of every node that
    /// contributed characters, ahead of a fresh `propagate`.
    pub fn clear_levels<S: LevelSink<N> + ?Sized>(&self, sink: &mut S) {
        sink.clear_levels(self.node);
        for interval in &self.intervals {
            if interval.kind != IntervalKind::Control {
                sink.clear_levels(interval.node);
            }
        }
    }

    /// Hands the resolved levels back to the nodes that contributed the
    /// characters. Synthetic controls belong to no node and are skipped.
    /// Does nothing if the range has not been resolved.
    pub fn propagate<S: LevelSink<N> + ?Sized>(&self, sink: &mut S) {
        let levels = match &self.levels {
            Some(levels) => levels,
            None => return,
        };
        sink.assign_block_level(self.node, self.base_level());
        for interval in &self.intervals {
            if interval.kind == IntervalKind::Control {
                continue;
            }
            sink.assign_levels(interval.node, &levels[interval.range.clone()]);
        }
    }
}

impl<N: fmt::Debug> fmt::Display for DelimitedTextRange<N> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let text: String = self.buffer.iter().collect();
        write!(fmt, "DR: {:?} {{ <{}>", self.node, text.escape_debug())?;
        if let Some(levels) = &self.levels {
            write!(fmt, ", levels = '{}'", format_levels(levels))?;
        }
        write!(fmt, " }}")
    }
}
