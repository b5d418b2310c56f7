//! The laid out inline content of a line, as seen by the reorderer.
use crate::mirror::mirrored;
use std::ops::Range;
use wezterm_bidi::Level;

/// A word: a sequence of glyph bearing characters, each with its own
/// resolved level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordArea {
    chars: Vec<char>,
    /// One level per character; empty when the word was never resolved.
    levels: Vec<Level>,
    /// Per character letter spacing adjustments, if any.
    letter_adjust: Option<Vec<i32>>,
    reversed: bool,
}

impl WordArea {
    pub fn new(word: &str, levels: Vec<Level>) -> Self {
        Self {
            chars: word.chars().collect(),
            levels,
            letter_adjust: None,
            reversed: false,
        }
    }

    /// Builds a word whose characters all share `level`.
    pub fn with_level(word: &str, level: Level) -> Self {
        let chars: Vec<char> = word.chars().collect();
        let levels = vec![level; chars.len()];
        Self {
            chars,
            levels,
            letter_adjust: None,
            reversed: false,
        }
    }

    pub fn with_letter_adjust(mut self, adjust: Vec<i32>) -> Self {
        self.letter_adjust.replace(adjust);
        self
    }

    pub fn word(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn bidi_levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn letter_adjust(&self) -> Option<&[i32]> {
        self.letter_adjust.as_deref()
    }

    /// Whether the characters are currently held in reverse logical order.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Reverses the characters, together with their levels and letter
    /// adjustments, optionally mirroring each character as it goes.
    pub fn reverse(&mut self, mirror: bool) {
        self.chars.reverse();
        if mirror {
            for c in self.chars.iter_mut() {
                *c = mirrored(*c);
            }
        }
        self.levels.reverse();
        if let Some(adjust) = self.letter_adjust.as_mut() {
            adjust.reverse();
        }
        self.reversed = !self.reversed;
    }

    /// Replaces every mirrorable character with its mirror glyph, leaving
    /// the order alone.
    pub fn mirror(&mut self) {
        for c in self.chars.iter_mut() {
            *c = mirrored(*c);
        }
    }

    /// Extracts the characters in `range` as a word of their own. Levels
    /// and adjustments are sliced alongside when they cover the word.
    pub fn slice(&self, range: Range<usize>) -> Self {
        let start = range.start.min(self.chars.len());
        let end = range.end.min(self.chars.len()).max(start);
        let levels = if self.levels.len() == self.chars.len() {
            self.levels[start..end].to_vec()
        } else {
            vec![]
        };
        let letter_adjust = self
            .letter_adjust
            .as_ref()
            .filter(|adjust| adjust.len() == self.chars.len())
            .map(|adjust| adjust[start..end].to_vec());
        Self {
            chars: self.chars[start..end].to_vec(),
            levels,
            letter_adjust,
            reversed: self.reversed,
        }
    }
}

/// Inter-word space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceArea {
    pub space: char,
    pub level: Level,
}

impl SpaceArea {
    pub fn new(space: char, level: Level) -> Self {
        Self { space, level }
    }
}

/// An atomic inline area that carries a single level and is never looked
/// inside of: glue, anchors, leaders, viewports and inline blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineBox {
    pub level: Level,
}

impl InlineBox {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

/// A page number citation whose target has not been laid out yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedPageNumber {
    pub text: String,
    pub level: Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentKind {
    Inline,
    Text,
    BasicLink,
}

/// A container that groups inline areas without a level of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineParent {
    pub kind: ParentKind,
    /// Block progression offset, in millipoints.
    pub offset: i32,
    pub children: Vec<InlineArea>,
}

impl InlineParent {
    pub fn new(kind: ParentKind, children: Vec<InlineArea>) -> Self {
        Self {
            kind,
            offset: 0,
            children,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineArea {
    Word(WordArea),
    Space(SpaceArea),
    Glue(InlineBox),
    Anchor(InlineBox),
    Leader(InlineBox),
    Viewport(InlineBox),
    BlockParent(InlineBox),
    UnresolvedPageNumber(UnresolvedPageNumber),
    Parent(InlineParent),
    /// An area produced by a layout extension that the reorderer does
    /// not understand.
    Foreign(InlineBox),
}

impl InlineArea {
    /// The levels that reordering works from: one per character for a
    /// word, a single level for the atomic areas. Containers and foreign
    /// areas have none.
    pub fn bidi_levels(&self) -> Option<Vec<Level>> {
        match self {
            Self::Word(word) => Some(word.levels.clone()),
            Self::Space(space) => Some(vec![space.level]),
            Self::Glue(b) | Self::Anchor(b) | Self::Leader(b) | Self::Viewport(b) => {
                Some(vec![b.level])
            }
            Self::BlockParent(b) => Some(vec![b.level]),
            Self::UnresolvedPageNumber(u) => Some(vec![u.level]),
            Self::Parent(_) | Self::Foreign(_) => None,
        }
    }

    /// One letter code used in run dumps.
    pub fn type_code(&self) -> char {
        match self {
            Self::Word(_) => 'W',
            Self::Space(_) => 'S',
            Self::Glue(_) => 'G',
            Self::Anchor(_) => 'A',
            Self::Leader(_) => 'L',
            Self::Viewport(_) => 'V',
            Self::BlockParent(_) => 'B',
            Self::UnresolvedPageNumber(_) => '#',
            Self::Parent(_) => 'I',
            Self::Foreign(_) => '?',
        }
    }

    /// Textual content for run dumps.
    pub fn content(&self) -> String {
        match self {
            Self::Word(word) => word.word(),
            Self::Space(space) => space.space.to_string(),
            Self::UnresolvedPageNumber(u) => u.text.clone(),
            _ => String::new(),
        }
    }

    pub fn as_word(&self) -> Option<&WordArea> {
        match self {
            Self::Word(word) => Some(word),
            _ => None,
        }
    }

    pub fn as_word_mut(&mut self) -> Option<&mut WordArea> {
        match self {
            Self::Word(word) => Some(word),
            _ => None,
        }
    }
}

/// A single output line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineArea {
    inline_areas: Vec<InlineArea>,
}

impl LineArea {
    pub fn new(inline_areas: Vec<InlineArea>) -> Self {
        Self { inline_areas }
    }

    pub fn inline_areas(&self) -> &[InlineArea] {
        &self.inline_areas
    }

    pub fn set_inline_areas(&mut self, inline_areas: Vec<InlineArea>) {
        self.inline_areas = inline_areas;
    }

    pub(crate) fn take_inline_areas(&mut self) -> Vec<InlineArea> {
        std::mem::take(&mut self.inline_areas)
    }
}
