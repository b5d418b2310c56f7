//! Bidirectional text support for paginated layout.
//!
//! Level resolution happens per paragraph, before line breaking: the
//! `RangeCollector` splits a formatting object tree into delimited text
//! ranges, a `LevelResolver` assigns embedding levels to their characters
//! and the levels flow back to the tree through a `LevelSink`.
//!
//! Visual reordering happens per line, after layout: the `LineReorderer`
//! applies rule L2 of the UBA to the inline areas of a `LineArea`,
//! reversing and mirroring word content where needed.

mod area;
mod collect;
mod config;
mod diag;
mod document;
mod error;
mod level;
mod mirror;
mod override_stack;
mod range;
mod reorder;
mod resolver;
mod run;
mod tree;
mod unflatten;

pub use area::{
    InlineArea, InlineBox, InlineParent, LineArea, ParentKind, SpaceArea, UnresolvedPageNumber,
    WordArea,
};
pub use collect::{resolve_inline_directionality, RangeCollector};
pub use config::BidiConfig;
pub use diag::{Diagnostic, DiagnosticSink, LogSink, Stage};
pub use document::{DocumentTree, NodeData, NodeId};
pub use error::{Error, Result};
pub use level::{format_levels, level_bounds, lowest_odd_floor, MAX_DEPTH, NONE};
pub use mirror::{mirror_char, mirrored};
pub use range::{DelimitedTextRange, IntervalKind, LevelSink, TextInterval};
pub use reorder::{reorder, reorder_areas, LineReorderer};
pub use resolver::{LevelResolver, UbaResolver};
pub use run::RunLevel;
pub use tree::{
    FormattingTree, NodeKind, UnicodeBidi, LRE, LRO, OBJECT_REPLACEMENT_CHARACTER, PDF, RLE, RLO,
};
pub use unflatten::{flatten, unflatten, FlatLeaf, ParentFrame};
pub use wezterm_bidi::{Direction, Level};
