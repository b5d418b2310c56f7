//! Collection of delimited text ranges from a formatting object tree.
use crate::diag::{Diagnostic, DiagnosticSink};
use crate::error::{Error, Result};
use crate::override_stack::{OverrideMarker, OverrideStack};
use crate::range::{DelimitedTextRange, IntervalKind, LevelSink};
use crate::resolver::LevelResolver;
use crate::tree::{FormattingTree, NodeKind, UnicodeBidi, OBJECT_REPLACEMENT_CHARACTER, PDF};
use log::trace;
use wezterm_bidi::Direction;

/// Walks a `FormattingTree` depth first, splitting its text into
/// `DelimitedTextRange`s at block level boundaries.
///
/// The most recently opened range is the one that receives text; ranges
/// are never closed explicitly, a boundary simply opens a new one.
pub struct RangeCollector<'t, T: FormattingTree + ?Sized> {
    tree: &'t T,
    ranges: Vec<DelimitedTextRange<T::Node>>,
    overrides: OverrideStack<T::Node>,
}

impl<'t, T: FormattingTree + ?Sized> RangeCollector<'t, T> {
    pub fn new(tree: &'t T) -> Self {
        Self {
            tree,
            ranges: vec![],
            overrides: OverrideStack::new(),
        }
    }

    /// Returns the non-empty ranges beneath `root`, in document order.
    pub fn collect(mut self, root: T::Node) -> Result<Vec<DelimitedTextRange<T::Node>>> {
        self.visit(root)?;
        if self.overrides.depth() > 0 {
            return Err(Error::UnclosedOverrides {
                count: self.overrides.depth(),
            });
        }
        let total = self.ranges.len();
        let ranges: Vec<_> = self.ranges.into_iter().filter(|r| !r.is_empty()).collect();
        trace!("collected {} ranges, {} non-empty", total, ranges.len());
        Ok(ranges)
    }

    fn visit(&mut self, node: T::Node) -> Result<()> {
        let tree = self.tree;
        let kind = tree.kind(node);
        let boundary = kind.is_range_boundary();

        if boundary {
            self.maybe_new_range(node, &kind);
        }

        match kind {
            NodeKind::Text(text) => {
                if let Some(range) = self.ranges.last_mut() {
                    range.append_str(text, node);
                }
            }
            NodeKind::Character(c) => {
                if let Some(range) = self.ranges.last_mut() {
                    range.append(c, node, IntervalKind::Text);
                }
            }
            NodeKind::PageNumberCitation | NodeKind::Graphic => {
                if let Some(range) = self.ranges.last_mut() {
                    range.append(OBJECT_REPLACEMENT_CHARACTER, node, IntervalKind::Object);
                }
            }
            NodeKind::BidiOverride {
                unicode_bidi,
                direction,
            } => {
                // Without an open range there is nowhere to put the
                // override's content, so it is not visited at all.
                if !self.ranges.is_empty() {
                    self.visit_override(node, unicode_bidi, direction)?;
                }
            }
            NodeKind::ListItem => {
                let (label, body) = tree.list_item_parts(node);
                for part in [label, body].into_iter().flatten() {
                    self.visit(part)?;
                }
            }
            NodeKind::PageSequence => {
                let (static_content, main_flow) = tree.flows(node);
                for flow in static_content.into_iter().chain(main_flow) {
                    self.visit(flow)?;
                }
            }
            _ => {
                for &child in tree.children(node) {
                    self.visit(child)?;
                }
            }
        }

        if boundary {
            self.maybe_new_range(node, &kind);
        }
        Ok(())
    }

    fn visit_override(
        &mut self,
        node: T::Node,
        unicode_bidi: UnicodeBidi,
        direction: Direction,
    ) -> Result<()> {
        let range = self.ranges.len() - 1;
        let control = unicode_bidi.prefix(direction);
        if let Some(control) = control {
            self.ranges[range].append(control, node, IntervalKind::Control);
            self.overrides.push(OverrideMarker {
                node,
                range,
                control,
            });
        }

        for &child in self.tree.children(node) {
            self.visit(child)?;
        }

        if control.is_some() {
            let marker = self.overrides.pop(node)?;
            self.ranges[marker.range].append(PDF, node, IntervalKind::Control);
        }
        Ok(())
    }

    /// Opens a new range for `node` unless the current range is still
    /// empty and was opened by `node` or one of its ancestors; that case
    /// would only produce an empty range.
    fn maybe_new_range(&mut self, node: T::Node, kind: &NodeKind) {
        let open = match self.ranges.last() {
            None => kind.opens_first_range(),
            Some(current) => {
                !current.is_empty() || !self.tree.is_self_or_descendant(current.node(), node)
            }
        };
        if open {
            trace!("new range at {} {:?}", kind.name(), node);
            self.ranges
                .push(DelimitedTextRange::new(node, self.tree.direction(node)));
        }
    }
}

/// Collects the ranges beneath `root`, resolves each of them with
/// `resolver` and hands the levels back to the tree.
///
/// Every range is resolved before the tree is touched, so a failing
/// resolver leaves the tree as it was. Levels from an earlier resolution
/// of the same nodes are replaced, not added to.
pub fn resolve_inline_directionality<T, R, S>(
    tree: &mut T,
    root: T::Node,
    resolver: &mut R,
    sink: &mut S,
) -> Result<Vec<DelimitedTextRange<T::Node>>>
where
    T: FormattingTree + LevelSink<<T as FormattingTree>::Node>,
    R: LevelResolver + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    log::debug!("resolving inline directionality beneath {:?}", root);
    let mut ranges = RangeCollector::new(&*tree).collect(root)?;
    for range in &mut ranges {
        range.resolve(resolver)?;
    }
    for range in &ranges {
        range.clear_levels(tree);
    }
    for range in &ranges {
        range.propagate(tree);
        if sink.enabled() {
            sink.emit(Diagnostic::RangeResolved {
                range: range.to_string(),
            });
        }
    }
    Ok(ranges)
}
