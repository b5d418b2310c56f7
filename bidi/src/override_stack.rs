use crate::error::{Error, Result};
use crate::level::MAX_DEPTH;
use std::fmt::Debug;

/// A pending explicit direction node whose content is bracketed by
/// `control` and a closing PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OverrideMarker<N> {
    pub node: N,
    /// Index of the range that received the opening control; the
    /// closing PDF goes to the same range.
    pub range: usize,
    pub control: char,
}

/// Stack of the explicit direction nodes currently being traversed.
#[derive(Debug)]
pub(crate) struct OverrideStack<N> {
    markers: Vec<OverrideMarker<N>>,
}

impl<N: Copy + Eq + Debug> OverrideStack<N> {
    pub fn new() -> Self {
        Self { markers: vec![] }
    }

    pub fn depth(&self) -> usize {
        self.markers.len()
    }

    pub fn push(&mut self, marker: OverrideMarker<N>) {
        log::trace!(
            "pushing override {:?} control={:?} range={} at depth={}",
            marker.node,
            marker.control,
            marker.range,
            self.depth()
        );
        self.markers.push(marker);
        if self.depth() == MAX_DEPTH + 1 {
            log::warn!(
                "explicit override nesting at {:?} exceeds the UBA maximum depth of {}",
                marker.node,
                MAX_DEPTH
            );
        }
    }

    /// Pops the innermost marker, which must belong to `node`.
    pub fn pop(&mut self, node: N) -> Result<OverrideMarker<N>> {
        let marker = self.markers.pop().ok_or_else(|| Error::UnbalancedOverride {
            node: format!("{:?}", node),
        })?;
        if marker.node != node {
            return Err(Error::MismatchedOverride {
                expected: format!("{:?}", marker.node),
                found: format!("{:?}", node),
            });
        }
        Ok(marker)
    }
}
