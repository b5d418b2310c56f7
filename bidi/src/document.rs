//! A simple arena backed formatting object tree.
//!
//! Hosts with their own object model implement `FormattingTree` and
//! `LevelSink` directly; `DocumentTree` exists for everyone else, and for
//! the tests.
use crate::range::LevelSink;
use crate::tree::{FormattingTree, NodeKind, UnicodeBidi};
use wezterm_bidi::{Direction, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// The owned payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Root,
    PageSequence,
    Flow,
    StaticContent,
    Title,
    Block,
    BlockContainer,
    ListBlock,
    ListItem,
    ListItemLabel,
    ListItemBody,
    Table,
    TableCell,
    Footnote,
    Inline,
    InlineContainer,
    Leader,
    BidiOverride {
        unicode_bidi: UnicodeBidi,
        direction: Direction,
    },
    Wrapper,
    Character(char),
    Text(String),
    PageNumber,
    PageNumberCitation,
    Graphic,
    /// An element that range collection has no special handling for;
    /// the name is kept for diagnostics.
    Other(String),
}

impl NodeData {
    pub fn kind(&self) -> NodeKind<'_> {
        match self {
            Self::Root => NodeKind::Root,
            Self::PageSequence => NodeKind::PageSequence,
            Self::Flow => NodeKind::Flow,
            Self::StaticContent => NodeKind::StaticContent,
            Self::Title => NodeKind::Title,
            Self::Block => NodeKind::Block,
            Self::BlockContainer => NodeKind::BlockContainer,
            Self::ListBlock => NodeKind::ListBlock,
            Self::ListItem => NodeKind::ListItem,
            Self::ListItemLabel => NodeKind::ListItemLabel,
            Self::ListItemBody => NodeKind::ListItemBody,
            Self::Table => NodeKind::Table,
            Self::TableCell => NodeKind::TableCell,
            Self::Footnote => NodeKind::Footnote,
            Self::Inline => NodeKind::Inline,
            Self::InlineContainer => NodeKind::InlineContainer,
            Self::Leader => NodeKind::Leader,
            Self::BidiOverride {
                unicode_bidi,
                direction,
            } => NodeKind::BidiOverride {
                unicode_bidi: *unicode_bidi,
                direction: *direction,
            },
            Self::Wrapper => NodeKind::Wrapper,
            Self::Character(c) => NodeKind::Character(*c),
            Self::Text(text) => NodeKind::Text(text),
            Self::PageNumber => NodeKind::PageNumber,
            Self::PageNumberCitation => NodeKind::PageNumberCitation,
            Self::Graphic => NodeKind::Graphic,
            Self::Other(_) => NodeKind::Other,
        }
    }
}

#[derive(Debug)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    direction: Option<Direction>,
    levels: Vec<Level>,
    block_level: Option<Level>,
}

/// Nodes are never removed, so a `NodeId` stays valid for the lifetime
/// of the tree that issued it.
#[derive(Debug)]
pub struct DocumentTree {
    nodes: Vec<Node>,
}

impl Default for DocumentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                data: NodeData::Root,
                parent: None,
                children: vec![],
                direction: None,
                levels: vec![],
                block_level: None,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends a new last child to `parent`.
    pub fn append(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data,
            parent: Some(parent),
            children: vec![],
            direction: None,
            levels: vec![],
            block_level: None,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn data(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.0].data
    }

    /// Sets the writing direction of `node`; descendants without a
    /// direction of their own inherit it.
    pub fn set_direction(&mut self, node: NodeId, direction: Direction) {
        self.nodes[node.0].direction = Some(direction);
    }

    /// The levels resolved for the characters that `node` contributed,
    /// empty until resolution has run.
    pub fn levels(&self, node: NodeId) -> &[Level] {
        &self.nodes[node.0].levels
    }

    /// The paragraph level of the range that `node` opened, if any.
    pub fn block_level(&self, node: NodeId) -> Option<Level> {
        self.nodes[node.0].block_level
    }
}

impl FormattingTree for DocumentTree {
    type Node = NodeId;

    fn kind(&self, node: NodeId) -> NodeKind<'_> {
        self.nodes[node.0].data.kind()
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn direction(&self, node: NodeId) -> Direction {
        let mut cursor = Some(node);
        while let Some(n) = cursor {
            if let Some(direction) = self.nodes[n.0].direction {
                return direction;
            }
            cursor = self.nodes[n.0].parent;
        }
        Direction::LeftToRight
    }
}

impl LevelSink<NodeId> for DocumentTree {
    fn assign_levels(&mut self, node: NodeId, levels: &[Level]) {
        // A node may contribute several intervals to a range, eg: text
        // on either side of a nested override.
        self.nodes[node.0].levels.extend_from_slice(levels);
    }

    fn assign_block_level(&mut self, node: NodeId, level: Level) {
        self.nodes[node.0].block_level = Some(level);
    }

    fn clear_levels(&mut self, node: NodeId) {
        let node = &mut self.nodes[node.0];
        node.levels.clear();
        node.block_level = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k9::assert_equal as assert_eq;

    #[test]
    fn structure() {
        let mut tree = DocumentTree::new();
        let root = tree.root();
        let block = tree.append(root, NodeData::Block);
        let text = tree.append(block, NodeData::Text("hello".to_string()));
        let other = tree.append(block, NodeData::Other("marker".to_string()));

        assert_eq!(tree.children(root), &[block][..]);
        assert_eq!(tree.children(block), &[text, other][..]);
        assert_eq!(tree.parent(text), Some(block));
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.kind(text), NodeKind::Text("hello"));
        assert_eq!(tree.kind(other), NodeKind::Other);
        assert!(tree.is_self_or_descendant(root, text));
        assert!(tree.is_self_or_descendant(block, block));
        assert!(!tree.is_self_or_descendant(text, block));
    }

    #[test]
    fn direction_is_inherited() {
        let mut tree = DocumentTree::new();
        let root = tree.root();
        let outer = tree.append(root, NodeData::Block);
        let inner = tree.append(outer, NodeData::Block);
        assert_eq!(tree.direction(inner), Direction::LeftToRight);

        tree.set_direction(outer, Direction::RightToLeft);
        assert_eq!(tree.direction(inner), Direction::RightToLeft);

        tree.set_direction(inner, Direction::LeftToRight);
        assert_eq!(tree.direction(inner), Direction::LeftToRight);
        assert_eq!(tree.direction(outer), Direction::RightToLeft);
    }

    #[test]
    fn list_item_parts_and_flows() {
        let mut tree = DocumentTree::new();
        let root = tree.root();
        let item = tree.append(root, NodeData::ListItem);
        let body = tree.append(item, NodeData::ListItemBody);
        let label = tree.append(item, NodeData::ListItemLabel);
        assert_eq!(tree.list_item_parts(item), (Some(label), Some(body)));

        let ps = tree.append(root, NodeData::PageSequence);
        tree.append(ps, NodeData::Title);
        let before = tree.append(ps, NodeData::StaticContent);
        let flow = tree.append(ps, NodeData::Flow);
        let after = tree.append(ps, NodeData::StaticContent);
        assert_eq!(tree.flows(ps), (vec![before, after], Some(flow)));
    }

    #[test]
    fn levels_accumulate() {
        let mut tree = DocumentTree::new();
        let root = tree.root();
        let text = tree.append(root, NodeData::Text("abc".to_string()));
        tree.assign_levels(text, &[Level(0)]);
        tree.assign_levels(text, &[Level(1), Level(1)]);
        assert_eq!(tree.levels(text), &[Level(0), Level(1), Level(1)][..]);
        assert_eq!(tree.block_level(root), None);
        tree.assign_block_level(root, Level(1));
        assert_eq!(tree.block_level(root), Some(Level(1)));

        tree.clear_levels(text);
        tree.clear_levels(root);
        assert!(tree.levels(text).is_empty());
        assert_eq!(tree.block_level(root), None);
    }
}
