//! The view of the formatting object tree that range collection walks.
use wezterm_bidi::Direction;

pub const LRE: char = '\u{202a}';
pub const RLE: char = '\u{202b}';
pub const PDF: char = '\u{202c}';
pub const LRO: char = '\u{202d}';
pub const RLO: char = '\u{202e}';

/// Placeholder appended for page number citations and graphics.
pub const OBJECT_REPLACEMENT_CHARACTER: char = '\u{fffc}';

/// The `unicode-bidi` property of an explicit direction node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnicodeBidi {
    Normal,
    Embed,
    BidiOverride,
}

impl UnicodeBidi {
    /// The control character that opens content with this property in
    /// the given direction. `Normal` brackets nothing.
    pub fn prefix(self, direction: Direction) -> Option<char> {
        match (self, direction) {
            (Self::Normal, _) => None,
            (Self::Embed, Direction::LeftToRight) => Some(LRE),
            (Self::Embed, Direction::RightToLeft) => Some(RLE),
            (Self::BidiOverride, Direction::LeftToRight) => Some(LRO),
            (Self::BidiOverride, Direction::RightToLeft) => Some(RLO),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
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
    Text(&'a str),
    PageNumber,
    PageNumberCitation,
    Graphic,
    /// Anything the tree knows about but range collection does not;
    /// its children are visited in order.
    Other,
}

impl<'a> NodeKind<'a> {
    /// Whether a delimited text range starts before and after this node.
    pub fn is_range_boundary(&self) -> bool {
        match self {
            Self::Block => true,
            Self::BlockContainer => true,
            Self::Root => true,
            Self::PageSequence => true,
            Self::Flow => true,
            Self::StaticContent => true,
            Self::ListBlock => true,
            Self::ListItem => true,
            Self::ListItemLabel => true,
            Self::ListItemBody => true,
            Self::Table => true,
            Self::TableCell => true,
            Self::Footnote => true,
            Self::Other => true,
            Self::Title => false,
            Self::Inline => false,
            Self::InlineContainer => false,
            Self::Leader => false,
            Self::BidiOverride { .. } => false,
            Self::Wrapper => false,
            Self::Character(_) => false,
            Self::Text(_) => false,
            Self::PageNumber => false,
            Self::PageNumberCitation => false,
            Self::Graphic => false,
        }
    }

    /// Only a block may open the first range of a document.
    pub fn opens_first_range(&self) -> bool {
        matches!(self, Self::Block)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::PageSequence => "page-sequence",
            Self::Flow => "flow",
            Self::StaticContent => "static-content",
            Self::Title => "title",
            Self::Block => "block",
            Self::BlockContainer => "block-container",
            Self::ListBlock => "list-block",
            Self::ListItem => "list-item",
            Self::ListItemLabel => "list-item-label",
            Self::ListItemBody => "list-item-body",
            Self::Table => "table",
            Self::TableCell => "table-cell",
            Self::Footnote => "footnote",
            Self::Inline => "inline",
            Self::InlineContainer => "inline-container",
            Self::Leader => "leader",
            Self::BidiOverride { .. } => "bidi-override",
            Self::Wrapper => "wrapper",
            Self::Character(_) => "character",
            Self::Text(_) => "#text",
            Self::PageNumber => "page-number",
            Self::PageNumberCitation => "page-number-citation",
            Self::Graphic => "graphic",
            Self::Other => "other",
        }
    }
}

/// A formatting object tree, as seen by range collection.
///
/// Implementations own the nodes; `Node` is a cheap handle.
pub trait FormattingTree {
    type Node: Copy + Eq + std::fmt::Debug;

    fn kind(&self, node: Self::Node) -> NodeKind<'_>;
    fn children(&self, node: Self::Node) -> &[Self::Node];
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// The inline-progression direction in effect at `node`; this is the
    /// paragraph direction of any range that `node` opens.
    fn direction(&self, node: Self::Node) -> Direction;

    /// Returns true if `node` is `ancestor` or lies beneath it.
    fn is_self_or_descendant(&self, ancestor: Self::Node, node: Self::Node) -> bool {
        let mut cursor = Some(node);
        while let Some(n) = cursor {
            if n == ancestor {
                return true;
            }
            cursor = self.parent(n);
        }
        false
    }

    /// The label and body of a list item.
    fn list_item_parts(&self, item: Self::Node) -> (Option<Self::Node>, Option<Self::Node>) {
        let find = |want: NodeKind<'static>| {
            self.children(item)
                .iter()
                .copied()
                .find(|&child| self.kind(child) == want)
        };
        (find(NodeKind::ListItemLabel), find(NodeKind::ListItemBody))
    }

    /// The static content flows of a page sequence, in document order,
    /// followed by its main flow.
    fn flows(&self, page_sequence: Self::Node) -> (Vec<Self::Node>, Option<Self::Node>) {
        let children = self.children(page_sequence);
        let static_content = children
            .iter()
            .copied()
            .filter(|&child| self.kind(child) == NodeKind::StaticContent)
            .collect();
        let main_flow = children
            .iter()
            .copied()
            .find(|&child| self.kind(child) == NodeKind::Flow);
        (static_content, main_flow)
    }
}
