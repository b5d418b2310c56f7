//! Converts between the nested inline areas of a line and the flat leaf
//! sequence that reordering works on.
use crate::area::{InlineArea, InlineParent, ParentKind};
use std::rc::Rc;

/// The identity and attributes of a container that a leaf was nested in.
/// Leaves that share a container hold clones of the same `Rc`.
#[derive(Debug, PartialEq, Eq)]
pub struct ParentFrame {
    pub kind: ParentKind,
    pub offset: i32,
}

/// A leaf area together with its chain of enclosing containers,
/// outermost first.
#[derive(Debug, Clone)]
pub struct FlatLeaf {
    pub area: InlineArea,
    pub parents: Vec<Rc<ParentFrame>>,
}

impl FlatLeaf {
    pub fn new(area: InlineArea) -> Self {
        Self {
            area,
            parents: vec![],
        }
    }
}

/// Flattens `areas` into their leaves in document order. Containers
/// without any leaves disappear.
pub fn flatten(areas: Vec<InlineArea>) -> Vec<FlatLeaf> {
    let mut leaves = vec![];
    flatten_into(areas, &[], &mut leaves);
    leaves
}

fn flatten_into(areas: Vec<InlineArea>, parents: &[Rc<ParentFrame>], leaves: &mut Vec<FlatLeaf>) {
    for area in areas {
        match area {
            InlineArea::Parent(InlineParent {
                kind,
                offset,
                children,
            }) => {
                let mut chain = parents.to_vec();
                chain.push(Rc::new(ParentFrame { kind, offset }));
                flatten_into(children, &chain, leaves);
            }
            area => leaves.push(FlatLeaf {
                area,
                parents: parents.to_vec(),
            }),
        }
    }
}

/// Rebuilds nested containers from `leaves`. Consecutive leaves that
/// share a container are grouped under one new copy of it; a container
/// whose leaves are not contiguous is rebuilt once per contiguous group.
pub fn unflatten(leaves: Vec<FlatLeaf>) -> Vec<InlineArea> {
    let mut top = vec![];
    let mut open: Vec<(Rc<ParentFrame>, Vec<InlineArea>)> = vec![];

    for FlatLeaf { area, parents } in leaves {
        let common = open
            .iter()
            .zip(parents.iter())
            .take_while(|((frame, _), parent)| Rc::ptr_eq(frame, parent))
            .count();
        while open.len() > common {
            close_innermost(&mut open, &mut top);
        }
        for frame in &parents[common..] {
            open.push((Rc::clone(frame), vec![]));
        }
        match open.last_mut() {
            Some((_, children)) => children.push(area),
            None => top.push(area),
        }
    }

    while !open.is_empty() {
        close_innermost(&mut open, &mut top);
    }
    top
}

fn close_innermost(open: &mut Vec<(Rc<ParentFrame>, Vec<InlineArea>)>, top: &mut Vec<InlineArea>) {
    if let Some((frame, children)) = open.pop() {
        let parent = InlineArea::Parent(InlineParent {
            kind: frame.kind,
            offset: frame.offset,
            children,
        });
        match open.last_mut() {
            Some((_, siblings)) => siblings.push(parent),
            None => top.push(parent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::{SpaceArea, WordArea};
    use k9::assert_equal as assert_eq;
    use wezterm_bidi::Level;

    fn word(s: &str) -> InlineArea {
        InlineArea::Word(WordArea::with_level(s, Level(0)))
    }

    fn parent(kind: ParentKind, children: Vec<InlineArea>) -> InlineArea {
        InlineArea::Parent(InlineParent::new(kind, children))
    }

    fn line() -> Vec<InlineArea> {
        vec![
            word("a"),
            parent(
                ParentKind::Inline,
                vec![
                    parent(
                        ParentKind::Text,
                        vec![
                            word("b"),
                            InlineArea::Space(SpaceArea::new(' ', Level(0))),
                            word("c"),
                        ],
                    ),
                    parent(ParentKind::BasicLink, vec![word("d")]),
                ],
            ),
            word("e"),
        ]
    }

    #[test]
    fn flatten_keeps_leaf_order() {
        let leaves = flatten(line());
        let content: String = leaves.iter().map(|l| l.area.content()).collect();
        assert_eq!(content, "ab cde".to_string());
        let depths: Vec<_> = leaves.iter().map(|l| l.parents.len()).collect();
        assert_eq!(depths, vec![0, 2, 2, 2, 2, 0]);
        assert!(Rc::ptr_eq(&leaves[1].parents[1], &leaves[3].parents[1]));
        assert!(!Rc::ptr_eq(&leaves[3].parents[1], &leaves[4].parents[1]));
        assert!(Rc::ptr_eq(&leaves[1].parents[0], &leaves[4].parents[0]));
    }

    #[test]
    fn round_trip() {
        assert_eq!(unflatten(flatten(line())), line());
    }

    #[test]
    fn separated_leaves_get_separate_containers() {
        let mut leaves = flatten(vec![
            parent(ParentKind::Inline, vec![word("a"), word("b")]),
            word("c"),
        ]);
        leaves.swap(1, 2);
        assert_eq!(
            unflatten(leaves),
            vec![
                parent(ParentKind::Inline, vec![word("a")]),
                word("c"),
                parent(ParentKind::Inline, vec![word("b")]),
            ]
        );
    }

    #[test]
    fn distinct_but_equal_containers_stay_apart() {
        let leaves = flatten(vec![
            parent(ParentKind::Inline, vec![word("a")]),
            parent(ParentKind::Inline, vec![word("b")]),
        ]);
        assert_eq!(unflatten(leaves.clone()).len(), 2);
        assert_eq!(unflatten(flatten(unflatten(leaves))).len(), 2);
    }

    #[test]
    fn empty_containers_vanish() {
        assert_eq!(
            unflatten(flatten(vec![parent(ParentKind::Inline, vec![]), word("x")])),
            vec![word("x")]
        );
        assert!(unflatten(vec![]).is_empty());
    }
}
