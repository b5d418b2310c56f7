use wezterm_bidi::{BidiContext, Direction, Level, ParagraphDirectionHint, NO_LEVEL};

/// Resolves the embedding level of every character of a paragraph.
///
/// Implementations apply the UBA up to, but not including, rule L2;
/// visual reordering happens later, per line, over laid out areas.
pub trait LevelResolver {
    fn resolve_levels(&mut self, text: &[char], direction: Direction) -> Vec<Level>;
}

impl<F> LevelResolver for F
where
    F: FnMut(&[char], Direction) -> Vec<Level>,
{
    fn resolve_levels(&mut self, text: &[char], direction: Direction) -> Vec<Level> {
        self(text, direction)
    }
}

/// A `LevelResolver` backed by `wezterm_bidi`.
#[derive(Debug, Default)]
pub struct UbaResolver {
    context: BidiContext,
}

impl UbaResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LevelResolver for UbaResolver {
    fn resolve_levels(&mut self, text: &[char], direction: Direction) -> Vec<Level> {
        let hint = match direction {
            Direction::LeftToRight => ParagraphDirectionHint::LeftToRight,
            Direction::RightToLeft => ParagraphDirectionHint::RightToLeft,
        };
        self.context.resolve_paragraph(text, hint);

        let mut levels = vec![Level(NO_LEVEL); text.len()];
        for run in self.context.runs() {
            for idx in run.range.clone() {
                levels[idx] = run.level;
            }
        }

        // Controls removed by X9 have no level of their own; they travel
        // with the character before them.
        let mut prior = self.context.base_level();
        for level in levels.iter_mut() {
            if level.removed_by_x9() {
                *level = prior;
            } else {
                prior = *level;
            }
        }

        log::trace!("resolved {:?} -> {:?}", text, levels);
        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{PDF, RLE};
    use k9::assert_equal as assert_eq;

    fn levels(v: &[i8]) -> Vec<Level> {
        v.iter().map(|&l| Level(l)).collect()
    }

    #[test]
    fn mixed_paragraph() {
        let text: Vec<char> = "abc \u{5d0}\u{5d1}\u{5d2}".chars().collect();
        let mut resolver = UbaResolver::new();
        assert_eq!(
            resolver.resolve_levels(&text, Direction::LeftToRight),
            levels(&[0, 0, 0, 0, 1, 1, 1])
        );
    }

    #[test]
    fn rtl_paragraph() {
        let text: Vec<char> = "ab".chars().collect();
        let mut resolver = UbaResolver::new();
        assert_eq!(
            resolver.resolve_levels(&text, Direction::RightToLeft),
            levels(&[2, 2])
        );
    }

    #[test]
    fn removed_controls_follow_prior_level() {
        let text = vec!['a', RLE, 'b', PDF];
        let mut resolver = UbaResolver::new();
        assert_eq!(
            resolver.resolve_levels(&text, Direction::LeftToRight),
            levels(&[0, 0, 2, 2])
        );
    }

    #[test]
    fn leading_control_takes_paragraph_level() {
        let text = vec![RLE, 'b', PDF];
        let mut resolver = UbaResolver::new();
        assert_eq!(
            resolver.resolve_levels(&text, Direction::LeftToRight),
            levels(&[0, 2, 2])
        );
    }

    #[test]
    fn closures_resolve() {
        let mut resolver = |text: &[char], _: Direction| vec![Level(1); text.len()];
        assert_eq!(
            LevelResolver::resolve_levels(&mut resolver, &['x', 'y'], Direction::LeftToRight),
            levels(&[1, 1])
        );
    }
}
