use wezterm_bidi::{Level, NO_LEVEL};

/// Maximum explicit embedding depth; the UBA guarantees that it will
/// never increase in later Unicode versions.
pub const MAX_DEPTH: usize = 125;

/// The "no direction" sentinel carried by empty level arrays.
pub const NONE: Level = Level(NO_LEVEL);

/// Returns the `(min, max)` levels of `levels`, or `(NONE, NONE)` when
/// the slice is empty.
pub fn level_bounds(levels: &[Level]) -> (Level, Level) {
    let mut iter = levels.iter().copied();
    match iter.next() {
        None => (NONE, NONE),
        Some(first) => iter.fold((first, first), |(mn, mx), l| (mn.min(l), mx.max(l))),
    }
}

/// The lowest level visited by the reorder passes: `min` itself when it
/// is odd, otherwise the next odd level above it.
pub fn lowest_odd_floor(min: Level) -> Level {
    if min.0 % 2 == 0 {
        Level(min.0 + 1)
    } else {
        min
    }
}

/// Renders levels compactly for diagnostics: a run of decimal digits when
/// every level is a single digit, otherwise a comma separated list.
pub fn format_levels(levels: &[Level]) -> String {
    let max = levels.iter().map(|l| l.0).max().unwrap_or(NO_LEVEL);
    if max < 0 {
        String::new()
    } else if max < 10 {
        levels
            .iter()
            .map(|l| char::from(b'0' + l.0.max(0) as u8))
            .collect()
    } else {
        levels
            .iter()
            .map(|l| l.0.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k9::assert_equal as assert_eq;

    #[test]
    fn bounds() {
        assert_eq!(level_bounds(&[]), (NONE, NONE));
        assert_eq!(
            level_bounds(&[Level(0), Level(1), Level(2), Level(1), Level(0)]),
            (Level(0), Level(2))
        );
        assert_eq!(level_bounds(&[Level(3)]), (Level(3), Level(3)));
    }

    #[test]
    fn odd_floor() {
        assert_eq!(lowest_odd_floor(Level(0)), Level(1));
        assert_eq!(lowest_odd_floor(Level(1)), Level(1));
        assert_eq!(lowest_odd_floor(Level(2)), Level(3));
    }

    #[test]
    fn formatting() {
        assert_eq!(format_levels(&[]), "");
        assert_eq!(format_levels(&[Level(0), Level(1), Level(1)]), "011");
        assert_eq!(format_levels(&[Level(2), Level(11)]), "2,11");
    }
}
