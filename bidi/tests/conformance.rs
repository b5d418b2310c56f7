use folio_bidi::*;

/// Names the area at logical index `idx` with a single character, so that
/// reversing the word never changes its name.
fn name(idx: usize) -> char {
    char::from(b'a' + idx as u8)
}

fn index_of(area: &InlineArea) -> usize {
    let content = area.content();
    let c = content.chars().next().unwrap();
    (c as u8 - b'a') as usize
}

#[test]
fn reorder_test() {
    let _ = env_logger::Builder::new().is_test(true).try_init();
    let data = include_str!("../data/ReorderTest.txt");

    let mut levels: Vec<Level> = vec![];
    let mut reorder: Vec<usize> = vec![];
    let mut passes = 0;
    let mut fails = 0;

    for (line_number, line) in data.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with("@Levels:") {
            levels.clear();
            for field in line.split_whitespace().skip(1) {
                if field == "x" {
                    levels.push(NONE);
                } else {
                    levels.push(Level(field.parse().unwrap()));
                }
            }
            continue;
        }
        if !line.starts_with("@Reorder:") {
            continue;
        }
        reorder.clear();
        for field in line.split_whitespace().skip(1) {
            reorder.push(field.parse().unwrap());
        }

        // Areas removed by X9 are never laid out, so they never reach
        // the reorderer.
        let areas: Vec<InlineArea> = levels
            .iter()
            .enumerate()
            .filter(|(_, level)| !level.removed_by_x9())
            .map(|(idx, &level)| {
                InlineArea::Word(WordArea::with_level(&name(idx).to_string(), level))
            })
            .collect();

        let mut trace: Vec<Diagnostic> = vec![];
        let visual: Vec<usize> = LineReorderer::default()
            .reorder_areas(areas, &mut trace)
            .iter()
            .map(index_of)
            .collect();

        if visual != reorder {
            log::error!(
                "\nReorderTest.txt:{}\n   levels={}\n   visual={:?}\n   expected={:?}",
                line_number + 1,
                format_levels(&levels),
                visual,
                reorder
            );
            for diagnostic in &trace {
                log::error!("{}", diagnostic);
            }
            fails += 1;
        } else {
            passes += 1;
        }
    }

    println!("passes={} fails={}", passes, fails);
    assert_eq!(fails, 0);
    assert_eq!(passes, 16);
}

/// Rule L2 applied character by character: from the highest level down
/// to the lowest odd level, reverse every maximal run of characters at
/// that level or above.
fn reorder_chars(chars: &[char], levels: &[Level]) -> String {
    let mut line: Vec<(char, Level)> = chars.iter().copied().zip(levels.iter().copied()).collect();
    let (min, max) = level_bounds(levels);
    for level in (lowest_odd_floor(min).0..=max.0).rev() {
        let mut start = 0;
        while start < line.len() {
            if line[start].1 .0 < level {
                start += 1;
                continue;
            }
            let len = line[start..]
                .iter()
                .take_while(|(_, l)| l.0 >= level)
                .count();
            line[start..start + len].reverse();
            start += len;
        }
    }
    line.into_iter().map(|(c, _)| c).collect()
}

#[test]
fn random_lines_match_character_reordering() {
    let _ = env_logger::Builder::new().is_test(true).try_init();
    let mut rng = fastrand::Rng::with_seed(0x6269_6469);

    let mut passes = 0;
    let mut fails = 0;

    for case in 0..2000 {
        let mut areas = vec![];
        let mut chars = vec![];
        let mut levels = vec![];
        let mut next = 0x4e00;

        for _ in 0..rng.usize(1..=8) {
            if rng.u8(0..5) == 0 {
                let level = Level(rng.i8(0..=5));
                areas.push(InlineArea::Space(SpaceArea::new(' ', level)));
                chars.push(' ');
                levels.push(level);
                continue;
            }
            let mut word = String::new();
            let mut word_levels = vec![];
            let uniform = rng.bool();
            let first = Level(rng.i8(0..=5));
            for _ in 0..rng.usize(1..=4) {
                let c = char::from_u32(next).unwrap();
                next += 1;
                let level = if uniform { first } else { Level(rng.i8(0..=5)) };
                word.push(c);
                word_levels.push(level);
            }
            chars.extend(word.chars());
            levels.extend(word_levels.iter().copied());
            areas.push(InlineArea::Word(WordArea::new(&word, word_levels)));
        }

        let expected = reorder_chars(&chars, &levels);
        let mut trace: Vec<Diagnostic> = vec![];
        let visual: String = LineReorderer::default()
            .reorder_areas(areas, &mut trace)
            .iter()
            .map(InlineArea::content)
            .collect();

        if visual != expected {
            log::error!(
                "\ncase {}\n   levels={}\n   visual={}\n   expected={}",
                case,
                format_levels(&levels),
                visual,
                expected
            );
            for diagnostic in &trace {
                log::error!("{}", diagnostic);
            }
            fails += 1;
        } else {
            passes += 1;
        }
    }

    println!("passes={} fails={}", passes, fails);
    assert_eq!(fails, 0);
    assert_eq!(passes, 2000);
}
