use folio_bidi::{
    reorder, resolve_inline_directionality, DocumentTree, InlineArea, LineArea, LogSink, NodeData,
    SpaceArea, UbaResolver, WordArea,
};

fn main() {
    env_logger::init();

    // A paragraph of English with a Hebrew phrase in the middle.
    let paragraph = "see \u{5e9}\u{5dc}\u{5d5}\u{5dd} (\u{5e2}\u{5d5}\u{5dc}\u{5dd}) here";

    let mut tree = DocumentTree::new();
    let root = tree.root();
    let block = tree.append(root, NodeData::Block);
    let text = tree.append(block, NodeData::Text(paragraph.to_string()));

    // Resolve the embedding level of every character; the levels end up
    // on the text node that contributed them.
    let mut resolver = UbaResolver::new();
    if let Err(err) = resolve_inline_directionality(&mut tree, root, &mut resolver, &mut LogSink)
    {
        eprintln!("resolution failed: {:#}", err);
        return;
    }
    let levels = tree.levels(text);

    // Pretend that the whole paragraph fits on one line. A real layout
    // engine would break lines and shape words here.
    let chars: Vec<char> = paragraph.chars().collect();
    let mut areas = vec![];
    let mut word = String::new();
    let mut word_levels = vec![];
    for (&c, &level) in chars.iter().zip(levels.iter()) {
        if c == ' ' {
            if !word.is_empty() {
                areas.push(InlineArea::Word(WordArea::new(
                    &word,
                    std::mem::take(&mut word_levels),
                )));
                word.clear();
            }
            areas.push(InlineArea::Space(SpaceArea::new(c, level)));
        } else {
            word.push(c);
            word_levels.push(level);
        }
    }
    if !word.is_empty() {
        areas.push(InlineArea::Word(WordArea::new(&word, word_levels)));
    }

    let mut line = LineArea::new(areas);
    reorder(&mut line);

    let visual: String = line
        .inline_areas()
        .iter()
        .map(InlineArea::content)
        .collect();
    println!("logical: {}", paragraph);
    println!("visual:  {}", visual);
}
