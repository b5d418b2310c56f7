//! Bidi_Mirroring_Glyph pairs for the characters that show up in
//! document text: brackets, quotation marks and the common mathematical
//! relations. Sorted by the first column so that it can be binary searched.
const MIRRORING: &[(char, char)] = &[
    ('\u{28}', '\u{29}'),     // LEFT PARENTHESIS
    ('\u{29}', '\u{28}'),     // RIGHT PARENTHESIS
    ('\u{3c}', '\u{3e}'),     // LESS-THAN SIGN
    ('\u{3e}', '\u{3c}'),     // GREATER-THAN SIGN
    ('\u{5b}', '\u{5d}'),     // LEFT SQUARE BRACKET
    ('\u{5d}', '\u{5b}'),     // RIGHT SQUARE BRACKET
    ('\u{7b}', '\u{7d}'),     // LEFT CURLY BRACKET
    ('\u{7d}', '\u{7b}'),     // RIGHT CURLY BRACKET
    ('\u{ab}', '\u{bb}'),     // LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
    ('\u{bb}', '\u{ab}'),     // RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
    ('\u{f3a}', '\u{f3b}'),   // TIBETAN MARK GUG RTAGS GYON
    ('\u{f3b}', '\u{f3a}'),   // TIBETAN MARK GUG RTAGS GYAS
    ('\u{f3c}', '\u{f3d}'),   // TIBETAN MARK ANG KHANG GYON
    ('\u{f3d}', '\u{f3c}'),   // TIBETAN MARK ANG KHANG GYAS
    ('\u{169b}', '\u{169c}'), // OGHAM FEATHER MARK
    ('\u{169c}', '\u{169b}'), // OGHAM REVERSED FEATHER MARK
    ('\u{2039}', '\u{203a}'), // SINGLE LEFT-POINTING ANGLE QUOTATION MARK
    ('\u{203a}', '\u{2039}'), // SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
    ('\u{2045}', '\u{2046}'), // LEFT SQUARE BRACKET WITH QUILL
    ('\u{2046}', '\u{2045}'), // RIGHT SQUARE BRACKET WITH QUILL
    ('\u{207d}', '\u{207e}'), // SUPERSCRIPT LEFT PARENTHESIS
    ('\u{207e}', '\u{207d}'), // SUPERSCRIPT RIGHT PARENTHESIS
    ('\u{208d}', '\u{208e}'), // SUBSCRIPT LEFT PARENTHESIS
    ('\u{208e}', '\u{208d}'), // SUBSCRIPT RIGHT PARENTHESIS
    ('\u{2208}', '\u{220b}'), // ELEMENT OF
    ('\u{2209}', '\u{220c}'), // NOT AN ELEMENT OF
    ('\u{220a}', '\u{220d}'), // SMALL ELEMENT OF
    ('\u{220b}', '\u{2208}'), // CONTAINS AS MEMBER
    ('\u{220c}', '\u{2209}'), // DOES NOT CONTAIN AS MEMBER
    ('\u{220d}', '\u{220a}'), // SMALL CONTAINS AS MEMBER
    ('\u{2215}', '\u{29f5}'), // DIVISION SLASH
    ('\u{223c}', '\u{223d}'), // TILDE OPERATOR
    ('\u{223d}', '\u{223c}'), // REVERSED TILDE
    ('\u{2243}', '\u{22cd}'), // ASYMPTOTICALLY EQUAL TO
    ('\u{2252}', '\u{2253}'), // APPROXIMATELY EQUAL TO OR THE IMAGE OF
    ('\u{2253}', '\u{2252}'), // IMAGE OF OR APPROXIMATELY EQUAL TO
    ('\u{2254}', '\u{2255}'), // COLON EQUALS
    ('\u{2255}', '\u{2254}'), // EQUALS COLON
    ('\u{2264}', '\u{2265}'), // LESS-THAN OR EQUAL TO
    ('\u{2265}', '\u{2264}'), // GREATER-THAN OR EQUAL TO
    ('\u{2266}', '\u{2267}'), // LESS-THAN OVER EQUAL TO
    ('\u{2267}', '\u{2266}'), // GREATER-THAN OVER EQUAL TO
    ('\u{2268}', '\u{2269}'), // LESS-THAN BUT NOT EQUAL TO
    ('\u{2269}', '\u{2268}'), // GREATER-THAN BUT NOT EQUAL TO
    ('\u{226a}', '\u{226b}'), // MUCH LESS-THAN
    ('\u{226b}', '\u{226a}'), // MUCH GREATER-THAN
    ('\u{226e}', '\u{226f}'), // NOT LESS-THAN
    ('\u{226f}', '\u{226e}'), // NOT GREATER-THAN
    ('\u{2270}', '\u{2271}'), // NEITHER LESS-THAN NOR EQUAL TO
    ('\u{2271}', '\u{2270}'), // NEITHER GREATER-THAN NOR EQUAL TO
    ('\u{2272}', '\u{2273}'), // LESS-THAN OR EQUIVALENT TO
    ('\u{2273}', '\u{2272}'), // GREATER-THAN OR EQUIVALENT TO
    ('\u{2276}', '\u{2277}'), // LESS-THAN OR GREATER-THAN
    ('\u{2277}', '\u{2276}'), // GREATER-THAN OR LESS-THAN
    ('\u{227a}', '\u{227b}'), // PRECEDES
    ('\u{227b}', '\u{227a}'), // SUCCEEDS
    ('\u{227c}', '\u{227d}'), // PRECEDES OR EQUAL TO
    ('\u{227d}', '\u{227c}'), // SUCCEEDS OR EQUAL TO
    ('\u{2282}', '\u{2283}'), // SUBSET OF
    ('\u{2283}', '\u{2282}'), // SUPERSET OF
    ('\u{2284}', '\u{2285}'), // NOT A SUBSET OF
    ('\u{2285}', '\u{2284}'), // NOT A SUPERSET OF
    ('\u{2286}', '\u{2287}'), // SUBSET OF OR EQUAL TO
    ('\u{2287}', '\u{2286}'), // SUPERSET OF OR EQUAL TO
    ('\u{2288}', '\u{2289}'), // NEITHER A SUBSET OF NOR EQUAL TO
    ('\u{2289}', '\u{2288}'), // NEITHER A SUPERSET OF NOR EQUAL TO
    ('\u{228a}', '\u{228b}'), // SUBSET OF WITH NOT EQUAL TO
    ('\u{228b}', '\u{228a}'), // SUPERSET OF WITH NOT EQUAL TO
    ('\u{228f}', '\u{2290}'), // SQUARE IMAGE OF
    ('\u{2290}', '\u{228f}'), // SQUARE ORIGINAL OF
    ('\u{2291}', '\u{2292}'), // SQUARE IMAGE OF OR EQUAL TO
    ('\u{2292}', '\u{2291}'), // SQUARE ORIGINAL OF OR EQUAL TO
    ('\u{22a2}', '\u{22a3}'), // RIGHT TACK
    ('\u{22a3}', '\u{22a2}'), // LEFT TACK
    ('\u{22b2}', '\u{22b3}'), // NORMAL SUBGROUP OF
    ('\u{22b3}', '\u{22b2}'), // CONTAINS AS NORMAL SUBGROUP
    ('\u{22b4}', '\u{22b5}'), // NORMAL SUBGROUP OF OR EQUAL TO
    ('\u{22b5}', '\u{22b4}'), // CONTAINS AS NORMAL SUBGROUP OR EQUAL TO
    ('\u{22cd}', '\u{2243}'), // REVERSED TILDE EQUALS
    ('\u{22d0}', '\u{22d1}'), // DOUBLE SUBSET
    ('\u{22d1}', '\u{22d0}'), // DOUBLE SUPERSET
    ('\u{22d6}', '\u{22d7}'), // LESS-THAN WITH DOT
    ('\u{22d7}', '\u{22d6}'), // GREATER-THAN WITH DOT
    ('\u{22d8}', '\u{22d9}'), // VERY MUCH LESS-THAN
    ('\u{22d9}', '\u{22d8}'), // VERY MUCH GREATER-THAN
    ('\u{22da}', '\u{22db}'), // LESS-THAN EQUAL TO OR GREATER-THAN
    ('\u{22db}', '\u{22da}'), // GREATER-THAN EQUAL TO OR LESS-THAN
    ('\u{2308}', '\u{2309}'), // LEFT CEILING
    ('\u{2309}', '\u{2308}'), // RIGHT CEILING
    ('\u{230a}', '\u{230b}'), // LEFT FLOOR
    ('\u{230b}', '\u{230a}'), // RIGHT FLOOR
    ('\u{2329}', '\u{232a}'), // LEFT-POINTING ANGLE BRACKET
    ('\u{232a}', '\u{2329}'), // RIGHT-POINTING ANGLE BRACKET
    ('\u{2768}', '\u{2769}'), // MEDIUM LEFT PARENTHESIS ORNAMENT
    ('\u{2769}', '\u{2768}'), // MEDIUM RIGHT PARENTHESIS ORNAMENT
    ('\u{276a}', '\u{276b}'), // MEDIUM FLATTENED LEFT PARENTHESIS ORNAMENT
    ('\u{276b}', '\u{276a}'), // MEDIUM FLATTENED RIGHT PARENTHESIS ORNAMENT
    ('\u{276c}', '\u{276d}'), // MEDIUM LEFT-POINTING ANGLE BRACKET ORNAMENT
    ('\u{276d}', '\u{276c}'), // MEDIUM RIGHT-POINTING ANGLE BRACKET ORNAMENT
    ('\u{276e}', '\u{276f}'), // HEAVY LEFT-POINTING ANGLE QUOTATION MARK ORNAMENT
    ('\u{276f}', '\u{276e}'), // HEAVY RIGHT-POINTING ANGLE QUOTATION MARK ORNAMENT
    ('\u{2770}', '\u{2771}'), // HEAVY LEFT-POINTING ANGLE BRACKET ORNAMENT
    ('\u{2771}', '\u{2770}'), // HEAVY RIGHT-POINTING ANGLE BRACKET ORNAMENT
    ('\u{2772}', '\u{2773}'), // LIGHT LEFT TORTOISE SHELL BRACKET ORNAMENT
    ('\u{2773}', '\u{2772}'), // LIGHT RIGHT TORTOISE SHELL BRACKET ORNAMENT
    ('\u{2774}', '\u{2775}'), // MEDIUM LEFT CURLY BRACKET ORNAMENT
    ('\u{2775}', '\u{2774}'), // MEDIUM RIGHT CURLY BRACKET ORNAMENT
    ('\u{27c5}', '\u{27c6}'), // LEFT S-SHAPED BAG DELIMITER
    ('\u{27c6}', '\u{27c5}'), // RIGHT S-SHAPED BAG DELIMITER
    ('\u{27e6}', '\u{27e7}'), // MATHEMATICAL LEFT WHITE SQUARE BRACKET
    ('\u{27e7}', '\u{27e6}'), // MATHEMATICAL RIGHT WHITE SQUARE BRACKET
    ('\u{27e8}', '\u{27e9}'), // MATHEMATICAL LEFT ANGLE BRACKET
    ('\u{27e9}', '\u{27e8}'), // MATHEMATICAL RIGHT ANGLE BRACKET
    ('\u{27ea}', '\u{27eb}'), // MATHEMATICAL LEFT DOUBLE ANGLE BRACKET
    ('\u{27eb}', '\u{27ea}'), // MATHEMATICAL RIGHT DOUBLE ANGLE BRACKET
    ('\u{27ec}', '\u{27ed}'), // MATHEMATICAL LEFT WHITE TORTOISE SHELL BRACKET
    ('\u{27ed}', '\u{27ec}'), // MATHEMATICAL RIGHT WHITE TORTOISE SHELL BRACKET
    ('\u{27ee}', '\u{27ef}'), // MATHEMATICAL LEFT FLATTENED PARENTHESIS
    ('\u{27ef}', '\u{27ee}'), // MATHEMATICAL RIGHT FLATTENED PARENTHESIS
    ('\u{2983}', '\u{2984}'), // LEFT WHITE CURLY BRACKET
    ('\u{2984}', '\u{2983}'), // RIGHT WHITE CURLY BRACKET
    ('\u{2985}', '\u{2986}'), // LEFT WHITE PARENTHESIS
    ('\u{2986}', '\u{2985}'), // RIGHT WHITE PARENTHESIS
    ('\u{2987}', '\u{2988}'), // Z NOTATION LEFT IMAGE BRACKET
    ('\u{2988}', '\u{2987}'), // Z NOTATION RIGHT IMAGE BRACKET
    ('\u{2989}', '\u{298a}'), // Z NOTATION LEFT BINDING BRACKET
    ('\u{298a}', '\u{2989}'), // Z NOTATION RIGHT BINDING BRACKET
    ('\u{29f5}', '\u{2215}'), // REVERSE SOLIDUS OPERATOR
    ('\u{2e02}', '\u{2e03}'), // LEFT SUBSTITUTION BRACKET
    ('\u{2e03}', '\u{2e02}'), // RIGHT SUBSTITUTION BRACKET
    ('\u{2e04}', '\u{2e05}'), // LEFT DOTTED SUBSTITUTION BRACKET
    ('\u{2e05}', '\u{2e04}'), // RIGHT DOTTED SUBSTITUTION BRACKET
    ('\u{2e09}', '\u{2e0a}'), // LEFT TRANSPOSITION BRACKET
    ('\u{2e0a}', '\u{2e09}'), // RIGHT TRANSPOSITION BRACKET
    ('\u{2e0c}', '\u{2e0d}'), // LEFT RAISED OMISSION BRACKET
    ('\u{2e0d}', '\u{2e0c}'), // RIGHT RAISED OMISSION BRACKET
    ('\u{2e1c}', '\u{2e1d}'), // LEFT LOW PARAPHRASE BRACKET
    ('\u{2e1d}', '\u{2e1c}'), // RIGHT LOW PARAPHRASE BRACKET
    ('\u{2e20}', '\u{2e21}'), // LEFT VERTICAL BAR WITH QUILL
    ('\u{2e21}', '\u{2e20}'), // RIGHT VERTICAL BAR WITH QUILL
    ('\u{2e22}', '\u{2e23}'), // TOP LEFT HALF BRACKET
    ('\u{2e23}', '\u{2e22}'), // TOP RIGHT HALF BRACKET
    ('\u{2e24}', '\u{2e25}'), // BOTTOM LEFT HALF BRACKET
    ('\u{2e25}', '\u{2e24}'), // BOTTOM RIGHT HALF BRACKET
    ('\u{2e26}', '\u{2e27}'), // LEFT SIDEWAYS U BRACKET
    ('\u{2e27}', '\u{2e26}'), // RIGHT SIDEWAYS U BRACKET
    ('\u{2e28}', '\u{2e29}'), // LEFT DOUBLE PARENTHESIS
    ('\u{2e29}', '\u{2e28}'), // RIGHT DOUBLE PARENTHESIS
    ('\u{3008}', '\u{3009}'), // LEFT ANGLE BRACKET
    ('\u{3009}', '\u{3008}'), // RIGHT ANGLE BRACKET
    ('\u{300a}', '\u{300b}'), // LEFT DOUBLE ANGLE BRACKET
    ('\u{300b}', '\u{300a}'), // RIGHT DOUBLE ANGLE BRACKET
    ('\u{300c}', '\u{300d}'), // LEFT CORNER BRACKET
    ('\u{300d}', '\u{300c}'), // RIGHT CORNER BRACKET
    ('\u{300e}', '\u{300f}'), // LEFT WHITE CORNER BRACKET
    ('\u{300f}', '\u{300e}'), // RIGHT WHITE CORNER BRACKET
    ('\u{3010}', '\u{3011}'), // LEFT BLACK LENTICULAR BRACKET
    ('\u{3011}', '\u{3010}'), // RIGHT BLACK LENTICULAR BRACKET
    ('\u{3014}', '\u{3015}'), // LEFT TORTOISE SHELL BRACKET
    ('\u{3015}', '\u{3014}'), // RIGHT TORTOISE SHELL BRACKET
    ('\u{3016}', '\u{3017}'), // LEFT WHITE LENTICULAR BRACKET
    ('\u{3017}', '\u{3016}'), // RIGHT WHITE LENTICULAR BRACKET
    ('\u{3018}', '\u{3019}'), // LEFT WHITE TORTOISE SHELL BRACKET
    ('\u{3019}', '\u{3018}'), // RIGHT WHITE TORTOISE SHELL BRACKET
    ('\u{301a}', '\u{301b}'), // LEFT WHITE SQUARE BRACKET
    ('\u{301b}', '\u{301a}'), // RIGHT WHITE SQUARE BRACKET
    ('\u{fe59}', '\u{fe5a}'), // SMALL LEFT PARENTHESIS
    ('\u{fe5a}', '\u{fe59}'), // SMALL RIGHT PARENTHESIS
    ('\u{fe5b}', '\u{fe5c}'), // SMALL LEFT CURLY BRACKET
    ('\u{fe5c}', '\u{fe5b}'), // SMALL RIGHT CURLY BRACKET
    ('\u{fe5d}', '\u{fe5e}'), // SMALL LEFT TORTOISE SHELL BRACKET
    ('\u{fe5e}', '\u{fe5d}'), // SMALL RIGHT TORTOISE SHELL BRACKET
    ('\u{fe64}', '\u{fe65}'), // SMALL LESS-THAN SIGN
    ('\u{fe65}', '\u{fe64}'), // SMALL GREATER-THAN SIGN
    ('\u{ff08}', '\u{ff09}'), // FULLWIDTH LEFT PARENTHESIS
    ('\u{ff09}', '\u{ff08}'), // FULLWIDTH RIGHT PARENTHESIS
    ('\u{ff1c}', '\u{ff1e}'), // FULLWIDTH LESS-THAN SIGN
    ('\u{ff1e}', '\u{ff1c}'), // FULLWIDTH GREATER-THAN SIGN
    ('\u{ff3b}', '\u{ff3d}'), // FULLWIDTH LEFT SQUARE BRACKET
    ('\u{ff3d}', '\u{ff3b}'), // FULLWIDTH RIGHT SQUARE BRACKET
    ('\u{ff5b}', '\u{ff5d}'), // FULLWIDTH LEFT CURLY BRACKET
    ('\u{ff5d}', '\u{ff5b}'), // FULLWIDTH RIGHT CURLY BRACKET
    ('\u{ff5f}', '\u{ff60}'), // FULLWIDTH LEFT WHITE PARENTHESIS
    ('\u{ff60}', '\u{ff5f}'), // FULLWIDTH RIGHT WHITE PARENTHESIS
    ('\u{ff62}', '\u{ff63}'), // HALFWIDTH LEFT CORNER BRACKET
    ('\u{ff63}', '\u{ff62}'), // HALFWIDTH RIGHT CORNER BRACKET
];

/// Returns the mirror glyph of `c`, if it has one.
pub fn mirror_char(c: char) -> Option<char> {
    MIRRORING
        .binary_search_by_key(&c, |&(from, _)| from)
        .ok()
        .map(|idx| MIRRORING[idx].1)
}

/// Returns the mirror glyph of `c`, or `c` itself.
pub fn mirrored(c: char) -> char {
    mirror_char(c).unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use k9::assert_equal as assert_eq;

    #[test]
    fn table_is_sorted_and_symmetric() {
        for pair in MIRRORING.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{:?} out of order", pair);
        }
        for &(from, to) in MIRRORING {
            assert_eq!(mirror_char(to), Some(from));
        }
    }

    #[test]
    fn mirror() {
        assert_eq!(mirror_char('('), Some(')'));
        assert_eq!(mirror_char(']'), Some('['));
        assert_eq!(mirror_char('\u{ab}'), Some('\u{bb}'));
        assert_eq!(mirror_char('\u{2264}'), Some('\u{2265}'));
        assert_eq!(mirror_char('a'), None);
        assert_eq!(mirrored('a'), 'a');
        assert_eq!(mirrored('<'), '>');
    }
}
