//! Locale-aware title comparison.
//!
//! Titles are mostly Polish. Letters with diacritics are ordered right after
//! their base letter (`a < ą < b`, `z < ź < ż`) and case only breaks ties,
//! lowercase first. Spaces and punctuation are not ignored: they sort before
//! digits, and digits sort before letters, so a quoted or dashed title does not
//! land after `ż` because of its code point.

use std::cmp::Ordering;

/// Map a lowercase character to `(base letter, rank after base)`.
const fn fold(c: char) -> (char, u8) {
    match c {
        'ą' => ('a', 1),
        'á' | 'à' | 'â' | 'ä' | 'ã' => ('a', 2),
        'ć' => ('c', 1),
        'č' | 'ç' => ('c', 2),
        'ę' => ('e', 1),
        'é' | 'è' | 'ê' | 'ë' | 'ě' => ('e', 2),
        'í' | 'ì' | 'î' | 'ï' => ('i', 1),
        'ł' => ('l', 1),
        'ń' => ('n', 1),
        'ñ' | 'ň' => ('n', 2),
        'ó' => ('o', 1),
        'ò' | 'ô' | 'ö' | 'õ' => ('o', 2),
        'ř' => ('r', 1),
        'ś' => ('s', 1),
        'š' => ('s', 2),
        'ú' | 'ù' | 'û' | 'ü' | 'ů' => ('u', 1),
        'ý' => ('y', 1),
        'ź' => ('z', 1),
        'ż' => ('z', 2),
        'ž' => ('z', 3),
        other => (other, 0),
    }
}

/// Character class on the primary level: separators, then digits, then letters.
fn class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

/// Primary sort key of a string: character class, then folded lowercase letter.
fn primary_key(s: &str) -> impl Iterator<Item = (u8, char, u8)> + '_ {
    s.chars().flat_map(char::to_lowercase).map(|c| {
        let (base, rank) = fold(c);
        (class(c), base, rank)
    })
}

/// Case key: lowercase letters sort before their uppercase forms.
fn case_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().filter(|c| c.is_alphabetic()).map(char::is_uppercase)
}

/// What: Compare two titles the way a Polish-locale list would order them.
///
/// Inputs:
/// - `a`, `b`: Titles to compare
///
/// Output:
/// - Total ordering; `Equal` only for identical strings.
///
/// Details:
/// - Primary level: separators and punctuation, then digits, then folded letters
///   with diacritics right after their base letter.
/// - Secondary level: lowercase before uppercase.
/// - Final tiebreak on raw code points keeps the order total.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| case_key(a).cmp(case_key(b)))
        .then_with(|| a.cmp(b))
}
