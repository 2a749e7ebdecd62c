pub const HEBREW_LETTERS: &[char] = &[
    'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט', 'י', 'ך', 'כ', 'ל', 'ם', 'מ', 'ן', 'נ', 'ס',
    'ע', 'ף', 'פ', 'ץ', 'צ', 'ק', 'ר', 'ש', 'ת',
];

/// Regular letter and its final (sofit) form.
pub const FINAL_LETTERS: &[(char, char)] = &[
    ('כ', 'ך'),
    ('מ', 'ם'),
    ('נ', 'ן'),
    ('פ', 'ף'),
    ('צ', 'ץ'),
];

/// Geresh as produced by a Windows Hebrew layout (ASCII apostrophe).
pub const WINDOWS_GERESH: char = '\'';
/// Geresh as produced by a macOS Hebrew layout (U+05F3).
pub const MAC_GERESH: char = '\u{05F3}';

/// Map both platform encodings of the geresh to the ASCII apostrophe so
/// typed input compares equal regardless of the layout that produced it.
pub fn normalize_geresh(input: &str) -> String {
    input
        .chars()
        .map(|c| if c == MAC_GERESH { WINDOWS_GERESH } else { c })
        .collect()
}

pub fn normalize_geresh_char(ch: char) -> char {
    if ch == MAC_GERESH { WINDOWS_GERESH } else { ch }
}

pub fn final_form(letter: char) -> Option<char> {
    FINAL_LETTERS
        .iter()
        .find(|(regular, _)| *regular == letter)
        .map(|&(_, sofit)| sofit)
}
