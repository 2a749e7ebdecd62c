/// A key on the Hebrew layout: the Hebrew glyph it produces and the Latin
/// glyph printed on the same physical key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HebrewKey {
    pub hebrew: char,
    pub latin: char,
    pub keycap: &'static str,
}

const fn key(hebrew: char, latin: char, keycap: &'static str) -> HebrewKey {
    HebrewKey {
        hebrew,
        latin,
        keycap,
    }
}

pub const TOP_ROW: &[HebrewKey] = &[
    key('/', 'q', "keycap-q"),
    key('\'', 'w', "keycap-geresh"),
    key('ק', 'e', "keycap-koof"),
    key('ר', 'r', "keycap-resh"),
    key('א', 't', "keycap-alef"),
    key('ט', 'y', "keycap-tet"),
    key('ו', 'u', "keycap-vav"),
    key('ן', 'i', "keycap-noon-sofit"),
    key('ם', 'o', "keycap-mem-sofit"),
    key('פ', 'p', "keycap-pe"),
];

pub const HOME_ROW: &[HebrewKey] = &[
    key('ש', 'a', "keycap-shin"),
    key('ד', 's', "keycap-dalet"),
    key('ג', 'd', "keycap-gimel"),
    key('כ', 'f', "keycap-kaf"),
    key('ע', 'g', "keycap-ayin"),
    key('י', 'h', "keycap-yod"),
    key('ח', 'j', "keycap-het"),
    key('ל', 'k', "keycap-lamed"),
    key('ך', 'l', "keycap-kaf-sofit"),
    key('ף', ';', "keycap-pe-sofit"),
];

pub const BOTTOM_ROW: &[HebrewKey] = &[
    key('ז', 'z', "keycap-z"),
    key('ס', 'x', "keycap-samech"),
    key('ב', 'c', "keycap-bet"),
    key('ה', 'v', "keycap-hei"),
    key('נ', 'b', "keycap-noon"),
    key('מ', 'n', "keycap-mem"),
    key('צ', 'm', "keycap-tzadik"),
    key('ת', ',', "keycap-taf"),
    key('ץ', '.', "keycap-tzadik-sofit"),
    key('.', '/', "keycap-dot"),
];

pub const SPACE_KEY: HebrewKey = key(' ', ' ', "keycap-spacebar");
pub const COMMA_KEY: HebrewKey = key(',', '\'', "keycap-comma");

pub const ROWS: &[&[HebrewKey]] = &[TOP_ROW, HOME_ROW, BOTTOM_ROW];

fn all_keys() -> impl Iterator<Item = &'static HebrewKey> {
    ROWS.iter()
        .flat_map(|row| row.iter())
        .chain([&SPACE_KEY, &COMMA_KEY])
}

pub fn key_for(ch: char) -> Option<&'static HebrewKey> {
    all_keys().find(|k| k.hebrew == ch)
}

pub fn keycap_for(ch: char) -> Option<&'static str> {
    key_for(ch).map(|k| k.keycap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shin_sits_on_a() {
        let k = key_for('ש').unwrap();
        assert_eq!(k.latin, 'a');
        assert_eq!(k.keycap, "keycap-shin");
    }

    #[test]
    fn unknown_char_has_no_keycap() {
        assert_eq!(keycap_for('x'), None);
        assert_eq!(keycap_for(' '), Some("keycap-spacebar"));
    }

    #[test]
    fn hebrew_glyphs_are_unique() {
        let mut seen: Vec<char> = all_keys().map(|k| k.hebrew).collect();
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total);
    }
}
