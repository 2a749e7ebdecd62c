//! Static vocabulary table: 50 foundational words grouped by category.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VocabItem {
    pub id: &'static str,
    pub hebrew: &'static str,
    pub transliteration: &'static str,
    pub english: &'static str,
    pub category: &'static str,
}

const fn item(
    id: &'static str,
    hebrew: &'static str,
    transliteration: &'static str,
    english: &'static str,
    category: &'static str,
) -> VocabItem {
    VocabItem {
        id,
        hebrew,
        transliteration,
        english,
        category,
    }
}

pub const VOCABULARY: &[VocabItem] = &[
    item("v001", "שלום", "shalom", "hello / peace", "greetings"),
    item("v002", "תודה", "toda", "thank you", "greetings"),
    item("v003", "בבקשה", "bevakasha", "please / you're welcome", "greetings"),
    item("v004", "סליחה", "slicha", "excuse me / sorry", "greetings"),
    item("v005", "כן", "ken", "yes", "greetings"),
    item("v006", "לא", "lo", "no", "greetings"),
    item("v007", "בוקר טוב", "boker tov", "good morning", "greetings"),
    item("v008", "ערב טוב", "erev tov", "good evening", "greetings"),
    item("v009", "לילה טוב", "laila tov", "good night", "greetings"),
    item("v010", "להתראות", "lehitraot", "goodbye", "greetings"),
    item("v011", "אני", "ani", "I", "pronouns"),
    item("v012", "אתה", "ata", "you (m)", "pronouns"),
    item("v013", "את", "at", "you (f)", "pronouns"),
    item("v014", "הוא", "hu", "he", "pronouns"),
    item("v015", "היא", "hi", "she", "pronouns"),
    item("v016", "אנחנו", "anachnu", "we", "pronouns"),
    item("v017", "הם", "hem", "they (m)", "pronouns"),
    item("v018", "זה", "ze", "this (m)", "pronouns"),
    item("v019", "רוצה", "rotze", "want", "verbs"),
    item("v020", "יש", "yesh", "there is / have", "verbs"),
    item("v021", "אין", "ein", "there isn't / don't have", "verbs"),
    item("v022", "יודע", "yodea", "know", "verbs"),
    item("v023", "אוהב", "ohev", "love / like", "verbs"),
    item("v024", "הולך", "holech", "go / walk", "verbs"),
    item("v025", "בא", "ba", "come", "verbs"),
    item("v026", "עושה", "ose", "do / make", "verbs"),
    item("v027", "אומר", "omer", "say", "verbs"),
    item("v028", "רואה", "roe", "see", "verbs"),
    item("v029", "מה", "ma", "what", "questions"),
    item("v030", "מי", "mi", "who", "questions"),
    item("v031", "איפה", "eifo", "where", "questions"),
    item("v032", "למה", "lama", "why", "questions"),
    item("v033", "איך", "eich", "how", "questions"),
    item("v034", "מתי", "matai", "when", "questions"),
    item("v035", "אחד", "echad", "one", "numbers"),
    item("v036", "שניים", "shnayim", "two", "numbers"),
    item("v037", "שלוש", "shalosh", "three", "numbers"),
    item("v038", "ארבע", "arba", "four", "numbers"),
    item("v039", "חמש", "chamesh", "five", "numbers"),
    item("v040", "עשר", "eser", "ten", "numbers"),
    item("v041", "מים", "mayim", "water", "nouns"),
    item("v042", "אוכל", "ochel", "food", "nouns"),
    item("v043", "בית", "bayit", "house / home", "nouns"),
    item("v044", "ספר", "sefer", "book", "nouns"),
    item("v045", "יום", "yom", "day", "nouns"),
    item("v046", "לחם", "lechem", "bread", "nouns"),
    item("v047", "חבר", "chaver", "friend", "nouns"),
    item("v048", "עבודה", "avoda", "work / job", "nouns"),
    item("v049", "שנה", "shana", "year", "nouns"),
    item("v050", "עברית", "ivrit", "Hebrew", "nouns"),
];

const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("greetings", "ברכות"),
    ("pronouns", "כינויים"),
    ("verbs", "פעלים"),
    ("questions", "מילות שאלה"),
    ("numbers", "מספרים"),
    ("nouns", "שמות עצם"),
];

pub fn by_id(id: &str) -> Option<&'static VocabItem> {
    VOCABULARY.iter().find(|item| item.id == id)
}

pub fn by_category(category: &str) -> Vec<&'static VocabItem> {
    VOCABULARY
        .iter()
        .filter(|item| item.category == category)
        .collect()
}

/// Categories in the order they first appear in the table.
pub fn categories() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for item in VOCABULARY {
        if !seen.contains(&item.category) {
            seen.push(item.category);
        }
    }
    seen
}

/// Hebrew display name for a category.
pub fn category_label(category: &str) -> Option<&'static str> {
    CATEGORY_LABELS
        .iter()
        .find(|(key, _)| *key == category)
        .map(|&(_, label)| label)
}
