// src/core/lexicon.rs
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The multiplier noun placed after a thousands prefix.
pub const THOUSANDS: &str = "χιλιάδες";

/// Singular and plural forms of the multiplier for each scale above the
/// thousands, indexed by `(width - 7) / 3`.
pub const SCALES: [(&str, &str); 3] = [
    ("ένα εκατομμύριο", "εκατομμύρια"),
    ("ένα δισεκατομμύριο", "δισεκατομμύρια"),
    ("ένα τρισεκατομμύριο", "τρισεκατομμύρια"),
];

const ONE_DIGIT: [(&str, &str); 10] = [
    ("0", "μηδέν"),
    ("1", "ένα"),
    ("2", "δύο"),
    ("3", "τρία"),
    ("4", "τέσσερα"),
    ("5", "πέντε"),
    ("6", "έξι"),
    ("7", "εφτά"),
    ("8", "οχτώ"),
    ("9", "εννιά"),
];

// Leading-digit keys are joining prefixes: the teens are written as one
// word ("δεκατρία"), the higher tens as two ("ενενήντα οχτώ").
const TWO_DIGIT: [(&str, &str); 20] = [
    ("10", "δέκα"),
    ("11", "έντεκα"),
    ("12", "δώδεκα"),
    ("1", "δεκα"),
    ("20", "είκοσι"),
    ("2", "είκοσι "),
    ("30", "τριάντα"),
    ("3", "τριάντα "),
    ("40", "σαράντα"),
    ("4", "σαράντα "),
    ("50", "πενήντα"),
    ("5", "πενήντα "),
    ("60", "εξήντα"),
    ("6", "εξήντα "),
    ("70", "εβδομήντα"),
    ("7", "εβδομήντα "),
    ("80", "ογδόντα"),
    ("8", "ογδόντα "),
    ("90", "ενενήντα"),
    ("9", "ενενήντα "),
];

const THREE_DIGIT: [(&str, &str); 18] = [
    ("100", "εκατό"),
    ("1", "εκατόν"),
    ("200", "διακόσια"),
    ("2", "διακόσια"),
    ("300", "τριακόσια"),
    ("3", "τριακόσια"),
    ("400", "τετρακόσια"),
    ("4", "τετρακόσια"),
    ("500", "πεντακόσια"),
    ("5", "πεντακόσια"),
    ("600", "εξακόσια"),
    ("6", "εξακόσια"),
    ("700", "εφτακόσια"),
    ("7", "εφτακόσια"),
    ("800", "οχτακόσια"),
    ("8", "οχτακόσια"),
    ("900", "εννιακόσια"),
    ("9", "εννιακόσια"),
];

/// Digit words used right before a plural multiplier noun.
const PLURAL_FORMS: [(&str, &str); 10] = [
    ("0", "μηδέν"),
    ("1", "ένα"),
    ("2", "δυο"),
    ("3", "τρεις"),
    ("4", "τέσσερις"),
    ("5", "πέντε"),
    ("6", "έξι"),
    ("7", "εφτά"),
    ("8", "οχτώ"),
    ("9", "εννιά"),
];

/// Irregular ordinal stems, without their inflection.
const ORDINAL_STEMS: [(u64, &str); 27] = [
    (1, "πρώτ"),
    (2, "δεύτερ"),
    (3, "τρίτ"),
    (4, "τέταρτ"),
    (5, "πέμπτ"),
    (6, "έκτ"),
    (7, "έβδομ"),
    (8, "όγδο"),
    (9, "ένατ"),
    (20, "εικοστ"),
    (30, "τριαντακοστ"),
    (40, "τεσσαρακοστ"),
    (50, "πεντηκοστ"),
    (60, "εξηκοστ"),
    (70, "εβδομηκοστ"),
    (80, "ογδοηκοστ"),
    (90, "ενενηκοστ"),
    (100, "εκατοστ"),
    (200, "διακοσιοστ"),
    (300, "τριακοσιοστ"),
    (400, "τετρακοσιοστ"),
    (500, "πεντακοσιοστ"),
    (600, "εξακοσιοστ"),
    (700, "εφτακοσιοστ"),
    (800, "οχτακοσιοστ"),
    (900, "εννιακοσιοστ"),
    (1000, "χιλιοστ"),
];

/// Read-only word tables shared by every conversion.
pub struct Lexicon {
    /// Index 0 holds the 1-digit table, index 5 the 6-digit table.
    tables: [HashMap<String, String>; 6],
    plural: HashMap<String, String>,
    ordinal_stems: HashMap<u64, &'static str>,
}

static LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::build);

/// The process-wide lexicon, built on first use.
pub fn lexicon() -> &'static Lexicon {
    &LEXICON
}

fn owned(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Feminine plural agreement with "χιλιάδες": "διακόσια" -> "διακόσιες".
fn hundreds_to_feminine(word: &str) -> String {
    match word.strip_suffix("σια") {
        Some(stem) => format!("{stem}σιες"),
        None => word.to_string(),
    }
}

impl Lexicon {
    fn build() -> Self {
        let one = owned(&ONE_DIGIT);
        let two = owned(&TWO_DIGIT);
        let three = owned(&THREE_DIGIT);
        let plural = owned(&PLURAL_FORMS);

        let mut four = HashMap::new();
        // No zero-thousands entry: "0000" must strip down to the empty phrase.
        for (digit, _) in ONE_DIGIT.iter().filter(|(digit, _)| *digit != "0") {
            let word = if *digit == "1" {
                "χίλια".to_string()
            } else {
                format!("{} {THOUSANDS}", plural[*digit])
            };
            four.insert(format!("{digit}000"), word.clone());
            four.insert(digit.to_string(), word);
        }

        let five = TWO_DIGIT
            .iter()
            .filter(|(key, _)| key.len() == 2)
            .map(|(key, word)| (format!("{key}000"), format!("{word} {THOUSANDS}")))
            .collect();

        let six = THREE_DIGIT
            .iter()
            .filter(|(key, _)| key.len() == 3)
            .map(|(key, word)| {
                (
                    format!("{key}000"),
                    format!("{} {THOUSANDS}", hundreds_to_feminine(word)),
                )
            })
            .collect();

        Self {
            tables: [one, two, three, four, five, six],
            plural,
            ordinal_stems: ORDINAL_STEMS.into_iter().collect(),
        }
    }

    /// Exact lookup in the table for `width`. A miss means the caller should
    /// fall back to structural composition, not that the input is bad.
    pub fn exact(&self, width: usize, key: &str) -> Option<&str> {
        let table = self.tables.get(width.checked_sub(1)?)?;
        table.get(key).map(String::as_str)
    }

    /// The word for `digit` in front of a plural multiplier noun.
    pub fn plural(&self, digit: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.plural
            .get(digit.encode_utf8(&mut buf) as &str)
            .map(String::as_str)
    }

    pub fn ordinal_stem(&self, value: u64) -> Option<&'static str> {
        self.ordinal_stems.get(&value).copied()
    }
}

/// Repairs the cardinal forms of 3 and 4 before a plural multiplier:
/// "δεκατρία" -> "δεκατρείς", "τέσσερα" -> "τέσσερις".
pub fn to_plural(phrase: &str) -> String {
    phrase.replace("τρία", "τρείς").replace("ερα", "ερις")
}
