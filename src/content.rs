//! Static reference material shown around the generated content:
//! phrasebook categories, alphabet, numbers, assessments and the
//! pronunciation guide.

/// Display name. Also tagged on the startup log line.
pub const APP_NAME: &str = "Luganda Lexicon";

pub const PHRASE_CATEGORIES: &[&str] = &[
    "Greetings",
    "Travel",
    "Business",
    "Social",
    "Family",
    "Food & Dining",
    "Health",
    "Shopping",
];

/// Letters and digraphs of the Luganda alphabet, in order.
pub const ALPHABET: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "I", "J", "K", "L", "M", "N", "NY", "NG'", "O", "P", "R",
    "S", "T", "U", "V", "W", "Y", "Z",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeral {
    pub value: u8,
    pub word: &'static str,
}

pub const NUMBERS: &[Numeral] = &[
    Numeral { value: 1, word: "Emu" },
    Numeral { value: 2, word: "Bbiri" },
    Numeral { value: 3, word: "Ssatu" },
    Numeral { value: 4, word: "Nnya" },
    Numeral { value: 5, word: "Ttaano" },
    Numeral { value: 6, word: "Mukaaga" },
    Numeral { value: 7, word: "Musanvu" },
    Numeral { value: 8, word: "Munaana" },
    Numeral { value: 9, word: "Mwenda" },
    Numeral { value: 10, word: "Kkumi" },
];

pub fn number_word(value: u8) -> Option<&'static str> {
    NUMBERS.iter().find(|n| n.value == value).map(|n| n.word)
}

/// An assessment offered on the tests view. `title` is the label the quiz
/// and its history entry carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub title: &'static str,
    pub skill: &'static str,
}

pub const ASSESSMENTS: &[Assessment] = &[
    Assessment {
        title: "Vocabulary Challenge",
        skill: "Vocabulary",
    },
    Assessment {
        title: "Grammar Mastery",
        skill: "Grammar",
    },
    Assessment {
        title: "Phrase Conversation",
        skill: "Phrases",
    },
];

/// One row of the pronunciation guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sound {
    pub letters: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub gloss: &'static str,
}

const fn sound(
    letters: &'static str,
    description: &'static str,
    example: &'static str,
    gloss: &'static str,
) -> Sound {
    Sound {
        letters,
        description,
        example,
        gloss,
    }
}

/// Doubled vowels are held for twice as long.
pub const VOWELS: &[Sound] = &[
    sound("A / AA", "Ah (like Father)", "Baba", "Father"),
    sound("E / EE", "Eh (like Bed)", "Mmere", "Food"),
    sound("I / II", "Ee (like See)", "Bbiri", "Two"),
    sound("O / OO", "Oh (like More)", "Mukolo", "Ceremony"),
    sound("U / UU", "Oo (like Food)", "Muzungu", "White person"),
];

pub const CONSONANTS: &[Sound] = &[
    sound("B", "Standard \"B\" as in \"Boy\"", "Baba", "Father"),
    sound("G", "Always hard as in \"Gate\", never soft like \"Giant\"", "Genda", "Go"),
    sound("K", "Standard \"K\" as in \"Keep\"", "Kola", "Work"),
    sound("M", "Standard \"M\" as in \"Mother\"", "Maama", "Mother"),
    sound("N", "Standard \"N\" as in \"No\"", "Nva", "Relish"),
    sound("P", "Standard \"P\" as in \"Park\"", "Paapa", "Pope"),
    sound("S", "Always \"S\" as in \"Sun\", never like \"Z\"", "Soma", "Read"),
    sound("T", "Standard \"T\" as in \"Top\"", "Tula", "Sit"),
    sound("W", "Standard \"W\" as in \"Win\"", "Wano", "Here"),
    sound("Y", "Standard \"Y\" as in \"Yes\"", "Yiga", "Learn"),
    sound("KY", "Like \"CH\" in \"Church\"; a single sound", "Kyalo", "Village"),
    sound("GY", "Like \"J\" in \"Job\"; a single palatal sound", "Gyangu", "Come"),
];

pub const DIGRAPHS: &[Sound] = &[
    sound("NG' / ŋ", "Nasal 'ng' as in \"singer\", not \"finger\"", "Ng'ombe", "Cow"),
    sound("NY / ɲ", "Like 'ny' in \"canyon\" or Spanish 'ñ'", "Nyabo", "Madam"),
];

/// Example spoken to demonstrate vowel length. Embedders pass it to
/// `Lexicon::speak` from the pronunciation guide.
pub const GEMINATION_EXAMPLE: &str = "Abaana";

/// Liquid written after `prev`: `r` follows `e` or `i`, `l` appears
/// everywhere else, including word-initially.
pub fn liquid_after(prev: Option<char>) -> char {
    match prev.map(|c| c.to_ascii_lowercase()) {
        Some('e') | Some('i') => 'r',
        _ => 'l',
    }
}

/// Positions (char indices) where `word` writes the liquid against the
/// L/R rule.
pub fn check_liquids(word: &str) -> Vec<usize> {
    let mut prev = None;
    let mut violations = Vec::new();
    for (i, c) in word.chars().enumerate() {
        let lower = c.to_ascii_lowercase();
        if (lower == 'l' || lower == 'r') && lower != liquid_after(prev) {
            violations.push(i);
        }
        prev = Some(c);
    }
    violations
}
