//! Instruction strings sent to the generative service.

use crate::model::SourceLanguage;

pub const WORD_OF_THE_DAY: &str = "Select an interesting, common Luganda word as the 'Word of the Day'. Provide its full dictionary entry.";

pub fn lookup(term: &str, language: SourceLanguage) -> String {
    format!(
        "Act as a professional Luganda-English lexicographer. Provide a detailed dictionary entry for the term \"{}\" translating from {} to {}. Include grammar details like noun classes for Luganda words.",
        term,
        language.as_str(),
        language.other().as_str()
    )
}

pub fn phrases(category: &str, count: usize) -> String {
    format!(
        "Generate {} essential and commonly used Luganda-English phrases for the category: \"{}\". Provide natural, conversational translations.",
        count, category
    )
}

pub fn quiz(test_type: &str, count: usize) -> String {
    format!(
        "Generate a {} Luganda language test with {} multiple choice questions. The test should cover vocabulary, grammar (noun classes), and common phrases. Ensure cultural context is accurate. The correctAnswer must be copied exactly from one of the options.",
        test_type, count
    )
}

pub fn speech(text: &str) -> String {
    format!("Say clearly in Luganda: {}", text)
}
