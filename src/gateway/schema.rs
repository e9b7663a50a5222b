//! Declared response shapes and the checks applied to parsed responses.
//!
//! The schemas are sent with each request so the service answers in
//! JSON; the validators enforce what serde alone cannot (non-empty
//! strings, answerable questions).

use serde_json::{json, Value};

use crate::model::{DictionaryEntry, Phrase, QuizQuestion};

use super::error::GatewayError;

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": string() })
}

fn example() -> Value {
    json!({
        "type": "OBJECT",
        "properties": { "luganda": string(), "english": string() },
        "required": ["luganda", "english"]
    })
}

pub fn entry() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "word": string(),
            "pronunciation": string(),
            "partOfSpeech": string(),
            "nounClass": string(),
            "translation": string(),
            "definition": string(),
            "examples": { "type": "ARRAY", "items": example() },
            "synonyms": string_array()
        },
        "required": ["word", "partOfSpeech", "translation", "definition", "examples"]
    })
}

pub fn phrases() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "category": string(),
                "luganda": string(),
                "english": string()
            },
            "required": ["category", "luganda", "english"]
        }
    })
}

pub fn quiz() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "question": string(),
                "options": string_array(),
                "correctAnswer": string(),
                "explanation": string()
            },
            "required": ["question", "options", "correctAnswer", "explanation"]
        }
    })
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !blank(v))
}

/// Reject entries missing their identifying fields; blank optional
/// fields become absent.
pub fn validate_entry(entry: DictionaryEntry) -> Result<DictionaryEntry, GatewayError> {
    for (field, value) in [
        ("word", &entry.word),
        ("partOfSpeech", &entry.part_of_speech),
        ("translation", &entry.translation),
        ("definition", &entry.definition),
    ] {
        if blank(value) {
            return Err(GatewayError::InvalidShape(format!("entry field '{}' is empty", field)));
        }
    }

    Ok(DictionaryEntry {
        pronunciation: non_blank(entry.pronunciation),
        noun_class: non_blank(entry.noun_class),
        examples: entry
            .examples
            .into_iter()
            .filter(|e| !blank(&e.luganda) && !blank(&e.english))
            .collect(),
        synonyms: distinct_synonyms(entry.synonyms),
        ..entry
    })
}

/// Trimmed, non-blank synonyms in first-seen order, without repeats.
fn distinct_synonyms(synonyms: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(synonyms.len());
    for synonym in synonyms {
        let synonym = synonym.trim();
        if !synonym.is_empty() && !kept.iter().any(|k| k == synonym) {
            kept.push(synonym.to_string());
        }
    }
    kept
}

/// Keep phrases with both texts present, at most `limit`.
pub fn validate_phrases(phrases: Vec<Phrase>, limit: usize) -> Vec<Phrase> {
    phrases
        .into_iter()
        .filter(|p| !blank(&p.luganda) && !blank(&p.english))
        .take(limit)
        .collect()
}

/// Keep questions that can actually be answered, at most `limit`.
///
/// A question whose correct answer is not among its options could never
/// be scored, so it is dropped rather than shown.
pub fn validate_questions(questions: Vec<QuizQuestion>, limit: usize) -> Vec<QuizQuestion> {
    questions
        .into_iter()
        .filter(|q| {
            if blank(&q.question) || q.options.len() < 2 {
                tracing::warn!(question = %q.question, "Dropping malformed quiz question");
                return false;
            }
            if !q.is_answerable() {
                tracing::warn!(
                    question = %q.question,
                    correct_answer = %q.correct_answer,
                    "Dropping quiz question whose answer is not an option"
                );
                return false;
            }
            true
        })
        .take(limit)
        .collect()
}
