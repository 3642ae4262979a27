//! End-to-end behaviour of the public parse entry points.

use import_core::{
    parse_flashcards_from_text, parse_questions_from_text, parse_questions_with, DifficultyLevel,
    ImportError, ImportLimits, ParseOptions, QuestionType, RecordStatus,
};
use pretty_assertions::assert_eq;

const MIXED_QUESTIONS: &str = "\
Question Text: What is the capital of France? | Type: multiple_choice | Options: A) Paris B) London | Correct Option: A | Difficulty: easy

this line is not a record
Question Text: 2+2=4? | Type: true_false | Options: True, False | Correct Option: True | Difficulty: easy
Question Text: Describe Rust ownership | Type: essay | Difficulty: hard
Question Text: Broken | Type: riddle | Difficulty: easy
";

#[test]
fn counts_always_add_up() {
    let result = parse_questions_from_text(MIXED_QUESTIONS).unwrap();
    assert_eq!(result.total_lines, 5);
    assert_eq!(result.success_count + result.error_count, result.total_lines);
    assert_eq!(result.success_count, 3);
    assert_eq!(result.error_count, 2);
}

#[test]
fn parsing_is_repeatable() {
    let first = parse_questions_from_text(MIXED_QUESTIONS).unwrap();
    let second = parse_questions_from_text(MIXED_QUESTIONS).unwrap();
    assert_eq!(first, second);
}

#[test]
fn one_bad_line_does_not_affect_neighbours() {
    let input = "\
Front Text: One | Back Text: 1
Front Text: Two
Front Text: Three | Back Text: 3
Front Text: Four | Back Text: 4";
    let result = parse_flashcards_from_text(input).unwrap();
    assert_eq!(result.success_count, 3);
    assert_eq!(result.error_count, 1);
    assert_eq!(result.errors[0].line, 2);
    assert_eq!(result.errors[0].content, "Front Text: Two");
    let fronts: Vec<_> = result.records.iter().map(|c| c.front_text.as_str()).collect();
    assert_eq!(fronts, vec!["One", "Three", "Four"]);
}

#[test]
fn error_lines_use_filtered_numbering() {
    let result = parse_questions_from_text(MIXED_QUESTIONS).unwrap();
    let lines: Vec<_> = result.errors.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![2, 5]);
    assert_eq!(result.errors[0].error, "Invalid format: expected at least 3 parts");
    assert_eq!(result.line_of(1), Some(3));
}

#[test]
fn flashcard_difficulty_is_case_folded() {
    let result = parse_flashcards_from_text("Front Text: Q | Back Text: A | Difficulty: HARD").unwrap();
    assert_eq!(result.success_count, 1);
    let card = &result.records[0];
    assert_eq!(card.difficulty_level, DifficultyLevel::Hard);
    assert_eq!(card.card_order, 1);
    assert_eq!(card.status, RecordStatus::Draft);
}

#[test]
fn flashcard_missing_back_text() {
    let result = parse_flashcards_from_text("Front Text: Q").unwrap();
    assert!(result.records.is_empty());
    assert_eq!(result.error_count, 1);
    assert!(result.errors[0].error.contains("front_text"));
    assert!(result.errors[0].error.contains("back_text"));
}

#[test]
fn true_false_question_marks_true() {
    let input = "Question Text: 2+2? | Type: true_false | Options: True, False | Correct Option: True | Difficulty: easy";
    let result = parse_questions_from_text(input).unwrap();
    assert_eq!(result.success_count, 1);
    let options = result.records[0].options.as_ref().unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].option_text, "True");
    assert!(options[0].is_correct);
    assert_eq!(options[1].option_text, "False");
    assert!(!options[1].is_correct);
}

#[test]
fn unmatched_correct_option_is_accepted() {
    let input = "Question Text: Pick | Type: multiple_choice | Options: A) X B) Y | Correct Option: C | Difficulty: easy";
    let result = parse_questions_from_text(input).unwrap();
    assert_eq!(result.success_count, 1);
    assert_eq!(result.error_count, 0);
    let options = result.records[0].options.as_ref().unwrap();
    assert_eq!(options.len(), 2);
    assert!(options.iter().all(|o| !o.is_correct));
}

#[test]
fn strict_answers_reject_unmatched_correct_option() {
    let input = "Question Text: Pick | Type: multiple_choice | Options: A) X B) Y | Correct Option: C | Difficulty: easy";
    let options = ParseOptions {
        strict_answers: true,
        ..ParseOptions::default()
    };
    let result = parse_questions_with(input, &options).unwrap();
    assert_eq!(result.success_count, 0);
    assert_eq!(
        result.errors[0].error,
        "Correct option 'C' matches 0 options, expected exactly one"
    );
}

#[test]
fn essay_question_has_no_options_property() {
    let input = "Question Text: Discuss | Type: essay | Difficulty: medium";
    let result = parse_questions_from_text(input).unwrap();
    assert_eq!(result.error_count, 0);
    let question = &result.records[0];
    assert_eq!(question.question_type, QuestionType::Essay);
    let json = serde_json::to_value(question).unwrap();
    assert!(json.get("options").is_none());
}

#[test]
fn blank_input_is_an_empty_result() {
    let result = parse_questions_from_text("\n   \n\t\n").unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "records": [],
            "errors": [],
            "totalLines": 0,
            "successCount": 0,
            "errorCount": 0
        })
    );
}

#[test]
fn byte_input_is_decoded() {
    let bytes = b"Front Text: Q | Back Text: A".to_vec();
    let result = parse_flashcards_from_text(&bytes).unwrap();
    assert_eq!(result.success_count, 1);
}

#[test]
fn byte_order_mark_does_not_break_the_first_record() {
    let bytes = "\u{feff}Front Text: Q | Back Text: A\nFront Text: Q2 | Back Text: B"
        .as_bytes()
        .to_vec();
    let result = parse_flashcards_from_text(&bytes).unwrap();
    assert_eq!(result.success_count, 2);
    assert!(result.errors.is_empty());
    assert_eq!(result.records[0].front_text, "Q");
}

#[test]
fn undecodable_bytes_fail_the_whole_call() {
    let bytes: &[u8] = b"Front Text: \xff | Back Text: A";
    let err = parse_flashcards_from_text(bytes).unwrap_err();
    assert!(matches!(err, ImportError::Decode(_)));
}

#[test]
fn oversized_input_fails_the_whole_call() {
    let input = "Front Text: Q | Back Text: A\n".repeat(5);
    let options = ParseOptions {
        limits: ImportLimits {
            max_bytes: None,
            max_lines: Some(4),
        },
        strict_answers: false,
    };
    let err = import_core::parse_flashcards_with(&input, &options).unwrap_err();
    assert!(matches!(err, ImportError::TooManyLines { count: 5, limit: 4 }));
}
