//! Test fixtures for import payloads.

use serde_json::json;

/// A valid multiple-choice question line.
pub fn multiple_choice_line(n: usize) -> String {
    format!(
        "Question Text: Question {}? | Type: multiple_choice | Options: A) Yes B) No | Correct Option: A | Difficulty: easy | Tags: fixture",
        n
    )
}

/// A valid flashcard line.
pub fn flashcard_line(n: usize) -> String {
    format!("Front Text: Front {} | Back Text: Back {} | Card Order: {}", n, n, n)
}

/// Join lines into an import file body.
pub fn import_body(lines: &[String]) -> String {
    lines.join("\n")
}

/// Sample question file with `num_valid` good lines followed by one bad line.
pub fn questions_with_one_bad_line(num_valid: usize) -> String {
    let mut lines: Vec<String> = (1..=num_valid).map(multiple_choice_line).collect();
    lines.push("Question Text: Broken | Type: riddle | Difficulty: easy".to_string());
    import_body(&lines)
}

/// Create an admin register request body.
pub fn admin_register_request(name: Option<&str>) -> serde_json::Value {
    match name {
        Some(n) => json!({ "name": n }),
        None => json!({}),
    }
}
