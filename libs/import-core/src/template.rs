//! Sample import files handed out to clients.

/// One line per supported question shape.
pub const QUESTION_TEMPLATE: &str = "\
Question Text: What is the capital of France? | Type: multiple_choice | Options: A) Paris B) London C) Berlin D) Madrid | Correct Option: A | Difficulty: easy | Tags: geography, Europe
Question Text: The Earth orbits the Sun. | Type: true_false | Options: True, False | Correct Option: True | Difficulty: easy | Tags: astronomy | Hint: Think heliocentric
Question Text: Explain the water cycle. | Type: essay | Difficulty: medium | Keywords: evaporation, condensation | Help Guidance: Cover all four stages
";

/// One line per supported flashcard shape.
pub const FLASHCARD_TEMPLATE: &str = "\
Front Text: What is the capital of France? | Back Text: Paris | Difficulty: easy
Front Text: H2O is the formula for? | Back Text: Water | Difficulty: medium | Card Order: 2 | Status: active
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_flashcards_from_text, parse_questions_from_text};

    #[test]
    fn question_template_parses_cleanly() {
        let result = parse_questions_from_text(QUESTION_TEMPLATE).unwrap();
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        assert_eq!(result.success_count, 3);
    }

    #[test]
    fn flashcard_template_parses_cleanly() {
        let result = parse_flashcards_from_text(FLASHCARD_TEMPLATE).unwrap();
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        assert_eq!(result.success_count, 2);
    }
}
