use crate::content::QuizQuestion;

/// Message body sent to the practitioner: the greeting, then one
/// `- prompt: answer` line per answered question, in question order.
/// Only indices present in both lists are paired.
pub fn compose_summary(greeting: &str, questions: &[QuizQuestion], answers: &[String]) -> String {
    let lines = questions
        .iter()
        .zip(answers)
        .map(|(question, answer)| format!("- {}: {}", question.prompt, answer))
        .collect::<Vec<_>>()
        .join("\n");

    if greeting.is_empty() {
        format!("Respostas:\n{}", lines)
    } else {
        format!("{}\n\nRespostas:\n{}", greeting, lines)
    }
}

pub fn encoded_summary(greeting: &str, questions: &[QuizQuestion], answers: &[String]) -> String {
    urlencoding::encode(&compose_summary(greeting, questions, answers)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion {
                id: 1,
                prompt: "Área?".to_string(),
                options: vec!["Lábios".to_string(), "Pele".to_string()],
            },
            QuizQuestion {
                id: 2,
                prompt: "Quando?".to_string(),
                options: vec!["Já".to_string(), "Depois".to_string()],
            },
        ]
    }

    #[test]
    fn pairs_prompts_with_answers_in_order() {
        let answers = vec!["Lábios".to_string(), "Depois".to_string()];
        let text = compose_summary("Olá!", &questions(), &answers);

        assert_eq!(text, "Olá!\n\nRespostas:\n- Área?: Lábios\n- Quando?: Depois");
    }

    #[test]
    fn short_answer_log_pairs_only_present_indices() {
        let answers = vec!["Pele".to_string()];
        let text = compose_summary("Olá!", &questions(), &answers);

        assert_eq!(text, "Olá!\n\nRespostas:\n- Área?: Pele");
        assert!(!text.contains("Quando?"));
    }

    #[test]
    fn blank_greeting_starts_with_answers() {
        let answers = vec!["Lábios".to_string(), "Já".to_string()];
        let text = compose_summary("", &questions(), &answers);

        assert!(text.starts_with("Respostas:\n- Área?"));
    }

    #[test]
    fn encoding_escapes_newlines_spaces_and_accents() {
        let answers = vec!["Lábios".to_string(), "Já".to_string()];
        let encoded = encoded_summary("Olá Dra!", &questions(), &answers);

        assert!(encoded.starts_with("Ol%C3%A1%20Dra%21%0A%0ARespostas%3A%0A"));
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
        assert_eq!(
            urlencoding::decode(&encoded).unwrap(),
            compose_summary("Olá Dra!", &questions(), &answers)
        );
    }

    #[test]
    fn same_inputs_give_same_text() {
        let answers = vec!["Pele".to_string(), "Já".to_string()];
        assert_eq!(
            encoded_summary("Oi", &questions(), &answers),
            encoded_summary("Oi", &questions(), &answers)
        );
    }
}
