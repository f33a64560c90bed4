//! Question value object

use serde::{Deserialize, Serialize};

/// A generated trivia question (Value Object)
///
/// Mirrors the JSON body exchanged with both the generation service and the
/// storage service. The pipeline forwards it untouched: no field is
/// validated or rewritten between generation and delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub answer_a: String,
    pub answer_b: String,
    pub answer_c: String,
    pub answer_d: String,
    pub correct_answer: String,
}

impl Question {
    pub fn new(
        question: impl Into<String>,
        answers: [&str; 4],
        correct_answer: impl Into<String>,
    ) -> Self {
        let [a, b, c, d] = answers;
        Self {
            question: question.into(),
            answer_a: a.to_string(),
            answer_b: b.to_string(),
            answer_c: c.to_string(),
            answer_d: d.to_string(),
            correct_answer: correct_answer.into(),
        }
    }

    /// The four candidate answers in display order
    pub fn answers(&self) -> [&str; 4] {
        [
            &self.answer_a,
            &self.answer_b,
            &self.answer_c,
            &self.answer_d,
        ]
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_json_field_names() {
        let q = Question::new(
            "What is the capital of Poland?",
            ["Warsaw", "Berlin", "Paris", "Oslo"],
            "Warsaw",
        );
        let value = serde_json::to_value(&q).unwrap();
        for field in [
            "question",
            "answer_a",
            "answer_b",
            "answer_c",
            "answer_d",
            "correct_answer",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(value["answer_a"], "Warsaw");
    }

    #[test]
    fn test_question_missing_field_rejected() {
        let body = r#"{"question": "Q?", "answer_a": "A", "answer_b": "B", "answer_c": "C", "correct_answer": "A"}"#;
        assert!(serde_json::from_str::<Question>(body).is_err());
    }

    #[test]
    fn test_answers_order() {
        let q = Question::new("Q?", ["a", "b", "c", "d"], "c");
        assert_eq!(q.answers(), ["a", "b", "c", "d"]);
        assert_eq!(q.to_string(), "Q?");
    }
}
