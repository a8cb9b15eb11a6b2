//! The compiled-in quiz content, one quiz per audience segment.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Audience, QuizDefinition};

const BUILTIN_CATALOG: &str = include_str!("../../content/catalog.json");

const MIN_OPTIONS: usize = 2;
const MAX_OPTIONS: usize = 4;

/// Content that cannot be used as a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{audience} quiz has no questions")]
    NoQuestions { audience: Audience },

    #[error("{audience} quiz reuses question id {id}")]
    DuplicateQuestionId { audience: Audience, id: u32 },

    #[error("{audience} question {id} has {count} options, expected 2 to 4")]
    OptionCount {
        audience: Audience,
        id: u32,
        count: usize,
    },

    #[error("{audience} question {id} lists option {option:?} twice")]
    DuplicateOption {
        audience: Audience,
        id: u32,
        option: String,
    },

    #[error("{audience} question {id} answer {answer:?} is not one of its options")]
    AnswerNotAnOption {
        audience: Audience,
        id: u32,
        answer: String,
    },
}

/// Read-only lookup from audience segment to its quiz.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    teen: QuizDefinition,
    adult: QuizDefinition,
}

impl Catalog {
    /// The catalog shipped inside the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Decode a catalog and check every quiz in it.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        for audience in Audience::ALL {
            validate(audience, catalog.quiz(audience))?;
        }
        tracing::debug!(
            teen = catalog.teen.total_questions(),
            adult = catalog.adult.total_questions(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn quiz(&self, audience: Audience) -> &QuizDefinition {
        match audience {
            Audience::Teen => &self.teen,
            Audience::Adult => &self.adult,
        }
    }
}

fn validate(audience: Audience, quiz: &QuizDefinition) -> Result<(), CatalogError> {
    if quiz.questions.is_empty() {
        return Err(CatalogError::NoQuestions { audience });
    }

    let mut ids = HashSet::new();
    for question in &quiz.questions {
        let id = question.id;
        if !ids.insert(id) {
            return Err(CatalogError::DuplicateQuestionId { audience, id });
        }

        let count = question.options.len();
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
            return Err(CatalogError::OptionCount {
                audience,
                id,
                count,
            });
        }

        let mut seen = HashSet::new();
        for option in &question.options {
            if !seen.insert(option.as_str()) {
                return Err(CatalogError::DuplicateOption {
                    audience,
                    id,
                    option: option.clone(),
                });
            }
        }

        if question.correct_index().is_none() {
            return Err(CatalogError::AnswerNotAnOption {
                audience,
                id,
                answer: question.correct_answer.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_json(teen_questions: &str) -> String {
        format!(
            r##"{{
                "teen": {{
                    "title": "T", "description": "d", "event_date": "soon",
                    "theme": {{ "primary": "#000000", "accent": "#ffffff" }},
                    "questions": {teen_questions}
                }},
                "adult": {{
                    "title": "A", "description": "d", "event_date": "later",
                    "theme": {{ "primary": "#000000", "accent": "#ffffff" }},
                    "questions": [
                        {{ "id": 1, "text": "q", "options": ["x", "y"], "correct_answer": "y" }}
                    ]
                }}
            }}"##
        )
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();

        let teen = catalog.quiz(Audience::Teen);
        assert_eq!(teen.title, "AI Quiz for Teens");
        assert_eq!(teen.event_date, "January 25th");
        assert_eq!(teen.total_questions(), 5);

        let adult = catalog.quiz(Audience::Adult);
        assert_eq!(adult.title, "AI Quiz for Professionals");
        assert_eq!(adult.event_date, "January 10th");
        assert_eq!(adult.total_questions(), 5);
    }

    #[test]
    fn test_builtin_questions_keep_authored_order() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<u32> = catalog
            .quiz(Audience::Teen)
            .questions
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let first = &catalog.quiz(Audience::Teen).questions[0];
        assert_eq!(first.correct_answer, "Artificial Intelligence");
        assert_eq!(first.correct_index(), Some(1));
    }

    #[test]
    fn test_true_false_question_has_two_options() {
        let catalog = Catalog::builtin().unwrap();
        let question = &catalog.quiz(Audience::Adult).questions[3];
        assert_eq!(question.options, vec!["True", "False"]);
        assert!(question.explanation.is_some());
    }

    #[test]
    fn test_rejects_empty_quiz() {
        let err = Catalog::from_json_str(&catalog_json("[]")).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NoQuestions {
                audience: Audience::Teen
            }
        ));
    }

    #[test]
    fn test_rejects_answer_outside_options() {
        let json = catalog_json(
            r#"[{ "id": 1, "text": "q", "options": ["a", "b"], "correct_answer": "c" }]"#,
        );
        let err = Catalog::from_json_str(&json).unwrap_err();
        assert!(matches!(err, CatalogError::AnswerNotAnOption { id: 1, .. }));
        assert!(err.to_string().contains("\"c\""));
    }

    #[test]
    fn test_rejects_bad_option_counts() {
        let one = catalog_json(r#"[{ "id": 1, "text": "q", "options": ["a"], "correct_answer": "a" }]"#);
        assert!(matches!(
            Catalog::from_json_str(&one).unwrap_err(),
            CatalogError::OptionCount { count: 1, .. }
        ));

        let five = catalog_json(
            r#"[{ "id": 1, "text": "q", "options": ["a", "b", "c", "d", "e"], "correct_answer": "a" }]"#,
        );
        assert!(matches!(
            Catalog::from_json_str(&five).unwrap_err(),
            CatalogError::OptionCount { count: 5, .. }
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let options = catalog_json(
            r#"[{ "id": 1, "text": "q", "options": ["a", "a"], "correct_answer": "a" }]"#,
        );
        assert!(matches!(
            Catalog::from_json_str(&options).unwrap_err(),
            CatalogError::DuplicateOption { .. }
        ));

        let ids = catalog_json(
            r#"[
                { "id": 7, "text": "q", "options": ["a", "b"], "correct_answer": "a" },
                { "id": 7, "text": "r", "options": ["a", "b"], "correct_answer": "b" }
            ]"#,
        );
        assert!(matches!(
            Catalog::from_json_str(&ids).unwrap_err(),
            CatalogError::DuplicateQuestionId { id: 7, .. }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Catalog::from_json_str("{ \"teen\": ").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
