//! Read-only projection of a session, recomputed on every draw.

use crate::data::Catalog;
use crate::models::{Audience, Question, QuizDefinition};
use crate::session::{Outcome, Progress, SessionState};

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// How an answer option should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionStatus {
    /// Not picked, and not worth highlighting.
    Unselected,
    SelectedCorrect,
    SelectedIncorrect,
    /// The right answer, shown after the user picked something else.
    RevealedCorrect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionView<'a> {
    pub label: char,
    pub text: &'a str,
    pub status: OptionStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView<'a> {
    pub audience: Audience,
    pub quiz: &'a QuizDefinition,
    /// One-based, for display.
    pub number: usize,
    pub total: usize,
    pub prompt: &'a str,
    pub options: Vec<OptionView<'a>>,
    pub answer_checked: bool,
    /// Shown only once the answer is checked.
    pub explanation: Option<&'a str>,
    pub is_last: bool,
}

impl QuestionView<'_> {
    /// Share of the quiz reached, counting the current question.
    pub fn progress(&self) -> f64 {
        self.number as f64 / self.total as f64
    }

    pub fn advance_label(&self) -> &'static str {
        if self.is_last { "Finish" } else { "Next" }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView<'a> {
    pub audience: Audience,
    pub quiz: &'a QuizDefinition,
    pub score: usize,
    pub total: usize,
}

impl ResultView<'_> {
    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }

    pub fn headline(&self) -> &'static str {
        if self.is_perfect() { "Perfect!" } else { "Well Done!" }
    }

    pub fn event_date(&self) -> &str {
        &self.quiz.event_date
    }

    pub fn description(&self) -> &str {
        &self.quiz.description
    }

    pub fn call_to_action(&self) -> String {
        format!("Join our Free {} Bootcamp", self.audience.bootcamp_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudienceChoice {
    pub audience: Audience,
    pub title: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Welcome { choices: Vec<AudienceChoice> },
    Question(QuestionView<'a>),
    Finished(ResultView<'a>),
}

pub fn project<'a>(state: &'a SessionState, catalog: &'a Catalog) -> View<'a> {
    match state {
        SessionState::Welcome => View::Welcome {
            choices: Audience::ALL
                .iter()
                .map(|&audience| AudienceChoice {
                    audience,
                    title: audience.title(),
                    tagline: audience.tagline(),
                })
                .collect(),
        },
        SessionState::InProgress(progress) => View::Question(project_question(progress, catalog)),
        SessionState::Finished(outcome) => View::Finished(project_result(outcome, catalog)),
    }
}

fn project_question<'a>(progress: &'a Progress, catalog: &'a Catalog) -> QuestionView<'a> {
    let quiz = catalog.quiz(progress.audience);
    let question = &quiz.questions[progress.index];
    let selected = progress.answer.as_deref();

    QuestionView {
        audience: progress.audience,
        quiz,
        number: progress.index + 1,
        total: quiz.total_questions(),
        prompt: &question.text,
        options: project_options(question, selected),
        answer_checked: selected.is_some(),
        explanation: selected.and(question.explanation.as_deref()),
        is_last: quiz.is_last(progress.index),
    }
}

fn project_options<'a>(question: &'a Question, selected: Option<&str>) -> Vec<OptionView<'a>> {
    question
        .options
        .iter()
        .zip(OPTION_LABELS)
        .map(|(option, label)| {
            let status = match selected {
                None => OptionStatus::Unselected,
                Some(choice) => {
                    let picked = choice == option.as_str();
                    let correct = question.is_correct(option);
                    match (picked, correct) {
                        (true, true) => OptionStatus::SelectedCorrect,
                        (true, false) => OptionStatus::SelectedIncorrect,
                        (false, true) => OptionStatus::RevealedCorrect,
                        (false, false) => OptionStatus::Unselected,
                    }
                }
            };
            OptionView {
                label,
                text: option,
                status,
            }
        })
        .collect()
}

fn project_result<'a>(outcome: &Outcome, catalog: &'a Catalog) -> ResultView<'a> {
    let quiz = catalog.quiz(outcome.audience);
    ResultView {
        audience: outcome.audience,
        quiz,
        score: outcome.score,
        total: quiz.total_questions(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::QuizSession;

    fn statuses(view: &View<'_>) -> Vec<OptionStatus> {
        let View::Question(question) = view else {
            panic!("expected a question view, got {view:?}");
        };
        question.options.iter().map(|o| o.status).collect()
    }

    #[test]
    fn test_welcome_lists_both_audiences() {
        let session = QuizSession::silent(Catalog::builtin().unwrap());
        let View::Welcome { choices } = session.view() else {
            panic!("expected welcome view");
        };
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[0].title, "For Teens");
        assert_eq!(choices[1].tagline, "Industry insights & trends");
    }

    #[test]
    fn test_unchecked_question_has_plain_options() {
        let mut session = QuizSession::silent(Catalog::builtin().unwrap());
        session.start_session(Audience::Teen);

        let view = session.view();
        assert_eq!(statuses(&view), vec![OptionStatus::Unselected; 4]);

        let View::Question(question) = view else { unreachable!() };
        assert_eq!(question.number, 1);
        assert_eq!(question.total, 5);
        assert!((question.progress() - 0.2).abs() < f64::EPSILON);
        assert_eq!(question.options[2].label, 'C');
        assert_eq!(question.advance_label(), "Next");
        assert!(question.explanation.is_none());
    }

    #[test]
    fn test_wrong_pick_reveals_correct_option() {
        let mut session = QuizSession::silent(Catalog::builtin().unwrap());
        session.start_session(Audience::Teen);
        session.select_answer("Dancing");
        session.advance();
        session.select_answer("A regular calculator");

        // second question: "A robot that follows voice commands" is right
        assert_eq!(
            statuses(&session.view()),
            vec![
                OptionStatus::SelectedIncorrect,
                OptionStatus::RevealedCorrect,
                OptionStatus::Unselected,
                OptionStatus::Unselected,
            ]
        );
    }

    #[test]
    fn test_unknown_pick_still_reveals_answer() {
        let mut session = QuizSession::silent(Catalog::builtin().unwrap());
        session.start_session(Audience::Teen);
        session.select_answer("Nothing listed");

        assert_eq!(
            statuses(&session.view()),
            vec![
                OptionStatus::Unselected,
                OptionStatus::RevealedCorrect,
                OptionStatus::Unselected,
                OptionStatus::Unselected,
            ]
        );
    }

    #[test]
    fn test_explanation_appears_after_check() {
        let mut session = QuizSession::silent(Catalog::builtin().unwrap());
        session.start_session(Audience::Adult);
        for answer in ["Making websites", "Fax machines", "An AI error"] {
            session.select_answer(answer);
            session.advance();
        }

        let View::Question(question) = session.view() else { unreachable!() };
        assert_eq!(question.options.len(), 2);
        assert!(question.explanation.is_none());

        session.select_answer("True");
        let View::Question(question) = session.view() else { unreachable!() };
        assert!(question.explanation.is_some());
        assert_eq!(question.options[0].status, OptionStatus::SelectedCorrect);
    }

    #[test]
    fn test_result_view_for_perfect_and_partial_scores() {
        let mut session = QuizSession::silent(Catalog::builtin().unwrap());
        session.start_session(Audience::Teen);
        while let Some(question) = session.current_question() {
            let answer = question.correct_answer.clone();
            session.select_answer(&answer);
            session.advance();
        }

        let View::Finished(result) = session.view() else { unreachable!() };
        assert!(result.is_perfect());
        assert_eq!(result.headline(), "Perfect!");
        assert_eq!(result.event_date(), "January 25th");
        assert_eq!(result.call_to_action(), "Join our Free Teen Bootcamp");

        session.restart();
        session.start_session(Audience::Adult);
        while session.current_question().is_some() {
            session.select_answer("wrong");
            session.advance();
        }
        let View::Finished(result) = session.view() else { unreachable!() };
        assert_eq!(result.score, 0);
        assert_eq!(result.headline(), "Well Done!");
        assert_eq!(result.call_to_action(), "Join our Free Professional Bootcamp");
        assert_eq!(result.description(), "Real-world AI applications for business.");
    }
}
