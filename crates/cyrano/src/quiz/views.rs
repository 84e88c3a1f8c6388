use serde::Serialize;

use super::domain::{Choice, Question, QuestionId, QuizMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub choice: Choice,
    pub text: &'static str,
}

/// Question as presented to a client; weights stay server side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub text: &'static str,
    pub options: [OptionView; 2],
    /// 1-based position in the session's sequence.
    pub position: usize,
    pub total: usize,
}

impl QuestionView {
    pub fn new<D>(question: &Question<D>, index: usize, total: usize) -> Self {
        Self {
            id: question.id,
            text: question.text,
            options: [
                OptionView {
                    choice: Choice::A,
                    text: question.option_a.text,
                },
                OptionView {
                    choice: Choice::B,
                    text: question.option_b.text,
                },
            ],
            position: index + 1,
            total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionList {
    pub mode: QuizMode,
    pub questions: Vec<QuestionView>,
}

impl QuestionList {
    pub fn new<D>(mode: QuizMode, questions: &[&Question<D>]) -> Self {
        let total = questions.len();
        Self {
            mode,
            questions: questions
                .iter()
                .enumerate()
                .map(|(index, question)| QuestionView::new(question, index, total))
                .collect(),
        }
    }
}
