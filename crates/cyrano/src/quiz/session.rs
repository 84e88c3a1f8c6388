use super::bank::QuestionBank;
use super::classifier::{classify, ClassificationPolicy, ClassificationResult};
use super::domain::{AnswerSet, Choice, Dimension, Question, QuestionId, QuizMode};
use super::scoring::score;

/// Rejections raised while feeding answers into a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("quiz session is already completed")]
    AlreadyCompleted,
    #[error("question {received} is not part of this quiz")]
    UnknownQuestion { received: QuestionId },
    #[error("expected an answer for question {expected}, got {received}")]
    UnexpectedQuestion {
        expected: QuestionId,
        received: QuestionId,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState<O, D: Dimension> {
    AwaitingAnswer { index: usize },
    Completed(ClassificationResult<O, D>),
}

/// What the caller should show after an accepted answer.
#[derive(Debug, Clone)]
pub enum Step<O, D: Dimension> {
    Next {
        index: usize,
        question: &'static Question<D>,
    },
    Completed(ClassificationResult<O, D>),
}

/// One attempt at a quiz. Answers must arrive in presentation order; once the last
/// question is answered the session classifies and becomes immutable.
#[derive(Debug)]
pub struct QuizSession<P: ClassificationPolicy> {
    policy: P,
    mode: QuizMode,
    questions: Vec<&'static Question<P::Dimension>>,
    answers: AnswerSet,
    state: SessionState<P::Outcome, P::Dimension>,
}

impl<P: ClassificationPolicy> QuizSession<P> {
    pub fn new(policy: P, bank: &QuestionBank<P::Dimension>, mode: QuizMode) -> Self {
        let questions = bank.sequence(mode);
        let answers = AnswerSet::new();
        let state = if questions.is_empty() {
            SessionState::Completed(classify(&policy, score(questions.iter().copied(), &answers)))
        } else {
            SessionState::AwaitingAnswer { index: 0 }
        };

        Self {
            policy,
            mode,
            questions,
            answers,
            state,
        }
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn state(&self) -> &SessionState<P::Outcome, P::Dimension> {
        &self.state
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, SessionState::Completed(_))
    }

    pub fn result(&self) -> Option<&ClassificationResult<P::Outcome, P::Dimension>> {
        match &self.state {
            SessionState::Completed(result) => Some(result),
            SessionState::AwaitingAnswer { .. } => None,
        }
    }

    /// The question currently awaiting an answer, with its index.
    pub fn current(&self) -> Option<(usize, &'static Question<P::Dimension>)> {
        match self.state {
            SessionState::AwaitingAnswer { index } => {
                self.questions.get(index).map(|question| (index, *question))
            }
            SessionState::Completed(_) => None,
        }
    }

    /// Record `choice` for the awaited question and advance.
    ///
    /// Answers for any other id are rejected rather than overwritten, so the
    /// stored answers always match what was presented.
    pub fn submit(
        &mut self,
        question_id: QuestionId,
        choice: Choice,
    ) -> Result<Step<P::Outcome, P::Dimension>, SessionError> {
        let Some((index, expected)) = self.current() else {
            return Err(SessionError::AlreadyCompleted);
        };

        if expected.id != question_id {
            let known = self
                .questions
                .iter()
                .any(|question| question.id == question_id);
            return Err(if known {
                SessionError::UnexpectedQuestion {
                    expected: expected.id,
                    received: question_id,
                }
            } else {
                SessionError::UnknownQuestion {
                    received: question_id,
                }
            });
        }

        self.answers.record(question_id, choice);

        let next = index + 1;
        if let Some(question) = self.questions.get(next).copied() {
            self.state = SessionState::AwaitingAnswer { index: next };
            return Ok(Step::Next {
                index: next,
                question,
            });
        }

        let scores = score(self.questions.iter().copied(), &self.answers);
        let result = classify(&self.policy, scores);
        self.state = SessionState::Completed(result.clone());
        Ok(Step::Completed(result))
    }
}
