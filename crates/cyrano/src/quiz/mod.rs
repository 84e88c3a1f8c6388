//! Quiz engine: question banks, scoring, classification policies, sessions, and
//! the bridge that persists completed archetype results.

pub mod archetypes;
pub mod bank;
pub mod classifier;
pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;
pub mod views;

#[cfg(test)]
mod tests;

pub use archetypes::{
    all_profiles, mbti_description, ArchetypeId, ArchetypeProfile, MbtiDescription,
    UnknownArchetype,
};
pub use bank::{QuestionBank, ARCHETYPE_BANK, MBTI_BANK};
pub use classifier::{
    classify, ArchetypeMatch, ArchetypePolicy, Axis, AxisLetterPolicy, AxisScore,
    ClassificationPolicy, ClassificationResult, MbtiProfile, RankScore,
};
pub use domain::{
    AnswerSet, BehaviorDimension, Choice, ChoiceError, Dimension, MbtiLetter, Question,
    QuestionId, QuizMode,
};
pub use repository::{QuizResultRepository, QuizResultView, StoredQuizResult};
pub use router::quiz_router;
pub use scoring::{score, ScoreVector};
pub use service::{AnswerOutcome, QuizService, QuizServiceError, SessionId, SessionStarted};
pub use session::{QuizSession, SessionError, SessionState, Step};

pub type ArchetypeResult = ClassificationResult<ArchetypeMatch, BehaviorDimension>;
pub type MbtiResult = ClassificationResult<MbtiProfile, MbtiLetter>;

/// Score and classify a complete archetype answer set in one call.
pub fn evaluate_archetype(mode: QuizMode, answers: &AnswerSet) -> ArchetypeResult {
    let questions = ARCHETYPE_BANK.sequence(mode);
    classify(&ArchetypePolicy, score(questions, answers))
}

/// Score and classify a complete MBTI-style answer set in one call.
pub fn evaluate_mbti(mode: QuizMode, answers: &AnswerSet) -> MbtiResult {
    let questions = MBTI_BANK.sequence(mode);
    classify(&AxisLetterPolicy, score(questions, answers))
}

/// Parse a compact answer string such as `"ABBA"` against a question sequence,
/// one character per question in presentation order. Whitespace is ignored.
pub fn answers_from_letters<D>(
    questions: &[&Question<D>],
    letters: &str,
) -> Result<AnswerSet, ChoiceError> {
    let choices = letters
        .chars()
        .filter(|character| !character.is_whitespace())
        .map(Choice::from_char)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(questions
        .iter()
        .zip(choices)
        .map(|(question, choice)| (question.id, choice))
        .collect())
}
