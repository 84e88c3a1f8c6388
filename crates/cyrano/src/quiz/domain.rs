use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable question identifier used as the answer-map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One side of a forced-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
}

impl Choice {
    pub fn as_str(self) -> &'static str {
        match self {
            Choice::A => "A",
            Choice::B => "B",
        }
    }

    /// Map a single character (`A`/`B`, either case) to a choice.
    pub fn from_char(value: char) -> Result<Self, ChoiceError> {
        match value.to_ascii_uppercase() {
            'A' => Ok(Choice::A),
            'B' => Ok(Choice::B),
            _ => Err(ChoiceError(value.to_string())),
        }
    }
}

impl FromStr for Choice {
    type Err = ChoiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(single), None) => Choice::from_char(single),
            _ => Err(ChoiceError(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when an answer is anything other than `A` or `B`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("choice must be 'A' or 'B', got '{0}'")]
pub struct ChoiceError(pub String);

/// Which slice of the question bank a session walks through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
    #[default]
    Full,
    Quick,
}

impl QuizMode {
    pub fn as_str(self) -> &'static str {
        match self {
            QuizMode::Full => "full",
            QuizMode::Quick => "quick",
        }
    }
}

impl FromStr for QuizMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(QuizMode::Full),
            "quick" => Ok(QuizMode::Quick),
            other => Err(format!("unknown quiz mode '{other}', expected 'full' or 'quick'")),
        }
    }
}

/// Answers keyed by question id. Lookup is by id, so presentation order does not
/// influence scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, Choice>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a choice, returning the previous one for the same question.
    pub fn record(&mut self, question: QuestionId, choice: Choice) -> Option<Choice> {
        self.answers.insert(question, choice)
    }

    pub fn get(&self, question: QuestionId) -> Option<Choice> {
        self.answers.get(&question).copied()
    }

    pub fn contains(&self, question: QuestionId) -> bool {
        self.answers.contains_key(&question)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, Choice)> + '_ {
        self.answers.iter().map(|(id, choice)| (*id, *choice))
    }

    /// Keep only the answers whose ids satisfy `keep`.
    pub fn restricted_to(&self, mut keep: impl FnMut(QuestionId) -> bool) -> Self {
        self.iter().filter(|(id, _)| keep(*id)).collect()
    }
}

impl FromIterator<(QuestionId, Choice)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, Choice)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// A named numeric axis of the score vector. The full set is fixed at compile time.
pub trait Dimension: Copy + Ord + fmt::Debug + Serialize + Send + Sync + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// Behavioral axes measured by the archetype quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BehaviorDimension {
    /// High wants to steer, low lets things flow.
    Control,
    /// High needs reassurance, low feels secure.
    Validation,
    /// High leads with feelings, low with reasoning.
    Emotion,
    /// High opens up, low stays guarded.
    Vulnerability,
    /// High makes the first move, low waits.
    Initiative,
    /// High tolerates silence, low gets anxious.
    Patience,
}

impl Dimension for BehaviorDimension {
    const ALL: &'static [Self] = &[
        BehaviorDimension::Control,
        BehaviorDimension::Validation,
        BehaviorDimension::Emotion,
        BehaviorDimension::Vulnerability,
        BehaviorDimension::Initiative,
        BehaviorDimension::Patience,
    ];

    fn label(self) -> &'static str {
        match self {
            BehaviorDimension::Control => "control",
            BehaviorDimension::Validation => "validation",
            BehaviorDimension::Emotion => "emotion",
            BehaviorDimension::Vulnerability => "vulnerability",
            BehaviorDimension::Initiative => "initiative",
            BehaviorDimension::Patience => "patience",
        }
    }
}

/// Letter counters used by the MBTI-style quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MbtiLetter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Dimension for MbtiLetter {
    const ALL: &'static [Self] = &[
        MbtiLetter::E,
        MbtiLetter::I,
        MbtiLetter::S,
        MbtiLetter::N,
        MbtiLetter::T,
        MbtiLetter::F,
        MbtiLetter::J,
        MbtiLetter::P,
    ];

    fn label(self) -> &'static str {
        match self {
            MbtiLetter::E => "E",
            MbtiLetter::I => "I",
            MbtiLetter::S => "S",
            MbtiLetter::N => "N",
            MbtiLetter::T => "T",
            MbtiLetter::F => "F",
            MbtiLetter::J => "J",
            MbtiLetter::P => "P",
        }
    }
}

/// Display text plus the weight deltas an option adds to the score vector.
#[derive(Debug)]
pub struct AnswerOption<D: 'static> {
    pub text: &'static str,
    pub weights: &'static [(D, i32)],
}

/// Immutable forced-choice question.
#[derive(Debug)]
pub struct Question<D: 'static> {
    pub id: QuestionId,
    pub text: &'static str,
    pub option_a: AnswerOption<D>,
    pub option_b: AnswerOption<D>,
}

impl<D> Question<D> {
    pub fn option(&self, choice: Choice) -> &AnswerOption<D> {
        match choice {
            Choice::A => &self.option_a,
            Choice::B => &self.option_b,
        }
    }
}
