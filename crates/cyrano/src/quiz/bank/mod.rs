//! Static question banks for the archetype and MBTI-style quizzes.

mod archetype;
mod mbti;

use super::domain::{BehaviorDimension, Dimension, MbtiLetter, Question, QuestionId, QuizMode};

/// An ordered, immutable set of questions plus the ids that make up its quick variant.
#[derive(Debug)]
pub struct QuestionBank<D: 'static> {
    questions: &'static [Question<D>],
    quick_ids: &'static [QuestionId],
}

impl<D> QuestionBank<D> {
    pub const fn new(questions: &'static [Question<D>], quick_ids: &'static [QuestionId]) -> Self {
        Self {
            questions,
            quick_ids,
        }
    }
}

impl<D: Dimension> QuestionBank<D> {
    pub fn all(&self) -> &'static [Question<D>] {
        self.questions
    }

    /// Quick subset in bank order, whatever order the id list is declared in.
    pub fn quick(&self) -> Vec<&'static Question<D>> {
        self.questions
            .iter()
            .filter(|question| self.quick_ids.contains(&question.id))
            .collect()
    }

    pub fn quick_ids(&self) -> &'static [QuestionId] {
        self.quick_ids
    }

    pub fn sequence(&self, mode: QuizMode) -> Vec<&'static Question<D>> {
        match mode {
            QuizMode::Full => self.questions.iter().collect(),
            QuizMode::Quick => self.quick(),
        }
    }

    pub fn get(&self, id: QuestionId) -> Option<&'static Question<D>> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

pub static ARCHETYPE_BANK: QuestionBank<BehaviorDimension> =
    QuestionBank::new(&archetype::QUESTIONS, &archetype::QUICK_IDS);

pub static MBTI_BANK: QuestionBank<MbtiLetter> =
    QuestionBank::new(&mbti::QUESTIONS, &mbti::QUICK_IDS);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_well_formed<D: Dimension>(bank: &QuestionBank<D>) {
        let ids: HashSet<_> = bank.all().iter().map(|question| question.id).collect();
        assert_eq!(ids.len(), bank.len(), "question ids are unique");

        for id in bank.quick_ids() {
            assert!(ids.contains(id), "quick id {id} exists in the bank");
        }

        for question in bank.all() {
            assert!(!question.option_a.weights.is_empty());
            assert!(!question.option_b.weights.is_empty());
        }
    }

    #[test]
    fn archetype_bank_has_twenty_questions_and_ten_quick() {
        assert_eq!(ARCHETYPE_BANK.len(), 20);
        assert_eq!(ARCHETYPE_BANK.quick().len(), 10);
        assert_well_formed(&ARCHETYPE_BANK);
    }

    #[test]
    fn mbti_bank_has_sixteen_questions_and_two_quick_per_axis() {
        assert_eq!(MBTI_BANK.len(), 16);
        assert_eq!(MBTI_BANK.quick().len(), 8);
        assert_well_formed(&MBTI_BANK);
    }

    #[test]
    fn mbti_options_tag_exactly_one_letter() {
        for question in MBTI_BANK.all() {
            assert_eq!(question.option_a.weights.len(), 1);
            assert_eq!(question.option_b.weights.len(), 1);
        }
    }

    #[test]
    fn quick_sequence_preserves_bank_order() {
        let ids: Vec<u32> = ARCHETYPE_BANK
            .sequence(QuizMode::Quick)
            .iter()
            .map(|question| question.id.0)
            .collect();
        assert_eq!(ids, vec![1, 4, 7, 10, 13, 16, 17, 18, 19, 20]);
    }

    #[test]
    fn lookup_by_id_finds_questions() {
        let question = ARCHETYPE_BANK.get(QuestionId(13)).expect("question 13");
        assert_eq!(question.id, QuestionId(13));
        assert!(ARCHETYPE_BANK.get(QuestionId(99)).is_none());
    }
}
