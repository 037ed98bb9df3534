use std::sync::Arc;

use tracing::debug;

use super::bank::QuestionBank;
use super::domain::{Answer, TraitScores};
use super::personality::Personality;

/// Scores answer sets against the shared question bank.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    bank: Arc<QuestionBank>,
}

/// Classification plus the raw trait totals it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub personality: Personality,
    pub scores: TraitScores,
}

impl QuizEngine {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Unknown question ids and unmatched option texts are skipped, never rejected.
    pub fn score(&self, answers: &[Answer]) -> QuizOutcome {
        let mut scores = TraitScores::new();

        for answer in answers {
            let Some(question) = self.bank.question(answer.question_id) else {
                debug!(question_id = answer.question_id, "skipping unknown question");
                continue;
            };
            let Some(option) = question.option(&answer.answer) else {
                debug!(question_id = answer.question_id, "skipping unmatched answer");
                continue;
            };

            for (name, weight) in &option.weights {
                scores.add(name, *weight);
            }
        }

        QuizOutcome {
            personality: Personality::classify(&scores),
            scores,
        }
    }
}
