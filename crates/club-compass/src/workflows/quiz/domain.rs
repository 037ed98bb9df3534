use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Trait names the engines read directly. Options may carry other traits too.
pub mod traits {
    pub const TECHNICAL: &str = "technical";
    pub const CREATIVE: &str = "creative";
    pub const SPORTS: &str = "sports";
    pub const SOCIAL: &str = "social";
    pub const LITERARY: &str = "literary";
    pub const LEADERSHIP: &str = "leadership";
    pub const COMPETITIVE: &str = "competitive";
    pub const TEAMWORK: &str = "teamwork";
    pub const COMMUNICATION: &str = "communication";
}

/// A question in the static bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: &'static str,
    pub options: Vec<QuizOption>,
}

impl QuizQuestion {
    /// Options are matched by their exact display text.
    pub fn option(&self, text: &str) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.text == text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub text: &'static str,
    pub weights: Vec<(&'static str, u32)>,
}

/// Client-facing question shape. Weights stay on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub id: u32,
    pub question: &'static str,
    pub options: Vec<&'static str>,
}

/// One submitted answer, referencing the option by its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: u32,
    #[serde(alias = "answer_text")]
    pub answer: String,
}

impl Answer {
    pub fn new(question_id: u32, answer: impl Into<String>) -> Self {
        Self {
            question_id,
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizSubmission {
    #[serde(default)]
    pub answers: Vec<Answer>,
}

/// Accumulated weight per trait for a single submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitScores(BTreeMap<String, u32>);

impl TraitScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Totals saturate at `u32::MAX`.
    pub fn add(&mut self, name: &str, weight: u32) {
        let score = self.0.entry(name.to_string()).or_insert(0);
        *score = score.saturating_add(weight);
    }

    /// Score for `name`, zero when the trait never appeared.
    pub fn get(&self, name: &str) -> u32 {
        self.0.get(name).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.0
            .values()
            .fold(0, |total, score| total.saturating_add(*score))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, score)| (name.as_str(), *score))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for TraitScores {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut scores = TraitScores::new();
        for (name, weight) in iter {
            scores.add(&name.into(), weight);
        }
        scores
    }
}
