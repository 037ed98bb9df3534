use super::domain::{traits, QuestionView, QuizOption, QuizQuestion};

/// The fixed personality quiz. Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<QuizQuestion>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn from_questions(questions: Vec<QuizQuestion>) -> Self {
        Self { questions }
    }

    pub fn question(&self, id: u32) -> Option<&QuizQuestion> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn public_view(&self) -> Vec<QuestionView> {
        self.questions
            .iter()
            .map(|question| QuestionView {
                id: question.id,
                question: question.prompt,
                options: question.options.iter().map(|option| option.text).collect(),
            })
            .collect()
    }
}

fn option(text: &'static str, weights: &[(&'static str, u32)]) -> QuizOption {
    QuizOption {
        text,
        weights: weights.to_vec(),
    }
}

fn standard_questions() -> Vec<QuizQuestion> {
    use traits::*;

    vec![
        QuizQuestion {
            id: 1,
            prompt: "How do you prefer to spend your free time?",
            options: vec![
                option("Coding or building tech projects", &[(TECHNICAL, 3), (CREATIVE, 1)]),
                option("Creating art, music, or performing", &[(CREATIVE, 3), (SOCIAL, 1)]),
                option("Playing sports or exercising", &[(SPORTS, 3), (TEAMWORK, 2)]),
                option("Reading, writing, or debating", &[(LITERARY, 3), (COMMUNICATION, 2)]),
            ],
        },
        QuizQuestion {
            id: 2,
            prompt: "What motivates you the most?",
            options: vec![
                option("Solving complex problems", &[(TECHNICAL, 3), ("analytical", 2)]),
                option("Expressing myself creatively", &[(CREATIVE, 3), ("independent", 1)]),
                option("Competing and winning", &[(COMPETITIVE, 3), (SPORTS, 2)]),
                option("Making a social impact", &[(SOCIAL, 3), (LEADERSHIP, 2)]),
            ],
        },
        QuizQuestion {
            id: 3,
            prompt: "How do you work best?",
            options: vec![
                option("Independently with clear goals", &[("independent", 3), (TECHNICAL, 1)]),
                option("In a team with collaborative energy", &[(TEAMWORK, 3), (SOCIAL, 2)]),
                option("Leading and organizing others", &[(LEADERSHIP, 3), ("management", 2)]),
                option("Flexible, adapting to situations", &[("adaptable", 2), (CREATIVE, 1)]),
            ],
        },
        QuizQuestion {
            id: 4,
            prompt: "What kind of events excite you?",
            options: vec![
                option("Hackathons and tech competitions", &[(TECHNICAL, 3), (COMPETITIVE, 2)]),
                option("Cultural festivals and performances", &[(CREATIVE, 3), (SOCIAL, 2)]),
                option("Sports tournaments", &[(SPORTS, 3), (COMPETITIVE, 2)]),
                option("Debates and literary events", &[(LITERARY, 3), (COMMUNICATION, 2)]),
            ],
        },
        QuizQuestion {
            id: 5,
            prompt: "How much time can you commit weekly?",
            options: vec![
                option("2-4 hours (Light commitment)", &[("time_light", 3)]),
                option("5-8 hours (Moderate commitment)", &[("time_moderate", 3)]),
                option("9-12 hours (High commitment)", &[("time_high", 3)]),
                option("12+ hours (Very high commitment)", &[("time_very_high", 3)]),
            ],
        },
        QuizQuestion {
            id: 6,
            prompt: "Are you more introverted or extroverted?",
            options: vec![
                option(
                    "Very introverted - prefer working alone",
                    &[("introvert", 3), (TECHNICAL, 1)],
                ),
                option("Somewhat introverted", &[("introvert", 2)]),
                option("Somewhat extroverted", &[("extrovert", 2), (SOCIAL, 1)]),
                option(
                    "Very extroverted - love social interactions",
                    &[("extrovert", 3), (SOCIAL, 2)],
                ),
            ],
        },
        QuizQuestion {
            id: 7,
            prompt: "What skills do you want to develop?",
            options: vec![
                option("Programming and technical skills", &[(TECHNICAL, 3)]),
                option("Creative and artistic skills", &[(CREATIVE, 3)]),
                option("Leadership and management", &[(LEADERSHIP, 3), ("management", 2)]),
                option(
                    "Communication and public speaking",
                    &[(COMMUNICATION, 3), (SOCIAL, 1)],
                ),
            ],
        },
        QuizQuestion {
            id: 8,
            prompt: "How competitive are you?",
            options: vec![
                option(
                    "Very competitive - I love challenges",
                    &[(COMPETITIVE, 3), (SPORTS, 1)],
                ),
                option("Moderately competitive", &[(COMPETITIVE, 2)]),
                option("Not very competitive", &[("collaborative", 2)]),
                option(
                    "I prefer collaboration over competition",
                    &[("collaborative", 3), (TEAMWORK, 2)],
                ),
            ],
        },
        QuizQuestion {
            id: 9,
            prompt: "What's your approach to learning?",
            options: vec![
                option("Hands-on experimentation", &[(TECHNICAL, 2), ("practical", 3)]),
                option("Creative exploration", &[(CREATIVE, 3), ("independent", 1)]),
                option("Structured guidance", &[("analytical", 2), ("management", 1)]),
                option("Discussion and debate", &[(COMMUNICATION, 3), (LITERARY, 2)]),
            ],
        },
        QuizQuestion {
            id: 10,
            prompt: "What kind of projects interest you?",
            options: vec![
                option(
                    "Building apps, robots, or tech solutions",
                    &[(TECHNICAL, 3), ("practical", 2)],
                ),
                option("Creating art, music, or performances", &[(CREATIVE, 3), (SOCIAL, 1)]),
                option("Organizing events or campaigns", &[("management", 3), (LEADERSHIP, 2)]),
                option("Writing, research, or advocacy", &[(LITERARY, 3), (SOCIAL, 2)]),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_bank_has_ten_questions_with_four_unique_options() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.questions().len(), 10);

        for (index, question) in bank.questions().iter().enumerate() {
            assert_eq!(question.id as usize, index + 1);
            assert_eq!(question.options.len(), 4, "question {}", question.id);
            let texts: HashSet<_> = question.options.iter().map(|option| option.text).collect();
            assert_eq!(texts.len(), 4, "duplicate option text in {}", question.id);
            assert!(question
                .options
                .iter()
                .flat_map(|option| option.weights.iter())
                .all(|(_, weight)| (1..=3).contains(weight)));
        }
    }

    #[test]
    fn public_view_exposes_option_text_only() {
        let bank = QuestionBank::standard();
        let view = bank.public_view();

        assert_eq!(view[0].question, "How do you prefer to spend your free time?");
        assert_eq!(view[0].options[0], "Coding or building tech projects");

        let payload = serde_json::to_value(&view).expect("serializes");
        assert!(!payload.to_string().contains("weights"));
    }

    #[test]
    fn lookup_misses_return_none() {
        let bank = QuestionBank::standard();
        assert!(bank.question(0).is_none());
        assert!(bank.question(11).is_none());
        assert!(bank
            .question(4)
            .and_then(|question| question.option("Chess tournaments"))
            .is_none());
    }
}
