//! Personality quiz: the static question bank, answer scoring, classification,
//! and the service/routes that persist each caller's latest result.

pub mod bank;
pub mod domain;
mod engine;
mod personality;
pub mod repository;
pub mod router;
pub mod service;


pub use bank::QuestionBank;
pub use domain::{Answer, QuestionView, QuizOption, QuizQuestion, QuizSubmission, TraitScores};
pub use engine::{QuizEngine, QuizOutcome};
pub use personality::Personality;
pub use repository::{QuizResult, QuizResultRecord, QuizResultRepository};
pub use router::quiz_router;
pub use service::{QuizService, QuizServiceError};
