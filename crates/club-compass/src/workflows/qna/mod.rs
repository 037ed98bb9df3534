//! Community Q&A: freshers ask questions, anyone signed in can reply, and
//! only the author may delete a thread.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;


pub use domain::{Question, QuestionCreate, QuestionId, QuestionView, Reply, ReplyCreate};
pub use repository::{QuestionRepository, QNA_FETCH_LIMIT};
pub use router::qna_router;
pub use service::{QnaService, QnaServiceError};
