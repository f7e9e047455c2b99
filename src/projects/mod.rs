pub mod entry;
pub mod seeded;
