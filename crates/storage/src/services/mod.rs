pub mod grid;
pub mod seeding;
pub mod snapshot;
pub mod standings;
