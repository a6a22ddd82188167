pub mod seaorm;

pub use seaorm::{Persisted, SeaOrmStore};
