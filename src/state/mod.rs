// State management module
// Handles the movie collection and the records it holds

/// The shared movie collection and its operations
pub mod app_state;
/// Movie and director records, id generation and seed data
pub mod movie;

pub use app_state::{AppState, SharedState, MAX_ID_ATTEMPTS};
pub use movie::{seed_movies, Director, Movie, MovieId, MAX_GENERATED_ID};
