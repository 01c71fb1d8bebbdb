// Application state management
// Contains the ordered movie collection and the API mode handlers consult

use crate::config::ApiMode;
use crate::state::movie::{seed_movies, Movie, MovieId};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Random draws strict mode makes before giving up on a new id
pub const MAX_ID_ATTEMPTS: usize = 1_000;

/// State shared between request handlers
///
/// A single lock guards the whole collection so every handler's
/// scan-plus-mutation is atomic with respect to the others.
pub type SharedState = Arc<RwLock<AppState>>;

/// Main application state
/// Holds the movie collection in insertion order
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Movies in collection order
    movies: Vec<Movie>,
    /// How handlers treat unknown ids and malformed bodies
    mode: ApiMode,
}

impl AppState {
    /// Create an empty state
    pub fn new(mode: ApiMode) -> Self {
        Self {
            movies: Vec::new(),
            mode,
        }
    }

    /// Create a state holding the two seed movies
    pub fn seeded(mode: ApiMode) -> Self {
        Self {
            movies: seed_movies(),
            mode,
        }
    }

    /// Wrap this state for sharing across handlers
    pub fn into_shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// The API mode this state was created with
    pub fn mode(&self) -> ApiMode {
        self.mode
    }

    /// All movies in collection order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Number of movies in the collection
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// First movie with the given id, if any
    pub fn find_movie(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    /// Index of the first movie with the given id, if any
    pub fn position(&self, id: &str) -> Option<usize> {
        self.movies.iter().position(|movie| movie.id == id)
    }

    /// Whether any movie has the given id
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Pick an id for a new movie
    ///
    /// Compat mode takes the first random draw even if it is already in use.
    /// Strict mode redraws up to `MAX_ID_ATTEMPTS` times and gives up with
    /// `None` if every draw was taken.
    pub fn next_id(&self) -> Option<MovieId> {
        self.next_id_with(Movie::random_id)
    }

    fn next_id_with(&self, mut draw: impl FnMut() -> MovieId) -> Option<MovieId> {
        if !self.mode.is_strict() {
            return Some(draw());
        }
        (0..MAX_ID_ATTEMPTS)
            .map(|_| draw())
            .find(|id| !self.contains(id))
    }

    /// Append a movie under a freshly generated id
    /// Any id already on the movie is discarded. Returns the stored record,
    /// or `None` (and no mutation) if no free id could be found.
    pub fn add_movie(&mut self, mut movie: Movie) -> Option<Movie> {
        movie.id = self.next_id()?;
        self.movies.push(movie.clone());
        Some(movie)
    }

    /// Replace the first movie with the given id
    ///
    /// The old record is removed from its position and the replacement, with
    /// its id forced to `id`, is appended to the end of the collection.
    /// Returns the stored record, or `None` (and no mutation) if nothing matched.
    pub fn replace_movie(&mut self, id: &str, movie: Movie) -> Option<Movie> {
        let index = self.position(id)?;
        Some(self.replace_at(index, movie))
    }

    /// Replace the movie at `index`, keeping its id and moving it to the end
    ///
    /// `index` must come from `position` under the same lock.
    pub fn replace_at(&mut self, index: usize, mut movie: Movie) -> Movie {
        let old = self.movies.remove(index);
        movie.id = old.id;
        self.movies.push(movie.clone());
        movie
    }

    /// Remove the first movie with the given id
    /// Remaining movies keep their order. Returns the removed movie if it existed.
    pub fn remove_movie(&mut self, id: &str) -> Option<Movie> {
        let index = self.position(id)?;
        Some(self.movies.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::movie::{Director, MAX_GENERATED_ID};

    fn ids(state: &AppState) -> Vec<&str> {
        state.movies().iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(ApiMode::Compat);
        assert!(state.is_empty());
        assert_eq!(state.mode(), ApiMode::Compat);

        let seeded = AppState::seeded(ApiMode::Strict);
        assert_eq!(seeded.len(), 2);
        assert_eq!(ids(&seeded), vec!["1", "2"]);
        assert_eq!(seeded.mode(), ApiMode::Strict);
    }

    #[test]
    fn test_find_movie_first_match_wins() {
        let mut state = AppState::new(ApiMode::Compat);
        state.movies.push(Movie::new("5", "a", "First", None));
        state.movies.push(Movie::new("5", "b", "Second", None));

        assert_eq!(state.find_movie("5").unwrap().title, "First");
        assert!(state.find_movie("6").is_none());
    }

    #[test]
    fn test_add_movie_discards_given_id() {
        let mut state = AppState::seeded(ApiMode::Compat);
        let created = state
            .add_movie(Movie::new(
                "should-be-ignored",
                "999",
                "New",
                Some(Director::new("A", "B")),
            ))
            .unwrap();

        assert_ne!(created.id, "should-be-ignored");
        let value: u32 = created.id.parse().unwrap();
        assert!(value < MAX_GENERATED_ID);
        assert_eq!(state.len(), 3);
        assert_eq!(state.movies().last(), Some(&created));
    }

    #[test]
    fn test_strict_next_id_avoids_collisions() {
        let mut state = AppState::new(ApiMode::Strict);
        for _ in 0..200 {
            assert!(state.add_movie(Movie::default()).is_some());
        }
        let mut seen: Vec<&str> = ids(&state);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 200);
    }

    #[test]
    fn test_strict_next_id_gives_up_when_draws_are_taken() {
        let mut state = AppState::new(ApiMode::Strict);
        state.movies.push(Movie::new("5", "", "Taken", None));

        let mut draws = 0;
        let id = state.next_id_with(|| {
            draws += 1;
            "5".to_string()
        });
        assert!(id.is_none());
        assert_eq!(draws, MAX_ID_ATTEMPTS);

        let mut calls = 0;
        let id = state.next_id_with(|| {
            calls += 1;
            let id = if calls < 3 { "5" } else { "6" };
            id.to_string()
        });
        assert_eq!(id.as_deref(), Some("6"));
    }

    #[test]
    fn test_compat_next_id_accepts_collisions() {
        let mut state = AppState::new(ApiMode::Compat);
        state.movies.push(Movie::new("5", "", "Taken", None));
        assert_eq!(state.next_id_with(|| "5".to_string()).as_deref(), Some("5"));
    }

    #[test]
    fn test_replace_at_keeps_id() {
        let mut state = AppState::seeded(ApiMode::Compat);
        let index = state.position("1").unwrap();
        let replaced = state.replace_at(index, Movie::new("zzz", "", "Again", None));
        assert_eq!(replaced.id, "1");
        assert_eq!(ids(&state), vec!["2", "1"]);
    }

    #[test]
    fn test_replace_movie_moves_to_end() {
        let mut state = AppState::seeded(ApiMode::Compat);
        state.add_movie(Movie::new("", "3", "Third", None)).unwrap();

        let replaced = state
            .replace_movie("1", Movie::new("other", "111", "Updated", None))
            .unwrap();

        assert_eq!(replaced.id, "1");
        assert_eq!(state.len(), 3);
        assert_eq!(state.movies()[0].id, "2");
        assert_eq!(state.movies().last().unwrap().id, "1");
        assert_eq!(state.movies().last().unwrap().title, "Updated");
    }

    #[test]
    fn test_replace_missing_movie_is_noop() {
        let mut state = AppState::seeded(ApiMode::Compat);
        assert!(state
            .replace_movie("999", Movie::new("", "", "Ghost", None))
            .is_none());
        assert_eq!(ids(&state), vec!["1", "2"]);
    }

    #[test]
    fn test_remove_movie() {
        let mut state = AppState::seeded(ApiMode::Compat);
        state.add_movie(Movie::default()).unwrap();
        let third = state.movies()[2].id.clone();

        let removed = state.remove_movie("2").unwrap();
        assert_eq!(removed.title, "Movie Two");
        assert_eq!(ids(&state), vec!["1", third.as_str()]);

        assert!(state.remove_movie("2").is_none());
        assert_eq!(state.len(), 2);
    }
}
