//! API module
//!
//! Contains HTTP request handlers for the movie endpoints

pub mod movies;

pub use movies::{create_movie, delete_movie, get_movie, list_movies, update_movie};
