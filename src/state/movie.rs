// Movie records
// The data model served by the API plus the seed data loaded at startup

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a movie record
pub type MovieId = String;

/// Upper bound (exclusive) for generated movie ids
pub const MAX_GENERATED_ID: u32 = 1_000_000;

/// Director of a movie
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Director {
    /// Given name
    pub firstname: String,
    /// Family name
    pub lastname: String,
}

impl Director {
    /// Create a director from first and last name
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }

    fn from_fields(fields: &Map<String, Value>) -> Self {
        let mut director = Director::default();
        for (key, value) in fields {
            if let Value::String(s) = value {
                match key.to_ascii_lowercase().as_str() {
                    "firstname" => director.firstname = s.clone(),
                    "lastname" => director.lastname = s.clone(),
                    _ => {}
                }
            }
        }
        director
    }
}

/// Movie record
///
/// Every field is optional on input: missing fields decode to their zero value,
/// matching what a client sending a partial record expects back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    /// Key within the collection
    pub id: MovieId,
    /// ISBN, stored as given
    pub isbn: String,
    /// Display title
    pub title: String,
    /// Director, serialized as `null` when absent
    pub director: Option<Director>,
}

impl Movie {
    /// Create a movie record
    pub fn new(
        id: impl Into<MovieId>,
        isbn: impl Into<String>,
        title: impl Into<String>,
        director: Option<Director>,
    ) -> Self {
        Self {
            id: id.into(),
            isbn: isbn.into(),
            title: title.into(),
            director,
        }
    }

    /// Draw a random id in `[0, MAX_GENERATED_ID)` formatted as a decimal string
    ///
    /// No collision check happens here; see `AppState::next_id`.
    pub fn random_id() -> MovieId {
        rand::thread_rng().gen_range(0..MAX_GENERATED_ID).to_string()
    }

    /// Best-effort decode of a request body
    ///
    /// Only the first JSON value in `body` is read; anything after it is
    /// ignored. Keys match case-insensitively and fields holding the wrong
    /// JSON type keep their zero value. Returns `None` when the body does not
    /// start with a JSON object.
    pub fn decode_lenient(body: &[u8]) -> Option<Self> {
        let first = serde_json::Deserializer::from_slice(body)
            .into_iter::<Value>()
            .next()?
            .ok()?;
        match first {
            Value::Object(fields) => Some(Self::from_fields(&fields)),
            _ => None,
        }
    }

    fn from_fields(fields: &Map<String, Value>) -> Self {
        let mut movie = Movie::default();
        for (key, value) in fields {
            match (key.to_ascii_lowercase().as_str(), value) {
                ("id", Value::String(s)) => movie.id = s.clone(),
                ("isbn", Value::String(s)) => movie.isbn = s.clone(),
                ("title", Value::String(s)) => movie.title = s.clone(),
                ("director", Value::Object(d)) => movie.director = Some(Director::from_fields(d)),
                ("director", Value::Null) => movie.director = None,
                _ => {}
            }
        }
        movie
    }
}

/// The two records every fresh store starts with
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie::new(
            "1",
            "123456",
            "Movie One",
            Some(Director::new("Lebron", "James")),
        ),
        Movie::new(
            "2",
            "654321",
            "Movie Two",
            Some(Director::new("Joe", "Biden")),
        ),
    ]
}
