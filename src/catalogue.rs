//! Movie donation catalogues.
//!
//! Two libraries live here. [`Library`] simply stores donated movies.
//! [`LookupLibrary`] takes an IMDb id, asks a [`MovieInfo`] service for the
//! title and year, stores the result and tells members through an
//! [`EmailServer`]. Both collaborators are traits so tests can substitute
//! stubs and mocks.
//!
//! Independent of the rover; kept as a standalone utility.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A movie, identified by its title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
}

impl Movie {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// A library that keeps donated movies and counts copies.
#[derive(Debug, Clone, Default)]
pub struct Library {
    catalogue: Vec<Movie>,
    copies: HashMap<Movie, u32>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one copy of `movie`.
    pub fn donate(&mut self, movie: Movie) {
        let copies = self.copies.entry(movie.clone()).or_insert(0);
        if *copies == 0 {
            self.catalogue.push(movie);
        }
        *copies += 1;
    }

    pub fn contains(&self, movie: &Movie) -> bool {
        self.copies.contains_key(movie)
    }

    /// Copies held of `movie`, zero if never donated.
    pub fn copies(&self, movie: &Movie) -> u32 {
        self.copies.get(movie).copied().unwrap_or(0)
    }

    /// Distinct movies in donation order.
    pub fn catalogue(&self) -> &[Movie] {
        &self.catalogue
    }
}

/// Source of movie details keyed by IMDb id.
///
/// Returns a field map; [`LookupLibrary`] reads the `title` and `year` keys.
pub trait MovieInfo {
    fn fetch(&self, imdb_id: &str) -> HashMap<String, String>;
}

/// Outbound mail.
pub trait EmailServer {
    fn send_email(&mut self, subject: &str, recipients: &str, body: &[String]);
}

/// Details stored for a donated movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    pub title: String,
    pub year: i32,
}

/// A lookup returned unusable movie details.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    #[error("movie info for '{imdb_id}' has no '{field}' field")]
    MissingField { imdb_id: String, field: &'static str },

    #[error("movie info for '{imdb_id}' has a non-numeric year '{year}'")]
    InvalidYear { imdb_id: String, year: String },
}

pub const NEW_MOVIE_SUBJECT: &str = "New Movie";
pub const ALL_MEMBERS: &str = "All members";

/// A library that looks donated movies up by IMDb id and announces them.
pub struct LookupLibrary<I, E> {
    movie_info: I,
    email_server: E,
    catalogue: HashMap<String, CatalogueEntry>,
}

impl<I: MovieInfo, E: EmailServer> LookupLibrary<I, E> {
    pub fn new(movie_info: I, email_server: E) -> Self {
        Self {
            movie_info,
            email_server,
            catalogue: HashMap::new(),
        }
    }

    /// Look up `imdb_id`, store the movie and email every member.
    ///
    /// On incomplete or malformed details nothing is stored and no email
    /// goes out.
    pub fn donate(&mut self, imdb_id: &str) -> Result<(), CatalogueError> {
        let info = self.movie_info.fetch(imdb_id);
        let field = |name: &'static str| {
            info.get(name).ok_or_else(|| CatalogueError::MissingField {
                imdb_id: imdb_id.to_string(),
                field: name,
            })
        };

        let title = field("title")?.clone();
        let year_text = field("year")?;
        let year = year_text
            .trim()
            .parse::<i32>()
            .map_err(|_| CatalogueError::InvalidYear {
                imdb_id: imdb_id.to_string(),
                year: year_text.clone(),
            })?;

        debug!("donated {imdb_id}: {title} ({year})");
        self.email_server.send_email(
            NEW_MOVIE_SUBJECT,
            ALL_MEMBERS,
            &[title.clone(), year.to_string()],
        );
        self.catalogue
            .insert(imdb_id.to_string(), CatalogueEntry { title, year });
        Ok(())
    }

    pub fn find_movie(&self, imdb_id: &str) -> Option<&CatalogueEntry> {
        self.catalogue.get(imdb_id)
    }

    pub fn email_server(&self) -> &E {
        &self.email_server
    }
}
