use serde::{Deserialize, Serialize};

use shelfstock_catalog::{Book, Merchandise, Movie};

/// One stocked item: exactly one record kind is active, never none.
///
/// The set of kinds is closed at compile time. Operations dispatch on the
/// active variant with a single `match`, so adding a new operation never
/// touches the record types — the inverse trade-off from virtual dispatch,
/// where a new operation would have to visit every kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Media {
    Book(Book),
    Movie(Movie),
}

impl Media {
    /// Stable tag for the active record kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Media::Book(_) => "book",
            Media::Movie(_) => "movie",
        }
    }

    /// Resolve the active record kind and hand it to `f` through the shared
    /// merchandise capability.
    ///
    /// This is the store's dispatch seam: aggregate operations are written
    /// once against [`Merchandise`] and stay ignorant of the concrete kind.
    pub fn visit<R>(&self, f: impl FnOnce(&dyn Merchandise) -> R) -> R {
        match self {
            Media::Book(book) => f(book),
            Media::Movie(movie) => f(movie),
        }
    }
}

impl Merchandise for Media {
    fn unit_price(&self) -> f64 {
        match self {
            Media::Book(book) => book.unit_price(),
            Media::Movie(movie) => movie.unit_price(),
        }
    }

    fn quantity(&self) -> u64 {
        match self {
            Media::Book(book) => book.quantity(),
            Media::Movie(movie) => movie.quantity(),
        }
    }
}

impl From<Book> for Media {
    fn from(book: Book) -> Self {
        Media::Book(book)
    }
}

impl From<Movie> for Media {
    fn from(movie: Movie) -> Self {
        Media::Movie(movie)
    }
}
