//! Static site content: books, TV work and author info.
//!
//! Built once at startup and shared read-only with the HTTP layer.

pub mod models;

pub use models::{Author, Book, SiteInfo, TvWork};

pub const AUTHOR_NAME: &str = "Patrick Somerville";

const AUTHOR_BIO: &str = "Author of Trouble, The Cradle, This Bright River, and The Universe in \
Miniature in Miniature; creator of Station Eleven; always walking toward the horizon.";

const NAVIGATION: [&str; 5] = ["About", "Books", "TV", "Dev", "Space"];

#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    tv: Vec<TvWork>,
    site: SiteInfo,
}

impl Catalog {
    pub fn new(books: Vec<Book>, tv: Vec<TvWork>, site: SiteInfo) -> Self {
        Self { books, tv, site }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn tv(&self) -> &[TvWork] {
        &self.tv
    }

    pub fn site(&self) -> &SiteInfo {
        &self.site
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(seed_books(), seed_tv(), seed_site())
    }
}

fn book(title: &str, year: i32, description: &str, slug: &str, palette: &[&str]) -> Book {
    Book {
        title: title.to_string(),
        year,
        description: description.to_string(),
        slug: slug.to_string(),
        palette: palette.iter().map(|c| c.to_string()).collect(),
    }
}

fn seed_books() -> Vec<Book> {
    vec![
        book(
            "The Cradle",
            2009,
            "A tender Midwestern odyssey about love, promises, and departures.",
            "the-cradle",
            &["#e3f2fd", "#f5f0e6", "#9b6b43", "#fff4b2"],
        ),
        book(
            "This Bright River",
            2012,
            "A return to Wisconsin water and memory, a heat-haze of contradictions.",
            "this-bright-river",
            &["#fff7cc", "#1e3a5f", "#ffb26b"],
        ),
        book(
            "The Universe in Miniature in Miniature",
            2010,
            "Cosmic play in small models, nested realities and tender jokes.",
            "tuimim",
            &["#1a1a1a", "#ff6b6b", "#f7c4e4", "#111827"],
        ),
        book(
            "Trouble: Stories",
            2006,
            "Stark rooms, winter light, difficult truths in quiet air.",
            "trouble-stories",
            &["#ffffff", "#111827", "#b0b8c1", "#c41e3a"],
        ),
    ]
}

fn seed_tv() -> Vec<TvWork> {
    vec![
        TvWork {
            title: "Maniac".to_string(),
            role: "Writer / Executive Producer".to_string(),
        },
        TvWork {
            title: "Station Eleven".to_string(),
            role: "Creator / Showrunner".to_string(),
        },
    ]
}

fn seed_site() -> SiteInfo {
    SiteInfo {
        author: Author {
            name: AUTHOR_NAME.to_string(),
            bio: AUTHOR_BIO.to_string(),
        },
        navigation: NAVIGATION.iter().map(|n| n.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_slugs_are_unique() {
        let catalog = Catalog::default();
        let slugs: HashSet<_> = catalog.books().iter().map(|b| b.slug.as_str()).collect();
        assert_eq!(slugs.len(), catalog.books().len());
    }

    #[test]
    fn test_bio_reads_as_one_sentence() {
        let site = Catalog::default().site().clone();
        assert!(site.author.bio.contains("Miniature in Miniature; creator of Station Eleven"));
        assert_eq!(site.navigation.len(), 5);
    }
}
