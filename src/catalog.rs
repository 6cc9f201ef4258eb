//! The sorted song catalog at the heart of the application. Every function in
//! this module tries to encapsulate one operation on the ordered collection so
//! the rest of the codebase can stay focused on UI state management. The
//! catalog never formats user-facing text; it only returns structured results
//! that the front-end turns into messages.

use std::cmp::Ordering;

use thiserror::Error;

use crate::models::Song;

/// Outcomes a catalog operation can reject with. Both variants carry the
/// offending song name so the front-end can build its message without holding
/// a reference into the catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Insert attempted with a name already present; the catalog is unchanged.
    #[error("a song named '{0}' is already in the library")]
    DuplicateName(String),
    /// Delete referenced a name absent from the catalog; unchanged as well.
    #[error("no song named '{0}' is in the library")]
    NotFound(String),
}

/// Ordered collection of songs, kept strictly ascending by song name under
/// byte-wise comparison. The catalog is the sole owner of every entry: songs
/// enter through a successful [`Catalog::insert`] and leave through
/// [`Catalog::delete`] or [`Catalog::clear`]. Queries hand out borrowed views
/// only, so the borrow checker prevents a caller from retaining one across a
/// later mutation.
#[derive(Debug, Default)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self { songs: Vec::new() }
    }

    /// Insert a song at its alphabetical position. A single forward scan both
    /// detects duplicates and locates the first entry with a greater name, so
    /// there is no separate exists-check pass. On `DuplicateName` the catalog
    /// is left untouched.
    pub fn insert(&mut self, song: Song) -> Result<(), CatalogError> {
        for (index, existing) in self.songs.iter().enumerate() {
            match song.name.as_str().cmp(existing.name.as_str()) {
                Ordering::Equal => return Err(CatalogError::DuplicateName(song.name)),
                Ordering::Less => {
                    self.songs.insert(index, song);
                    return Ok(());
                }
                Ordering::Greater => {}
            }
        }
        // Every existing name compared smaller, so the new song goes last.
        self.songs.push(song);
        Ok(())
    }

    /// Look up a song by exact name. A plain element-by-element scan is all
    /// that is needed; names are unique so the first match is the only match.
    pub fn find(&self, name: &str) -> Option<&Song> {
        self.songs.iter().find(|song| song.name == name)
    }

    /// Remove the song with the given name, preserving the order of the
    /// remaining entries. Returns `NotFound` and leaves the catalog unchanged
    /// when no entry matches.
    pub fn delete(&mut self, name: &str) -> Result<(), CatalogError> {
        match self.songs.iter().position(|song| song.name == name) {
            Some(index) => {
                self.songs.remove(index);
                Ok(())
            }
            None => Err(CatalogError::NotFound(name.to_string())),
        }
    }

    /// Iterate over every song in ascending name order. The iterator is lazy
    /// and restartable: repeated calls on an unchanged catalog yield the same
    /// sequence.
    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    /// Number of songs currently held.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the library holds no songs. The front-end uses this to render
    /// its empty-library message; the catalog itself only reports emptiness.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Drop every entry, leaving the same valid empty state as a freshly
    /// constructed catalog. Idempotent.
    pub fn clear(&mut self) {
        self.songs.clear();
    }
}
