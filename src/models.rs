//! Domain models passed throughout the TUI. The intent is that these types
//! stay light-weight data holders so other layers can focus on presentation
//! and catalog bookkeeping. Keeping the commentary here means later refactors
//! can reconstruct the assumptions even if other context is lost.

#[derive(Debug, Clone, PartialEq, Eq)]
/// In-memory representation of a song. The three fields are exactly what the
/// library tracks; there is no surrogate id because the song name itself is
/// the unique key inside [`crate::catalog::Catalog`].
pub struct Song {
    /// Name displayed in lists and used as the catalog's unique sort key.
    pub name: String,
    /// Artist field used both for display and the card subtitle.
    pub artist: String,
    /// Genre shown underneath the title in list views.
    pub genre: String,
}

impl Song {
    /// Build a song from its three text fields. Callers are expected to have
    /// trimmed the values already (the insert form does this during
    /// validation).
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            genre: genre.into(),
        }
    }

    /// Compose a `Name - Artist` string that gracefully omits the hyphen if
    /// the artist is blank. List views rely on this ready-to-use formatting.
    pub fn display_title(&self) -> String {
        if self.artist.trim().is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.artist)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_includes_artist() {
        let song = Song::new("Yesterday", "Beatles", "Rock");
        assert_eq!(song.display_title(), "Yesterday - Beatles");
    }

    #[test]
    fn test_display_title_omits_blank_artist() {
        let song = Song::new("Yesterday", "  ", "Rock");
        assert_eq!(song.display_title(), "Yesterday");
    }
}
