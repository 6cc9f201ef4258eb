use anyhow::{anyhow, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Form state for entering a new song.
#[derive(Default, Clone)]
pub(crate) struct SongForm {
    pub(crate) name: String,
    pub(crate) artist: String,
    pub(crate) genre: String,
    pub(crate) active: SongField,
    pub(crate) error: Option<String>,
}

/// Enumerates the fields within the song form to drive focus management.
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) enum SongField {
    Name,
    Artist,
    Genre,
}

impl Default for SongField {
    fn default() -> Self {
        SongField::Name
    }
}

impl SongForm {
    /// Cycle focus forward across the three fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            SongField::Name => SongField::Artist,
            SongField::Artist => SongField::Genre,
            SongField::Genre => SongField::Name,
        };
    }

    /// Cycle focus backward, for Shift-Tab.
    pub(crate) fn previous_field(&mut self) {
        self.active = match self.active {
            SongField::Name => SongField::Genre,
            SongField::Artist => SongField::Name,
            SongField::Genre => SongField::Artist,
        };
    }

    /// Insert a character into the active field.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            SongField::Name => self.name.push(ch),
            SongField::Artist => self.artist.push(ch),
            SongField::Genre => self.genre.push(ch),
        }
        true
    }

    /// Remove a character from the active field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            SongField::Name => {
                self.name.pop();
            }
            SongField::Artist => {
                self.artist.pop();
            }
            SongField::Genre => {
                self.genre.pop();
            }
        }
    }

    /// Validate and normalize form inputs before they reach the catalog. All
    /// three fields are required, so the catalog never sees an empty string.
    pub(crate) fn parse_inputs(&self) -> Result<(String, String, String)> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Song name is required."));
        }
        let artist = self.artist.trim();
        if artist.is_empty() {
            return Err(anyhow!("Artist is required."));
        }
        let genre = self.genre.trim();
        if genre.is_empty() {
            return Err(anyhow!("Genre is required."));
        }
        Ok((name.to_string(), artist.to_string(), genre.to_string()))
    }

    /// Render a styled line for the modal form.
    pub(crate) fn build_line(&self, field_name: &str, field: SongField) -> Line<'static> {
        let (value, is_active) = match field {
            SongField::Name => (&self.name, self.active == SongField::Name),
            SongField::Artist => (&self.artist, self.active == SongField::Artist),
            SongField::Genre => (&self.genre, self.active == SongField::Genre),
        };

        let display = if value.is_empty() {
            "<required>".to_string()
        } else {
            value.clone()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    /// Character length of the requested field, for cursor placement.
    pub(crate) fn value_len(&self, field: SongField) -> usize {
        match field {
            SongField::Name => self.name.chars().count(),
            SongField::Artist => self.artist.chars().count(),
            SongField::Genre => self.genre.chars().count(),
        }
    }
}

/// Which catalog operation the name prompt will drive once submitted.
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) enum PromptAction {
    Search,
    Delete,
}

/// Single-line prompt shared by the search and delete flows.
#[derive(Clone)]
pub(crate) struct NamePrompt {
    pub(crate) action: PromptAction,
    pub(crate) query: String,
}

impl NamePrompt {
    pub(crate) fn new(action: PromptAction) -> Self {
        Self {
            action,
            query: String::new(),
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.query.push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.query.pop();
    }

    /// The trimmed name to act on, or `None` while the prompt is blank.
    pub(crate) fn submitted_name(&self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Title shown on the prompt popup.
    pub(crate) fn title(&self) -> &'static str {
        match self.action {
            PromptAction::Search => "Enter the name of the song to search for",
            PromptAction::Delete => "Enter the name of the song to be deleted",
        }
    }
}
