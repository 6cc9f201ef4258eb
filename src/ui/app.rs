use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::{Catalog, CatalogError};
use crate::models::Song;

use super::forms::{NamePrompt, PromptAction, SongField, SongForm};
use super::helpers::{centered_rect, surface_error};
use super::screens::{LibraryScreen, PrintScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Message shown whenever an operation runs against an empty library.
const EMPTY_LIBRARY_MESSAGE: &str = "The music library is empty.";
/// Message shown when a key outside the command set is pressed.
const INVALID_COMMAND_MESSAGE: &str = "Invalid command.";

/// High-level navigation states. Keeping this explicit makes it easy to reason
/// about which rendering path runs and what keyboard shortcuts should do. The
/// print view carries the library cursor along so leaving it restores the
/// previous selection.
enum Screen {
    Library(LibraryScreen),
    Print {
        listing: PrintScreen,
        library: LibraryScreen,
    },
}

/// Fine-grained modes scoped to the current screen.
enum Mode {
    Normal,
    Inserting(SongForm),
    Prompting(NamePrompt),
    ShowingSong(Song),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Turn a catalog rejection into the wording shown to the user. The catalog
/// itself never formats text, so all user-facing phrasing lives here.
fn rejection_message(err: &CatalogError) -> String {
    match err {
        CatalogError::DuplicateName(name) => format!(
            "A song with the name '{name}' is already in the music library. No new song entered."
        ),
        CatalogError::NotFound(name) => {
            format!("The song name '{name}' was not found in the music library.")
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    catalog: Catalog,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            screen: Screen::Library(LibraryScreen::default()),
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Dispatch a key press to the active mode. Returns `true` when the
    /// application should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Inserting(form) => self.handle_insert_form(code, form)?,
            Mode::Prompting(prompt) => self.handle_name_prompt(code, prompt)?,
            // Any key dismisses the song details popup.
            Mode::ShowingSong(_) => Mode::Normal,
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char(ch) => match ch.to_ascii_uppercase() {
                'I' => {
                    self.clear_status();
                    return Ok(Mode::Inserting(SongForm::default()));
                }
                'S' => {
                    if self.catalog.is_empty() {
                        self.set_status(EMPTY_LIBRARY_MESSAGE, StatusKind::Error);
                    } else {
                        self.clear_status();
                        return Ok(Mode::Prompting(NamePrompt::new(PromptAction::Search)));
                    }
                }
                'D' => {
                    if self.catalog.is_empty() {
                        self.set_status(EMPTY_LIBRARY_MESSAGE, StatusKind::Error);
                    } else {
                        self.clear_status();
                        return Ok(Mode::Prompting(NamePrompt::new(PromptAction::Delete)));
                    }
                }
                'P' => {
                    self.clear_status();
                    self.toggle_print_view();
                }
                'Q' => {
                    self.catalog.clear();
                    *exit = true;
                }
                _ => self.set_status(INVALID_COMMAND_MESSAGE, StatusKind::Error),
            },
            KeyCode::Esc => match self.screen {
                Screen::Library(_) => {
                    self.catalog.clear();
                    *exit = true;
                }
                Screen::Print { .. } => {
                    self.clear_status();
                    self.toggle_print_view();
                }
            },
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-5),
            KeyCode::PageDown => self.move_cursor(5),
            KeyCode::Home => match &mut self.screen {
                Screen::Library(library) => library.select_first(),
                Screen::Print { listing, .. } => listing.reset(),
            },
            KeyCode::End => {
                let len = self.catalog.len();
                if let Screen::Library(library) = &mut self.screen {
                    library.select_last(len);
                }
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_insert_form(&mut self, code: KeyCode, mut form: SongForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.clear_status();
                Ok(Mode::Normal)
            }
            KeyCode::Tab => {
                form.toggle_field();
                Ok(Mode::Inserting(form))
            }
            KeyCode::BackTab => {
                form.previous_field();
                Ok(Mode::Inserting(form))
            }
            KeyCode::Backspace => {
                form.backspace();
                Ok(Mode::Inserting(form))
            }
            KeyCode::Enter => match form.parse_inputs() {
                Ok((name, artist, genre)) => {
                    match self.catalog.insert(Song::new(name.clone(), artist, genre)) {
                        Ok(()) => {
                            self.select_song(&name);
                            self.set_status(
                                format!("Added '{name}' to the music library."),
                                StatusKind::Info,
                            );
                        }
                        Err(err) => {
                            self.set_status(rejection_message(&err), StatusKind::Error);
                        }
                    }
                    Ok(Mode::Normal)
                }
                Err(err) => {
                    form.error = Some(surface_error(&err));
                    Ok(Mode::Inserting(form))
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
                Ok(Mode::Inserting(form))
            }
            _ => Ok(Mode::Inserting(form)),
        }
    }

    fn handle_name_prompt(&mut self, code: KeyCode, mut prompt: NamePrompt) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.clear_status();
                Ok(Mode::Normal)
            }
            KeyCode::Backspace => {
                prompt.backspace();
                Ok(Mode::Prompting(prompt))
            }
            KeyCode::Char(ch) => {
                prompt.push_char(ch);
                Ok(Mode::Prompting(prompt))
            }
            KeyCode::Enter => {
                let Some(name) = prompt.submitted_name() else {
                    // Nothing typed yet; keep the prompt open.
                    return Ok(Mode::Prompting(prompt));
                };
                match prompt.action {
                    PromptAction::Search => match self.catalog.find(&name) {
                        Some(song) => {
                            let song = song.clone();
                            self.set_status(
                                format!("The song name '{name}' was found in the music library."),
                                StatusKind::Info,
                            );
                            Ok(Mode::ShowingSong(song))
                        }
                        None => {
                            self.set_status(
                                rejection_message(&CatalogError::NotFound(name)),
                                StatusKind::Error,
                            );
                            Ok(Mode::Normal)
                        }
                    },
                    PromptAction::Delete => {
                        match self.catalog.delete(&name) {
                            Ok(()) => {
                                self.clamp_selection();
                                self.set_status(
                                    format!(
                                        "Deleting a song with name '{name}' from the music library."
                                    ),
                                    StatusKind::Info,
                                );
                            }
                            Err(err) => {
                                self.set_status(rejection_message(&err), StatusKind::Error);
                            }
                        }
                        Ok(Mode::Normal)
                    }
                }
            }
            _ => Ok(Mode::Prompting(prompt)),
        }
    }

    /// Swap between the library list and the full print-style listing.
    fn toggle_print_view(&mut self) {
        let current = mem::replace(&mut self.screen, Screen::Library(LibraryScreen::default()));
        self.screen = match current {
            Screen::Library(library) => Screen::Print {
                listing: PrintScreen::default(),
                library,
            },
            Screen::Print { library, .. } => Screen::Library(library),
        };
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.catalog.len();
        match &mut self.screen {
            Screen::Library(library) => library.move_selection(delta, len),
            Screen::Print { listing, .. } => listing.scroll_by(delta as i32),
        }
    }

    /// Point the library cursor at the named song, if present.
    fn select_song(&mut self, name: &str) {
        let position = self.catalog.iter().position(|song| song.name == name);
        if let (Some(index), Screen::Library(library)) = (position, &mut self.screen) {
            library.selected = index;
        }
    }

    /// Re-validate the cursor after a deletion shrank the list.
    fn clamp_selection(&mut self) {
        let len = self.catalog.len();
        match &mut self.screen {
            Screen::Library(library) => library.clamp(len),
            Screen::Print { library, .. } => library.clamp(len),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Library(library) => self.draw_library(frame, content_area, library),
            Screen::Print { listing, .. } => self.draw_print(frame, content_area, listing),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::Inserting(form) => self.draw_song_form(frame, area, form),
            Mode::Prompting(prompt) => self.draw_name_prompt(frame, area, prompt),
            Mode::ShowingSong(song) => self.draw_song_details(frame, area, song),
            Mode::Normal => {}
        }
    }

    fn draw_library(&self, frame: &mut Frame, area: Rect, library: &LibraryScreen) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Music Library");

        if self.catalog.is_empty() {
            let message = Paragraph::new(EMPTY_LIBRARY_MESSAGE)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let items: Vec<ListItem> = self
            .catalog
            .iter()
            .map(|song| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        song.display_title(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("  {}", song.genre),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let count = self.catalog.len();
        let title = if count == 1 {
            "Music Library (1 song)".to_string()
        } else {
            format!("Music Library ({count} songs)")
        };
        let list = List::new(items)
            .block(block.title(title))
            .highlight_style(Style::default().fg(Color::Yellow));

        let mut state = ListState::default();
        state.select(Some(library.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_print(&self, frame: &mut Frame, area: Rect, listing: &PrintScreen) {
        let block = Block::default()
            .title("My Personal Music Library:")
            .borders(Borders::ALL);

        if self.catalog.is_empty() {
            let message = Paragraph::new(EMPTY_LIBRARY_MESSAGE)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let mut lines = Vec::with_capacity(self.catalog.len() * 4);
        for song in self.catalog.iter() {
            lines.push(Line::from(Span::styled(
                song.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(song.artist.clone()));
            lines.push(Line::from(song.genre.clone()));
            lines.push(Line::from(""));
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((listing.scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.screen, &self.mode) {
            (_, Mode::Inserting(_)) => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Save   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Next Field   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (_, Mode::Prompting(_)) => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Confirm   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (_, Mode::ShowingSong(_)) => Line::from(vec![
                Span::styled("[Any Key]", key_style),
                Span::raw(" Close"),
            ]),
            (Screen::Print { .. }, Mode::Normal) => Line::from(vec![
                Span::styled("[\u{2191}\u{2193}]", key_style),
                Span::raw(" Scroll   "),
                Span::styled("[p/Esc]", key_style),
                Span::raw(" Back   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Library(_), Mode::Normal) => Line::from(vec![
                Span::styled("[i]", key_style),
                Span::raw(" Insert   "),
                Span::styled("[d]", key_style),
                Span::raw(" Delete   "),
                Span::styled("[s]", key_style),
                Span::raw(" Search   "),
                Span::styled("[p]", key_style),
                Span::raw(" Print   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_song_form(&self, frame: &mut Frame, area: Rect, form: &SongForm) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Insert Song").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let name_line = form.build_line("Song name", SongField::Name);
        let artist_line = form.build_line("Artist", SongField::Artist);
        let genre_line = form.build_line("Genre", SongField::Genre);

        let mut lines = vec![name_line, artist_line, genre_line, Line::from("")];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save \u{2022} Tab to switch \u{2022} Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (cursor_x, cursor_y) = match form.active {
            SongField::Name => {
                let prefix = "Song name: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(SongField::Name) as u16,
                    inner.y,
                )
            }
            SongField::Artist => {
                let prefix = "Artist: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(SongField::Artist) as u16,
                    inner.y + 1,
                )
            }
            SongField::Genre => {
                let prefix = "Genre: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(SongField::Genre) as u16,
                    inner.y + 2,
                )
            }
        };
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_name_prompt(&self, frame: &mut Frame, area: Rect, prompt: &NamePrompt) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let block = Block::default().borders(Borders::ALL).title(prompt.title());
        let paragraph = Paragraph::new(Span::raw(format!("Song name: {}", prompt.query)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let cursor_x = inner.x + "Song name: ".len() as u16 + prompt.query.chars().count() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn draw_song_details(&self, frame: &mut Frame, area: Rect, song: &Song) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Song Found").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(Span::styled(
                song.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Artist: {}", song.artist)),
            Line::from(format!("Genre: {}", song.genre)),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to continue",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code).unwrap()
    }

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn app_with_songs(names: &[&str]) -> App {
        let mut catalog = Catalog::new();
        for name in names {
            catalog
                .insert(Song::new(*name, "Artist", "Genre"))
                .unwrap();
        }
        App::new(catalog)
    }

    fn status_text(app: &App) -> &str {
        app.status.as_ref().map(|s| s.text.as_str()).unwrap_or("")
    }

    #[test]
    fn test_insert_flow_adds_song() {
        let mut app = App::new(Catalog::new());
        press(&mut app, KeyCode::Char('i'));
        assert!(matches!(app.mode, Mode::Inserting(_)));

        type_str(&mut app, "Yesterday");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Beatles");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Rock");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.catalog.len(), 1);
        let song = app.catalog.find("Yesterday").unwrap();
        assert_eq!(song.artist, "Beatles");
        assert_eq!(status_text(&app), "Added 'Yesterday' to the music library.");
    }

    #[test]
    fn test_insert_form_requires_every_field() {
        let mut app = App::new(Catalog::new());
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Enter);

        match &app.mode {
            Mode::Inserting(form) => {
                assert_eq!(form.error.as_deref(), Some("Song name is required."));
            }
            _ => panic!("expected the form to stay open"),
        }
        assert!(app.catalog.is_empty());
    }

    #[test]
    fn test_duplicate_insert_is_reported() {
        let mut app = app_with_songs(&["Imagine"]);
        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "Imagine");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Someone");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Pop");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.catalog.len(), 1);
        assert_eq!(
            status_text(&app),
            "A song with the name 'Imagine' is already in the music library. No new song entered."
        );
    }

    #[test]
    fn test_search_on_empty_library_short_circuits() {
        let mut app = App::new(Catalog::new());
        press(&mut app, KeyCode::Char('s'));
        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(status_text(&app), EMPTY_LIBRARY_MESSAGE);
    }

    #[test]
    fn test_search_found_shows_details_popup() {
        let mut app = app_with_songs(&["Imagine"]);
        press(&mut app, KeyCode::Char('s'));
        type_str(&mut app, "Imagine");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::ShowingSong(_)));
        assert_eq!(
            status_text(&app),
            "The song name 'Imagine' was found in the music library."
        );

        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.mode, Mode::Normal));
    }

    #[test]
    fn test_search_not_found_reports_error() {
        let mut app = app_with_songs(&["Imagine"]);
        press(&mut app, KeyCode::Char('s'));
        type_str(&mut app, "Nowhere Man");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(
            status_text(&app),
            "The song name 'Nowhere Man' was not found in the music library."
        );
    }

    #[test]
    fn test_delete_flow_removes_song() {
        let mut app = app_with_songs(&["Alpha", "Mike", "Zulu"]);
        press(&mut app, KeyCode::Char('d'));
        type_str(&mut app, "Mike");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.catalog.len(), 2);
        assert!(app.catalog.find("Mike").is_none());
        assert_eq!(
            status_text(&app),
            "Deleting a song with name 'Mike' from the music library."
        );

        // Deleting again must report not-found and leave the rest alone.
        press(&mut app, KeyCode::Char('d'));
        type_str(&mut app, "Mike");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.catalog.len(), 2);
        assert_eq!(
            status_text(&app),
            "The song name 'Mike' was not found in the music library."
        );
    }

    #[test]
    fn test_delete_clamps_selection() {
        let mut app = app_with_songs(&["Alpha", "Zulu"]);
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char('d'));
        type_str(&mut app, "Zulu");
        press(&mut app, KeyCode::Enter);

        match &app.screen {
            Screen::Library(library) => assert_eq!(library.selected, 0),
            Screen::Print { .. } => panic!("expected the library screen"),
        }
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        let mut app = App::new(Catalog::new());
        press(&mut app, KeyCode::Char('I'));
        assert!(matches!(app.mode, Mode::Inserting(_)));
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('S'));
        assert_eq!(status_text(&app), EMPTY_LIBRARY_MESSAGE);
    }

    #[test]
    fn test_invalid_command_sets_status() {
        let mut app = App::new(Catalog::new());
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(status_text(&app), INVALID_COMMAND_MESSAGE);
    }

    #[test]
    fn test_print_toggle_preserves_selection() {
        let mut app = app_with_songs(&["Alpha", "Mike", "Zulu"]);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('p'));
        assert!(matches!(app.screen, Screen::Print { .. }));

        press(&mut app, KeyCode::Char('p'));
        match &app.screen {
            Screen::Library(library) => assert_eq!(library.selected, 1),
            Screen::Print { .. } => panic!("expected the library screen"),
        }
    }

    #[test]
    fn test_quit_tears_down_catalog() {
        let mut app = app_with_songs(&["Alpha"]);
        let exit = press(&mut app, KeyCode::Char('q'));
        assert!(exit);
        assert!(app.catalog.is_empty());
    }

    #[test]
    fn test_blank_prompt_submission_keeps_prompt_open() {
        let mut app = app_with_songs(&["Alpha"]);
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.mode, Mode::Prompting(_)));
    }
}
