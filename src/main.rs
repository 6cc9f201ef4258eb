//! Binary entry point that glues the in-memory song catalog to the TUI.
//! Summarizing the bootstrapping pipeline here keeps the intent obvious when
//! revisiting the code: we start from an empty catalog and drive the Ratatui
//! event loop until the user quits; nothing persists across runs.
use personal_music_library::{run_app, App, Catalog};

/// Build the empty library and launch the Ratatui event loop.
///
/// Returning a `Result` bubbles up fatal terminal-setup problems (for example
/// running without a TTY) to the shell instead of crashing silently.
fn main() -> anyhow::Result<()> {
    let catalog = Catalog::new();
    let mut app = App::new(catalog);
    run_app(&mut app)
}
