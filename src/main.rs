// Application entry point.
// Sets up the terminal, builds the Giphy client and gif store, and runs the
// event loop. The terminal is restored even when the loop errors.

mod app;
mod error;
mod gifs;
mod giphy;
mod storage;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use app::App;
use error::{GifgridError, Result};
use gifs::GifStore;
use giphy::GiphyClient;
use storage::FileStorage;

#[tokio::main]
async fn main() -> Result<()> {
    let client = GiphyClient::from_env()?;
    let storage = FileStorage::at_data_dir().ok_or_else(|| {
        GifgridError::Other("could not resolve a local data directory".to_string())
    })?;
    let store = GifStore::new(storage);
    let mut app = App::new(store, client);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}
