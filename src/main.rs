//! Draws a titled view with a short item list, parks the cursor below it and exits.
//!
//! Usage: `cellframe [settings.json]`

use std::error::Error;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Duration;

use cellframe::terminal::crossterm::CrosstermTerminal;
use cellframe::terminal::terminal_guard::ScreenGuard;
use cellframe::{load_settings, Terminal, View, ViewSettings};

mod logging;

const ITEMS: [&str; 6] = ["Hello", "World", "中文", "Item 4", "Item 5", "Item 6"];

fn main() -> Result<(), Box<dyn Error>> {
    let _logging = logging::init();

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => load_settings(&path)?,
        None => ViewSettings::default(),
    };

    let mut view = View::with_size(10, 10, 40, 5)?;
    view.title("view1");
    settings.apply(&mut view)?;

    let guard = ScreenGuard::new()?;
    let mut term = CrosstermTerminal::new(BufWriter::new(io::stdout()));

    view.draw(&mut term)?;
    let rows = usize::try_from(view.content_height()).unwrap_or(0);
    for (row, item) in (1..).zip(ITEMS.iter().take(rows)) {
        view.write(&mut term, row, 2, item)?;
    }
    view.flush(&mut term)?;

    let (row, col) = view.frame().park_position();
    term.move_cursor(row, col)?;
    term.flush()?;

    std::thread::sleep(Duration::from_secs(1));
    guard.restorer().restore()?;
    Ok(())
}
