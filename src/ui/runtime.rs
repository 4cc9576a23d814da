use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::feed::QuoteFeed;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(feed: Arc<QuoteFeed>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(feed);
    let events = EventHandler::new(tick_rate);

    // Fetch once at startup so the placeholder is replaced without a key press.
    app.request_refresh();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // Ratatui re-measures on every draw; nothing to track.
            Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
