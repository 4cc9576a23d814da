use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::watch;

use crate::feed::QuoteFeed;
use crate::model::Quotation;
use crate::ui::mvi::Reducer;
use crate::ui::quote::{QuoteIntent, QuoteReducer, QuoteScreenState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Quote screen state (MVI pattern).
    screen: QuoteScreenState,
    feed: Arc<QuoteFeed>,
    quote_rx: watch::Receiver<Quotation>,
}

impl App {
    pub fn new(feed: Arc<QuoteFeed>) -> Self {
        let quote_rx = feed.subscribe();
        Self {
            should_quit: false,
            screen: QuoteScreenState::default(),
            feed,
            quote_rx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> &QuoteScreenState {
        &self.screen
    }

    /// Ask the feed for a new quotation. Fire-and-forget; the result lands
    /// in the watch channel and is picked up on a later tick.
    pub fn request_refresh(&self) {
        self.feed.refresh();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.request_quit();
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            KeyCode::Char('r') | KeyCode::Enter => self.request_refresh(),
            _ => {}
        }
    }

    /// Drain the watch channel and fold any new quotation into screen state.
    pub fn on_tick(&mut self) {
        if self.quote_rx.has_changed().unwrap_or(false) {
            let quotation = self.quote_rx.borrow_and_update().clone();
            dispatch_mvi!(self, screen, QuoteReducer, QuoteIntent::QuoteArrived(quotation));
        }
    }
}
