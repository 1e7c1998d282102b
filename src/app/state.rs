//! Application state: the game session plus cursor and held tile

use crate::game::{DictionaryLoader, GameSession, Location, Tile, TileId};
use tracing::warn;

/// Which row the cursor is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Board,
    Rack,
}

/// Main application state
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    session: GameSession,
    /// Word list still loading in the background
    loader: Option<DictionaryLoader>,
    /// Row the cursor is on
    pub row: Row,
    /// Position within the row
    pub cursor: usize,
    /// Tile picked up and waiting to be dropped
    pub held: Option<TileId>,
}

impl App {
    /// Wrap a session and deal the opening rack.
    pub fn new(mut session: GameSession, loader: Option<DictionaryLoader>) -> Self {
        session.deal();
        Self {
            should_quit: false,
            session,
            loader,
            row: Row::Rack,
            cursor: 0,
            held: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// True until the background word list arrives
    pub fn dictionary_loading(&self) -> bool {
        self.loader.is_some()
    }

    /// Pick up any finished dictionary load.
    pub fn tick(&mut self) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };
        let Some(result) = loader.try_take() else {
            return;
        };
        match result {
            Ok(dictionary) => self.session.set_dictionary(dictionary),
            Err(err) => warn!(%err, "word list unavailable, every word will be rejected"),
        }
        self.loader = None;
    }

    pub fn on_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn on_right(&mut self) {
        if self.cursor + 1 < self.row_len() {
            self.cursor += 1;
        }
    }

    pub fn on_up(&mut self) {
        self.row = Row::Board;
        self.clamp_cursor();
    }

    pub fn on_down(&mut self) {
        self.row = Row::Rack;
        self.clamp_cursor();
    }

    /// Pick up the tile under the cursor, or drop the held one there.
    pub fn on_space(&mut self) {
        match self.held.take() {
            Some(id) => {
                let to = match self.row {
                    Row::Board => Location::Slot(self.cursor),
                    Row::Rack => Location::Rack,
                };
                // A rejected drop leaves the tile where it was.
                let _ = self.session.place(id, to);
                self.clamp_cursor();
            }
            None => self.held = self.tile_under_cursor().map(|t| t.id),
        }
    }

    /// Cancel a pick-up.
    pub fn on_escape_held(&mut self) -> bool {
        self.held.take().is_some()
    }

    pub fn on_submit(&mut self) {
        self.held = None;
        self.session.submit();
    }

    pub fn on_deal(&mut self) {
        self.session.deal();
        self.clamp_cursor();
    }

    pub fn on_reset(&mut self) {
        self.held = None;
        self.session.reset();
        self.clamp_cursor();
    }

    /// The tile the cursor is resting on, if any.
    pub fn tile_under_cursor(&self) -> Option<Tile> {
        match self.row {
            Row::Rack => self.session.rack().tiles().get(self.cursor).copied(),
            Row::Board => self
                .session
                .board()
                .slot(self.cursor)
                .and_then(|s| s.occupant().copied()),
        }
    }

    fn row_len(&self) -> usize {
        match self.row {
            Row::Board => self.session.board().len(),
            Row::Rack => self.session.rack().capacity(),
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.row_len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::tiles::{Letter, LetterDefinition, TileCatalog};
    use crate::game::{Dictionary, DictionarySource, Severity};
    use std::time::{Duration, Instant};

    fn app() -> App {
        let catalog = TileCatalog::new(vec![LetterDefinition {
            letter: Letter::new('A').unwrap(),
            value: 1,
            copies: 30,
        }])
        .unwrap();
        let config = GameConfig {
            catalog,
            ..GameConfig::default()
        };
        let mut session = GameSession::seeded(config, 9);
        session.set_dictionary(Dictionary::from_words(["aa"]));
        App::new(session, None)
    }

    /// Move the rack tile under the cursor to a board slot.
    fn play(app: &mut App, rack_pos: usize, slot: usize) {
        app.on_down();
        app.cursor = rack_pos;
        app.on_space();
        app.on_up();
        app.cursor = slot;
        app.on_space();
    }

    #[test]
    fn test_opening_deal() {
        let app = app();
        assert_eq!(app.session().rack().len(), 7);
        assert_eq!(app.row, Row::Rack);
        assert!(app.held.is_none());
    }

    #[test]
    fn test_pick_up_and_drop() {
        let mut app = app();
        let first = app.session().rack().tiles()[0].id;
        app.on_space();
        assert_eq!(app.held, Some(first));

        app.on_up();
        app.cursor = 4;
        app.on_space();
        assert!(app.held.is_none());
        assert_eq!(app.session().locate(first), Some(Location::Slot(4)));
        assert_eq!(app.session().rack().len(), 6);
    }

    #[test]
    fn test_drop_on_occupied_slot_reverts() {
        let mut app = app();
        play(&mut app, 0, 2);
        let second = app.session().rack().tiles()[0].id;
        play(&mut app, 0, 2);

        assert_eq!(app.session().locate(second), Some(Location::Rack));
        assert_eq!(app.session().message().severity, Severity::Error);
        assert!(app.held.is_none());
    }

    #[test]
    fn test_submit_and_score() {
        let mut app = app();
        play(&mut app, 0, 0);
        play(&mut app, 0, 1);
        app.on_submit();
        assert_eq!(app.session().score(), 3);
        assert_eq!(app.session().message().severity, Severity::Success);

        app.on_deal();
        assert_eq!(app.session().rack().len(), 7);
        assert_eq!(app.session().board().occupied_count(), 2);
    }

    #[test]
    fn test_reset() {
        let mut app = app();
        play(&mut app, 0, 0);
        app.on_space();
        app.on_reset();
        assert!(app.held.is_none());
        assert_eq!(app.session().board().occupied_count(), 0);
        assert_eq!(app.session().rack().len(), 7);
        assert_eq!(app.session().remaining_tiles(), 23);
    }

    #[test]
    fn test_cursor_stays_in_row() {
        let mut app = app();
        app.on_left();
        assert_eq!(app.cursor, 0);
        for _ in 0..20 {
            app.on_right();
        }
        assert_eq!(app.cursor, 6);
    }

    #[test]
    fn test_tick_installs_loaded_dictionary() {
        let session = GameSession::seeded(GameConfig::default(), 3);
        let loader = DictionaryLoader::spawn(DictionarySource::Embedded);
        let mut app = App::new(session, Some(loader));
        assert!(app.session().dictionary().is_empty());

        let deadline = Instant::now() + Duration::from_secs(5);
        while app.dictionary_loading() {
            assert!(Instant::now() < deadline, "dictionary never arrived");
            app.tick();
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(app.session().dictionary().is_valid("cat"));
    }
}
