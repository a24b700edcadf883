use crate::config::AppConfig;
use crate::game::{GameEngine, MoveOutcome, RoundOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Terminal front end for the game engine. Translates key presses into
/// `attempt_move` calls and renders from the returned outcomes; all game
/// rules live in [`GameEngine`].
pub struct App {
    config: AppConfig,
    engine: GameEngine,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let engine = new_engine(&config);
        let selected_column = config.board.width / 2;
        App {
            config,
            engine,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.engine.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            // Column tops: digit keys drop straight into that column.
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                self.drop_piece(column);
            }
            KeyCode::Char('n') => {
                self.new_game();
            }
            _ => {}
        }
    }

    /// Start a fresh round with the same players and dimensions
    fn new_game(&mut self) {
        self.engine = new_engine(&self.config);
        self.selected_column = self.config.board.width / 2;
        self.message = Some("New game started!".to_string());
    }

    /// Drop the current player's piece and react to the outcome
    fn drop_piece(&mut self, column: usize) {
        match self.engine.attempt_move(column) {
            Ok(MoveOutcome::Placed(_)) => {}
            Ok(MoveOutcome::Ignored) => {
                self.message = Some(if self.engine.is_finished() {
                    "Game over! Press 'n' for a new game.".to_string()
                } else {
                    "Column is full!".to_string()
                });
            }
            Ok(MoveOutcome::RoundOver { outcome, .. }) => {
                self.message = Some(match outcome {
                    RoundOutcome::Win(side) => {
                        format!("{} player won!", self.engine.player(side).name())
                    }
                    RoundOutcome::Tie => "Tie!".to_string(),
                });
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.engine, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

fn new_engine(config: &AppConfig) -> GameEngine {
    let [player_one, player_two] = config.players();
    GameEngine::new(player_one, player_two, config.board.height, config.board.width)
}
