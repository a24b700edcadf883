use std::sync::Arc;

use crate::error::GameError;

use super::board::Board;
use super::player::{Player, Side};

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Win(Side),
    Tie,
}

/// A piece that came to rest on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub side: Side,
}

/// What a single [`GameEngine::attempt_move`] call did, for the
/// presentation layer to act on. The engine itself renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A piece was placed and the round continues.
    Placed(Placement),
    /// The move was silently ignored (round already over, or column full).
    Ignored,
    /// The final piece of the round was placed; announce the outcome and
    /// stop accepting input for this round.
    RoundOver {
        placement: Placement,
        outcome: RoundOutcome,
    },
}

/// Turn sequencing and win/tie detection over a [`Board`].
///
/// Two states: in progress, and finished. The engine becomes finished
/// exactly once, on the move that wins or ties the round, and no move is
/// accepted afterwards. Moves are processed one at a time to completion;
/// `&mut self` serializes callers per engine instance.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    players: [Arc<Player>; 2],
    current: Side,
    outcome: Option<RoundOutcome>,
}

impl GameEngine {
    /// Start a fresh round: empty board, `player_one` to move.
    pub fn new(
        player_one: Arc<Player>,
        player_two: Arc<Player>,
        height: usize,
        width: usize,
    ) -> Self {
        GameEngine {
            board: Board::new(height, width),
            players: [player_one, player_two],
            current: Side::One,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side whose turn it is. Unchanged after ignored moves, and frozen at
    /// the winning side once the round ends.
    pub fn current_side(&self) -> Side {
        self.current
    }

    /// Identity of the player to move
    pub fn current_player(&self) -> &Arc<Player> {
        self.player(self.current)
    }

    /// Identity of the player seated on `side`
    pub fn player(&self, side: Side) -> &Arc<Player> {
        &self.players[side.index()]
    }

    /// Round outcome, if the round has ended
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drop the current player's piece in `column`.
    ///
    /// An out-of-range column is a contract violation and reported as an
    /// error; the UI only offers in-range columns. Moves after the round
    /// has ended, and moves into a full column, are ignored without any
    /// state change.
    ///
    /// On success the piece lands on the lowest empty cell, then the round
    /// is checked for termination: first a tie (board completely full),
    /// then a win (four-in-a-row for the mover). The tie check running
    /// first matches long-standing behavior: a move that fills the last
    /// cell and completes four-in-a-row reports a tie. Only a move that
    /// ends neither way passes the turn to the other player.
    pub fn attempt_move(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        if column >= self.board.width() {
            return Err(GameError::InvalidColumn {
                column,
                width: self.board.width(),
            });
        }

        if self.is_finished() {
            return Ok(MoveOutcome::Ignored);
        }

        let Some(row) = self.board.landing_row(column) else {
            return Ok(MoveOutcome::Ignored);
        };

        let side = self.current;
        self.board.place(row, column, side);
        let placement = Placement { row, column, side };

        let outcome = if self.board.is_full() {
            Some(RoundOutcome::Tie)
        } else if has_winning_run(&self.board, side) {
            Some(RoundOutcome::Win(side))
        } else {
            None
        };

        match outcome {
            Some(outcome) => {
                self.outcome = Some(outcome);
                Ok(MoveOutcome::RoundOver { placement, outcome })
            }
            None => {
                self.current = side.other();
                Ok(MoveOutcome::Placed(placement))
            }
        }
    }

    #[cfg(test)]
    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

/// Check the whole board for a four-in-a-row owned by `side`.
///
/// Every cell anchors four candidate runs: horizontal (+x), vertical
/// (+y), diagonal down-right, and diagonal down-left. A run wins iff all
/// four of its cells are in bounds and owned by `side`. Short-circuits on
/// the first winning run; the result is order-independent. O(height ×
/// width) with four O(1) run checks per cell, which is cheap at these
/// board sizes.
fn has_winning_run(board: &Board, side: Side) -> bool {
    const DIRECTIONS: [(i64, i64); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

    for y in 0..board.height() {
        for x in 0..board.width() {
            for (dy, dx) in DIRECTIONS {
                if run_owned_by(board, side, y, x, dy, dx) {
                    return true;
                }
            }
        }
    }
    false
}

fn run_owned_by(board: &Board, side: Side, y: usize, x: usize, dy: i64, dx: i64) -> bool {
    (0..4).all(|step| {
        let row = y as i64 + dy * step;
        let col = x as i64 + dx * step;
        row >= 0
            && (row as usize) < board.height()
            && col >= 0
            && (col as usize) < board.width()
            && board.get(row as usize, col as usize) == Some(side)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with_board(height: usize, width: usize) -> GameEngine {
        GameEngine::new(
            Arc::new(Player::new("Ada", "#e63946")),
            Arc::new(Player::new("Grace", "#457b9d")),
            height,
            width,
        )
    }

    fn engine() -> GameEngine {
        engine_with_board(6, 7)
    }

    #[test]
    fn test_initial_state() {
        let engine = engine();
        assert_eq!(engine.current_side(), Side::One);
        assert_eq!(engine.current_player().name(), "Ada");
        assert!(!engine.is_finished());
        assert_eq!(engine.outcome(), None);
    }

    #[test]
    fn test_piece_lands_at_bottom() {
        let mut engine = engine();
        let outcome = engine.attempt_move(3).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Placed(Placement {
                row: 5,
                column: 3,
                side: Side::One,
            })
        );
        assert_eq!(engine.board().get(5, 3), Some(Side::One));
    }

    #[test]
    fn test_strict_alternation() {
        let mut engine = engine();
        assert_eq!(engine.current_side(), Side::One);
        engine.attempt_move(0).unwrap();
        assert_eq!(engine.current_side(), Side::Two);
        engine.attempt_move(1).unwrap();
        assert_eq!(engine.current_side(), Side::One);
    }

    #[test]
    fn test_full_column_is_ignored() {
        let mut engine = engine();
        for _ in 0..6 {
            assert!(matches!(
                engine.attempt_move(0).unwrap(),
                MoveOutcome::Placed(_)
            ));
        }

        let mover_before = engine.current_side();
        assert_eq!(engine.attempt_move(0).unwrap(), MoveOutcome::Ignored);
        assert_eq!(engine.current_side(), mover_before);
    }

    #[test]
    fn test_invalid_column_is_an_error() {
        let mut engine = engine();
        let err = engine.attempt_move(7).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidColumn { column: 7, width: 7 }
        ));
    }

    #[test]
    fn test_horizontal_win_bottom_row() {
        // One drops in 0..=3, Two answers in the columns above, so One's
        // fourth drop completes (5,0)-(5,3).
        let mut engine = engine();
        for col in 0..3 {
            engine.attempt_move(col).unwrap(); // One, bottom row
            engine.attempt_move(col).unwrap(); // Two, row above
        }
        let outcome = engine.attempt_move(3).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::RoundOver {
                placement: Placement {
                    row: 5,
                    column: 3,
                    side: Side::One,
                },
                outcome: RoundOutcome::Win(Side::One),
            }
        );
        assert!(engine.is_finished());
        assert_eq!(engine.outcome(), Some(RoundOutcome::Win(Side::One)));
        // The winner stays the side to move; terminal moves never pass the
        // turn.
        assert_eq!(engine.current_side(), Side::One);
    }

    #[test]
    fn test_horizontal_win_at_right_edge() {
        let mut board = Board::default();
        for col in 3..7 {
            board.place(5, col, Side::Two);
        }
        assert!(has_winning_run(&board, Side::Two));
        assert!(!has_winning_run(&board, Side::One));
    }

    #[test]
    fn test_vertical_win() {
        let mut engine = engine();
        for _ in 0..3 {
            engine.attempt_move(2).unwrap(); // One
            engine.attempt_move(4).unwrap(); // Two
        }
        let outcome = engine.attempt_move(2).unwrap();
        assert!(matches!(
            outcome,
            MoveOutcome::RoundOver {
                outcome: RoundOutcome::Win(Side::One),
                ..
            }
        ));
    }

    #[test]
    fn test_diagonal_win_direct_placement() {
        // Up-right diagonal (5,0),(4,1),(3,2),(2,3), scanned as a
        // down-left run anchored at (2,3).
        let mut board = Board::default();
        board.place(5, 0, Side::One);
        board.place(4, 1, Side::One);
        board.place(3, 2, Side::One);
        board.place(2, 3, Side::One);
        assert!(has_winning_run(&board, Side::One));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let mut board = Board::default();
        board.place(2, 0, Side::Two);
        board.place(3, 1, Side::Two);
        board.place(4, 2, Side::Two);
        board.place(5, 3, Side::Two);
        assert!(has_winning_run(&board, Side::Two));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let mut board = Board::default();
        for col in 0..3 {
            board.place(5, col, Side::One);
        }
        assert!(!has_winning_run(&board, Side::One));
    }

    #[test]
    fn test_moves_after_round_end_are_ignored() {
        let mut engine = engine();
        for col in 0..3 {
            engine.attempt_move(col).unwrap();
            engine.attempt_move(col).unwrap();
        }
        engine.attempt_move(3).unwrap(); // One wins
        assert!(engine.is_finished());

        let board_before = engine.board().clone();
        let mover_before = engine.current_side();
        assert_eq!(engine.attempt_move(4).unwrap(), MoveOutcome::Ignored);
        assert_eq!(engine.board(), &board_before);
        assert_eq!(engine.current_side(), mover_before);
    }

    #[test]
    fn test_full_board_without_run_is_a_tie() {
        // 2x4 board filled so the last drop completes no run.
        //   row 0:  Two One One Two
        //   row 1:  One Two Two One
        let mut engine = engine_with_board(2, 4);
        engine.board_mut().place(1, 0, Side::One);
        engine.board_mut().place(1, 1, Side::Two);
        engine.board_mut().place(1, 2, Side::Two);
        engine.board_mut().place(1, 3, Side::One);
        engine.board_mut().place(0, 0, Side::Two);
        engine.board_mut().place(0, 1, Side::One);
        engine.board_mut().place(0, 2, Side::One);

        let outcome = engine.attempt_move(3).unwrap();
        assert!(matches!(
            outcome,
            MoveOutcome::RoundOver {
                outcome: RoundOutcome::Tie,
                ..
            }
        ));
        assert_eq!(engine.outcome(), Some(RoundOutcome::Tie));
    }

    #[test]
    fn test_tie_checked_before_win() {
        // The final empty cell at (0,3) would complete One's top-row run,
        // but filling the board is checked first and the round is a tie.
        let mut engine = engine_with_board(2, 4);
        engine.board_mut().place(1, 0, Side::Two);
        engine.board_mut().place(1, 1, Side::Two);
        engine.board_mut().place(1, 2, Side::Two);
        engine.board_mut().place(1, 3, Side::Two);
        engine.board_mut().place(0, 0, Side::One);
        engine.board_mut().place(0, 1, Side::One);
        engine.board_mut().place(0, 2, Side::One);

        let outcome = engine.attempt_move(3).unwrap();
        assert!(matches!(
            outcome,
            MoveOutcome::RoundOver {
                outcome: RoundOutcome::Tie,
                ..
            }
        ));
    }

    #[test]
    fn test_win_reports_the_mover() {
        let mut engine = engine();
        // Two wins vertically in column 6 while One wanders.
        engine.attempt_move(0).unwrap(); // One
        for _ in 0..3 {
            engine.attempt_move(6).unwrap(); // Two
            engine.attempt_move(1).unwrap(); // One
        }
        let outcome = engine.attempt_move(6).unwrap();
        assert!(matches!(
            outcome,
            MoveOutcome::RoundOver {
                outcome: RoundOutcome::Win(Side::Two),
                ..
            }
        ));
        assert_eq!(engine.player(Side::Two).name(), "Grace");
    }
}
