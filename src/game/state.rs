use super::board::{Board, BoardError};
use super::player::Player;
use super::winner::check_winner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Result of a game at any point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win(Player),
    Draw,
    InProgress,
}

/// Turn controller phase. `Won` and `Draw` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove(Player),
    Won(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("the game is already over")]
    GameOver,
}

/// A placed tile: who moved and where it landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub player: Player,
    pub column: usize,
    pub row: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    phase: Phase,
    last_placement: Option<Placement>,
}

impl GameState {
    /// Create initial game state on the standard board, X to move
    pub fn initial() -> Self {
        Self::with_first_player(Board::standard(), Player::X)
    }

    /// Create a game on an existing empty board with the given first player
    pub fn with_first_player(board: Board, first_player: Player) -> Self {
        GameState {
            board,
            phase: Phase::AwaitingMove(first_player),
            last_placement: None,
        }
    }

    /// Player whose turn it is, `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        match self.phase {
            Phase::AwaitingMove(player) => Some(player),
            Phase::Won(_) | Phase::Draw => None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The most recent tile placed, if any
    pub fn last_placement(&self) -> Option<Placement> {
        self.last_placement
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::Won(player) => Some(GameOutcome::Winner(player)),
            Phase::Draw => Some(GameOutcome::Draw),
            Phase::AwaitingMove(_) => None,
        }
    }

    pub fn result(&self) -> GameResult {
        match self.phase {
            Phase::Won(player) => GameResult::Win(player),
            Phase::Draw => GameResult::Draw,
            Phase::AwaitingMove(_) => GameResult::InProgress,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place. On error the state is unchanged.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<Placement, MoveError> {
        let player = match self.phase {
            Phase::AwaitingMove(player) => player,
            Phase::Won(_) | Phase::Draw => return Err(MoveError::GameOver),
        };

        let row = self.board.drop_tile(column, player)?;
        let placement = Placement {
            player,
            column,
            row,
        };
        self.last_placement = Some(placement);

        self.phase = if check_winner(&self.board, player) {
            Phase::Won(player)
        } else if self.board.is_full() {
            Phase::Draw
        } else {
            Phase::AwaitingMove(player.other())
        };

        Ok(placement)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{Cell, HEIGHT};

    /// Alternating column order that fills the board as the draw pattern
    /// in `board::tests::drawn_board`.
    const DRAW_SEQUENCE: [usize; 42] = [
        2, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 6, 4, 4, 4, 4,
        4, 4, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6,
    ];

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Some(Player::X));
        assert_eq!(state.phase(), Phase::AwaitingMove(Player::X));
        assert!(!state.is_terminal());
        assert_eq!(state.result(), GameResult::InProgress);
        assert_eq!(state.legal_actions().len(), 7);
        assert_eq!(state.last_placement(), None);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Some(Player::O));
        assert_eq!(new_state.board().get(3, HEIGHT - 1), Some(Cell::X));
        assert_eq!(
            new_state.last_placement(),
            Some(Placement {
                player: Player::X,
                column: 3,
                row: HEIGHT - 1
            })
        );
        // The source state is untouched
        assert_eq!(state, GameState::initial());
    }

    #[test]
    fn test_turn_alternation() {
        let mut state = GameState::initial();
        state.apply_move_mut(0).unwrap();
        assert_eq!(state.phase(), Phase::AwaitingMove(Player::O));
        state.apply_move_mut(1).unwrap();
        assert_eq!(state.phase(), Phase::AwaitingMove(Player::X));
    }

    #[test]
    fn test_custom_first_player() {
        let mut state = GameState::with_first_player(Board::standard(), Player::O);
        assert_eq!(state.current_player(), Some(Player::O));
        let placement = state.apply_move_mut(4).unwrap();
        assert_eq!(placement.player, Player::O);
        assert_eq!(state.current_player(), Some(Player::X));
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // X wins with horizontal line
        for column in 0..4 {
            state = state.apply_move(column).unwrap(); // X
            if column < 3 {
                state = state.apply_move(column).unwrap(); // O (row above)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::X)));
        assert_eq!(state.result(), GameResult::Win(Player::X));
        assert_eq!(state.phase(), Phase::Won(Player::X));
        assert_eq!(state.current_player(), None);
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_move_after_game_over() {
        let mut state = GameState::initial();
        for column in [0, 1, 0, 1, 0, 1, 0] {
            state.apply_move_mut(column).unwrap();
        }
        assert_eq!(state.phase(), Phase::Won(Player::X));

        let before = state.clone();
        assert_eq!(state.apply_move_mut(5), Err(MoveError::GameOver));
        assert_eq!(state, before);
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::initial();

        for (i, &column) in DRAW_SEQUENCE.iter().enumerate() {
            assert!(!state.is_terminal(), "game ended early at move {}", i);
            state.apply_move_mut(column).unwrap();
        }

        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert_eq!(state.result(), GameResult::Draw);
        assert!(state.board().is_full());
        assert_eq!(state.board(), &crate::game::board::tests::drawn_board());
    }

    #[test]
    fn test_full_column_leaves_state_unchanged() {
        let mut state = GameState::initial();
        for _ in 0..HEIGHT {
            state.apply_move_mut(2).unwrap();
        }
        assert_eq!(state.current_player(), Some(Player::X));

        let before = state.clone();
        assert_eq!(state.apply_move_mut(2), Err(MoveError::Board(BoardError::ColumnFull(2))));
        assert_eq!(state, before);
        assert!(!state.legal_actions().contains(&2));
    }

    #[test]
    fn test_invalid_column() {
        let state = GameState::initial();
        assert_eq!(
            state.apply_move(9),
            Err(MoveError::Board(BoardError::InvalidColumn {
                column: 9,
                width: 7
            }))
        );
    }
}
