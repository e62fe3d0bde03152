//! Game session module - one game from start to game over
//!
//! The session owns the board and everything that spans turns: the random
//! source, the running score, the single undo snapshot and a few counters for
//! display. It is the only thing the presentation layer talks to.

use tracing::{debug, info};

use crate::board::{Board, MoveOutcome};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, Direction, GameAction, CELL_COUNT, INITIAL_TILES};

/// What a single `apply_move` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// Whether the slide changed the board
    pub changed: bool,
    /// Cumulative score after the move
    pub score: u32,
    /// Score earned by this move alone
    pub score_gained: u32,
    /// Whether the board is now terminal
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    board: Board,
    rng: R,
    score: u32,
    /// Board values from just before the last accepted move.
    undo: Option<[Cell; CELL_COUNT]>,
    /// Last slide outcome, cleared when the board is replaced wholesale.
    last_outcome: MoveOutcome,
    /// Moves that changed the board in this episode.
    moves: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    started: bool,
}

impl GameSession<SimpleRng> {
    /// Create a new session driven by a seeded LCG
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Create a session with an empty board. Call [`start`](Self::start) to deal the first tiles.
    pub fn new(rng: R) -> Self {
        Self {
            board: Board::new(),
            rng,
            score: 0,
            undo: None,
            last_outcome: MoveOutcome::default(),
            moves: 0,
            episode_id: 0,
            started: false,
        }
    }

    /// Resume play from an existing position with a zero score.
    pub fn with_board(board: Board, rng: R) -> Self {
        let mut session = Self::new(rng);
        session.board = board;
        session.started = true;
        session
    }

    /// Clear the board, reset score and undo, and spawn the opening tiles
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.undo = None;
        self.last_outcome = MoveOutcome::default();
        self.moves = 0;
        for _ in 0..INITIAL_TILES {
            self.board.spawn_tile(&mut self.rng);
        }
        self.started = true;
        info!(episode = self.episode_id, "game started");
    }

    /// Start over in a new episode
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.start();
    }

    /// Slide the board in `direction` and advance the turn.
    ///
    /// A terminal board rejects the move without touching any state.
    /// Otherwise the pre-move board becomes the undo snapshot (even if the
    /// slide turns out to change nothing), the merge gain is added to the
    /// score, and a changed board receives a new tile.
    pub fn apply_move(&mut self, direction: Direction) -> MoveReport {
        if self.board.is_terminal() {
            debug!(%direction, "move rejected, board is terminal");
            return MoveReport {
                changed: false,
                score: self.score,
                score_gained: 0,
                game_over: true,
            };
        }

        self.undo = Some(self.board.snapshot_values());
        let outcome = self.board.slide(direction);
        self.score = self.score.saturating_add(outcome.score_gained);

        let mut game_over = false;
        if outcome.changed {
            self.moves = self.moves.wrapping_add(1);
            self.board.spawn_tile(&mut self.rng);
            game_over = self.board.is_terminal();
        }

        debug!(
            %direction,
            changed = outcome.changed,
            gained = outcome.score_gained,
            score = self.score,
            "move applied"
        );
        if game_over {
            info!(
                score = self.score,
                best_tile = self.board.max_tile(),
                moves = self.moves,
                "game over"
            );
        }

        let report = MoveReport {
            changed: outcome.changed,
            score: self.score,
            score_gained: outcome.score_gained,
            game_over,
        };
        self.last_outcome = outcome;
        report
    }

    /// Put back the board from before the last move.
    ///
    /// Returns false when there is nothing to undo. The score is kept, and
    /// undo stays available after game over.
    pub fn undo(&mut self) -> bool {
        let Some(values) = self.undo.take() else {
            return false;
        };
        self.board.restore_snapshot(values);
        self.last_outcome = MoveOutcome::default();
        debug!(score = self.score, "move undone");
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction).changed,
            GameAction::Undo => self.undo(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        self.board.cells()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_terminal()
    }

    pub fn can_undo(&self) -> bool {
        self.undo.is_some()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn last_outcome(&self) -> &MoveOutcome {
        &self.last_outcome
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.score = self.score;
        out.best_tile = self.board.max_tile();
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.game_over = self.is_game_over();
        out.can_undo = self.can_undo();
        out.merged.clone_from(&self.last_outcome.merged);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Replays fixed draws, wrapping each into range.
    struct Scripted(VecDeque<u32>);

    impl Scripted {
        fn new(draws: &[u32]) -> Self {
            Self(draws.iter().copied().collect())
        }
    }

    impl RandomSource for Scripted {
        fn next_range(&mut self, max: u32) -> u32 {
            self.0.pop_front().unwrap_or(0) % max
        }
    }

    fn session(values: [Cell; CELL_COUNT], draws: &[u32]) -> GameSession<Scripted> {
        GameSession::with_board(Board::from_values(&values).unwrap(), Scripted::new(draws))
    }

    const STUCK: [Cell; CELL_COUNT] = [2, 4, 2, 4, 4, 2, 4, 2, 2, 4, 2, 4, 4, 2, 4, 2];

    #[test]
    fn test_start_spawns_two_tiles() {
        let mut s = GameSession::with_seed(42);
        assert!(!s.started());
        s.start();
        assert!(s.started());
        assert_eq!(s.board().empty_count(), CELL_COUNT - 2);
        assert_eq!(s.score(), 0);
        assert!(!s.can_undo());
        assert!(!s.is_game_over());
    }

    #[test]
    fn test_scripted_spawn_places_exact_tile() {
        // Draws: cell 0 of the empty list, value roll 0 => a 4.
        let mut s = GameSession::new(Scripted::new(&[0, 0, 15, 5]));
        s.start();
        assert_eq!(s.cells()[0], 4);
        // Second spawn: index 15 of the 15 remaining empties wraps to 0 => cell 1, a 2.
        assert_eq!(s.cells()[1], 2);
    }

    #[test]
    fn test_move_adds_score_and_spawns() {
        let mut values = [0; CELL_COUNT];
        values[0] = 2;
        values[1] = 2;
        // Spawn picks the last empty cell and rolls a 2.
        let mut s = session(values, &[14, 5]);
        let report = s.apply_move(Direction::Left);
        assert_eq!(
            report,
            MoveReport {
                changed: true,
                score: 4,
                score_gained: 4,
                game_over: false
            }
        );
        assert_eq!(s.cells()[0], 4);
        assert_eq!(s.cells()[15], 2);
        assert_eq!(s.board().empty_count(), CELL_COUNT - 2);
        assert_eq!(s.moves(), 1);
        assert_eq!(s.last_outcome().merged.as_slice(), &[0]);
    }

    #[test]
    fn test_unchanged_move_does_not_spawn_but_records_undo() {
        let mut values = [0; CELL_COUNT];
        values[0] = 2;
        let mut s = session(values, &[]);
        let report = s.apply_move(Direction::Left);
        assert!(!report.changed);
        assert_eq!(s.board().empty_count(), CELL_COUNT - 1);
        assert_eq!(s.moves(), 0);
        assert!(s.can_undo());
    }

    #[test]
    fn test_terminal_board_rejects_move() {
        let mut s = session(STUCK, &[]);
        let report = s.apply_move(Direction::Up);
        assert_eq!(
            report,
            MoveReport {
                changed: false,
                score: 0,
                score_gained: 0,
                game_over: true
            }
        );
        assert_eq!(s.cells(), &STUCK);
        assert!(!s.can_undo());
    }

    #[test]
    fn test_move_into_game_over() {
        // Sliding left merges 2+2 and leaves one gap for the spawn, which
        // completes a board with no equal neighbours.
        let values = [2, 2, 4, 8, 4, 8, 16, 32, 8, 16, 32, 64, 16, 32, 64, 128];
        // Only cell 3 is empty after the slide; roll 5 => a 2.
        let mut s = session(values, &[0, 5]);
        let report = s.apply_move(Direction::Left);
        assert!(report.changed);
        assert_eq!(&s.cells()[..4], &[4, 4, 8, 2]);
        // 4,4 are adjacent, so the game continues.
        assert!(!report.game_over);

        let values = [2, 2, 8, 16, 8, 16, 32, 64, 16, 32, 64, 128, 32, 64, 128, 256];
        let mut s = session(values, &[0, 5]);
        let report = s.apply_move(Direction::Left);
        assert_eq!(&s.cells()[..4], &[4, 8, 16, 2]);
        assert!(report.game_over);
        assert!(s.is_game_over());
        assert_eq!(s.score(), 4);
    }

    #[test]
    fn test_undo_restores_board_but_keeps_score() {
        let mut values = [0; CELL_COUNT];
        values[0] = 8;
        values[4] = 8;
        let mut s = session(values, &[0, 5]);
        s.apply_move(Direction::Up);
        assert_eq!(s.score(), 16);

        assert!(s.undo());
        assert_eq!(s.cells(), &values);
        assert_eq!(s.score(), 16);
        assert!(s.last_outcome().merged.is_empty());
    }

    #[test]
    fn test_second_undo_is_noop() {
        let mut values = [0; CELL_COUNT];
        values[3] = 2;
        let mut s = session(values, &[0, 5]);
        s.apply_move(Direction::Left);
        assert!(s.undo());
        let after_first = *s.cells();
        assert!(!s.undo());
        assert_eq!(s.cells(), &after_first);
    }

    #[test]
    fn test_undo_available_after_game_over() {
        let values = [2, 2, 8, 16, 8, 16, 32, 64, 16, 32, 64, 128, 32, 64, 128, 256];
        let mut s = session(values, &[0, 5]);
        assert!(s.apply_move(Direction::Left).game_over);
        assert!(s.undo());
        assert_eq!(s.cells(), &values);
        assert!(!s.is_game_over());
    }

    #[test]
    fn test_restart_resets_everything_but_episode() {
        let mut values = [0; CELL_COUNT];
        values[0] = 2;
        values[1] = 2;
        let mut s = session(values, &[0, 5]);
        s.apply_move(Direction::Left);
        assert!(s.score() > 0);

        assert!(s.apply_action(GameAction::Restart));
        assert_eq!(s.score(), 0);
        assert_eq!(s.moves(), 0);
        assert!(!s.can_undo());
        assert_eq!(s.episode_id(), 1);
        assert_eq!(s.board().empty_count(), CELL_COUNT - 2);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut values = [0; CELL_COUNT];
        values[0] = 2;
        let mut s = session(values, &[0, 5]);
        assert!(!s.apply_action(GameAction::Undo));
        assert!(!s.apply_action(GameAction::Move(Direction::Left)));
        assert!(s.apply_action(GameAction::Move(Direction::Right)));
        assert!(s.apply_action(GameAction::Undo));
    }

    #[test]
    fn test_snapshot_reflects_session() {
        let mut values = [0; CELL_COUNT];
        values[0] = 2;
        values[1] = 2;
        let mut s = session(values, &[14, 5]);
        s.apply_move(Direction::Left);

        let snap = s.snapshot();
        assert_eq!(snap.board[0], [4, 0, 0, 0]);
        assert_eq!(snap.board[3], [0, 0, 0, 2]);
        assert_eq!(snap.score, 4);
        assert_eq!(snap.best_tile, 4);
        assert_eq!(snap.moves, 1);
        assert!(snap.can_undo);
        assert!(snap.playable());
        assert!(snap.is_merged(0, 0));
        assert!(!snap.is_merged(0, 1));
    }
}
