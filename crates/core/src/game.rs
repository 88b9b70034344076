//! Game engine - the session state machine
//!
//! Owns the board, the active piece and the session counters, and runs
//! the Spawning -> Falling -> (Locking -> Spawning) | GameOver cycle.
//! Every mutation goes through the board's single legality predicate;
//! illegal moves and rotations are silently rejected, never errors.
//!
//! Time never enters through the wall clock: the frame loop calls
//! [`GameState::tick`] with elapsed milliseconds and the engine keeps a
//! gravity accumulator, so tests drive time explicitly.

use blockfall_types::{GameAction, PieceKind, SOFT_DROP_POINTS, SPAWN_X, SPAWN_Y};

use crate::board::Board;
use crate::pieces::{rotate_cw, spawn_matrix, PieceMatrix};
use crate::rng::SimpleRng;
use crate::scoring::{fall_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};

/// The falling piece: its own matrix copy, kind, and board position of
/// the matrix's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub matrix: PieceMatrix,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece of the given kind at the spawn position.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            matrix: spawn_matrix(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    /// One-step lookahead: decided at the previous spawn.
    next_kind: PieceKind,
    rng: SimpleRng,
    score: u32,
    level: u32,
    lines: u32,
    /// Elapsed milliseconds since the last gravity step.
    fall_timer_ms: u32,
    started: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next_kind = rng.next_piece();

        Self {
            board: Board::new(),
            active: None,
            next_kind,
            rng,
            score: 0,
            level: 0,
            lines: 0,
            fall_timer_ms: 0,
            started: false,
            game_over: false,
        }
    }

    /// Start the session and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next_kind
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Force the active piece (tests need a known kind and position).
    #[cfg(test)]
    pub fn set_active_for_test(&mut self, piece: ActivePiece) {
        self.active = Some(piece);
    }

    /// Spawn the looked-ahead piece and draw the next one.
    ///
    /// A colliding spawn is the terminal transition: the session goes
    /// to game over and the board is left untouched.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.next_kind);
        self.next_kind = self.rng.next_piece();

        if !self.board.is_valid_position(&piece.matrix, piece.x, piece.y) {
            self.game_over = true;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Current gravity interval, paced by the level.
    pub fn fall_interval(&self) -> u32 {
        fall_interval_ms(self.level)
    }

    /// Try to move the active piece by (dx, dy); commit only if legal.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let nx = active.x + dx;
        let ny = active.y + dy;
        if self.board.is_valid_position(&active.matrix, nx, ny) {
            self.active = Some(ActivePiece {
                x: nx,
                y: ny,
                ..active
            });
            return true;
        }

        false
    }

    /// Try to rotate the active piece clockwise in place.
    ///
    /// No wall kicks: if the rotated matrix collides at the current
    /// position the piece keeps its prior orientation.
    pub fn try_rotate(&mut self) -> bool {
        let Some(mut active) = self.active else {
            return false;
        };

        let rotated = rotate_cw(&active.matrix);
        if self.board.is_valid_position(&rotated, active.x, active.y) {
            active.matrix = rotated;
            self.active = Some(active);
            return true;
        }

        false
    }

    /// Lock the active piece onto the board, clear rows, score, respawn.
    ///
    /// The score multiplier uses the level in effect before this clear.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.place(&active.matrix, active.x, active.y);

        let cleared = self.board.clear_full_rows().len();
        if cleared > 0 {
            self.score += line_clear_score(cleared, self.level);
            self.lines += cleared as u32;
            self.level = level_for_lines(self.lines);
        }

        self.spawn_piece();
    }

    /// Where the active piece would land if dropped straight down.
    ///
    /// Render-only: repeatedly probes y + 1 and never mutates state.
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let mut y = active.y;
        while self.board.is_valid_position(&active.matrix, active.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Gravity tick: returns true when a gravity step fired.
    ///
    /// Accumulates elapsed time and, once the level-paced interval has
    /// passed, drops the piece by one row or, if the step is blocked,
    /// locks it through the same path a blocked soft drop takes.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over || !self.started || self.active.is_none() {
            return false;
        }

        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms < self.fall_interval() {
            return false;
        }
        self.fall_timer_ms = 0;

        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Apply a player action; returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }
        if action == GameAction::Quit {
            self.game_over = true;
            return true;
        }
        if self.active.is_none() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => {
                if self.try_move(0, 1) {
                    self.score += SOFT_DROP_POINTS;
                } else {
                    // A resting piece locks through the same path as gravity.
                    self.lock_piece();
                }
                true
            }
            GameAction::Rotate => self.try_rotate(),
            GameAction::Quit => unreachable!("handled above"),
        }
    }

    /// Fill a snapshot with everything the renderer needs.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(|p| ActiveSnapshot {
            kind: p.kind,
            matrix: p.matrix,
            x: p.x,
            y: p.y,
        });
        out.ghost_y = self.ghost_y();
        out.next = self.next_kind;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
