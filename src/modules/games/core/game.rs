// Single game state machine.
//
// Purpose
// - Own one game's board, its two participants and its completion status.
//
// Responsibilities
// - Validate a move against the current state and apply it.
// - Detect a completed line or a full board and mark the game as over.
// - Never perform input or output. Storage and concurrency belong to the game store.

use crate::modules::games::core::board::{Board, SIZE};
use crate::modules::games::core::moves::{Move, MoveError};
use crate::modules::games::core::player::PlayerId;
use uuid::Uuid;

pub type GameId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: GameId,
    version: u64,
    player1: PlayerId,
    player2: PlayerId,
    board: Board,
    winner: Option<PlayerId>,
    is_over: bool,
}

impl Game {
    /// Uncommitted game; the store assigns version 1 when it is first saved.
    /// `None` when both seats name the same player.
    pub fn new(id: GameId, player1: PlayerId, player2: PlayerId) -> Option<Self> {
        if player1 == player2 {
            return None;
        }
        Some(Self {
            id,
            version: 0,
            player1,
            player2,
            board: Board::new(),
            winner: None,
            is_over: false,
        })
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn player1(&self) -> PlayerId {
        self.player1
    }

    pub fn player2(&self) -> PlayerId {
        self.player2
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }

    pub fn is_participant(&self, player: PlayerId) -> bool {
        self.player1 == player || self.player2 == player
    }

    /// Order of the pair does not matter.
    pub fn is_between(&self, a: PlayerId, b: PlayerId) -> bool {
        (self.player1 == a && self.player2 == b) || (self.player1 == b && self.player2 == a)
    }

    /// Whose turn it is, derived from how many cells are filled. Player 1 opens.
    pub fn next_player(&self) -> PlayerId {
        if self.board.filled() % 2 == 0 {
            self.player1
        } else {
            self.player2
        }
    }

    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.is_over {
            return Err(MoveError::GameAlreadyFinished);
        }
        let (x, y) = coordinates(mv.x, mv.y).ok_or(MoveError::InvalidCoordinates)?;
        if !self.is_participant(mv.player_id) {
            return Err(MoveError::NotAParticipant);
        }
        if self.board.cell(x, y).is_some() {
            return Err(MoveError::CellAlreadyTaken);
        }
        if self.next_player() != mv.player_id {
            return Err(MoveError::OutOfTurn);
        }

        self.board.claim(x, y, mv.player_id);
        self.settle();
        Ok(())
    }

    fn settle(&mut self) {
        if let Some(owner) = self.board.line_owner() {
            self.is_over = true;
            self.winner = Some(owner);
        } else if self.board.is_full() {
            self.is_over = true;
            self.winner = None;
        }
    }
}

fn coordinates(x: i64, y: i64) -> Option<(usize, usize)> {
    let x = usize::try_from(x).ok().filter(|x| *x < SIZE)?;
    let y = usize::try_from(y).ok().filter(|y| *y < SIZE)?;
    Some((x, y))
}
