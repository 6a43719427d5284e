// 3x3 playing field.
//
// Cells are addressed as (x, y) with both coordinates in 0..=2. A cell is either empty or
// holds the id of the player who claimed it.

use crate::modules::games::core::player::PlayerId;

pub const SIZE: usize = 3;

type Line = [(usize, usize); 3];

// Evaluated in order: fixed x, fixed y, then both diagonals. First complete line wins.
const LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<PlayerId>; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<PlayerId> {
        self.cells[x][y]
    }

    pub(crate) fn claim(&mut self, x: usize, y: usize, player: PlayerId) {
        self.cells[x][y] = Some(player);
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.filled() == SIZE * SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }

    /// Owner of the first complete line, if any.
    pub fn line_owner(&self) -> Option<PlayerId> {
        LINES.iter().find_map(|[a, b, c]| {
            let first = self.cell(a.0, a.1)?;
            (self.cell(b.0, b.1) == Some(first) && self.cell(c.0, c.1) == Some(first))
                .then_some(first)
        })
    }
}
