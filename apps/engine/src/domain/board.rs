use serde::{Deserialize, Serialize};

use crate::domain::state::Player;
use crate::errors::domain::{DomainError, ValidationKind};

/// Fixed-dimension square grid of cell owners.
///
/// Coordinates are `[0, size)` on both axes; out-of-range access is rejected,
/// never clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, DomainError> {
        if row >= self.size || col >= self.size {
            return Err(DomainError::validation(
                ValidationKind::OutOfBounds,
                format!(
                    "Coordinate ({row}, {col}) outside {n}x{n} board",
                    n = self.size
                ),
            ));
        }
        Ok(row * self.size + col)
    }

    /// Owner of the cell, `None` when empty.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Player>, DomainError> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Overwrites unconditionally; legality is the caller's job.
    pub fn set(
        &mut self,
        row: usize,
        col: usize,
        cell: Option<Player>,
    ) -> Result<(), DomainError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// True iff no cell is empty. A full board with no winner is a draw.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of cells owned by `player`.
    pub fn stones(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| **c == Some(player)).count()
    }

    /// Length of the contiguous run of `player`'s stones through `(row, col)`
    /// along `dir`, searched in both the direction and its opposite.
    ///
    /// The origin cell counts but its ownership is not re-checked; the caller
    /// guarantees it already belongs to `player`. Bidirectional so a single
    /// placed stone can join two existing short rows.
    pub fn count_run(&self, player: Player, row: usize, col: usize, dir: (i8, i8)) -> usize {
        let (dr, dc) = (dir.0 as isize, dir.1 as isize);
        1 + self.run_from(player, row, col, dr, dc) + self.run_from(player, row, col, -dr, -dc)
    }

    fn run_from(&self, player: Player, row: usize, col: usize, dr: isize, dc: isize) -> usize {
        let mut len = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while self.owner_at(r, c) == Some(player) {
            len += 1;
            r += dr;
            c += dc;
        }
        len
    }

    fn owner_at(&self, row: isize, col: isize) -> Option<Player> {
        if row < 0 || col < 0 || row as usize >= self.size || col as usize >= self.size {
            return None;
        }
        self.cells[row as usize * self.size + col as usize]
    }
}
