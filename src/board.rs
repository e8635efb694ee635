//! Board state representation and the rules engine
//!
//! The board is a fixed 9×9 grid whose playable cells form a cross. Border
//! cells are always disabled; interior connectivity is non-uniform: cells
//! whose row/column difference is even also connect diagonally, the rest
//! connect only straight. The fox captures by jumping over an adjacent sheep
//! onto the empty cell behind it; sheep only step onto adjacent empty cells.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Action, Pos, Side};

/// Width and height of the (bordered) grid.
pub const BOARD_SIZE: usize = 9;

/// Sheep count of the canonical starting layout, used to normalize the
/// sheep-count evaluation feature.
pub const SHEEP_MAX: usize = 13;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Disabled,
    Empty,
    Sheep,
    Fox,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Disabled => '#',
            Cell::Empty => '.',
            Cell::Sheep => 'S',
            Cell::Fox => 'F',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '#' => Some(Cell::Disabled),
            '.' => Some(Cell::Empty),
            'S' | 's' => Some(Cell::Sheep),
            'F' | 'f' => Some(Cell::Fox),
            _ => None,
        }
    }
}

/// Complete board state: cell grid plus the piece-position projections.
///
/// The grid and the (fox, sheep set) projections are kept consistent by
/// every mutation: a cell holds `Cell::Fox`/`Cell::Sheep` exactly when the
/// corresponding position appears in the projection. Search algorithms never
/// mutate a caller's board; they clone it first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    fox: Pos,
    sheep: Vec<Pos>,
    sheep_max: usize,
}

impl Board {
    /// Create the canonical starting position: fox at (3,4) and 13 sheep
    /// filling the lower arm of the cross.
    pub fn new() -> Self {
        let mut cells = [[Cell::Disabled; BOARD_SIZE]; BOARD_SIZE];
        for row in 1..=7 {
            let cols = if (3..=5).contains(&row) { 1..=7 } else { 3..=5 };
            for col in cols {
                cells[row][col] = Cell::Empty;
            }
        }

        let fox = Pos::new(3, 4);
        cells[fox.row][fox.col] = Cell::Fox;

        let mut sheep = Vec::with_capacity(SHEEP_MAX);
        for col in 1..=7 {
            sheep.push(Pos::new(5, col));
        }
        for row in 6..=7 {
            for col in 3..=5 {
                sheep.push(Pos::new(row, col));
            }
        }
        for &pos in &sheep {
            cells[pos.row][pos.col] = Cell::Sheep;
        }

        Board {
            cells,
            fox,
            sheep,
            sheep_max: SHEEP_MAX,
        }
    }

    /// Parse a board from a 9-line diagram of `#` (disabled), `.` (empty),
    /// `S` (sheep) and `F` (fox).
    ///
    /// The parsed board must contain exactly one fox, and every border cell
    /// must be disabled (move generation relies on the fence to keep jump
    /// landings in bounds). The sheep-count normalization constant is taken
    /// from the canonical layout.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed diagram, a fox count other than one,
    /// or a playable border cell.
    pub fn from_rows(diagram: &str) -> crate::Result<Self> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(crate::Error::InvalidBoardHeight {
                expected: BOARD_SIZE,
                got: rows.len(),
            });
        }

        let mut cells = [[Cell::Disabled; BOARD_SIZE]; BOARD_SIZE];
        let mut foxes = Vec::new();
        let mut sheep = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(crate::Error::InvalidBoardWidth {
                    row,
                    expected: BOARD_SIZE,
                    got: chars.len(),
                });
            }
            for (col, &c) in chars.iter().enumerate() {
                let cell =
                    Cell::from_char(c).ok_or(crate::Error::InvalidCellCharacter {
                        character: c,
                        row,
                        col,
                    })?;
                let on_border =
                    row == 0 || row == BOARD_SIZE - 1 || col == 0 || col == BOARD_SIZE - 1;
                if on_border && cell != Cell::Disabled {
                    return Err(crate::Error::OpenBorder { row, col });
                }
                match cell {
                    Cell::Fox => foxes.push(Pos::new(row, col)),
                    Cell::Sheep => sheep.push(Pos::new(row, col)),
                    _ => {}
                }
                cells[row][col] = cell;
            }
        }

        if foxes.len() != 1 {
            return Err(crate::Error::FoxCount { found: foxes.len() });
        }

        Ok(Board {
            cells,
            fox: foxes[0],
            sheep,
            sheep_max: SHEEP_MAX,
        })
    }

    /// Cell at a position
    pub fn cell(&self, pos: Pos) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Current fox position
    pub fn fox(&self) -> Pos {
        self.fox
    }

    /// Current sheep positions (order is not meaningful)
    pub fn sheep(&self) -> &[Pos] {
        &self.sheep
    }

    pub fn sheep_count(&self) -> usize {
        self.sheep.len()
    }

    pub fn sheep_max(&self) -> usize {
        self.sheep_max
    }

    /// Adjacent playable cells of a position.
    ///
    /// Border cells have no neighbors. Interior cells with an even
    /// row/column difference connect diagonally as well as straight; the
    /// rest connect only straight. Disabled cells are excluded.
    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        if pos.row == 0
            || pos.row == BOARD_SIZE - 1
            || pos.col == 0
            || pos.col == BOARD_SIZE - 1
        {
            return Vec::new();
        }

        const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
        const STRAIGHT: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

        let mut offsets: Vec<(isize, isize)> = Vec::with_capacity(8);
        if pos.row.abs_diff(pos.col) % 2 == 0 {
            offsets.extend_from_slice(&DIAGONAL);
        }
        offsets.extend_from_slice(&STRAIGHT);

        offsets
            .into_iter()
            .map(|(dr, dc)| {
                Pos::new(
                    (pos.row as isize + dr) as usize,
                    (pos.col as isize + dc) as usize,
                )
            })
            .filter(|&n| self.cell(n) != Cell::Disabled)
            .collect()
    }

    /// Where the fox lands when jumping over `over`: two steps along the
    /// fox-to-`over` line. In bounds as long as the border fence holds.
    fn jump_landing(&self, over: Pos) -> Pos {
        Pos::new(
            (2 * over.row as isize - self.fox.row as isize) as usize,
            (2 * over.col as isize - self.fox.col as isize) as usize,
        )
    }

    /// Whether the fox can capture the sheep on `over` (the landing cell
    /// behind it is empty).
    fn is_capturable(&self, over: Pos) -> bool {
        self.cell(over) == Cell::Sheep && self.cell(self.jump_landing(over)) == Cell::Empty
    }

    /// All legal fox actions: steps onto empty neighbors and jump captures
    /// over capturable adjacent sheep.
    pub fn fox_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        for n in self.neighbors(self.fox) {
            if self.cell(n) == Cell::Empty {
                actions.push(Action::new(self.fox, n));
            } else if self.is_capturable(n) {
                actions.push(Action::new(self.fox, self.jump_landing(n)));
            }
        }
        actions
    }

    /// All legal sheep actions: every sheep may step onto any empty
    /// neighbor. Sheep never capture.
    pub fn sheep_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        for &sheep in &self.sheep {
            for n in self.neighbors(sheep) {
                if self.cell(n) == Cell::Empty {
                    actions.push(Action::new(sheep, n));
                }
            }
        }
        actions
    }

    /// Legal actions for a side
    pub fn actions_for(&self, side: Side) -> Vec<Action> {
        match side {
            Side::Fox => self.fox_actions(),
            Side::Sheep => self.sheep_actions(),
        }
    }

    /// Number of empty cells adjacent to the fox
    pub fn fox_move_count(&self) -> usize {
        self.neighbors(self.fox)
            .into_iter()
            .filter(|&n| self.cell(n) == Cell::Empty)
            .count()
    }

    /// Number of captures currently available to the fox
    pub fn fox_capture_count(&self) -> usize {
        self.neighbors(self.fox)
            .into_iter()
            .filter(|&n| self.is_capturable(n))
            .count()
    }

    /// Apply an action to the board.
    ///
    /// A non-empty destination makes this a silent no-op; only generated
    /// legal actions are expected to reach this call. A two-step fox move is
    /// a capture and removes the sheep at the midpoint. Grid and piece
    /// projections are updated together.
    pub fn apply(&mut self, action: Action) {
        let Action { from, to } = action;
        if self.cell(to) != Cell::Empty {
            return;
        }

        match self.cell(from) {
            Cell::Sheep => {
                self.remove_sheep(from);
                self.sheep.push(to);
            }
            Cell::Fox => {
                self.fox = to;
                if action.is_jump() {
                    let mid = from.midpoint(to);
                    if self.cell(mid) == Cell::Sheep {
                        self.cells[mid.row][mid.col] = Cell::Empty;
                        self.remove_sheep(mid);
                    }
                }
            }
            _ => {}
        }

        self.cells[to.row][to.col] = self.cells[from.row][from.col];
        self.cells[from.row][from.col] = Cell::Empty;
    }

    /// Reverse a previously applied action, restoring the exact prior
    /// position. For a capture the jumped sheep reappears at the midpoint.
    /// A non-empty origin makes this a silent no-op, mirroring [`apply`].
    ///
    /// [`apply`]: Board::apply
    pub fn undo(&mut self, action: Action) {
        let Action { from, to } = action;
        if self.cell(from) != Cell::Empty {
            return;
        }

        match self.cell(to) {
            Cell::Sheep => {
                self.remove_sheep(to);
                self.sheep.push(from);
            }
            Cell::Fox => {
                self.fox = from;
                if action.is_jump() {
                    // Two-step fox moves are only generated as captures.
                    let mid = from.midpoint(to);
                    self.cells[mid.row][mid.col] = Cell::Sheep;
                    self.sheep.push(mid);
                }
            }
            _ => {}
        }

        self.cells[from.row][from.col] = self.cells[to.row][to.col];
        self.cells[to.row][to.col] = Cell::Empty;
    }

    /// Average number of empty cells adjacent to each sheep (floored).
    /// Higher values mean a more mobile, scattered flock.
    pub fn sheep_separation(&self) -> usize {
        if self.sheep.is_empty() {
            return 0;
        }
        let total: usize = self
            .sheep
            .iter()
            .map(|&s| {
                self.neighbors(s)
                    .into_iter()
                    .filter(|&n| self.cell(n) == Cell::Empty)
                    .count()
            })
            .sum();
        total / self.sheep.len()
    }

    /// Mean Manhattan distance from the fox to each sheep (floored)
    pub fn avg_fox_sheep_distance(&self) -> usize {
        if self.sheep.is_empty() {
            return 0;
        }
        let total: usize = self.sheep.iter().map(|&s| s.distance(self.fox)).sum();
        total / self.sheep.len()
    }

    fn remove_sheep(&mut self, pos: Pos) {
        if let Some(index) = self.sheep.iter().position(|&s| s == pos) {
            self.sheep.swap_remove(index);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Boards compare as positions: the sheep projection is a set, so its
/// internal ordering is ignored.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        if self.cells != other.cells || self.fox != other.fox {
            return false;
        }
        let mut mine = self.sheep.clone();
        let mut theirs = other.sheep.clone();
        mine.sort_unstable();
        theirs.sort_unstable();
        mine == theirs
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
