#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Immutable level and game-state model for the Wizard Maze explorer.
//!
//! Every mutator returns a fresh value. Levels share their cell buffer until
//! a cell is edited, at which point the edited level receives its own copy,
//! so any number of states can hold the same level without aliasing.

mod parse;

use std::sync::Arc;

use serde::Serialize;
use wizard_maze_core::{Cell, ConfigurationError, Inventory, Position};

/// Built-in level explored when no level is configured.
pub const DEFAULT_LEVEL: [&str; 12] = [
    "🧱🧱🧱🧱🧱🧱🧱🧱🧱🧱🧱🧱🧱🧱🧱🧱",
    "🧱💎⬛⬛⬛🧱⬛🤴⬛⬛🧱⬛⬛⬛⬛🧱",
    "🧱⬛🧱🧱⬛🧱🧱🧱🧱🐲🧱⬛🧱🧱⬛🧱",
    "🧱⬛⬛🧱⬛⬛🧱⬛🧱⬛⬛⬛🧱⬛⬛🧱",
    "🧱🧱🧱🧱🧱⬛🧱⬛⬛⬛🧱⬛🧱⬛🧱🧱",
    "🧱🗝️⬛⬛🧱⬛🧱🧱🔒🧱🧱🧱🧱⬛🧱🧱",
    "🧱🧱🧱⬛🧱⬛⬛⬛⬛🧱⬛⬛🧱⬛⬛🧱",
    "🧱💎🧱⬛🧱🧱🧱🧱⬛🧱⬛🧱🧱🧱⬛🧱",
    "🧱⬛🧱⬛⬛⬛⬛🧱⬛🧱⬛⬛⬛🧱⬛🧱",
    "🧱⬛🧱🧱⬛🧱⬛🧱⬛🧱🧱🧱⬛🧱⬛🧱",
    "🧱⬛⬛⬛⬛🧱⬛⬛🧙⬛⬛⬛⬛🧱💎🧱",
    "🧱🧱🧱🧱🧱🧱🧱🧱🧱🧱🧱🧱🧱🧱🧱🧱",
];

/// Rectangular grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Level {
    columns: usize,
    rows: usize,
    cells: Arc<Vec<Cell>>,
}

impl Level {
    /// Builds a level from row-major cells.
    ///
    /// Fails with [`ConfigurationError::EmptyLevel`] when there are no cells
    /// and [`ConfigurationError::RaggedRow`] when a row differs in width
    /// from the first.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, ConfigurationError> {
        let Some(width) = rows.first().map(Vec::len) else {
            return Err(ConfigurationError::EmptyLevel);
        };
        if width == 0 {
            return Err(ConfigurationError::EmptyLevel);
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ConfigurationError::RaggedRow {
                row,
                expected: width,
                found: cells.len(),
            });
        }

        let height = rows.len();
        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        Ok(Self {
            columns: width,
            rows: height,
            cells: Arc::new(cells),
        })
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the cell at the provided position.
    pub fn cell(&self, position: Position) -> Result<Cell, ConfigurationError> {
        self.index(position)
            .and_then(|index| self.cells.get(index).copied())
            .ok_or(ConfigurationError::OutOfBounds { position })
    }

    /// Returns a new level with exactly one cell replaced.
    pub fn change(&self, position: Position, replace: Cell) -> Result<Self, ConfigurationError> {
        let index = self
            .index(position)
            .ok_or(ConfigurationError::OutOfBounds { position })?;
        let mut cells = Arc::clone(&self.cells);
        Arc::make_mut(&mut cells)[index] = replace;
        Ok(Self {
            columns: self.columns,
            rows: self.rows,
            cells,
        })
    }

    /// Locates the first occurrence of `search` in row-major order.
    #[must_use]
    pub fn find(&self, search: Cell) -> Option<Position> {
        let index = self.cells.iter().position(|cell| *cell == search)?;
        let column = i32::try_from(index % self.columns).ok()?;
        let row = i32::try_from(index / self.columns).ok()?;
        Some(Position::new(column, row))
    }

    /// Iterates over the grid one row at a time.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.columns)
    }

    fn index(&self, position: Position) -> Option<usize> {
        let column = usize::try_from(position.column()).ok()?;
        let row = usize::try_from(position.row()).ok()?;
        (column < self.columns && row < self.rows).then(|| row * self.columns + column)
    }
}

/// Snapshot of a running game: the level, the player and their items.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct State {
    level: Level,
    position: Position,
    inventory: Inventory,
}

impl State {
    /// Creates a state from its parts.
    #[must_use]
    pub const fn new(level: Level, position: Position, inventory: Inventory) -> Self {
        Self {
            level,
            position,
            inventory,
        }
    }

    /// Parses an authored level and places the player on the wizard cell.
    ///
    /// The first wizard glyph in row-major order becomes the start position
    /// and is replaced with [`Cell::Space`]. The inventory starts empty.
    pub fn create<S: AsRef<str>>(rows: &[S]) -> Result<Self, ConfigurationError> {
        let level = Level::from_rows(parse::parse_grid(rows)?)?;
        let position = level
            .find(Cell::Wizard)
            .ok_or(ConfigurationError::MissingStartCell)?;
        let level = level.change(position, Cell::Space)?;
        Ok(Self::new(level, position, Inventory::default()))
    }

    /// Level currently in play.
    #[must_use]
    pub const fn level(&self) -> &Level {
        &self.level
    }

    /// Location of the player.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Items carried by the player.
    #[must_use]
    pub const fn inventory(&self) -> Inventory {
        self.inventory
    }

    /// Returns a new state with the level and inventory optionally replaced
    /// and `delta` added to the position.
    #[must_use]
    pub fn change(
        &self,
        level: Option<Level>,
        delta: Position,
        inventory: Option<Inventory>,
    ) -> Self {
        Self {
            level: level.unwrap_or_else(|| self.level.clone()),
            position: self.position + delta,
            inventory: inventory.unwrap_or(self.inventory),
        }
    }

    /// Shorthand for a pure positional move.
    #[must_use]
    pub fn moved(&self, delta: Position) -> Self {
        self.change(None, delta, None)
    }

    /// Cell currently under the player.
    pub fn current_cell(&self) -> Result<Cell, ConfigurationError> {
        self.level.cell(self.position)
    }
}
