#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Wizard Maze explorer.
//!
//! This crate defines the symbolic vocabulary that connects the level data
//! model, the rule engine, the screen state machine and the crawler. None of
//! the values here reference concrete media: sounds, music, messages and
//! cells are identifiers that an external asset map resolves when the
//! explored screen graph is rendered.

use std::{fmt, ops::Add};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of gems the dragon demands before it steps aside.
pub const DRAGON_BRIBE_GEMS: u32 = 3;

/// Single tile of a level grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cell {
    /// Starting location of the player. Replaced by [`Cell::Space`] on load.
    Wizard,
    /// Empty floor.
    Space,
    /// Impassable wall.
    Wall,
    /// Key that can be picked up.
    Key,
    /// Locked door that consumes a key.
    Lock,
    /// Door that has been unlocked and stays open.
    Door,
    /// Gem that can be picked up.
    Gem,
    /// Dragon that lets the player pass for a bribe.
    Dragon,
    /// Princess that talks but never moves.
    Princess,
}

impl Cell {
    /// Every cell kind, in declaration order.
    pub const ALL: [Cell; 9] = [
        Cell::Wizard,
        Cell::Space,
        Cell::Wall,
        Cell::Key,
        Cell::Lock,
        Cell::Door,
        Cell::Gem,
        Cell::Dragon,
        Cell::Princess,
    ];

    /// Glyph used to author this cell in textual levels.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Wizard => "\u{1F9D9}",
            Self::Space => "\u{2B1B}",
            Self::Wall => "\u{1F9F1}",
            Self::Key => "\u{1F5DD}\u{FE0F}",
            Self::Lock => "\u{1F512}",
            Self::Door => "\u{1F6AA}",
            Self::Gem => "\u{1F48E}",
            Self::Dragon => "\u{1F432}",
            Self::Princess => "\u{1F934}",
        }
    }

    /// Resolves an authored glyph back into its cell kind.
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cell| cell.glyph() == glyph)
    }
}

/// Player-triggerable input bound to a screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Button {
    /// Starts the game from the main menu.
    Play,
    /// Dismisses a dialog.
    Close,
    /// Moves toward decreasing row indices.
    Up,
    /// Moves toward increasing row indices.
    Down,
    /// Moves toward decreasing column indices.
    Left,
    /// Moves toward increasing column indices.
    Right,
}

impl Button {
    /// Glyph that labels the button.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Play => "\u{25B6}\u{FE0F}",
            Self::Close => "\u{274C}",
            Self::Up => "\u{2B06}\u{FE0F}",
            Self::Down => "\u{2B07}\u{FE0F}",
            Self::Left => "\u{2B05}\u{FE0F}",
            Self::Right => "\u{27A1}\u{FE0F}",
        }
    }

    /// Movement offset applied by directional buttons.
    #[must_use]
    pub const fn delta(self) -> Option<Position> {
        match self {
            Self::Up => Some(Position::new(0, -1)),
            Self::Down => Some(Position::new(0, 1)),
            Self::Left => Some(Position::new(-1, 0)),
            Self::Right => Some(Position::new(1, 0)),
            Self::Play | Self::Close => None,
        }
    }
}

/// Sound cue played when a screen appears.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sound {
    /// Silence.
    None,
    /// Menu button press.
    ButtonHit,
    /// Bumping into a locked door.
    DoorHit,
    /// Unlocking a door with a key.
    DoorUnlock,
    /// The dragon roars.
    DragonRoar,
    /// A regular step.
    FloorWalk,
    /// Picking up a gem.
    GemPickup,
    /// Picking up a key.
    KeyPickup,
    /// The princess laughs.
    PrincessLaugh,
    /// Bumping into a wall.
    WallHit,
}

/// Background music attached to a screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Music {
    /// No music.
    None,
    /// Title theme.
    Theme,
}

/// Visual transition used when a screen appears.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Effect {
    /// Cut without a transition.
    None,
    /// Cross fade.
    Fade,
    /// Wipe from the bottom edge upward.
    WipeUp,
}

/// Dialog text shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Message {
    /// The player has no key for a lock.
    DoorLocked,
    /// The dragon refuses to move.
    DragonBlock,
    /// The dragon accepted the gems.
    DragonBribe,
    /// The princess talks to the player.
    PrincessMessage,
}

/// Column and row offset inside a level grid.
///
/// Positions double as movement deltas, so both components are signed.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    column: i32,
    row: i32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index.
    #[must_use]
    pub const fn column(&self) -> i32 {
        self.column
    }

    /// Zero-based row index.
    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, other: Position) -> Position {
        Position::new(self.column + other.column, self.row + other.row)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Items carried by the player.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Inventory {
    keys: u32,
    gems: u32,
}

impl Inventory {
    /// Creates an inventory holding the provided counts.
    #[must_use]
    pub const fn new(keys: u32, gems: u32) -> Self {
        Self { keys, gems }
    }

    /// Number of keys carried.
    #[must_use]
    pub const fn keys(&self) -> u32 {
        self.keys
    }

    /// Number of gems carried.
    #[must_use]
    pub const fn gems(&self) -> u32 {
        self.gems
    }

    /// Produces a new inventory with the deltas applied.
    ///
    /// Counters never go below zero; a delta that would do so is rejected
    /// instead of clamped.
    pub fn change(self, keys: i32, gems: i32) -> Result<Self, ConfigurationError> {
        match (
            self.keys.checked_add_signed(keys),
            self.gems.checked_add_signed(gems),
        ) {
            (Some(keys), Some(gems)) => Ok(Self { keys, gems }),
            _ => Err(ConfigurationError::InventoryOutOfRange {
                keys: i64::from(self.keys) + i64::from(keys),
                gems: i64::from(self.gems) + i64::from(gems),
            }),
        }
    }
}

/// Malformed level data or an inconsistency that aborts exploration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No level was supplied to the main menu.
    #[error("no levels were configured")]
    NoLevels,
    /// The level has no rows or no cells.
    #[error("level contains no cells")]
    EmptyLevel,
    /// A row does not match the width of the first row.
    #[error("row {row} holds {found} cells but the level is {expected} cells wide")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A token does not name any known cell.
    #[error("unknown glyph `{glyph}` at column {column}, row {row}")]
    UnknownGlyph {
        /// Zero-based row of the token.
        row: usize,
        /// Zero-based column of the token.
        column: usize,
        /// Token text as authored.
        glyph: String,
    },
    /// The level has no wizard start cell.
    #[error("cannot find the wizard start cell in the level")]
    MissingStartCell,
    /// The rule engine has no rule for the cell the player stepped on.
    #[error("unhandled cell {cell:?} at {position}")]
    UnhandledCell {
        /// Cell that was entered.
        cell: Cell,
        /// Location of the cell.
        position: Position,
    },
    /// A lookup landed outside the level grid.
    #[error("position {position} lies outside the level")]
    OutOfBounds {
        /// Requested position.
        position: Position,
    },
    /// An inventory change would leave a counter outside `u32`.
    #[error("inventory change would leave {keys} keys and {gems} gems")]
    InventoryOutOfRange {
        /// Key count the change would produce.
        keys: i64,
        /// Gem count the change would produce.
        gems: i64,
    },
}
