//! Core types module - shared data structures and constants
//!
//! Plain data used by every other crate: terrain tiles, directions, grid
//! positions, player commands and the outcome/state enums produced by the
//! engine. Nothing here performs I/O or owns game state.
//!
//! # Reference level
//!
//! The compiled-in level is a 13x13 maze:
//!
//! - **Exit**: the single `E` on row 0, at (7, 0)
//! - **Player start**: (1, 11)
//! - **Monster start**: (11, 3)
//!
//! The `@` and `M` glyphs embedded in [`REFERENCE_MAP`] are decoration only;
//! start positions come from [`PLAYER_START`] and [`MONSTER_START`].
//!
//! # Examples
//!
//! ```
//! use maze_escape_types::{Direction, Position, Tile};
//!
//! let from = Position::new(1, 11);
//! assert_eq!(from.step(Direction::Up), Position::new(1, 10));
//! assert!(Tile::Exit.is_passable());
//! ```

/// Reference level layout, row 0 at the top.
///
/// `#` wall, `.` floor, `E` exit. `@` and `M` mark the start cells and are
/// read as floor.
pub const REFERENCE_MAP: [&str; 13] = [
    "#######E#####",
    "#...........#",
    "#.#.##.##.###",
    "#.#...#...#M#",
    "#.###.#.##.##",
    "#...#.#.#...#",
    "#.##.###.##.#",
    "#.#.#.#.#.#.#",
    "#.#.###.#.#.#",
    "#.#...#...#.#",
    "#.#####.#####",
    "#.@.........#",
    "#############",
];

/// Player start on the reference level.
pub const PLAYER_START: Position = Position::new(1, 11);

/// Monster start on the reference level.
pub const MONSTER_START: Position = Position::new(11, 3);

/// Glyph drawn for the player.
pub const PLAYER_GLYPH: char = '@';

/// Glyph drawn for the monster.
pub const MONSTER_GLYPH: char = 'M';

/// Help line shown under the maze.
pub const HELP_TEXT: &str = "Use WASD to move. Find the 'E' to escape the monster!";

/// Prompt written before each command is read.
pub const PROMPT: &str = "Move: ";

/// Terrain of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Floor,
    Exit,
}

impl Tile {
    /// Map a level glyph to a tile.
    ///
    /// Entity markers (`@`, `M`) read as floor.
    ///
    /// ```
    /// use maze_escape_types::Tile;
    ///
    /// assert_eq!(Tile::from_glyph('#'), Some(Tile::Wall));
    /// assert_eq!(Tile::from_glyph('@'), Some(Tile::Floor));
    /// assert_eq!(Tile::from_glyph('?'), None);
    /// ```
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Tile::Wall),
            '.' | '@' | 'M' => Some(Tile::Floor),
            'E' => Some(Tile::Exit),
            _ => None,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Exit => 'E',
        }
    }

    /// Exit and floor are both walkable.
    pub fn is_passable(&self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

/// One of the four orthogonal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order the monster draws from.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Unit vector, y grows downward.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Keyboard letter bound to this direction.
    pub fn key(&self) -> char {
        match self {
            Direction::Up => 'w',
            Direction::Left => 'a',
            Direction::Down => 's',
            Direction::Right => 'd',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Cell coordinates. Negative values are representable so that a step off
/// the edge can be expressed and then rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell in `dir`. No bounds check.
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A command read from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move one cell.
    Move(Direction),
    /// Unrecognized input. Consumes no turn.
    Invalid,
    /// End of input or an explicit quit.
    Quit,
}

/// Lifecycle of a game. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::InProgress => "in_progress",
            GameState::Won => "won",
            GameState::Lost => "lost",
        }
    }
}

/// Result of an attempted move, for either entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Wall or edge of the grid; nothing changed.
    Blocked,
    /// Position updated, game continues.
    Moved,
    /// Player stepped onto the exit.
    Escaped,
    /// Player and monster share a cell.
    Caught,
}

impl MoveOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveOutcome::Blocked => "blocked",
            MoveOutcome::Moved => "moved",
            MoveOutcome::Escaped => "escaped",
            MoveOutcome::Caught => "caught",
        }
    }
}

/// Status messages surfaced to the player between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    InvalidCommand,
    Blocked,
    Escaped,
    Caught,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::InvalidCommand => "Invalid move. Use w, a, s, or d.",
            Notice::Blocked => "You can't move there!",
            Notice::Escaped => "Congratulations! You escaped the dungeon!",
            Notice::Caught => "Game Over! The monster caught you.",
        }
    }
}
