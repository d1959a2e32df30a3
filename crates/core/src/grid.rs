//! Grid module - the fixed level layout
//!
//! The grid is parsed once from its ASCII rows and never mutated afterwards.
//! Uses a flat row-major vector; coordinates are (x, y) with x growing right
//! and y growing down, row 0 at the top.

use tracing::debug;

use crate::error::MazeError;
use crate::types::{Position, Tile};

/// Immutable level: walls, floor and exactly one exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major (y * width + x)
    tiles: Vec<Tile>,
    exit: Position,
}

impl Grid {
    /// Parse a level from its rows.
    ///
    /// Fails if the level is empty, ragged, contains an unknown glyph, or
    /// does not have exactly one exit.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = match rows.first() {
            Some(row) => row.as_ref().chars().count(),
            None => return Err(MazeError::EmptyGrid),
        };
        if width == 0 {
            return Err(MazeError::EmptyGrid);
        }

        let mut tiles = Vec::with_capacity(width * height);
        let mut exits = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(MazeError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, glyph) in row.chars().enumerate() {
                let tile = Tile::from_glyph(glyph).ok_or(MazeError::UnknownGlyph { glyph, x, y })?;
                if tile == Tile::Exit {
                    exits.push(Position::new(x as i32, y as i32));
                }
                tiles.push(tile);
            }
        }

        let exit = match exits.as_slice() {
            [] => return Err(MazeError::MissingExit),
            [only] => *only,
            many => return Err(MazeError::MultipleExits { count: many.len() }),
        };

        debug!(width, height, exit = %exit, "grid parsed");

        Ok(Self {
            width,
            height,
            tiles,
            exit,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Location of the single exit tile.
    pub fn exit(&self) -> Position {
        self.exit
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Tile at `pos`, or `OutOfBounds` outside `[0,width)×[0,height)`.
    pub fn tile_at(&self, pos: Position) -> Result<Tile, MazeError> {
        self.index(pos)
            .map(|idx| self.tiles[idx])
            .ok_or(MazeError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            })
    }

    /// In bounds and not a wall.
    pub fn is_passable(&self, pos: Position) -> bool {
        matches!(self.tile_at(pos), Ok(tile) if tile.is_passable())
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width)
    }
}
