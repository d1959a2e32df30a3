//! Grid tests - parsing, validation and tile lookup

use maze_escape::core::{Grid, MazeError};
use maze_escape::types::{Position, Tile, REFERENCE_MAP};

#[test]
fn test_reference_grid_dimensions() {
    let grid = Grid::parse(&REFERENCE_MAP).unwrap();
    assert_eq!(grid.width(), 13);
    assert_eq!(grid.height(), 13);
    assert_eq!(grid.exit(), Position::new(7, 0));
}

#[test]
fn test_reference_grid_tiles() {
    let grid = Grid::parse(&REFERENCE_MAP).unwrap();

    assert_eq!(grid.tile_at(Position::new(0, 0)), Ok(Tile::Wall));
    assert_eq!(grid.tile_at(Position::new(7, 0)), Ok(Tile::Exit));
    assert_eq!(grid.tile_at(Position::new(1, 10)), Ok(Tile::Floor));
    assert_eq!(grid.tile_at(Position::new(0, 11)), Ok(Tile::Wall));

    // Start markers are plain floor.
    assert_eq!(grid.tile_at(Position::new(2, 11)), Ok(Tile::Floor));
    assert_eq!(grid.tile_at(Position::new(11, 3)), Ok(Tile::Floor));
}

#[test]
fn test_tile_at_out_of_bounds() {
    let grid = Grid::parse(&REFERENCE_MAP).unwrap();

    for pos in [
        Position::new(-1, 0),
        Position::new(0, -1),
        Position::new(13, 0),
        Position::new(0, 13),
    ] {
        assert_eq!(
            grid.tile_at(pos),
            Err(MazeError::OutOfBounds {
                pos,
                width: 13,
                height: 13
            })
        );
    }
}

#[test]
fn test_is_passable() {
    let grid = Grid::parse(&REFERENCE_MAP).unwrap();

    assert!(grid.is_passable(Position::new(1, 1)));
    assert!(grid.is_passable(Position::new(7, 0)), "exit is passable");
    assert!(!grid.is_passable(Position::new(0, 0)));
    assert!(!grid.is_passable(Position::new(7, -1)));
    assert!(!grid.is_passable(Position::new(13, 1)));
}

#[test]
fn test_passable_matches_tile_everywhere() {
    let grid = Grid::parse(&REFERENCE_MAP).unwrap();
    for y in 0..13 {
        for x in 0..13 {
            let pos = Position::new(x, y);
            let tile = grid.tile_at(pos).unwrap();
            assert_eq!(grid.is_passable(pos), tile != Tile::Wall, "at {}", pos);
        }
    }
}

#[test]
fn test_parse_rejects_empty() {
    let rows: [&str; 0] = [];
    assert_eq!(Grid::parse(&rows), Err(MazeError::EmptyGrid));
    assert_eq!(Grid::parse(&[""]), Err(MazeError::EmptyGrid));
}

#[test]
fn test_parse_rejects_ragged_rows() {
    assert_eq!(
        Grid::parse(&["#E#", "#.", "###"]),
        Err(MazeError::RaggedRow {
            row: 1,
            expected: 3,
            found: 2
        })
    );
}

#[test]
fn test_parse_rejects_unknown_glyph() {
    assert_eq!(
        Grid::parse(&["#E#", "#?#"]),
        Err(MazeError::UnknownGlyph {
            glyph: '?',
            x: 1,
            y: 1
        })
    );
}

#[test]
fn test_parse_requires_exactly_one_exit() {
    assert_eq!(Grid::parse(&["###", "#.#"]), Err(MazeError::MissingExit));
    assert_eq!(
        Grid::parse(&["#EE", "#.E"]),
        Err(MazeError::MultipleExits { count: 3 })
    );
}

#[test]
fn test_errors_render_readable_messages() {
    let err = Grid::parse(&["#E#", "#."]).unwrap_err();
    assert_eq!(err.to_string(), "row 1 is 2 cells wide, expected 3");
}
