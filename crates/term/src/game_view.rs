//! MazeView: maps the grid and entity positions into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Grid;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Notice, Position, Tile, HELP_TEXT, MONSTER_GLYPH, PLAYER_GLYPH};

/// Rows between the bottom of the maze and the help line.
const HELP_GAP: u16 = 1;

/// Colours per glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub wall: CellStyle,
    pub floor: CellStyle,
    pub exit: CellStyle,
    pub player: CellStyle,
    pub monster: CellStyle,
    pub text: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: CellStyle::new(Rgb::new(150, 150, 160), false),
            floor: CellStyle::new(Rgb::new(90, 90, 100), false),
            exit: CellStyle::new(Rgb::new(80, 220, 120), true),
            player: CellStyle::new(Rgb::new(240, 220, 80), true),
            monster: CellStyle::new(Rgb::new(230, 70, 70), true),
            text: CellStyle::default(),
        }
    }
}

/// Lays out one frame: the maze, a blank row, the help line and an
/// optional status line.
#[derive(Debug, Clone, Default)]
pub struct MazeView {
    palette: Palette,
}

impl MazeView {
    /// Frame size for `grid`.
    pub fn frame_size(&self, grid: &Grid) -> (u16, u16) {
        let text_w = [HELP_TEXT.len(), max_notice_len()]
            .into_iter()
            .max()
            .unwrap_or(0);
        let width = grid.width().max(text_w);
        // maze + gap + help + status
        let height = grid.height() + HELP_GAP as usize + 2;
        (clamp_u16(width), clamp_u16(height))
    }

    pub fn render(
        &self,
        grid: &Grid,
        player: Position,
        monster: Position,
        notice: Option<Notice>,
    ) -> FrameBuffer {
        let (w, h) = self.frame_size(grid);
        let mut fb = FrameBuffer::new(w, h);
        self.render_into(grid, player, monster, notice, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to fit.
    pub fn render_into(
        &self,
        grid: &Grid,
        player: Position,
        monster: Position,
        notice: Option<Notice>,
        fb: &mut FrameBuffer,
    ) {
        let (w, h) = self.frame_size(grid);
        fb.resize(w, h);
        fb.clear(self.palette.text.into_cell(' '));

        for (y, row) in grid.rows().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                let style = match tile {
                    Tile::Wall => self.palette.wall,
                    Tile::Floor => self.palette.floor,
                    Tile::Exit => self.palette.exit,
                };
                fb.put_char(clamp_u16(x), clamp_u16(y), tile.glyph(), style);
            }
        }

        // Monster first so the player wins a shared cell.
        self.draw_entity(fb, grid, monster, MONSTER_GLYPH, self.palette.monster);
        self.draw_entity(fb, grid, player, PLAYER_GLYPH, self.palette.player);

        let help_y = clamp_u16(grid.height()) + HELP_GAP;
        fb.put_str(0, help_y, HELP_TEXT, self.palette.text);
        if let Some(notice) = notice {
            fb.put_str(0, help_y + 1, notice.text(), self.palette.text);
        }
    }

    fn draw_entity(
        &self,
        fb: &mut FrameBuffer,
        grid: &Grid,
        pos: Position,
        glyph: char,
        style: CellStyle,
    ) {
        if !grid.in_bounds(pos) {
            return;
        }
        let (Ok(x), Ok(y)) = (u16::try_from(pos.x), u16::try_from(pos.y)) else {
            return;
        };
        fb.put_char(x, y, glyph, style);
    }
}

fn max_notice_len() -> usize {
    [
        Notice::InvalidCommand,
        Notice::Blocked,
        Notice::Escaped,
        Notice::Caught,
    ]
    .iter()
    .map(|n| n.text().len())
    .max()
    .unwrap_or(0)
}

fn clamp_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Grid {
        Grid::parse(&["#E#", "#.#", "#.#"]).unwrap()
    }

    #[test]
    fn frame_is_wide_enough_for_help_text() {
        let (w, h) = MazeView::default().frame_size(&tiny());
        assert_eq!(w as usize, HELP_TEXT.len());
        assert_eq!(h, 3 + 1 + 2);
    }

    #[test]
    fn entities_use_their_styles() {
        let view = MazeView::default();
        let palette = Palette::default();
        let fb = view.render(&tiny(), Position::new(1, 2), Position::new(1, 1), None);
        assert_eq!(fb.get(1, 2).unwrap().style, palette.player);
        assert_eq!(fb.get(1, 1).unwrap().style, palette.monster);
        assert_eq!(fb.get(1, 0).unwrap().style, palette.exit);
    }

    #[test]
    fn off_grid_entities_are_skipped() {
        let fb = MazeView::default().render(&tiny(), Position::new(-1, 0), Position::new(5, 0), None);
        assert_eq!(fb.row_text(0), "#E#");
    }
}
