//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full redraw: clear, home the cursor, print all rows. The
//! terminal stays in cooked mode so the prompt and the typed command sit on
//! the line below the frame.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::{Grid, Renderer};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::MazeView;
use crate::types::{Notice, Position};

pub struct TerminalRenderer<W: Write> {
    out: W,
    view: MazeView,
    fb: FrameBuffer,
    buf: Vec<u8>,
    notice: Option<Notice>,
    color: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            view: MazeView::default(),
            fb: FrameBuffer::new(0, 0),
            buf: Vec::with_capacity(4 * 1024),
            notice: None,
            color: true,
        }
    }

    /// Emit glyphs only, no colour or attribute sequences.
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// Last frame drawn.
    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, grid: &Grid, player: Position, monster: Position) -> io::Result<()> {
        let notice = self.notice.take();
        self.view
            .render_into(grid, player, monster, notice, &mut self.fb);

        self.buf.clear();
        encode_full_into(&self.fb, &mut self.buf, self.color)?;
        self.flush_buf()
    }

    fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// Trailing blanks on each row are not printed.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>, color: bool) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        let used = (0..fb.width())
            .rev()
            .find(|&x| fb.get(x, y).is_some_and(|cell| cell.ch != ' '))
            .map_or(0, |x| x + 1);

        for x in 0..used {
            let cell = fb.get(x, y).unwrap_or_default();
            if color && current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        out.queue(Print("\r\n"))?;
    }

    if color {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> io::Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
