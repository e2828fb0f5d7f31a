use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style;
use crossterm::style::Color;
use crossterm::terminal;

use crate::world::WINDOW;
use crate::world::Window;

/// An RGB colour, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// All channels off. Dead cells.
pub const OFF: Rgb = Rgb(0, 0, 0);
pub const RED: Rgb = Rgb(255, 0, 0);
pub const YELLOW: Rgb = Rgb(255, 255, 0);
pub const GREEN: Rgb = Rgb(0, 255, 0);
pub const BLUE: Rgb = Rgb(0, 0, 255);
pub const WHITE: Rgb = Rgb(255, 255, 255);

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::Rgb { r, g, b }
    }
}

/// The pixels of one frame, row-major
pub type Pixels = [Rgb; WINDOW * WINDOW];

/// How cell states are coloured on the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub alive: Rgb,
    pub dead: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: GREEN,
            dead: OFF,
        }
    }
}

impl Palette {
    pub fn paint(&self, window: &Window) -> Pixels {
        let cells = *window.cells();

        cells.map(|c| if c.is_alive() { self.alive } else { self.dead })
    }
}

/// An 8x8 pixel matrix that can also scroll a line of text.
pub trait Screen {
    /// Set every pixel of the matrix at once
    fn render_window(&mut self, pixels: &Pixels) -> io::Result<()>;

    /// Turn every pixel off
    fn clear(&mut self) -> io::Result<()>;

    /// Show a short message in the given colour
    fn show_banner(&mut self, text: &str, color: Rgb) -> io::Result<()>;
}

/// Draws the matrix in a terminal, each pixel two columns wide so it comes out roughly square.
///
/// The matrix occupies the top `WINDOW` lines. Banners are written on the line below it.
pub struct TerminalScreen<W: Write> {
    out: W,
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn render_window(&mut self, pixels: &Pixels) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0))?;

        for row in pixels.chunks(WINDOW) {
            for &px in row {
                queue!(
                    self.out,
                    style::SetBackgroundColor(px.into()),
                    style::Print("  ")
                )?;
            }

            queue!(self.out, style::ResetColor, cursor::MoveToNextLine(1))?;
        }

        self.out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        self.out.flush()
    }

    fn show_banner(&mut self, text: &str, color: Rgb) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, WINDOW as u16 + 1),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::SetForegroundColor(color.into()),
            style::Print(text),
            style::ResetColor,
            cursor::MoveToNextLine(1)
        )?;

        self.out.flush()
    }
}
