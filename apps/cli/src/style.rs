//! Terminal styling for the quiz prompt.
//!
//! Every method is a no-op in plain mode, so callers never branch on it.

use crossterm::cursor::MoveUp;
use crossterm::queue;
use crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};
use std::io::{self, Write};

const CORRECT: Color = Color::AnsiValue(82);
const INCORRECT: Color = Color::AnsiValue(124);
const ANSWERS: Color = Color::AnsiValue(93);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    colors: bool,
}

impl Style {
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Colors only when stdout is a terminal and plain mode was not requested.
    pub fn detect(plain: bool) -> Self {
        use std::io::IsTerminal;
        Self::new(!plain && io::stdout().is_terminal())
    }

    pub fn colors(&self) -> bool {
        self.colors
    }

    pub fn bold<W: Write>(&self, w: &mut W) -> io::Result<()> {
        self.attribute(w, Attribute::Bold)
    }

    pub fn inverted<W: Write>(&self, w: &mut W) -> io::Result<()> {
        self.attribute(w, Attribute::Reverse)
    }

    pub fn reset<W: Write>(&self, w: &mut W) -> io::Result<()> {
        self.attribute(w, Attribute::Reset)
    }

    pub fn correct<W: Write>(&self, w: &mut W) -> io::Result<()> {
        self.foreground(w, CORRECT)
    }

    pub fn incorrect<W: Write>(&self, w: &mut W) -> io::Result<()> {
        self.foreground(w, INCORRECT)
    }

    pub fn answers<W: Write>(&self, w: &mut W) -> io::Result<()> {
        self.foreground(w, ANSWERS)
    }

    pub fn reset_foreground<W: Write>(&self, w: &mut W) -> io::Result<()> {
        self.foreground(w, Color::Reset)
    }

    pub fn cursor_up<W: Write>(&self, w: &mut W, lines: u16) -> io::Result<()> {
        if !self.colors {
            return Ok(());
        }
        queue!(w, MoveUp(lines))?;
        w.flush()
    }

    fn attribute<W: Write>(&self, w: &mut W, attribute: Attribute) -> io::Result<()> {
        if !self.colors {
            return Ok(());
        }
        queue!(w, SetAttribute(attribute))?;
        w.flush()
    }

    fn foreground<W: Write>(&self, w: &mut W, color: Color) -> io::Result<()> {
        if !self.colors {
            return Ok(());
        }
        queue!(w, SetForegroundColor(color))?;
        w.flush()
    }
}
