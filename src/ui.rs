//! Console output: plain and colored progress text.
//!
//! Everything user-facing goes through [`Painter`], so the run logic does not
//! care whether it writes to a terminal or to a buffer.

use std::io::{self, Stdout, Write};

use crossterm::style::{self, Stylize};

/// The colors the progress lines use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Yellow,
    Magenta,
    Red,
}

impl From<Color> for style::Color {
    fn from(c: Color) -> Self {
        match c {
            Color::Green => style::Color::DarkGreen,
            Color::Yellow => style::Color::DarkYellow,
            Color::Magenta => style::Color::DarkMagenta,
            Color::Red => style::Color::DarkRed,
        }
    }
}

pub trait Painter {
    fn paint(&mut self, text: &str, color: Color) -> io::Result<()>;

    fn plain(&mut self, text: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A [`Painter`] over any writer. Color can be switched off.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Painter for Console<W> {
    fn paint(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.color {
            write!(self.out, "{}", text.with(color.into()))
        } else {
            self.out.write_all(text.as_bytes())
        }
    }

    fn plain(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Capture of everything painted, colors dropped.
#[cfg(test)]
pub(crate) fn buffer_console() -> Console<Vec<u8>> {
    Console::new(Vec::new(), false)
}

#[cfg(test)]
pub(crate) fn captured(console: Console<Vec<u8>>) -> String {
    String::from_utf8(console.into_inner()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncolored_console_writes_text_verbatim() {
        let mut console = buffer_console();
        console.plain("[").unwrap();
        console.paint("+", Color::Green).unwrap();
        console.plain("] ok\n").unwrap();
        assert_eq!(captured(console), "[+] ok\n");
    }

    #[test]
    fn colored_console_wraps_text_in_escape_codes() {
        let mut console = Console::new(Vec::new(), true);
        console.paint("=>", Color::Yellow).unwrap();
        let out = captured(console);
        // crossterm honors NO_COLOR on its own.
        if std::env::var_os("NO_COLOR").is_none() {
            assert_eq!(out, "\u{1b}[38;5;3m=>\u{1b}[39m");
        } else {
            assert!(out.contains("=>"));
        }
    }
}
