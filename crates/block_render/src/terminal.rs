//! Terminal output for animations.
//!
//! Frame generation never touches the terminal directly; the animation loop
//! talks to a [`Surface`], which keeps the cursor handling in one place and
//! lets tests record what would have been drawn.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{Print, ResetColor},
    terminal, QueueableCommand,
};

pub trait Surface {
    /// Prepare for the first frame.
    fn enter(&mut self) -> io::Result<()>;

    /// Return the cursor to the first line of a frame `lines` tall and clear
    /// everything below it.
    fn rewind(&mut self, lines: usize) -> io::Result<()>;

    fn write_frame(&mut self, frame: &str) -> io::Result<()>;

    /// Restore the terminal after the last frame.
    fn leave(&mut self) -> io::Result<()>;
}

/// [`Surface`] emitting crossterm escape sequences to any writer.
pub struct CrosstermSurface<W: Write> {
    out: W,
}

impl CrosstermSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CrosstermSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for CrosstermSurface<W> {
    fn enter(&mut self) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.queue(cursor::Hide)?;
        self.out.flush()
    }

    fn rewind(&mut self, lines: usize) -> io::Result<()> {
        // The cursor rests on the last line of the previous frame.
        let up = lines.saturating_sub(1);
        if up > 0 {
            self.out.queue(cursor::MoveUp(u16::try_from(up).unwrap_or(u16::MAX)))?;
        }
        self.out.queue(cursor::MoveToColumn(0))?;
        self.out.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        Ok(())
    }

    fn write_frame(&mut self, frame: &str) -> io::Result<()> {
        self.out.queue(Print(frame))?;
        self.out.flush()
    }

    fn leave(&mut self) -> io::Result<()> {
        self.out.queue(cursor::Show)?;
        self.out.queue(ResetColor)?;
        self.out.queue(Print("\n"))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitted(draw: impl FnOnce(&mut CrosstermSurface<Vec<u8>>) -> io::Result<()>) -> String {
        let mut surface = CrosstermSurface::new(Vec::new());
        draw(&mut surface).expect("writing to a Vec cannot fail");
        String::from_utf8(surface.into_inner()).expect("escape sequences are ASCII")
    }

    #[test]
    fn enter_hides_cursor() {
        let output = emitted(|surface| surface.enter());
        assert!(output.contains("\x1b[?25l"), "{output:?}");
    }

    #[test]
    fn rewind_moves_to_first_frame_line() {
        let output = emitted(|surface| surface.rewind(5));
        assert!(output.contains("\x1b[4A"), "{output:?}");
    }

    #[test]
    fn single_line_rewind_stays_on_line() {
        let output = emitted(|surface| surface.rewind(1));
        assert!(!output.contains('A'), "{output:?}");
    }

    #[test]
    fn leave_restores_cursor_and_color() {
        let output = emitted(|surface| surface.leave());
        assert!(output.contains("\x1b[?25h"), "{output:?}");
        assert!(output.contains("\x1b[0m"), "{output:?}");
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn frames_are_written_verbatim() {
        let output = emitted(|surface| surface.write_frame("##\n##"));
        assert_eq!(output, "##\n##");
    }
}
