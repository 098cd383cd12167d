use std::io;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// Ctrl-C or Esc. Raw mode swallows the signal, so the surface reports it instead.
    Abort,
    /// Anything without a character: arrows, function keys, resizes.
    Other,
}

/// What the collection loop needs from a text screen. Rows and columns are zero-based.
pub trait DisplaySurface {
    fn clear(&mut self) -> io::Result<()>;

    fn write_at(&mut self, row: u16, col: u16, text: &str) -> io::Result<()>;

    /// Current cursor location as (row, col).
    fn cursor_position(&mut self) -> io::Result<(u16, u16)>;

    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()>;

    fn refresh(&mut self) -> io::Result<()>;

    /// Blocks until one keypress arrives. No echo, no line editing.
    fn read_key(&mut self) -> io::Result<Key>;
}
