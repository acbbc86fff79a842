//! Line-by-line board loading from a text stream.

use std::io::{self, BufRead};

use derive_more::{Display, Error, From};
use log::debug;
use rapidoku_core::{Board, ParseBoardError};

/// An error while loading a board stream.
///
/// Loading is fail-fast: the first I/O or parse failure aborts the stream,
/// there is no skip-and-continue.
#[derive(Debug, Display, Error, From)]
pub enum LoadError {
    /// Reading a line from the source failed.
    #[display("failed to read puzzle line: {_0}")]
    Io(io::Error),

    /// A line did not parse as a board.
    #[display("failed to parse puzzle line: {_0}")]
    Parse(ParseBoardError),
}

/// An iterator parsing one [`Board`] per line of a buffered reader.
///
/// Boards are yielded in source order. The iterator fuses after the first
/// error, so a malformed line aborts the remainder of the stream.
///
/// Decompression is the caller's concern: wrap whatever decoder the source
/// needs in a [`BufRead`] and hand it over.
///
/// # Examples
///
/// ```
/// use rapidoku_pipeline::BoardLines;
///
/// let text = format!("{}\n{}\n", ".".repeat(81), ".".repeat(81));
/// let boards: Vec<_> = BoardLines::new(text.as_bytes())
///     .collect::<Result<_, _>>()?;
/// assert_eq!(boards.len(), 2);
/// # Ok::<(), rapidoku_pipeline::LoadError>(())
/// ```
#[derive(Debug)]
pub struct BoardLines<R> {
    reader: R,
    line: String,
    read: u64,
    fused: bool,
}

impl<R: BufRead> BoardLines<R> {
    /// Creates a loader over `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            read: 0,
            fused: false,
        }
    }

    /// Returns the number of boards successfully read so far.
    #[must_use]
    pub fn boards_read(&self) -> u64 {
        self.read
    }
}

impl<R: BufRead> Iterator for BoardLines<R> {
    type Item = Result<Board, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }

        self.line.clear();
        match self.reader.read_line(&mut self.line) {
            Ok(0) => {
                self.fused = true;
                debug!("board stream exhausted after {} boards", self.read);
                None
            }
            Ok(_) => match self.line.parse::<Board>() {
                Ok(board) => {
                    self.read += 1;
                    Some(Ok(board))
                }
                Err(err) => {
                    self.fused = true;
                    Some(Err(err.into()))
                }
            },
            Err(err) => {
                self.fused = true;
                Some(Err(err.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    #[test]
    fn reads_boards_in_source_order() {
        let text = format!("{}\n{}\n", EASY, ".".repeat(81));
        let mut lines = BoardLines::new(text.as_bytes());

        let first = lines.next().unwrap().unwrap();
        assert_eq!(first.short_string(), EASY);

        let second = lines.next().unwrap().unwrap();
        assert_eq!(second, Board::new());

        assert!(lines.next().is_none());
        assert_eq!(lines.boards_read(), 2);
    }

    #[test]
    fn handles_missing_trailing_newline() {
        let mut lines = BoardLines::new(EASY.as_bytes());
        assert!(lines.next().unwrap().is_ok());
        assert!(lines.next().is_none());
    }

    #[test]
    fn fuses_on_first_bad_line() {
        let text = format!("{EASY}\nnot-a-board\n{EASY}\n");
        let mut lines = BoardLines::new(text.as_bytes());

        assert!(lines.next().unwrap().is_ok());
        let err = lines.next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse(ParseBoardError::WrongLength { len: 11 })
        ));

        // the third, well-formed line is never reached
        assert!(lines.next().is_none());
        assert_eq!(lines.boards_read(), 1);
    }

    #[test]
    fn rejects_contradictory_line() {
        let text = format!("55{}\n", ".".repeat(79));
        let mut lines = BoardLines::new(text.as_bytes());
        let err = lines.next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse(ParseBoardError::Contradiction)
        ));
    }
}
