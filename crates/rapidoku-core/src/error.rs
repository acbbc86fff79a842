//! Error types for board parsing.

use derive_more::{Display, Error};

/// The ways a board text can fail to parse.
///
/// Parsing never retries and never reaches the search: contradictory givens
/// are rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The input did not contain exactly 81 significant characters after
    /// stripping whitespace.
    #[display("expected 81 significant characters, got {len}")]
    WrongLength {
        /// Number of significant characters found.
        len: usize,
    },

    /// Applying the givens reduced some cell to zero candidates, i.e. the
    /// givens contradict each other.
    #[display("board is contradictory: a cell has no remaining candidates")]
    Contradiction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ParseBoardError::WrongLength { len: 80 }.to_string(),
            "expected 81 significant characters, got 80"
        );
        assert_eq!(
            ParseBoardError::Contradiction.to_string(),
            "board is contradictory: a cell has no remaining candidates"
        );
    }
}
