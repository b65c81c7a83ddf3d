//! # Error Types
//!
//! All errors raised by the chord model and the instrument configuration.
//!
//! ## Error Types
//! - `InvalidChord` - The chord symbol does not follow the chord grammar
//! - `UnknownNote` - A note name outside the sharp/flat spelling tables
//! - `Config` - An instrument definition that cannot be used for a voicing search
//!
//! A chord that cannot be fingered on an instrument is not an error: the voicing
//! search returns `None` for it.
//!
//! ## Usage
//! ```rust
//! use chordfret::{chord_notes, ChordError};
//!
//! match chord_notes("Cmaj7") {
//!     Ok(notes) => println!("{}", notes.join(" ")),
//!     Err(ChordError::InvalidChord { symbol, column, message }) => {
//!         eprintln!("'{}' column {}: {}", symbol, column, message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChordError {
    /// Chord symbol rejected by the parser.
    ///
    /// `symbol` is always the original, unmodified input.
    ///
    /// # Example
    /// ```
    /// # use chordfret::ChordError;
    /// let err = ChordError::InvalidChord {
    ///     symbol: "Cx".to_string(),
    ///     column: 2,
    ///     message: "unexpected 'x'".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Unrecognized chord 'Cx' at column 2: unexpected 'x'");
    /// ```
    #[error("Unrecognized chord '{symbol}' at column {column}: {message}")]
    InvalidChord {
        symbol: String,
        column: usize,
        message: String,
    },

    /// Note name not found in either spelling table.
    ///
    /// # Example
    /// ```
    /// # use chordfret::ChordError;
    /// let err = ChordError::UnknownNote("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown note: H");
    /// ```
    #[error("Unknown note: {0}")]
    UnknownNote(String),

    /// Invalid instrument definition (bad YAML, empty tuning, out-of-range bounds).
    #[error("Invalid instrument: {0}")]
    Config(String),
}
