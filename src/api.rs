//! # Public API
//!
//! String-in, string-out entry points over the chord model and the voicing search.
//!
//! - [`chord_notes()`] - Note names for a chord symbol
//! - [`normalize()`] - Re-render a chord symbol in normalized form
//! - [`transpose_symbol()`] - Transpose a chord symbol by semitones
//! - [`finger_chord()`] - Finger placements for a chord symbol on an instrument
//!
//! ## Typical Usage
//!
//! ```rust
//! use chordfret::{chord_notes, finger_chord, Instrument};
//!
//! assert_eq!(chord_notes("Cm7")?, vec!["C", "C", "Eb", "G", "Bb"]);
//!
//! let placements = finger_chord("Am", &Instrument::default())?.unwrap();
//! assert_eq!(placements[0].string, 1);
//! assert_eq!(placements[0].fret, 2);
//! # Ok::<(), chordfret::ChordError>(())
//! ```

use crate::chord::parse_chord;
use crate::error::ChordError;
use crate::instrument::Instrument;
use crate::voicing::{chord_to_finger_placements, FingerPlacement};

/// Notes of a chord symbol: bass, root, then the chord tones in degree order.
///
/// # Errors
/// Returns [`ChordError::InvalidChord`] if the symbol does not parse.
pub fn chord_notes(symbol: &str) -> Result<Vec<String>, ChordError> {
    let chord = parse_chord(symbol)?;
    Ok(chord.note_names().into_iter().map(String::from).collect())
}

/// Normalized rendering of a chord symbol.
///
/// ```rust
/// use chordfret::normalize;
///
/// assert_eq!(normalize("C\\C")?, "C");
/// # Ok::<(), chordfret::ChordError>(())
/// ```
pub fn normalize(symbol: &str) -> Result<String, ChordError> {
    Ok(parse_chord(symbol)?.to_string())
}

/// Transpose key and bass of a chord symbol by `halfsteps` (may be negative).
///
/// ```rust
/// use chordfret::transpose_symbol;
///
/// assert_eq!(transpose_symbol("Bbm7\\Ab", 2)?, "Cm7\\Bb");
/// assert_eq!(transpose_symbol("A7(b9)", -1)?, "G#7(b9)");
/// # Ok::<(), chordfret::ChordError>(())
/// ```
pub fn transpose_symbol(symbol: &str, halfsteps: i32) -> Result<String, ChordError> {
    Ok(parse_chord(symbol)?.transposed(halfsteps).to_string())
}

/// Finger placements of the easiest voicing of `symbol` on `instrument`.
///
/// `Ok(None)` means the chord cannot be played on this instrument; it is not an
/// error.
pub fn finger_chord(
    symbol: &str,
    instrument: &Instrument,
) -> Result<Option<Vec<FingerPlacement>>, ChordError> {
    let chord = parse_chord(symbol)?;
    Ok(chord_to_finger_placements(&chord, instrument))
}
