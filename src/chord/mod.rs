//! # Chord Model
//!
//! Parses chord symbols into [`Chord`] values and derives the notes they sound.
//!
//! ## Sub-modules
//! - `types` - Chord, Quality, Addition, Modification
//! - `parser` - Recursive-descent chord symbol parser
//! - `intervals` - Scale-degree interval map and note derivation
//!
//! ## Symbol Shape
//! `root [#|b] (m additions? | additions? suffix?) (modifications)? (\bass)?`
//!
//! | Part          | Examples                          |
//! |---------------|-----------------------------------|
//! | root          | `C`, `F#`, `Bb`                   |
//! | minor prefix  | `m`                               |
//! | additions     | `7`, `maj7`, `6/9`, `13`          |
//! | suffix        | `aug`, `dim`, `sus2`, `sus4`      |
//! | modifications | `(b5)`, `(b5/b9)`, `(#11)`        |
//! | bass          | `\G`, `\Bb`                       |
//!
//! ## Example
//! ```rust
//! use chordfret::parse_chord;
//!
//! let chord = parse_chord("Dm\\F")?;
//! assert_eq!(chord.note_names(), vec!["F", "D", "F", "A"]);
//! assert_eq!(chord.transposed(2).to_string(), "Em\\G");
//! # Ok::<(), chordfret::ChordError>(())
//! ```

mod intervals;
mod parser;
mod types;

pub use intervals::{Interval, IntervalMap};
pub use parser::{is_valid_chord, parse_chord};
pub use types::{Addition, Chord, ChordSummary, Modification, Quality};
