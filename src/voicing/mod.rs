//! # Voicing Search
//!
//! Finds how to fret a chord on an [`Instrument`](crate::Instrument).
//!
//! ## Sub-modules
//! - `types` - Voicing (one fret per string) and FingerPlacement
//! - `search` - Candidate frets, exhaustive enumeration, scoring
//!
//! ## Rules
//! - **Exact**: the sounded pitch classes equal the root plus the chord's
//!   intervals. No missing notes, no extra notes. A slash bass is not required,
//!   so `C\D` fingers like `C`.
//! - **Playable**: highest minus lowest fretted position is at most `max_span`.
//!   Open strings are ignored, so an all-open voicing is always playable.
//! - **Score** (lower is better): `3 * lowest fret + 2 * span + sum of fretted
//!   positions`, 0 for all-open voicings.
//! - **Ties**: the first voicing in enumeration order wins (first string varies
//!   slowest, frets tried low to high).
//!
//! A chord with more distinct pitch classes than the instrument has strings has no
//! voicing.
//!
//! ## Example
//! ```rust
//! use chordfret::{best_voicing, parse_chord, Instrument};
//!
//! let uke = Instrument::default();
//! let am = best_voicing(&parse_chord("Am")?, &uke).unwrap();
//! assert_eq!(am.frets, vec![2, 0, 0, 0]);
//!
//! assert!(best_voicing(&parse_chord("C13")?, &uke).is_none());
//! # Ok::<(), chordfret::ChordError>(())
//! ```

mod search;
mod types;

pub use search::{
    best_voicing, candidate_frets, chord_to_finger_placements, find_all_voicings, is_exact,
    is_playable, ranked_voicings,
};
pub use types::{fret_pitch_class, FingerPlacement, Voicing};
