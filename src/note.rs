//! # Notes and Spellings
//!
//! Pitch classes on the 12-tone chromatic circle, anchored so that index 0 is `A`.
//!
//! Every pitch class can be written with the sharp table ([`NOTES_UP`]) or the flat
//! table ([`NOTES_DOWN`]). Both tables name the same pitch class at the same index, so
//! a [`Note`] stores the pitch class and remembers only which accidental it was
//! written with.
//!
//! ## Spelling Rules
//! - **Transposition** keeps a flat-spelled note in the flat table; naturals and
//!   sharps move through the sharp table (`Bb` + 2 = `C`, `C` + 1 = `C#`).
//! - **Interval derivation** ([`Note::up`]) spells from flats unless the root is
//!   sharp-spelled or the interval asks for sharps (`C` + 3 = `Eb`, `C#` + 3 = `E`).
//!
//! ## Example
//! ```rust
//! use chordfret::Note;
//!
//! let bb: Note = "Bb".parse()?;
//! assert_eq!(bb.transpose(2).name(), "C");
//! assert_eq!(bb.transpose(1).name(), "B");
//! assert_eq!(bb.interval_to(&"D".parse()?), 4);
//! # Ok::<(), chordfret::ChordError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChordError;

/// Sharp spelling table, index 0 = A.
pub const NOTES_UP: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// Flat spelling table, index 0 = A.
pub const NOTES_DOWN: [&str; 12] = [
    "A", "Bb", "B", "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab",
];

/// How a note is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

/// Which spelling table to read names from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spelling {
    Sharp,
    Flat,
}

impl Spelling {
    fn table(self) -> &'static [&'static str; 12] {
        match self {
            Spelling::Sharp => &NOTES_UP,
            Spelling::Flat => &NOTES_DOWN,
        }
    }
}

/// A pitch class together with the accidental it is spelled with.
///
/// Only names present in one of the spelling tables exist, so `B#` or `Fb` cannot
/// be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    pitch_class: u8,
    accidental: Accidental,
}

impl Note {
    /// Note at `pitch_class` (taken modulo 12) named from the given table.
    pub fn from_pitch_class(pitch_class: u8, spelling: Spelling) -> Self {
        let pitch_class = pitch_class % 12;
        let name = spelling.table()[pitch_class as usize];
        let accidental = if name.len() == 1 {
            Accidental::Natural
        } else {
            match spelling {
                Spelling::Sharp => Accidental::Sharp,
                Spelling::Flat => Accidental::Flat,
            }
        };
        Note {
            pitch_class,
            accidental,
        }
    }

    /// Position on the chromatic circle, 0 = A.
    pub fn pitch_class(&self) -> u8 {
        self.pitch_class
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    /// Spelling table this note transposes through.
    pub fn spelling(&self) -> Spelling {
        match self.accidental {
            Accidental::Flat => Spelling::Flat,
            Accidental::Natural | Accidental::Sharp => Spelling::Sharp,
        }
    }

    pub fn name(&self) -> &'static str {
        let table = match self.accidental {
            Accidental::Flat => &NOTES_DOWN,
            Accidental::Natural | Accidental::Sharp => &NOTES_UP,
        };
        table[self.pitch_class as usize]
    }

    /// Shift by a signed number of semitones, keeping this note's spelling table.
    pub fn transpose(&self, halfsteps: i32) -> Note {
        let shifted = (self.pitch_class as i32 + halfsteps).rem_euclid(12) as u8;
        Note::from_pitch_class(shifted, self.spelling())
    }

    /// Upward distance in semitones from `self` to `other` (0..=11).
    pub fn interval_to(&self, other: &Note) -> u8 {
        (12 + other.pitch_class - self.pitch_class) % 12
    }

    /// Note `semitones` above this one, spelled for a chord built on this root.
    ///
    /// Flats are used unless this root is sharp-spelled or `prefer_sharps` is set.
    pub fn up(&self, semitones: u8, prefer_sharps: bool) -> Note {
        let use_flats = self.accidental != Accidental::Sharp && !prefer_sharps;
        let spelling = if use_flats {
            Spelling::Flat
        } else {
            Spelling::Sharp
        };
        let target = (self.pitch_class as u16 + semitones as u16) % 12;
        Note::from_pitch_class(target as u8, spelling)
    }
}

impl FromStr for Note {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(index) = NOTES_UP.iter().position(|&n| n == s) {
            return Ok(Note::from_pitch_class(index as u8, Spelling::Sharp));
        }
        if let Some(index) = NOTES_DOWN.iter().position(|&n| n == s) {
            return Ok(Note::from_pitch_class(index as u8, Spelling::Flat));
        }
        Err(ChordError::UnknownNote(s.to_string()))
    }
}

impl TryFrom<String> for Note {
    type Error = ChordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.name().to_string()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Transpose a note given by name.
///
/// Unknown names are returned unchanged.
pub fn transpose_name(name: &str, halfsteps: i32) -> String {
    match name.parse::<Note>() {
        Ok(note) => note.transpose(halfsteps).name().to_string(),
        Err(_) => {
            log::warn!("cannot transpose unknown note '{}', leaving it unchanged", name);
            name.to_string()
        }
    }
}

/// Upward semitone distance between two note names (0..=11).
///
/// Returns 0 when either name is unknown.
pub fn interval_between(from: &str, to: &str) -> u8 {
    match (from.parse::<Note>(), to.parse::<Note>()) {
        (Ok(a), Ok(b)) => a.interval_to(&b),
        _ => {
            log::warn!("interval between unknown notes '{}' and '{}' treated as 0", from, to);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(name: &str) -> Note {
        name.parse().unwrap()
    }

    #[test]
    fn test_spelling_tables_agree() {
        for i in 0..12 {
            let up = note(NOTES_UP[i]);
            let down = note(NOTES_DOWN[i]);
            assert_eq!(up.pitch_class(), down.pitch_class());
            assert_eq!(up.interval_to(&down), 0);
            assert_eq!(interval_between(NOTES_UP[i], NOTES_DOWN[i]), 0);
            assert_eq!(up.transpose(0), up);
            assert_eq!(down.transpose(0), down);
        }
    }

    #[test]
    fn test_parse_accepts_only_table_names() {
        assert_eq!(note("C").pitch_class(), 3);
        assert_eq!(note("A").pitch_class(), 0);
        assert_eq!(note("Ab").pitch_class(), 11);
        assert_eq!(note("G#").accidental(), Accidental::Sharp);
        assert_eq!(note("Gb").accidental(), Accidental::Flat);
        assert_eq!(note("E").accidental(), Accidental::Natural);

        for bad in ["", "H", "B#", "Cb", "E#", "Fb", "c", "C##", "Bbb"] {
            assert_eq!(
                bad.parse::<Note>(),
                Err(ChordError::UnknownNote(bad.to_string())),
                "'{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_transpose_keeps_spelling_table() {
        assert_eq!(note("C").transpose(1).name(), "C#");
        assert_eq!(note("Bb").transpose(1).name(), "B");
        assert_eq!(note("Bb").transpose(3).name(), "Db");
        assert_eq!(note("F#").transpose(-1).name(), "F");
        assert_eq!(note("A").transpose(-1).name(), "G#");
        assert_eq!(note("Eb").transpose(-14).name(), "Db");
        assert_eq!(note("G").transpose(24).name(), "G");
    }

    #[test]
    fn test_transpose_is_additive() {
        for name in NOTES_UP.iter().chain(NOTES_DOWN.iter()) {
            let start = note(name);
            for a in -15..=15 {
                for b in -15..=15 {
                    let stepwise = start.transpose(a).transpose(b);
                    let direct = start.transpose(a + b);
                    assert_eq!(stepwise.pitch_class(), direct.pitch_class());
                }
            }
        }
    }

    #[test]
    fn test_interval_to() {
        assert_eq!(note("C").interval_to(&note("G")), 7);
        assert_eq!(note("G").interval_to(&note("C")), 5);
        assert_eq!(note("Db").interval_to(&note("C#")), 0);
        assert_eq!(note("A#").interval_to(&note("Bb")), 0);
        assert_eq!(note("B").interval_to(&note("Bb")), 11);
    }

    #[test]
    fn test_up_spelling() {
        assert_eq!(note("C").up(3, false).name(), "Eb");
        assert_eq!(note("C").up(3, true).name(), "D#");
        assert_eq!(note("C#").up(3, false).name(), "E");
        assert_eq!(note("F#").up(4, false).name(), "A#");
        assert_eq!(note("Bb").up(8, true).name(), "F#");
        assert_eq!(note("D").up(14, false).name(), "E");
    }

    #[test]
    fn test_string_helpers_fall_back_to_identity() {
        assert_eq!(transpose_name("Eb", 2), "F");
        assert_eq!(transpose_name("X#", 5), "X#");
        assert_eq!(interval_between("C", "E"), 4);
        assert_eq!(interval_between("C", "nope"), 0);
    }

    #[test]
    fn test_serde_uses_name() {
        let json = serde_json::to_string(&note("Db")).unwrap();
        assert_eq!(json, "\"Db\"");
        let back: Note = serde_json::from_str("\"F#\"").unwrap();
        assert_eq!(back, note("F#"));
        assert!(serde_json::from_str::<Note>("\"Q\"").is_err());
    }
}
