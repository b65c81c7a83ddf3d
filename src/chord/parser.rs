//! Chord symbol parsing
//!
//! Recursive-descent parser for chord symbols. One method per grammar rule:
//!
//! ```text
//! chord         := note body modifications? bass?
//! body          := "m" additions?              (minor, prefix quality)
//!                | additions? suffix-quality?  (major unless a suffix is given)
//! additions     := addition ("/" addition)*
//! addition      := "2" | "4" | "5" | "6" | "maj6" | "maj7" | "7" | "maj9" | "9" | "11" | "13"
//! suffix        := "aug" | "dim" | "sus2" | "sus4"
//! modifications := "(" modification ("/" modification)* ")"
//! modification  := "b3" | "#4" | "#5" | "b5" | "b6" | "b9" | "#9" | "#11" | "b13" | "maj6" | "maj7"
//! bass          := "\" note
//! note          := ("A".."G") ("#" | "b")?      (only names in the spelling tables)
//! ```
//!
//! A body starting with `maj` never carries the minor prefix: `Cmaj7` is a major chord
//! with a major seventh, `Cmmaj7` is minor with a major seventh.

use std::str::FromStr;

use super::types::{Addition, Chord, Modification, Quality};
use crate::error::ChordError;
use crate::note::Note;

/// Parse a chord symbol such as `F#m7`, `C7(b5/b9)` or `Dm\F`.
///
/// # Examples
/// ```
/// use chordfret::{parse_chord, Quality};
///
/// let chord = parse_chord("Bbm7(b5)\\E")?;
/// assert_eq!(chord.key.name(), "Bb");
/// assert_eq!(chord.quality, Quality::Minor);
/// assert_eq!(chord.bass.name(), "E");
/// assert!(parse_chord("Hm").is_err());
/// # Ok::<(), chordfret::ChordError>(())
/// ```
pub fn parse_chord(symbol: &str) -> Result<Chord, ChordError> {
    ChordParser::new(symbol).parse()
}

/// True when `symbol` follows the chord grammar.
pub fn is_valid_chord(symbol: &str) -> bool {
    parse_chord(symbol).is_ok()
}

impl FromStr for Chord {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_chord(s)
    }
}

struct ChordParser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> ChordParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn eat(&mut self, literal: &str) -> bool {
        if self.remaining().starts_with(literal) {
            self.position += literal.len();
            true
        } else {
            false
        }
    }

    fn error(&self, message: impl Into<String>) -> ChordError {
        ChordError::InvalidChord {
            symbol: self.input.to_string(),
            column: self.input[..self.position].chars().count() + 1,
            message: message.into(),
        }
    }

    fn unexpected(&self, expected: &str) -> ChordError {
        match self.peek() {
            Some(c) => self.error(format!("unexpected '{}', expected {}", c, expected)),
            None => self.error(format!("unexpected end of symbol, expected {}", expected)),
        }
    }

    fn parse(mut self) -> Result<Chord, ChordError> {
        let key = self.parse_note()?;
        let (quality, additions) = self.parse_body()?;

        let modifications = if self.peek() == Some('(') {
            self.parse_modifications()?
        } else {
            Vec::new()
        };

        let bass = if self.peek() == Some('\\') {
            self.parse_bass()?
        } else {
            key
        };

        if self.position < self.input.len() {
            return Err(self.unexpected("end of symbol"));
        }

        Ok(Chord {
            key,
            quality,
            additions,
            modifications,
            bass,
        })
    }

    fn parse_note(&mut self) -> Result<Note, ChordError> {
        let start = self.position;
        match self.peek() {
            Some('A'..='G') => self.position += 1,
            _ => return Err(self.unexpected("a note A-G")),
        }
        if matches!(self.peek(), Some('#') | Some('b')) {
            self.position += 1;
        }

        let input = self.input;
        let name = &input[start..self.position];
        name.parse().map_err(|_| {
            self.position = start;
            self.error(format!("'{}' is not a valid note", name))
        })
    }

    fn parse_body(&mut self) -> Result<(Quality, Vec<Addition>), ChordError> {
        let remaining = self.remaining();
        if remaining.starts_with('m') && !remaining.starts_with("maj") {
            self.position += 1;
            let additions = self.parse_additions()?;
            return Ok((Quality::Minor, additions));
        }

        let additions = self.parse_additions()?;
        let quality = self.parse_suffix_quality().unwrap_or(Quality::Major);
        Ok((quality, additions))
    }

    /// Zero or more additions joined by `/`.
    fn parse_additions(&mut self) -> Result<Vec<Addition>, ChordError> {
        let mut additions = Vec::new();
        let Some(first) = self.parse_addition() else {
            return Ok(additions);
        };
        additions.push(first);

        while self.eat("/") {
            match self.parse_addition() {
                Some(addition) => additions.push(addition),
                None => return Err(self.unexpected("an addition after '/'")),
            }
        }
        Ok(additions)
    }

    fn parse_addition(&mut self) -> Option<Addition> {
        let remaining = self.remaining();
        let addition = Addition::ALL
            .iter()
            .filter(|a| remaining.starts_with(a.symbol()))
            .max_by_key(|a| a.symbol().len())
            .copied()?;
        self.position += addition.symbol().len();
        Some(addition)
    }

    fn parse_suffix_quality(&mut self) -> Option<Quality> {
        let quality = Quality::SUFFIXES
            .iter()
            .find(|q| self.remaining().starts_with(q.symbol()))
            .copied()?;
        self.position += quality.symbol().len();
        Some(quality)
    }

    /// `(` one or more modifications joined by `/` `)`.
    fn parse_modifications(&mut self) -> Result<Vec<Modification>, ChordError> {
        if !self.eat("(") {
            return Err(self.unexpected("'('"));
        }

        let mut modifications = Vec::new();
        loop {
            match self.parse_modification() {
                Some(modification) => modifications.push(modification),
                None => return Err(self.unexpected("a modification")),
            }
            if !self.eat("/") {
                break;
            }
        }

        if !self.eat(")") {
            return Err(self.unexpected("'/' or ')'"));
        }
        Ok(modifications)
    }

    fn parse_modification(&mut self) -> Option<Modification> {
        let remaining = self.remaining();
        let modification = Modification::ALL
            .iter()
            .filter(|m| remaining.starts_with(m.symbol()))
            .max_by_key(|m| m.symbol().len())
            .copied()?;
        self.position += modification.symbol().len();
        Some(modification)
    }

    fn parse_bass(&mut self) -> Result<Note, ChordError> {
        if !self.eat("\\") {
            return Err(self.unexpected("'\\'"));
        }
        self.parse_note()
    }
}
