//! Chord model type definitions

use std::fmt;

use serde::Serialize;

use crate::note::Note;

/// Basic triad flavor. Exactly one per chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    #[default]
    Major,
    Minor,
    Augmented,
    Diminished,
    Sus2,
    Sus4,
}

impl Quality {
    /// Suffix qualities, written after the additions.
    pub const SUFFIXES: [Quality; 4] = [
        Quality::Augmented,
        Quality::Diminished,
        Quality::Sus2,
        Quality::Sus4,
    ];

    /// Text as it appears in a chord symbol (empty for major).
    pub fn symbol(self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::Augmented => "aug",
            Quality::Diminished => "dim",
            Quality::Sus2 => "sus2",
            Quality::Sus4 => "sus4",
        }
    }

    /// Major and minor are written before the additions, the rest after.
    pub fn is_prefix(self) -> bool {
        matches!(self, Quality::Major | Quality::Minor)
    }

    /// Everything except minor and diminished takes a major sixth by default.
    pub fn is_major_like(self) -> bool {
        !matches!(self, Quality::Minor | Quality::Diminished)
    }
}

/// Extra scale degree layered onto the triad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Addition {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "maj6")]
    Maj6,
    #[serde(rename = "maj7")]
    Maj7,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "maj9")]
    Maj9,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "11")]
    Eleven,
    #[serde(rename = "13")]
    Thirteen,
}

impl Addition {
    pub const ALL: [Addition; 11] = [
        Addition::Two,
        Addition::Four,
        Addition::Five,
        Addition::Six,
        Addition::Maj6,
        Addition::Maj7,
        Addition::Seven,
        Addition::Maj9,
        Addition::Nine,
        Addition::Eleven,
        Addition::Thirteen,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Addition::Two => "2",
            Addition::Four => "4",
            Addition::Five => "5",
            Addition::Six => "6",
            Addition::Maj6 => "maj6",
            Addition::Maj7 => "maj7",
            Addition::Seven => "7",
            Addition::Maj9 => "maj9",
            Addition::Nine => "9",
            Addition::Eleven => "11",
            Addition::Thirteen => "13",
        }
    }
}

/// Explicit alteration of a scale degree, applied after the additions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Modification {
    #[serde(rename = "b3")]
    FlatThree,
    #[serde(rename = "#4")]
    SharpFour,
    #[serde(rename = "#5")]
    SharpFive,
    #[serde(rename = "b5")]
    FlatFive,
    #[serde(rename = "b6")]
    FlatSix,
    #[serde(rename = "b9")]
    FlatNine,
    #[serde(rename = "#9")]
    SharpNine,
    #[serde(rename = "#11")]
    SharpEleven,
    #[serde(rename = "b13")]
    FlatThirteen,
    #[serde(rename = "maj6")]
    Maj6,
    #[serde(rename = "maj7")]
    Maj7,
}

impl Modification {
    pub const ALL: [Modification; 11] = [
        Modification::FlatThree,
        Modification::SharpFour,
        Modification::SharpFive,
        Modification::FlatFive,
        Modification::FlatSix,
        Modification::FlatNine,
        Modification::SharpNine,
        Modification::SharpEleven,
        Modification::FlatThirteen,
        Modification::Maj6,
        Modification::Maj7,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Modification::FlatThree => "b3",
            Modification::SharpFour => "#4",
            Modification::SharpFive => "#5",
            Modification::FlatFive => "b5",
            Modification::FlatSix => "b6",
            Modification::FlatNine => "b9",
            Modification::SharpNine => "#9",
            Modification::SharpEleven => "#11",
            Modification::FlatThirteen => "b13",
            Modification::Maj6 => "maj6",
            Modification::Maj7 => "maj7",
        }
    }
}

/// A normalized, absolute chord symbol.
///
/// `bass` equals `key` unless a slash bass was given. Additions and modifications keep
/// the order they were written in; that order only affects rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chord {
    pub key: Note,
    pub quality: Quality,
    pub additions: Vec<Addition>,
    pub modifications: Vec<Modification>,
    pub bass: Note,
}

impl Chord {
    /// Plain triad on `key` with no slash bass.
    pub fn new(key: Note, quality: Quality) -> Self {
        Chord {
            key,
            quality,
            additions: Vec::new(),
            modifications: Vec::new(),
            bass: key,
        }
    }

    pub fn with_additions(mut self, additions: impl IntoIterator<Item = Addition>) -> Self {
        self.additions.extend(additions);
        self
    }

    pub fn with_modifications(
        mut self,
        modifications: impl IntoIterator<Item = Modification>,
    ) -> Self {
        self.modifications.extend(modifications);
        self
    }

    pub fn with_bass(mut self, bass: Note) -> Self {
        self.bass = bass;
        self
    }

    pub fn has_slash_bass(&self) -> bool {
        self.bass != self.key
    }

    /// Shift key and bass by the same number of semitones, each through its own
    /// spelling table.
    pub fn transpose(&mut self, halfsteps: i32) {
        self.key = self.key.transpose(halfsteps);
        self.bass = self.bass.transpose(halfsteps);
    }

    pub fn transposed(&self, halfsteps: i32) -> Chord {
        let mut chord = self.clone();
        chord.transpose(halfsteps);
        chord
    }

    /// Serializable view with the rendered symbol and derived notes.
    pub fn summary(&self) -> ChordSummary {
        ChordSummary {
            symbol: self.to_string(),
            key: self.key,
            quality: self.quality,
            additions: self.additions.clone(),
            modifications: self.modifications.clone(),
            bass: self.bass,
            notes: self.notes(),
        }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)?;
        if self.quality.is_prefix() {
            f.write_str(self.quality.symbol())?;
        }

        let additions: Vec<&str> = self.additions.iter().map(|a| a.symbol()).collect();
        f.write_str(&additions.join("/"))?;

        if !self.quality.is_prefix() {
            f.write_str(self.quality.symbol())?;
        }

        if !self.modifications.is_empty() {
            let modifications: Vec<&str> =
                self.modifications.iter().map(|m| m.symbol()).collect();
            write!(f, "({})", modifications.join("/"))?;
        }

        if self.has_slash_bass() {
            write!(f, "\\{}", self.bass)?;
        }
        Ok(())
    }
}

/// Chord data for display layers and JSON output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordSummary {
    pub symbol: String,
    pub key: Note,
    pub quality: Quality,
    pub additions: Vec<Addition>,
    pub modifications: Vec<Modification>,
    pub bass: Note,
    pub notes: Vec<Note>,
}
