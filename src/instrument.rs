//! # Instruments
//!
//! Tuning and search bounds for a fretted string instrument.
//!
//! Instruments come from a built-in preset or from a YAML definition:
//!
//! ```yaml
//! name: Baritone ukulele
//! tuning: [D, G, B, E]
//! max-fret: 12   # optional, default 12
//! max-span: 6    # optional, default 6
//! ```
//!
//! Strings are listed in the order they are numbered in finger placements: the first
//! entry is string 1.
//!
//! ## Example
//! ```rust
//! use chordfret::Instrument;
//!
//! let uke = Instrument::default();
//! assert_eq!(uke.tuning_names(), vec!["G", "C", "E", "A"]);
//!
//! let custom = Instrument::from_yaml("name: Low G\ntuning: [G, C, E, A]\nmax-span: 4\n")?;
//! assert_eq!(custom.max_span, 4);
//! assert_eq!(custom.max_fret, 12);
//! # Ok::<(), chordfret::ChordError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChordError;
use crate::note::{Note, Spelling};

pub const DEFAULT_MAX_FRET: u8 = 12;
pub const DEFAULT_MAX_SPAN: u8 = 6;

/// Upper bound on string count. The search is exhaustive over every string.
pub const MAX_STRINGS: usize = 6;

const MAX_FRET_LIMIT: u8 = 24;

/// Built-in presets: (preset name, display name, tuning).
static PRESETS: [(&str, &str, &[&str]); 5] = [
    ("ukulele", "Ukulele", &["G", "C", "E", "A"]),
    ("baritone-ukulele", "Baritone ukulele", &["D", "G", "B", "E"]),
    ("guitar", "Guitar", &["E", "A", "D", "G", "B", "E"]),
    ("mandolin", "Mandolin", &["G", "D", "A", "E"]),
    ("bass", "Bass guitar", &["E", "A", "D", "G"]),
];

/// A fretted instrument: open-string notes plus the fret bounds used by the
/// voicing search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Instrument {
    pub name: String,
    pub tuning: Vec<Note>,
    pub max_fret: u8,
    pub max_span: u8,
}

/// Instrument definition as written in YAML, before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawInstrument {
    name: Option<String>,
    tuning: Vec<String>,
    max_fret: Option<u8>,
    max_span: Option<u8>,
}

impl Default for Instrument {
    fn default() -> Self {
        Instrument {
            name: "Ukulele".to_string(),
            // G C E A
            tuning: [10, 3, 7, 0]
                .into_iter()
                .map(|pc| Note::from_pitch_class(pc, Spelling::Sharp))
                .collect(),
            max_fret: DEFAULT_MAX_FRET,
            max_span: DEFAULT_MAX_SPAN,
        }
    }
}

impl Instrument {
    /// Instrument with default fret bounds.
    pub fn new(name: impl Into<String>, tuning: Vec<Note>) -> Result<Self, ChordError> {
        let instrument = Instrument {
            name: name.into(),
            tuning,
            max_fret: DEFAULT_MAX_FRET,
            max_span: DEFAULT_MAX_SPAN,
        };
        instrument.validate()?;
        Ok(instrument)
    }

    /// Instrument from note names, e.g. `["G", "C", "E", "A"]`.
    pub fn from_names(name: impl Into<String>, names: &[&str]) -> Result<Self, ChordError> {
        let tuning = parse_tuning(names.iter().copied())?;
        Instrument::new(name, tuning)
    }

    /// Built-in instrument by preset name (`ukulele`, `baritone-ukulele`, `guitar`,
    /// `mandolin`, `bass`).
    pub fn preset(preset: &str) -> Option<Self> {
        let (_, name, names) = PRESETS.iter().find(|(key, ..)| *key == preset)?;
        Instrument::from_names(*name, names).ok()
    }

    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|(key, ..)| *key)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ChordError> {
        let raw: RawInstrument =
            serde_yaml::from_str(content).map_err(|e| ChordError::Config(e.to_string()))?;

        let instrument = Instrument {
            name: raw.name.unwrap_or_else(|| "Custom".to_string()),
            tuning: parse_tuning(raw.tuning.iter().map(String::as_str))?,
            max_fret: raw.max_fret.unwrap_or(DEFAULT_MAX_FRET),
            max_span: raw.max_span.unwrap_or(DEFAULT_MAX_SPAN),
        };
        instrument.validate()?;
        Ok(instrument)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChordError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ChordError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        log::debug!("loading instrument from {}", path.display());
        Instrument::from_yaml(&content)
    }

    pub fn with_max_fret(mut self, max_fret: u8) -> Result<Self, ChordError> {
        self.max_fret = max_fret;
        self.validate()?;
        Ok(self)
    }

    pub fn with_max_span(mut self, max_span: u8) -> Result<Self, ChordError> {
        self.max_span = max_span;
        self.validate()?;
        Ok(self)
    }

    /// Set both fret bounds at once, validating them together.
    pub fn with_limits(mut self, max_fret: u8, max_span: u8) -> Result<Self, ChordError> {
        self.max_fret = max_fret;
        self.max_span = max_span;
        self.validate()?;
        Ok(self)
    }

    pub fn string_count(&self) -> usize {
        self.tuning.len()
    }

    pub fn tuning_names(&self) -> Vec<&'static str> {
        self.tuning.iter().map(|n| n.name()).collect()
    }

    fn validate(&self) -> Result<(), ChordError> {
        if self.tuning.is_empty() {
            return Err(ChordError::Config("tuning has no strings".to_string()));
        }
        if self.tuning.len() > MAX_STRINGS {
            return Err(ChordError::Config(format!(
                "tuning has {} strings, at most {} are supported",
                self.tuning.len(),
                MAX_STRINGS
            )));
        }
        if self.max_fret == 0 || self.max_fret > MAX_FRET_LIMIT {
            return Err(ChordError::Config(format!(
                "max-fret must be between 1 and {}, got {}",
                MAX_FRET_LIMIT, self.max_fret
            )));
        }
        if self.max_span > self.max_fret {
            return Err(ChordError::Config(format!(
                "max-span ({}) cannot exceed max-fret ({})",
                self.max_span, self.max_fret
            )));
        }
        Ok(())
    }
}

/// Parse open-string note names, e.g. from a `G,C,E,A` command-line list.
pub fn parse_tuning<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Vec<Note>, ChordError> {
    names
        .into_iter()
        .map(|name| {
            name.trim()
                .parse()
                .map_err(|_| ChordError::Config(format!("invalid tuning note: '{}'", name)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ukulele() {
        let uke = Instrument::default();
        assert_eq!(uke.tuning_names(), vec!["G", "C", "E", "A"]);
        assert_eq!(uke.max_fret, 12);
        assert_eq!(uke.max_span, 6);
        assert_eq!(Instrument::preset("ukulele").unwrap(), uke);
    }

    #[test]
    fn test_presets() {
        for name in Instrument::preset_names() {
            assert!(Instrument::preset(name).is_some(), "preset {} failed", name);
        }
        let guitar = Instrument::preset("guitar").unwrap();
        assert_eq!(guitar.tuning_names(), vec!["E", "A", "D", "G", "B", "E"]);
        assert_eq!(guitar.string_count(), 6);
        assert!(Instrument::preset("banjo-harp").is_none());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
name: Baritone ukulele
tuning: [D, G, B, E]
max-fret: 15
max-span: 4
"#;
        let instrument = Instrument::from_yaml(yaml).unwrap();
        assert_eq!(instrument.name, "Baritone ukulele");
        assert_eq!(instrument.tuning_names(), vec!["D", "G", "B", "E"]);
        assert_eq!(instrument.max_fret, 15);
        assert_eq!(instrument.max_span, 4);
    }

    #[test]
    fn test_from_yaml_defaults() {
        let instrument = Instrument::from_yaml("tuning: [Bb, Eb, G, C]").unwrap();
        assert_eq!(instrument.name, "Custom");
        assert_eq!(instrument.tuning_names(), vec!["Bb", "Eb", "G", "C"]);
        assert_eq!(instrument.max_fret, DEFAULT_MAX_FRET);
        assert_eq!(instrument.max_span, DEFAULT_MAX_SPAN);
    }

    #[test]
    fn test_from_yaml_errors() {
        assert!(matches!(
            Instrument::from_yaml("tuning: [G, C, H, A]"),
            Err(ChordError::Config(_))
        ));
        assert!(matches!(
            Instrument::from_yaml("name: nothing"),
            Err(ChordError::Config(_))
        ));
        assert!(matches!(
            Instrument::from_yaml("tuning: []"),
            Err(ChordError::Config(_))
        ));
        assert!(matches!(
            Instrument::from_yaml("tuning: [E, A, D, G, B, E, A]"),
            Err(ChordError::Config(_))
        ));
        assert!(matches!(
            Instrument::from_yaml("tuning: [G, C, E, A]\nmax-fret: 5\nmax-span: 6"),
            Err(ChordError::Config(_))
        ));
        assert!(matches!(
            Instrument::from_yaml("tuning: [G, C, E, A]\nmax-fret: 0\nmax-span: 0"),
            Err(ChordError::Config(_))
        ));
    }

    #[test]
    fn test_serialized_form_loads_back() {
        let guitar = Instrument::preset("guitar").unwrap().with_limits(9, 4).unwrap();
        let yaml = serde_yaml::to_string(&guitar).unwrap();
        assert!(yaml.contains("max-fret: 9"), "got: {}", yaml);
        assert!(yaml.contains("max-span: 4"), "got: {}", yaml);
        assert_eq!(Instrument::from_yaml(&yaml).unwrap(), guitar);
    }

    #[test]
    fn test_builders_validate() {
        let uke = Instrument::default();
        assert_eq!(uke.clone().with_max_span(3).unwrap().max_span, 3);
        assert!(uke.clone().with_max_fret(30).is_err());
        assert!(uke.clone().with_max_span(13).is_err());
        let small = uke.with_limits(3, 2).unwrap();
        assert_eq!((small.max_fret, small.max_span), (3, 2));
    }

    #[test]
    fn test_parse_tuning() {
        let tuning = parse_tuning("G, C ,E,A".split(',')).unwrap();
        assert_eq!(tuning.len(), 4);
        assert_eq!(tuning[1].name(), "C");
        assert!(parse_tuning(["G", ""]).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Instrument::load("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
