//! Interval derivation
//!
//! Turns a [`Chord`] into the notes it sounds. Intervals are collected in an
//! [`IntervalMap`] keyed by scale degree, written in three passes:
//!
//! 1. quality defaults (third or suspension, then the fifth)
//! 2. additions, in the order they were written
//! 3. modifications, in the order they were written
//!
//! A later write to a degree replaces the earlier one, so modifications win over
//! additions and additions win over quality defaults.

use std::collections::{BTreeMap, BTreeSet};

use super::types::{Addition, Chord, Modification, Quality};
use crate::note::Note;

/// Distance above the root plus the spelling override for that degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub semitones: u8,
    pub prefer_sharps: bool,
}

impl Interval {
    fn natural(semitones: u8) -> Self {
        Interval {
            semitones,
            prefer_sharps: false,
        }
    }

    fn sharp(semitones: u8) -> Self {
        Interval {
            semitones,
            prefer_sharps: true,
        }
    }
}

/// One interval per scale degree (2, 3, 4, 5, 6, 7, 9, 11, 13), iterated in ascending
/// degree order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalMap {
    degrees: BTreeMap<u8, Interval>,
}

impl IntervalMap {
    pub fn set(&mut self, degree: u8, interval: Interval) {
        self.degrees.insert(degree, interval);
    }

    pub fn get(&self, degree: u8) -> Option<Interval> {
        self.degrees.get(&degree).copied()
    }

    pub fn contains(&self, degree: u8) -> bool {
        self.degrees.contains_key(&degree)
    }

    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, Interval)> + '_ {
        self.degrees.iter().map(|(&degree, &interval)| (degree, interval))
    }

    fn apply_quality(&mut self, quality: Quality) {
        match quality {
            Quality::Sus2 => self.set(2, Interval::natural(2)),
            Quality::Sus4 => self.set(4, Interval::natural(5)),
            Quality::Minor | Quality::Diminished => self.set(3, Interval::natural(3)),
            Quality::Major | Quality::Augmented => self.set(3, Interval::natural(4)),
        }

        match quality {
            Quality::Augmented => self.set(5, Interval::sharp(8)),
            Quality::Diminished => self.set(5, Interval::natural(6)),
            _ => self.set(5, Interval::natural(7)),
        }
    }

    fn apply_addition(&mut self, addition: Addition, quality: Quality) {
        match addition {
            Addition::Two => self.set(2, Interval::natural(2)),
            Addition::Four => self.set(4, Interval::natural(5)),
            // The fifth is already part of every triad
            Addition::Five => {}
            Addition::Six => self.set(6, Interval::natural(default_sixth(quality))),
            Addition::Maj6 => self.set(6, Interval::natural(9)),
            Addition::Seven => self.set(7, Interval::natural(10)),
            Addition::Maj7 => self.set(7, Interval::natural(11)),
            Addition::Nine => {
                self.set(7, Interval::natural(10));
                self.set(9, Interval::natural(14));
            }
            Addition::Maj9 => {
                self.set(7, Interval::natural(11));
                self.set(9, Interval::natural(14));
            }
            Addition::Eleven => {
                self.set(7, Interval::natural(10));
                self.set(9, Interval::natural(14));
                self.set(11, Interval::natural(17));
            }
            Addition::Thirteen => {
                self.set(7, Interval::natural(10));
                self.set(9, Interval::natural(14));
                self.set(11, Interval::natural(17));
                self.set(13, Interval::natural(21));
            }
        }
    }

    fn apply_modification(&mut self, modification: Modification, quality: Quality) {
        match modification {
            Modification::FlatThree => self.set(3, Interval::natural(3)),
            Modification::SharpFour => self.set(4, Interval::sharp(6)),
            Modification::FlatFive => self.set(5, Interval::natural(6)),
            Modification::SharpFive => self.set(5, Interval::sharp(8)),
            Modification::FlatSix => self.set(6, Interval::natural(default_sixth(quality) - 1)),
            Modification::Maj6 => self.set(6, Interval::natural(9)),
            Modification::Maj7 => self.set(7, Interval::natural(11)),
            Modification::FlatNine => self.set(9, Interval::natural(13)),
            Modification::SharpNine => self.set(9, Interval::sharp(15)),
            Modification::SharpEleven => {
                self.set(9, Interval::natural(14));
                self.set(11, Interval::sharp(18));
            }
            Modification::FlatThirteen => {
                self.set(9, Interval::natural(14));
                self.set(11, Interval::natural(17));
                self.set(13, Interval::natural(20));
            }
        }
    }
}

/// Major sixth over major-like triads, minor sixth over minor and diminished ones.
fn default_sixth(quality: Quality) -> u8 {
    if quality.is_major_like() {
        9
    } else {
        8
    }
}

impl Chord {
    /// Scale degrees implied by the quality, additions and modifications.
    pub fn intervals(&self) -> IntervalMap {
        let mut map = IntervalMap::default();
        map.apply_quality(self.quality);
        for &addition in &self.additions {
            map.apply_addition(addition, self.quality);
        }
        for &modification in &self.modifications {
            map.apply_modification(modification, self.quality);
        }
        map
    }

    /// Notes in sounding order: bass, root, then each degree above the root in
    /// ascending degree order.
    ///
    /// # Example
    /// ```
    /// use chordfret::parse_chord;
    ///
    /// let chord = parse_chord("C7(b5/b9)")?;
    /// assert_eq!(chord.note_names(), vec!["C", "C", "E", "Gb", "Bb", "Db"]);
    /// # Ok::<(), chordfret::ChordError>(())
    /// ```
    pub fn notes(&self) -> Vec<Note> {
        let intervals = self.intervals();
        let mut notes = Vec::with_capacity(intervals.len() + 2);
        notes.push(self.bass);
        notes.push(self.key);
        notes.extend(
            intervals
                .iter()
                .map(|(_, interval)| self.key.up(interval.semitones, interval.prefer_sharps)),
        );
        notes
    }

    pub fn note_names(&self) -> Vec<&'static str> {
        self.notes().iter().map(|n| n.name()).collect()
    }

    /// Distinct pitch classes of [`Chord::notes`], bass included.
    pub fn pitch_classes(&self) -> BTreeSet<u8> {
        self.notes().iter().map(|n| n.pitch_class()).collect()
    }

    /// Pitch classes a voicing has to sound: the root and its intervals. A slash
    /// bass is not part of the target.
    pub fn target_pitch_classes(&self) -> BTreeSet<u8> {
        let mut target: BTreeSet<u8> = self
            .intervals()
            .iter()
            .map(|(_, interval)| (self.key.pitch_class() + interval.semitones) % 12)
            .collect();
        target.insert(self.key.pitch_class());
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::parse_chord;

    fn notes(symbol: &str) -> Vec<&'static str> {
        parse_chord(symbol).unwrap().note_names()
    }

    #[test]
    fn test_triads() {
        assert_eq!(notes("C"), vec!["C", "C", "E", "G"]);
        assert_eq!(notes("F#"), vec!["F#", "F#", "A#", "C#"]);
        assert_eq!(notes("Bb"), vec!["Bb", "Bb", "D", "F"]);
        assert_eq!(notes("Cm"), vec!["C", "C", "Eb", "G"]);
        assert_eq!(notes("F#m"), vec!["F#", "F#", "A", "C#"]);
        assert_eq!(notes("Am"), vec!["A", "A", "C", "E"]);
        assert_eq!(notes("Caug"), vec!["C", "C", "E", "G#"]);
        assert_eq!(notes("Cdim"), vec!["C", "C", "Eb", "Gb"]);
        assert_eq!(notes("Csus2"), vec!["C", "C", "D", "G"]);
        assert_eq!(notes("Csus4"), vec!["C", "C", "F", "G"]);
    }

    #[test]
    fn test_sevenths_and_extensions() {
        assert_eq!(notes("C7"), vec!["C", "C", "E", "G", "Bb"]);
        assert_eq!(notes("Cmaj7"), vec!["C", "C", "E", "G", "B"]);
        assert_eq!(notes("Cm7"), vec!["C", "C", "Eb", "G", "Bb"]);
        assert_eq!(notes("Cmmaj7"), vec!["C", "C", "Eb", "G", "B"]);
        assert_eq!(notes("C9"), vec!["C", "C", "E", "G", "Bb", "D"]);
        assert_eq!(notes("Cmaj9"), vec!["C", "C", "E", "G", "B", "D"]);
        assert_eq!(notes("C11"), vec!["C", "C", "E", "G", "Bb", "D", "F"]);
        assert_eq!(notes("C13"), vec!["C", "C", "E", "G", "Bb", "D", "F", "A"]);
    }

    #[test]
    fn test_sixths() {
        assert_eq!(notes("C6"), vec!["C", "C", "E", "G", "A"]);
        assert_eq!(notes("Cm6"), vec!["C", "C", "Eb", "G", "Ab"]);
        assert_eq!(notes("Cmmaj6"), vec!["C", "C", "Eb", "G", "A"]);
        assert_eq!(notes("C6(b6)"), vec!["C", "C", "E", "G", "Ab"]);
    }

    #[test]
    fn test_additions_two_and_four() {
        assert_eq!(notes("C2"), vec!["C", "C", "D", "E", "G"]);
        assert_eq!(notes("C4"), vec!["C", "C", "E", "F", "G"]);
        assert_eq!(notes("C5"), vec!["C", "C", "E", "G"]);
    }

    #[test]
    fn test_modifications() {
        assert_eq!(notes("C7(b5)"), vec!["C", "C", "E", "Gb", "Bb"]);
        assert_eq!(notes("C7(#5)"), vec!["C", "C", "E", "G#", "Bb"]);
        assert_eq!(notes("C7(b9)"), vec!["C", "C", "E", "G", "Bb", "Db"]);
        assert_eq!(notes("C7(#9)"), vec!["C", "C", "E", "G", "Bb", "D#"]);
        assert_eq!(notes("C7(#11)"), vec!["C", "C", "E", "G", "Bb", "D", "F#"]);
        assert_eq!(notes("C7(b13)"), vec!["C", "C", "E", "G", "Bb", "D", "F", "Ab"]);
        assert_eq!(notes("Dm(b5)"), vec!["D", "D", "F", "Ab"]);
        assert_eq!(notes("Dm7(b5)"), vec!["D", "D", "F", "Ab", "C"]);
        assert_eq!(notes("C7(b5/b9)"), vec!["C", "C", "E", "Gb", "Bb", "Db"]);
        assert_eq!(notes("C(#4)"), vec!["C", "C", "E", "F#", "G"]);
        assert_eq!(notes("C(b3)"), vec!["C", "C", "Eb", "G"]);
    }

    #[test]
    fn test_modifications_override_quality_and_additions() {
        // b5 wins over the augmented fifth
        assert_eq!(notes("Caug(b5)"), vec!["C", "C", "E", "Gb"]);
        // maj7 wins over the dominant seventh implied by 9
        assert_eq!(notes("C9(maj7)"), vec!["C", "C", "E", "G", "B", "D"]);
        // #5 wins over the diminished fifth
        assert_eq!(notes("Cdim(#5)"), vec!["C", "C", "Eb", "G#"]);
    }

    #[test]
    fn test_slash_bass_comes_first() {
        assert_eq!(notes("C\\G"), vec!["G", "C", "E", "G"]);
        assert_eq!(notes("C\\E"), vec!["E", "C", "E", "G"]);
        assert_eq!(notes("Dm\\F"), vec!["F", "D", "F", "A"]);
        assert_eq!(notes("C7\\Bb"), vec!["Bb", "C", "E", "G", "Bb"]);
    }

    #[test]
    fn test_sharp_preference_from_flat_root() {
        assert_eq!(notes("Bbaug"), vec!["Bb", "Bb", "D", "F#"]);
        assert_eq!(notes("Eb7(#9)"), vec!["Eb", "Eb", "G", "Bb", "Db", "F#"]);
    }

    #[test]
    fn test_interval_map_overwrites() {
        let chord = parse_chord("C13(b13)").unwrap();
        let map = chord.intervals();
        assert_eq!(map.get(13), Some(Interval::natural(20)));
        assert_eq!(map.get(11), Some(Interval::natural(17)));
        assert!(!map.contains(2));
        let degrees: Vec<u8> = map.iter().map(|(d, _)| d).collect();
        assert_eq!(degrees, vec![3, 5, 7, 9, 11, 13]);
    }

    #[test]
    fn test_pitch_classes_dedupe() {
        let chord = parse_chord("C\\G").unwrap();
        // C = 3, E = 7, G = 10 with A = 0
        assert_eq!(chord.pitch_classes(), BTreeSet::from([3, 7, 10]));
    }

    #[test]
    fn test_target_skips_slash_bass() {
        let c = parse_chord("C").unwrap();
        let c_over_d = parse_chord("C\\D").unwrap();
        // D = 5 is sounded as the bass but is not a chord tone
        assert_eq!(c_over_d.pitch_classes(), BTreeSet::from([3, 5, 7, 10]));
        assert_eq!(c_over_d.target_pitch_classes(), c.target_pitch_classes());
        assert_eq!(c.target_pitch_classes(), c.pitch_classes());
        assert_eq!(
            parse_chord("C7\\Bb").unwrap().target_pitch_classes(),
            BTreeSet::from([1, 3, 7, 10])
        );
    }
}
