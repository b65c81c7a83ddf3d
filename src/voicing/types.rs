//! Voicing type definitions

use std::collections::BTreeSet;

use serde::Serialize;

use crate::note::Note;

/// One fret per string, in tuning order. Fret 0 is the open string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Voicing {
    pub frets: Vec<u8>,
}

impl Voicing {
    pub fn new(frets: Vec<u8>) -> Self {
        Voicing { frets }
    }

    /// Frets that are pressed down (open strings skipped).
    pub fn fretted(&self) -> impl Iterator<Item = u8> + '_ {
        self.frets.iter().copied().filter(|&f| f > 0)
    }

    pub fn is_all_open(&self) -> bool {
        self.fretted().next().is_none()
    }

    pub fn lowest_fret(&self) -> Option<u8> {
        self.fretted().min()
    }

    /// Distance between the highest and lowest fretted positions; 0 when all open.
    pub fn span(&self) -> u8 {
        match (self.fretted().min(), self.fretted().max()) {
            (Some(low), Some(high)) => high - low,
            _ => 0,
        }
    }

    /// Lower is easier: `3 * lowest fret + 2 * span + sum of fretted positions`.
    ///
    /// An all-open voicing scores 0.
    pub fn score(&self) -> u32 {
        let Some(lowest) = self.lowest_fret() else {
            return 0;
        };
        let sum: u32 = self.fretted().map(u32::from).sum();
        3 * u32::from(lowest) + 2 * u32::from(self.span()) + sum
    }

    /// Pitch classes actually sounded when strung with `tuning`.
    pub fn sounded_pitch_classes(&self, tuning: &[Note]) -> BTreeSet<u8> {
        tuning
            .iter()
            .zip(&self.frets)
            .map(|(open, &fret)| fret_pitch_class(open, fret))
            .collect()
    }

    /// Finger numbers for the fretted strings, assigned by ascending fret and then
    /// ascending string.
    pub fn finger_placements(&self) -> Vec<FingerPlacement> {
        let mut fretted: Vec<(usize, u8)> = self
            .frets
            .iter()
            .enumerate()
            .filter(|(_, &fret)| fret > 0)
            .map(|(index, &fret)| (index + 1, fret))
            .collect();
        fretted.sort_by_key(|&(string, fret)| (fret, string));

        fretted
            .into_iter()
            .enumerate()
            .map(|(i, (string, fret))| FingerPlacement {
                string,
                fret,
                finger: i as u8 + 1,
                barre: 0,
            })
            .collect()
    }
}

/// Pitch class heard on an open string tuned to `open` when pressed at `fret`.
pub fn fret_pitch_class(open: &Note, fret: u8) -> u8 {
    ((u16::from(open.pitch_class()) + u16::from(fret)) % 12) as u8
}

/// A pressed string in a chord diagram.
///
/// - `string`: 1-based string number in tuning order
/// - `fret`: fret pressed (always > 0; open strings have no placement)
/// - `finger`: 1-based finger number
/// - `barre`: always 0, barres are not detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FingerPlacement {
    pub string: usize,
    pub fret: u8,
    pub finger: u8,
    pub barre: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score() {
        assert_eq!(Voicing::new(vec![0, 0, 0, 0]).score(), 0);
        assert_eq!(Voicing::new(vec![0, 0, 0, 3]).score(), 12);
        // min 1, span 1, sum 5
        assert_eq!(Voicing::new(vec![0, 2, 1, 2]).score(), 10);
        // min 5, span 3, sum 5 + 8 + 7
        assert_eq!(Voicing::new(vec![5, 8, 7, 0]).score(), 15 + 6 + 20);
    }

    #[test]
    fn test_span_ignores_open_strings() {
        assert_eq!(Voicing::new(vec![0, 0, 0, 0]).span(), 0);
        assert_eq!(Voicing::new(vec![0, 7, 0, 9]).span(), 2);
        assert_eq!(Voicing::new(vec![12, 0, 0, 0]).span(), 0);
        assert!(Voicing::new(vec![0, 0]).is_all_open());
        assert_eq!(Voicing::new(vec![0, 4, 2]).lowest_fret(), Some(2));
    }

    #[test]
    fn test_finger_placements_order() {
        let placements = Voicing::new(vec![0, 2, 1, 2]).finger_placements();
        assert_eq!(
            placements,
            vec![
                FingerPlacement { string: 3, fret: 1, finger: 1, barre: 0 },
                FingerPlacement { string: 2, fret: 2, finger: 2, barre: 0 },
                FingerPlacement { string: 4, fret: 2, finger: 3, barre: 0 },
            ]
        );
        assert!(Voicing::new(vec![0, 0, 0, 0]).finger_placements().is_empty());
    }

    #[test]
    fn test_sounded_pitch_classes() {
        let tuning: Vec<Note> = ["G", "C", "E", "A"]
            .iter()
            .map(|n| n.parse().unwrap())
            .collect();
        // G C E C
        let sounded = Voicing::new(vec![0, 0, 0, 3]).sounded_pitch_classes(&tuning);
        assert_eq!(sounded, BTreeSet::from([3, 7, 10]));
    }

    #[test]
    fn test_placement_serializes_camel_case() {
        let placement = FingerPlacement { string: 1, fret: 3, finger: 1, barre: 0 };
        let json = serde_json::to_string(&placement).unwrap();
        assert_eq!(json, r#"{"string":1,"fret":3,"finger":1,"barre":0}"#);
    }
}
