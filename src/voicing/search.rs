//! Exhaustive voicing search
//!
//! For each string, list the frets that sound a chord tone, walk the full cross
//! product depth-first and keep assignments that are playable (fretted span within
//! the instrument's limit) and exact (every chord tone sounded, nothing else).

use std::collections::BTreeSet;

use super::types::{fret_pitch_class, FingerPlacement, Voicing};
use crate::chord::Chord;
use crate::instrument::Instrument;
use crate::note::Note;

/// Frets `0..=max_fret` on each string whose pitch class is in `target`.
pub fn candidate_frets(tuning: &[Note], target: &BTreeSet<u8>, max_fret: u8) -> Vec<Vec<u8>> {
    tuning
        .iter()
        .map(|open| {
            (0..=max_fret)
                .filter(|&fret| target.contains(&fret_pitch_class(open, fret)))
                .collect()
        })
        .collect()
}

/// Fretted positions fit within `max_span`. Open strings never count.
pub fn is_playable(voicing: &Voicing, max_span: u8) -> bool {
    voicing.span() <= max_span
}

/// The voicing sounds exactly `target`: same number of pitch classes, all of them
/// chord tones.
pub fn is_exact(voicing: &Voicing, tuning: &[Note], target: &BTreeSet<u8>) -> bool {
    let sounded = voicing.sounded_pitch_classes(tuning);
    sounded.len() == target.len() && sounded.is_subset(target)
}

/// Every playable, exact voicing of `target`, in enumeration order: the first string
/// varies slowest and each string tries its candidate frets from low to high.
pub fn find_all_voicings(instrument: &Instrument, target: &BTreeSet<u8>) -> Vec<Voicing> {
    let tuning = &instrument.tuning;
    if target.len() > tuning.len() {
        log::debug!(
            "{} pitch classes cannot fit on {} strings",
            target.len(),
            tuning.len()
        );
        return Vec::new();
    }

    let candidates = candidate_frets(tuning, target, instrument.max_fret);
    if candidates.iter().any(Vec::is_empty) {
        log::debug!("a string has no fret sounding a chord tone");
        return Vec::new();
    }

    let mut search = Search {
        instrument,
        target,
        candidates: &candidates,
        current: Vec::with_capacity(tuning.len()),
        found: Vec::new(),
    };
    search.enumerate();
    log::trace!("{} admissible voicings", search.found.len());
    search.found
}

struct Search<'a> {
    instrument: &'a Instrument,
    target: &'a BTreeSet<u8>,
    candidates: &'a [Vec<u8>],
    current: Vec<u8>,
    found: Vec<Voicing>,
}

impl Search<'_> {
    fn enumerate(&mut self) {
        let string = self.current.len();
        if string == self.candidates.len() {
            let voicing = Voicing::new(self.current.clone());
            if is_playable(&voicing, self.instrument.max_span)
                && is_exact(&voicing, &self.instrument.tuning, self.target)
            {
                self.found.push(voicing);
            }
            return;
        }

        let candidates = self.candidates;
        for &fret in &candidates[string] {
            self.current.push(fret);
            self.enumerate();
            self.current.pop();
        }
    }
}

/// All voicings of `chord`, easiest first. Equal scores keep enumeration order.
pub fn ranked_voicings(chord: &Chord, instrument: &Instrument) -> Vec<Voicing> {
    let mut voicings = find_all_voicings(instrument, &chord.target_pitch_classes());
    voicings.sort_by_key(Voicing::score);
    voicings
}

/// Lowest-scoring voicing, or `None` when the chord cannot be played.
pub fn best_voicing(chord: &Chord, instrument: &Instrument) -> Option<Voicing> {
    let best = ranked_voicings(chord, instrument).into_iter().next();
    match &best {
        Some(voicing) if voicing.is_all_open() => {
            log::debug!("{} on {}: all strings open", chord, instrument.name)
        }
        Some(voicing) => log::debug!(
            "{} on {}: frets {:?}, score {}",
            chord,
            instrument.name,
            voicing.frets,
            voicing.score()
        ),
        None => log::debug!("{} on {}: no voicing", chord, instrument.name),
    }
    best
}

/// Finger placements for the best voicing of `chord`.
///
/// `None` means no voicing exists. `Some(vec![])` is an all-open voicing.
///
/// # Example
/// ```
/// use chordfret::{chord_to_finger_placements, parse_chord, FingerPlacement, Instrument};
///
/// let chord = parse_chord("C")?;
/// let placements = chord_to_finger_placements(&chord, &Instrument::default());
/// assert_eq!(
///     placements,
///     Some(vec![FingerPlacement { string: 4, fret: 3, finger: 1, barre: 0 }])
/// );
/// # Ok::<(), chordfret::ChordError>(())
/// ```
pub fn chord_to_finger_placements(
    chord: &Chord,
    instrument: &Instrument,
) -> Option<Vec<FingerPlacement>> {
    best_voicing(chord, instrument).map(|voicing| voicing.finger_placements())
}
