pub mod api;
pub mod chord;
pub mod error;
pub mod instrument;
pub mod note;
pub mod voicing;

pub use api::{chord_notes, finger_chord, normalize, transpose_symbol};
pub use chord::{
    is_valid_chord, parse_chord, Addition, Chord, ChordSummary, Interval, IntervalMap,
    Modification, Quality,
};
pub use error::ChordError;
pub use instrument::Instrument;
pub use note::{interval_between, transpose_name, Accidental, Note, Spelling, NOTES_DOWN, NOTES_UP};
pub use voicing::{
    best_voicing, chord_to_finger_placements, find_all_voicings, ranked_voicings,
    FingerPlacement, Voicing,
};
