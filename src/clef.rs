// =====================================================================
// CLEF CONFIGURATION
// =====================================================================
// Treble and bass only differ in data: note set, layout function and
// drawing sizes. The round logic is shared.

use crate::note::{Letter, Note};
use crate::staff::{self, NotePlacement, StaffGeometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clef {
    Treble,
    Bass,
}

pub struct ClefConfig {
    pub name: &'static str,
    pub notes: &'static [Note],
    pub layout: fn(usize) -> NotePlacement,
    pub staff: StaffGeometry,
    /// Outer (black) and inner (white) note-head radius
    pub head_radius: (i32, i32),
    pub ledger_half_width: i32,
    pub glyph_file: &'static str,
    /// Height of the clef glyph next to the staff, in pixels
    pub glyph_height: u32,
}

const TREBLE_NOTES: [Note; 13] = [
    Note::new(Letter::C, 4),
    Note::new(Letter::D, 4),
    Note::new(Letter::E, 4),
    Note::new(Letter::F, 4),
    Note::new(Letter::G, 4),
    Note::new(Letter::A, 4),
    Note::new(Letter::B, 4),
    Note::new(Letter::C, 5),
    Note::new(Letter::D, 5),
    Note::new(Letter::E, 5),
    Note::new(Letter::F, 5),
    Note::new(Letter::G, 5),
    Note::new(Letter::A, 5),
];

const BASS_NOTES: [Note; 13] = [
    Note::new(Letter::E, 2),
    Note::new(Letter::F, 2),
    Note::new(Letter::G, 2),
    Note::new(Letter::A, 2),
    Note::new(Letter::B, 2),
    Note::new(Letter::C, 3),
    Note::new(Letter::D, 3),
    Note::new(Letter::E, 3),
    Note::new(Letter::F, 3),
    Note::new(Letter::G, 3),
    Note::new(Letter::A, 3),
    Note::new(Letter::B, 3),
    Note::new(Letter::C, 4),
];

pub static TREBLE: ClefConfig = ClefConfig {
    name: "Treble",
    notes: &TREBLE_NOTES,
    layout: staff::treble_placement,
    staff: staff::TREBLE_STAFF,
    head_radius: (10, 7),
    ledger_half_width: 18,
    glyph_file: crate::config::TREBLE_GLYPH_FILE,
    glyph_height: 150,
};

pub static BASS: ClefConfig = ClefConfig {
    name: "Bass",
    notes: &BASS_NOTES,
    layout: staff::bass_placement,
    staff: staff::BASS_STAFF,
    head_radius: (14, 10),
    ledger_half_width: 22,
    glyph_file: crate::config::BASS_GLYPH_FILE,
    glyph_height: 110,
};

impl Clef {
    pub fn config(self) -> &'static ClefConfig {
        match self {
            Clef::Treble => &TREBLE,
            Clef::Bass => &BASS,
        }
    }
}

impl ClefConfig {
    pub fn placement(&self, index: usize) -> NotePlacement {
        (self.layout)(index)
    }
}

/// Every note either clef can show, without duplicates (C4 is in both).
pub fn all_notes() -> Vec<Note> {
    let mut notes: Vec<Note> = Vec::new();
    for n in TREBLE_NOTES.iter().chain(BASS_NOTES.iter()) {
        if !notes.contains(n) {
            notes.push(*n);
        }
    }
    notes
}
