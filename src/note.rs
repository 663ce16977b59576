// =====================================================================
// NOTES AND LETTER CLASSES
// =====================================================================

use std::fmt;

/// Pitch name without octave. The discriminant is the answer index the
/// player types (C=0 ... B=6, keys 1-7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Letter> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Semitones above C in the same octave.
    fn semitone(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A natural note such as "C4". Notes are small `Copy` values and get
/// replaced wholesale when a new one is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub letter: Letter,
    pub octave: i8,
}

impl Note {
    pub const fn new(letter: Letter, octave: i8) -> Self {
        Self { letter, octave }
    }

    /// Parses identifiers like "C4" or "e2".
    pub fn parse(id: &str) -> Option<Note> {
        let mut chars = id.chars();
        let letter = Letter::from_char(chars.next()?)?;
        let octave = chars.as_str().parse::<i8>().ok()?;
        Some(Note { letter, octave })
    }

    pub fn letter_class(self) -> Letter {
        self.letter
    }

    /// MIDI key number, C4 = 60.
    pub fn midi(self) -> i32 {
        (self.octave as i32 + 1) * 12 + self.letter.semitone()
    }

    /// Equal temperament, A4 = 440 Hz.
    pub fn frequency(self) -> f64 {
        440.0 * 2.0f64.powf((self.midi() as f64 - 69.0) / 12.0)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.octave)
    }
}
