// =====================================================================
// STAFF GEOMETRY
// =====================================================================
// Pure layout: note index -> y coordinate plus the ledger lines that
// have to be drawn with it. No canvas involved.

/// Number of lines in a staff.
pub const STAFF_LINES: i32 = 5;

/// Where a staff sits on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaffGeometry {
    pub x: i32,
    pub width: i32,
    /// y of the top line
    pub top: i32,
    pub line_spacing: i32,
}

impl StaffGeometry {
    /// y of the bottom line
    pub fn bottom(&self) -> i32 {
        self.top + (STAFF_LINES - 1) * self.line_spacing
    }

    /// y of the five lines, top to bottom.
    pub fn line_ys(&self) -> impl Iterator<Item = i32> + '_ {
        (0..STAFF_LINES).map(move |i| self.top + i * self.line_spacing)
    }

    /// Horizontal centre; notes are drawn here.
    pub fn note_x(&self) -> i32 {
        self.x + self.width / 2
    }
}

/// Result of a layout lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct NotePlacement {
    pub y: f32,
    pub ledgers: Vec<f32>,
}

// Treble: 13 notes C4..A5, top line F5 is index 10.
pub const TREBLE_STAFF: StaffGeometry = StaffGeometry {
    x: 120,
    width: 600,
    top: 300,
    line_spacing: 20,
};
const TREBLE_TOP_INDEX: usize = 10;
/// Highest index that still needs ledger lines below the staff.
const TREBLE_LOW_LEDGER_MAX: usize = 1;
/// Lowest index that gets ledger lines above the staff.
const TREBLE_HIGH_LEDGER_MIN: usize = 9;
const TREBLE_LAST_INDEX: usize = 12;

// Bass: 13 notes E2..C4, E2 and C4 sit on a ledger line.
pub const BASS_STAFF: StaffGeometry = StaffGeometry {
    x: 120,
    width: 660,
    top: 220,
    line_spacing: 32,
};
const BASS_LAST_INDEX: usize = 12;

pub fn treble_placement(index: usize) -> NotePlacement {
    let index = index.min(TREBLE_LAST_INDEX);
    let geo = TREBLE_STAFF;
    let top = geo.top as f32;
    let spacing = geo.line_spacing as f32;

    // Half a line spacing per step, counted down from the top line
    let y = top + spacing * (TREBLE_TOP_INDEX as f32 - index as f32) / 2.0;

    let mut ledgers = Vec::new();
    if index <= TREBLE_LOW_LEDGER_MAX {
        let count = TREBLE_LOW_LEDGER_MAX + 1 - index;
        for k in 0..count {
            ledgers.push(top + spacing * (STAFF_LINES as f32 - k as f32));
        }
    }
    if index >= TREBLE_HIGH_LEDGER_MIN {
        let count = index + 1 - TREBLE_HIGH_LEDGER_MIN;
        for k in 0..count {
            ledgers.push(top - spacing * k as f32);
        }
    }

    NotePlacement { y, ledgers }
}

pub fn bass_placement(index: usize) -> NotePlacement {
    let index = index.min(BASS_LAST_INDEX);
    let geo = BASS_STAFF;
    let bottom = geo.bottom() as f32;
    let spacing = geo.line_spacing as f32;

    // Index 0 (E2) hangs one spacing below the bottom line
    let y = bottom + spacing - index as f32 * spacing / 2.0;

    let ledgers = if index == 0 || index == BASS_LAST_INDEX {
        vec![y]
    } else {
        Vec::new()
    };

    NotePlacement { y, ledgers }
}
