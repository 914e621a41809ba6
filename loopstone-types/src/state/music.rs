use serde::{Deserialize, Serialize};

/// Lowest reachable pitch offset, in semitones relative to the loop key.
pub const PITCH_MIN: i8 = -24;
/// Highest reachable pitch offset.
pub const PITCH_MAX: i8 = 24;

/// Semitone intervals of the major scale, relative to the root.
pub const MAJOR_SCALE: [i8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Musical key (pitch class)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl Key {
    pub const ALL: [Key; 12] = [
        Key::C,
        Key::Cs,
        Key::D,
        Key::Ds,
        Key::E,
        Key::F,
        Key::Fs,
        Key::G,
        Key::Gs,
        Key::A,
        Key::As,
        Key::B,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Key::C => "C",
            Key::Cs => "C#",
            Key::D => "D",
            Key::Ds => "D#",
            Key::E => "E",
            Key::F => "F",
            Key::Fs => "F#",
            Key::G => "G",
            Key::Gs => "G#",
            Key::A => "A",
            Key::As => "A#",
            Key::B => "B",
        }
    }

    /// Pitch class as a semitone offset from C.
    pub fn semitone(&self) -> i8 {
        match self {
            Key::C => 0,
            Key::Cs => 1,
            Key::D => 2,
            Key::Ds => 3,
            Key::E => 4,
            Key::F => 5,
            Key::Fs => 6,
            Key::G => 7,
            Key::Gs => 8,
            Key::A => 9,
            Key::As => 10,
            Key::B => 11,
        }
    }

    /// Index into `ALL` for this key.
    pub fn index(&self) -> usize {
        self.semitone() as usize
    }

    /// Key `steps` positions away on the chromatic circle (wrapping).
    pub fn cycled(&self, steps: i32) -> Key {
        let idx = (self.index() as i32 + steps).rem_euclid(12) as usize;
        Key::ALL[idx]
    }
}

impl Default for Key {
    fn default() -> Self {
        Key::C
    }
}

/// Whether a semitone offset lands on a major-scale degree of the given key.
fn in_scale(semitone: i8, key: Key) -> bool {
    let pc = (semitone as i32 - key.semitone() as i32).rem_euclid(12) as i8;
    MAJOR_SCALE.contains(&pc)
}

/// Nearest in-scale semitone strictly past `current` in `direction` (+1/-1).
///
/// The allowed set is every octave transposition of the major scale rooted at
/// `key`, restricted to [PITCH_MIN, PITCH_MAX]. When the search runs off the
/// end of the range the result degrades to the boundary value.
pub fn next_in_scale(current: i8, direction: i8, key: Key) -> i8 {
    debug_assert!(direction == 1 || direction == -1);
    let mut candidate = current.saturating_add(direction);
    while (PITCH_MIN..=PITCH_MAX).contains(&candidate) {
        if in_scale(candidate, key) {
            return candidate;
        }
        candidate = candidate.saturating_add(direction);
    }
    if direction > 0 {
        PITCH_MAX
    } else {
        PITCH_MIN
    }
}

/// One free semitone up or down, clamped to [PITCH_MIN, PITCH_MAX].
pub fn chromatic_step(current: i8, direction: i8) -> i8 {
    debug_assert!(direction == 1 || direction == -1);
    current.saturating_add(direction).clamp(PITCH_MIN, PITCH_MAX)
}
