use std::fmt;

use serde::{Deserialize, Serialize};

use super::languages::Gender;

const FALLING_MALE: [u32; 3] = [112, 132, 92];
const FALLING_FEMALE: [u32; 3] = [189, 223, 155];
const RISING_MALE: [u32; 2] = [112, 132];
const RISING_FEMALE: [u32; 2] = [189, 223];

/// A pitch target at `position` percent of the phoneme duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchPoint {
    pub position: u8,
    pub hz: u32,
}

/// Fundamental-frequency trajectory applied to a vowel.
///
/// Serialized as its file-name tag, `f` or `r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchContour {
    #[serde(rename = "f")]
    Falling,
    #[serde(rename = "r")]
    Rising,
}

impl PitchContour {
    /// Every contour, in generation order.
    pub const ALL: [PitchContour; 2] = [PitchContour::Falling, PitchContour::Rising];

    pub fn tag(self) -> char {
        match self {
            PitchContour::Falling => 'f',
            PitchContour::Rising => 'r',
        }
    }

    /// Pitch targets in Hz for a speaker of the given gender.
    pub fn targets(self, gender: Gender) -> &'static [u32] {
        match (self, gender) {
            (PitchContour::Falling, Gender::Male) => &FALLING_MALE,
            (PitchContour::Falling, Gender::Female) => &FALLING_FEMALE,
            (PitchContour::Rising, Gender::Male) => &RISING_MALE,
            (PitchContour::Rising, Gender::Female) => &RISING_FEMALE,
        }
    }

    /// Breakpoints of the contour.
    ///
    /// A falling contour rises to its peak at 20%, holds it until 28% and
    /// falls to the final target. A rising contour interpolates between its
    /// two targets over the whole vowel.
    pub fn breakpoints(self, gender: Gender) -> Vec<PitchPoint> {
        let t = self.targets(gender);
        let layout: &[(u8, usize)] = match self {
            PitchContour::Falling => &[(1, 0), (20, 1), (28, 1), (100, 2)],
            PitchContour::Rising => &[(1, 0), (100, 1)],
        };
        layout
            .iter()
            .map(|&(position, idx)| PitchPoint {
                position,
                hz: t[idx],
            })
            .collect()
    }
}

impl fmt::Display for PitchContour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
