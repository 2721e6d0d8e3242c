use std::fmt;
use std::path::Path;

use super::contour::{PitchContour, PitchPoint};
use super::languages::Gender;
use crate::CorpusError;

/// Vowel duration used when none is configured.
pub const DEFAULT_VOWEL_DURATION_MS: u32 = 500;

/// A single-phoneme MBROLA transcription.
///
/// Rendered on one line as `<phoneme> <duration> (<pos>, <hz>) ...`, with
/// positions given in percent of the duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionRecord {
    pub phoneme: String,
    pub duration_ms: u32,
    pub pitch: Vec<PitchPoint>,
}

impl TranscriptionRecord {
    pub fn new(vowel: &str, gender: Gender, contour: PitchContour, duration_ms: u32) -> Self {
        Self {
            phoneme: vowel.to_string(),
            duration_ms,
            pitch: contour.breakpoints(gender),
        }
    }

    /// Write the record to a `.pho` file, replacing any previous content.
    pub fn write_to(&self, path: &Path) -> Result<(), CorpusError> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for TranscriptionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.phoneme, self.duration_ms)?;
        for point in &self.pitch {
            write!(f, " ({}, {})", point.position, point.hz)?;
        }
        Ok(())
    }
}
