//! Corpus content and bookkeeping.
//!
//! - [`languages`]: vowel repertoires and MBROLA voices per language
//! - [`contour`]: falling and rising pitch contours
//! - [`transcription`]: `.pho` records handed to the synthesizer
//! - [`plan`]: expansion of the tables into the ordered list of items
//! - [`metadata`]: per-item rows and their persisted forms
//! - [`generator`]: the end-to-end pipeline

pub mod contour;
pub mod generator;
pub mod languages;
pub mod metadata;
pub mod plan;
pub mod transcription;

pub use contour::{PitchContour, PitchPoint};
pub use languages::{Gender, LanguageConfig, VowelGroup, VowelSpec};
pub use plan::{plan_corpus, PlannedItem};
pub use transcription::TranscriptionRecord;
