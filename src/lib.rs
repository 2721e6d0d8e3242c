//! # vowel-corpus
//!
//! Regenerates a research corpus of isolated vowels synthesized with MBROLA.
//!
//! The crate does the bookkeeping around the synthesizer: which vowels each
//! language contributes, which MBROLA voices render them, the falling and
//! rising pitch contours applied to every vowel, and the metadata describing
//! the resulting files. Synthesis itself is delegated to the external
//! `mbrola` executable.
//!
//! ## Layout of a generated corpus
//!
//! ```text
//! corpus/
//! ├── pho/                 # one MBROLA transcription per item
//! │   └── en_us1_f_001.pho
//! ├── wav/                 # one waveform per item
//! │   └── en_us1_f_001.wav
//! └── corpus_info.csv      # tabular view of the metadata
//! ```
//!
//! The canonical metadata is a binary snapshot written to a separate path.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vowel_corpus::{engines::mbrola::MbrolaSynthesizer, CorpusGenerator, CorpusOptionsBuilder};
//!
//! let options = CorpusOptionsBuilder::default()
//!     .output_corpus_path("corpus")
//!     .output_info("corpus/info.bin")
//!     .build()?;
//! let synthesizer = MbrolaSynthesizer::new("/usr/bin/mbrola", "mbrola-voices/data");
//!
//! let metadata = CorpusGenerator::new(options, synthesizer).run()?;
//! println!("Generated {} items", metadata.len());
//! # Ok::<(), vowel_corpus::CorpusError>(())
//! ```

pub mod corpus;
pub mod engines;
mod error;

#[cfg(test)]
pub(crate) mod test_support;

pub use corpus::generator::{CorpusGenerator, CorpusOptions, CorpusOptionsBuilder};
pub use corpus::metadata::{CorpusItem, CorpusMetadata};
pub use error::CorpusError;

use std::path::Path;

/// Header information of a waveform produced by a synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveformInfo {
    pub sample_rate: u32,
    pub channels: u16,
    /// Number of samples per channel
    pub samples: u32,
}

impl WaveformInfo {
    /// Read the header of a WAV file.
    pub fn read(path: &Path) -> Result<Self, hound::Error> {
        let reader = hound::WavReader::open(path)?;
        let spec = reader.spec();
        Ok(Self {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            samples: reader.duration(),
        })
    }

    /// Duration of the audio in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples as f64 / self.sample_rate as f64
    }
}

/// Common interface for the external synthesizer rendering `.pho` files.
///
/// The corpus generator only talks to this trait, so the MBROLA subprocess
/// can be swapped for another renderer.
pub trait Synthesizer {
    /// Check that everything needed to render the given voices is present.
    ///
    /// Called once before any output is written. The default accepts all voices.
    fn preflight(&self, _voices: &[&str]) -> Result<(), CorpusError> {
        Ok(())
    }

    /// Render `pho_path` with `voice` into a waveform at `wav_path`.
    fn synthesize(
        &mut self,
        pho_path: &Path,
        voice: &str,
        wav_path: &Path,
    ) -> Result<WaveformInfo, CorpusError>;
}
