use std::path::{Path, PathBuf};

use crate::{CorpusError, Synthesizer, WaveformInfo};

/// Write a silent 16 kHz mono WAV of the given length.
pub(crate) fn write_test_wav(path: &Path, duration_ms: u32) -> hound::Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for _ in 0..(16 * duration_ms) {
        writer.write_sample(0i16)?;
    }
    writer.finalize()
}

/// In-process stand-in for MBROLA that records its calls.
#[derive(Default)]
pub(crate) struct FakeSynthesizer {
    pub calls: Vec<(PathBuf, String, PathBuf)>,
    /// Fail when asked to render a `.pho` file with this stem.
    pub fail_on: Option<String>,
    /// Report success for this stem without writing a waveform.
    pub silent_on: Option<String>,
    /// Reject these voices during preflight.
    pub missing_voices: Vec<String>,
}

impl Synthesizer for FakeSynthesizer {
    fn preflight(&self, voices: &[&str]) -> Result<(), CorpusError> {
        match voices.iter().find(|v| self.missing_voices.iter().any(|m| m == *v)) {
            Some(voice) => Err(CorpusError::MissingResource {
                what: "MBROLA voice",
                path: PathBuf::from(*voice),
            }),
            None => Ok(()),
        }
    }

    fn synthesize(
        &mut self,
        pho_path: &Path,
        voice: &str,
        wav_path: &Path,
    ) -> Result<WaveformInfo, CorpusError> {
        let stem = pho_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        self.calls
            .push((pho_path.to_path_buf(), voice.to_string(), wav_path.to_path_buf()));

        if self.fail_on.as_deref() == Some(stem.as_str()) {
            return Err(CorpusError::Synthesis {
                item: stem,
                code: Some(1),
                output: "fake failure".to_string(),
            });
        }

        if self.silent_on.as_deref() == Some(stem.as_str()) {
            return Ok(WaveformInfo {
                sample_rate: 16000,
                channels: 1,
                samples: 0,
            });
        }

        write_test_wav(wav_path, 50).map_err(|e| CorpusError::Synthesis {
            item: stem,
            code: None,
            output: e.to_string(),
        })?;
        WaveformInfo::read(wav_path).map_err(|e| CorpusError::Synthesis {
            item: pho_path.display().to_string(),
            code: None,
            output: e.to_string(),
        })
    }
}

/// Write an executable shell script standing in for the `mbrola` binary.
///
/// The script receives MBROLA's arguments: voice file, `.pho` file, `.wav` file.
#[cfg(unix)]
pub(crate) fn fake_mbrola(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("mbrola");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
