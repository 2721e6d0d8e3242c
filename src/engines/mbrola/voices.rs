use std::path::PathBuf;

use crate::CorpusError;

/// Locates MBROLA voice files under a voices directory.
///
/// Two layouts are accepted for a voice such as `us1`:
/// - flat: `<root>/us1` is the voice file itself
/// - the layout of the MBROLA voices distribution: `<root>/us1/us1`
#[derive(Debug, Clone)]
pub struct VoiceStore {
    root: PathBuf,
}

impl VoiceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the voice file, or `MissingResource` if neither layout has it.
    pub fn require(&self, voice: &str) -> Result<PathBuf, CorpusError> {
        let candidate = self.root.join(voice);
        if candidate.is_file() {
            return Ok(candidate);
        }

        let nested = candidate.join(voice);
        if nested.is_file() {
            return Ok(nested);
        }

        Err(CorpusError::MissingResource {
            what: "MBROLA voice",
            path: candidate,
        })
    }

    /// Check every voice, reporting the first one that is missing.
    pub fn require_all(&self, voices: &[&str]) -> Result<(), CorpusError> {
        for voice in voices {
            let path = self.require(voice)?;
            log::debug!("Voice {voice} found at {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn resolves_flat_and_nested_layouts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("us1"), b"voice").unwrap();
        fs::create_dir(dir.path().join("de6")).unwrap();
        fs::write(dir.path().join("de6").join("de6"), b"voice").unwrap();

        let store = VoiceStore::new(dir.path());
        assert_eq!(store.require("us1").unwrap(), dir.path().join("us1"));
        assert_eq!(
            store.require("de6").unwrap(),
            dir.path().join("de6").join("de6")
        );
    }

    #[test]
    fn missing_voice_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("fr1")).unwrap();
        let store = VoiceStore::new(dir.path());

        let err = store.require_all(&["fr1"]).unwrap_err();
        match err {
            CorpusError::MissingResource { what, path } => {
                assert_eq!(what, "MBROLA voice");
                assert_eq!(path, dir.path().join("fr1"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
