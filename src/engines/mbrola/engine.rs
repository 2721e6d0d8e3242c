use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use super::voices::VoiceStore;
use crate::{CorpusError, Synthesizer, WaveformInfo};

/// Synthesizer that runs the MBROLA executable once per transcription.
///
/// ```rust,no_run
/// use std::path::Path;
/// use vowel_corpus::{engines::mbrola::MbrolaSynthesizer, Synthesizer};
///
/// let mut mbrola = MbrolaSynthesizer::new("/usr/bin/mbrola", "/usr/share/mbrola");
/// mbrola.preflight(&["us1"])?;
/// let info = mbrola.synthesize(Path::new("a.pho"), "us1", Path::new("a.wav"))?;
/// println!("{:.2}s at {}Hz", info.duration_secs(), info.sample_rate);
/// # Ok::<(), vowel_corpus::CorpusError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MbrolaSynthesizer {
    executable: PathBuf,
    voices: VoiceStore,
}

impl MbrolaSynthesizer {
    pub fn new(executable: impl Into<PathBuf>, voices_path: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            voices: VoiceStore::new(voices_path),
        }
    }

    /// Locate the executable the way the process spawner will.
    ///
    /// A bare name such as `mbrola` is searched on `PATH`; anything with a
    /// directory component must point at an existing file.
    fn resolve_executable(&self) -> Option<PathBuf> {
        if self.executable.components().count() > 1 {
            return self.executable.is_file().then(|| self.executable.clone());
        }

        let name = self.executable.as_os_str();
        let path_var = std::env::var_os("PATH")?;
        std::env::split_paths(&path_var).find_map(|dir| {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
            if EXE_SUFFIX.is_empty() {
                return None;
            }
            let mut with_suffix = candidate.into_os_string();
            with_suffix.push(EXE_SUFFIX);
            let with_suffix = PathBuf::from(with_suffix);
            with_suffix.is_file().then_some(with_suffix)
        })
    }

    fn run(&self, voice_file: &Path, pho_path: &Path, wav_path: &Path) -> Result<Output, CorpusError> {
        Command::new(&self.executable)
            .arg(voice_file)
            .arg(pho_path)
            .arg(wav_path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CorpusError::MissingResource {
                        what: "MBROLA executable",
                        path: self.executable.clone(),
                    }
                } else {
                    CorpusError::Io(e)
                }
            })
    }
}

impl Synthesizer for MbrolaSynthesizer {
    fn preflight(&self, voices: &[&str]) -> Result<(), CorpusError> {
        let resolved = self
            .resolve_executable()
            .ok_or_else(|| CorpusError::MissingResource {
                what: "MBROLA executable",
                path: self.executable.clone(),
            })?;
        log::debug!("Using MBROLA at {}", resolved.display());
        self.voices.require_all(voices)
    }

    fn synthesize(
        &mut self,
        pho_path: &Path,
        voice: &str,
        wav_path: &Path,
    ) -> Result<WaveformInfo, CorpusError> {
        let voice_file = self.voices.require(voice)?;
        let item = pho_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| pho_path.display().to_string());

        let output = self.run(&voice_file, pho_path, wav_path)?;
        if !output.status.success() {
            return Err(CorpusError::Synthesis {
                item,
                code: output.status.code(),
                output: diagnostic(&output),
            });
        }

        // mbrola can exit cleanly without producing audio, e.g. for a phoneme the voice lacks
        let info = WaveformInfo::read(wav_path).map_err(|e| CorpusError::Synthesis {
            item: item.clone(),
            code: output.status.code(),
            output: format!("unreadable waveform {}: {e}", wav_path.display()),
        })?;

        log::debug!(
            "{item}: {:.3}s at {}Hz with voice {voice}",
            info.duration_secs(),
            info.sample_rate
        );
        Ok(info)
    }
}

/// The tool's stderr, or its stdout when stderr is empty.
fn diagnostic(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        return stderr.trim().to_string();
    }
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::{fake_mbrola, write_test_wav};

    struct Fixture {
        dir: tempfile::TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            fs::create_dir(dir.path().join("voices")).unwrap();
            fs::write(dir.path().join("voices").join("us1"), b"voice").unwrap();
            fs::write(dir.path().join("a.pho"), "A 500 (1, 189) (100, 223)").unwrap();
            Self { dir }
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }
    }

    #[test]
    fn preflight_rejects_missing_executable() {
        let fixture = Fixture::new();
        let mbrola = MbrolaSynthesizer::new(fixture.path("no-mbrola"), fixture.path("voices"));

        match mbrola.preflight(&["us1"]).unwrap_err() {
            CorpusError::MissingResource { what, path } => {
                assert_eq!(what, "MBROLA executable");
                assert_eq!(path, fixture.path("no-mbrola"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn preflight_searches_path_for_bare_names() {
        let fixture = Fixture::new();

        MbrolaSynthesizer::new("sh", fixture.path("voices"))
            .preflight(&["us1"])
            .unwrap();
        assert!(matches!(
            MbrolaSynthesizer::new("mbrola-not-installed-here", fixture.path("voices"))
                .preflight(&["us1"]),
            Err(CorpusError::MissingResource { what: "MBROLA executable", .. })
        ));
    }

    #[test]
    fn preflight_rejects_missing_voice() {
        let fixture = Fixture::new();
        let exe = fake_mbrola(fixture.dir.path(), "exit 0");
        let mbrola = MbrolaSynthesizer::new(exe, fixture.path("voices"));

        mbrola.preflight(&["us1"]).unwrap();
        assert!(matches!(
            mbrola.preflight(&["us1", "us2"]),
            Err(CorpusError::MissingResource { what: "MBROLA voice", .. })
        ));
    }

    #[test]
    fn passes_voice_pho_and_wav_paths() {
        let fixture = Fixture::new();
        let template = fixture.path("template.wav");
        write_test_wav(&template, 100).unwrap();
        let exe = fake_mbrola(
            fixture.dir.path(),
            &format!(
                "echo \"$1|$2|$3\" > {}\ncp {} \"$3\"",
                fixture.path("args.txt").display(),
                template.display()
            ),
        );
        let mut mbrola = MbrolaSynthesizer::new(exe, fixture.path("voices"));

        let info = mbrola
            .synthesize(&fixture.path("a.pho"), "us1", &fixture.path("a.wav"))
            .unwrap();
        assert_eq!(info.sample_rate, 16000);
        assert_eq!(info.samples, 1600);

        let args = fs::read_to_string(fixture.path("args.txt")).unwrap();
        assert_eq!(
            args.trim(),
            format!(
                "{}|{}|{}",
                fixture.path("voices").join("us1").display(),
                fixture.path("a.pho").display(),
                fixture.path("a.wav").display()
            )
        );
    }

    #[test]
    fn nonzero_exit_carries_tool_output() {
        let fixture = Fixture::new();
        let exe = fake_mbrola(fixture.dir.path(), "echo 'Fatal error: unknown phoneme' >&2\nexit 3");
        let mut mbrola = MbrolaSynthesizer::new(exe, fixture.path("voices"));

        let err = mbrola
            .synthesize(&fixture.path("a.pho"), "us1", &fixture.path("a.wav"))
            .unwrap_err();
        match err {
            CorpusError::Synthesis { item, code, output } => {
                assert_eq!(item, "a");
                assert_eq!(code, Some(3));
                assert_eq!(output, "Fatal error: unknown phoneme");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn clean_exit_without_waveform_is_a_synthesis_error() {
        let fixture = Fixture::new();
        let exe = fake_mbrola(fixture.dir.path(), "exit 0");
        let mut mbrola = MbrolaSynthesizer::new(exe, fixture.path("voices"));

        assert!(matches!(
            mbrola.synthesize(&fixture.path("a.pho"), "us1", &fixture.path("a.wav")),
            Err(CorpusError::Synthesis { code: Some(0), .. })
        ));
    }
}
