use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use derive_builder::Builder;

use super::languages::resolve_languages;
use super::metadata::{CorpusMetadata, CSV_FILE_NAME, PHO_DIR, WAV_DIR};
use super::plan::{plan_corpus, planned_voices};
use super::transcription::DEFAULT_VOWEL_DURATION_MS;
use crate::{CorpusError, Synthesizer};

/// Parameters of a corpus build.
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "CorpusError"))]
pub struct CorpusOptions {
    /// Root directory receiving `pho/`, `wav/` and the CSV view.
    #[builder(setter(into))]
    pub output_corpus_path: PathBuf,
    /// Path of the binary metadata snapshot.
    #[builder(setter(into))]
    pub output_info: PathBuf,
    /// Language codes to generate. Empty means all supported languages.
    #[builder(default)]
    pub languages: Vec<String>,
    #[builder(default = "DEFAULT_VOWEL_DURATION_MS")]
    pub vowel_duration_ms: u32,
    /// Re-check that metadata and files match after writing.
    #[builder(default)]
    pub verify: bool,
}

impl CorpusOptionsBuilder {
    fn validate(&self) -> Result<(), CorpusError> {
        if self.vowel_duration_ms == Some(0) {
            return Err(CorpusError::Configuration(
                "vowel duration must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Runs the whole pipeline: plan, write transcriptions, synthesize, record.
pub struct CorpusGenerator<S: Synthesizer> {
    options: CorpusOptions,
    synthesizer: S,
}

impl<S: Synthesizer> CorpusGenerator<S> {
    pub fn new(options: CorpusOptions, synthesizer: S) -> Self {
        Self {
            options,
            synthesizer,
        }
    }

    pub fn synthesizer(&self) -> &S {
        &self.synthesizer
    }

    /// Generate the corpus and persist its metadata.
    ///
    /// Configuration and missing resources are reported before anything is
    /// written. `.pho` and `.wav` files left by earlier runs that are not
    /// part of this plan are removed. Any later failure, including a failed
    /// verification, aborts the run without writing metadata.
    pub fn run(&mut self) -> Result<CorpusMetadata, CorpusError> {
        let languages = resolve_languages(self.options.languages.as_slice())?;
        let plan = plan_corpus(&languages, self.options.vowel_duration_ms)?;
        self.synthesizer.preflight(&planned_voices(&plan))?;

        let corpus = &self.options.output_corpus_path;
        let pho_dir = corpus.join(PHO_DIR);
        let wav_dir = corpus.join(WAV_DIR);
        fs::create_dir_all(&pho_dir)?;
        fs::create_dir_all(&wav_dir)?;

        let planned: HashSet<&str> = plan.iter().map(|i| i.stem.as_str()).collect();
        remove_stale_files(&pho_dir, "pho", &planned)?;
        remove_stale_files(&wav_dir, "wav", &planned)?;

        log::info!(
            "Generating {} items for {} into {}",
            plan.len(),
            languages
                .iter()
                .map(|l| l.name)
                .collect::<Vec<_>>()
                .join(", "),
            corpus.display()
        );

        let mut metadata = CorpusMetadata::new();
        for (idx, item) in plan.iter().enumerate() {
            let pho_path = pho_dir.join(item.pho_file_name());
            let wav_path = wav_dir.join(item.wav_file_name());

            item.record.write_to(&pho_path)?;
            self.synthesizer.synthesize(&pho_path, item.voice, &wav_path)?;
            metadata.push(item.to_corpus_item());

            if (idx + 1) % 50 == 0 {
                log::info!("Synthesized {}/{} items", idx + 1, plan.len());
            }
        }

        metadata.sort_by_filename();
        if self.options.verify {
            metadata.verify(corpus)?;
            log::info!("Corpus verified");
        }

        metadata.save_snapshot(&self.options.output_info)?;
        metadata.write_csv(&corpus.join(CSV_FILE_NAME))?;

        Ok(metadata)
    }
}

/// Delete files with extension `ext` in `dir` whose stem is not in `keep`.
fn remove_stale_files(dir: &Path, ext: &str, keep: &HashSet<&str>) -> Result<(), CorpusError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(ext) {
            continue;
        }
        let stale = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map_or(true, |stem| !keep.contains(stem));
        if stale {
            log::debug!("Removing stale {}", path.display());
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}
