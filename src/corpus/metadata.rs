use std::collections::{BTreeSet, HashSet};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::contour::PitchContour;
use crate::CorpusError;

/// Name of the tabular metadata view inside the corpus directory.
pub const CSV_FILE_NAME: &str = "corpus_info.csv";

/// Subdirectory of the corpus holding `.pho` transcriptions.
pub const PHO_DIR: &str = "pho";

/// Subdirectory of the corpus holding `.wav` waveforms.
pub const WAV_DIR: &str = "wav";

/// One generated item. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusItem {
    /// File name stem shared by the `.pho` and `.wav` files
    pub filename: String,
    pub language: String,
    #[serde(rename = "mbrola_voice")]
    pub voice: String,
    pub contour: PitchContour,
    pub sequence: u32,
    /// SAMPA symbol of the vowel
    pub vowel: String,
    /// Vowel onset in ms
    pub vowel_onset: u32,
    /// Vowel offset in ms
    pub vowel_offset: u32,
}

/// Metadata of a generated corpus.
///
/// The binary snapshot is the canonical store; the CSV file is a view
/// regenerated from the same rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusMetadata {
    items: Vec<CorpusItem>,
}

impl CorpusMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: CorpusItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[CorpusItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Order rows by file name, the order both persisted forms use.
    pub fn sort_by_filename(&mut self) {
        self.items.sort_by(|a, b| a.filename.cmp(&b.filename));
    }

    /// Atomically write the binary snapshot, creating parent directories.
    pub fn save_snapshot(&self, path: &Path) -> Result<(), CorpusError> {
        let parent_dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            bincode::serialize_into(&mut writer, self)?;
            writer.flush()?;
        }
        temp_file.persist(path).map_err(|e| e.error)?;

        log::info!("Wrote {} metadata rows to {}", self.len(), path.display());
        Ok(())
    }

    pub fn load_snapshot(path: &Path) -> Result<Self, CorpusError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(reader)?)
    }

    /// Write the CSV view with a header row.
    pub fn write_csv(&self, path: &Path) -> Result<(), CorpusError> {
        let mut writer = csv::Writer::from_path(path)?;
        for item in &self.items {
            writer.serialize(item)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Check that the rows and the files under `corpus_dir` match one to one.
    ///
    /// Every row needs a `.pho` file in `pho/` and a `.wav` file in `wav/`,
    /// and neither directory may hold a file of that kind without a row.
    pub fn verify(&self, corpus_dir: &Path) -> Result<(), CorpusError> {
        let mut expected = BTreeSet::new();
        for item in &self.items {
            if !expected.insert(item.filename.as_str()) {
                return Err(CorpusError::Inconsistent(format!(
                    "duplicate metadata row for {}",
                    item.filename
                )));
            }
        }

        for (dir, ext) in [(PHO_DIR, "pho"), (WAV_DIR, "wav")] {
            let found = stems_with_extension(&corpus_dir.join(dir), ext)?;

            if let Some(missing) = expected.iter().find(|s| !found.contains(**s)) {
                return Err(CorpusError::Inconsistent(format!(
                    "{missing}.{ext} is missing from {}",
                    corpus_dir.join(dir).display()
                )));
            }
            let mut stray: Vec<&String> = found
                .iter()
                .filter(|s| !expected.contains(s.as_str()))
                .collect();
            stray.sort();
            if let Some(stray) = stray.first() {
                return Err(CorpusError::Inconsistent(format!(
                    "{stray}.{ext} has no metadata row"
                )));
            }
        }

        log::debug!("Verified {} items under {}", self.len(), corpus_dir.display());
        Ok(())
    }
}

fn stems_with_extension(dir: &Path, ext: &str) -> Result<HashSet<String>, CorpusError> {
    let mut stems = HashSet::new();
    if !dir.exists() {
        return Ok(stems);
    }
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some(ext) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            stems.insert(stem.to_string());
        }
    }
    Ok(stems)
}
