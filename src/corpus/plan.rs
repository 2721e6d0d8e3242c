use std::collections::HashMap;

use super::contour::PitchContour;
use super::languages::{voice_gender, LanguageConfig, VowelSpec};
use super::metadata::CorpusItem;
use super::transcription::TranscriptionRecord;
use crate::CorpusError;

/// One item of the corpus, fully determined before any file is written.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedItem {
    /// File name without extension: `<language>_<voice>_<f|r>_<seq>`.
    pub stem: String,
    pub vowel: VowelSpec,
    pub voice: &'static str,
    pub contour: PitchContour,
    pub sequence: u32,
    pub record: TranscriptionRecord,
}

impl PlannedItem {
    pub fn pho_file_name(&self) -> String {
        format!("{}.pho", self.stem)
    }

    pub fn wav_file_name(&self) -> String {
        format!("{}.wav", self.stem)
    }

    /// The metadata row describing this item.
    pub fn to_corpus_item(&self) -> CorpusItem {
        CorpusItem {
            filename: self.stem.clone(),
            language: self.vowel.language.to_string(),
            voice: self.voice.to_string(),
            contour: self.contour,
            sequence: self.sequence,
            vowel: self.vowel.sampa.to_string(),
            vowel_onset: 0,
            vowel_offset: self.record.duration_ms,
        }
    }
}

/// File name stem of a corpus item.
pub fn item_stem(language: &str, voice: &str, contour: PitchContour, sequence: u32) -> String {
    format!("{language}_{voice}_{}_{sequence:03}", contour.tag())
}

/// Expand the selected languages into the ordered list of corpus items.
///
/// Items are ordered by language, vowel group, voice, vowel, then contour.
/// Sequence numbers count per voice over the whole plan, starting at 1, so a
/// voice that appears in several groups continues where the previous group
/// stopped.
pub fn plan_corpus(
    languages: &[&LanguageConfig],
    vowel_duration_ms: u32,
) -> Result<Vec<PlannedItem>, CorpusError> {
    if vowel_duration_ms == 0 {
        return Err(CorpusError::Configuration(
            "vowel duration must be positive".to_string(),
        ));
    }

    let mut next_sequence: HashMap<&'static str, u32> = HashMap::new();
    let mut items = Vec::new();

    for language in languages {
        for group in language.groups {
            for &voice in group.voices {
                let gender = voice_gender(voice)?;
                let seq = next_sequence.entry(voice).or_insert(1);
                for &sampa in group.vowels {
                    for contour in PitchContour::ALL {
                        items.push(PlannedItem {
                            stem: item_stem(language.code, voice, contour, *seq),
                            vowel: VowelSpec {
                                language: language.code,
                                sampa,
                            },
                            voice,
                            contour,
                            sequence: *seq,
                            record: TranscriptionRecord::new(
                                sampa,
                                gender,
                                contour,
                                vowel_duration_ms,
                            ),
                        });
                        *seq += 1;
                    }
                }
            }
        }
    }

    log::debug!(
        "Planned {} items for {} language(s)",
        items.len(),
        languages.len()
    );
    Ok(items)
}

/// Voices needed by a plan, deduplicated, in plan order.
pub fn planned_voices(items: &[PlannedItem]) -> Vec<&'static str> {
    let mut voices: Vec<&'static str> = Vec::new();
    for item in items {
        if !voices.contains(&item.voice) {
            voices.push(item.voice);
        }
    }
    voices
}
