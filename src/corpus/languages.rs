//! Vowel repertoires and MBROLA voices per language.
//!
//! Each language contributes one or more vowel groups. A group is rendered by
//! every voice listed with it; the second group of a language covers vowels
//! that only a subset of its voices can produce.
//!
//! | Code | Language | Vowels (SAMPA) | Voices |
//! |---|---|---|---|
//! | `en` | English | `A i I E u {` | us1 us2 us3 |
//! | `nl` | Dutch | `I i E u` | nl2 nl3 |
//! | `de` | German | `2: I E a: a u: y:` | de1–de7 |
//! | `de` | German | `6` | de6 de7 |
//! | `fr` | French | `u y a a~ i` | fr1–fr7 |
//! | `jp` | Japanese | `a u i` | jp1 jp2 jp3 |
//! | `jp` | Japanese | `a:` | jp2 |

use serde::{Deserialize, Serialize};

use crate::CorpusError;

/// Speaker gender of an MBROLA voice. Selects the pitch range of the contours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// A vowel of a language, identified by its SAMPA symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VowelSpec {
    pub language: &'static str,
    pub sampa: &'static str,
}

/// A set of vowels rendered by every voice in `voices`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelGroup {
    pub vowels: &'static [&'static str],
    pub voices: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageConfig {
    /// ISO 639-1 style code used in file names (`jp` for Japanese, as MBROLA does).
    pub code: &'static str,
    pub name: &'static str,
    pub groups: &'static [VowelGroup],
}

impl LanguageConfig {
    /// All vowels of the language, in table order.
    pub fn vowels(&self) -> Vec<VowelSpec> {
        self.groups
            .iter()
            .flat_map(|g| g.vowels.iter())
            .map(|&sampa| VowelSpec {
                language: self.code,
                sampa,
            })
            .collect()
    }

    /// All voices used by the language, deduplicated, in table order.
    pub fn voices(&self) -> Vec<&'static str> {
        let mut voices: Vec<&'static str> = Vec::new();
        for voice in self.groups.iter().flat_map(|g| g.voices.iter()) {
            if !voices.contains(voice) {
                voices.push(voice);
            }
        }
        voices
    }
}

static LANGUAGES: &[LanguageConfig] = &[
    LanguageConfig {
        code: "en",
        name: "English",
        groups: &[VowelGroup {
            vowels: &["A", "i", "I", "E", "u", "{"],
            voices: &["us1", "us2", "us3"],
        }],
    },
    LanguageConfig {
        code: "nl",
        name: "Dutch",
        groups: &[VowelGroup {
            vowels: &["I", "i", "E", "u"],
            voices: &["nl2", "nl3"],
        }],
    },
    LanguageConfig {
        code: "de",
        name: "German",
        groups: &[
            VowelGroup {
                vowels: &["2:", "I", "E", "a:", "a", "u:", "y:"],
                voices: &["de1", "de2", "de3", "de4", "de5", "de6", "de7"],
            },
            VowelGroup {
                vowels: &["6"],
                voices: &["de6", "de7"],
            },
        ],
    },
    LanguageConfig {
        code: "fr",
        name: "French",
        groups: &[VowelGroup {
            vowels: &["u", "y", "a", "a~", "i"],
            voices: &["fr1", "fr2", "fr3", "fr4", "fr5", "fr6", "fr7"],
        }],
    },
    LanguageConfig {
        code: "jp",
        name: "Japanese",
        groups: &[
            VowelGroup {
                vowels: &["a", "u", "i"],
                voices: &["jp1", "jp2", "jp3"],
            },
            VowelGroup {
                vowels: &["a:"],
                voices: &["jp2"],
            },
        ],
    },
];

const VOICE_GENDERS: &[(&str, Gender)] = &[
    ("nl1", Gender::Male),
    ("nl2", Gender::Male),
    ("nl3", Gender::Female),
    ("de1", Gender::Female),
    ("de2", Gender::Male),
    ("de3", Gender::Female),
    ("de4", Gender::Male),
    ("de5", Gender::Female),
    ("de6", Gender::Male),
    ("de7", Gender::Female),
    ("jp1", Gender::Male),
    ("jp2", Gender::Female),
    ("jp3", Gender::Female),
    ("fr1", Gender::Male),
    ("fr2", Gender::Female),
    ("fr3", Gender::Male),
    ("fr4", Gender::Female),
    ("fr5", Gender::Male),
    ("fr6", Gender::Male),
    ("fr7", Gender::Male),
    ("us1", Gender::Female),
    ("us2", Gender::Male),
    ("us3", Gender::Male),
];

/// Language codes in corpus order.
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    LANGUAGES.iter().map(|l| l.code)
}

/// Look up the configuration of a language.
pub fn language_config(code: &str) -> Result<&'static LanguageConfig, CorpusError> {
    LANGUAGES.iter().find(|l| l.code == code).ok_or_else(|| {
        CorpusError::Configuration(format!(
            "unknown language '{code}' (supported: {})",
            supported_languages().collect::<Vec<_>>().join(", ")
        ))
    })
}

/// Resolve a list of language codes, dropping duplicates.
///
/// An empty list selects every supported language.
pub fn resolve_languages<S: AsRef<str>>(
    codes: &[S],
) -> Result<Vec<&'static LanguageConfig>, CorpusError> {
    if codes.is_empty() {
        return Ok(LANGUAGES.iter().collect());
    }

    let mut configs: Vec<&'static LanguageConfig> = Vec::with_capacity(codes.len());
    for code in codes {
        let config = language_config(code.as_ref().trim())?;
        if !configs.iter().any(|c| c.code == config.code) {
            configs.push(config);
        }
    }
    Ok(configs)
}

/// Speaker gender of an MBROLA voice.
pub fn voice_gender(voice: &str) -> Result<Gender, CorpusError> {
    VOICE_GENDERS
        .iter()
        .find(|(v, _)| *v == voice)
        .map(|&(_, gender)| gender)
        .ok_or_else(|| CorpusError::Configuration(format!("unknown MBROLA voice '{voice}'")))
}
