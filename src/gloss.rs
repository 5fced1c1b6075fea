//! Glosses (meanings) for a clicked word, gathered from a chain of sources.
//!
//! Sources are consulted in order and a later one only when none before it had
//! a meaning. A failing source or translator never surfaces as an error: it is
//! logged and treated as "no data". Nothing here touches the word search.

use std::collections::HashMap;

use crate::error::{GlossError, WordError};
use crate::lexicon::normalize_word;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gloss {
    pub meaning: Option<String>,
    pub etymology: Option<String>,
    /// Human-readable provenance, e.g. which source supplied the meaning
    pub note: Option<String>,
}

impl Gloss {
    pub fn has_meaning(&self) -> bool {
        self.meaning.as_deref().is_some_and(|m| !m.trim().is_empty())
    }
}

pub trait GlossSource: Send + Sync {
    fn name(&self) -> &str;

    /// `Ok(None)` means the source definitively has nothing for `word`.
    fn lookup(&self, word: &str) -> Result<Option<Gloss>, GlossError>;

    /// Whether meanings from this source are English and may be translated.
    fn translatable(&self) -> bool {
        false
    }
}

pub trait Translator: Send + Sync {
    fn translate(&self, text: &str) -> Result<String, GlossError>;
}

/// Join the non-blank notes with "; ".
pub fn merge_notes<'a, I>(notes: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let parts: Vec<&str> = notes
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

#[derive(Default)]
pub struct GlossChain {
    sources: Vec<Box<dyn GlossSource>>,
    translator: Option<Box<dyn Translator>>,
}

impl GlossChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl GlossSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Box::new(translator));
        self
    }

    /// Gloss for `word`, or `Ok(None)` if no source knows it.
    ///
    /// Fails only when `word` itself is not a valid word.
    pub fn resolve(&self, word: &str) -> Result<Option<Gloss>, WordError> {
        let word = normalize_word(word)?;
        let mut merged: Option<Gloss> = None;

        for source in &self.sources {
            let found = match source.lookup(&word) {
                Ok(found) => found,
                Err(err) => {
                    tracing::warn!(source = source.name(), %word, error = %err, "gloss lookup failed");
                    None
                }
            };
            let Some(mut gloss) = found else {
                continue;
            };

            if gloss.has_meaning() && source.translatable() {
                self.translate_meaning(&mut gloss);
            }

            merged = Some(match merged {
                None => gloss,
                Some(prev) => Gloss {
                    note: merge_notes([prev.note.as_deref(), gloss.note.as_deref()]),
                    meaning: gloss.meaning.or(prev.meaning),
                    etymology: prev.etymology.or(gloss.etymology),
                },
            });

            if merged.as_ref().is_some_and(Gloss::has_meaning) {
                break;
            }
        }

        Ok(merged)
    }

    fn translate_meaning(&self, gloss: &mut Gloss) {
        let (Some(translator), Some(english)) = (&self.translator, gloss.meaning.as_deref()) else {
            return;
        };
        match translator.translate(english) {
            Ok(translated) if !translated.trim().is_empty() => {
                gloss.meaning = Some(format!("{}\n\n(English)\n{}", translated.trim(), english));
                gloss.note = gloss.note.take().map(|n| format!("{n} (machine translated)"));
            }
            Ok(_) => {}
            Err(err) => tracing::warn!(error = %err, "translation failed, keeping English meaning"),
        }
    }
}

/// In-memory gloss source.
#[derive(Debug, Clone, Default)]
pub struct GlossTable {
    name: String,
    entries: HashMap<String, Gloss>,
    translatable: bool,
}

impl GlossTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Mark this table's meanings as English.
    pub fn english(mut self) -> Self {
        self.translatable = true;
        self
    }

    pub fn insert(&mut self, word: impl Into<String>, gloss: Gloss) {
        self.entries.insert(word.into(), gloss);
    }
}

impl GlossSource for GlossTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, word: &str) -> Result<Option<Gloss>, GlossError> {
        Ok(self.entries.get(word).cloned())
    }

    fn translatable(&self) -> bool {
        self.translatable
    }
}
