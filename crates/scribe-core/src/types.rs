//! Domain types: articles and their generation parameters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Normal operation
    #[default]
    Running,
    /// Quit requested; the event loop exits on the next iteration
    Quitting,
}

/// Target article length
///
/// The wire request carries the numeric target; the named variants exist so
/// the form can cycle a fixed set of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCount {
    Brief,
    #[default]
    Standard,
    Detailed,
    Extended,
}

impl WordCount {
    pub const ALL: [WordCount; 4] = [
        WordCount::Brief,
        WordCount::Standard,
        WordCount::Detailed,
        WordCount::Extended,
    ];

    /// Approximate number of words requested from the generation service
    pub fn target(&self) -> u32 {
        match self {
            WordCount::Brief => 300,
            WordCount::Standard => 600,
            WordCount::Detailed => 900,
            WordCount::Extended => 1200,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WordCount::Brief => "Brief",
            WordCount::Standard => "Standard",
            WordCount::Detailed => "Detailed",
            WordCount::Extended => "Extended",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

impl std::fmt::Display for WordCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (~{} words)", self.label(), self.target())
    }
}

/// Output language for generated articles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Writing tone for generated articles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Informative,
    Conversational,
    Professional,
    Persuasive,
    Playful,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Informative,
        Tone::Conversational,
        Tone::Professional,
        Tone::Persuasive,
        Tone::Playful,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Informative => "Informative",
            Tone::Conversational => "Conversational",
            Tone::Professional => "Professional",
            Tone::Persuasive => "Persuasive",
            Tone::Playful => "Playful",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Cycle through a fixed option list, wrapping at both ends
fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: isize) -> T {
    let len = all.len() as isize;
    let index = all
        .iter()
        .position(|v| *v == current)
        .unwrap_or(0) as isize;
    all[((index + step).rem_euclid(len)) as usize]
}

/// What to generate: topic plus the three option fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
    pub topic: String,
    pub word_count: WordCount,
    pub language: Language,
    pub tone: Tone,
}

/// One generated article plus its generation parameters and metadata
///
/// Immutable once created; removed only by explicit deletion or a full
/// history clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub topic: String,
    pub word_count: WordCount,
    pub language: Language,
    pub tone: Tone,
    pub title: String,
    pub content: String,
}

impl Article {
    /// Build an article from a successful generation
    pub fn new(params: GenerationParams, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            topic: params.topic,
            word_count: params.word_count,
            language: params.language,
            tone: params.tone,
            title: title.into(),
            content: content.into(),
        }
    }
}
