//! Application state (Model in TEA pattern)

use rand::Rng;

use scribe_core::types::{AppPhase, Article, GenerationParams, Language, Tone, WordCount};

use crate::config::{GenerationDefaults, Settings};
use crate::confirm_dialog::ConfirmDialogState;
use crate::history::History;

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The generation form plus the article pane
    #[default]
    Main,

    /// Saved article list
    History,

    // Static informational pages, cycled with Tab/BackTab
    About,
    Contact,
    Disclaimer,
    Privacy,
    Terms,
}

impl View {
    /// The informational pages, in tab order
    pub const INFO_PAGES: [View; 5] = [
        View::About,
        View::Contact,
        View::Disclaimer,
        View::Privacy,
        View::Terms,
    ];

    pub fn is_info_page(&self) -> bool {
        Self::INFO_PAGES.contains(self)
    }

    /// Title shown in the header and the info page tab bar
    pub fn title(&self) -> &'static str {
        match self {
            View::Main => "New article",
            View::History => "History",
            View::About => "About",
            View::Contact => "Contact",
            View::Disclaimer => "Disclaimer",
            View::Privacy => "Privacy",
            View::Terms => "Terms",
        }
    }

    /// Next info page in tab order, wrapping. Non-info views are unchanged.
    pub fn next_info_page(self) -> View {
        match Self::INFO_PAGES.iter().position(|v| *v == self) {
            Some(index) => Self::INFO_PAGES[(index + 1) % Self::INFO_PAGES.len()],
            None => self,
        }
    }

    /// Previous info page in tab order, wrapping. Non-info views are unchanged.
    pub fn prev_info_page(self) -> View {
        match Self::INFO_PAGES.iter().position(|v| *v == self) {
            Some(index) => {
                let len = Self::INFO_PAGES.len();
                Self::INFO_PAGES[(index + len - 1) % len]
            }
            None => self,
        }
    }
}

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Topic,
    WordCount,
    Language,
    Tone,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Topic,
        FormField::WordCount,
        FormField::Language,
        FormField::Tone,
    ];

    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let len = Self::ORDER.len();
        Self::ORDER[(index + len - 1) % len]
    }
}

/// The generation form: topic text plus the three option fields
#[derive(Debug, Clone)]
pub struct FormState {
    pub topic: String,
    pub word_count: WordCount,
    pub language: Language,
    pub tone: Tone,
    pub focus: FormField,
}

impl FormState {
    pub fn from_defaults(defaults: &GenerationDefaults) -> Self {
        Self {
            topic: String::new(),
            word_count: defaults.word_count,
            language: defaults.language,
            tone: defaults.tone,
            focus: FormField::Topic,
        }
    }

    /// Parameters for a generation request (topic trimmed)
    pub fn params(&self) -> GenerationParams {
        GenerationParams {
            topic: self.topic.trim().to_string(),
            word_count: self.word_count,
            language: self.language,
            tone: self.tone,
        }
    }
}

/// Phrases shown next to the spinner while a request is in flight
const LOADING_PHRASES: &[&str] = &[
    "Drafting your article",
    "Consulting the model",
    "Arranging paragraphs",
    "Choosing the right words",
    "Writing, please hold on",
];

/// Central application state
pub struct AppState {
    /// Current screen
    pub view: View,

    /// Generation form state
    pub form: FormState,

    /// The article currently displayed in the main view
    pub article: Option<Article>,

    /// Vertical scroll offset into the displayed article
    pub article_scroll: u16,

    /// True while a generation request is in flight. Gates the submit key.
    pub loading: bool,

    /// Phrase shown next to the spinner, picked per request
    pub loading_phrase: &'static str,

    /// Spinner animation frame, advanced on Tick
    pub spinner_frame: usize,

    /// User-visible error, shown in the status bar until dismissed
    pub error: Option<String>,

    /// Saved articles, newest first
    pub history: History,

    /// Selected row in the history view
    pub history_selected: usize,

    /// Active confirmation dialog, if any (modal)
    pub confirm_dialog: Option<ConfirmDialogState>,

    /// Application settings from config file
    pub settings: Settings,

    /// Current application phase (used for app-level quitting state)
    pub phase: AppPhase,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new AppState with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a new AppState with loaded settings
    pub fn with_settings(settings: Settings) -> Self {
        let form = FormState::from_defaults(&settings.defaults);
        Self {
            view: View::Main,
            form,
            article: None,
            article_scroll: 0,
            loading: false,
            loading_phrase: LOADING_PHRASES[0],
            spinner_frame: 0,
            error: None,
            history: History::new(),
            history_selected: 0,
            confirm_dialog: None,
            settings,
            phase: AppPhase::Running,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Loading Helpers
    // ─────────────────────────────────────────────────────────

    /// Enter the loading state for a new request
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
        self.spinner_frame = 0;
        let index = rand::thread_rng().gen_range(0..LOADING_PHRASES.len());
        self.loading_phrase = LOADING_PHRASES[index];
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Advance the spinner; no-op when idle
    pub fn tick_spinner(&mut self) {
        if self.loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Article / History Helpers
    // ─────────────────────────────────────────────────────────

    /// Display an article in the main view
    pub fn show_article(&mut self, article: Article) {
        self.article = Some(article);
        self.article_scroll = 0;
        self.view = View::Main;
    }

    /// Keep the history selection inside the list after mutations
    pub fn clamp_history_selection(&mut self) {
        if self.history.is_empty() {
            self.history_selected = 0;
        } else {
            self.history_selected = self.history_selected.min(self.history.len() - 1);
        }
    }
}
