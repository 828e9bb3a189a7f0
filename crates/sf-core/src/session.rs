//! Visitor session: browsing vs. inspecting, pause, speed, filter, and the
//! collected paragraphs.
//!
//! Selecting a word forces the animation to pause; closing the detail
//! overlay restores whatever pause state held before the selection. The
//! collection overlay is an independent flag and never touches pause.

use crate::category::Filter;
use crate::collection::Collection;
use crate::drift::{Speed, Starfield};
use crate::floating::FloatingWord;

/// Interaction mode.
#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    Browsing,
    Inspecting {
        word: FloatingWord,
        /// Pause flag at the moment the word was selected.
        paused_before: bool,
    },
}

#[derive(Clone, Debug)]
pub struct Session {
    field: Starfield,
    mode: Mode,
    paused: bool,
    speed: Speed,
    collection: Collection,
    collection_open: bool,
}

impl Session {
    pub fn new(words: Vec<FloatingWord>) -> Self {
        Self::with_speed(words, Speed::default())
    }

    pub fn with_speed(words: Vec<FloatingWord>, speed: Speed) -> Self {
        Self {
            field: Starfield::new(words),
            mode: Mode::Browsing,
            paused: false,
            speed,
            collection: Collection::new(),
            collection_open: false,
        }
    }

    // --- Accessors ---

    pub fn field(&self) -> &Starfield {
        &self.field
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn filter(&self) -> Filter {
        self.field.filter()
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn is_collection_open(&self) -> bool {
        self.collection_open
    }

    pub fn selected(&self) -> Option<&FloatingWord> {
        match &self.mode {
            Mode::Inspecting { word, .. } => Some(word),
            Mode::Browsing => None,
        }
    }

    pub fn is_selected_collected(&self) -> bool {
        self.selected()
            .is_some_and(|w| self.collection.contains(&w.full_text))
    }

    // --- Transitions ---

    /// Enter inspecting mode and force pause.
    /// Re-selecting while inspecting swaps the word but keeps the pause
    /// state saved by the first selection.
    pub fn select(&mut self, word: FloatingWord) {
        let paused_before = match &self.mode {
            Mode::Inspecting { paused_before, .. } => *paused_before,
            Mode::Browsing => self.paused,
        };
        self.mode = Mode::Inspecting {
            word,
            paused_before,
        };
        self.paused = true;
    }

    /// Select a visible word by id. Returns false if no visible word matches.
    pub fn select_id(&mut self, id: &str) -> bool {
        match self.field.visible_word(id).cloned() {
            Some(word) => {
                self.select(word);
                true
            }
            None => false,
        }
    }

    /// Close the detail overlay (close button or backdrop click).
    /// Restores the pre-selection pause state. No-op while browsing.
    pub fn close(&mut self) {
        if let Mode::Inspecting { paused_before, .. } =
            std::mem::replace(&mut self.mode, Mode::Browsing)
        {
            self.paused = paused_before;
        }
    }

    /// Escape key: dismiss every open overlay.
    pub fn escape(&mut self) {
        self.close();
        self.collection_open = false;
    }

    /// Flip pause. Ignored while inspecting, where the overlay holds pause.
    /// Returns the pause state afterwards.
    pub fn toggle_pause(&mut self) -> bool {
        if matches!(self.mode, Mode::Browsing) {
            self.paused = !self.paused;
        }
        self.paused
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.field.set_filter(filter);
    }

    pub fn show_collection(&mut self) {
        self.collection_open = true;
    }

    pub fn hide_collection(&mut self) {
        self.collection_open = false;
    }

    /// Toggle the selected word's paragraph in the collection.
    /// Returns `None` when nothing is selected, else whether it is now collected.
    pub fn collect_selected(&mut self) -> Option<bool> {
        let Mode::Inspecting { word, .. } = &self.mode else {
            return None;
        };
        Some(self.collection.toggle(&word.full_text))
    }

    /// Toggle an arbitrary paragraph in the collection.
    pub fn toggle_collected(&mut self, text: &str) -> bool {
        self.collection.toggle(text)
    }

    pub fn remove_collected(&mut self, index: usize) -> Option<String> {
        self.collection.remove_at(index)
    }

    /// Advance the animation to `time_secs`. Returns false while paused.
    pub fn tick(&mut self, time_secs: f64) -> bool {
        self.field
            .tick(time_secs, self.speed.multiplier(), self.paused)
    }
}
