use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::Filter;
use crate::constants::{DRIFT_AMPLITUDE_X, DRIFT_AMPLITUDE_Y, DRIFT_X_RATE};
use crate::floating::FloatingWord;

/// Global drift speed preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Speed {
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Slow => 0.3,
            Self::Medium => 0.6,
            Self::Fast => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Fast => "fast",
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Speed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow" => Ok(Self::Slow),
            "medium" => Ok(Self::Medium),
            "fast" => Ok(Self::Fast),
            other => Err(format!("unknown speed '{other}' (expected slow, medium or fast)")),
        }
    }
}

/// Displayed position, percent of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Drift offset of a word at `time_secs`.
///
/// dy = sin(t·speed·m + index) · 2, dx = cos(t·speed·m·0.5 + index) · 1.
/// `index` shifts the phase so neighbouring words do not move in lockstep.
/// Purely a function of time: no state carries across a pause.
pub fn drift_offset(time_secs: f64, speed: f64, multiplier: f64, index: usize) -> (f64, f64) {
    let phase = index as f64;
    let angle = time_secs * speed * multiplier;
    let dy = (angle + phase).sin() * DRIFT_AMPLITUDE_Y;
    let dx = (angle * DRIFT_X_RATE + phase).cos() * DRIFT_AMPLITUDE_X;
    (dx, dy)
}

/// The animated field: all generated words, the active filter, and the
/// current displayed position of each visible word.
#[derive(Clone, Debug)]
pub struct Starfield {
    words: Vec<FloatingWord>,
    filter: Filter,
    /// Indices into `words` of the visible words, generation order.
    visible: Vec<usize>,
    /// Parallel to `visible`.
    positions: Vec<Position>,
}

impl Starfield {
    pub fn new(words: Vec<FloatingWord>) -> Self {
        let mut field = Self {
            words,
            filter: Filter::All,
            visible: Vec::new(),
            positions: Vec::new(),
        };
        field.apply_filter();
        field
    }

    pub fn words(&self) -> &[FloatingWord] {
        &self.words
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Switch filter. Positions of the new visible set reset to base.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        self.visible = self
            .words
            .iter()
            .enumerate()
            .filter(|(_, w)| self.filter.matches(w.category))
            .map(|(i, _)| i)
            .collect();
        self.positions = self
            .visible
            .iter()
            .map(|&i| Position {
                x: self.words[i].x,
                y: self.words[i].y,
            })
            .collect();
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Visible words with their current positions.
    pub fn visible(&self) -> impl Iterator<Item = (&FloatingWord, Position)> {
        self.visible
            .iter()
            .zip(&self.positions)
            .map(|(&i, &pos)| (&self.words[i], pos))
    }

    /// Look up a visible word by id. Hidden words cannot be clicked.
    pub fn visible_word(&self, id: &str) -> Option<&FloatingWord> {
        self.visible
            .iter()
            .map(|&i| &self.words[i])
            .find(|w| w.id == id)
    }

    /// Advance the animation. Returns false (and leaves positions untouched)
    /// while paused.
    pub fn tick(&mut self, time_secs: f64, multiplier: f64, paused: bool) -> bool {
        if paused {
            return false;
        }
        for (slot, &i) in self.visible.iter().enumerate() {
            let word = &self.words[i];
            let (dx, dy) = drift_offset(time_secs, word.speed, multiplier, slot);
            self.positions[slot] = Position {
                x: word.x + dx,
                y: word.y + dy,
            };
        }
        true
    }
}
