/// Upper bound on floating words generated for one starfield.
pub const MAX_FLOATING_WORDS: usize = 70;

/// Lower bound of a base coordinate (percent of the canvas).
pub const POSITION_MIN: f64 = 7.5;

/// Upper bound (exclusive) of a base coordinate (percent of the canvas).
pub const POSITION_MAX: f64 = 92.5;

/// Drift speed range, [min, max).
pub const SPEED_MIN: f64 = 0.2;
pub const SPEED_MAX: f64 = 0.5;

/// Opacity range, [min, max).
pub const OPACITY_MIN: f64 = 0.5;
pub const OPACITY_MAX: f64 = 1.0;

/// Display size: SIZE_BASE + SIZE_PER_OCCURRENCE * frequency (px)
pub const SIZE_BASE: f64 = 18.0;
pub const SIZE_PER_OCCURRENCE: f64 = 2.5;

/// Horizontal drift amplitude (percent)
pub const DRIFT_AMPLITUDE_X: f64 = 1.0;

/// Vertical drift amplitude (percent)
pub const DRIFT_AMPLITUDE_Y: f64 = 2.0;

/// Horizontal drift runs at half the vertical angular rate.
pub const DRIFT_X_RATE: f64 = 0.5;

/// Separator placed between paragraphs in the copy-all payload.
pub const COPY_SEPARATOR: &str = "\n\n---\n\n";

/// Phrases must be strictly longer than this many characters...
pub const PHRASE_MIN_CHARS: usize = 3;

/// ...and strictly shorter than this many.
pub const PHRASE_MAX_CHARS: usize = 50;
