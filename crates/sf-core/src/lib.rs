//! Survey keyword starfield engine.
//!
//! Turns free-text survey responses into a field of floating keywords: each
//! keyword is bound to one unique source paragraph, placed at a random
//! position and left to drift on a slow sine/cosine orbit. Visitors inspect
//! words, collect paragraphs, and filter by survey question.
//!
//! Zero I/O. Loading datasets and configuration lives in `sf-data`.

pub mod category;
pub mod collection;
pub mod constants;
pub mod drift;
pub mod floating;
pub mod keyword;
pub mod phrases;
pub mod record;
pub mod session;
pub mod vocabulary;
pub mod wire;

pub use category::{Category, Filter, KeywordCategory};
pub use collection::Collection;
pub use constants::{COPY_SEPARATOR, MAX_FLOATING_WORDS};
pub use drift::{Position, Speed, Starfield, drift_offset};
pub use floating::{FloatingWord, filter_words, generate_floating_words, generate_with_limit};
pub use keyword::{KeywordStat, extract_keywords};
pub use phrases::poetry_phrases;
pub use record::{QuestionKeys, Record, normalize_rows};
pub use session::{Mode, Session};
pub use vocabulary::{DEFAULT_VOCABULARY, Vocabulary};
pub use wire::{CURRENT_VERSION, Snapshot, export_json, import_json};
