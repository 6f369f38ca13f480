//! Pure text formatters for accessibility output
//!
//! None of these touch a model or the file system; they are deterministic
//! functions of their input.

pub mod reading_aid;
pub mod scene_description;
pub mod tactile;

pub use reading_aid::{WORD_SEPARATOR, emphasize_word_starts};
pub use scene_description::{NO_OBJECTS_DETECTED, dedupe_labels, describe_scene};
pub use tactile::{NUMERIC_INDICATOR, to_braille};
