//! Excel import module
//!
//! Reads the flashcard spreadsheet (.xlsx) into plain rows of trimmed
//! cell strings. Column layout: 0 = English text, 1 = Russian hint,
//! 2..=7 = distractors.

mod importer;

pub use importer::{SheetImporter, SheetRow};
