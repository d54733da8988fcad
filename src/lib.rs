//! Frameset - flashcard dataset pipeline
//!
//! This library converts a spreadsheet of language-learning flashcards into
//! two JSON datasets ("Core" and "Level 2"), merges corrected translations
//! back into those datasets from an updated spreadsheet, and applies
//! dictionary-based translation fixups.
//!
//! # Features
//!
//! - Excel (.xlsx) import via calamine
//! - Positional block split: rows 0..500 → Core (IDs 1..=500),
//!   rows 500.. → Level 2 (IDs 1000..)
//! - Placeholder-aware translation merge (never overwrites with a hint
//!   that still says "уточнить")
//! - Indented, non-ASCII-literal JSON stores
//!
//! # Example
//!
//! ```no_run
//! use frameset::core::partition_rows;
//! use frameset::excel::SheetImporter;
//!
//! let rows = SheetImporter::new("baza.xlsx").rows()?;
//! let frames = partition_rows(&rows);
//!
//! println!("Core frames: {}", frames.core.len());
//! println!("Level 2 frames: {}", frames.level2.len());
//! # Ok::<(), frameset::error::FramesetError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{FramesetError, FramesetResult};
pub use types::{Block, Frame};
