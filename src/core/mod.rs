//! Core transformation logic
//!
//! - Export: partition spreadsheet rows into the Core and Level 2 datasets
//! - Merge: refresh `hint_ru` from an updated spreadsheet
//! - Fix: apply a translations dictionary and strip blank markers

mod exporter;
mod fixer;
mod merger;

pub use exporter::{partition_rows, ExportedFrames};
pub use fixer::{apply_fixes, FixReport, Translations};
pub use merger::{merge_hints, MergeReport, PLACEHOLDER_MARKER};
