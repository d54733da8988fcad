//! Core data types for the frame pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// 0-based data-row index where the Core block ends and Level 2 begins
pub const BLOCK_SPLIT_ROW: usize = 500;

/// First frame ID of the Level 2 block (Core uses 1..=500)
pub const LEVEL2_ID_BASE: u32 = 1000;

/// Maximum number of distractor columns read per row
pub const MAX_DISTRACTORS: usize = 6;

/// Which of the two datasets a frame belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    #[serde(rename = "Core")]
    Core,
    #[serde(rename = "Level 2")]
    Level2,
}

impl Block {
    /// Classify a 0-based data-row index into its block
    pub fn for_row_index(index: usize) -> Self {
        if index < BLOCK_SPLIT_ROW {
            Block::Core
        } else {
            Block::Level2
        }
    }

    /// Frame ID for a 0-based data-row index.
    ///
    /// IDs are derived from row position, not from how many frames were
    /// actually produced, so dropped rows leave gaps rather than shifting
    /// later IDs: Core rows get `index + 1` (1..=500), Level 2 rows get
    /// `1000 + (index - 500)`.
    pub fn id_for_row_index(index: usize) -> u32 {
        if index < BLOCK_SPLIT_ROW {
            index as u32 + 1
        } else {
            LEVEL2_ID_BASE + (index - BLOCK_SPLIT_ROW) as u32
        }
    }

    /// Offset of a row into its block's collection at export time
    pub fn offset_for_row_index(index: usize) -> usize {
        if index < BLOCK_SPLIT_ROW {
            index
        } else {
            index - BLOCK_SPLIT_ROW
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Core => write!(f, "Core"),
            Block::Level2 => write!(f, "Level 2"),
        }
    }
}

/// One flashcard: English prompt, Russian hint, optional wrong answers.
///
/// Field order matters for serialization - the JSON stores are diffed in
/// version control, so the exporter must emit fields in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub id: u32,
    pub block: Block,
    pub text_en: String,
    pub hint_ru: String,
    pub distractors: Vec<String>,
}
