//! Row partitioning - spreadsheet rows → Core and Level 2 frame collections

use crate::excel::SheetRow;
use crate::types::{Block, Frame};

/// The two frame collections produced by one export pass
#[derive(Debug, Default)]
pub struct ExportedFrames {
    pub core: Vec<Frame>,
    pub level2: Vec<Frame>,
}

impl ExportedFrames {
    pub fn total(&self) -> usize {
        self.core.len() + self.level2.len()
    }
}

/// Partition data rows into the two blocks.
///
/// A row produces a frame only when both the English text and the Russian
/// hint are present; other rows are dropped silently but still occupy
/// their index slot, so IDs of later rows do not shift.
pub fn partition_rows(rows: &[SheetRow]) -> ExportedFrames {
    let mut frames = ExportedFrames::default();

    for (index, row) in rows.iter().enumerate() {
        let (Some(text_en), Some(hint_ru)) = (row.text_en(), row.hint_ru()) else {
            continue;
        };

        let block = Block::for_row_index(index);
        let frame = Frame {
            id: Block::id_for_row_index(index),
            block,
            text_en: text_en.to_string(),
            hint_ru: hint_ru.to_string(),
            distractors: row.distractors(),
        };

        match block {
            Block::Core => frames.core.push(frame),
            Block::Level2 => frames.level2.push(frame),
        }
    }

    frames
}
