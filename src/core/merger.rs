//! Hint merging - refresh `hint_ru` in exported frames from an updated
//! spreadsheet, assumed row-aligned with the one used for the export

use crate::error::{FramesetError, FramesetResult};
use crate::excel::SheetRow;
use crate::types::{Block, Frame};

/// Sentinel substring marking a translation that still needs review.
/// Hints containing it never overwrite existing data.
pub const PLACEHOLDER_MARKER: &str = "уточнить";

/// Per-block counts of frames whose hint was refreshed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    pub core_updated: usize,
    pub level2_updated: usize,
}

impl MergeReport {
    pub fn total(&self) -> usize {
        self.core_updated + self.level2_updated
    }
}

/// Refresh `hint_ru` in both collections from the given rows.
///
/// Rows map to frames positionally through the same split rule used at
/// export time; out-of-range rows are ignored, so merging never adds
/// frames. With `strict` set, each row's English text must match the
/// frame it maps to, and the first mismatch aborts the merge before
/// anything is written.
pub fn merge_hints(
    rows: &[SheetRow],
    core: &mut [Frame],
    level2: &mut [Frame],
    strict: bool,
) -> FramesetResult<MergeReport> {
    let mut report = MergeReport::default();

    for (index, row) in rows.iter().enumerate() {
        let Some(candidate) = valid_hint(row.hint_ru()) else {
            continue;
        };

        let block = Block::for_row_index(index);
        let offset = Block::offset_for_row_index(index);
        let Some(frame) = (match block {
            Block::Core => core.get_mut(offset),
            Block::Level2 => level2.get_mut(offset),
        }) else {
            continue;
        };

        if strict {
            if let Some(text_en) = row.text_en() {
                if text_en != frame.text_en {
                    return Err(FramesetError::AlignmentMismatch(format!(
                        "row {} reads {:?} but {} frame {} holds {:?}",
                        index, text_en, frame.block, frame.id, frame.text_en
                    )));
                }
            }
        }

        if frame.hint_ru != candidate {
            frame.hint_ru = candidate.to_string();
            match block {
                Block::Core => report.core_updated += 1,
                Block::Level2 => report.level2_updated += 1,
            }
        }
    }

    Ok(report)
}

/// A hint is a valid merge candidate only if present, non-blank, and free
/// of the placeholder marker (case-insensitive)
fn valid_hint(hint: Option<&str>) -> Option<&str> {
    let hint = hint?;
    if hint.to_lowercase().contains(PLACEHOLDER_MARKER) {
        None
    } else {
        Some(hint)
    }
}
