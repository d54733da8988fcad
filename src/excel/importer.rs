//! Excel importer implementation - spreadsheet (.xlsx) → rows

use crate::error::{FramesetError, FramesetResult};
use crate::types::MAX_DISTRACTORS;
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::{Path, PathBuf};

/// Column index of the English prompt
const COL_TEXT_EN: usize = 0;
/// Column index of the Russian hint
const COL_HINT_RU: usize = 1;
/// First of up to six distractor columns
const COL_DISTRACTORS: usize = 2;

/// Excel importer for the flashcard spreadsheet
pub struct SheetImporter {
    path: PathBuf,
}

impl SheetImporter {
    /// Create a new importer for the given .xlsx file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read all data rows from the first worksheet, skipping the header row.
    ///
    /// Row order is preserved; the returned index of each row is the same
    /// 0-based index the block/ID formulas are applied to.
    pub fn rows(&self) -> FramesetResult<Vec<SheetRow>> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path).map_err(|e| {
            FramesetError::SourceUnreadable(format!(
                "failed to open {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| {
                FramesetError::SourceUnreadable(format!(
                    "{} contains no worksheets",
                    self.path.display()
                ))
            })?;

        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            FramesetError::SourceUnreadable(format!(
                "failed to read sheet {:?} in {}: {}",
                sheet_name,
                self.path.display(),
                e
            ))
        })?;

        Ok(range.rows().skip(1).map(SheetRow::from_data).collect())
    }
}

/// One data row: trimmed cell strings, empty cells normalized to `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    cells: Vec<Option<String>>,
}

impl SheetRow {
    /// Build a row from owned cell values, trimming and dropping blanks
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        Self {
            cells: cells
                .into_iter()
                .map(|cell| cell.and_then(|s| normalize(&s)))
                .collect(),
        }
    }

    fn from_data(cells: &[Data]) -> Self {
        Self {
            cells: cells.iter().map(cell_text).collect(),
        }
    }

    /// English prompt (column 0), if present and non-blank
    pub fn text_en(&self) -> Option<&str> {
        self.cell(COL_TEXT_EN)
    }

    /// Russian hint (column 1), if present and non-blank
    pub fn hint_ru(&self) -> Option<&str> {
        self.cell(COL_HINT_RU)
    }

    /// Distractor strings from columns 2..=7, in column order, blanks dropped
    pub fn distractors(&self) -> Vec<String> {
        (COL_DISTRACTORS..COL_DISTRACTORS + MAX_DISTRACTORS)
            .filter_map(|col| self.cell(col))
            .map(str::to_string)
            .collect()
    }

    fn cell(&self, col: usize) -> Option<&str> {
        self.cells.get(col).and_then(|c| c.as_deref())
    }
}

/// Convert a spreadsheet cell to a trimmed string, `None` for blanks
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => normalize(s),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn normalize(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(cells: &[&str]) -> SheetRow {
        SheetRow::new(cells.iter().map(|c| Some((*c).to_string())))
    }

    #[test]
    fn test_cell_text_trims_strings() {
        assert_eq!(
            cell_text(&Data::String("  hello  ".to_string())),
            Some("hello".to_string())
        );
    }

    #[test]
    fn test_cell_text_blank_is_none() {
        assert_eq!(cell_text(&Data::String("   ".to_string())), None);
        assert_eq!(cell_text(&Data::Empty), None);
    }

    #[test]
    fn test_cell_text_numbers() {
        assert_eq!(cell_text(&Data::Int(42)), Some("42".to_string()));
        assert_eq!(cell_text(&Data::Float(1.5)), Some("1.5".to_string()));
    }

    #[test]
    fn test_row_accessors() {
        let row = row_of(&["hello", "привет", "hi", "", "hey", "", "", ""]);
        assert_eq!(row.text_en(), Some("hello"));
        assert_eq!(row.hint_ru(), Some("привет"));
        assert_eq!(row.distractors(), vec!["hi", "hey"]);
    }

    #[test]
    fn test_short_row_is_safe() {
        let row = row_of(&["hello"]);
        assert_eq!(row.text_en(), Some("hello"));
        assert_eq!(row.hint_ru(), None);
        assert!(row.distractors().is_empty());
    }

    #[test]
    fn test_distractors_cap_at_six() {
        let row = row_of(&["en", "ru", "a", "b", "c", "d", "e", "f", "g", "h"]);
        assert_eq!(row.distractors(), vec!["a", "b", "c", "d", "e", "f"]);
    }
}
