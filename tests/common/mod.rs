//! Shared fixture helpers for the integration suites
#![allow(dead_code)] // not every suite uses every helper

use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Write a flashcard spreadsheet fixture: header row plus the given data rows
pub fn write_sheet(path: &Path, rows: &[Vec<String>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header = [
        "English", "Russian", "Wrong 1", "Wrong 2", "Wrong 3", "Wrong 4", "Wrong 5", "Wrong 6",
    ];
    for (col, title) in header.iter().enumerate() {
        worksheet.write_string(0, col as u16, *title).unwrap();
    }

    for (row_idx, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32 + 1, col as u16, cell)
                .unwrap();
        }
    }

    workbook.save(path).unwrap();
}

/// Build one data row from string slices
pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| (*c).to_string()).collect()
}

/// Generate `count` simple rows: "word N" / "слово N"
pub fn numbered_rows(count: usize) -> Vec<Vec<String>> {
    (0..count)
        .map(|i| row(&[&format!("word {i}"), &format!("слово {i}")]))
        .collect()
}
