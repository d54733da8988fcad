//! JSON frame stores
//!
//! Frames persist as indented UTF-8 JSON arrays with non-ASCII characters
//! written literally (serde_json never escapes them), so the files diff
//! cleanly in version control and stay readable in Russian.

use crate::core::Translations;
use crate::error::{FramesetError, FramesetResult};
use crate::types::Frame;
use std::fs;
use std::path::Path;

/// Load a frame store, preserving array order.
///
/// Array position is the positional join key the merger relies on, so the
/// store must come back exactly as exported.
pub fn load_frames(path: &Path) -> FramesetResult<Vec<Frame>> {
    let content = fs::read_to_string(path).map_err(|e| {
        FramesetError::MalformedRecordStore(format!("cannot read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        FramesetError::MalformedRecordStore(format!("cannot decode {}: {}", path.display(), e))
    })
}

/// Write a frame store, overwriting any existing file
pub fn write_frames(path: &Path, frames: &[Frame]) -> FramesetResult<()> {
    let json = serde_json::to_string_pretty(frames)?;
    fs::write(path, json).map_err(|e| {
        FramesetError::OutputUnwritable(format!("cannot write {}: {}", path.display(), e))
    })
}

/// Load a translations dictionary (JSON object, English text → Russian hint)
pub fn load_translations(path: &Path) -> FramesetResult<Translations> {
    let content = fs::read_to_string(path).map_err(|e| {
        FramesetError::MalformedRecordStore(format!("cannot read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        FramesetError::MalformedRecordStore(format!("cannot decode {}: {}", path.display(), e))
    })
}
