//! Dictionary fixups - apply corrected translations to an exported store
//! and strip fill-in-the-blank markers left over from quiz authoring

use crate::types::Frame;
use std::collections::HashMap;

/// Corrected translations keyed by the frame's English text
pub type Translations = HashMap<String, String>;

/// What one fix pass changed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixReport {
    /// Frames whose hint was replaced from the dictionary
    pub translated: usize,
    /// Frames where a blank marker was rewritten in any field
    pub blanks_replaced: usize,
    /// English texts whose hint still contains Latin letters after the pass
    pub still_english: Vec<String>,
}

/// Apply dictionary translations and blank-marker cleanup in place.
///
/// For each frame: replace `hint_ru` when the dictionary has an entry for
/// its English text, and rewrite distractors that equal the old hint so
/// they keep matching. Then replace `____ing` and `____` with `...` in
/// every text field. Hints that still look English afterwards are
/// collected for reporting.
pub fn apply_fixes(frames: &mut [Frame], translations: &Translations) -> FixReport {
    let mut report = FixReport::default();

    for frame in frames.iter_mut() {
        let old_hint = frame.hint_ru.clone();

        if let Some(corrected) = translations.get(&frame.text_en) {
            if *corrected != frame.hint_ru {
                frame.hint_ru = corrected.clone();
                report.translated += 1;
            }
        }

        if frame.hint_ru == old_hint && contains_latin(&frame.hint_ru) {
            report.still_english.push(frame.text_en.clone());
        }

        // Keep distractors that mirrored the old hint in sync
        for distractor in &mut frame.distractors {
            if *distractor == old_hint {
                *distractor = frame.hint_ru.clone();
            }
        }

        let mut replaced = false;
        replaced |= replace_blanks(&mut frame.text_en);
        replaced |= replace_blanks(&mut frame.hint_ru);
        for distractor in &mut frame.distractors {
            replaced |= replace_blanks(distractor);
        }
        if replaced {
            report.blanks_replaced += 1;
        }
    }

    report
}

/// Replace `____ing` then `____` with `...`; returns true if anything changed
fn replace_blanks(text: &mut String) -> bool {
    if !text.contains("____") {
        return false;
    }
    *text = text.replace("____ing", "...").replace("____", "...");
    true
}

fn contains_latin(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}
