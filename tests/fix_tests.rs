//! Fix command integration tests - dictionary fixups applied to a store

use frameset::cli::commands;
use frameset::error::FramesetError;
use frameset::store;
use frameset::types::{Block, Frame};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn frame(id: u32, text_en: &str, hint_ru: &str, distractors: &[&str]) -> Frame {
    Frame {
        id,
        block: Block::Core,
        text_en: text_en.to_string(),
        hint_ru: hint_ru.to_string(),
        distractors: distractors.iter().map(|d| (*d).to_string()).collect(),
    }
}

fn fix_fixture(frames: &[Frame], translations: &[(&str, &str)]) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("frames.json");
    let dict_path = dir.path().join("translations.json");

    store::write_frames(&store_path, frames).unwrap();
    let dict: HashMap<&str, &str> = translations.iter().copied().collect();
    fs::write(&dict_path, serde_json::to_string_pretty(&dict).unwrap()).unwrap();

    (dir, store_path, dict_path)
}

#[test]
fn test_fix_applies_dictionary() {
    let (_dir, store_path, dict_path) = fix_fixture(
        &[frame(1, "hello", "hello there", &["hello there", "пока"])],
        &[("hello", "привет")],
    );

    commands::fix(dict_path, store_path.clone(), false).unwrap();

    let frames = store::load_frames(&store_path).unwrap();
    assert_eq!(frames[0].hint_ru, "привет");
    // Distractor that mirrored the old hint follows the correction
    assert_eq!(frames[0].distractors, vec!["привет", "пока"]);
}

#[test]
fn test_fix_replaces_blank_markers() {
    let (_dir, store_path, dict_path) = fix_fixture(
        &[frame(1, "I am ____ing now", "я сейчас ____", &["____"])],
        &[],
    );

    commands::fix(dict_path, store_path.clone(), true).unwrap();

    let frames = store::load_frames(&store_path).unwrap();
    assert_eq!(frames[0].text_en, "I am ... now");
    assert_eq!(frames[0].hint_ru, "я сейчас ...");
    assert_eq!(frames[0].distractors, vec!["..."]);
}

#[test]
fn test_fix_leaves_clean_frames_alone() {
    let original = vec![frame(1, "hello", "привет", &["пока"])];
    let (_dir, store_path, dict_path) = fix_fixture(&original, &[]);

    commands::fix(dict_path, store_path.clone(), false).unwrap();

    let frames = store::load_frames(&store_path).unwrap();
    assert_eq!(frames, original);
}

#[test]
fn test_fix_missing_dictionary_fails() {
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("frames.json");
    store::write_frames(&store_path, &[frame(1, "hello", "привет", &[])]).unwrap();

    let result = commands::fix(dir.path().join("missing.json"), store_path, false);
    assert!(matches!(
        result,
        Err(FramesetError::MalformedRecordStore(_))
    ));
}
