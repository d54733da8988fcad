use crate::core::{apply_fixes, merge_hints, partition_rows};
use crate::error::FramesetResult;
use crate::excel::SheetImporter;
use crate::store;
use crate::types::Frame;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the export command
pub fn export(
    input: PathBuf,
    core_out: PathBuf,
    level2_out: PathBuf,
    verbose: bool,
) -> FramesetResult<()> {
    println!("{}", "📇 Frameset - Exporting frames".bold().green());
    println!("   Spreadsheet: {}", input.display());
    println!();

    if verbose {
        println!("{}", "📖 Reading spreadsheet...".cyan());
    }

    let rows = SheetImporter::new(&input).rows()?;

    if verbose {
        println!("   Read {} data rows", rows.len());
        println!();
    }

    let frames = partition_rows(&rows);

    println!("Core frames: {}", frames.core.len());
    println!("Level 2 frames: {}", frames.level2.len());

    print_sample("Core sample (first)", frames.core.first())?;
    print_sample("Core sample (500th)", frames.core.get(499))?;
    print_sample("Level 2 sample (first)", frames.level2.first())?;

    store::write_frames(&core_out, &frames.core)?;
    store::write_frames(&level2_out, &frames.level2)?;

    println!();
    println!(
        "{}",
        format!(
            "✅ Done! Wrote {} and {}",
            core_out.display(),
            level2_out.display()
        )
        .bold()
        .green()
    );

    Ok(())
}

/// Execute the merge command
pub fn merge(
    input: PathBuf,
    core_path: PathBuf,
    level2_path: PathBuf,
    strict: bool,
    verbose: bool,
) -> FramesetResult<()> {
    println!("{}", "🔀 Frameset - Merging translations".bold().green());
    println!("   Spreadsheet: {}", input.display());
    println!("   Stores: {} / {}", core_path.display(), level2_path.display());
    println!();

    if verbose {
        println!("{}", "📖 Loading frame stores...".cyan());
    }

    let mut core = store::load_frames(&core_path)?;
    let mut level2 = store::load_frames(&level2_path)?;

    if verbose {
        println!("   {} Core frames, {} Level 2 frames", core.len(), level2.len());
        println!("{}", "📖 Reading spreadsheet...".cyan());
    }

    let rows = SheetImporter::new(&input).rows()?;

    if verbose {
        println!("   Read {} data rows", rows.len());
        println!();
    }

    let report = merge_hints(&rows, &mut core, &mut level2, strict)?;

    store::write_frames(&core_path, &core)?;
    store::write_frames(&level2_path, &level2)?;

    println!(
        "Fixed {} Core frames and {} Level 2 frames using valid translations.",
        report.core_updated, report.level2_updated
    );

    Ok(())
}

/// Execute the fix command
pub fn fix(translations_path: PathBuf, core_path: PathBuf, verbose: bool) -> FramesetResult<()> {
    println!("{}", "🔧 Frameset - Applying dictionary fixups".bold().green());
    println!("   Dictionary: {}", translations_path.display());
    println!("   Store: {}", core_path.display());
    println!();

    let translations = store::load_translations(&translations_path)?;
    let mut frames = store::load_frames(&core_path)?;

    if verbose {
        println!(
            "   {} dictionary entries, {} frames",
            translations.len(),
            frames.len()
        );
        println!();
    }

    let report = apply_fixes(&mut frames, &translations);

    for text_en in &report.still_english {
        println!("{} {}", "⚠️  Still has English:".yellow(), text_en);
    }

    store::write_frames(&core_path, &frames)?;

    println!(
        "Translated {} hints, cleaned blanks in {} frames.",
        report.translated, report.blanks_replaced
    );
    println!("{}", "✅ Store updated".bold().green());

    Ok(())
}

fn print_sample(label: &str, frame: Option<&Frame>) -> FramesetResult<()> {
    let Some(frame) = frame else {
        return Ok(());
    };
    println!();
    println!("{}:", label.bright_blue().bold());
    println!("{}", serde_json::to_string_pretty(frame)?);
    Ok(())
}
