use clap::{Parser, Subcommand};
use frameset::cli;
use frameset::error::FramesetResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "frameset")]
#[command(about = "Flashcard dataset pipeline: spreadsheet export, translation merge, dictionary fixups")]
#[command(long_about = "Frameset - Flashcard dataset pipeline

Converts a flashcard spreadsheet into two JSON datasets and keeps them
in sync with later spreadsheet corrections.

COMMANDS:
  export  - Spreadsheet (.xlsx) to Core + Level 2 JSON stores
  merge   - Refresh Russian hints from an updated spreadsheet
  fix     - Apply a translations dictionary and strip blank markers

EXAMPLES:
  frameset export baza.xlsx
  frameset merge baza.xlsx --strict
  frameset fix translations.json --core frames.json")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Export the flashcard spreadsheet to two JSON stores.

Reads the first worksheet, skips the header row, and partitions data rows
by position: rows 0..500 become Core frames (IDs 1..=500), later rows
become Level 2 frames (IDs 1000..). Rows missing the English text or the
Russian hint are dropped silently but still occupy their index slot, so
IDs never shift.

COLUMN LAYOUT:
  A = English text | B = Russian hint | C..H = up to six distractors

Both output files are overwritten unconditionally.")]
    /// Export spreadsheet to Core + Level 2 JSON stores
    Export {
        /// Path to the flashcard spreadsheet (.xlsx)
        input: PathBuf,

        /// Output path for the Core store
        #[arg(long, default_value = "frames.json")]
        core: PathBuf,

        /// Output path for the Level 2 store
        #[arg(long, default_value = "frames2.json")]
        level2: PathBuf,

        /// Show verbose progress
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Merge corrected Russian hints into existing JSON stores.

Reads the updated spreadsheet and refreshes hint_ru wherever the sheet
holds a usable translation: non-empty and not containing the placeholder
marker 'уточнить' (case-insensitive). Rows map to frames by position
through the same 500-row split used at export time; rows beyond either
store are ignored, so merging never adds frames.

IMPORTANT: The spreadsheet must have the same row order and count as the
one used for the export. Pass --strict to verify the English text of each
row against the frame it maps to and fail loudly on the first mismatch
instead of silently misapplying updates.")]
    /// Refresh hint_ru in both stores from an updated spreadsheet
    Merge {
        /// Path to the updated spreadsheet (.xlsx)
        input: PathBuf,

        /// Path to the Core store
        #[arg(long, default_value = "frames.json")]
        core: PathBuf,

        /// Path to the Level 2 store
        #[arg(long, default_value = "frames2.json")]
        level2: PathBuf,

        /// Verify row/frame alignment by English text and abort on mismatch
        #[arg(long)]
        strict: bool,

        /// Show verbose progress
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Apply a translations dictionary to a frame store.

The dictionary is a JSON object mapping English text to corrected Russian
hints. For each matching frame the hint is replaced and any distractor
equal to the old hint is rewritten to the new one. Blank markers
('____ing', '____') are replaced with '...' in every text field. Frames
whose hint still contains Latin letters afterwards are reported.")]
    /// Apply a translations dictionary and strip blank markers
    Fix {
        /// Path to the translations dictionary (JSON object)
        translations: PathBuf,

        /// Path to the frame store to fix in place
        #[arg(long, default_value = "frames.json")]
        core: PathBuf,

        /// Show verbose progress
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> FramesetResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            input,
            core,
            level2,
            verbose,
        } => cli::export(input, core, level2, verbose),

        Commands::Merge {
            input,
            core,
            level2,
            strict,
            verbose,
        } => cli::merge(input, core, level2, strict, verbose),

        Commands::Fix {
            translations,
            core,
            verbose,
        } => cli::fix(translations, core, verbose),
    }
}
