use std::path::Path;

use pdftext::{Action, Render, Session, TextStats};

use crate::page_range::parse_page_range;

/// Read a PDF file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not
/// found or cannot be read.
pub fn read_pdf_bytes(file: &Path) -> Result<Vec<u8>, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    std::fs::read(file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })
}

/// Read a PDF file and start a session with it loaded.
pub fn open_session(file: &Path) -> Result<Session, i32> {
    let bytes = read_pdf_bytes(file)?;
    let mut session = Session::new();
    if let Render::Failed(e) = session.apply(Action::Upload(bytes)) {
        eprintln!("Error: {e}");
        return Err(1);
    }
    Ok(session)
}

/// Parse a `--pages` range string, before any file is opened.
pub fn parse_selection(pages: &str) -> Result<(u32, u32), i32> {
    parse_page_range(pages).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })
}

/// Apply a parsed page selection to a loaded session.
pub fn select_pages(session: &mut Session, start: u32, end: u32) -> Result<(), i32> {
    if let Render::Failed(e) = session.apply(Action::SelectRange { start, end }) {
        eprintln!("Error: {e}");
        return Err(1);
    }
    Ok(())
}

/// Print the statistics block in its text form.
pub fn print_stats(stats: &TextStats) {
    println!("Characters: {}", stats.char_count);
    println!("Words: {}", stats.word_count);
    println!("Estimated pages: {}", stats.page_count_estimate);

    println!();
    if stats.top_words.is_empty() {
        println!("No words found after filtering stopwords.");
    } else {
        println!("Word\tFrequency");
        for (word, count) in &stats.top_words {
            println!("{word}\t{count}");
        }
    }
}
