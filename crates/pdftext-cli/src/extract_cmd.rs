use std::fs;
use std::path::Path;

use pdftext::{Action, Render, TextStats};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::shared::{open_session, parse_selection, print_stats, select_pages};

pub fn run(
    file: &Path,
    pages: Option<&str>,
    no_separators: bool,
    preview: bool,
    with_stats: bool,
    output: Option<&Path>,
    format: &OutputFormat,
) -> Result<(), i32> {
    // Reject malformed selections before touching the file.
    let selection = match pages {
        Some(spec) => Some(parse_selection(spec)?),
        None => None,
    };

    let mut session = open_session(file)?;
    if let Some((start, end)) = selection {
        select_pages(&mut session, start, end)?;
    }
    if no_separators {
        session.apply(Action::ToggleSeparators);
    }

    let (start, end, empty_pages) = match session.apply(Action::Extract) {
        Render::Extracted {
            start,
            end,
            empty_pages,
        } => (start, end, empty_pages),
        Render::NoExtractableText => {
            // A warning, not a failure.
            eprintln!(
                "Warning: this PDF appears to contain no extractable text (possibly scanned)"
            );
            return Ok(());
        }
        Render::Failed(e) => {
            eprintln!("Error: {e}");
            return Err(1);
        }
        _ => return Ok(()),
    };

    for &page in &empty_pages {
        eprintln!("Warning: no text found on page {page}");
    }

    let stats: Option<TextStats> = if with_stats {
        match session.apply(Action::ToggleStats) {
            Render::Stats(stats) => Some(stats),
            _ => None,
        }
    } else {
        None
    };

    let Some(extraction) = session.extraction() else {
        return Ok(());
    };

    // With -o the text goes to the file, so stdout only carries the
    // statistics block (or the JSON report without its `text` field).
    let wrote_file = if let Some(path) = output {
        let download = extraction.download();
        fs::write(path, download.bytes).map_err(|e| {
            eprintln!("Error writing {}: {e}", path.display());
            1
        })?;
        eprintln!("Wrote {}", path.display());
        true
    } else {
        false
    };

    match format {
        OutputFormat::Text => {
            if !wrote_file {
                if preview {
                    println!("{}", extraction.preview());
                } else {
                    println!("{}", extraction.text);
                }
                if stats.is_some() {
                    println!();
                }
            }
            if let Some(stats) = &stats {
                print_stats(stats);
            }
        }
        OutputFormat::Json => {
            let mut report = json!({
                "pages": { "start": start, "end": end },
                "empty_pages": empty_pages,
            });
            if !wrote_file {
                let text = if preview {
                    extraction.preview()
                } else {
                    extraction.text.clone()
                };
                report["text"] = json!(text);
            }
            if let Some(stats) = &stats {
                report["stats"] = serde_json::to_value(stats).unwrap();
            }
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
    }

    Ok(())
}
