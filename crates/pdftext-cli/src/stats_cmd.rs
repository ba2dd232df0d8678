use std::path::Path;

use pdftext::{Action, Render};

use crate::cli::OutputFormat;
use crate::shared::{open_session, parse_selection, print_stats, select_pages};

pub fn run(
    file: &Path,
    pages: Option<&str>,
    no_separators: bool,
    format: &OutputFormat,
) -> Result<(), i32> {
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

    match session.apply(Action::Extract) {
        Render::Extracted { empty_pages, .. } => {
            for page in empty_pages {
                eprintln!("Warning: no text found on page {page}");
            }
        }
        Render::NoExtractableText => {
            eprintln!(
                "Warning: this PDF appears to contain no extractable text (possibly scanned)"
            );
            return Ok(());
        }
        Render::Failed(e) => {
            eprintln!("Error: {e}");
            return Err(1);
        }
        _ => {}
    }

    let stats = match session.apply(Action::ToggleStats) {
        Render::Stats(stats) => stats,
        _ => return Ok(()),
    };

    match format {
        OutputFormat::Text => print_stats(&stats),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats).unwrap());
        }
    }

    Ok(())
}
