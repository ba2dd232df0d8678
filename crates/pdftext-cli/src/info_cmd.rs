use std::path::Path;

use crate::cli::OutputFormat;
use crate::shared::open_session;

pub fn run(file: &Path, format: &OutputFormat) -> Result<(), i32> {
    let session = open_session(file)?;
    let page_count = session.total_pages();

    match format {
        OutputFormat::Text => {
            println!("Pages: {page_count}");
        }
        OutputFormat::Json => {
            let output = serde_json::json!({ "pages": page_count });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
    }

    Ok(())
}
