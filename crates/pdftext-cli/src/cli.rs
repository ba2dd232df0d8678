use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Extract plain text and text statistics from PDF documents.
#[derive(Debug, Parser)]
#[command(name = "pdftext", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Display the page count of a PDF document
    Info {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Extract text from a range of pages
    Extract {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '2-5' or '3'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Do not insert per-page separator blocks
        #[arg(long)]
        no_separators: bool,

        /// Print at most the first 5000 characters
        #[arg(long)]
        preview: bool,

        /// Append the statistics block to the output
        #[arg(long)]
        stats: bool,

        /// Write the extracted text to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Compute statistics over the extracted text
    Stats {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '2-5' or '3'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Do not insert per-page separator blocks
        #[arg(long)]
        no_separators: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for subcommands that can emit JSON.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_info_subcommand() {
        let cli = Cli::parse_from(["pdftext", "info", "test.pdf"]);
        match cli.command {
            Commands::Info { ref file, .. } => {
                assert_eq!(file, &PathBuf::from("test.pdf"));
            }
            _ => panic!("expected Info subcommand"),
        }
    }

    #[test]
    fn info_default_format_is_text() {
        let cli = Cli::parse_from(["pdftext", "info", "test.pdf"]);
        match cli.command {
            Commands::Info { ref format, .. } => {
                assert!(matches!(format, OutputFormat::Text));
            }
            _ => panic!("expected Info subcommand"),
        }
    }

    #[test]
    fn parse_info_with_json_format() {
        let cli = Cli::parse_from(["pdftext", "info", "test.pdf", "--format", "json"]);
        match cli.command {
            Commands::Info { ref format, .. } => {
                assert!(matches!(format, OutputFormat::Json));
            }
            _ => panic!("expected Info subcommand"),
        }
    }

    #[test]
    fn parse_extract_subcommand() {
        let cli = Cli::parse_from(["pdftext", "extract", "test.pdf"]);
        match cli.command {
            Commands::Extract {
                ref file,
                ref pages,
                no_separators,
                preview,
                stats,
                ref output,
                ref format,
            } => {
                assert_eq!(file, &PathBuf::from("test.pdf"));
                assert!(pages.is_none());
                assert!(!no_separators);
                assert!(!preview);
                assert!(!stats);
                assert!(output.is_none());
                assert!(matches!(format, OutputFormat::Text));
            }
            _ => panic!("expected Extract subcommand"),
        }
    }

    #[test]
    fn parse_extract_with_pages() {
        let cli = Cli::parse_from(["pdftext", "extract", "test.pdf", "--pages", "2-5"]);
        match cli.command {
            Commands::Extract { ref pages, .. } => {
                assert_eq!(pages.as_deref(), Some("2-5"));
            }
            _ => panic!("expected Extract subcommand"),
        }
    }

    #[test]
    fn parse_extract_with_no_separators_flag() {
        let cli = Cli::parse_from(["pdftext", "extract", "test.pdf", "--no-separators"]);
        match cli.command {
            Commands::Extract { no_separators, .. } => {
                assert!(no_separators);
            }
            _ => panic!("expected Extract subcommand"),
        }
    }

    #[test]
    fn parse_extract_with_preview_flag() {
        let cli = Cli::parse_from(["pdftext", "extract", "test.pdf", "--preview"]);
        match cli.command {
            Commands::Extract { preview, .. } => {
                assert!(preview);
            }
            _ => panic!("expected Extract subcommand"),
        }
    }

    #[test]
    fn parse_extract_with_output_long_flag() {
        let cli = Cli::parse_from(["pdftext", "extract", "test.pdf", "--output", "out.txt"]);
        match cli.command {
            Commands::Extract { ref output, .. } => {
                assert_eq!(output.as_deref(), Some(std::path::Path::new("out.txt")));
            }
            _ => panic!("expected Extract subcommand"),
        }
    }

    #[test]
    fn parse_extract_with_output_short_flag() {
        let cli = Cli::parse_from(["pdftext", "extract", "test.pdf", "-o", "out.txt"]);
        match cli.command {
            Commands::Extract { ref output, .. } => {
                assert_eq!(output.as_deref(), Some(std::path::Path::new("out.txt")));
            }
            _ => panic!("expected Extract subcommand"),
        }
    }

    #[test]
    fn parse_extract_with_stats_flag() {
        let cli = Cli::parse_from(["pdftext", "extract", "test.pdf", "--stats"]);
        match cli.command {
            Commands::Extract { stats, .. } => {
                assert!(stats);
            }
            _ => panic!("expected Extract subcommand"),
        }
    }

    #[test]
    fn parse_extract_with_json_format() {
        let cli = Cli::parse_from(["pdftext", "extract", "test.pdf", "--format", "json"]);
        match cli.command {
            Commands::Extract { ref format, .. } => {
                assert!(matches!(format, OutputFormat::Json));
            }
            _ => panic!("expected Extract subcommand"),
        }
    }

    #[test]
    fn parse_stats_subcommand() {
        let cli = Cli::parse_from(["pdftext", "stats", "test.pdf"]);
        match cli.command {
            Commands::Stats {
                ref file,
                ref pages,
                no_separators,
                ..
            } => {
                assert_eq!(file, &PathBuf::from("test.pdf"));
                assert!(pages.is_none());
                assert!(!no_separators);
            }
            _ => panic!("expected Stats subcommand"),
        }
    }

    #[test]
    fn stats_default_format_is_text() {
        let cli = Cli::parse_from(["pdftext", "stats", "test.pdf"]);
        match cli.command {
            Commands::Stats { ref format, .. } => {
                assert!(matches!(format, OutputFormat::Text));
            }
            _ => panic!("expected Stats subcommand"),
        }
    }

    #[test]
    fn parse_stats_with_all_options() {
        let cli = Cli::parse_from([
            "pdftext",
            "stats",
            "doc.pdf",
            "--pages",
            "1-3",
            "--no-separators",
            "--format",
            "json",
        ]);
        match cli.command {
            Commands::Stats {
                ref file,
                ref pages,
                no_separators,
                ref format,
            } => {
                assert_eq!(file, &PathBuf::from("doc.pdf"));
                assert_eq!(pages.as_deref(), Some("1-3"));
                assert!(no_separators);
                assert!(matches!(format, OutputFormat::Json));
            }
            _ => panic!("expected Stats subcommand"),
        }
    }

    #[test]
    fn parse_stats_with_single_page() {
        let cli = Cli::parse_from(["pdftext", "stats", "test.pdf", "--pages", "3"]);
        match cli.command {
            Commands::Stats { ref pages, .. } => {
                assert_eq!(pages.as_deref(), Some("3"));
            }
            _ => panic!("expected Stats subcommand"),
        }
    }
}
