mod cli;
mod extract_cmd;
mod info_cmd;
mod page_range;
mod shared;
mod stats_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Info {
            ref file,
            ref format,
        } => info_cmd::run(file, format),
        cli::Commands::Extract {
            ref file,
            ref pages,
            no_separators,
            preview,
            stats,
            ref output,
            ref format,
        } => extract_cmd::run(
            file,
            pages.as_deref(),
            no_separators,
            preview,
            stats,
            output.as_deref(),
            format,
        ),
        cli::Commands::Stats {
            ref file,
            ref pages,
            no_separators,
            ref format,
        } => stats_cmd::run(file, pages.as_deref(), no_separators, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
