use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use log::debug;

use crate::{highlight, normalize, Options};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JavaScript file to print, standard input if omitted or `-`
    #[arg()]
    file: Option<PathBuf>,
    /// Highlight even if colors are disabled for the terminal
    #[arg(long)]
    force_color: bool,
    /// Print the category of each token instead of highlighting
    #[arg(long)]
    tokens: bool,
}

/// Run the command line interface
///
/// Prints a JavaScript file with syntax highlighting. Exits the process with
/// a non-zero status if the file could not be read.
pub fn cli() {
    match cli_inner() {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn cli_inner() -> Result<(), String> {
    let cli = Cli::parse();

    let source = read_source(cli.file.as_deref())?;
    debug!("read {} bytes", source.len());

    let mut out = String::new();
    if cli.tokens {
        for (category, text) in normalize(&source) {
            out.push_str(&format!("{category}\t{text:?}\n"));
        }
    } else {
        let options = Options {
            force_color: cli.force_color,
        };
        out.push_str(&highlight(&source, &options));
    }

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(out.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| format!("could not write output: {e}"))
}

fn read_source(file: Option<&Path>) -> Result<String, String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| format!("could not open `{}`: {e}", path.display())),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| format!("could not read standard input: {e}"))?;
            Ok(source)
        }
    }
}
