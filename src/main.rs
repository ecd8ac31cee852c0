use clap::Parser;
use sqlfocus::*;
use std::{io::Read as _, path::PathBuf, process::ExitCode};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Print the SQL statement under a cursor line.
#[derive(Debug, Parser)]
#[command(name = "sqlfocus", version, about)]
struct Args {
    /// SQL file to read; stdin when omitted
    file: Option<PathBuf>,

    /// Cursor line (0-based)
    #[arg(short, long)]
    line: usize,

    /// Cursor column (0-based)
    #[arg(short, long, default_value_t = 0)]
    column: usize,

    /// Print only the `[start, end)` line range
    #[arg(long)]
    range_only: bool,
}

fn main() -> ExitCode {
    let config = config();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse(), config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("sqlfocus: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, config: &Config) -> Result {
    let sql = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut sql = String::new();
            std::io::stdin().read_to_string(&mut sql)?;
            sql
        }
    };
    debug!("Loaded {} byte(s) of SQL", sql.len());

    let mut surface = MemorySurface::new(&sql);
    surface.set_cursor(CursorPosition::new(args.line, args.column));
    // The surface clamps the caret; bounds are checked against the raw line.
    let len = surface.lines().len();
    if args.line >= len {
        return Err(Error::InvalidArgument {
            line: args.line,
            len,
        });
    }

    let mut editor = Editor::new(surface, &config.editor());
    if args.range_only {
        println!("{}", editor.focus_selection()?);
    } else {
        println!("{}", editor.focused_statement()?);
    }
    Ok(())
}
