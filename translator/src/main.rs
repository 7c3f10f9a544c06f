//! tsv-translator CLI - filter and rename a tab-separated table
//!
//! ```bash
//! tsv-translator rowmap.tsv colmap.tsv input.tsv translated.tsv
//! ```
//!
//! Any other number of arguments prints the usage line and exits cleanly.

use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::iter;
use std::path::PathBuf;
use tsv_translator::{logging, translate_files, TranslateOptions};

const ARG_COUNT: usize = 4;

#[derive(Parser)]
#[command(name = "tsv-translator")]
#[command(about = "Filter and rename the rows and columns of a TSV file", long_about = None)]
#[command(disable_help_flag = true)]
struct Cli {
    /// Row mapping file (key<TAB>label)
    #[arg(value_name = "ROW_MAP")]
    row_map: PathBuf,

    /// Column mapping file (header<TAB>label)
    #[arg(value_name = "COLUMN_MAP")]
    column_map: PathBuf,

    /// Input TSV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output TSV file (created or overwritten)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

impl From<Cli> for TranslateOptions {
    fn from(cli: Cli) -> Self {
        TranslateOptions::new(cli.row_map, cli.column_map, cli.input, cli.output)
    }
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let mut args = std::env::args_os();
    if args.len() != ARG_COUNT + 1 {
        println!("{}", Cli::command().render_usage());
        return;
    }

    logging::init();

    // Every argument is a path, including ones that look like flags or `--`.
    let bin = args.next().unwrap_or_default();
    let cli = Cli::parse_from(
        iter::once(bin)
            .chain(iter::once(OsString::from("--")))
            .chain(args),
    );
    let options = TranslateOptions::from(cli);

    if let Err(e) = translate_files(&options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
