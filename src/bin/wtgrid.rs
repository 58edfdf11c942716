//! wtgrid CLI - Inspect the table grids of an HTML document

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Write};
#[cfg(feature = "cli")]
use webtable::{HtmlDocument, MatchOptions, TableMatcher, TableSnapshot, TableView};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "wtgrid")]
#[command(version)]
#[command(about = "wtgrid - Print the span-aware grids of HTML tables", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input HTML file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Select the top-level table at this zero-based index
    #[arg(short, long)]
    table: Option<usize>,

    /// Select the first table whose first non-blank cell equals this text
    #[arg(long)]
    starting_with: Option<String>,

    /// Select the first table whose first non-blank cell starts with this text
    #[arg(long)]
    prefix: Option<String>,

    /// Select the first table with this summary attribute
    #[arg(long)]
    summary: Option<String>,

    /// Select the first table with this id attribute
    #[arg(long)]
    id: Option<String>,

    /// Remove rows and columns without visible text before printing
    #[arg(short, long)]
    purge: bool,

    /// Match cell text and summaries without regard to case
    #[arg(short, long)]
    ignore_case: bool,

    /// Print JSON instead of a text grid
    #[arg(long)]
    json: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List the top-level tables of a document
    List {
        /// Input HTML file path
        input: Option<String>,
    },
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Handle subcommands first
    if let Some(Commands::List { input }) = &cli.command {
        let doc = read_document(input.as_deref())?;
        for (index, mut table) in doc.tables().into_iter().enumerate() {
            println!(
                "[{}] {}x{} id={} summary={}",
                index,
                table.row_count(),
                table.column_count(),
                table.id().unwrap_or("-"),
                table.summary().unwrap_or("-"),
            );
        }
        return Ok(());
    }

    let options = MatchOptions::new().with_ignore_case(cli.ignore_case);
    let doc = read_document(cli.input_file.as_deref())?.with_options(options);

    let selection = match selection_criteria(&cli) {
        Some((matcher, criteria)) => match doc.table_matching(matcher, criteria) {
            Some(table) => vec![table],
            None => {
                eprintln!("Error: no table matches {:?} {:?}", matcher, criteria);
                std::process::exit(1);
            }
        },
        None => match cli.table {
            Some(index) => match doc.tables().into_iter().nth(index) {
                Some(table) => vec![table],
                None => {
                    eprintln!("Error: the document has no table at index {}", index);
                    std::process::exit(1);
                }
            },
            None => doc.tables(),
        },
    };

    let snapshots: Vec<TableSnapshot> = selection
        .into_iter()
        .map(|mut table: TableView<'_>| {
            if cli.purge {
                table.purge_empty_cells();
            }
            table.snapshot()
        })
        .collect();

    let result = if cli.json {
        serde_json::to_string_pretty(&snapshots).map_err(io::Error::other)?
    } else {
        snapshots
            .iter()
            .map(|snapshot| snapshot.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    };

    // Output
    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ Output written to: {} ({} table(s))", path, snapshots.len());
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn read_document(path: Option<&str>) -> io::Result<HtmlDocument> {
    let doc = match path {
        Some(path) => HtmlDocument::from_reader(fs::File::open(path)?),
        None => HtmlDocument::from_reader(io::stdin().lock()),
    };
    doc.map_err(io::Error::other)
}

#[cfg(feature = "cli")]
fn selection_criteria(cli: &Cli) -> Option<(TableMatcher, &str)> {
    let criteria = [
        (TableMatcher::FirstNonBlankCell, &cli.starting_with),
        (TableMatcher::FirstNonBlankCellPrefix, &cli.prefix),
        (TableMatcher::Summary, &cli.summary),
        (TableMatcher::Id, &cli.id),
    ];
    criteria
        .into_iter()
        .find_map(|(matcher, value)| value.as_deref().map(|text| (matcher, text)))
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install webtable --features cli");
    eprintln!("  wtgrid [OPTIONS] [INPUT_FILE]");
}
