use clap::Parser;
use cminus::config::ListingFlags;
use cminus::errors::CmResult;
use cminus::frontend::lexer::scan;
use cminus::listing::write_scan_listing;
use cminus::{read, LineNumber};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "C-Minus compiler front end",
    long_about = "C-Minus compiler front end.\n\
                 Scans a C-Minus source file and writes the compilation listing.\n\
                 \n\
                 Example usage:\n\
                 cminus input.cm                    # Trace tokens to stdout\n\
                 cminus input.cm -o input.lst       # Write the listing to a file\n\
                 cminus input.cm --echo-source      # Interleave numbered source lines\n\
                 cminus input.cm --verbose          # Log compilation phases"
)]
struct Cli {
    // The path to the file to compile
    path: PathBuf,

    // Listing file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    // Echo numbered source lines into the listing
    #[arg(long)]
    echo_source: bool,

    // Do not trace scanned tokens
    #[arg(long)]
    no_trace_scan: bool,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn listing_flags(&self) -> ListingFlags {
        ListingFlags {
            echo_source: self.echo_source,
            trace_scan: !self.no_trace_scan,
        }
    }
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn open_listing(output: &Option<PathBuf>) -> CmResult<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn compile(args: &Cli) -> CmResult<()> {
    let start_time = Instant::now();
    let flags = args.listing_flags();
    info!(path = %args.path.display(), "starting compilation");

    let source = read(&args.path)?;
    debug!(bytes = source.len(), "read source file");

    let mut state = LineNumber::default();
    let tokens = scan(&mut state, &source)?;
    info!(
        tokens = tokens.len(),
        lines = state.line,
        elapsed = start_time.elapsed().as_secs_f64(),
        "lexical analysis completed"
    );

    let mut listing = open_listing(&args.output)?;
    writeln!(listing, "\nC-MINUS COMPILATION: {}", args.path.display())?;
    if flags.trace_scan {
        write_scan_listing(&mut *listing, &source, &tokens, flags.echo_source)?;
    } else if flags.echo_source {
        write_scan_listing(&mut *listing, &source, &[], true)?;
    }
    listing.flush()?;

    info!(elapsed = start_time.elapsed().as_secs_f64(), "compilation completed");
    Ok(())
}

fn main() {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    if let Err(e) = compile(&args) {
        fatal(&format!("Compilation failed: {}", e));
    }
}
