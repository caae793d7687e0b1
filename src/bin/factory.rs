use anyhow::Result;
use clap::{ArgAction, Parser};
use factory::report::{self, Options};
use std::io::Write as _;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "factory")]
#[command(about = "Fewest button presses to switch off every machine's lights")]
struct Args {
    /// Path to the puzzle input, one machine per line
    input: PathBuf,

    /// Print only the total
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Print one optimal press sequence per machine (ignored with --quiet)
    #[arg(short = 'e', long = "explain", action = ArgAction::SetTrue)]
    explain: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let stime = Instant::now();

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    let report = report::solve_file(
        &args.input,
        Options {
            quiet: args.quiet,
            explain: args.explain,
        },
        &mut out,
    )?;
    out.flush()?;

    eprintln!("!log machines {}", report.presses.len());
    eprintln!("!log total {}", report.total);
    eprintln!("!log time {:.3}", stime.elapsed().as_secs_f64());
    Ok(())
}
