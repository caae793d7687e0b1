use anyhow::ensure;
use clap::Parser;
use factory::puzzlegen::random::{self, Params};
use std::fs;
use std::io::Write;

#[derive(Parser)]
struct Cli {
    /// Number of machines.
    #[clap(long, short = 'n', default_value_t = 10)]
    n_machines: usize,
    /// Lights per machine.
    #[clap(long, short = 'l', default_value_t = 6)]
    lights: usize,
    /// Buttons per machine.
    #[clap(long, short = 'b', default_value_t = 5)]
    buttons: usize,
    /// Random presses used to scramble each machine.
    #[clap(long, short = 'p', default_value_t = 4)]
    presses: usize,
    #[clap(long, short = 's')]
    seed: Option<u64>,
    /// Path to output file. If not provided, outputs to stdout.
    #[clap(long, short = 'o', default_value = "")]
    output: String,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    ensure!(args.lights > 0, "--lights must be at least 1");
    let params = Params {
        lights: args.lights,
        buttons: args.buttons,
        presses: args.presses,
    };
    let machines = random::generate(args.n_machines, &params, args.seed);

    let mut w: Box<dyn Write> = if args.output.is_empty() {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    } else {
        Box::new(std::io::BufWriter::new(fs::File::create(&args.output)?))
    };
    for m in &machines {
        writeln!(w, "{}", m)?;
    }
    w.flush()?;
    eprintln!("!log machines {}", machines.len());
    Ok(())
}
