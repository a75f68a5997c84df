use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use additive::session::{FAREWELL, Reply, Session};
use clap::Parser;

/// additive is a calculator for integer addition and subtraction with
/// variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads session lines from a file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Does not print the farewell message when the session ends.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let input: Box<dyn BufRead> = match &args.file {
        Some(path) => {
            let file = File::open(path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          path.display());
                std::process::exit(1);
            });
            Box::new(BufReader::new(file))
        },
        None => Box::new(io::stdin().lock()),
    };

    let mut session = Session::new();
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            },
        };
        match session.handle(&line) {
            Reply::Nothing => {},
            Reply::Output(text) => println!("{text}"),
            Reply::Exit => break,
        }
    }

    if !args.quiet {
        println!("{FAREWELL}");
    }
}

/// Installs a stderr logger, only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}
