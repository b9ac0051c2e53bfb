use std::error::Error;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use jsontidy::JsonTidyError;

/// Single-pass JSON reindenter.
///
/// jtidy rewrites JSON-like text into a fixed 4-space-indented layout
/// without parsing it, so malformed input is rendered best-effort rather
/// than rejected. Reads stdin when no argument is given.
#[derive(Parser, Debug)]
#[command(name = "jtidy")]
#[command(version, about, long_about = None)]
struct Args {
    /// Literal JSON text to format. If not specified, reads from stdin.
    #[arg(value_name = "JSON")]
    json: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("jtidy: {}", e);
        let code = match e.downcast_ref::<JsonTidyError>() {
            Some(JsonTidyError::OutOfMemory) => 2,
            _ => 1,
        };
        process::exit(code);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let input = match args.json {
        Some(text) => text.into_bytes(),
        None => read_stdin()?,
    };

    let output = jsontidy::reformat_bytes(&input)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.write_all(b"\n")?;

    Ok(())
}

/// Slurps stdin to EOF as raw bytes, so non-UTF8 input passes through.
fn read_stdin() -> Result<Vec<u8>, Box<dyn Error>> {
    let mut input: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 4096];
    let mut stdin = io::stdin().lock();
    loop {
        let n = match stdin.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        input.try_reserve(n).map_err(JsonTidyError::from)?;
        input.extend_from_slice(&chunk[..n]);
    }
    Ok(input)
}
