use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const CHUNK_SIZE: usize = 256;
const CHUNKS_PER_PAGE: usize = 20;

/// Print files to stdout, pausing for Enter after every page of output.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Files to print, in order.
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut failed = false;

    for path in &args.files {
        if let Err(err) = print_file(path) {
            println!("failed to read {:?}: {err}", path);
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Stream one file to stdout in 256-byte chunks, waiting for Enter after
/// every 20 chunks read.
fn print_file(path: &Path) -> io::Result<()> {
    let mut file = File::open(path)?;
    let mut stdout = io::stdout().lock();
    let mut buf = [0u8; CHUNK_SIZE];
    let mut chunks = 0;

    loop {
        if chunks == CHUNKS_PER_PAGE {
            wait_for_enter(&mut stdout)?;
            chunks = 0;
        }

        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        stdout.write_all(&buf[..n])?;
        chunks += 1;
    }

    Ok(())
}

fn wait_for_enter(stdout: &mut impl Write) -> io::Result<()> {
    write!(stdout, "waiting for enter")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
