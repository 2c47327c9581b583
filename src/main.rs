#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::fs::File;
#[cfg(feature = "std")]
use std::io::{BufRead, BufReader};
#[cfg(feature = "std")]
use std::path::{Path, PathBuf};

#[cfg(feature = "std")]
use clap::Parser;

/// Replay one side of a Battleship match from a ship-placement file and a
/// guesses file, printing the outcome of each guess.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// File of ship placements, one `TYPE X1 Y1 X2 Y2` record per line.
    placements: PathBuf,
    /// File of guesses, one `X Y` record per line.
    guesses: PathBuf,
}

#[cfg(feature = "std")]
fn main() {
    broadside::init_logging();
    let cli = Cli::parse();
    if let Err(err) = replay(&cli) {
        // Fatal errors produce exactly one explanatory line.
        println!("{}", err);
        std::process::exit(1);
    }
}

#[cfg(feature = "std")]
fn replay(cli: &Cli) -> anyhow::Result<()> {
    let placements = read_lines(&cli.placements)?;
    let guesses = read_lines(&cli.guesses)?;
    broadside::run(placements, guesses, |outcome| println!("{}", outcome))
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

#[cfg(feature = "std")]
fn read_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    let file = File::open(path)
        .map_err(|_| anyhow::anyhow!("ERROR: Could not open file: {}", path.display()))?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| anyhow::anyhow!("ERROR: Could not read file: {}: {}", path.display(), e))?;
    Ok(lines)
}
