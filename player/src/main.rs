use std::io::{self, BufRead, Write};
use std::num::NonZero;

use clap::Parser;

use lightemall::{BoardBuilder, Direction, Location};

/// Play Light 'Em All in the terminal.
///
/// Commands: `r ROW COL` rotates a tile, `up`/`down`/`left`/`right` moves the power station, `q` quits.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Board width in tiles
    #[arg(long, default_value = "5")]
    width: NonZero<usize>,

    /// Board height in tiles
    #[arg(long, default_value = "5")]
    height: NonZero<usize>,

    /// Seed for a reproducible board
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let mut builder = BoardBuilder::with_dims((cli.width, cli.height));
    if let Some(seed) = cli.seed {
        builder.seed(seed);
    }
    let mut board = match builder.build() {
        Ok(board) => board,
        Err(reasons) => {
            eprintln!("cannot build board: {:?}", reasons);
            std::process::exit(2);
        }
    };

    let mut out = io::stdout().lock();
    write!(out, "{}\n{}", board, board.power_map())?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let words = line.split_whitespace().collect::<Vec<_>>();

        match words.as_slice() {
            ["q"] => break,
            ["r", row, col] => match (row.parse(), col.parse()) {
                (Ok(row), Ok(col)) => {
                    if let Err(error) = board.rotate_tile_at(Location::new(row, col)) {
                        writeln!(out, "{}", error)?;
                    }
                }
                _ => writeln!(out, "usage: r ROW COL")?,
            },
            [word] => match word.parse::<Direction>() {
                Ok(direction) => {
                    if !board.move_power_station(direction) {
                        writeln!(out, "no wire leads {}", direction)?;
                    }
                }
                Err(_) => writeln!(out, "unknown command {:?}", word)?,
            },
            [] => continue,
            _ => writeln!(out, "unknown command {:?}", line)?,
        }

        write!(out, "{}\n{}", board, board.power_map())?;
        if board.is_won() {
            writeln!(out, "You win!")?;
        }
        out.flush()?;
    }

    Ok(())
}
