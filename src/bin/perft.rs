use checkersbot::board::{Board, Color};
use checkersbot::perft::{divide, perft};
use clap::Parser;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "checkers-perft", about = "Count move-tree leaves from the starting position")]
struct Args {
    #[arg(long, default_value_t = 6)]
    depth: u32,
    /// Side to move first: 'w' or 'b'
    #[arg(long, default_value = "w")]
    side: String,
    /// Print per-move counts at the root
    #[arg(long)]
    divide: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let side: Color = a.side.parse().map_err(anyhow::Error::msg)?;
    let board = Board::create();
    if a.divide {
        for (mv, n) in divide(&board, side, a.depth)? { println!("{mv}: {n}"); }
    }
    for d in 1..=a.depth {
        let t = Instant::now();
        let n = perft(&board, side, d)?;
        let dt = t.elapsed().as_secs_f64();
        println!("perft({d}) = {n}  [{:.3}s, {:.0} nps]", dt, if dt > 0.0 { n as f64 / dt } else { 0.0 });
    }
    Ok(())
}
