use checkersbot::profile;
use checkersbot::selfplay::{generate_games_with, summarize, write_jsonl, SelfPlayParams};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "checkersbot-selfplay", about = "Play CPU vs CPU games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 20)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value = "Medium")]
    white: String,
    #[arg(long, default_value = "Easy")]
    black: String,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 2)]
    random_opening_plies: usize,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let white = profile::lookup_loose(&a.white)?.name.to_string();
    let black = profile::lookup_loose(&a.black)?.name.to_string();
    let params = SelfPlayParams {
        games: a.games,
        max_plies: a.max_plies,
        white,
        black,
        seed: a.seed,
        random_opening_plies: a.random_opening_plies,
    };
    eprintln!("Playing {} games ({} as White vs {} as Black, seed={})", a.games, params.white, params.black, a.seed);
    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")?);
    let games = generate_games_with(&params, |_| pb.inc(1))?;
    pb.finish_and_clear();
    let (w, b, d) = summarize(&games);
    eprintln!("White {w} / Black {b} / Draw {d}");
    write_jsonl(&games, &a.out)?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}
