use checkersbot::protocol::WorkerLoop;
use clap::Parser;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "checkers-worker", about = "Answer JSON move requests on stdin, one per line")]
struct Args {}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let _ = Args::parse();
    let stdout = io::stdout();
    let mut lp = WorkerLoop::new(stdout.lock());
    lp.run_loop(io::stdin().lock())?;
    Ok(())
}
