use anyhow::Result;
use checkersbot::board::{Board, Color, Move, Notation};
use checkersbot::game::{Game, GameStatus, MoveSelector, PlayerKind, TurnOutcome};
use checkersbot::profile;
use checkersbot::selection::resolve_notation;
use checkersbot::worker::spawn_search;
use clap::Parser;
use indicatif::ProgressBar;
use std::io::{self, Write};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play checkers against the alpha-beta engine", long_about = None)]
struct Args {
    /// AI profile: "Very easy", "Easy", "Medium", "Hard" or "Very hard"
    #[arg(long, default_value = "Medium")]
    profile: String,

    /// Operation mode: 'h' for human vs CPU, 's' for CPU self play
    #[arg(long, default_value = "h")]
    mode: String,

    /// Your color: 'w' for white, 'b' for black (Black moves first)
    #[arg(long, default_value = "b")]
    color: String,

    /// Seed for the engine's clear-thought noise
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many plies and call it a draw
    #[arg(long, default_value_t = 300)]
    max_plies: usize,

    /// Print search timing
    #[arg(long)]
    verbose: bool,
}

struct StdinSelector;

fn print_moves(board: &Board, legal: &[Move]) {
    let names: Vec<String> = legal.iter()
        .filter_map(|m| board.piece_position(m.piece.index).ok().map(|from| Notation { from, mv: m }.to_string()))
        .collect();
    println!("Legal moves: {}", names.join(" "));
}

impl MoveSelector for StdinSelector {
    fn select(&mut self, board: &Board, _color: Color, legal: &[Move]) -> Option<Move> {
        loop {
            print!("Enter your move (e.g. c3-d4, c3xe5xg7), 'moves' or 'resign': ");
            io::stdout().flush().ok()?;
            let mut input = String::new();
            if io::stdin().read_line(&mut input).ok()? == 0 { return None; }
            match input.trim() {
                "resign" | "quit" => return None,
                "moves" => print_moves(board, legal),
                text => match resolve_notation(board, legal, text) {
                    Ok(m) => return Some(m),
                    Err(e) => println!("{e}"),
                },
            }
        }
    }
}

fn cpu_turn(game: &mut Game, seed: Option<u64>, verbose: bool) -> Result<TurnOutcome> {
    let Some(req) = game.cpu_request(seed) else { anyhow::bail!("not a CPU turn") };
    let start = Instant::now();
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("{} ({}) is thinking...", req.player, req.ai_name));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let resp = spawn_search(req).wait()?;
    spinner.finish_and_clear();
    if verbose { println!("search took {:.2}s", start.elapsed().as_secs_f32()); }
    match resp.mv {
        Some(mv) => Ok(game.play(&mv)?),
        None => {
            game.check_stalled();
            Ok(TurnOutcome::Over(game.status()))
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mode = args.mode.chars().next().unwrap_or('h');
    let human_color: Color = args.color.parse().map_err(anyhow::Error::msg)?;
    let ai = profile::lookup_loose(&args.profile)?;
    println!("Opponent: {} (depth {}, clear thought {})", ai.name, ai.max_search_depth, ai.clear_thought);

    let cpu = PlayerKind::Cpu(ai.name.to_string());
    let (black, white) = match (mode, human_color) {
        ('s', _) => (cpu.clone(), cpu),
        (_, Color::Black) => (PlayerKind::Human, cpu),
        (_, Color::White) => (cpu, PlayerKind::Human),
    };
    let mut game = Game::new(black, white)?.with_ply_limit(args.max_plies);
    let mut selector = StdinSelector;
    let mut seed = args.seed;

    loop {
        println!("\n{}'s turn", game.turn());
        println!("{}", game.board());
        let human_turn = matches!(game.player(game.turn()), PlayerKind::Human);
        let outcome = if human_turn {
            game.next_turn(&mut selector)?
        } else if game.check_stalled() {
            TurnOutcome::Over(game.status())
        } else {
            cpu_turn(&mut game, seed, args.verbose)?
        };
        seed = seed.map(|s| s.wrapping_add(1));
        match outcome {
            TurnOutcome::Moved { color, from, mv } => println!("{} plays {}", color, Notation { from, mv: &mv }),
            TurnOutcome::Over(_) => {}
        }
        match game.status() {
            GameStatus::Playing => continue,
            GameStatus::Won(c) => { println!("\n{}\n{} wins!", game.board(), c); break; }
            GameStatus::Draw => { println!("\n{}\nDraw after {} plies.", game.board(), game.plies()); break; }
        }
    }
    Ok(())
}
