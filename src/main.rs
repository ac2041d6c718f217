//! Console front end for the caro engine
//!
//! All text parsing and rendering lives here; the library itself neither
//! reads input nor prints. Run interactively (human vs AI) or with
//! `--selfplay N` for an AI-vs-AI tally.

use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use caro::engine::{DEFAULT_DEPTH, DEFAULT_TIME_MS};
use caro::{Board, Engine, Mark, Pos, DEFAULT_SIZE};

#[derive(Parser, Debug)]
#[command(name = "caro", about = "Connect four in a row on an N x N board")]
struct Args {
    /// Board size (N x N)
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Maximum search depth
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    /// Per-move time budget in milliseconds (0 = unlimited)
    #[arg(long, default_value_t = DEFAULT_TIME_MS)]
    time_ms: u64,

    /// AI plays X and moves first
    #[arg(long)]
    ai_first: bool,

    /// Randomize the AI's opening move for variety
    #[arg(long)]
    random_opening: bool,

    /// Play N AI-vs-AI games and report the tally
    #[arg(long, default_value_t = 0)]
    selfplay: u32,
}

#[derive(Debug, Error)]
enum InputError {
    #[error("expected two integers: `row col`")]
    Format,
    #[error("({0}, {1}) is outside the board or already taken")]
    Invalid(usize, usize),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.selfplay > 0 {
        run_selfplay(&args)?;
    } else {
        run_interactive(&args)?;
    }
    Ok(())
}

fn draw_board(board: &Board) {
    let n = board.size();
    print!("  ");
    for c in 0..n {
        print!("{} ", c % 10);
    }
    println!();
    for r in 0..n {
        print!("{} ", r % 10);
        for c in 0..n {
            print!("{} ", board.get(Pos::new(r as u8, c as u8)));
        }
        println!();
    }
}

/// Parse a `row col` pair and validate it against the board.
fn parse_move(line: &str, board: &Board) -> Result<Pos, InputError> {
    let mut parts = line.split_whitespace();
    let row: usize = parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or(InputError::Format)?;
    let col: usize = parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or(InputError::Format)?;
    if parts.next().is_some() {
        return Err(InputError::Format);
    }

    if row >= board.size() || col >= board.size() {
        return Err(InputError::Invalid(row, col));
    }
    let pos = Pos::new(row as u8, col as u8);
    if !board.is_valid_move(pos) {
        return Err(InputError::Invalid(row, col));
    }
    Ok(pos)
}

/// Prompt until the human enters a valid move.
fn read_move(board: &Board) -> io::Result<Pos> {
    let stdin = io::stdin();
    loop {
        print!("Your move (row col): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        match parse_move(&line, board) {
            Ok(pos) => return Ok(pos),
            Err(e) => println!("{e}. Try again."),
        }
    }
}

/// A random empty cell, for opening variety.
fn random_opening(board: &Board, rng: &mut SmallRng) -> Option<Pos> {
    board.empty_cells().choose(rng)
}

fn announce(board: &Board, human: Mark) {
    draw_board(board);
    if board.has_four_in_a_row(human) {
        println!("You win!");
    } else if board.has_four_in_a_row(human.opponent()) {
        println!("The AI wins. Better luck next time!");
    } else {
        println!("It's a draw!");
    }
}

fn run_interactive(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = Board::new(args.size)?;
    let mut engine = Engine::with_config(args.depth, args.time_ms);
    let mut rng = SmallRng::from_entropy();

    let ai = if args.ai_first { Mark::X } else { Mark::O };
    let human = ai.opponent();
    let mut to_move = Mark::X;

    loop {
        if to_move == human {
            draw_board(&board);
            let pos = read_move(&board)?;
            let applied = board.apply_move(pos, human);
            debug_assert!(applied);
        } else {
            println!("AI is thinking...");
            let chosen = if board.is_empty() && args.random_opening {
                random_opening(&board, &mut rng)
            } else {
                engine.find_best_move(&mut board, ai)
            };
            let Some(pos) = chosen else {
                break; // no legal moves: the board is full
            };
            let applied = board.apply_move(pos, ai);
            debug_assert!(applied);
            println!("AI plays {} {}", pos.row, pos.col);
        }

        if board.has_four_in_a_row(to_move) || board.is_full() {
            break;
        }
        to_move = to_move.opponent();
    }

    announce(&board, human);
    Ok(())
}

fn run_selfplay(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = SmallRng::from_entropy();
    let mut x_wins = 0u32;
    let mut o_wins = 0u32;
    let mut draws = 0u32;

    for game in 1..=args.selfplay {
        let mut board = Board::new(args.size)?;
        // Fresh engines per game: one cache session each.
        let mut engine_x = Engine::with_config(args.depth, args.time_ms);
        let mut engine_o = Engine::with_config(args.depth, args.time_ms);
        let mut to_move = Mark::X;

        loop {
            let chosen = if board.is_empty() && args.random_opening {
                random_opening(&board, &mut rng)
            } else {
                let engine = if to_move == Mark::X {
                    &mut engine_x
                } else {
                    &mut engine_o
                };
                engine.find_best_move(&mut board, to_move)
            };
            let Some(pos) = chosen else {
                break;
            };
            let applied = board.apply_move(pos, to_move);
            debug_assert!(applied);

            if board.has_four_in_a_row(to_move) || board.is_full() {
                break;
            }
            to_move = to_move.opponent();
        }

        if board.has_four_in_a_row(Mark::X) {
            x_wins += 1;
            println!("Game {game}: X wins");
        } else if board.has_four_in_a_row(Mark::O) {
            o_wins += 1;
            println!("Game {game}: O wins");
        } else {
            draws += 1;
            println!("Game {game}: draw");
        }
    }

    println!("X wins: {x_wins}");
    println!("O wins: {o_wins}");
    println!("Draws:  {draws}");
    Ok(())
}
