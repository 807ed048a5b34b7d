//! AI-vs-AI self-play demo.
//!
//! Usage: `chess_ai [white] [black]` where each difficulty is one of
//! easy, medium, hard (default: medium hard).

use std::env;
use std::process::ExitCode;

use chess_ai::{Difficulty, DrawReason, GameSession, Outcome};

fn parse_difficulty(arg: &str) -> Option<Difficulty> {
    match arg.to_ascii_lowercase().as_str() {
        "easy" => Some(Difficulty::Easy),
        "medium" => Some(Difficulty::Medium),
        "hard" => Some(Difficulty::Hard),
        _ => None,
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let white = args.first().map(String::as_str).unwrap_or("medium");
    let black = args.get(1).map(String::as_str).unwrap_or("hard");

    let (white, black) = match (parse_difficulty(white), parse_difficulty(black)) {
        (Some(w), Some(b)) => (w, b),
        _ => {
            eprintln!("usage: chess_ai [easy|medium|hard] [easy|medium|hard]");
            return ExitCode::FAILURE;
        }
    };

    println!("White: {white}  Black: {black}\n");

    let mut session = GameSession::new(white, black);
    let outcome = match session.play_to_end() {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("engine error: {err}");
            return ExitCode::FAILURE;
        }
    };

    for (i, record) in session.record().iter().enumerate() {
        if i % 2 == 0 {
            print!("{}. {}", i / 2 + 1, record.san);
        } else {
            println!(" {}", record.san);
        }
    }
    if session.record().len() % 2 == 1 {
        println!();
    }

    println!("\n{}\n", session.board());
    match outcome {
        Outcome::Win(color) => println!("Checkmate, {color} wins in {} plies", session.plies()),
        Outcome::Draw(DrawReason::Stalemate) => println!("Draw by stalemate"),
        Outcome::Draw(DrawReason::PlyCap) => println!("Draw, ply cap reached"),
    }

    ExitCode::SUCCESS
}
